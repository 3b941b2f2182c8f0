/// Converts errors from their error type (of the submodule) to that of
/// a `lineroute::Error` variant.
///
/// ```rust,ignore
/// use lineroute::line::LineError;
/// lineroute::impl_err!(LineError, Line);
/// ```
#[macro_export]
macro_rules! impl_err {
    ($from:ty, $variant:ident) => {
        impl From<$from> for $crate::Error {
            fn from(value: $from) -> Self {
                $crate::Error::$variant(value)
            }
        }
    };
}
