use std::fmt::{Display, Formatter};

/// Stable handle to a station slot inside a line's registry.
///
/// Handles stay valid for as long as the station lives on the line,
/// and are recycled once it is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationIx(pub(crate) usize);

impl StationIx {
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named stop on a line.
///
/// The `negative` flag is the only state shared between mutating a line
/// and planning on it. It never changes the topology, only whether the
/// station may appear on a planned route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Station {
    pub(crate) name: String,
    pub(crate) negative: bool,

    pub(crate) prev: Option<StationIx>,
    pub(crate) next: Option<StationIx>,
}

impl Station {
    pub(crate) fn new(name: String) -> Self {
        Station {
            name,
            negative: false,
            prev: None,
            next: None,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// The station reached by following the forward link, if any.
    #[inline]
    pub fn next(&self) -> Option<StationIx> {
        self.next
    }

    /// The station reached by following the backward link, if any.
    #[inline]
    pub fn prev(&self) -> Option<StationIx> {
        self.prev
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.negative {
            write!(f, "{}(NEG)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}
