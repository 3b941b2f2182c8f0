//! Route planning on a single line.
//!
//! [`RoutePlanner`] validates the endpoints and hands the walk to the
//! line's [`Routable`] strategy: a linear line takes whichever direction
//! reaches the end, a circular line the shorter of both.

pub mod definition;
pub mod error;
pub mod implementation;
pub mod plan;
pub mod route;


#[doc(inline)]
pub use definition::Routable;
#[doc(inline)]
pub use error::PlanError;
#[doc(inline)]
pub use plan::RoutePlanner;
#[doc(inline)]
pub use route::Route;
