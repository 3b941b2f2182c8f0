//! Named lines of ordered stations.
//!
//! Both topologies keep their stations in a [`Registry`] arena and link
//! them by [`StationIx`] handles. A [`LinearLine`] is an open chain with
//! a first and last stop, a [`CircularLine`] a ring with no ends.

pub mod circular;
pub mod definition;
pub mod error;
pub mod linear;
pub mod registry;
pub mod station;
pub mod traversal;
pub mod variant;

#[cfg(test)]
mod test;

#[doc(inline)]
pub use circular::CircularLine;
#[doc(inline)]
pub use definition::{Line, LineKind};
#[doc(inline)]
pub use error::LineError;
#[doc(inline)]
pub use linear::LinearLine;
#[doc(inline)]
pub use registry::Registry;
#[doc(inline)]
pub use station::{Station, StationIx};
#[doc(inline)]
pub use traversal::{Bound, Direction, Traversal};
#[doc(inline)]
pub use variant::LineVariant;
