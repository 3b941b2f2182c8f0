use strum::{Display, EnumIter, EnumString};

use crate::line::error::LineError;
use crate::line::registry::Registry;
use crate::line::station::Station;
use crate::line::traversal::{Direction, Traversal};

/// The topology a line is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum LineKind {
    Linear,
    Circular,
}

/// Shared station-lookup and traversal contract of every line topology.
///
/// Implementors provide the structural operations; lookup and flag
/// mutation come for free from the embedded [`Registry`].
pub trait Line {
    fn name(&self) -> &str;

    fn kind(&self) -> LineKind;

    fn registry(&self) -> &Registry;

    fn registry_mut(&mut self) -> &mut Registry;

    /// Inserts a station at the topology-appropriate position.
    fn add_station(&mut self, name: &str) -> Result<(), LineError>;

    /// Removes a station, relinking its neighbours.
    fn remove_station(&mut self, name: &str) -> Result<(), LineError>;

    /// Walks from `start` following forward links, `start` first.
    fn iter_forward(&self, start: &str) -> Result<Traversal<'_>, LineError>;

    /// Walks from `start` following backward links, `start` first.
    fn iter_backward(&self, start: &str) -> Result<Traversal<'_>, LineError>;

    /// Every station of the line in forward order, from its head.
    fn stations(&self) -> Traversal<'_>;

    fn iter(&self, start: &str, direction: Direction) -> Result<Traversal<'_>, LineError> {
        match direction {
            Direction::Forward => self.iter_forward(start),
            Direction::Backward => self.iter_backward(start),
        }
    }

    #[inline]
    fn has_station(&self, name: &str) -> bool {
        self.registry().has_station(name)
    }

    #[inline]
    fn get(&self, name: &str) -> Result<&Station, LineError> {
        self.registry().get(name)
    }

    fn mark_negative(&mut self, name: &str, flag: bool) -> Result<(), LineError> {
        self.registry_mut().mark_negative(name, flag)
    }

    /// Adds each name in order. Stops at, and reports, the first failure;
    /// stations added before it stay on the line.
    fn add_stations<I, S>(&mut self, names: I) -> Result<(), LineError>
    where
        Self: Sized,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_for_each(|name| self.add_station(name.as_ref()))
    }

    #[inline]
    fn len(&self) -> usize {
        self.registry().len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }
}
