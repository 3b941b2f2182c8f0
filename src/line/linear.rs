use log::trace;

use crate::line::definition::{Line, LineKind};
use crate::line::error::LineError;
use crate::line::registry::Registry;
use crate::line::station::StationIx;
use crate::line::traversal::{Bound, Direction, Traversal};

/// An open, doubly linked sequence of stations with a first and last stop.
#[derive(Clone, Debug)]
pub struct LinearLine {
    name: String,
    registry: Registry,

    head: Option<StationIx>,
    tail: Option<StationIx>,
}

impl LinearLine {
    pub fn new(name: impl Into<String>) -> Self {
        LinearLine {
            name: name.into(),
            registry: Registry::new(),
            head: None,
            tail: None,
        }
    }

    /// The first station, where backward traversals end.
    pub fn first(&self) -> Option<&str> {
        self.head
            .and_then(|ix| self.registry.station(ix))
            .map(|station| station.name())
    }

    /// The last station, where forward traversals end.
    pub fn last(&self) -> Option<&str> {
        self.tail
            .and_then(|ix| self.registry.station(ix))
            .map(|station| station.name())
    }

    fn traverse(&self, start: &str, direction: Direction) -> Result<Traversal<'_>, LineError> {
        let ix = self.registry.index_of(start)?;
        Ok(Traversal::new(&self.registry, ix, direction, Bound::Open))
    }
}

impl Line for LinearLine {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> LineKind {
        LineKind::Linear
    }

    #[inline]
    fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    fn add_station(&mut self, name: &str) -> Result<(), LineError> {
        let ix = self.registry.insert(name)?;

        match self.tail {
            Some(tail) => self.registry.link(tail, ix)?,
            None => self.head = Some(ix),
        }

        self.tail = Some(ix);
        trace!("Appended {name} to {}", self.name);
        Ok(())
    }

    fn remove_station(&mut self, name: &str) -> Result<(), LineError> {
        let (_, station) = self.registry.take(name)?;

        match station.prev {
            Some(prev) => self.registry.set_next(prev, station.next)?,
            None => self.head = station.next,
        }

        match station.next {
            Some(next) => self.registry.set_prev(next, station.prev)?,
            None => self.tail = station.prev,
        }

        trace!("Removed {name} from {}", self.name);
        Ok(())
    }

    fn iter_forward(&self, start: &str) -> Result<Traversal<'_>, LineError> {
        self.traverse(start, Direction::Forward)
    }

    fn iter_backward(&self, start: &str) -> Result<Traversal<'_>, LineError> {
        self.traverse(start, Direction::Backward)
    }

    fn stations(&self) -> Traversal<'_> {
        match self.head {
            Some(head) => Traversal::new(&self.registry, head, Direction::Forward, Bound::Open),
            None => Traversal::empty(&self.registry, Direction::Forward, Bound::Open),
        }
    }
}
