use log::trace;

use crate::line::definition::{Line, LineKind};
use crate::line::error::LineError;
use crate::line::registry::Registry;
use crate::line::station::StationIx;
use crate::line::traversal::{Bound, Direction, Traversal};

/// A doubly linked ring of stations. There are no ends; the head only
/// marks where insertion closes the ring.
#[derive(Clone, Debug)]
pub struct CircularLine {
    name: String,
    registry: Registry,

    head: Option<StationIx>,
}

impl CircularLine {
    pub fn new(name: impl Into<String>) -> Self {
        CircularLine {
            name: name.into(),
            registry: Registry::new(),
            head: None,
        }
    }

    pub fn head(&self) -> Option<&str> {
        self.head
            .and_then(|ix| self.registry.station(ix))
            .map(|station| station.name())
    }

    fn traverse(&self, start: &str, direction: Direction) -> Result<Traversal<'_>, LineError> {
        let ix = self.registry.index_of(start)?;
        Ok(Traversal::new(&self.registry, ix, direction, Bound::Ring))
    }
}

impl Line for CircularLine {
    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn kind(&self) -> LineKind {
        LineKind::Circular
    }

    #[inline]
    fn registry(&self) -> &Registry {
        &self.registry
    }

    #[inline]
    fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Inserts the station just before the head, closing the ring behind it.
    fn add_station(&mut self, name: &str) -> Result<(), LineError> {
        // Resolve the current closing link before touching the registry,
        // so a corrupted ring leaves the line as it was.
        let closing = match self.head {
            Some(head) => {
                let tail = self.registry.node(head)?.prev.ok_or_else(|| {
                    LineError::Corrupted(format!("ring head of {} has no backward link", self.name))
                })?;
                Some((tail, head))
            }
            None => None,
        };

        let ix = self.registry.insert(name)?;

        match closing {
            Some((tail, head)) => {
                self.registry.link(tail, ix)?;
                self.registry.link(ix, head)?;
            }
            None => {
                self.registry.link(ix, ix)?;
                self.head = Some(ix);
            }
        }

        trace!("Inserted {name} into ring {}", self.name);
        Ok(())
    }

    fn remove_station(&mut self, name: &str) -> Result<(), LineError> {
        let (ix, station) = self.registry.take(name)?;

        if self.registry.is_empty() {
            self.head = None;
            trace!("Removed {name}, ring {} is now empty", self.name);
            return Ok(());
        }

        let (Some(prev), Some(next)) = (station.prev, station.next) else {
            return Err(LineError::Corrupted(format!(
                "`{name}` was not linked into ring {}",
                self.name
            )));
        };

        self.registry.link(prev, next)?;
        if self.head == Some(ix) {
            self.head = Some(next);
        }

        trace!("Removed {name} from ring {}", self.name);
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
            Some(head) => Traversal::new(&self.registry, head, Direction::Forward, Bound::Ring),
            None => Traversal::empty(&self.registry, Direction::Forward, Bound::Ring),
        }
    }
}
