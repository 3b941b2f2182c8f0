//! Arena of station records addressed by [`StationIx`], paired with a
//! name lookup. Lines own exactly one registry and build their topology
//! on top of it by writing the `prev`/`next` handles of each record.

use log::trace;
use rustc_hash::FxHashMap;

use crate::line::error::LineError;
use crate::line::station::{Station, StationIx};

#[derive(Clone, Debug, Default)]
pub struct Registry {
    slots: Vec<Option<Station>>,
    vacant: Vec<StationIx>,
    lookup: FxHashMap<String, StationIx>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live stations.
    #[inline]
    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    #[inline]
    pub fn has_station(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    pub fn index_of(&self, name: &str) -> Result<StationIx, LineError> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| LineError::NotFound(name.to_string()))
    }

    pub fn get(&self, name: &str) -> Result<&Station, LineError> {
        let ix = self.index_of(name)?;
        self.node(ix)
    }

    pub fn mark_negative(&mut self, name: &str, flag: bool) -> Result<(), LineError> {
        let ix = self.index_of(name)?;
        self.node_mut(ix)?.negative = flag;

        trace!("Marked {name} negative={flag}");
        Ok(())
    }

    /// Resolves a handle, returning `None` for vacant or out-of-range slots.
    #[inline]
    pub fn station(&self, ix: StationIx) -> Option<&Station> {
        self.slots.get(ix.0).and_then(Option::as_ref)
    }

    /// Resolves a handle that the topology claims is live.
    pub(crate) fn node(&self, ix: StationIx) -> Result<&Station, LineError> {
        self.station(ix)
            .ok_or_else(|| LineError::Corrupted(format!("link to vacant slot {}", ix.0)))
    }

    pub(crate) fn node_mut(&mut self, ix: StationIx) -> Result<&mut Station, LineError> {
        self.slots
            .get_mut(ix.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| LineError::Corrupted(format!("link to vacant slot {}", ix.0)))
    }

    /// Stores a fresh, unlinked station. The caller is responsible for
    /// wiring it into the topology.
    pub(crate) fn insert(&mut self, name: &str) -> Result<StationIx, LineError> {
        if self.has_station(name) {
            return Err(LineError::DuplicateName(name.to_string()));
        }

        let station = Station::new(name.to_string());
        let ix = match self.vacant.pop() {
            Some(ix) => {
                self.slots[ix.0] = Some(station);
                ix
            }
            None => {
                self.slots.push(Some(station));
                StationIx(self.slots.len() - 1)
            }
        };

        self.lookup.insert(name.to_string(), ix);
        Ok(ix)
    }

    /// Removes a station from the registry, handing back its last links so
    /// the caller can splice its neighbours together.
    pub(crate) fn take(&mut self, name: &str) -> Result<(StationIx, Station), LineError> {
        let ix = self.index_of(name)?;
        let station = self
            .slots
            .get_mut(ix.0)
            .and_then(Option::take)
            .ok_or_else(|| LineError::Corrupted(format!("`{name}` maps to vacant slot {}", ix.0)))?;

        self.lookup.remove(name);
        self.vacant.push(ix);
        Ok((ix, station))
    }

    /// Links `from -> to` in the forward direction, and `to -> from` backwards.
    pub(crate) fn link(&mut self, from: StationIx, to: StationIx) -> Result<(), LineError> {
        self.node_mut(from)?.next = Some(to);
        self.node_mut(to)?.prev = Some(from);
        Ok(())
    }

    pub(crate) fn set_next(
        &mut self,
        ix: StationIx,
        next: Option<StationIx>,
    ) -> Result<(), LineError> {
        self.node_mut(ix)?.next = next;
        Ok(())
    }

    pub(crate) fn set_prev(
        &mut self,
        ix: StationIx,
        prev: Option<StationIx>,
    ) -> Result<(), LineError> {
        self.node_mut(ix)?.prev = prev;
        Ok(())
    }
}
