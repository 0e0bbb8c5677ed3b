//! Storage for branch nodes.
//!
//! Branches live in one vector and are addressed by [`BranchId`]. Released slots are chained
//! into a free list and handed out again before the vector grows.

use tracing::trace;

use crate::{
    config::Config,
    error::{Error, Result},
    node::{Branch, BranchId},
};

#[derive(Debug)]
enum Slot<'a> {
    Occupied(Branch<'a>),
    Vacant { next_free: Option<BranchId> },
}

#[derive(Debug)]
pub(crate) struct Arena<'a> {
    slots: Vec<Slot<'a>>,
    free: Option<BranchId>,
    live: usize,
    max_live: usize,
}

impl<'a> Arena<'a> {
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            slots: Vec::with_capacity(config.initial_capacity),
            free: None,
            live: 0,
            max_live: config.max_branches(),
        }
    }

    /// Number of live branches.
    pub(crate) const fn len(&self) -> usize {
        self.live
    }

    /// Stores a branch and returns its handle. Nothing changes when this fails.
    pub(crate) fn alloc(&mut self, branch: Branch<'a>) -> Result<BranchId> {
        if self.live >= self.max_live {
            return Err(Error::CapacityExhausted { capacity: self.max_live });
        }
        let id = match self.free {
            Some(id) => {
                let slot = &mut self.slots[id.index()];
                let Slot::Vacant { next_free } = *slot else {
                    unreachable!("[bug] free list points at an occupied slot");
                };
                self.free = next_free;
                *slot = Slot::Occupied(branch);
                id
            }
            None => {
                // `max_live` never exceeds `u32::MAX`, so neither does the slot count.
                let index = u32::try_from(self.slots.len())
                    .map_err(|_| Error::CapacityExhausted { capacity: self.max_live })?;
                self.slots.push(Slot::Occupied(branch));
                BranchId::new(index)
            }
        };
        self.live += 1;
        trace!(branch = ?id, live = self.live, "allocated branch");
        Ok(id)
    }

    /// Takes a branch out of the arena, putting its slot on the free list.
    pub(crate) fn release(&mut self, id: BranchId) -> Branch<'a> {
        let slot = std::mem::replace(
            &mut self.slots[id.index()],
            Slot::Vacant { next_free: self.free },
        );
        let Slot::Occupied(branch) = slot else {
            unreachable!("[bug] released a vacant slot");
        };
        self.free = Some(id);
        self.live -= 1;
        trace!(branch = ?id, live = self.live, "released branch");
        branch
    }

    pub(crate) fn get(&self, id: BranchId) -> &Branch<'a> {
        match &self.slots[id.index()] {
            Slot::Occupied(branch) => branch,
            Slot::Vacant { .. } => unreachable!("[bug] dangling branch handle {id:?}"),
        }
    }

    pub(crate) fn get_mut(&mut self, id: BranchId) -> &mut Branch<'a> {
        match &mut self.slots[id.index()] {
            Slot::Occupied(branch) => branch,
            Slot::Vacant { .. } => unreachable!("[bug] dangling branch handle {id:?}"),
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.live = 0;
    }
}
