use super::PageId;
use std::collections::HashMap;

/// Fixed-capacity resident set.
///
/// Slot positions are stable for the whole run; a page occupies at most one
/// slot. `index` mirrors `slots` so residency checks never scan.
#[derive(Debug, Clone)]
pub struct FrameSet {
    slots: Vec<Option<PageId>>,
    index: HashMap<PageId, usize>,
}

impl FrameSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Slot currently holding `page`, if resident.
    pub fn slot_of(&self, page: PageId) -> Option<usize> {
        self.index.get(&page).copied()
    }

    pub fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Put `page` into `slot`, returning the page it displaced.
    pub fn place(&mut self, slot: usize, page: PageId) -> Option<PageId> {
        let displaced = self.slots[slot].replace(page);
        if let Some(old) = displaced {
            self.index.remove(&old);
        }
        self.index.insert(page, slot);
        displaced
    }

    pub fn snapshot(&self) -> Vec<Option<PageId>> {
        self.slots.clone()
    }
}
