use super::frame_set::FrameSet;
use super::replacer::Replacer;
use super::PageId;
use log::trace;
use std::collections::VecDeque;

/// Second-chance (clock) replacement.
///
/// Same arrival queue as FIFO, but a page whose reference bit is set is
/// requeued with the bit cleared instead of being evicted.
#[derive(Debug)]
pub struct SecondChanceReplacer {
    queue: VecDeque<PageId>,
    /// One bit per slot; empty slots stay false.
    ref_bits: Vec<bool>,
}

impl SecondChanceReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            ref_bits: vec![false; capacity],
        }
    }
}

impl Replacer for SecondChanceReplacer {
    fn record_hit(&mut self, slot: usize) {
        self.ref_bits[slot] = true;
    }

    fn record_insert(&mut self, page: PageId, slot: usize) {
        self.ref_bits[slot] = true;
        self.queue.push_back(page);
    }

    fn evict(&mut self, frames: &FrameSet) -> Option<PageId> {
        // Each requeue clears a bit, so after one full pass some bit is 0.
        loop {
            let page = self.queue.pop_front()?;
            let slot = frames.slot_of(page)?;
            if self.ref_bits[slot] {
                trace!("second chance for page {} in slot {}", page, slot);
                self.ref_bits[slot] = false;
                self.queue.push_back(page);
            } else {
                self.ref_bits[slot] = false;
                return Some(page);
            }
        }
    }

    fn reference_bits(&self) -> Option<Vec<bool>> {
        Some(self.ref_bits.clone())
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(pages: &[PageId]) -> (FrameSet, SecondChanceReplacer) {
        let mut frames = FrameSet::new(pages.len());
        let mut replacer = SecondChanceReplacer::new(pages.len());
        for (slot, &page) in pages.iter().enumerate() {
            frames.place(slot, page);
            replacer.record_insert(page, slot);
        }
        (frames, replacer)
    }

    #[test]
    fn test_full_sweep_evicts_oldest() {
        let (frames, mut replacer) = filled(&[7, 0, 1]);
        assert_eq!(replacer.reference_bits(), Some(vec![true, true, true]));

        // Every bit set: one pass clears them all, then the oldest goes
        assert_eq!(replacer.evict(&frames), Some(7));
        assert_eq!(replacer.reference_bits(), Some(vec![false, false, false]));
        assert_eq!(replacer.size(), 2);
    }

    #[test]
    fn test_referenced_page_is_spared() {
        let (frames, mut replacer) = filled(&[1, 2, 3]);
        assert_eq!(replacer.evict(&frames), Some(1));

        // Page 2 is referenced again before the next eviction
        replacer.record_hit(1);
        assert_eq!(replacer.evict(&frames), Some(3));
        assert_eq!(replacer.reference_bits(), Some(vec![false, false, false]));
    }

    #[test]
    fn test_empty_queue() {
        let frames = FrameSet::new(2);
        let mut replacer = SecondChanceReplacer::new(2);
        assert_eq!(replacer.evict(&frames), None);
    }
}
