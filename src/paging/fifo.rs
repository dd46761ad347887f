use super::frame_set::FrameSet;
use super::replacer::Replacer;
use super::PageId;
use std::collections::VecDeque;

#[derive(Debug)]
pub struct FifoReplacer {
    /// Resident pages in arrival order (oldest at front)
    queue: VecDeque<PageId>,
}

impl FifoReplacer {
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
        }
    }
}

impl Replacer for FifoReplacer {
    fn record_hit(&mut self, _slot: usize) {}

    fn record_insert(&mut self, page: PageId, _slot: usize) {
        self.queue.push_back(page);
    }

    fn evict(&mut self, _frames: &FrameSet) -> Option<PageId> {
        self.queue.pop_front()
    }

    fn reference_bits(&self) -> Option<Vec<bool>> {
        None
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
