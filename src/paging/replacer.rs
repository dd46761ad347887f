use super::frame_set::FrameSet;
use super::PageId;
use std::fmt::Debug;

/// Eviction policy driven by the page-replacement engine.
///
/// The engine owns the frame set and decides hit vs. fault; the replacer only
/// tracks arrival order and whatever per-slot state its policy needs.
pub trait Replacer: Debug {
    /// A resident page in `slot` was referenced again.
    fn record_hit(&mut self, slot: usize);

    /// `page` was just placed into `slot`.
    fn record_insert(&mut self, page: PageId, slot: usize);

    /// Select a resident page to evict. Returns None if nothing is queued.
    fn evict(&mut self, frames: &FrameSet) -> Option<PageId>;

    /// Per-slot reference bits, for policies that keep them.
    fn reference_bits(&self) -> Option<Vec<bool>>;

    /// Number of pages in the eviction queue.
    fn size(&self) -> usize;
}
