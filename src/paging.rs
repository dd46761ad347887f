//! Page-replacement simulation.
//!
//! A fixed number of frames consumes a reference string one page at a time.
//! Every reference is either a hit (page already resident) or a fault; on a
//! fault with no free frame the selected [`PagingPolicy`] picks the victim.
//!
//! The engine returns raw counts and a per-reference trace. Hit and fault
//! rates are left to the caller (see [`crate::report`]).

pub mod fifo;
pub mod frame_set;
pub mod replacer;
pub mod second_chance;

pub use fifo::FifoReplacer;
pub use frame_set::FrameSet;
pub use replacer::Replacer;
pub use second_chance::SecondChanceReplacer;

use crate::error::{SimulationError, SimulationResult};
use log::debug;
use serde::Serialize;

pub type PageId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PagingPolicy {
    Fifo,
    SecondChance,
}

impl PagingPolicy {
    pub fn replacer(self, frame_count: usize) -> Box<dyn Replacer> {
        match self {
            PagingPolicy::Fifo => Box::new(FifoReplacer::new(frame_count)),
            PagingPolicy::SecondChance => Box::new(SecondChanceReplacer::new(frame_count)),
        }
    }
}

/// State after one reference was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub page: PageId,
    pub hit: bool,
    /// Page displaced to make room, if any
    pub evicted: Option<PageId>,
    pub frames: Vec<Option<PageId>>,
    /// Only present for policies that keep reference bits
    pub reference_bits: Option<Vec<bool>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingOutcome {
    pub policy: PagingPolicy,
    pub frame_count: usize,
    pub hits: usize,
    pub faults: usize,
    pub trace: Vec<AccessRecord>,
}

impl PagingOutcome {
    pub fn total_references(&self) -> usize {
        self.hits + self.faults
    }
}

/// Run `policy` over `references` with `frame_count` frames.
pub fn simulate(
    frame_count: usize,
    references: &[PageId],
    policy: PagingPolicy,
) -> SimulationResult<PagingOutcome> {
    if frame_count == 0 {
        return Err(SimulationError::invalid(
            "frame_count",
            "must be at least 1",
        ));
    }

    let mut frames = FrameSet::new(frame_count);
    let mut replacer = policy.replacer(frame_count);
    let mut hits = 0;
    let mut faults = 0;
    let mut trace = Vec::with_capacity(references.len());

    for &page in references {
        let mut evicted = None;
        let hit = match frames.slot_of(page) {
            Some(slot) => {
                replacer.record_hit(slot);
                hits += 1;
                true
            }
            None => {
                faults += 1;
                let slot = match frames.first_free() {
                    Some(slot) => slot,
                    None => {
                        let victim = replacer
                            .evict(&frames)
                            .ok_or(SimulationError::NoEvictableFrame)?;
                        evicted = Some(victim);
                        frames
                            .slot_of(victim)
                            .ok_or(SimulationError::NoEvictableFrame)?
                    }
                };
                frames.place(slot, page);
                replacer.record_insert(page, slot);
                debug!(
                    "page fault: {} -> slot {} (evicted {:?})",
                    page, slot, evicted
                );
                false
            }
        };

        trace.push(AccessRecord {
            page,
            hit,
            evicted,
            frames: frames.snapshot(),
            reference_bits: replacer.reference_bits(),
        });
    }

    debug_assert_eq!(replacer.size(), frames.len());

    Ok(PagingOutcome {
        policy,
        frame_count,
        hits,
        faults,
        trace,
    })
}
