//! Disk-head scheduling simulation.
//!
//! A single head on a linear range of cylinders `[0, disk_size)` services a
//! batch of pending requests. SCAN and LOOK order the requests identically;
//! SCAN additionally runs to the disk edge before reversing.
//!
//! Requests at the head's starting cylinder are serviced first at zero cost.
//! Duplicate requests are kept and cost nothing extra.

pub mod look;
pub mod scan;
pub mod scheduler;

pub use look::LookScheduler;
pub use scan::ScanScheduler;
pub use scheduler::{Scheduler, Sweep};

use crate::error::{SimulationError, SimulationResult};
use log::debug;
use serde::Serialize;

pub type Cylinder = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    Increasing,
    Decreasing,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Increasing => Direction::Decreasing,
            Direction::Decreasing => Direction::Increasing,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadState {
    pub position: Cylinder,
    pub direction: Direction,
}

impl HeadState {
    pub fn new(position: Cylinder, direction: Direction) -> Self {
        Self {
            position,
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingPolicy {
    Scan,
    Look,
}

impl SchedulingPolicy {
    pub fn scheduler(
        self,
        requests: &[Cylinder],
        head: HeadState,
        disk_size: Cylinder,
    ) -> Box<dyn Scheduler> {
        match self {
            SchedulingPolicy::Scan => Box::new(ScanScheduler::new(requests, head, disk_size)),
            SchedulingPolicy::Look => Box::new(LookScheduler::new(requests, head)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeekOutcome {
    pub policy: SchedulingPolicy,
    pub head_start: Cylinder,
    /// Cylinders visited in order, not including `head_start`
    pub sequence: Vec<Cylinder>,
    pub seek_distance: u64,
    pub final_head: HeadState,
}

impl SeekOutcome {
    /// The full head path, starting position first.
    pub fn path(&self) -> Vec<Cylinder> {
        std::iter::once(self.head_start)
            .chain(self.sequence.iter().copied())
            .collect()
    }
}

/// Run `policy` over `requests` with the head starting at `head_start`.
pub fn simulate(
    requests: &[Cylinder],
    head_start: Cylinder,
    disk_size: Cylinder,
    direction: Direction,
    policy: SchedulingPolicy,
) -> SimulationResult<SeekOutcome> {
    if disk_size == 0 {
        return Err(SimulationError::invalid("disk_size", "must be at least 1"));
    }
    if head_start >= disk_size {
        return Err(SimulationError::invalid(
            "head_start",
            format!("{} is outside [0, {})", head_start, disk_size),
        ));
    }
    if let Some(&bad) = requests.iter().find(|&&r| r >= disk_size) {
        return Err(SimulationError::invalid(
            "requests",
            format!("{} is outside [0, {})", bad, disk_size),
        ));
    }

    let mut head = HeadState::new(head_start, direction);
    let mut scheduler = policy.scheduler(requests, head, disk_size);
    let mut sequence = Vec::with_capacity(requests.len() + 1);
    let mut seek_distance: u64 = 0;

    while let Some(next) = scheduler.advance(&mut head) {
        let step = u64::from(head.position.abs_diff(next));
        debug!("head {} -> {} ({} cylinders)", head.position, next, step);
        seek_distance += step;
        head.position = next;
        sequence.push(next);
    }

    Ok(SeekOutcome {
        policy,
        head_start,
        sequence,
        seek_distance,
        final_head: head,
    })
}
