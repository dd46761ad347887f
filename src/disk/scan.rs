use super::scheduler::{Scheduler, Sweep};
use super::{Cylinder, Direction, HeadState};
use log::debug;

/// SCAN (elevator): like LOOK, but the head always runs on to the disk edge
/// before reversing, whether or not a request sits there.
#[derive(Debug)]
pub struct ScanScheduler {
    sweep: Sweep,
    disk_size: Cylinder,
    boundary_visited: bool,
}

impl ScanScheduler {
    pub fn new(requests: &[Cylinder], head: HeadState, disk_size: Cylinder) -> Self {
        let sweep = Sweep::new(requests, head);
        // Nothing to service: the head stays put.
        let boundary_visited = sweep.is_empty();
        Self {
            sweep,
            disk_size,
            boundary_visited,
        }
    }

    fn boundary(&self, direction: Direction) -> Cylinder {
        match direction {
            Direction::Increasing => self.disk_size - 1,
            Direction::Decreasing => 0,
        }
    }
}

impl Scheduler for ScanScheduler {
    fn advance(&mut self, head: &mut HeadState) -> Option<Cylinder> {
        if let Some(next) = self.sweep.next_leading() {
            return Some(next);
        }
        if !self.boundary_visited {
            self.boundary_visited = true;
            let edge = self.boundary(head.direction);
            head.direction = head.direction.reversed();
            if head.position != edge {
                debug!("forced boundary visit at cylinder {}", edge);
                return Some(edge);
            }
        }
        self.sweep.next_trailing()
    }
}
