use super::scheduler::{Scheduler, Sweep};
use super::{Cylinder, HeadState};

/// LOOK: sweep to the last request in the current direction, then reverse.
#[derive(Debug)]
pub struct LookScheduler {
    sweep: Sweep,
    reversed: bool,
}

impl LookScheduler {
    pub fn new(requests: &[Cylinder], head: HeadState) -> Self {
        Self {
            sweep: Sweep::new(requests, head),
            reversed: false,
        }
    }
}

impl Scheduler for LookScheduler {
    fn advance(&mut self, head: &mut HeadState) -> Option<Cylinder> {
        if let Some(next) = self.sweep.next_leading() {
            return Some(next);
        }
        let next = self.sweep.next_trailing()?;
        if !self.reversed {
            self.reversed = true;
            head.direction = head.direction.reversed();
        }
        Some(next)
    }
}
