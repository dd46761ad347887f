use super::{Cylinder, Direction, HeadState};
use std::collections::VecDeque;
use std::fmt::Debug;

/// Head-traversal policy driven by the disk-scheduling engine.
pub trait Scheduler: Debug {
    /// Next cylinder the head moves to, or None once every request is serviced.
    ///
    /// The engine moves `head` to the returned cylinder; implementations may
    /// flip `head.direction` when they turn around.
    fn advance(&mut self, head: &mut HeadState) -> Option<Cylinder>;
}

/// Pending requests split around the starting head position.
///
/// `leading` holds what lies in the initial direction of travel in service
/// order, `trailing` what is left behind. Requests at the head position
/// count as at-or-above.
#[derive(Debug, Clone, Default)]
pub struct Sweep {
    leading: VecDeque<Cylinder>,
    trailing: VecDeque<Cylinder>,
}

impl Sweep {
    pub fn new(requests: &[Cylinder], head: HeadState) -> Self {
        let mut below: Vec<Cylinder> = Vec::new();
        let mut at_or_above: Vec<Cylinder> = Vec::new();
        for &request in requests {
            if request < head.position {
                below.push(request);
            } else {
                at_or_above.push(request);
            }
        }
        at_or_above.sort_unstable();
        below.sort_unstable_by(|a, b| b.cmp(a));

        let (leading, trailing) = match head.direction {
            Direction::Increasing => (at_or_above, below),
            Direction::Decreasing => (below, at_or_above),
        };
        Self {
            leading: leading.into(),
            trailing: trailing.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.leading.is_empty() && self.trailing.is_empty()
    }

    pub fn next_leading(&mut self) -> Option<Cylinder> {
        self.leading.pop_front()
    }

    pub fn next_trailing(&mut self) -> Option<Cylinder> {
        self.trailing.pop_front()
    }
}
