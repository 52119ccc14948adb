use std::time::Duration;

use super::controller::ElementId;

/// Elements registered together whose entrances play in sequence
///
/// Member `i` gets `i × interval` added to its own delay. Membership is fixed
/// when the group is registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaggerGroup {
    members: Vec<ElementId>,
    interval: Duration,
}

impl StaggerGroup {
    pub(crate) fn new(members: Vec<ElementId>, interval: Duration) -> Self {
        Self { members, interval }
    }

    /// Extra delay for the member at `index`
    pub fn delay_for(interval: Duration, index: usize) -> Duration {
        interval.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX))
    }

    pub fn members(&self) -> &[ElementId] {
        &self.members
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Position of `id` within the group
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.members.iter().position(|&m| m == id)
    }
}
