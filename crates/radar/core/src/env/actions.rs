use crate::types::ActionId;

/// Schedules follow-up actions on the host.
///
/// Fire-and-forget: the radar never observes what happens to a reserved
/// action. Ordering and deduplication are up to the implementation.
pub trait ActionDispatcher {
    fn reserve_action(&mut self, action: ActionId);
}

/// Dispatcher that records reservations in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionQueue {
    reserved: Vec<ActionId>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reserved(&self) -> &[ActionId] {
        &self.reserved
    }

    pub fn len(&self) -> usize {
        self.reserved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reserved.is_empty()
    }

    /// Removes and returns everything reserved so far.
    pub fn drain(&mut self) -> Vec<ActionId> {
        std::mem::take(&mut self.reserved)
    }
}

impl ActionDispatcher for ActionQueue {
    fn reserve_action(&mut self, action: ActionId) {
        self.reserved.push(action);
    }
}
