//! Host collaborators consumed by the radar.
//!
//! The variable store, the map, and the action dispatcher are owned by the
//! host. The radar only sees them through the traits declared here, bundled
//! per invocation in [`RadarEnv`]. In-memory implementations are provided for
//! hosts that have no richer backing store.
mod actions;
mod map;
mod variables;

pub use actions::{ActionDispatcher, ActionQueue};
pub use map::{CellData, CellSample, GridMap, MapDimensions, MapOracle, OUT_OF_BOUNDS};
pub use variables::{VariableOracle, VariableTable};

/// Collaborators borrowed for the duration of one radar command.
pub struct RadarEnv<'a> {
    variables: &'a dyn VariableOracle,
    map: &'a dyn MapOracle,
    actions: &'a mut dyn ActionDispatcher,
}

impl<'a> RadarEnv<'a> {
    pub fn new(
        variables: &'a dyn VariableOracle,
        map: &'a dyn MapOracle,
        actions: &'a mut dyn ActionDispatcher,
    ) -> Self {
        Self {
            variables,
            map,
            actions,
        }
    }

    pub fn variables(&self) -> &'a dyn VariableOracle {
        self.variables
    }

    pub fn map(&self) -> &'a dyn MapOracle {
        self.map
    }

    pub fn actions(&mut self) -> &mut dyn ActionDispatcher {
        &mut *self.actions
    }
}
