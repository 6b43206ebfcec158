//! Radar command entry point.
//!
//! [`Radar`] runs one command end to end: it reads the current center from
//! the variable store, resolves the arguments, scans, and reserves the kind's
//! follow-up action when a cell matches. Each call is independent; the radar
//! holds nothing but a borrow of the defaults.

use std::str::FromStr;

use crate::config::RadarDefaults;
use crate::env::RadarEnv;
use crate::kind::SearchKind;
use crate::resolve::{ResolveError, resolve};
use crate::scan::{MatchOutcome, scan};
use crate::types::Position;

#[derive(Clone, Copy, Debug)]
pub struct Radar<'a> {
    defaults: &'a RadarDefaults,
}

impl<'a> Radar<'a> {
    pub fn new(defaults: &'a RadarDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &'a RadarDefaults {
        self.defaults
    }

    /// Current center as stored in the configured X/Y variable slots.
    pub fn current_center(&self, env: &RadarEnv<'_>) -> Position {
        let variables = env.variables();
        Position::new(
            variables.variable(self.defaults.x_variable),
            variables.variable(self.defaults.y_variable),
        )
    }

    /// Runs a radar command by name, returning the parsed kind with the outcome.
    ///
    /// Returns `Ok(None)` without touching `env` when `command` is not a radar
    /// command, so hosts can offer every command line to the radar.
    ///
    /// # Errors
    ///
    /// Propagates [`ResolveError`] from [`Radar::execute`].
    pub fn dispatch<S: AsRef<str>>(
        &self,
        command: &str,
        args: &[S],
        env: &mut RadarEnv<'_>,
    ) -> Result<Option<(SearchKind, MatchOutcome)>, ResolveError> {
        match SearchKind::from_str(command) {
            Ok(kind) => self
                .execute(kind, args, env)
                .map(|outcome| Some((kind, outcome))),
            Err(_) => {
                tracing::trace!(command, "not a radar command");
                Ok(None)
            }
        }
    }

    /// Resolves and scans one search, reserving at most one follow-up action.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when the arguments are malformed. Nothing is
    /// scanned and no action is reserved in that case.
    pub fn execute<S: AsRef<str>>(
        &self,
        kind: SearchKind,
        args: &[S],
        env: &mut RadarEnv<'_>,
    ) -> Result<MatchOutcome, ResolveError> {
        let center = self.current_center(env);
        let query = resolve(kind, args, self.defaults, center).inspect_err(|err| {
            tracing::warn!(%kind, code = err.error_code(), "rejected radar command: {err}");
        })?;

        tracing::debug!(
            %kind,
            target = query.target,
            center = %query.center,
            layer = query.layer,
            radius = query.radius,
            "scanning"
        );

        let outcome = scan(&query, env.map());
        if let MatchOutcome::Match { position, observed } = outcome {
            let action = self.defaults.action_for(kind);
            tracing::debug!(%kind, %position, observed, %action, "match, reserving action");
            env.actions().reserve_action(action);
        } else {
            tracing::debug!(%kind, "no match");
        }

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{ActionQueue, GridMap, MapDimensions, VariableTable};
    use crate::kind::Field;
    use crate::types::{ActionId, VariableSlot};

    fn variables(x: i32, y: i32) -> VariableTable {
        [(VariableSlot(15), x), (VariableSlot(16), y)]
            .into_iter()
            .collect()
    }

    #[test]
    fn center_comes_from_configured_slots() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(7, 3);
        let map = GridMap::new(MapDimensions::new(1, 1), 1);
        let mut actions = ActionQueue::new();
        let env = RadarEnv::new(&variables, &map, &mut actions);

        assert_eq!(radar.current_center(&env), Position::new(7, 3));
    }

    #[test]
    fn match_reserves_the_kind_action() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(2, 2);
        let mut map = GridMap::new(MapDimensions::new(5, 5), 1);
        map.set_terrain_tag(Position::new(3, 2), 1);
        let mut actions = ActionQueue::new();

        let outcome = radar
            .execute::<&str>(
                SearchKind::TerrainTagEquals,
                &[],
                &mut RadarEnv::new(&variables, &map, &mut actions),
            )
            .unwrap();

        assert_eq!(outcome.position(), Some(Position::new(3, 2)));
        assert_eq!(actions.reserved(), &[ActionId(14)]);
    }

    #[test]
    fn rejected_command_reserves_nothing() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(0, 0);
        let mut map = GridMap::new(MapDimensions::new(3, 3), 1);
        map.set_event(Position::ORIGIN, 1);
        let mut actions = ActionQueue::new();

        let result = radar.execute(
            SearchKind::EventEquals,
            &["1", "0", "x"],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        );

        assert!(result.is_err());
        assert!(actions.is_empty());
    }

    #[test]
    fn non_integer_radius_reserves_nothing() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(1, 1);
        let mut map = GridMap::new(MapDimensions::new(3, 3), 1);
        map.set_event(Position::new(1, 1), 1);
        let mut actions = ActionQueue::new();

        let result = radar.dispatch(
            "eventIDMatch",
            &["1", "x", "x", "two"],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        );

        assert_eq!(
            result,
            Err(ResolveError::InvalidInteger {
                field: Field::Radius,
                token: "two".into(),
            })
        );
        assert!(actions.is_empty());
    }

    #[test]
    fn oversized_radius_reserves_nothing() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(1, 1);
        let mut map = GridMap::new(MapDimensions::new(3, 3), 1);
        map.set_event(Position::new(1, 1), 1);
        let mut actions = ActionQueue::new();

        let result = radar.dispatch(
            "eventIDMatch",
            &["x", "x", "x", "4294967295"],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        );

        assert_eq!(result, Err(ResolveError::RadiusTooLarge(4_294_967_295)));
        assert!(actions.is_empty());
    }

    #[test]
    fn unknown_command_is_a_no_op() {
        let defaults = RadarDefaults::default();
        let radar = Radar::new(&defaults);
        let variables = variables(0, 0);
        let map = GridMap::new(MapDimensions::new(3, 3), 1);
        let mut actions = ActionQueue::new();

        let result = radar.dispatch(
            "ShowText",
            &["abc"],
            &mut RadarEnv::new(&variables, &map, &mut actions),
        );

        assert_eq!(result, Ok(None));
        assert!(actions.is_empty());
    }
}
