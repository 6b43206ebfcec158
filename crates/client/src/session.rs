//! Host session: the state a radar script runs against.
//!
//! The session owns what the radar treats as external collaborators: the
//! variable store, the map, and the queue of reserved actions. Besides radar
//! commands it understands two host commands:
//!
//! ```text
//! set <slot> <value>        write a variable
//! probe <x> <y> [layer]     read every attribute of one cell
//! ```
//!
//! Any other command name is offered to the radar; names the radar does not
//! know are ignored.

use std::fmt;

use anyhow::{Context, Result};
use radar_core::{
    ActionId, ActionQueue, CellSample, GridMap, MapOracle, MatchOutcome, Position, Radar,
    RadarDefaults, RadarEnv, ResolveError, SearchKind, VariableSlot, VariableTable,
};

/// Errors that abort a single script line.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("usage: {usage}")]
    Usage { usage: &'static str },

    #[error("'{token}' is not an integer")]
    InvalidInteger { token: String },
}

/// What a script line did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Blank line or comment.
    Empty,
    VariableSet {
        slot: VariableSlot,
        value: i32,
    },
    Probe(CellSample),
    Radar {
        kind: SearchKind,
        outcome: MatchOutcome,
        /// Action reserved by this command, if any.
        action: Option<ActionId>,
    },
    /// Not a host or radar command.
    Ignored { command: String },
}

impl fmt::Display for LineOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::VariableSet { slot, value } => write!(f, "set {slot} = {value}"),
            Self::Probe(sample) => write!(
                f,
                "cell {}: event={} terrain={} tile={} region={}",
                sample.position,
                sample.event_id,
                sample.terrain_tag,
                sample.tile_id,
                sample.region_id
            ),
            Self::Radar {
                kind,
                outcome: MatchOutcome::Match { position, observed },
                action,
            } => {
                write!(f, "{kind}: match at {position}, observed {observed}")?;
                if let Some(action) = action {
                    write!(f, ", reserved action {action}")?;
                }
                Ok(())
            }
            Self::Radar { kind, .. } => write!(f, "{kind}: no match"),
            Self::Ignored { command } => write!(f, "ignored '{command}'"),
        }
    }
}

pub struct Session {
    defaults: RadarDefaults,
    variables: VariableTable,
    map: GridMap,
    actions: ActionQueue,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    pub fn defaults(&self) -> &RadarDefaults {
        &self.defaults
    }

    pub fn variables(&self) -> &VariableTable {
        &self.variables
    }

    /// Actions reserved so far, in order.
    pub fn reserved_actions(&self) -> &[ActionId] {
        self.actions.reserved()
    }

    /// Executes one script line.
    ///
    /// Text after `#` is a comment.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] for malformed host commands and rejected radar
    /// commands. The session is unchanged in that case.
    pub fn execute_line(&mut self, line: &str) -> Result<LineOutcome, SessionError> {
        let line = line.split_once('#').map_or(line, |(code, _)| code);
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return Ok(LineOutcome::Empty);
        };
        let args: Vec<&str> = tokens.collect();

        match command {
            "set" => self.set_variable(&args),
            "probe" => self.probe(&args),
            _ => self.run_radar(command, &args),
        }
    }

    fn set_variable(&mut self, args: &[&str]) -> Result<LineOutcome, SessionError> {
        const USAGE: &str = "set <slot> <value>";
        let [slot, value] = args else {
            return Err(SessionError::Usage { usage: USAGE });
        };

        let slot = VariableSlot(parse_int(slot)?);
        let value = parse_int(value)?;
        self.variables.set(slot, value);
        tracing::debug!(%slot, value, "variable set");

        Ok(LineOutcome::VariableSet { slot, value })
    }

    fn probe(&self, args: &[&str]) -> Result<LineOutcome, SessionError> {
        const USAGE: &str = "probe <x> <y> [layer]";
        let (x, y, layer) = match args {
            [x, y] => (x, y, None),
            [x, y, layer] => (x, y, Some(layer)),
            _ => return Err(SessionError::Usage { usage: USAGE }),
        };

        let position = Position::new(parse_int(x)?, parse_int(y)?);
        let layer = match layer {
            Some(layer) => parse_int(layer)?,
            None => self.defaults.tile_layer,
        };

        Ok(LineOutcome::Probe(self.map.sample(position, layer)))
    }

    fn run_radar(&mut self, command: &str, args: &[&str]) -> Result<LineOutcome, SessionError> {
        let radar = Radar::new(&self.defaults);
        let reserved_before = self.actions.len();
        let mut env = RadarEnv::new(&self.variables, &self.map, &mut self.actions);

        let Some((kind, outcome)) = radar.dispatch(command, args, &mut env)? else {
            tracing::debug!(command, "ignoring unknown command");
            return Ok(LineOutcome::Ignored {
                command: command.to_owned(),
            });
        };

        let action = self.actions.reserved()[reserved_before..].first().copied();
        Ok(LineOutcome::Radar {
            kind,
            outcome,
            action,
        })
    }
}

fn parse_int<T: std::str::FromStr>(token: &str) -> Result<T, SessionError> {
    token.parse().map_err(|_| SessionError::InvalidInteger {
        token: token.to_owned(),
    })
}

/// Builder for [`Session`].
///
/// The map is required; defaults fall back to the built-in values and the
/// variable store starts empty unless provided.
#[derive(Default)]
pub struct SessionBuilder {
    defaults: Option<RadarDefaults>,
    variables: Option<VariableTable>,
    map: Option<GridMap>,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn defaults(mut self, defaults: RadarDefaults) -> Self {
        self.defaults = Some(defaults);
        self
    }

    pub fn variables(mut self, variables: VariableTable) -> Self {
        self.variables = Some(variables);
        self
    }

    /// Set the map (required).
    pub fn map(mut self, map: GridMap) -> Self {
        self.map = Some(map);
        self
    }

    /// Build the Session.
    ///
    /// # Errors
    ///
    /// Returns an error if the map is not set.
    pub fn build(self) -> Result<Session> {
        let map = self
            .map
            .context("Map is required. Use .map() to set it.")?;

        Ok(Session {
            defaults: self.defaults.unwrap_or_default(),
            variables: self.variables.unwrap_or_default(),
            map,
            actions: ActionQueue::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use radar_core::{Axis, MapDimensions, OUT_OF_BOUNDS};

    use super::*;

    fn session() -> Session {
        let mut map = GridMap::new(MapDimensions::new(30, 20), 2);
        map.set_event(Position::new(21, 10), 13);
        map.set_region(Position::new(19, 12), 1);
        map.set_tile(Position::new(6, 4), 1, 1);

        let variables = [(VariableSlot(15), 21), (VariableSlot(16), 10)]
            .into_iter()
            .collect();

        Session::builder()
            .map(map)
            .variables(variables)
            .build()
            .unwrap()
    }

    #[test]
    fn build_requires_a_map() {
        assert!(Session::builder().build().is_err());
    }

    #[test]
    fn blank_lines_and_comments_are_empty() {
        let mut session = session();
        assert_eq!(session.execute_line("").unwrap(), LineOutcome::Empty);
        assert_eq!(
            session.execute_line("   # just a note").unwrap(),
            LineOutcome::Empty
        );
    }

    #[test]
    fn radar_match_reports_the_reserved_action() {
        let mut session = session();
        let outcome = session.execute_line("eventIDMatch 13 21 10 2").unwrap();

        assert_eq!(
            outcome,
            LineOutcome::Radar {
                kind: SearchKind::EventEquals,
                outcome: MatchOutcome::Match {
                    position: Position::new(21, 10),
                    observed: 13,
                },
                action: Some(ActionId(11)),
            }
        );
        assert_eq!(
            outcome.to_string(),
            "eventIDMatch: match at (21, 10), observed 13, reserved action #11"
        );
    }

    #[test]
    fn set_moves_the_center() {
        let mut session = session();
        session.execute_line("set 15 6").unwrap();
        session.execute_line("set 16 4").unwrap();

        let outcome = session.execute_line("tileID 1 x x 1 0").unwrap();
        assert!(matches!(
            outcome,
            LineOutcome::Radar {
                action: Some(ActionId(15)),
                ..
            }
        ));
    }

    #[test]
    fn probe_reads_every_attribute() {
        let session_line = session().execute_line("probe 19 12").unwrap();
        let LineOutcome::Probe(sample) = session_line else {
            panic!("expected a probe, got {session_line:?}");
        };
        assert_eq!(sample.region_id, 1);
        assert_eq!(sample.event_id, 0);

        let outside = session().execute_line("probe -1 0 1").unwrap();
        let LineOutcome::Probe(sample) = outside else {
            panic!("expected a probe, got {outside:?}");
        };
        assert_eq!(sample.tile_id, OUT_OF_BOUNDS);
    }

    #[test]
    fn malformed_lines_leave_the_session_untouched() {
        let mut session = session();

        assert!(matches!(
            session.execute_line("set 15"),
            Err(SessionError::Usage { .. })
        ));
        assert!(matches!(
            session.execute_line("set 15 east"),
            Err(SessionError::InvalidInteger { .. })
        ));
        assert!(matches!(
            session.execute_line("eventIDMatch 5 10 x 3"),
            Err(SessionError::Resolve(ResolveError::PartialCoordinate {
                given: Axis::X
            }))
        ));

        assert_eq!(session.variables().iter().count(), 2);
        assert!(session.reserved_actions().is_empty());
    }

    #[test]
    fn unknown_commands_are_ignored() {
        let mut session = session();
        let outcome = session.execute_line("ShowPicture 1 2 3").unwrap();
        assert_eq!(
            outcome,
            LineOutcome::Ignored {
                command: "ShowPicture".into()
            }
        );
        assert!(session.reserved_actions().is_empty());
    }
}
