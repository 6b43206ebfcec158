//! Command resolver.
//!
//! Turns the positional arguments of a radar command into a [`Query`].
//! Arguments may be dropped off the end, and any position may be skipped with
//! [`PLACEHOLDER`] to keep later arguments aligned:
//!
//! ```text
//! eventIDMatch                   every field from the defaults
//! eventIDMatch 13                target 13, rest defaulted
//! eventIDMatch x x x 3           radius 3, rest defaulted
//! tileID 1 x x 0                 target 1 on layer 0
//! ```
//!
//! The center coordinate is resolved as a pair: both X and Y are given or
//! both come from the current center. Supplying only one is rejected.

use crate::config::RadarDefaults;
use crate::kind::{Field, SearchKind};
use crate::query::Query;
use crate::types::Position;

/// Token meaning "use the default for this position".
pub const PLACEHOLDER: &str = "x";

/// One of the two center coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// Errors that reject a radar command before any cell is scanned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// Only one center coordinate was supplied.
    #[error("{given} coordinate supplied without {missing}; give both or skip both", missing = .given.other())]
    PartialCoordinate { given: Axis },

    /// A token where an integer was expected did not parse.
    #[error("{field} expects an integer, got '{token}'")]
    InvalidInteger { field: Field, token: String },

    /// The radius parsed as an integer but is below zero.
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(i64),

    /// The radius exceeds [`RadarDefaults::MAX_RADIUS`].
    #[error("radius {0} exceeds the maximum of {max}", max = RadarDefaults::MAX_RADIUS)]
    RadiusTooLarge(i64),
}

impl ResolveError {
    /// Returns a stable identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PartialCoordinate { .. } => "RESOLVE_PARTIAL_COORDINATE",
            Self::InvalidInteger { .. } => "RESOLVE_INVALID_INTEGER",
            Self::NegativeRadius(_) => "RESOLVE_NEGATIVE_RADIUS",
            Self::RadiusTooLarge(_) => "RESOLVE_RADIUS_TOO_LARGE",
        }
    }
}

/// Positional view over a command's raw tokens.
struct CommandArgs<'a, S> {
    layout: &'static [Field],
    tokens: &'a [S],
}

impl<'a, S: AsRef<str>> CommandArgs<'a, S> {
    fn new(kind: SearchKind, tokens: &'a [S]) -> Self {
        Self {
            layout: kind.layout(),
            tokens,
        }
    }

    /// The explicit token for `field`, or `None` when absent or skipped.
    fn token(&self, field: Field) -> Option<&'a str> {
        let index = self.layout.iter().position(|slot| *slot == field)?;
        let token = self.tokens.get(index)?.as_ref().trim();
        (token != PLACEHOLDER).then_some(token)
    }

    fn int(&self, field: Field) -> Result<Option<i32>, ResolveError> {
        self.token(field)
            .map(|token| {
                token
                    .parse::<i32>()
                    .map_err(|_| ResolveError::InvalidInteger {
                        field,
                        token: token.to_owned(),
                    })
            })
            .transpose()
    }

    fn radius(&self) -> Result<Option<u32>, ResolveError> {
        let Some(token) = self.token(Field::Radius) else {
            return Ok(None);
        };
        let radius = token
            .parse::<i64>()
            .map_err(|_| ResolveError::InvalidInteger {
                field: Field::Radius,
                token: token.to_owned(),
            })?;
        if radius < 0 {
            return Err(ResolveError::NegativeRadius(radius));
        }
        match u32::try_from(radius) {
            Ok(radius) if radius <= RadarDefaults::MAX_RADIUS => Ok(Some(radius)),
            _ => Err(ResolveError::RadiusTooLarge(radius)),
        }
    }
}

/// Resolves a radar command's arguments into a query.
///
/// Absent or skipped positions fall back to `defaults` (target, layer,
/// radius) or to `center` (X and Y). Tokens past the kind's last position are
/// ignored.
///
/// # Errors
///
/// - [`ResolveError::PartialCoordinate`] when exactly one of X/Y is given
/// - [`ResolveError::InvalidInteger`] when a given token is not an integer
/// - [`ResolveError::NegativeRadius`] when the radius is below zero
/// - [`ResolveError::RadiusTooLarge`] when the radius exceeds
///   [`RadarDefaults::MAX_RADIUS`]
pub fn resolve<S: AsRef<str>>(
    kind: SearchKind,
    args: &[S],
    defaults: &RadarDefaults,
    center: Position,
) -> Result<Query, ResolveError> {
    let args = CommandArgs::new(kind, args);

    let target = args
        .int(Field::Target)?
        .unwrap_or_else(|| defaults.target_for(kind));

    let center = match (args.int(Field::X)?, args.int(Field::Y)?) {
        (Some(x), Some(y)) => Position::new(x, y),
        (None, None) => center,
        (Some(_), None) => return Err(ResolveError::PartialCoordinate { given: Axis::X }),
        (None, Some(_)) => return Err(ResolveError::PartialCoordinate { given: Axis::Y }),
    };

    let layer = args.int(Field::Layer)?.unwrap_or(defaults.tile_layer);
    let radius = args.radius()?.unwrap_or(defaults.radius);

    Ok(Query::new(kind, target, center, radius).with_layer(layer))
}
