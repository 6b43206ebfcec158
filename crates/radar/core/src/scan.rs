//! Neighborhood scanner.
//!
//! A query of radius `r` covers the `(2r+1) × (2r+1)` square around its center,
//! center included. Cells are visited column by column: the outer loop walks X
//! from `cx - r` to `cx + r`, the inner loop walks Y from `cy - r` to `cy + r`.
//! The first cell satisfying the kind's predicate wins and the scan stops
//! there, so this order decides which of several matches is reported.

use crate::env::MapOracle;
use crate::query::Query;
use crate::types::Position;

/// Result of scanning one query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchOutcome {
    NoMatch,
    Match {
        position: Position,
        /// Attribute value read at `position`.
        observed: i32,
    },
}

impl MatchOutcome {
    pub const fn is_match(&self) -> bool {
        matches!(self, Self::Match { .. })
    }

    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::Match { position, .. } => Some(*position),
            Self::NoMatch => None,
        }
    }
}

/// Cells of a square neighborhood in scan order.
///
/// Coordinates are computed in 64-bit space; cells that would fall outside the
/// `i32` range are omitted since no map can contain them.
#[derive(Clone, Debug)]
pub struct Neighborhood {
    x_min: i64,
    x_max: i64,
    y_min: i64,
    y_max: i64,
    x: i64,
    y: i64,
}

impl Neighborhood {
    pub fn new(center: Position, radius: u32) -> Self {
        let radius = i64::from(radius);
        let clamp = |value: i64| value.clamp(i64::from(i32::MIN), i64::from(i32::MAX));
        let x_min = clamp(i64::from(center.x) - radius);
        let y_min = clamp(i64::from(center.y) - radius);

        Self {
            x_min,
            x_max: clamp(i64::from(center.x) + radius),
            y_min,
            y_max: clamp(i64::from(center.y) + radius),
            x: x_min,
            y: y_min,
        }
    }

    /// Total number of cells covered, regardless of iteration progress.
    ///
    /// A side spans at most 2^32 coordinates, so the count always fits.
    pub fn cell_count(&self) -> u128 {
        span(self.x_min, self.x_max) * self.height()
    }

    fn height(&self) -> u128 {
        span(self.y_min, self.y_max)
    }

    fn remaining(&self) -> u128 {
        if self.x > self.x_max {
            return 0;
        }
        let full_columns = span(self.x, self.x_max) - 1;
        full_columns * self.height() + span(self.y, self.y_max)
    }
}

/// Number of coordinates in `min..=max`; both lie in the `i32` range.
fn span(min: i64, max: i64) -> u128 {
    (max - min + 1) as u128
}

impl Iterator for Neighborhood {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.x > self.x_max {
            return None;
        }

        // Both bounds were clamped to the i32 range in `new`.
        let position = Position::new(self.x as i32, self.y as i32);

        if self.y < self.y_max {
            self.y += 1;
        } else {
            self.y = self.y_min;
            self.x += 1;
        }

        Some(position)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Scans the query's neighborhood and returns the first matching cell.
///
/// Only the attribute selected by the query's kind is read from `map`.
/// Out-of-bounds cells are left to the map, which reports a sentinel that no
/// predicate accepts.
pub fn scan<M>(query: &Query, map: &M) -> MatchOutcome
where
    M: MapOracle + ?Sized,
{
    let attribute = query.kind.attribute();

    query
        .neighborhood()
        .find_map(|position| {
            let observed = map.attribute_at(attribute, position, query.layer);
            query
                .kind
                .matches(observed, query.target)
                .then_some(MatchOutcome::Match { position, observed })
        })
        .unwrap_or(MatchOutcome::NoMatch)
}
