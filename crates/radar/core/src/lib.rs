//! Bounded-area tile queries for grid maps.
//!
//! `radar-core` answers one question: is there a cell within `r` tiles of a
//! center whose event id, terrain tag, tile id, or region id satisfies a
//! predicate? When the answer is yes, the follow-up action configured for that
//! kind of search is reserved exactly once.
//!
//! The host supplies its variable store, map, and action dispatcher through
//! the traits in [`env`]; [`radar::Radar`] is the entry point that ties the
//! [`resolve`] and [`scan`] stages together.
pub mod config;
pub mod env;
pub mod kind;
pub mod query;
pub mod radar;
pub mod resolve;
pub mod scan;
pub mod types;

pub use config::{RadarDefaults, SearchDefaults};
pub use env::{
    ActionDispatcher, ActionQueue, CellData, CellSample, GridMap, MapDimensions, MapOracle,
    OUT_OF_BOUNDS, RadarEnv, VariableOracle, VariableTable,
};
pub use kind::{CellAttribute, Field, SearchKind};
pub use query::Query;
pub use radar::Radar;
pub use resolve::{Axis, PLACEHOLDER, ResolveError, resolve};
pub use scan::{MatchOutcome, Neighborhood, scan};
pub use types::{ActionId, Position, VariableSlot};
