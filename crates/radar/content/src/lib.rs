//! Data-driven radar content and loaders.
//!
//! This crate reads the files a radar host starts from:
//! - Radar defaults (TOML)
//! - Grid maps (RON)
//! - Scenarios: a map plus initial variable values (RON)
//!
//! All loaders deserialize straight into radar-core types where possible.

pub mod loaders;

pub use loaders::{DefaultsLoader, LoadResult, MapLoader, Scenario, ScenarioLoader};
