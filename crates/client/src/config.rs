//! Host configuration.
//!
//! Every flag can also come from the environment (after `.env` is loaded), so
//! a project directory can pin its defaults and scenario once.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use radar_content::{DefaultsLoader, MapLoader, ScenarioLoader};
use radar_core::RadarDefaults;

use crate::session::Session;

/// Run radius-check commands against a grid map.
#[derive(Clone, Debug, Parser)]
#[command(name = "radar", version, about)]
pub struct HostConfig {
    /// Radar defaults (TOML). Built-in values are used when omitted.
    #[arg(long, env = "RADAR_DEFAULTS")]
    pub defaults: Option<PathBuf>,

    /// Scenario (RON) naming the map and seeding variables.
    #[arg(long, env = "RADAR_SCENARIO")]
    pub scenario: Option<PathBuf>,

    /// Map (RON). Takes precedence over the scenario's map.
    #[arg(long, env = "RADAR_MAP")]
    pub map: Option<PathBuf>,

    /// Also write logs to `radar.log` in this directory.
    #[arg(long, env = "RADAR_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Command script. Reads stdin when omitted.
    pub script: Option<PathBuf>,
}

impl HostConfig {
    /// Loads every configured file and assembles a session.
    ///
    /// # Errors
    ///
    /// Fails when a file cannot be loaded or when neither a map nor a scenario
    /// is configured.
    pub fn load_session(&self) -> Result<Session> {
        let defaults = match &self.defaults {
            Some(path) => DefaultsLoader::load(path)?,
            None => RadarDefaults::new(),
        };

        let scenario = self
            .scenario
            .as_deref()
            .map(ScenarioLoader::load)
            .transpose()?;

        let map = match (&self.map, &scenario) {
            (Some(path), _) => MapLoader::load(path)?,
            (None, Some(scenario)) => scenario.load_map()?,
            (None, None) => anyhow::bail!("No map configured. Pass --map or --scenario."),
        };

        let mut builder = Session::builder().defaults(defaults).map(map);
        if let Some(scenario) = &scenario {
            builder = builder.variables(scenario.variable_table());
        }
        builder.build()
    }
}
