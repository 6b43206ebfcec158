//! Scenario loader.
//!
//! A scenario names the map to scan and seeds the host's variable store, so a
//! session starts with a known center.
//!
//! ```ron
//! (
//!     map: "maps/demo.ron",
//!     variables: [(15, 2), (16, 2)],
//! )
//! ```

use std::path::{Path, PathBuf};

use radar_core::{GridMap, VariableSlot, VariableTable};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, MapLoader, read_file};

/// Scenario structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioRon {
    map: String,
    #[serde(default)]
    variables: Vec<(u32, i32)>,
}

/// A map reference plus the initial variable values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Map path, already resolved against the scenario file's directory.
    pub map: PathBuf,
    pub variables: Vec<(VariableSlot, i32)>,
}

impl Scenario {
    /// Builds the variable store seeded by this scenario.
    pub fn variable_table(&self) -> VariableTable {
        self.variables.iter().copied().collect()
    }

    /// Loads the scenario's map.
    pub fn load_map(&self) -> LoadResult<GridMap> {
        MapLoader::load(&self.map)
    }
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// Relative map paths are resolved against the directory containing the
    /// scenario file.
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::parse(&content, base).map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse a scenario from RON text, resolving the map path against `base`.
    pub fn parse(content: &str, base: &Path) -> LoadResult<Scenario> {
        let data: ScenarioRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        Ok(Scenario {
            map: base.join(data.map),
            variables: data
                .variables
                .into_iter()
                .map(|(slot, value)| (VariableSlot(slot), value))
                .collect(),
        })
    }
}
