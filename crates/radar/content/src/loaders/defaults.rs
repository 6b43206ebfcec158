//! Radar defaults loader.

use std::path::Path;

use radar_core::RadarDefaults;

use crate::loaders::{LoadResult, read_file};

/// Loader for radar defaults from TOML files.
///
/// Every key is optional; omitted keys keep the built-in values of
/// [`RadarDefaults::new`]. A per-kind table, when present, must give both
/// `target` and `action`.
///
/// ```toml
/// radius = 3
/// x_variable = 15
/// y_variable = 16
///
/// [terrain_tag]
/// target = 2
/// action = 40
/// ```
pub struct DefaultsLoader;

impl DefaultsLoader {
    /// Load radar defaults from a TOML file.
    pub fn load(path: &Path) -> LoadResult<RadarDefaults> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse radar defaults from TOML text.
    ///
    /// Rejects a radius above [`RadarDefaults::MAX_RADIUS`].
    pub fn parse(content: &str) -> LoadResult<RadarDefaults> {
        let defaults: RadarDefaults = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse defaults TOML: {}", e))?;

        if defaults.radius > RadarDefaults::MAX_RADIUS {
            anyhow::bail!(
                "radius {} exceeds the maximum of {}",
                defaults.radius,
                RadarDefaults::MAX_RADIUS
            );
        }
        Ok(defaults)
    }
}
