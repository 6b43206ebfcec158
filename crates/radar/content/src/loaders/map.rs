//! Grid map loader.
//!
//! Maps are stored as RON with explicit cells only; every cell not listed is
//! zero-filled (no event, terrain tag 0, region 0, tile 0 on every layer).
//!
//! ```ron
//! (
//!     dimensions: (5, 5),
//!     layers: 2,
//!     cells: [
//!         (x: 2, y: 2, event_id: 13),
//!         (x: 1, y: 3, terrain_tag: 1, tiles: [0, 7]),
//!     ],
//! )
//! ```

use std::path::Path;

use radar_core::{CellData, GridMap, MapDimensions, Position};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map data structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default = "default_layers")]
    layers: u32,
    #[serde(default)]
    cells: Vec<CellRon>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CellRon {
    x: i32,
    y: i32,
    #[serde(default)]
    event_id: i32,
    #[serde(default)]
    terrain_tag: i32,
    #[serde(default)]
    region_id: i32,
    #[serde(default)]
    tiles: Vec<i32>,
}

fn default_layers() -> u32 {
    1
}

/// Loader for grid maps from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load a grid map from a RON file.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} (in {})", e, path.display()))
    }

    /// Parse a grid map from RON text.
    ///
    /// Rejects cells outside the map, cells listing more tiles than the map
    /// has layers, and negative attribute values (negative ids are reserved
    /// for the out-of-bounds sentinel).
    pub fn parse(content: &str) -> LoadResult<GridMap> {
        let data: MapDataRon = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map RON: {}", e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let mut map = GridMap::new(dimensions, data.layers);

        for cell in data.cells {
            let position = Position::new(cell.x, cell.y);
            if cell.tiles.len() > data.layers as usize {
                anyhow::bail!(
                    "cell {} lists {} tiles but the map has {} layers",
                    position,
                    cell.tiles.len(),
                    data.layers
                );
            }

            let negative = [
                ("event_id", cell.event_id),
                ("terrain_tag", cell.terrain_tag),
                ("region_id", cell.region_id),
            ]
            .into_iter()
            .chain(cell.tiles.iter().map(|&tile| ("tiles", tile)))
            .find(|(_, value)| *value < 0);
            if let Some((field, value)) = negative {
                anyhow::bail!("cell {} has negative {} {}", position, field, value);
            }

            let stored = map.set_cell(
                position,
                CellData {
                    event_id: cell.event_id,
                    terrain_tag: cell.terrain_tag,
                    region_id: cell.region_id,
                    tiles: cell.tiles,
                },
            );
            if !stored {
                anyhow::bail!(
                    "cell {} is outside the {}x{} map",
                    position,
                    dimensions.width,
                    dimensions.height
                );
            }
        }

        tracing::debug!(
            width = dimensions.width,
            height = dimensions.height,
            layers = data.layers,
            "map parsed"
        );
        Ok(map)
    }
}
