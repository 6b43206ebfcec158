use crate::kind::CellAttribute;
use crate::types::Position;

/// Value every map accessor returns for coordinates outside the map.
///
/// No search predicate is satisfied by this value.
pub const OUT_OF_BOUNDS: i32 = -1;

/// Read-only per-cell map queries.
///
/// Implementations must return [`OUT_OF_BOUNDS`] instead of failing when the
/// position (or the layer) lies outside the map, so callers never need their
/// own bounds checks.
pub trait MapOracle {
    /// Id of the event standing on the cell, `0` when there is none.
    fn event_id_at(&self, position: Position) -> i32;
    fn terrain_tag_at(&self, position: Position) -> i32;
    fn tile_id_at(&self, position: Position, layer: i32) -> i32;
    fn region_id_at(&self, position: Position) -> i32;

    /// Reads a single attribute; `layer` only matters for tile ids.
    fn attribute_at(&self, attribute: CellAttribute, position: Position, layer: i32) -> i32 {
        match attribute {
            CellAttribute::EventId => self.event_id_at(position),
            CellAttribute::TerrainTag => self.terrain_tag_at(position),
            CellAttribute::TileId => self.tile_id_at(position, layer),
            CellAttribute::RegionId => self.region_id_at(position),
        }
    }

    /// Reads every attribute of a cell at once.
    fn sample(&self, position: Position, layer: i32) -> CellSample {
        CellSample {
            position,
            event_id: self.event_id_at(position),
            terrain_tag: self.terrain_tag_at(position),
            tile_id: self.tile_id_at(position, layer),
            region_id: self.region_id_at(position),
        }
    }
}

/// All attributes of one cell, read on demand and never cached across scans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellSample {
    pub position: Position,
    pub event_id: i32,
    pub terrain_tag: i32,
    /// Tile id on the layer the sample was taken for.
    pub tile_id: i32,
    pub region_id: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapDimensions {
    pub width: u32,
    pub height: u32,
}

impl MapDimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as u32) < self.width
            && (position.y as u32) < self.height
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Stored attributes of a single grid cell.
///
/// Attribute values are expected to be non-negative: a stored
/// [`OUT_OF_BOUNDS`] reads the same as a cell off the map and never matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CellData {
    pub event_id: i32,
    pub terrain_tag: i32,
    pub region_id: i32,
    /// Tile id per layer, bottom layer first. Missing layers read as `0`.
    pub tiles: Vec<i32>,
}

/// In-memory map backed by a flat row-major cell array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    layers: u32,
    cells: Vec<CellData>,
}

impl GridMap {
    /// Creates a zero-filled map: no events, tag 0, region 0, tile 0 everywhere.
    pub fn new(dimensions: MapDimensions, layers: u32) -> Self {
        Self {
            dimensions,
            layers,
            cells: vec![CellData::default(); dimensions.area()],
        }
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn layers(&self) -> u32 {
        self.layers
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    pub fn cell(&self, position: Position) -> Option<&CellData> {
        self.index(position).map(|index| &self.cells[index])
    }

    pub fn cell_mut(&mut self, position: Position) -> Option<&mut CellData> {
        self.index(position).map(move |index| &mut self.cells[index])
    }

    /// Replaces a cell; returns `false` when the position is outside the map.
    pub fn set_cell(&mut self, position: Position, data: CellData) -> bool {
        match self.cell_mut(position) {
            Some(cell) => {
                *cell = data;
                true
            }
            None => false,
        }
    }

    pub fn set_event(&mut self, position: Position, event_id: i32) -> bool {
        self.update(position, |cell| cell.event_id = event_id)
    }

    pub fn set_terrain_tag(&mut self, position: Position, terrain_tag: i32) -> bool {
        self.update(position, |cell| cell.terrain_tag = terrain_tag)
    }

    pub fn set_region(&mut self, position: Position, region_id: i32) -> bool {
        self.update(position, |cell| cell.region_id = region_id)
    }

    /// Sets a tile id; fails for positions or layers outside the map.
    pub fn set_tile(&mut self, position: Position, layer: u32, tile_id: i32) -> bool {
        if layer >= self.layers {
            return false;
        }
        self.update(position, |cell| {
            let layer = layer as usize;
            if cell.tiles.len() <= layer {
                cell.tiles.resize(layer + 1, 0);
            }
            cell.tiles[layer] = tile_id;
        })
    }

    fn update(&mut self, position: Position, apply: impl FnOnce(&mut CellData)) -> bool {
        match self.cell_mut(position) {
            Some(cell) => {
                apply(cell);
                true
            }
            None => false,
        }
    }
}

impl MapOracle for GridMap {
    fn event_id_at(&self, position: Position) -> i32 {
        self.cell(position)
            .map_or(OUT_OF_BOUNDS, |cell| cell.event_id)
    }

    fn terrain_tag_at(&self, position: Position) -> i32 {
        self.cell(position)
            .map_or(OUT_OF_BOUNDS, |cell| cell.terrain_tag)
    }

    fn tile_id_at(&self, position: Position, layer: i32) -> i32 {
        if layer < 0 || layer as u32 >= self.layers {
            return OUT_OF_BOUNDS;
        }
        self.cell(position).map_or(OUT_OF_BOUNDS, |cell| {
            cell.tiles.get(layer as usize).copied().unwrap_or(0)
        })
    }

    fn region_id_at(&self, position: Position) -> i32 {
        self.cell(position)
            .map_or(OUT_OF_BOUNDS, |cell| cell.region_id)
    }
}
