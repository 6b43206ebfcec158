use crate::kind::SearchKind;
use crate::types::{ActionId, VariableSlot};

/// Fallback target value and follow-up action for one search kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchDefaults {
    /// Value compared against the sampled attribute when a command omits it.
    pub target: i32,
    /// Action reserved when a search of this kind matches.
    pub action: ActionId,
}

impl SearchDefaults {
    pub const fn new(target: i32, action: ActionId) -> Self {
        Self { target, action }
    }
}

/// Process-wide radar configuration.
///
/// Loaded once at startup and passed by reference into every command; nothing
/// in this crate mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RadarDefaults {
    /// Half-width of the scanned square, in tiles.
    pub radius: u32,
    /// Variable slot holding the center's X coordinate.
    pub x_variable: VariableSlot,
    /// Variable slot holding the center's Y coordinate.
    pub y_variable: VariableSlot,
    /// Tile layer inspected by tile searches.
    pub tile_layer: i32,
    pub event_match: SearchDefaults,
    pub event_greater: SearchDefaults,
    pub event_less: SearchDefaults,
    pub terrain_tag: SearchDefaults,
    pub tile_id: SearchDefaults,
    pub region_id: SearchDefaults,
}

impl RadarDefaults {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RADIUS: u32 = 2;
    pub const DEFAULT_X_VARIABLE: VariableSlot = VariableSlot(15);
    pub const DEFAULT_Y_VARIABLE: VariableSlot = VariableSlot(16);
    pub const DEFAULT_TILE_LAYER: i32 = 0;

    // ===== hard limits =====
    /// Largest radius a command or loaded defaults may request.
    pub const MAX_RADIUS: u32 = 255;

    pub fn new() -> Self {
        Self {
            radius: Self::DEFAULT_RADIUS,
            x_variable: Self::DEFAULT_X_VARIABLE,
            y_variable: Self::DEFAULT_Y_VARIABLE,
            tile_layer: Self::DEFAULT_TILE_LAYER,
            event_match: SearchDefaults::new(1, ActionId(11)),
            event_greater: SearchDefaults::new(0, ActionId(12)),
            event_less: SearchDefaults::new(1, ActionId(13)),
            terrain_tag: SearchDefaults::new(1, ActionId(14)),
            tile_id: SearchDefaults::new(1, ActionId(15)),
            region_id: SearchDefaults::new(1, ActionId(16)),
        }
    }

    /// Sets the default radius, capped at [`Self::MAX_RADIUS`].
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius.min(Self::MAX_RADIUS);
        self
    }

    /// Returns the per-kind defaults bound to `kind`.
    pub fn search(&self, kind: SearchKind) -> &SearchDefaults {
        match kind {
            SearchKind::EventEquals => &self.event_match,
            SearchKind::EventGreaterThan => &self.event_greater,
            SearchKind::EventLessThan => &self.event_less,
            SearchKind::TerrainTagEquals => &self.terrain_tag,
            SearchKind::TileIdEquals => &self.tile_id,
            SearchKind::RegionIdEquals => &self.region_id,
        }
    }

    pub fn target_for(&self, kind: SearchKind) -> i32 {
        self.search(kind).target
    }

    pub fn action_for(&self, kind: SearchKind) -> ActionId {
        self.search(kind).action
    }
}

impl Default for RadarDefaults {
    fn default() -> Self {
        Self::new()
    }
}
