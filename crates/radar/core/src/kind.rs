//! Search kinds and the per-kind predicate table.
//!
//! Every command name the host can issue maps onto exactly one [`SearchKind`],
//! and every kind reads exactly one cell attribute. There is no fall-through
//! between kinds: an event search never evaluates terrain, tile, or region data.

use crate::env::OUT_OF_BOUNDS;

/// What a radar command looks for in each scanned cell.
///
/// Parsed from (and rendered as) the plugin command names, case-insensitively.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum SearchKind {
    /// Event id equal to the target.
    #[strum(to_string = "eventIDMatch")]
    EventEquals,
    /// Event id strictly greater than the target.
    #[strum(to_string = "eventIDGreater")]
    EventGreaterThan,
    /// Event id strictly less than the target.
    #[strum(to_string = "eventIDLesser", serialize = "eventIDLess")]
    EventLessThan,
    /// Terrain tag equal to the target.
    #[strum(to_string = "terrainTag", serialize = "terrainID")]
    TerrainTagEquals,
    /// Tile id on the query's layer equal to the target.
    #[strum(to_string = "tileID")]
    TileIdEquals,
    /// Region id equal to the target.
    #[strum(to_string = "regionID")]
    RegionIdEquals,
}

/// Per-cell attribute sampled by a search kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellAttribute {
    EventId,
    TerrainTag,
    /// Layer-scoped; the layer comes from the query.
    TileId,
    RegionId,
}

/// Positional fields accepted by a radar command, in argument order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    Target,
    X,
    Y,
    Layer,
    Radius,
}

impl SearchKind {
    const STANDARD_LAYOUT: &'static [Field] = &[Field::Target, Field::X, Field::Y, Field::Radius];
    const TILE_LAYOUT: &'static [Field] = &[
        Field::Target,
        Field::X,
        Field::Y,
        Field::Layer,
        Field::Radius,
    ];

    /// The cell attribute this kind inspects.
    pub const fn attribute(self) -> CellAttribute {
        match self {
            Self::EventEquals | Self::EventGreaterThan | Self::EventLessThan => {
                CellAttribute::EventId
            }
            Self::TerrainTagEquals => CellAttribute::TerrainTag,
            Self::TileIdEquals => CellAttribute::TileId,
            Self::RegionIdEquals => CellAttribute::RegionId,
        }
    }

    /// Argument positions for this kind's command.
    ///
    /// Only tile searches take a layer, between the coordinates and the radius.
    pub const fn layout(self) -> &'static [Field] {
        match self {
            Self::TileIdEquals => Self::TILE_LAYOUT,
            _ => Self::STANDARD_LAYOUT,
        }
    }

    /// Evaluates this kind's predicate against a sampled attribute value.
    ///
    /// The out-of-bounds sentinel never satisfies any predicate, including
    /// `EventLessThan`.
    pub const fn matches(self, observed: i32, target: i32) -> bool {
        if observed == OUT_OF_BOUNDS {
            return false;
        }

        match self {
            Self::EventEquals => observed == target,
            Self::EventGreaterThan => observed > target,
            Self::EventLessThan => observed < target,
            Self::TerrainTagEquals => observed == target,
            Self::TileIdEquals => observed == target,
            Self::RegionIdEquals => observed == target,
        }
    }
}
