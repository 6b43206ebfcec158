use crate::kind::SearchKind;
use crate::scan::Neighborhood;
use crate::types::Position;

/// A fully-resolved radar search.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Query {
    pub kind: SearchKind,
    /// Value the sampled attribute is compared against.
    pub target: i32,
    pub center: Position,
    /// Tile layer; ignored by every kind except [`SearchKind::TileIdEquals`].
    pub layer: i32,
    /// Half-width of the scanned square. `0` scans only the center.
    pub radius: u32,
}

impl Query {
    pub fn new(kind: SearchKind, target: i32, center: Position, radius: u32) -> Self {
        Self {
            kind,
            target,
            center,
            layer: 0,
            radius,
        }
    }

    #[must_use]
    pub fn with_layer(mut self, layer: i32) -> Self {
        self.layer = layer;
        self
    }

    /// Cells covered by this query, in scan order.
    pub fn neighborhood(&self) -> Neighborhood {
        Neighborhood::new(self.center, self.radius)
    }
}
