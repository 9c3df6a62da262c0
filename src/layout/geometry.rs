//! Grid placement and overlap.
//!
//! Layer `i` is a square grid of `(i + 1)^2` cells with pitch `size`, shifted
//! up and left by `size / 2` per layer so that each tile straddles the cells
//! of the layer below. The same `size` is the overlap threshold, so the
//! drawn layout and the occlusion graph always agree.

use serde::{Deserialize, Serialize};

use crate::core::Viewport;

/// Vertical space reserved above the layout's centre line.
const HEADER_OFFSET: f32 = 60.0;

/// Where a grid cell lands on screen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub row: u32,
    pub column: u32,
    pub top: f32,
    pub left: f32,
}

/// Screen geometry for one level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    origin_top: f32,
    origin_left: f32,
    size: f32,
}

impl Grid {
    /// Centre the grid in `viewport`, or in the fallback viewport if it is
    /// empty.
    #[must_use]
    pub fn new(viewport: Viewport, size: f32) -> Self {
        let viewport = viewport.or_fallback();
        Self {
            origin_top: viewport.height / 2.0 - HEADER_OFFSET,
            origin_left: viewport.width / 2.0,
            size,
        }
    }

    /// Tile pitch and overlap threshold.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Side length, in cells, of a layer.
    #[must_use]
    pub const fn side(layer: u32) -> u32 {
        layer + 1
    }

    /// Number of cells in a layer.
    #[must_use]
    pub const fn cells(layer: u32) -> u32 {
        Self::side(layer) * Self::side(layer)
    }

    /// Place a cell of a layer.
    #[must_use]
    pub fn place(&self, layer: u32, cell: u32) -> Placement {
        let side = Self::side(layer);
        let row = cell / side;
        let column = cell % side;
        let shift = self.size / 2.0 * layer as f32;
        Placement {
            row,
            column,
            top: self.origin_top + self.size * row as f32 - shift,
            left: self.origin_left + self.size * column as f32 - shift,
        }
    }

    /// Check if two footprints overlap.
    #[must_use]
    pub fn overlaps(&self, a_top: f32, a_left: f32, b_top: f32, b_left: f32) -> bool {
        (a_top - b_top).abs() <= self.size && (a_left - b_left).abs() <= self.size
    }
}
