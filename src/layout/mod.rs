//! Level layout: kind multiset, layer sizes, placement and occlusion.
//!
//! ## Key Types
//!
//! - `LayoutGenerator`: turns a `RunConfig` and an RNG into a `Layout`
//! - `Layout`: the generated `TilePool` plus layer statistics
//! - `Grid`: screen placement and the overlap test between layers

pub mod generator;
pub mod geometry;

pub use generator::{Layout, LayoutGenerator};
pub use geometry::{Grid, Placement};
