//! Core library for laying out boxes in a staggered grid.
//!
//! - Algorithm: round-robin row assignment (`index % rows`), rows filled left to right and stacked top to bottom
//! - Pipeline: `pack` / `pack_with_config` take measured sizes and return placements plus a clamped bounding size
//! - Keyed layouts (`pack_layout`) are serde-serializable; JSON exporters live in `export`
//!
//! Quick example:
//! ```
//! use staggered_core::{BoxSize, pack};
//! # fn main() -> staggered_core::Result<()> {
//! let boxes = [BoxSize::new(10, 5), BoxSize::new(20, 8), BoxSize::new(5, 5), BoxSize::new(10, 10)];
//! let out = pack(3, &boxes, 0, 100, 0, 100)?;
//! assert_eq!((out.width, out.height), (20, 23));
//! assert_eq!((out.placements[3].x, out.placements[3].y), (10, 0));
//! # Ok(()) }
//! ```

pub mod baseline;
pub mod config;
pub mod constraints;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;

pub use baseline::*;
pub use config::*;
pub use constraints::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pipeline::*;

/// Convenience prelude for common types and functions.
/// Importing `staggered_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::baseline::{BaselinePlacement, align_first_baseline};
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::constraints::Constraints;
    pub use crate::error::{Result, StaggerError};
    pub use crate::model::{
        BoxSize, Cell, Layout, LayoutStats, PackingResult, Placement, Rect, RowState,
    };
    pub use crate::packer::{Packer, staggered::StaggeredRowPacker};
    pub use crate::{pack, pack_batch, pack_layout, pack_with_config};
}
