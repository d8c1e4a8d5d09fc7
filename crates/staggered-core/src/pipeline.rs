use crate::config::PackerConfig;
use crate::constraints::Constraints;
use crate::error::Result;
use crate::model::{BoxSize, Cell, Layout, Meta, PackingResult, Rect};
use crate::packer::{Packer, staggered::StaggeredRowPacker};
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Packs `boxes` into `rows` staggered rows and clamps the bounding size into
/// `[min_width, max_width] x [min_height, max_height]`.
///
/// Fails with an invalid-argument error when `rows == 0` or when either
/// minimum exceeds its maximum.
pub fn pack(
    rows: usize,
    boxes: &[BoxSize],
    min_width: u32,
    max_width: u32,
    min_height: u32,
    max_height: u32,
) -> Result<PackingResult> {
    let constraints = Constraints::new(min_width, max_width, min_height, max_height);
    StaggeredRowPacker::new(rows)?.pack(boxes, &constraints)
}

/// Packs `boxes` using the rows and constraints from `cfg`.
#[instrument(skip_all, fields(rows = cfg.rows, boxes = boxes.len()))]
pub fn pack_with_config(boxes: &[BoxSize], cfg: &PackerConfig) -> Result<PackingResult> {
    cfg.validate()?;
    let packer = StaggeredRowPacker::new(cfg.rows)?;
    let result = packer.pack(boxes, &cfg.constraints)?;
    debug!(
        width = result.width,
        height = result.height,
        "packed staggered grid"
    );
    Ok(result)
}

// ---------------- Keyed layout API ----------------

/// Packs keyed sizes into a staggered layout.
/// Inputs are (key, width, height); input order decides the row of each cell.
#[instrument(skip_all)]
pub fn pack_layout<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: PackerConfig,
) -> Result<Layout<String>> {
    cfg.validate()?;

    let (keys, boxes): (Vec<String>, Vec<BoxSize>) = inputs
        .into_iter()
        .map(|(k, w, h)| (k.into(), BoxSize::new(w, h)))
        .unzip();

    let result = pack_with_config(&boxes, &cfg)?;
    let cells: Vec<Cell> = keys
        .into_iter()
        .zip(boxes.iter())
        .zip(result.placements.iter())
        .enumerate()
        .map(|(index, ((key, b), p))| Cell {
            key,
            row: result.row_of(index),
            rect: Rect::new(p.x, p.y, b.width, b.height),
        })
        .collect();

    let meta = Meta {
        schema_version: "1".into(),
        app: "staggered".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        constraints: cfg.constraints,
    };
    debug!(cells = cells.len(), rows = cfg.rows, "layout built");
    Ok(Layout {
        width: result.width,
        height: result.height,
        rows: result.rows,
        cells,
        meta,
    })
}

// ---------------- Batch API ----------------

/// Packs several independent box lists with the same configuration.
///
/// Results come back in batch order. The first failing batch aborts the call.
/// With feature "parallel" and `cfg.parallel`, batches are packed on the rayon pool.
#[instrument(skip_all, fields(batches = batches.len()))]
pub fn pack_batch(batches: &[Vec<BoxSize>], cfg: &PackerConfig) -> Result<Vec<PackingResult>> {
    cfg.validate()?;
    let packer = StaggeredRowPacker::new(cfg.rows)?;

    #[cfg(feature = "parallel")]
    {
        if cfg.parallel {
            return batches
                .par_iter()
                .map(|boxes| packer.pack(boxes, &cfg.constraints))
                .collect();
        }
    }

    batches
        .iter()
        .map(|boxes| packer.pack(boxes, &cfg.constraints))
        .collect()
}
