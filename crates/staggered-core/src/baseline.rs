//! First-baseline alignment for a single measured box.
//!
//! Positions a child so that its first line of text sits `baseline_to_top`
//! pixels below the top of the slot, growing or shrinking the slot height by
//! the same offset.

use crate::error::{Result, StaggerError};
use crate::model::BoxSize;
use serde::{Deserialize, Serialize};

/// Where to place a baseline-aligned box and how tall its slot is.
///
/// `y` is signed: a baseline deeper than the requested distance pulls the box
/// above the slot origin.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BaselinePlacement {
    pub x: u32,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

/// Aligns a box whose first baseline is `first_baseline` pixels from its top.
///
/// Returns an invalid-argument error if the box has no baseline or if the
/// resulting slot height would be negative.
pub fn align_first_baseline(
    size: BoxSize,
    first_baseline: Option<u32>,
    baseline_to_top: u32,
) -> Result<BaselinePlacement> {
    let Some(baseline) = first_baseline else {
        return Err(StaggerError::InvalidArgument(
            "box has no first baseline to align".into(),
        ));
    };
    let y = baseline_to_top as i64 - baseline as i64;
    let height = size.height as i64 + y;
    let height = u32::try_from(height).map_err(|_| {
        StaggerError::InvalidArgument(format!(
            "baseline offset {y} leaves a negative height for a box of height {}",
            size.height
        ))
    })?;
    Ok(BaselinePlacement {
        x: 0,
        y,
        width: size.width,
        height,
    })
}
