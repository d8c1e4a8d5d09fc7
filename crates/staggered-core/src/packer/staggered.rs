use super::Packer;
use crate::constraints::Constraints;
use crate::error::{Result, StaggerError};
use crate::model::{BoxSize, PackingResult, Placement, RowState};
use tracing::trace;

/// Round-robin row packer behind the staggered grid.
///
/// Box `i` goes to row `i % rows` regardless of its size, rows fill left to
/// right, and rows stack top to bottom with each row as tall as its tallest
/// box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaggeredRowPacker {
    rows: usize,
}

impl StaggeredRowPacker {
    pub fn new(rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(StaggerError::InvalidRows { rows });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// First pass: accumulate width and max height per row.
    fn measure_rows(&self, boxes: &[BoxSize]) -> Vec<RowState> {
        let mut rows = vec![RowState::default(); self.rows];
        for (index, b) in boxes.iter().enumerate() {
            let row = &mut rows[index % self.rows];
            row.cumulative_width = row.cumulative_width.saturating_add(b.width);
            row.max_height = row.max_height.max(b.height);
        }
        rows
    }
}

impl Packer for StaggeredRowPacker {
    fn pack(&self, boxes: &[BoxSize], constraints: &Constraints) -> Result<PackingResult> {
        constraints.validate()?;

        let rows = self.measure_rows(boxes);

        let width = if boxes.is_empty() {
            constraints.min_width
        } else {
            let widest = rows.iter().map(|r| r.cumulative_width).max().unwrap_or(0);
            constraints.constrain_width(widest)
        };
        let content_height = rows
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.max_height));
        let height = constraints.constrain_height(content_height);

        // y of each row is the summed height of the rows above it
        let mut row_y = vec![0u32; self.rows];
        for r in 1..self.rows {
            row_y[r] = row_y[r - 1].saturating_add(rows[r - 1].max_height);
        }

        let mut row_x = vec![0u32; self.rows];
        let mut placements = Vec::with_capacity(boxes.len());
        for (index, b) in boxes.iter().enumerate() {
            let r = index % self.rows;
            placements.push(Placement::new(row_x[r], row_y[r]));
            row_x[r] = row_x[r].saturating_add(b.width);
        }

        trace!(
            rows = self.rows,
            boxes = boxes.len(),
            width,
            height,
            "staggered rows packed"
        );

        Ok(PackingResult {
            placements,
            width,
            height,
            rows,
        })
    }
}
