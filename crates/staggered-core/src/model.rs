use crate::constraints::Constraints;
use serde::{Deserialize, Serialize};

/// Measured size of one child (pixels). Identified only by its input position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct BoxSize {
    pub width: u32,
    pub height: u32,
}

impl BoxSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}

impl From<(u32, u32)> for BoxSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

/// Per-row accumulator filled by the first packing pass.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RowState {
    /// Sum of widths of every box assigned to the row.
    pub cumulative_width: u32,
    /// Tallest box assigned to the row.
    pub max_height: u32,
}

/// Top-left coordinate resolved for one input box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    pub x: u32,
    pub y: u32,
}

impl Placement {
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Output of a packing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackingResult {
    /// One placement per input box, in input order.
    pub placements: Vec<Placement>,
    /// Bounding width after clamping.
    pub width: u32,
    /// Bounding height after clamping.
    pub height: u32,
    /// Final accumulator for each row, indexed by row.
    pub rows: Vec<RowState>,
}

impl PackingResult {
    /// Row that input box `index` was assigned to.
    pub fn row_of(&self, index: usize) -> usize {
        index % self.rows.len().max(1)
    }

    /// Pairs each placement with the size it was computed from.
    ///
    /// `boxes` must be the sequence this result was packed from.
    pub fn rects(&self, boxes: &[BoxSize]) -> Vec<Rect> {
        self.placements
            .iter()
            .zip(boxes)
            .map(|(p, b)| Rect::new(p.x, p.y, b.width, b.height))
            .collect()
    }

    /// Unclamped content size (widest row, summed row heights).
    pub fn content_size(&self) -> (u32, u32) {
        let w = self
            .rows
            .iter()
            .map(|r| r.cumulative_width)
            .max()
            .unwrap_or(0);
        let h = self
            .rows
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.max_height));
        (w, h)
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge (`x + w`).
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }
    /// Returns true if `r` lies fully inside `self`.
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }
    /// Returns true if the two rectangles share any area. Empty rects never intersect.
    pub fn intersects(&self, r: &Rect) -> bool {
        if self.w == 0 || self.h == 0 || r.w == 0 || r.h == 0 {
            return false;
        }
        self.x < r.right() && r.x < self.right() && self.y < r.bottom() && r.y < self.bottom()
    }
}

/// A keyed placement within a layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Cell<K = String> {
    /// User-specified key (e.g., a child id).
    pub key: K,
    /// Row the cell was assigned to.
    pub row: usize,
    /// Placed rectangle relative to the layout origin.
    pub rect: Rect,
}

/// Layout-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// Schema version of the JSON export; current: "1".
    pub schema_version: String,
    pub app: String,
    pub version: String,
    pub constraints: Constraints,
}

/// Keyed staggered layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Layout<K = String> {
    pub width: u32,
    pub height: u32,
    pub rows: Vec<RowState>,
    pub cells: Vec<Cell<K>>,
    pub meta: Meta,
}

/// Statistics about how well a layout fills its bounding box.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct LayoutStats {
    pub num_cells: usize,
    pub num_rows: usize,
    /// Rows that received at least one cell.
    pub occupied_rows: usize,
    /// Bounding area (width * height).
    pub total_area: u64,
    /// Sum of cell areas.
    pub used_area: u64,
    /// used_area / total_area (0.0 when the layout is empty).
    pub occupancy: f64,
    pub widest_row: u32,
    pub tallest_row: u32,
}

impl<K> Layout<K> {
    pub fn stats(&self) -> LayoutStats {
        let total_area = (self.width as u64) * (self.height as u64);
        let used_area: u64 = self
            .cells
            .iter()
            .map(|c| (c.rect.w as u64) * (c.rect.h as u64))
            .sum();
        let occupied_rows = self.cells.len().min(self.rows.len());
        let occupancy = if total_area > 0 {
            used_area as f64 / total_area as f64
        } else {
            0.0
        };
        LayoutStats {
            num_cells: self.cells.len(),
            num_rows: self.rows.len(),
            occupied_rows,
            total_area,
            used_area,
            occupancy,
            widest_row: self.rows.iter().map(|r| r.cumulative_width).max().unwrap_or(0),
            tallest_row: self.rows.iter().map(|r| r.max_height).max().unwrap_or(0),
        }
    }

    /// Cells assigned to `row`, left to right.
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &Cell<K>> {
        self.cells.iter().filter(move |c| c.row == row)
    }
}

impl LayoutStats {
    pub fn summary(&self) -> String {
        format!(
            "Cells: {}, Rows: {} ({} occupied), Occupancy: {:.2}%, Total Area: {} px², Used Area: {} px²",
            self.num_cells,
            self.num_rows,
            self.occupied_rows,
            self.occupancy * 100.0,
            self.total_area,
            self.used_area,
        )
    }

    pub fn wasted_area(&self) -> u64 {
        self.total_area.saturating_sub(self.used_area)
    }

    /// Wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.total_area > 0 {
            (self.wasted_area() as f64 / self.total_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
