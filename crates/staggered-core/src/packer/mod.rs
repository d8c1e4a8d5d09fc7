use crate::constraints::Constraints;
use crate::error::Result;
use crate::model::{BoxSize, PackingResult};

pub mod staggered;

pub use staggered::StaggeredRowPacker;

/// A packer turns measured box sizes into placements plus a bounding size.
///
/// Implementations must be pure: identical inputs produce identical results,
/// and one placement is returned per input box, in input order.
pub trait Packer {
    fn pack(&self, boxes: &[BoxSize], constraints: &Constraints) -> Result<PackingResult>;
}
