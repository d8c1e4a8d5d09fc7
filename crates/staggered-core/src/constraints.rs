use crate::error::{Axis, Result, StaggerError};
use serde::{Deserialize, Serialize};

/// Size bounds handed down by the host layout pass.
///
/// Both axes are closed intervals `[min, max]`. The packer clamps its bounding
/// size into them; it never clamps individual boxes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Constraints {
    #[serde(default)]
    pub min_width: u32,
    #[serde(default = "unbounded_max")]
    pub max_width: u32,
    #[serde(default)]
    pub min_height: u32,
    #[serde(default = "unbounded_max")]
    pub max_height: u32,
}

fn unbounded_max() -> u32 {
    u32::MAX
}

impl Default for Constraints {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl Constraints {
    pub fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    /// Exactly one size satisfies these constraints.
    pub fn tight(width: u32, height: u32) -> Self {
        Self::new(width, width, height, height)
    }

    /// Zero minimums with the given maximums.
    pub fn loose(max_width: u32, max_height: u32) -> Self {
        Self::new(0, max_width, 0, max_height)
    }

    pub fn unbounded() -> Self {
        Self::loose(u32::MAX, u32::MAX)
    }

    pub fn is_tight(&self) -> bool {
        self.min_width == self.max_width && self.min_height == self.max_height
    }

    /// Rejects inverted intervals on either axis, width first.
    pub fn validate(&self) -> Result<()> {
        if self.min_width > self.max_width {
            return Err(StaggerError::InvalidConstraints {
                axis: Axis::Width,
                min: self.min_width,
                max: self.max_width,
            });
        }
        if self.min_height > self.max_height {
            return Err(StaggerError::InvalidConstraints {
                axis: Axis::Height,
                min: self.min_height,
                max: self.max_height,
            });
        }
        Ok(())
    }

    pub fn constrain_width(&self, width: u32) -> u32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: u32) -> u32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Clamps `(width, height)` into these constraints.
    ///
    /// Callers must have validated first: `u32::clamp` panics on `min > max`.
    pub fn constrain(&self, width: u32, height: u32) -> (u32, u32) {
        (self.constrain_width(width), self.constrain_height(height))
    }
}
