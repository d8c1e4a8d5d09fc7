use crate::constraints::Constraints;
use crate::error::{Result, StaggerError};
use serde::{Deserialize, Serialize};

/// Staggered grid configuration.
///
/// Serialized flat: the constraint bounds sit next to `rows`, so a YAML file
/// reads `rows: 3`, `max_width: 640`, and so on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackerConfig {
    /// Number of horizontal rows boxes are distributed across.
    #[serde(default = "default_rows")]
    pub rows: usize,
    /// Bounds the bounding size is clamped into.
    #[serde(flatten)]
    pub constraints: Constraints,
    /// Pack batch entries on the rayon pool when feature "parallel" is on.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            constraints: Constraints::default(),
            parallel: default_parallel(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if:
    /// - `rows` is zero
    /// - a minimum constraint exceeds its maximum
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(StaggerError::InvalidRows { rows: self.rows });
        }
        self.constraints.validate()
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_rows() -> usize {
    3
}
fn default_parallel() -> bool {
    false
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn rows(mut self, v: usize) -> Self {
        self.cfg.rows = v;
        self
    }
    pub fn with_constraints(mut self, c: Constraints) -> Self {
        self.cfg.constraints = c;
        self
    }
    pub fn with_min_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.constraints.min_width = w;
        self.cfg.constraints.min_height = h;
        self
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.constraints.max_width = w;
        self.cfg.constraints.max_height = h;
        self
    }
    pub fn parallel(mut self, v: bool) -> Self {
        self.cfg.parallel = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}
