//! Resource limits for hull construction, loadable from JSON

use crate::{ConvexHullError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for [`ConvexHull2D::build_with_config`](crate::ConvexHull2D::build_with_config).
///
/// Both limits are optional. When a limit is not hit the hull is identical to
/// the one computed without limits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullConfig {
    /// Maximum recursion depth of a single hull side
    pub max_depth: Option<usize>,
    /// Maximum number of input points
    pub max_points: Option<usize>,
}

impl HullConfig {
    /// Parse a configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: HullConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Check that the limits are usable
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == Some(0) {
            return Err(ConvexHullError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if let Some(limit) = self.max_points
            && limit < 2
        {
            return Err(ConvexHullError::InvalidConfig(format!(
                "max_points must be at least 2, got {}",
                limit
            )));
        }
        Ok(())
    }
}

/// Fluent builder for [`HullConfig`]
pub struct HullConfigBuilder {
    cfg: HullConfig,
}

impl Default for HullConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HullConfigBuilder {
    /// Creates a new builder with no limits.
    pub fn new() -> Self {
        Self {
            cfg: HullConfig::default(),
        }
    }
    /// Sets the maximum recursion depth.
    pub fn max_depth(mut self, v: usize) -> Self {
        self.cfg.max_depth = Some(v);
        self
    }
    /// Sets the maximum number of input points.
    pub fn max_points(mut self, v: usize) -> Self {
        self.cfg.max_points = Some(v);
        self
    }
    /// Validates and returns the configuration.
    pub fn build(self) -> Result<HullConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
