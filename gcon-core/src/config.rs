use std::fs::read_to_string;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{FilterConfigError, FilterConfigResult};
use crate::filtering::filter_variants;
use crate::models::Variant;

pub const DEFAULT_MIN_COVERAGE: u32 = 5;
pub const DEFAULT_MIN_CONFIDENCE: u32 = 40;

/// Thresholds for [filter_variants], usually read from a `.toml` file:
///
/// ```toml
/// min_coverage = 5
/// min_confidence = 40
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    #[serde(default = "default_min_coverage")]
    pub min_coverage: u32,
    #[serde(default = "default_min_confidence")]
    pub min_confidence: u32,
}

fn default_min_coverage() -> u32 {
    DEFAULT_MIN_COVERAGE
}

fn default_min_confidence() -> u32 {
    DEFAULT_MIN_CONFIDENCE
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_coverage: DEFAULT_MIN_COVERAGE,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl FilterConfig {
    pub fn new(min_coverage: u32, min_confidence: u32) -> Self {
        Self {
            min_coverage,
            min_confidence,
        }
    }

    pub fn apply(&self, variants: &[Variant]) -> Vec<Variant> {
        filter_variants(self.min_coverage, self.min_confidence, variants)
    }
}

impl TryFrom<&str> for FilterConfig {
    type Error = FilterConfigError;

    ///
    /// Parse a [FilterConfig] from a TOML string.
    ///
    fn try_from(value: &str) -> FilterConfigResult<Self> {
        Ok(toml::from_str(value)?)
    }
}

impl TryFrom<&Path> for FilterConfig {
    type Error = FilterConfigError;

    fn try_from(path: &Path) -> FilterConfigResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = FilterConfig::try_from(toml_str.as_str())?;
        info!(
            "Loaded filter config from {}: min coverage {}, min confidence {}",
            path.display(),
            config.min_coverage,
            config.min_confidence
        );
        Ok(config)
    }
}
