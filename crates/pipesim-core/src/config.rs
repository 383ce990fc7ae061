//! Simulator configuration.
//!
//! `SimulatorConfig::default()` reproduces the demo pipeline exactly. A TOML
//! file may override any subset of fields; omitted fields keep their
//! defaults.
//!
//! ```toml
//! target_application = "ParaBank"
//!
//! [outcome]
//! failure_probability = 0.25
//!
//! [pacing]
//! enabled = false
//!
//! [[groups]]
//! name = "Smoke"
//! tests = ["TC001", "TC002"]
//!
//! [overrides]
//! TC002 = "FAILED"
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{default_groups, TestGroup};
use crate::overrides::OverrideTable;

/// Errors produced while loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Parameters of the biased outcome draw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutcomePolicy {
    /// Probability that a test without an override fails.
    pub failure_probability: f64,

    /// Lower bound (inclusive) of the simulated duration.
    pub min_duration_secs: f64,

    /// Upper bound (exclusive) of the simulated duration.
    pub max_duration_secs: f64,
}

impl Default for OutcomePolicy {
    fn default() -> Self {
        Self {
            failure_probability: 0.1,
            min_duration_secs: 30.0,
            max_duration_secs: 60.0,
        }
    }
}

/// Cosmetic delays between console lines. No effect on results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PacingConfig {
    pub enabled: bool,
    /// Fixed pause inside analysis, setup and aggregation stages.
    pub stage_delay_ms: u64,
    /// Per-test pause is drawn from `test_delay_min_ms..=test_delay_max_ms`.
    pub test_delay_min_ms: u64,
    pub test_delay_max_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            stage_delay_ms: 1000,
            test_delay_min_ms: 500,
            test_delay_max_ms: 1500,
        }
    }
}

impl PacingConfig {
    /// A pacing config that never sleeps.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}

/// Complete simulator configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulatorConfig {
    pub target_application: String,
    pub framework: String,
    pub groups: Vec<TestGroup>,
    pub overrides: OverrideTable,
    pub outcome: OutcomePolicy,
    pub pacing: PacingConfig,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            target_application: "ParaBank".to_string(),
            framework: "Playwright MCP".to_string(),
            groups: default_groups(),
            overrides: OverrideTable::demo(),
            outcome: OutcomePolicy::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl SimulatorConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), groups = config.groups.len(), "loaded config");
        Ok(config)
    }

    /// Check every field for values the simulator cannot use.
    ///
    /// An empty group list is accepted; it aggregates to a 0.0% pass rate.
    pub fn validate(&self) -> ConfigResult<()> {
        let p = self.outcome.failure_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::Invalid(format!(
                "failure_probability must be within [0, 1], got {p}"
            )));
        }

        let (min, max) = (
            self.outcome.min_duration_secs,
            self.outcome.max_duration_secs,
        );
        if !min.is_finite() || !max.is_finite() || min < 0.0 || min >= max {
            return Err(ConfigError::Invalid(format!(
                "duration range must satisfy 0 <= min < max, got [{min}, {max})"
            )));
        }

        if self.pacing.test_delay_min_ms > self.pacing.test_delay_max_ms {
            return Err(ConfigError::Invalid(format!(
                "test delay range is inverted: {} > {}",
                self.pacing.test_delay_min_ms, self.pacing.test_delay_max_ms
            )));
        }

        let mut seen = HashSet::new();
        for group in &self.groups {
            if group.name.trim().is_empty() {
                return Err(ConfigError::Invalid("group name must not be empty".into()));
            }
            if !seen.insert(group.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate group name: {}",
                    group.name
                )));
            }
        }

        if self.overrides.iter().any(|(id, _)| id.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "override test id must not be empty".into(),
            ));
        }

        Ok(())
    }
}
