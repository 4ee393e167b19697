use super::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_MAX_PLAN_LENGTH: usize = 200;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
pub enum SearchAlgorithm {
    #[default]
    #[serde(rename = "hillClimbing")]
    HillClimbing,
}

/// The `planner` section of the tool configuration.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerConfig {
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
    /// Growth of a single plan stops at this many actions.
    #[serde(default = "default_max_plan_length")]
    pub max_plan_length: usize,
}

fn default_max_plan_length() -> usize {
    DEFAULT_MAX_PLAN_LENGTH
}

impl Default for PlannerConfig {
    fn default() -> Self {
        PlannerConfig {
            algorithm: SearchAlgorithm::default(),
            max_plan_length: DEFAULT_MAX_PLAN_LENGTH,
        }
    }
}

impl PlannerConfig {
    pub fn with_max_plan_length(mut self, max_plan_length: usize) -> Self {
        self.max_plan_length = max_plan_length;
        self
    }

    pub fn from_json_str(s: &str) -> TPResult<Self> {
        let config: PlannerConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> TPResult<Self> {
        let s = std::fs::read_to_string(path)?;
        PlannerConfig::from_json_str(&s)
    }

    pub fn validate(&self) -> TPResult<()> {
        if self.max_plan_length == 0 {
            return Err(TPError::Config("maxPlanLength must be at least 1".into()));
        }
        Ok(())
    }
}
