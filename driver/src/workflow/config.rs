use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkflowConfig {
    /// Replaces the record's own conversion constant when set.
    pub conversion_constant: Option<f64>,
    /// Drop anchors that no longer sit on a sample instead of failing the run.
    pub drop_invalid_anchors: bool,
    pub pretty: bool,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn from_args(
        conversion_constant: Option<f64>,
        drop_invalid_anchors: bool,
        pretty: bool,
    ) -> Self {
        Self {
            conversion_constant,
            drop_invalid_anchors,
            pretty,
        }
    }

    /// Command-line flags win over values loaded from a file.
    pub fn with_overrides(mut self, overrides: &WorkflowConfig) -> Self {
        if overrides.conversion_constant.is_some() {
            self.conversion_constant = overrides.conversion_constant;
        }
        self.drop_invalid_anchors |= overrides.drop_invalid_anchors;
        self.pretty |= overrides.pretty;
        self
    }
}
