use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The two always-present parameter groups of a task step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedParams {
    #[serde(default)]
    pub path_params: IndexMap<String, String>,
    #[serde(default)]
    pub query_params: IndexMap<String, String>,
}

impl FixedParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.insert(key.into(), value.into());
        self
    }
}
