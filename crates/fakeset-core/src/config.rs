use serde::{Deserialize, Serialize};

/// Behaviour switches for a fake table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FakeTableOptions {
    /// Expose an asynchronous query provider.
    #[serde(default)]
    pub async_queries: bool,
    /// Name recorded on tracing events; defaults to the element type name.
    #[serde(default)]
    pub label: Option<String>,
}

impl FakeTableOptions {
    /// Options for a table that also serves asynchronous queries.
    pub fn with_async_queries() -> Self {
        Self {
            async_queries: true,
            ..Self::default()
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
