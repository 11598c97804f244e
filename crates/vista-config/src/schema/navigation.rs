//! Navigation bookkeeping policy.

use serde::{Deserialize, Serialize};

/// How back/forward requests update the advisory availability flags.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HistoryPolicy {
    /// A back request always enables forward, even when the sandbox
    /// refused it; a forward request never touches the back flag.
    #[default]
    Compat,
    /// Only successful requests update flags, and both directions enable
    /// their opposite.
    Symmetric,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub history_policy: HistoryPolicy,
    /// Ignore load completions that belong to a superseded request.
    pub stale_completion_guard: bool,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            history_policy: HistoryPolicy::Compat,
            stale_completion_guard: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_policy_serialization() {
        let json = serde_json::to_string(&HistoryPolicy::Symmetric).unwrap();
        assert_eq!(json, "\"symmetric\"");
        let parsed: HistoryPolicy = serde_json::from_str("\"compat\"").unwrap();
        assert_eq!(parsed, HistoryPolicy::Compat);
    }
}
