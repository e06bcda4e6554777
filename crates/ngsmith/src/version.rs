//! Version information for the ngsmith CLI

use serde::{Deserialize, Serialize};

/// Version information for the current build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Semantic version
    pub version: String,
    /// Short git commit SHA, when built from a checkout
    pub commit: Option<String>,
    /// Build date
    pub build_date: Option<String>,
    /// Target triple
    pub target: Option<String>,
}

impl VersionInfo {
    /// Version info for the current build
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
            build_date: option_env!("BUILD_DATE").map(String::from),
            target: option_env!("TARGET").map(String::from),
        }
    }

    /// One-line display string
    pub fn display(&self) -> String {
        let mut parts = vec![format!("ngsmith {}", self.version)];
        if let Some(commit) = &self.commit {
            parts.push(format!("({})", commit));
        }
        if let Some(date) = &self.build_date {
            parts.push(format!("built {}", date));
        }
        if let Some(target) = &self.target {
            parts.push(target.clone());
        }
        parts.join(" ")
    }
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
