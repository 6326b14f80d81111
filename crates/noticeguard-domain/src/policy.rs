use crate::notice::CanonicalNotice;
use noticeguard_types::{RepoPath, Severity};
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailOn {
    Error,
    Warning,
}

#[derive(Clone, Debug)]
pub struct CheckPolicy {
    pub enabled: bool,
    pub severity: Severity,
}

impl CheckPolicy {
    pub fn enabled(severity: Severity) -> Self {
        Self {
            enabled: true,
            severity,
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            severity: Severity::Info,
        }
    }
}

/// Exclusion rules applied by the tree scanner. Loaded once, never mutated.
#[derive(Clone, Debug)]
pub struct ScanPolicy {
    /// Top-level folder segments to skip entirely.
    pub ignore_folders: Vec<String>,
    /// Repo-relative file paths to skip.
    pub ignore_files: Vec<String>,
    /// Extensions to skip, dot included (`".md"`).
    pub ignore_extensions: Vec<String>,
    /// Extra repo-relative glob patterns to skip.
    pub ignore_globs: Vec<String>,
}

impl Default for ScanPolicy {
    fn default() -> Self {
        Self {
            ignore_folders: [".git", ".idea", "build", "gtest", "boost"]
                .map(str::to_string)
                .to_vec(),
            ignore_files: [".gitignore", "License.txt", "noticeguard.toml"]
                .map(str::to_string)
                .to_vec(),
            ignore_extensions: [".o", ".pyc", ".pyo", ".txt", ".md"]
                .map(str::to_string)
                .to_vec(),
            ignore_globs: Vec::new(),
        }
    }
}

/// A pinned legal document: either the whole file or a window of lines after
/// a marker phrase must hash to `sha1`.
#[derive(Clone, Debug)]
pub struct PinnedArtifact {
    pub path: RepoPath,
    pub marker: Option<String>,
    pub window_lines: Option<usize>,
    pub sha1: String,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub profile: String,
    pub fail_on: FailOn,
    pub max_findings: usize,
    pub scan: ScanPolicy,
    pub notice: CanonicalNotice,
    pub artifacts: Vec<PinnedArtifact>,
    pub checks: BTreeMap<String, CheckPolicy>,
}

impl EffectiveConfig {
    pub fn check_policy(&self, check_id: &str) -> Option<&CheckPolicy> {
        self.checks.get(check_id).filter(|p| p.enabled)
    }
}
