use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `noticeguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoticeguardConfigV1 {
    /// Optional schema string for tooling (`noticeguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// When to fail the check: `error` (default) or `warn`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    /// How many findings to emit before truncating the list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_findings: Option<u32>,

    /// Canonical notice text override. Must start with a blank line; the
    /// built-in GPLv2 short notice applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,

    /// Scanner exclusion rules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanConfig>,

    /// Pinned legal documents.
    #[serde(default)]
    pub artifacts: Vec<ArtifactConfig>,

    /// Map of check_id -> config.
    #[serde(default)]
    pub checks: BTreeMap<String, CheckConfig>,
}

/// Exclusion rules. Each field replaces the preset default when present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScanConfig {
    /// Top-level folders to skip, relative to the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_folders: Option<Vec<String>>,

    /// Files to skip, relative to the root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_files: Option<Vec<String>>,

    /// Extensions to skip, dot included (`".md"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignore_extensions: Option<Vec<String>>,

    /// Extra repo-relative glob patterns to skip.
    #[serde(default)]
    pub ignore_globs: Vec<String>,
}

/// One pinned legal document. Whole-file pin when `marker` is absent;
/// windowed pin (`lines` after the marker line) otherwise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ArtifactConfig {
    pub path: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<u32>,

    /// Expected SHA-1 digest, hex.
    pub sha1: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckConfig {
    /// Override preset enable/disable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Override preset severity: `info`, `warning`, `error`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}
