//! The `check` use case: scan the tree, evaluate checks, produce a report.

use anyhow::Context;
use camino::Utf8Path;
use noticeguard_repo::TrackingQuery;
use noticeguard_settings::{Overrides, ResolvedConfig};
use noticeguard_types::{NoticeguardReport, ReportEnvelope, SCHEMA_REPORT_V1, ToolMeta, Verdict};
use time::OffsetDateTime;

/// Input for the check use case.
pub struct CheckInput<'a> {
    /// Repository root path.
    pub repo_root: &'a Utf8Path,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Which files count as tracked.
    pub tracking: &'a dyn TrackingQuery,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The generated report.
    pub report: NoticeguardReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: parse config, scan the tree, evaluate, produce report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        noticeguard_settings::NoticeguardConfigV1::default()
    } else {
        noticeguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = noticeguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let model = noticeguard_repo::build_tree_model(input.repo_root, &resolved.effective, input.tracking)
        .context("build tree model")?;

    let domain_report = noticeguard_domain::evaluate(&model, &resolved.effective);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "noticeguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain_report.verdict,
        findings: domain_report.findings,
        data: domain_report.data,
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map verdict to exit code: 0 = pass/warn, 2 = fail.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Warn => 0,
        Verdict::Fail => 2,
    }
}
