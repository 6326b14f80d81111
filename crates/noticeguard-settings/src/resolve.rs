use crate::{model::NoticeguardConfigV1, presets};
use anyhow::Context;
use globset::Glob;
use noticeguard_domain::notice::CanonicalNotice;
use noticeguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, PinnedArtifact};
use noticeguard_types::{RepoPath, Severity};

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub max_findings: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

pub fn resolve_config(
    cfg: NoticeguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| "strict".to_string());

    let mut effective = presets::preset(&profile);

    // max findings
    if let Some(mf) = overrides.max_findings.or(cfg.max_findings) {
        effective.max_findings = mf as usize;
    }

    // canonical notice override
    if let Some(text) = cfg.notice.as_deref() {
        if !text.starts_with('\n') {
            anyhow::bail!("notice override must start with a blank line");
        }
        effective.notice = CanonicalNotice::from_text(text);
    }

    // scanner exclusions
    if let Some(scan) = cfg.scan {
        if let Some(folders) = scan.ignore_folders {
            effective.scan.ignore_folders = folders;
        }
        if let Some(files) = scan.ignore_files {
            effective.scan.ignore_files = files;
        }
        if let Some(exts) = scan.ignore_extensions {
            effective.scan.ignore_extensions = exts;
        }
        if !scan.ignore_globs.is_empty() {
            validate_globs(&scan.ignore_globs)?;
            effective.scan.ignore_globs = scan.ignore_globs;
        }
    }

    // pinned artifacts
    for a in &cfg.artifacts {
        if a.marker.is_some() != a.lines.is_some() {
            anyhow::bail!(
                "artifact {}: marker and lines must be given together",
                a.path
            );
        }
        if a.sha1.len() != 40 || !a.sha1.bytes().all(|b| b.is_ascii_hexdigit()) {
            anyhow::bail!("artifact {}: sha1 must be 40 hex characters", a.path);
        }
        effective.artifacts.push(PinnedArtifact {
            path: RepoPath::new(&a.path),
            marker: a.marker.clone(),
            window_lines: a.lines.map(|n| n as usize),
            sha1: a.sha1.clone(),
        });
    }

    // per-check overrides
    for (check_id, cc) in cfg.checks.iter() {
        let entry = effective
            .checks
            .entry(check_id.clone())
            .or_insert_with(CheckPolicy::disabled);

        if let Some(enabled) = cc.enabled {
            entry.enabled = enabled;
        }
        if let Some(sev) = cc.severity.as_deref() {
            entry.severity =
                parse_severity(sev).with_context(|| format!("invalid severity for {check_id}"))?;
        }
    }

    // fail_on override from config
    if let Some(fail_on_s) = cfg.fail_on.as_deref() {
        effective.fail_on = parse_fail_on(fail_on_s)?;
    }

    Ok(ResolvedConfig { effective })
}

fn validate_globs(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid ignore glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_severity(v: &str) -> anyhow::Result<Severity> {
    match v {
        "info" => Ok(Severity::Info),
        "warning" | "warn" => Ok(Severity::Warning),
        "error" => Ok(Severity::Error),
        other => anyhow::bail!("unknown severity: {other} (expected info|warning|error)"),
    }
}

fn parse_fail_on(v: &str) -> anyhow::Result<FailOn> {
    match v {
        "error" => Ok(FailOn::Error),
        "warning" | "warn" => Ok(FailOn::Warning),
        other => anyhow::bail!("unknown fail_on: {other} (expected error|warning)"),
    }
}
