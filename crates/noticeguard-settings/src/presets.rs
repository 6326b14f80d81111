use noticeguard_domain::notice::CanonicalNotice;
use noticeguard_domain::policy::{CheckPolicy, EffectiveConfig, FailOn, ScanPolicy};
use noticeguard_types::Severity;
use std::collections::BTreeMap;

/// Preset profiles are opinionated defaults.
///
/// Keep these small and readable. Anything complex should go into repo config.
pub fn preset(profile: &str) -> EffectiveConfig {
    match profile {
        "warn" => warn_profile(),
        // default
        _ => strict_profile(),
    }
}

fn strict_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "strict".to_string(),
        fail_on: FailOn::Error,
        max_findings: 200,
        scan: ScanPolicy::default(),
        notice: CanonicalNotice::default(),
        artifacts: Vec::new(),
        checks: default_checks(Severity::Error),
    }
}

fn warn_profile() -> EffectiveConfig {
    EffectiveConfig {
        profile: "warn".to_string(),
        fail_on: FailOn::Warning,
        max_findings: 200,
        scan: ScanPolicy::default(),
        notice: CanonicalNotice::default(),
        artifacts: Vec::new(),
        checks: default_checks(Severity::Warning),
    }
}

fn default_checks(default_severity: Severity) -> BTreeMap<String, CheckPolicy> {
    use noticeguard_types::ids::*;
    let mut m = BTreeMap::new();

    m.insert(
        CHECK_NOTICE_SHORT_LICENSE.to_string(),
        CheckPolicy::enabled(default_severity),
    );
    m.insert(
        CHECK_LEGAL_PINNED_DIGEST.to_string(),
        CheckPolicy::enabled(default_severity),
    );

    m
}
