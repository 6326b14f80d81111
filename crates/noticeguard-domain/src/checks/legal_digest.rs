use crate::digest::{self, DigestError};
use crate::fingerprint::fingerprint_for_finding;
use crate::model::TreeModel;
use crate::policy::{EffectiveConfig, PinnedArtifact};
use noticeguard_types::{ids, Finding, Location, Severity};
use serde_json::json;

pub fn run(model: &TreeModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_LEGAL_PINNED_DIGEST) else {
        return;
    };

    for pin in &cfg.artifacts {
        check_pin(model, pin, policy.severity, out);
    }
}

fn check_pin(model: &TreeModel, pin: &PinnedArtifact, severity: Severity, out: &mut Vec<Finding>) {
    let path = pin.path.as_str();

    let Some(text) = model.artifact_text(&pin.path) else {
        out.push(pin_finding(
            severity,
            pin,
            ids::CODE_ARTIFACT_MISSING,
            format!("pinned legal file {path} is missing or unreadable"),
            json!({ "artifact": path }),
        ));
        return;
    };

    let computed = match (&pin.marker, pin.window_lines) {
        (Some(marker), Some(count)) => match digest::digest_window(text, marker, count) {
            Ok(d) => d,
            Err(DigestError::MarkerNotFound) => {
                out.push(pin_finding(
                    severity,
                    pin,
                    ids::CODE_MARKER_MISSING,
                    format!("could not find start of pinned section '{marker}' in {path}"),
                    json!({ "artifact": path, "marker": marker }),
                ));
                return;
            }
            Err(DigestError::UnexpectedEof { lines, expected }) => {
                out.push(pin_finding(
                    severity,
                    pin,
                    ids::CODE_WINDOW_TRUNCATED,
                    format!(
                        "pinned section '{marker}' in {path} ends after {lines} of {expected} lines"
                    ),
                    json!({ "artifact": path, "marker": marker, "lines": lines, "expected": expected }),
                ));
                return;
            }
        },
        _ => digest::digest_full(text),
    };

    let pinned = pin.sha1.to_ascii_lowercase();
    if computed != pinned {
        let section = pin
            .marker
            .as_deref()
            .map(|m| format!(" section '{m}'"))
            .unwrap_or_default();
        out.push(pin_finding(
            severity,
            pin,
            ids::CODE_DIGEST_MISMATCH,
            format!("pinned legal text in {path}{section} changed?"),
            json!({ "artifact": path, "expected": pinned, "actual": computed }),
        ));
    }
}

fn pin_finding(
    severity: Severity,
    pin: &PinnedArtifact,
    code: &str,
    message: String,
    data: serde_json::Value,
) -> Finding {
    Finding {
        severity,
        check_id: ids::CHECK_LEGAL_PINNED_DIGEST.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location {
            path: pin.path.clone(),
            line: None,
            col: None,
        }),
        help: Some(
            "If the legal text change was reviewed, update the pinned sha1 in \
             noticeguard.toml; otherwise revert the edit."
                .to_string(),
        ),
        url: None,
        fingerprint: Some(fingerprint_for_finding(
            ids::CHECK_LEGAL_PINNED_DIGEST,
            code,
            pin.path.as_str(),
            pin.marker.as_deref(),
        )),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ArtifactFile;
    use crate::notice::CanonicalNotice;
    use crate::policy::{CheckPolicy, FailOn, ScanPolicy};
    use noticeguard_types::RepoPath;
    use std::collections::BTreeMap;

    const LICENSE_TEXT: &str =
        "Sample License Text\n-------------------\nRedistribution permitted.\n";
    const LICENSE_SHA1: &str = "57d8a2679f8f885c51a97cc224a901f44fca610b";

    fn cfg_with_pins(artifacts: Vec<PinnedArtifact>) -> EffectiveConfig {
        let mut checks = BTreeMap::new();
        checks.insert(
            ids::CHECK_LEGAL_PINNED_DIGEST.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );
        EffectiveConfig {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            scan: ScanPolicy::default(),
            notice: CanonicalNotice::default(),
            artifacts,
            checks,
        }
    }

    fn model_with(path: &str, text: Option<&str>) -> TreeModel {
        TreeModel {
            root: RepoPath::new("."),
            files: Vec::new(),
            artifacts: vec![ArtifactFile {
                path: RepoPath::new(path),
                text: text.map(str::to_string),
            }],
        }
    }

    fn full_pin(sha1: &str) -> PinnedArtifact {
        PinnedArtifact {
            path: RepoPath::new("License.txt"),
            marker: None,
            window_lines: None,
            sha1: sha1.to_string(),
        }
    }

    #[test]
    fn matching_whole_file_pin_is_silent() {
        let cfg = cfg_with_pins(vec![full_pin(LICENSE_SHA1)]);
        let model = model_with("License.txt", Some(LICENSE_TEXT));
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn uppercase_pins_are_normalized() {
        let cfg = cfg_with_pins(vec![full_pin(&LICENSE_SHA1.to_ascii_uppercase())]);
        let model = model_with("License.txt", Some(LICENSE_TEXT));
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn diverging_digest_names_the_pin() {
        let cfg = cfg_with_pins(vec![full_pin(LICENSE_SHA1)]);
        let model = model_with("License.txt", Some("edited without review\n"));
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, ids::CODE_DIGEST_MISMATCH);
        assert!(out[0].message.contains("License.txt"));
        assert_eq!(out[0].data["expected"], LICENSE_SHA1);
    }

    #[test]
    fn unreadable_artifact_is_reported_not_fatal() {
        let cfg = cfg_with_pins(vec![full_pin(LICENSE_SHA1)]);
        let model = model_with("License.txt", None);
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, ids::CODE_ARTIFACT_MISSING);
    }

    #[test]
    fn windowed_pin_reports_marker_and_truncation() {
        let pin = PinnedArtifact {
            path: RepoPath::new("README.txt"),
            marker: Some("FOSS License Exception".to_string()),
            window_lines: Some(16),
            sha1: "0000000000000000000000000000000000000000".to_string(),
        };
        let cfg = cfg_with_pins(vec![pin]);

        let model = model_with("README.txt", Some("no such section\n"));
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out[0].code, ids::CODE_MARKER_MISSING);

        let model = model_with("README.txt", Some("FOSS License Exception\nonly one line\n"));
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out[0].code, ids::CODE_WINDOW_TRUNCATED);
    }
}
