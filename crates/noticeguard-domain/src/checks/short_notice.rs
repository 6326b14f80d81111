use crate::fingerprint::fingerprint_for_finding;
use crate::model::TreeModel;
use crate::notice::{self, NoticeError};
use crate::policy::EffectiveConfig;
use noticeguard_types::{ids, Finding, Location, Severity};
use serde_json::json;

pub fn run(model: &TreeModel, cfg: &EffectiveConfig, out: &mut Vec<Finding>) {
    let Some(policy) = cfg.check_policy(ids::CHECK_NOTICE_SHORT_LICENSE) else {
        return;
    };

    for file in &model.files {
        let result =
            notice::check_short_notice(file.lines.iter().map(String::as_str), &cfg.notice);
        let Err(err) = result else { continue };
        out.push(finding_for(policy.severity, file, err));
    }
}

fn finding_for(
    severity: Severity,
    file: &crate::model::SourceFile,
    err: NoticeError,
) -> Finding {
    let path = file.path.as_str();
    // The index names a canonical-notice line, not a physical file line, so
    // it stays out of Location (annotations would point at the wrong place).
    let (code, message, license_line) = match err {
        NoticeError::MarkerNotFound => (
            ids::CODE_COPYRIGHT_MISSING,
            format!("could not find start of license in {path}"),
            None,
        ),
        NoticeError::Format { line } => (
            ids::CODE_NOTICE_LINE_MISMATCH,
            format!("license problem in {path} (license line: {line})"),
            Some(line as u32),
        ),
        NoticeError::UnexpectedEof { lines, expected } => (
            ids::CODE_NOTICE_TRUNCATED,
            format!("license notice in {path} ends after {lines} of {expected} lines"),
            None,
        ),
    };

    let detail = license_line.map(|l| l.to_string());
    let data = match license_line {
        Some(l) => json!({ "file": path, "license_line": l }),
        None => json!({ "file": path }),
    };
    Finding {
        severity,
        check_id: ids::CHECK_NOTICE_SHORT_LICENSE.to_string(),
        code: code.to_string(),
        message,
        location: Some(Location {
            path: file.path.clone(),
            line: None,
            col: None,
        }),
        help: Some(
            "Place the standard short license notice at the top of the file, \
             with a blank line after the copyright statement."
                .to_string(),
        ),
        url: None,
        fingerprint: Some(fingerprint_for_finding(
            ids::CHECK_NOTICE_SHORT_LICENSE,
            code,
            path,
            detail.as_deref(),
        )),
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SourceFile;
    use crate::notice::SHORT_NOTICE_TEXT;
    use crate::policy::{CheckPolicy, FailOn, ScanPolicy};
    use crate::notice::CanonicalNotice;
    use noticeguard_types::RepoPath;
    use std::collections::BTreeMap;

    fn cfg_with(checks: BTreeMap<String, CheckPolicy>) -> EffectiveConfig {
        EffectiveConfig {
            profile: "strict".to_string(),
            fail_on: FailOn::Error,
            max_findings: 200,
            scan: ScanPolicy::default(),
            notice: CanonicalNotice::default(),
            artifacts: Vec::new(),
            checks,
        }
    }

    fn headered_file(path: &str) -> SourceFile {
        let mut text = String::from("# Copyright (c) 2015, Example.\n#\n");
        for line in SHORT_NOTICE_TEXT.trim_matches('\n').split('\n') {
            if line.is_empty() {
                text.push_str("#\n");
            } else {
                text.push_str(&format!("# {line}\n"));
            }
        }
        text.push_str("\nbody\n");
        SourceFile::from_text(RepoPath::new(path), &text)
    }

    #[test]
    fn disabled_check_emits_nothing() {
        let model = TreeModel {
            root: RepoPath::new("."),
            files: vec![SourceFile::from_text(RepoPath::new("a.py"), "no header\n")],
            artifacts: Vec::new(),
        };
        let cfg = cfg_with(BTreeMap::new());
        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn good_header_passes_and_bad_header_is_located() {
        let mut checks = BTreeMap::new();
        checks.insert(
            ids::CHECK_NOTICE_SHORT_LICENSE.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );
        let cfg = cfg_with(checks);

        let model = TreeModel {
            root: RepoPath::new("."),
            files: vec![
                headered_file("good.py"),
                SourceFile::from_text(RepoPath::new("bad.py"), "print('no header')\n"),
            ],
            artifacts: Vec::new(),
        };

        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, ids::CODE_COPYRIGHT_MISSING);
        assert_eq!(
            out[0].location.as_ref().map(|l| l.path.as_str()),
            Some("bad.py")
        );
        assert!(out[0].fingerprint.is_some());
    }

    #[test]
    fn mismatch_finding_carries_the_license_line() {
        let mut checks = BTreeMap::new();
        checks.insert(
            ids::CHECK_NOTICE_SHORT_LICENSE.to_string(),
            CheckPolicy::enabled(Severity::Error),
        );
        let cfg = cfg_with(checks);

        let mut file = headered_file("drifted.py");
        file.lines[5] = "# something else entirely".to_string();
        let model = TreeModel {
            root: RepoPath::new("."),
            files: vec![file],
            artifacts: Vec::new(),
        };

        let mut out = Vec::new();
        run(&model, &cfg, &mut out);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].code, ids::CODE_NOTICE_LINE_MISMATCH);
        // The notice index lives in message and data only; Location.line is
        // reserved for physical file lines.
        assert_eq!(out[0].location.as_ref().and_then(|l| l.line), None);
        assert!(out[0].message.contains("license line: 4"));
        assert_eq!(out[0].data["license_line"], 4);
    }
}
