use crate::{RenderableReport, RenderableSeverity, RenderableVerdictStatus};

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Noticeguard report\n\n");
    let verdict = match report.verdict {
        RenderableVerdictStatus::Pass => "PASS",
        RenderableVerdictStatus::Warn => "WARN",
        RenderableVerdictStatus::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Files scanned: {} / pinned artifacts: {}\n- Findings: {} (emitted) / {} (total)\n\n",
        verdict,
        report.data.files_scanned,
        report.data.artifacts_checked,
        report.data.findings_emitted,
        report.data.findings_total
    ));

    if let Some(r) = &report.data.truncated_reason {
        out.push_str(&format!("> Note: {}\n\n", r));
    }

    if report.findings.is_empty() {
        out.push_str("No findings.\n");
        return out;
    }

    out.push_str("## Findings\n\n");

    for f in &report.findings {
        let sev = match f.severity {
            RenderableSeverity::Info => "INFO",
            RenderableSeverity::Warning => "WARN",
            RenderableSeverity::Error => "ERROR",
        };

        if let Some(loc) = &f.location {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {} (`{}`:{})\n",
                sev,
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message,
                loc.path,
                loc.line.unwrap_or(0)
            ));
        } else {
            out.push_str(&format!(
                "- [{}] `{}` / `{}`: {}\n",
                sev,
                f.check_id.as_deref().unwrap_or(""),
                f.code,
                f.message
            ));
        }

        if let Some(help) = &f.help {
            out.push_str(&format!("  - help: {}\n", help));
        }
        if let Some(url) = &f.url {
            out.push_str(&format!("  - url: {}\n", url));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableData, RenderableFinding, RenderableLocation};

    fn empty_data() -> RenderableData {
        RenderableData {
            files_scanned: 0,
            artifacts_checked: 0,
            findings_emitted: 0,
            findings_total: 0,
            truncated_reason: None,
        }
    }

    #[test]
    fn renders_empty_report() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Pass,
            findings: Vec::new(),
            data: empty_data(),
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("No findings"));
    }

    #[test]
    fn renders_findings_with_location_help_and_truncation() {
        let report = RenderableReport {
            verdict: RenderableVerdictStatus::Fail,
            findings: vec![RenderableFinding {
                severity: RenderableSeverity::Error,
                check_id: Some("notice.short_license".to_string()),
                code: "notice_line_mismatch".to_string(),
                message: "license problem in src/a.py (license line: 3)".to_string(),
                location: Some(RenderableLocation {
                    path: "src/a.py".to_string(),
                    line: Some(3),
                    col: None,
                }),
                help: Some("fix the header".to_string()),
                url: None,
            }],
            data: RenderableData {
                files_scanned: 12,
                artifacts_checked: 2,
                findings_emitted: 1,
                findings_total: 2,
                truncated_reason: Some("truncated".to_string()),
            },
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("Files scanned: 12 / pinned artifacts: 2"));
        assert!(md.contains("> Note: truncated"));
        assert!(md.contains("## Findings"));
        assert!(md.contains("[ERROR]"));
        assert!(md.contains("`src/a.py`:3"));
        assert!(md.contains("help: fix the header"));
    }
}
