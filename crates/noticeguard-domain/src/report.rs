use noticeguard_types::{Finding, FindingCounts, NoticeguardData, Severity, Verdict};

/// Count emitted findings per severity.
pub fn tally(findings: &[Finding]) -> FindingCounts {
    let mut counts = FindingCounts::default();
    for f in findings {
        match f.severity {
            Severity::Info => counts.info += 1,
            Severity::Warning => counts.warning += 1,
            Severity::Error => counts.error += 1,
        }
    }
    counts
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: NoticeguardData,
    pub counts: FindingCounts,
}
