use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - file path (repo-relative)
/// - detail (license line index, pinned digest, ...) if present
pub fn fingerprint_for_finding(
    check_id: &str,
    code: &str,
    path: &str,
    detail: Option<&str>,
) -> String {
    let mut parts = vec![check_id, code, path];
    if let Some(d) = detail {
        parts.push(d);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
