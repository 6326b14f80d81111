//! The fixed-content verifier.
//!
//! Legal documents are pinned by SHA-1: either the whole file or a
//! fixed-length window of lines following a marker phrase. The window keeps
//! lines in their original form, line terminators included, so the digest is
//! byte-stable across comment and whitespace conventions elsewhere in the
//! file.

use sha1::{Digest, Sha1};

/// Failure taxonomy for windowed digests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// The marker phrase never appeared before end-of-file.
    #[error("marker phrase not found before end of file")]
    MarkerNotFound,

    /// Fewer lines remained after the marker than the window requires.
    #[error("window truncated after {lines} of {expected} lines")]
    UnexpectedEof { lines: usize, expected: usize },
}

/// SHA-1 over the full text, lowercase hex.
pub fn digest_full(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}

/// SHA-1 over exactly `count` lines following the first line that contains
/// `marker`, lowercase hex.
pub fn digest_window(text: &str, marker: &str, count: usize) -> Result<String, DigestError> {
    let mut lines = text.split_inclusive('\n');

    // Seek the marker line.
    loop {
        match lines.next() {
            Some(line) if line.contains(marker) => break,
            Some(_) => continue,
            None => return Err(DigestError::MarkerNotFound),
        }
    }

    // Collect the window verbatim.
    let mut window = String::new();
    for taken in 0..count {
        match lines.next() {
            Some(line) => window.push_str(line),
            None => {
                return Err(DigestError::UnexpectedEof {
                    lines: taken,
                    expected: count,
                });
            }
        }
    }

    Ok(digest_full(&window))
}
