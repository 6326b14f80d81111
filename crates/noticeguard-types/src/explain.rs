//! Explain registry for checks and codes.
//!
//! Maps check IDs and codes to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a check or code.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the check/code.
    pub title: &'static str,
    /// What the check does and why it exists.
    pub description: &'static str,
    /// How to fix violations.
    pub remediation: &'static str,
}

/// Look up an explanation by check_id or code.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    // Try check_id first, then code
    match identifier {
        // Check IDs
        ids::CHECK_NOTICE_SHORT_LICENSE => Some(explain_short_license()),
        ids::CHECK_LEGAL_PINNED_DIGEST => Some(explain_pinned_digest()),

        // Codes
        ids::CODE_COPYRIGHT_MISSING => Some(explain_copyright_missing()),
        ids::CODE_NOTICE_LINE_MISMATCH => Some(explain_notice_line_mismatch()),
        ids::CODE_NOTICE_TRUNCATED => Some(explain_notice_truncated()),
        ids::CODE_ARTIFACT_MISSING => Some(explain_artifact_missing()),
        ids::CODE_MARKER_MISSING => Some(explain_marker_missing()),
        ids::CODE_WINDOW_TRUNCATED => Some(explain_window_truncated()),
        ids::CODE_DIGEST_MISMATCH => Some(explain_digest_mismatch()),

        _ => None,
    }
}

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[
        ids::CHECK_NOTICE_SHORT_LICENSE,
        ids::CHECK_LEGAL_PINNED_DIGEST,
    ]
}

/// List all known codes.
pub fn all_codes() -> &'static [&'static str] {
    &[
        ids::CODE_COPYRIGHT_MISSING,
        ids::CODE_NOTICE_LINE_MISMATCH,
        ids::CODE_NOTICE_TRUNCATED,
        ids::CODE_ARTIFACT_MISSING,
        ids::CODE_MARKER_MISSING,
        ids::CODE_WINDOW_TRUNCATED,
        ids::CODE_DIGEST_MISMATCH,
    ]
}

// --- Check-level explanations ---

fn explain_short_license() -> Explanation {
    Explanation {
        title: "Short License Notice",
        description: "\
Verifies that every tracked, non-excluded source file starts with the expected
short license notice: a line containing `Copyright (c)`, a blank line, then the
canonical notice text compared line by line (a single leading `#` comment marker
is stripped, surrounding whitespace is ignored).",
        remediation: "\
Copy the notice header from an existing source file in this repository and place
it at the top of the offending file, keeping the blank line after the copyright
statement. Generated or third-party files can be excluded via the `[scan]`
section of noticeguard.toml.",
    }
}

fn explain_pinned_digest() -> Explanation {
    Explanation {
        title: "Pinned Legal Text Digest",
        description: "\
Verifies that designated legal documents match a pinned SHA-1 digest, either for
the whole file or for a fixed-length window of lines following a marker phrase.
This detects unreviewed edits to legal text.",
        remediation: "\
If the legal text was changed intentionally and the change has been reviewed,
recompute the digest (`sha1sum` over the file or the windowed lines) and update
the `[[artifacts]]` entry in noticeguard.toml. Otherwise revert the edit.",
    }
}

// --- Code-level explanations ---

fn explain_copyright_missing() -> Explanation {
    Explanation {
        title: "Copyright Line Missing",
        description: "\
No line containing `Copyright (c)` was found before the end of the file, or the
file ended immediately after the copyright line.",
        remediation: "Add the standard notice header at the top of the file.",
    }
}

fn explain_notice_line_mismatch() -> Explanation {
    Explanation {
        title: "Notice Line Mismatch",
        description: "\
A line of the notice block differs from the canonical text. Line 0 is the blank
line that must directly follow the copyright statement; lines 1 and up index
into the canonical notice.",
        remediation: "\
Make the header match the canonical notice exactly. Comparison trims surrounding
whitespace and strips one leading `#`, so comment style does not matter, but the
words must match.",
    }
}

fn explain_notice_truncated() -> Explanation {
    Explanation {
        title: "Notice Truncated",
        description: "The file ended before the full notice block was read.",
        remediation: "Complete the notice header; all 13 lines are required.",
    }
}

fn explain_artifact_missing() -> Explanation {
    Explanation {
        title: "Pinned Artifact Missing",
        description: "A file named by an `[[artifacts]]` pin could not be read.",
        remediation: "Restore the file or remove the stale pin from noticeguard.toml.",
    }
}

fn explain_marker_missing() -> Explanation {
    Explanation {
        title: "Marker Phrase Missing",
        description: "\
The marker phrase that anchors a pinned text window was not found in the
artifact before end-of-file.",
        remediation: "Restore the section heading the pin anchors on, or update the pin.",
    }
}

fn explain_window_truncated() -> Explanation {
    Explanation {
        title: "Pinned Window Truncated",
        description: "\
Fewer lines remained after the marker phrase than the pin requires, so the
window could not be hashed.",
        remediation: "Restore the full text block following the marker phrase.",
    }
}

fn explain_digest_mismatch() -> Explanation {
    Explanation {
        title: "Digest Mismatch",
        description: "\
The SHA-1 digest of the artifact (or its pinned window) differs from the pinned
value, meaning the legal text changed since it was last reviewed.",
        remediation: "\
Review the change. If it is legitimate, update the pinned `sha1` in
noticeguard.toml; otherwise revert to the reviewed text.",
    }
}
