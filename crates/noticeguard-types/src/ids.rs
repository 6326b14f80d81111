//! Stable identifiers for checks and finding codes.
//!
//! `check_id` is a dotted namespace. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_NOTICE_SHORT_LICENSE: &str = "notice.short_license";
pub const CHECK_LEGAL_PINNED_DIGEST: &str = "legal.pinned_digest";

// Codes: notice.short_license
pub const CODE_COPYRIGHT_MISSING: &str = "copyright_missing";
pub const CODE_NOTICE_LINE_MISMATCH: &str = "notice_line_mismatch";
pub const CODE_NOTICE_TRUNCATED: &str = "notice_truncated";

// Codes: legal.pinned_digest
pub const CODE_ARTIFACT_MISSING: &str = "artifact_missing";
pub const CODE_MARKER_MISSING: &str = "marker_missing";
pub const CODE_WINDOW_TRUNCATED: &str = "window_truncated";
pub const CODE_DIGEST_MISMATCH: &str = "digest_mismatch";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
