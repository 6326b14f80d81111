//! The license block matcher.
//!
//! A notice header is: a line containing `Copyright (c)`, a blank line, then
//! the canonical notice text. Comparison strips one leading `#` per line and
//! trims surrounding whitespace, so `#`-commented headers and bare lines
//! inside a block comment both match the same canonical text.

/// Literal substring that marks the start of a notice header.
pub const COPYRIGHT_MARKER: &str = "Copyright (c)";

/// Comment marker stripped (at most once) from the front of each header line.
pub const COMMENT_MARKER: char = '#';

/// GPLv2 short notice. The leading blank line is part of the canonical text;
/// line 0 is never compared directly (it is the blank-after-copyright slot).
pub const SHORT_NOTICE_TEXT: &str = "
This program is free software; you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation; version 2 of the License.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program; if not, write to the Free Software
Foundation, Inc., 51 Franklin St, Fifth Floor, Boston, MA  02110-1301  USA
";

/// Ground-truth notice text, split into lines once at construction.
#[derive(Clone, Debug)]
pub struct CanonicalNotice {
    lines: Vec<String>,
    expected_count: usize,
}

impl CanonicalNotice {
    /// Build from raw text. The text should start with a blank line; the line
    /// count the matcher must reach is `lines - 1` (the trailing blank after
    /// the final newline is skipped).
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        let expected_count = lines.len().saturating_sub(1);
        Self {
            lines,
            expected_count,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The exact value the matcher's line counter must land on (13 for the
    /// built-in GPLv2 notice).
    pub fn expected_count(&self) -> usize {
        self.expected_count
    }
}

impl Default for CanonicalNotice {
    fn default() -> Self {
        CanonicalNotice::from_text(SHORT_NOTICE_TEXT)
    }
}

/// Failure taxonomy for the notice matcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NoticeError {
    /// No line containing the copyright marker before end-of-file, or the
    /// file ended right after it (the blank-line check read past the end).
    #[error("copyright marker not found before end of file")]
    MarkerNotFound,

    /// A header line diverges from the canonical text. Line 0 is the blank
    /// line after the copyright statement; lines 1.. index the canonical
    /// notice.
    #[error("notice text mismatch at license line {line}")]
    Format { line: usize },

    /// The file ended before the full notice block was read.
    #[error("notice truncated after {lines} of {expected} lines")]
    UnexpectedEof { lines: usize, expected: usize },
}

/// Strip exactly one leading comment marker, if present.
pub fn strip_comment_marker(line: &str) -> &str {
    line.strip_prefix(COMMENT_MARKER).unwrap_or(line)
}

/// Match a file's lines against the canonical notice.
///
/// Either the header matches structurally or the error names the offending
/// license line index. No partial or fuzzy matching.
pub fn check_short_notice<'a, I>(lines: I, notice: &CanonicalNotice) -> Result<(), NoticeError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut lines = lines.into_iter();

    // Seek the line carrying the copyright statement.
    loop {
        match lines.next() {
            Some(line) if line.contains(COPYRIGHT_MARKER) => break,
            Some(_) => continue,
            None => return Err(NoticeError::MarkerNotFound),
        }
    }

    // Always a blank line after the copyright statement.
    let line = lines.next().ok_or(NoticeError::MarkerNotFound)?;
    if !strip_comment_marker(line).trim().is_empty() {
        return Err(NoticeError::Format { line: 0 });
    }

    let expected = notice.lines();
    let mut curr = 1usize;
    for line in lines {
        let line = strip_comment_marker(line);
        if curr + 1 >= expected.len() {
            // At the end; the trailing blank is skipped.
            break;
        }
        if expected[curr].trim() != line.trim() {
            return Err(NoticeError::Format { line: curr });
        }
        curr += 1;
    }

    if curr != notice.expected_count() {
        return Err(NoticeError::UnexpectedEof {
            lines: curr,
            expected: notice.expected_count(),
        });
    }

    Ok(())
}
