use noticeguard_types::RepoPath;

/// In-memory view of the scanned tree, consumed by the policy engine.
#[derive(Clone, Debug, Default)]
pub struct TreeModel {
    pub root: RepoPath,

    /// Candidate files that survived the exclusion policy, as lines.
    pub files: Vec<SourceFile>,

    /// Pinned legal documents, read verbatim. `text` is `None` when the file
    /// could not be read.
    pub artifacts: Vec<ArtifactFile>,
}

#[derive(Clone, Debug, Default)]
pub struct SourceFile {
    pub path: RepoPath,
    pub lines: Vec<String>,
}

impl SourceFile {
    pub fn from_text(path: RepoPath, text: &str) -> Self {
        // A trailing newline does not produce a phantom empty line; mid-file
        // blank lines are kept.
        let mut lines: Vec<String> = text.split('\n').map(str::to_string).collect();
        if lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }
        Self { path, lines }
    }
}

#[derive(Clone, Debug, Default)]
pub struct ArtifactFile {
    pub path: RepoPath,
    pub text: Option<String>,
}

impl TreeModel {
    /// Raw text of a pinned artifact, if it was readable.
    pub fn artifact_text(&self, path: &RepoPath) -> Option<&str> {
        self.artifacts
            .iter()
            .find(|a| &a.path == path)
            .and_then(|a| a.text.as_deref())
    }
}
