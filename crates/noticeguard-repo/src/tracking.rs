//! The "is this file tracked by version control" capability.
//!
//! Build artifacts and stray local files must not be checked; only files the
//! project actually ships carry the notice requirement. The query is a trait
//! so tests can substitute an in-memory fake.

use anyhow::Context;
use camino::Utf8Path;
use noticeguard_types::RepoPath;
use std::collections::BTreeSet;
use std::process::Command;

pub trait TrackingQuery {
    fn is_tracked(&self, path: &RepoPath) -> bool;
}

/// Treat every file as tracked. Used by `--all-files` and in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackEverything;

impl TrackingQuery for TrackEverything {
    fn is_tracked(&self, _path: &RepoPath) -> bool {
        true
    }
}

/// Git-backed tracking query. The index is loaded once per run.
#[derive(Clone, Debug)]
pub struct GitIndex {
    tracked: BTreeSet<String>,
}

impl GitIndex {
    /// Load the set of tracked paths via `git ls-files -z`.
    pub fn load(repo_root: &Utf8Path) -> anyhow::Result<Self> {
        let output = Command::new("git")
            .current_dir(repo_root)
            .args(["ls-files", "-z"])
            .output()
            .context("spawn git")?;

        if !output.status.success() {
            anyhow::bail!("git ls-files returned non-zero exit status");
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let tracked = stdout
            .split('\0')
            .filter(|s| !s.is_empty())
            .map(|s| RepoPath::new(s).as_str().to_string())
            .collect();

        Ok(Self { tracked })
    }

    /// True when the index lists no files (fresh repository, nothing added).
    /// Callers may want to warn: an empty index means nothing scans.
    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}

impl TrackingQuery for GitIndex {
    fn is_tracked(&self, path: &RepoPath) -> bool {
        self.tracked.contains(path.as_str())
    }
}

/// In-memory tracking set for tests.
#[derive(Clone, Debug, Default)]
pub struct StaticTracking {
    tracked: BTreeSet<String>,
}

impl StaticTracking {
    pub fn of<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tracked: paths
                .into_iter()
                .map(|p| RepoPath::new(p.as_ref()).as_str().to_string())
                .collect(),
        }
    }
}

impl TrackingQuery for StaticTracking {
    fn is_tracked(&self, path: &RepoPath) -> bool {
        self.tracked.contains(path.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tracking_normalizes_paths() {
        let t = StaticTracking::of(["./src/main.rs"]);
        assert!(t.is_tracked(&RepoPath::new("src/main.rs")));
        assert!(!t.is_tracked(&RepoPath::new("src/lib.rs")));
    }

    #[test]
    fn git_index_loads_from_a_real_repository() {
        if Command::new("git").arg("--version").output().is_err() {
            return; // no git on this machine
        }

        let tmp = tempfile::TempDir::new().expect("temp dir");
        let root = Utf8Path::from_path(tmp.path()).expect("utf8 path");

        let run = |args: &[&str]| {
            Command::new("git")
                .current_dir(root)
                .args(args)
                .output()
                .expect("run git")
        };
        run(&["init", "-q"]);
        std::fs::write(root.join("tracked.txt"), "x\n").expect("write");
        std::fs::write(root.join("untracked.txt"), "y\n").expect("write");
        run(&["add", "tracked.txt"]);

        let index = GitIndex::load(root).expect("load index");
        assert!(index.is_tracked(&RepoPath::new("tracked.txt")));
        assert!(!index.is_tracked(&RepoPath::new("untracked.txt")));
    }
}
