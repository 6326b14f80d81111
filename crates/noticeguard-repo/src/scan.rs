use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use globset::{Glob, GlobSetBuilder};
use noticeguard_domain::policy::ScanPolicy;
use noticeguard_types::RepoPath;
use std::path::PathBuf;
use walkdir::WalkDir;

use crate::tracking::TrackingQuery;

/// Walk the tree rooted at `root` and yield repo-relative candidate paths.
///
/// A candidate is a file that is:
/// - not under an ignored top-level folder
/// - not in the ignored-file set
/// - not of an ignored extension
/// - not matched by an ignore glob
/// - tracked according to `tracking`
/// - non-empty
///
/// Ordering is traversal order; callers must not depend on it.
pub fn scan_tree(
    root: &Utf8Path,
    policy: &ScanPolicy,
    tracking: &dyn TrackingQuery,
) -> anyhow::Result<Vec<RepoPath>> {
    let ignore_set = build_globset(&policy.ignore_globs).context("compile ignore globset")?;

    let walker = WalkDir::new(root).into_iter().filter_entry(|e| {
        // Prune ignored folders at the top level so their subtrees are never read.
        if e.depth() == 1 && e.file_type().is_dir() {
            let name = e.file_name().to_string_lossy();
            return !policy.ignore_folders.iter().any(|f| f.as_str() == name);
        }
        true
    });

    let mut out = Vec::new();
    for entry in walker {
        let entry = entry.context("walk tree")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(abs) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
            continue;
        };
        let rel = RepoPath::new(abs.strip_prefix(root).unwrap_or(&abs).as_str());

        if policy.ignore_files.iter().any(|f| RepoPath::new(f) == rel) {
            continue;
        }
        if let Some(ext) = rel.dot_extension() {
            if policy.ignore_extensions.contains(&ext) {
                continue;
            }
        }
        if ignore_set.is_match(rel.as_str()) {
            continue;
        }
        if !tracking.is_tracked(&rel) {
            continue;
        }
        let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
        if size == 0 {
            continue;
        }

        out.push(rel);
    }

    Ok(out)
}

fn build_globset(patterns: &[String]) -> anyhow::Result<globset::GlobSet> {
    let mut b = GlobSetBuilder::new();
    for p in patterns {
        b.add(Glob::new(p)?);
    }
    Ok(b.build()?)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
