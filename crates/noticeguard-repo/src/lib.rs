//! Repository adapters: scan the tree, load candidate files and pinned artifacts.
//!
//! This crate is allowed to do filesystem IO. The tracking query is injected
//! so the git dependency stays at the edge (typically the CLI).

#![forbid(unsafe_code)]

mod scan;
mod tracking;

use anyhow::Context;
use camino::Utf8Path;
use noticeguard_domain::model::{ArtifactFile, SourceFile, TreeModel};
use noticeguard_domain::policy::EffectiveConfig;
use noticeguard_types::RepoPath;

pub use scan::scan_tree;
pub use tracking::{GitIndex, StaticTracking, TrackEverything, TrackingQuery};

/// Build the in-memory tree model used by the policy engine.
///
/// Candidate files are read lossily: the notice matcher works on text lines,
/// and a stray non-UTF-8 byte in a comment must not abort the scan. Pinned
/// artifacts that cannot be read stay in the model with no text so the engine
/// can report them instead of failing the run.
pub fn build_tree_model(
    repo_root: &Utf8Path,
    cfg: &EffectiveConfig,
    tracking: &dyn TrackingQuery,
) -> anyhow::Result<TreeModel> {
    let candidates = scan::scan_tree(repo_root, &cfg.scan, tracking).context("scan tree")?;

    let mut model = TreeModel {
        root: RepoPath::from(repo_root),
        files: Vec::new(),
        artifacts: Vec::new(),
    };

    for rel in candidates {
        let abs = repo_root.join(rel.as_str());
        let bytes = std::fs::read(&abs).with_context(|| format!("read {}", abs))?;
        let text = String::from_utf8_lossy(&bytes);
        model.files.push(SourceFile::from_text(rel, &text));
    }

    for pin in &cfg.artifacts {
        let abs = repo_root.join(pin.path.as_str());
        let text = std::fs::read(&abs)
            .ok()
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned());
        model.artifacts.push(ArtifactFile {
            path: pin.path.clone(),
            text,
        });
    }

    Ok(model)
}
