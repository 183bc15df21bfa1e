//! Creates the directories and empty files described by a parsed tree.
//!
//! Entries are created depth first, parents before children and siblings in
//! input order. Existing directories are reused and existing files are
//! truncated, so running twice over the same tree is harmless. A node with an
//! unsafe name or beyond the depth limit is skipped along with its subtree;
//! any other I/O failure aborts the whole run, leaving what was already
//! created in place.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use snafu::{ResultExt, Snafu, ensure};
use tracing::{debug, info, warn};

use crate::ext::PathDisplayExt;
use crate::parser::Node;
use crate::validator::is_valid_path;

/// Depth limit meaning "no limit"
pub const UNLIMITED_DEPTH: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BeyondMaxDepth,
    InvalidName,
}

/// What happened to a single node. Skips never stop the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeOutcome {
    Created,
    Skipped(SkipReason),
}

/// Totals of a finished run. A skipped subtree counts once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    pub directories: usize,
    pub files: usize,
    pub skipped: usize,
}

impl MaterializeReport {
    fn record(&mut self, node: &Node, outcome: NodeOutcome) {
        match outcome {
            NodeOutcome::Created if node.is_dir => self.directories += 1,
            NodeOutcome::Created => self.files += 1,
            NodeOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}

pub struct Materializer {
    base: PathBuf,
}

impl Materializer {
    /// Materializes trees relative to `base`
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Creates `root` and its descendants.
    ///
    /// A `max_depth` of 0 disables the limit; a negative one is treated the
    /// same way. The root sits at depth 0.
    pub fn materialize(
        &self,
        root: &Node,
        max_depth: i64,
    ) -> Result<MaterializeReport, MaterializeError> {
        let max_depth = usize::try_from(max_depth).unwrap_or_else(|_| {
            warn!("Negative max depth {max_depth} corrected to 0 (no limit)");
            UNLIMITED_DEPTH
        });

        ensure!(
            is_valid_path(&root.name),
            InvalidRootNameSnafu {
                name: root.name.clone(),
            }
        );

        let mut report = MaterializeReport::default();
        self.create_node(root, &self.base, max_depth, 0, &mut report)?;

        if max_depth != UNLIMITED_DEPTH {
            info!("Created structure with max depth {max_depth}");
        }
        info!(
            "Created {} directories and {} files, skipped {} entries",
            report.directories, report.files, report.skipped
        );
        Ok(report)
    }

    fn create_node(
        &self,
        node: &Node,
        parent: &Path,
        max_depth: usize,
        depth: usize,
        report: &mut MaterializeReport,
    ) -> Result<NodeOutcome, MaterializeError> {
        let path = parent.join(&node.name);
        let outcome = self.create_entry(node, &path, max_depth, depth)?;
        report.record(node, outcome);

        if outcome == NodeOutcome::Created && node.is_dir {
            for child in &node.children {
                self.create_node(child, &path, max_depth, depth + 1, report)?;
            }
        }

        Ok(outcome)
    }

    fn create_entry(
        &self,
        node: &Node,
        path: &Path,
        max_depth: usize,
        depth: usize,
    ) -> Result<NodeOutcome, MaterializeError> {
        if max_depth != UNLIMITED_DEPTH && depth > max_depth {
            warn!(
                "Skipping '{}': exceeds max depth ({max_depth})",
                path.display()
            );
            return Ok(NodeOutcome::Skipped(SkipReason::BeyondMaxDepth));
        }

        if !is_valid_path(&node.name) {
            warn!("Skipping invalid name '{}'", node.name);
            return Ok(NodeOutcome::Skipped(SkipReason::InvalidName));
        }

        if node.is_dir {
            create_directory(path)?;
        } else {
            debug!("Creating file {}", path.display());
            fs::write(path, b"").context(CreateFileSnafu { path })?;
        }

        Ok(NodeOutcome::Created)
    }
}

/// `mkdir -p`, tolerating entries that already exist
fn create_directory(path: &Path) -> Result<(), MaterializeError> {
    debug!("Creating directory {}", path.display());
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
            warn!(
                "'{}' already exists and is not a directory",
                path.display()
            );
            Ok(())
        }
        Err(e) => Err(e).context(CreateDirectorySnafu { path }),
    }
}

/// Creates the tree relative to the current working directory.
pub fn build_tree(root: &Node, max_depth: i64) -> Result<MaterializeReport, MaterializeError> {
    Materializer::new(".").materialize(root, max_depth)
}

#[derive(Debug, Snafu)]
pub enum MaterializeError {
    #[snafu(display("Invalid root node name: '{}'", name))]
    InvalidRootName { name: String },
    #[snafu(display("Failed to create directory {}", path.display_absolute()))]
    CreateDirectory { path: PathBuf, source: io::Error },
    #[snafu(display("Failed to create file {}", path.display_absolute()))]
    CreateFile { path: PathBuf, source: io::Error },
}
