//! Animation step generation
//!
//! The heart of the crate: given two optional tree roots, the engines in
//! [`dfs`] and [`bfs`] walk the trees in lockstep and produce an ordered,
//! replayable sequence of [`AnimationStep`]s narrating the merge
//! (`merged = a + b` where both exist, pass-through where one exists, absent
//! where neither does).
//!
//! Every snapshot carries **full copies** of the accumulated node and edge
//! state, not diffs: a consumer may discard all earlier steps and still
//! render any step in isolation.

mod bfs;
mod dfs;
mod recorder;

pub use bfs::generate_bfs_steps;
pub use dfs::generate_dfs_steps;

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::tree::TreeNode;

/// Hue for elements belonging to the first source tree.
pub const TREE_ONE_COLOR: &str = "#4285f4";
/// Hue for elements belonging to the second source tree.
pub const TREE_TWO_COLOR: &str = "#f4b400";
/// Hue for merged-result elements.
pub const MERGED_COLOR: &str = "#0f9d58";

/// Scale of a node while it is the focus of the current step.
pub const ACTIVE_SCALE: f64 = 1.2;
/// Scale of a settled node.
pub const SETTLED_SCALE: f64 = 1.0;
/// Opacity of a merged node that has been synthesized but not yet committed.
pub const TENTATIVE_OPACITY: f64 = 0.7;
/// Opacity of a settled node or edge.
pub const SETTLED_OPACITY: f64 = 1.0;

/// Stroke width of a tentative edge.
pub const TENTATIVE_EDGE_WIDTH: f64 = 1.5;
/// Stroke width of a settled edge.
pub const SETTLED_EDGE_WIDTH: f64 = 1.0;

/// Nominal milliseconds between steps; snapshot timestamps are multiples of
/// this, and the player derives its tick interval from it.
pub const STEP_INTERVAL_MS: u64 = 1000;

/// Which traversal engine generates the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Algorithm {
    /// Depth-first: node, then full left subtree, then full right subtree.
    Dfs,
    /// Breadth-first: one level at a time over three parallel queues.
    Bfs,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dfs => write!(f, "DFS"),
            Algorithm::Bfs => write!(f, "BFS"),
        }
    }
}

/// Visual state of one node at one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct NodeVisual {
    /// Value displayed inside the node.
    pub value: i64,
    /// Fill hue (one of the three palette colors).
    pub color: String,
    /// Render scale; active nodes are enlarged.
    pub scale: f64,
    /// Render opacity; tentative nodes are translucent.
    pub opacity: f64,
}

/// Visual state of one parent-child edge at one step.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeVisual {
    /// Stroke hue.
    pub stroke: String,
    /// Stroke width.
    pub width: f64,
    /// Stroke opacity.
    pub opacity: f64,
}

/// Cumulative rendering snapshot for one step.
///
/// `nodes` is keyed by node id, `edges` by `"<parentId>-<childId>"`. Edges
/// are added the moment a parent-child link is established in the merged
/// tree and never removed afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AnimationSnapshot {
    /// Step-index-derived timestamp (`index * STEP_INTERVAL_MS`).
    pub timestamp: u64,
    /// Full copy of all node visual state accumulated so far.
    pub nodes: BTreeMap<String, NodeVisual>,
    /// Full copy of all edge visual state accumulated so far.
    pub edges: BTreeMap<String, EdgeVisual>,
    /// Short status line for on-screen display.
    pub message: String,
}

/// One step of the animation: a snapshot plus a longer explanation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct AnimationStep {
    /// Rendering snapshot.
    pub snapshot: AnimationSnapshot,
    /// Human-readable explanation of what this step does.
    pub description: String,
}

/// Output of one step-generation run.
///
/// The step sequence is immutable once generated; `merged_root` is the fully
/// merged tree reached by the final step, owning its entire node graph
/// (never aliased with a source tree).
#[derive(Debug, Clone, PartialEq)]
pub struct MergeAnimation {
    /// Ordered, non-empty step sequence.
    pub steps: Vec<AnimationStep>,
    /// Merged tree, or `None` when both inputs were absent.
    pub merged_root: Option<TreeNode>,
}

/// Generate the step sequence for the selected algorithm.
pub fn generate_steps(
    algorithm: Algorithm,
    root1: Option<&TreeNode>,
    root2: Option<&TreeNode>,
) -> MergeAnimation {
    match algorithm {
        Algorithm::Dfs => generate_dfs_steps(root1, root2),
        Algorithm::Bfs => generate_bfs_steps(root1, root2),
    }
}

/// Id of the node synthesized for a pair of source positions.
///
/// `merged-<id1>-<id2>`, with `null` standing in for an absent side. Source
/// ids are position-derived, so merged ids are deterministic too.
pub(crate) fn merged_id(node1: Option<&TreeNode>, node2: Option<&TreeNode>) -> String {
    format!(
        "merged-{}-{}",
        node1.map_or("null", |n| n.id.as_str()),
        node2.map_or("null", |n| n.id.as_str())
    )
}

/// Merge rule: sum where both sides exist, pass-through where one does.
pub(crate) fn merged_value(node1: Option<&TreeNode>, node2: Option<&TreeNode>) -> i64 {
    node1.map_or(0, |n| n.value) + node2.map_or(0, |n| n.value)
}
