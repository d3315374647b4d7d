//! Cumulative step recorder shared by both traversal engines
//!
//! Owns the running node/edge visual maps and clones them into every
//! recorded step, so each snapshot stands on its own.

use std::collections::BTreeMap;

use super::{
    AnimationSnapshot, AnimationStep, EdgeVisual, NodeVisual, ACTIVE_SCALE, MERGED_COLOR,
    SETTLED_EDGE_WIDTH, SETTLED_OPACITY, SETTLED_SCALE, STEP_INTERVAL_MS, TENTATIVE_EDGE_WIDTH,
    TENTATIVE_OPACITY, TREE_ONE_COLOR, TREE_TWO_COLOR,
};
use crate::tree::TreeNode;

/// Which source tree a node belongs to; decides its hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SourceTree {
    One,
    Two,
}

impl SourceTree {
    fn color(self) -> &'static str {
        match self {
            SourceTree::One => TREE_ONE_COLOR,
            SourceTree::Two => TREE_TWO_COLOR,
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct StepRecorder {
    nodes: BTreeMap<String, NodeVisual>,
    edges: BTreeMap<String, EdgeVisual>,
    steps: Vec<AnimationStep>,
}

impl StepRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the accumulated state into a new step.
    pub fn record(&mut self, message: impl Into<String>, description: impl Into<String>) {
        let timestamp = self.steps.len() as u64 * STEP_INTERVAL_MS;
        self.steps.push(AnimationStep {
            snapshot: AnimationSnapshot {
                timestamp,
                nodes: self.nodes.clone(),
                edges: self.edges.clone(),
                message: message.into(),
            },
            description: description.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn into_steps(self) -> Vec<AnimationStep> {
        self.steps
    }

    fn set_node(&mut self, id: &str, value: i64, color: &str, scale: f64, opacity: f64) {
        self.nodes.insert(
            id.to_string(),
            NodeVisual {
                value,
                color: color.to_string(),
                scale,
                opacity,
            },
        );
    }

    /// Enlarge a source node to mark it as the focus of the current step.
    pub fn activate_source(&mut self, node: &TreeNode, tree: SourceTree, opacity: f64) {
        self.set_node(&node.id, node.value, tree.color(), ACTIVE_SCALE, opacity);
    }

    /// Return a source node to settled scale and full opacity.
    pub fn settle_source(&mut self, node: &TreeNode, tree: SourceTree) {
        self.set_node(
            &node.id,
            node.value,
            tree.color(),
            SETTLED_SCALE,
            SETTLED_OPACITY,
        );
    }

    /// Show a freshly synthesized merged node: enlarged and translucent.
    pub fn tentative_merged(&mut self, id: &str, value: i64) {
        self.set_node(id, value, MERGED_COLOR, ACTIVE_SCALE, TENTATIVE_OPACITY);
    }

    /// Enlarge an already-committed merged node (BFS dequeue highlight).
    pub fn activate_merged(&mut self, id: &str, value: i64) {
        self.set_node(id, value, MERGED_COLOR, ACTIVE_SCALE, SETTLED_OPACITY);
    }

    /// Commit a merged node: settled scale, full opacity.
    pub fn settle_merged(&mut self, id: &str, value: i64) {
        self.set_node(id, value, MERGED_COLOR, SETTLED_SCALE, SETTLED_OPACITY);
    }

    /// Add (or restyle) the edge from a merged parent to a merged child.
    ///
    /// Keyed `"<parentId>-<childId>"`; once present an edge is only ever
    /// restyled, never removed.
    pub fn tentative_edge(&mut self, parent_id: &str, child_id: &str) {
        self.set_edge(parent_id, child_id, TENTATIVE_EDGE_WIDTH, TENTATIVE_OPACITY);
    }

    /// Commit an edge to settled width and full opacity.
    pub fn settle_edge(&mut self, parent_id: &str, child_id: &str) {
        self.set_edge(parent_id, child_id, SETTLED_EDGE_WIDTH, SETTLED_OPACITY);
    }

    fn set_edge(&mut self, parent_id: &str, child_id: &str, width: f64, opacity: f64) {
        self.edges.insert(
            format!("{parent_id}-{child_id}"),
            EdgeVisual {
                stroke: MERGED_COLOR.to_string(),
                width,
                opacity,
            },
        );
    }
}
