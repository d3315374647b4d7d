//! Depth-first step generation
//!
//! Pre-order merge: current node, then the full left subtree, then the full
//! right subtree. The merged tree is built bottom-up by the recursion itself,
//! so every snapshot reflects exactly the nodes merged so far: nothing is
//! ever recomputed or revisited.

use tracing::debug;

use super::recorder::{SourceTree, StepRecorder};
use super::{merged_id, merged_value, MergeAnimation, SETTLED_OPACITY};
use crate::tree::TreeNode;

/// Generate the DFS animation sequence for two optional roots.
///
/// Always returns a non-empty sequence whose final step narrates completion.
pub fn generate_dfs_steps(
    root1: Option<&TreeNode>,
    root2: Option<&TreeNode>,
) -> MergeAnimation {
    let mut recorder = StepRecorder::new();

    recorder.record(
        "Starting depth-first merge",
        "We merge the two trees depth-first: handle the current node, then \
         the whole left subtree, then the whole right subtree. Blue marks \
         tree 1, yellow marks tree 2, green marks the merged result.",
    );

    let merged_root = match (root1, root2) {
        (None, None) => {
            recorder.record(
                "Both trees are empty",
                "Neither tree has a root, so there is nothing to merge and \
                 the result is the empty tree. The merge is complete.",
            );
            None
        }
        (None, Some(root)) => {
            recorder.activate_source(root, SourceTree::Two, SETTLED_OPACITY);
            recorder.record(
                "Tree 1 is empty, the result is tree 2",
                "The first tree has no root at all, so the merged result is \
                 simply the second tree as it stands: no traversal needed. \
                 The merge is complete.",
            );
            Some(root.clone())
        }
        (Some(root), None) => {
            recorder.activate_source(root, SourceTree::One, SETTLED_OPACITY);
            recorder.record(
                "Tree 2 is empty, the result is tree 1",
                "The second tree has no root at all, so the merged result is \
                 simply the first tree as it stands: no traversal needed. \
                 The merge is complete.",
            );
            Some(root.clone())
        }
        (Some(_), Some(_)) => {
            let merged = visit(&mut recorder, root1, root2, None, 0);
            recorder.record(
                "Merge complete!",
                "Every position of the two trees has been visited and the \
                 merged tree is complete: values were summed where both \
                 trees had a node, carried over where only one did, and \
                 left absent where neither did.",
            );
            Some(*merged)
        }
    };

    debug!(steps = recorder.len(), "generated depth-first merge animation");
    MergeAnimation {
        steps: recorder.into_steps(),
        merged_root,
    }
}

/// Merge one position and recurse. At least one of `node1`, `node2` is
/// present at every call site.
fn visit(
    recorder: &mut StepRecorder,
    node1: Option<&TreeNode>,
    node2: Option<&TreeNode>,
    parent_id: Option<&str>,
    depth: usize,
) -> Box<TreeNode> {
    let id = merged_id(node1, node2);
    let value = merged_value(node1, node2);

    // merging step: sources active, merged node tentative
    if let Some(node) = node1 {
        recorder.activate_source(node, SourceTree::One, SETTLED_OPACITY);
    }
    if let Some(node) = node2 {
        recorder.activate_source(node, SourceTree::Two, SETTLED_OPACITY);
    }
    recorder.tentative_merged(&id, value);
    if let Some(parent) = parent_id {
        recorder.tentative_edge(parent, &id);
    }

    let (message, description) = match (node1, node2) {
        (Some(a), Some(b)) => (
            format!("Merging nodes: {} + {} = {}", a.value, b.value, value),
            format!(
                "Both trees have a node at this position, so their values \
                 are summed: {} + {} = {}.",
                a.value, b.value, value
            ),
        ),
        (Some(a), None) => (
            format!("Tree 2 has no node here, carrying over {}", a.value),
            "Only the first tree has a node at this position; its value is \
             carried over into the merged tree unchanged."
                .to_string(),
        ),
        (None, Some(b)) => (
            format!("Tree 1 has no node here, carrying over {}", b.value),
            "Only the second tree has a node at this position; its value is \
             carried over into the merged tree unchanged."
                .to_string(),
        ),
        (None, None) => unreachable!("visit requires at least one node"),
    };
    recorder.record(message, description);

    // restorative step: everything back to settled
    if let Some(node) = node1 {
        recorder.settle_source(node, SourceTree::One);
    }
    if let Some(node) = node2 {
        recorder.settle_source(node, SourceTree::Two);
    }
    recorder.settle_merged(&id, value);
    if let Some(parent) = parent_id {
        recorder.settle_edge(parent, &id);
    }
    recorder.record(
        format!("Settled merged node {value}"),
        "The merged node is committed: full opacity, normal size. The \
         traversal moves on.",
    );

    let mut merged = Box::new(TreeNode::leaf(value, id.clone()));

    let left1 = node1.and_then(TreeNode::left);
    let left2 = node2.and_then(TreeNode::left);
    if left1.is_none() && left2.is_none() {
        recorder.record(
            "No left child on either side",
            "Neither tree has a left child at this position, so the merged \
             tree has none either and there is nothing to descend into.",
        );
    } else {
        recorder.record(
            "Descending into the left subtree",
            "Depth-first search goes deep before wide: the entire left \
             subtree is merged before the right subtree is considered.",
        );
        merged.left = Some(visit(recorder, left1, left2, Some(&id), depth + 1));
        recorder.record(
            "Left subtree complete, backtracking",
            "Every node of the left subtree has been merged; the traversal \
             backtracks to this node and turns to the right subtree.",
        );
    }

    let right1 = node1.and_then(TreeNode::right);
    let right2 = node2.and_then(TreeNode::right);
    if right1.is_none() && right2.is_none() {
        recorder.record(
            "No right child on either side",
            "Neither tree has a right child at this position, so the merged \
             tree has none either and there is nothing to descend into.",
        );
    } else {
        recorder.record(
            "Descending into the right subtree",
            "The left subtree is done, so the same pre-order merge is \
             applied to the right subtree.",
        );
        merged.right = Some(visit(recorder, right1, right2, Some(&id), depth + 1));
    }

    // Root return needs no narration; the completion step follows directly.
    if depth > 0 {
        recorder.record(
            format!("Subtree of node {value} complete, returning to parent"),
            "Both child positions of this node have been handled, so the \
             recursion returns one level up.",
        );
    }

    merged
}
