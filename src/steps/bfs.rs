//! Breadth-first step generation
//!
//! Three parallel queues (tree-1 frontier, tree-2 frontier, merged frontier)
//! are processed one full level at a time. While the merged tree is under
//! construction its nodes are addressed by index into a small arena: the
//! queue holds indices, children are linked by index, and the owned
//! [`TreeNode`] graph is materialized once at the end. This keeps the merged
//! tree free of any aliasing with the source trees.

use std::collections::VecDeque;

use tracing::debug;

use super::recorder::{SourceTree, StepRecorder};
use super::{merged_id, merged_value, MergeAnimation, SETTLED_OPACITY, TENTATIVE_OPACITY};
use crate::tree::TreeNode;

/// Merged tree under construction, addressed by index.
#[derive(Debug, Default)]
struct MergedArena {
    nodes: Vec<ArenaNode>,
}

#[derive(Debug)]
struct ArenaNode {
    value: i64,
    id: String,
    left: Option<usize>,
    right: Option<usize>,
}

impl MergedArena {
    fn push(&mut self, value: i64, id: String) -> usize {
        self.nodes.push(ArenaNode {
            value,
            id,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    fn node(&self, index: usize) -> &ArenaNode {
        &self.nodes[index]
    }

    fn link_left(&mut self, parent: usize, child: usize) {
        self.nodes[parent].left = Some(child);
    }

    fn link_right(&mut self, parent: usize, child: usize) {
        self.nodes[parent].right = Some(child);
    }

    /// Materialize the owned tree rooted at `index`.
    fn materialize(&self, index: usize) -> TreeNode {
        let node = self.node(index);
        TreeNode {
            value: node.value,
            id: node.id.clone(),
            left: node.left.map(|child| Box::new(self.materialize(child))),
            right: node.right.map(|child| Box::new(self.materialize(child))),
        }
    }
}

/// Which side of the parent a child position is on. Only affects wording and
/// which link is set; the merge rule is identical.
#[derive(Debug, Clone, Copy)]
enum ChildSide {
    Left,
    Right,
}

impl ChildSide {
    fn name(self) -> &'static str {
        match self {
            ChildSide::Left => "left",
            ChildSide::Right => "right",
        }
    }

    fn pick<'a>(self, node: Option<&'a TreeNode>) -> Option<&'a TreeNode> {
        match self {
            ChildSide::Left => node.and_then(TreeNode::left),
            ChildSide::Right => node.and_then(TreeNode::right),
        }
    }
}

/// Generate the BFS animation sequence for two optional roots.
///
/// Always returns a non-empty sequence whose final step narrates completion.
pub fn generate_bfs_steps(
    root1: Option<&TreeNode>,
    root2: Option<&TreeNode>,
) -> MergeAnimation {
    let mut recorder = StepRecorder::new();

    recorder.record(
        "Starting breadth-first merge",
        "We merge the two trees breadth-first: all nodes of one level are \
         handled before the next level begins. Blue marks tree 1, yellow \
         marks tree 2, green marks the merged result.",
    );
    recorder.record(
        "Checking for an empty tree",
        "If either tree is entirely empty the other tree already is the \
         merged result, so the traversal can be skipped outright.",
    );

    let (root1, root2) = match (root1, root2) {
        (None, None) => {
            recorder.record(
                "Both trees are empty",
                "Neither tree has a root, so there is nothing to merge and \
                 the result is the empty tree. The merge is complete.",
            );
            return finish(recorder, None);
        }
        (None, Some(root)) => {
            recorder.activate_source(root, SourceTree::Two, SETTLED_OPACITY);
            recorder.record(
                "Tree 1 is empty, the result is tree 2",
                "The first tree has no root at all, so the merged result is \
                 simply the second tree as it stands: no traversal needed. \
                 The merge is complete.",
            );
            return finish(recorder, Some(root.clone()));
        }
        (Some(root), None) => {
            recorder.activate_source(root, SourceTree::One, SETTLED_OPACITY);
            recorder.record(
                "Tree 2 is empty, the result is tree 1",
                "The second tree has no root at all, so the merged result is \
                 simply the first tree as it stands: no traversal needed. \
                 The merge is complete.",
            );
            return finish(recorder, Some(root.clone()));
        }
        (Some(a), Some(b)) => (a, b),
    };

    // merge the roots up front; children are synthesized as their parents
    // are dequeued
    let mut arena = MergedArena::default();
    let root_id = merged_id(Some(root1), Some(root2));
    let root_value = merged_value(Some(root1), Some(root2));

    recorder.activate_source(root1, SourceTree::One, SETTLED_OPACITY);
    recorder.activate_source(root2, SourceTree::Two, SETTLED_OPACITY);
    recorder.tentative_merged(&root_id, root_value);
    recorder.record(
        format!(
            "Merging root nodes: {} + {} = {}",
            root1.value, root2.value, root_value
        ),
        format!(
            "Both trees have a root, so their values are summed: {} + {} = \
             {}. This merged root seeds the traversal.",
            root1.value, root2.value, root_value
        ),
    );

    recorder.settle_source(root1, SourceTree::One);
    recorder.settle_source(root2, SourceTree::Two);
    recorder.settle_merged(&root_id, root_value);
    recorder.record(
        format!("Settled merged root {root_value}"),
        "The merged root is committed: full opacity, normal size.",
    );

    let root_index = arena.push(root_value, root_id);

    recorder.record(
        "Seeding the three traversal queues",
        "Breadth-first search keeps three queues in lockstep: one for each \
         source tree and one for the merged tree. Corresponding positions \
         are always dequeued together, with null placeholders where a source \
         tree has no node.",
    );

    let mut queue1: VecDeque<Option<&TreeNode>> = VecDeque::from([Some(root1)]);
    let mut queue2: VecDeque<Option<&TreeNode>> = VecDeque::from([Some(root2)]);
    let mut merged_queue: VecDeque<usize> = VecDeque::from([root_index]);

    let mut level = 0usize;
    while !merged_queue.is_empty() {
        level += 1;
        recorder.record(
            format!("Processing level {level}"),
            format!(
                "All nodes of level {level} are handled before the next \
                 level begins: the defining property of breadth-first \
                 traversal."
            ),
        );

        // capture the width first: children enqueued below belong to the
        // next level, not this one
        let width = merged_queue.len();
        for _ in 0..width {
            let Some(current) = merged_queue.pop_front() else {
                break;
            };
            let node1 = queue1.pop_front().flatten();
            let node2 = queue2.pop_front().flatten();

            let (current_id, current_value) = {
                let node = arena.node(current);
                (node.id.clone(), node.value)
            };
            recorder.activate_merged(&current_id, current_value);
            if let Some(node) = node1 {
                recorder.activate_source(node, SourceTree::One, SETTLED_OPACITY);
            }
            if let Some(node) = node2 {
                recorder.activate_source(node, SourceTree::Two, SETTLED_OPACITY);
            }
            recorder.record(
                "Dequeued the next node triple",
                "The heads of the three queues are taken together: the \
                 merged node plus the source nodes at the same position. \
                 Their children are examined next.",
            );

            for side in [ChildSide::Left, ChildSide::Right] {
                merge_child_position(
                    &mut recorder,
                    &mut arena,
                    current,
                    &current_id,
                    side,
                    side.pick(node1),
                    side.pick(node2),
                    &mut queue1,
                    &mut queue2,
                    &mut merged_queue,
                );
            }

            recorder.settle_merged(&current_id, current_value);
            if let Some(node) = node1 {
                recorder.settle_source(node, SourceTree::One);
            }
            if let Some(node) = node2 {
                recorder.settle_source(node, SourceTree::Two);
            }
        }

        if !merged_queue.is_empty() {
            recorder.record(
                format!("Level {} complete, advancing to level {}", level, level + 1),
                format!(
                    "Every node of level {} has been processed; the children \
                     queued along the way form level {}.",
                    level,
                    level + 1
                ),
            );
        }
    }

    recorder.record(
        "Queues exhausted",
        "The merged-tree queue is empty, so every position that exists in \
         at least one source tree has been visited.",
    );
    recorder.record(
        "Merge complete!",
        "Every position of the two trees has been visited level by level \
         and the merged tree is complete: values were summed where both \
         trees had a node, carried over where only one did, and left absent \
         where neither did.",
    );

    finish(recorder, Some(arena.materialize(root_index)))
}

/// Handle one child position of a dequeued triple: narrate, synthesize the
/// merged child if any side has one, link it, and enqueue the next triple.
#[allow(clippy::too_many_arguments)]
fn merge_child_position<'t>(
    recorder: &mut StepRecorder,
    arena: &mut MergedArena,
    parent: usize,
    parent_id: &str,
    side: ChildSide,
    child1: Option<&'t TreeNode>,
    child2: Option<&'t TreeNode>,
    queue1: &mut VecDeque<Option<&'t TreeNode>>,
    queue2: &mut VecDeque<Option<&'t TreeNode>>,
    merged_queue: &mut VecDeque<usize>,
) {
    let side_name = side.name();

    if child1.is_none() && child2.is_none() {
        recorder.record(
            format!("No {side_name} child on either side"),
            format!(
                "Neither tree has a {side_name} child at this position, so \
                 the merged tree has none either and nothing is queued."
            ),
        );
        return;
    }

    if let Some(node) = child1 {
        recorder.activate_source(node, SourceTree::One, TENTATIVE_OPACITY);
    }
    if let Some(node) = child2 {
        recorder.activate_source(node, SourceTree::Two, TENTATIVE_OPACITY);
    }

    let id = merged_id(child1, child2);
    let value = merged_value(child1, child2);
    recorder.tentative_merged(&id, value);
    recorder.tentative_edge(parent_id, &id);

    let (message, description) = match (child1, child2) {
        (Some(a), Some(b)) => (
            format!(
                "Merged {side_name} children: {} + {} = {}",
                a.value, b.value, value
            ),
            format!(
                "Both trees have a {side_name} child here, so their values \
                 are summed: {} + {} = {}.",
                a.value, b.value, value
            ),
        ),
        (Some(a), None) => (
            format!(
                "Only tree 1 has a {side_name} child, carrying over {}",
                a.value
            ),
            format!(
                "The second tree has no {side_name} child at this position; \
                 the first tree's value is carried over unchanged."
            ),
        ),
        (None, Some(b)) => (
            format!(
                "Only tree 2 has a {side_name} child, carrying over {}",
                b.value
            ),
            format!(
                "The first tree has no {side_name} child at this position; \
                 the second tree's value is carried over unchanged."
            ),
        ),
        (None, None) => unreachable!("handled above"),
    };
    recorder.record(message, description);

    let child_index = arena.push(value, id.clone());
    match side {
        ChildSide::Left => arena.link_left(parent, child_index),
        ChildSide::Right => arena.link_right(parent, child_index),
    }
    queue1.push_back(child1);
    queue2.push_back(child2);
    merged_queue.push_back(child_index);

    recorder.record(
        format!("Queued the {side_name} child for the next level"),
        "The new triple joins the back of the queues; it will be processed \
         when the traversal reaches the next level.",
    );

    if let Some(node) = child1 {
        recorder.settle_source(node, SourceTree::One);
    }
    if let Some(node) = child2 {
        recorder.settle_source(node, SourceTree::Two);
    }
    recorder.settle_merged(&id, value);
    recorder.settle_edge(parent_id, &id);
}

fn finish(recorder: StepRecorder, merged_root: Option<TreeNode>) -> MergeAnimation {
    debug!(steps = recorder.len(), "generated breadth-first merge animation");
    MergeAnimation {
        steps: recorder.into_steps(),
        merged_root,
    }
}
