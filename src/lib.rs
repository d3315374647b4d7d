//! # Binary Tree Merge, Step by Step
//!
//! This library turns the classic merge-two-binary-trees algorithm
//! (LeetCode 617) into a deterministic, replayable animation: two source
//! trees go in, an ordered sequence of rendering snapshots comes out, and a
//! player cursor lets a UI scrub through it at variable speed.
//!
//! ## Core pieces
//!
//! 1. **Tree model**: owned binary trees with stable, position-derived ids
//! 2. **Traversal engines**: DFS and BFS walks of the two trees in lockstep,
//!    each producing the full step sequence eagerly
//! 3. **Player**: a clamped cursor with play/pause/seek/speed over the
//!    precomputed sequences
//!
//! Each step's snapshot is a cumulative copy of all node and edge visual
//! state, so any step renders correctly in isolation.
//!
//! ## Usage Example
//!
//! ```
//! use treemerge::{Algorithm, Session};
//!
//! let mut session = Session::from_text("[1,3,2,5]", "[2,1,3,null,4,null,7]")?;
//! session.player_mut().select_algorithm(Algorithm::Bfs);
//! for step in session.player().steps() {
//!     println!("{}", step.snapshot.message);
//! }
//! # Ok::<(), treemerge::FormatError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod player; // step store / playback cursor
pub mod steps; // step-generation engines (DFS / BFS)
pub mod tree; // tree model and level-order encoding

// Re-exports for convenience
pub use player::{Player, PlayerState};
pub use steps::{generate_steps, Algorithm, AnimationSnapshot, AnimationStep, MergeAnimation};
pub use tree::{FormatError, TreeNode};

/// One visualization session: the two source trees plus a player over the
/// step sequences generated from them.
///
/// Sessions are created explicitly by the hosting application: there is no
/// process-wide pre-seeded state. Both sequences are generated eagerly at
/// construction, so switching algorithms later is instant.
#[derive(Debug)]
pub struct Session {
    root1: Option<TreeNode>,
    root2: Option<TreeNode>,
    player: Player,
}

impl Session {
    /// Build a session from two optional source trees.
    pub fn new(root1: Option<TreeNode>, root2: Option<TreeNode>) -> Self {
        let player = Player::new(root1.as_ref(), root2.as_ref());
        Self {
            root1,
            root2,
            player,
        }
    }

    /// Build a session from the hard-coded sample trees.
    pub fn with_sample_trees() -> Self {
        Self::new(Some(tree::sample_tree_one()), Some(tree::sample_tree_two()))
    }

    /// Build a session from two level-order encodings.
    pub fn from_level_order(values1: &[Option<i64>], values2: &[Option<i64>]) -> Self {
        Self::new(
            tree::build_level_order(values1, "t1"),
            tree::build_level_order(values2, "t2"),
        )
    }

    /// Parse two array literals (e.g. `"[1,3,2,5]"`) and build a session.
    ///
    /// Malformed input is rejected here, before any step generation runs.
    pub fn from_text(input1: &str, input2: &str) -> Result<Self, FormatError> {
        let values1 = tree::parse_level_order(input1)?;
        let values2 = tree::parse_level_order(input2)?;
        Ok(Self::from_level_order(&values1, &values2))
    }

    /// First source tree.
    pub fn root1(&self) -> Option<&TreeNode> {
        self.root1.as_ref()
    }

    /// Second source tree.
    pub fn root2(&self) -> Option<&TreeNode> {
        self.root2.as_ref()
    }

    /// The player over the generated sequences.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
