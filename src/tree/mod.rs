//! Tree model
//!
//! Binary trees with stable node identity, plus the level-order array
//! encoding used at the input boundary (parse / build / render / random
//! generation).
//!
//! Trees are small by design: the animation is meant to fit on screen, so
//! depths beyond ~5 are never generated here.

mod encoding;
mod node;

pub use encoding::{
    build_level_order, level_order, parse_level_order, random_level_order, render_level_order,
    FormatError, MAX_RANDOM_DEPTH,
};
pub use node::TreeNode;

/// Hard-coded sample tree `[1,3,2,5]` (the classic LeetCode 617 example).
pub fn sample_tree_one() -> TreeNode {
    let mut root = TreeNode::leaf(1, "t1-0");
    root.left = Some(Box::new(TreeNode::leaf(3, "t1-1")));
    root.right = Some(Box::new(TreeNode::leaf(2, "t1-2")));
    if let Some(left) = root.left.as_mut() {
        left.left = Some(Box::new(TreeNode::leaf(5, "t1-3")));
    }
    root
}

/// Hard-coded sample tree `[2,1,3,null,4,null,7]`.
pub fn sample_tree_two() -> TreeNode {
    let mut root = TreeNode::leaf(2, "t2-0");
    root.left = Some(Box::new(TreeNode::leaf(1, "t2-1")));
    root.right = Some(Box::new(TreeNode::leaf(3, "t2-2")));
    if let Some(left) = root.left.as_mut() {
        left.right = Some(Box::new(TreeNode::leaf(4, "t2-4")));
    }
    if let Some(right) = root.right.as_mut() {
        right.right = Some(Box::new(TreeNode::leaf(7, "t2-6")));
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_trees_match_their_encodings() {
        assert_eq!(
            level_order(Some(&sample_tree_one())),
            vec![Some(1), Some(3), Some(2), Some(5)]
        );
        assert_eq!(
            level_order(Some(&sample_tree_two())),
            vec![Some(2), Some(1), Some(3), None, Some(4), None, Some(7)]
        );
    }

    #[test]
    fn test_sample_tree_ids_are_positional() {
        let tree = sample_tree_two();
        let built = build_level_order(
            &[Some(2), Some(1), Some(3), None, Some(4), None, Some(7)],
            "t2",
        )
        .unwrap();
        assert_eq!(tree, built);
    }
}
