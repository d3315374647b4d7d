//! Correctness tests: generated sequences reach the classical merge result

use rand::rngs::SmallRng;
use rand::SeedableRng;

use treemerge::steps::{generate_steps, Algorithm};
use treemerge::tree::{build_level_order, random_level_order};

use test_helpers::*;

#[test]
fn test_concrete_scenario_reaches_expected_merge() {
    let t1 = tree("[1,3,2,5]", "t1");
    let t2 = tree("[2,1,3,null,4,null,7]", "t2");
    let expected = vec![Some(3), Some(4), Some(5), Some(5), Some(4), None, Some(7)];

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let animation = generate_steps(algorithm, t1.as_ref(), t2.as_ref());
        assert_eq!(
            shape_of(animation.merged_root.as_ref()),
            expected,
            "{algorithm} must reach the classical merge result"
        );
    }
}

#[test]
fn test_empty_first_tree_short_circuits_to_second() {
    let t2 = tree("[2,1,3]", "t2");

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let animation = generate_steps(algorithm, None, t2.as_ref());
        // result is tree 2 exactly, ids included
        assert_eq!(animation.merged_root.as_ref(), t2.as_ref());
        // short-circuit length: no per-node merge steps
        assert!(
            animation.steps.len() <= 3,
            "{algorithm} short-circuit emitted {} steps",
            animation.steps.len()
        );
    }
}

#[test]
fn test_both_empty_is_not_an_error() {
    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let animation = generate_steps(algorithm, None, None);
        assert!(animation.merged_root.is_none());
        assert!(!animation.steps.is_empty());
        assert!(animation.steps.last().unwrap().description.contains("complete"));
    }
}

#[test]
fn test_sequences_are_never_empty_and_end_with_completion() {
    let cases = [
        ("[1]", "[2]"),
        ("[1,2]", "[1,null,3]"),
        ("[5,4,3,2,1]", "[]"),
        ("[]", "[]"),
    ];
    for (text1, text2) in cases {
        let t1 = tree(text1, "t1");
        let t2 = tree(text2, "t2");
        for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
            let animation = generate_steps(algorithm, t1.as_ref(), t2.as_ref());
            assert!(!animation.steps.is_empty());
            let last = animation.steps.last().unwrap();
            assert!(
                last.description.to_lowercase().contains("complete"),
                "{algorithm} on ({text1}, {text2}) ended with: {}",
                last.description
            );
        }
    }
}

#[test]
fn test_dfs_and_bfs_agree_with_reference_on_random_trees() {
    let mut rng = SmallRng::seed_from_u64(617);
    for _ in 0..40 {
        let values1 = random_level_order(4, 0.35, &mut rng);
        let values2 = random_level_order(4, 0.35, &mut rng);
        let t1 = build_level_order(&values1, "t1");
        let t2 = build_level_order(&values2, "t2");

        let expected = shape_of(reference_merge(t1.as_ref(), t2.as_ref()).as_ref());
        let dfs = generate_steps(Algorithm::Dfs, t1.as_ref(), t2.as_ref());
        let bfs = generate_steps(Algorithm::Bfs, t1.as_ref(), t2.as_ref());

        assert_eq!(shape_of(dfs.merged_root.as_ref()), expected);
        assert_eq!(shape_of(bfs.merged_root.as_ref()), expected);
    }
}

#[test]
fn test_final_snapshot_reflects_merged_tree() {
    let t1 = tree("[1,3,2,5]", "t1");
    let t2 = tree("[2,1,3,null,4,null,7]", "t2");

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let animation = generate_steps(algorithm, t1.as_ref(), t2.as_ref());
        let merged = animation.merged_root.as_ref().unwrap();
        let last = animation.steps.last().unwrap();

        // every merged node appears, settled, in the final snapshot
        let mut stack = vec![merged];
        while let Some(node) = stack.pop() {
            let visual = last
                .snapshot
                .nodes
                .get(&node.id)
                .unwrap_or_else(|| panic!("{algorithm}: node {} missing", node.id));
            assert_eq!(visual.value, node.value);
            assert_eq!(visual.opacity, 1.0);
            assert_eq!(visual.scale, 1.0);

            for child in [node.left(), node.right()].into_iter().flatten() {
                let key = format!("{}-{}", node.id, child.id);
                assert!(
                    last.snapshot.edges.contains_key(&key),
                    "{algorithm}: edge {key} missing"
                );
                stack.push(child);
            }
        }
    }
}

#[test]
fn test_snapshots_render_in_isolation() {
    let t1 = tree("[1,3,2,5]", "t1");
    let t2 = tree("[2,1,3,null,4,null,7]", "t2");
    let animation = generate_steps(Algorithm::Dfs, t1.as_ref(), t2.as_ref());

    // keep a single step, drop the rest: its snapshot must be self-contained
    let midpoint = animation.steps.len() / 2;
    let kept = animation.steps[midpoint].clone();
    drop(animation);
    assert!(!kept.snapshot.nodes.is_empty());
    assert_eq!(kept.snapshot.timestamp, midpoint as u64 * 1000);
}
