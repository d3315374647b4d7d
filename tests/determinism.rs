//! Determinism tests: the same inputs always yield the same sequence

use std::collections::HashSet;

use blake3::hash;
use treemerge::steps::{generate_steps, Algorithm};

use test_helpers::*;

fn fingerprint(algorithm: Algorithm) -> blake3::Hash {
    let t1 = tree("[1,3,2,5]", "t1");
    let t2 = tree("[2,1,3,null,4,null,7]", "t2");
    let animation = generate_steps(algorithm, t1.as_ref(), t2.as_ref());

    let mut transcript = String::new();
    for step in &animation.steps {
        transcript.push_str(&step.snapshot.message);
        transcript.push('\n');
        transcript.push_str(&step.description);
        transcript.push('\n');
        for (id, node) in &step.snapshot.nodes {
            transcript.push_str(&format!(
                "{id} {} {} {} {}\n",
                node.value, node.color, node.scale, node.opacity
            ));
        }
        for (key, edge) in &step.snapshot.edges {
            transcript.push_str(&format!(
                "{key} {} {} {}\n",
                edge.stroke, edge.width, edge.opacity
            ));
        }
    }
    hash(transcript.as_bytes())
}

#[test]
fn test_step_generation_is_deterministic() {
    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let mut fingerprints = HashSet::new();
        for _ in 0..5 {
            fingerprints.insert(fingerprint(algorithm));
        }
        assert_eq!(
            fingerprints.len(),
            1,
            "{algorithm} sequences diverged across runs"
        );
    }
}

#[test]
fn test_descriptions_match_index_by_index() {
    let t1 = tree("[3,1,4,1,5]", "t1");
    let t2 = tree("[2,7,null,8]", "t2");

    for algorithm in [Algorithm::Dfs, Algorithm::Bfs] {
        let first = generate_steps(algorithm, t1.as_ref(), t2.as_ref());
        let second = generate_steps(algorithm, t1.as_ref(), t2.as_ref());

        assert_eq!(first.steps.len(), second.steps.len());
        for (a, b) in first.steps.iter().zip(&second.steps) {
            assert_eq!(a.description, b.description);
            assert_eq!(a.snapshot.message, b.snapshot.message);
        }
    }
}
