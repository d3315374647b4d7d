//! Level-order array encoding
//!
//! Standard LeetCode encoding: 0-indexed array with `null` gaps, children of
//! slot `i` at `2i + 1` and `2i + 2`. Any index past the end of the array
//! means "no node there", never an error: the encoding of a non-complete
//! tree simply omits the tail.

use rand::Rng;
use thiserror::Error;

use super::TreeNode;

/// Malformed array-literal input.
///
/// Raised only at the text boundary; step generation is never invoked on
/// input that failed to parse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// Input was not wrapped in `[` ... `]`.
    #[error("expected a bracketed list like `[1,2,null]`")]
    MissingBrackets,

    /// An entry was neither an integer nor `null`.
    #[error("invalid entry `{0}`: expected an integer or `null`")]
    InvalidEntry(String),
}

/// Parse a bracketed, comma-separated list of integers and `null`s.
///
/// Whitespace around the brackets and between entries is ignored, so
/// `"[1, 3, 2, 5]"` parses the same as `"[1,3,2,5]"`. `"[]"` yields an empty
/// encoding, and a leading `null` is legal (it denotes an empty tree).
pub fn parse_level_order(input: &str) -> Result<Vec<Option<i64>>, FormatError> {
    let inner = input
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(FormatError::MissingBrackets)?
        .trim();

    if inner.is_empty() {
        return Ok(Vec::new());
    }

    inner
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if entry == "null" {
                Ok(None)
            } else {
                entry
                    .parse::<i64>()
                    .map(Some)
                    .map_err(|_| FormatError::InvalidEntry(entry.to_string()))
            }
        })
        .collect()
}

/// Render an encoding back to its canonical text form, e.g. `[1,2,null]`.
pub fn render_level_order(values: &[Option<i64>]) -> String {
    let entries: Vec<String> = values
        .iter()
        .map(|slot| match slot {
            Some(value) => value.to_string(),
            None => "null".to_string(),
        })
        .collect();
    format!("[{}]", entries.join(","))
}

/// Build a tree from a level-order encoding.
///
/// Returns `None` for an empty encoding or a `null` root. Node ids are
/// `<id_prefix>-<slot index>`, so ids are deterministic for a given encoding.
pub fn build_level_order(values: &[Option<i64>], id_prefix: &str) -> Option<TreeNode> {
    build_at(values, 0, id_prefix)
}

fn build_at(values: &[Option<i64>], index: usize, id_prefix: &str) -> Option<TreeNode> {
    let value = *values.get(index)?;
    let value = value?;

    Some(TreeNode {
        value,
        id: format!("{id_prefix}-{index}"),
        left: build_at(values, 2 * index + 1, id_prefix).map(Box::new),
        right: build_at(values, 2 * index + 2, id_prefix).map(Box::new),
    })
}

/// Extract the level-order encoding of a tree, trailing `null`s trimmed.
///
/// Exact inverse of [`build_level_order`]: each node lands at its
/// slot-arithmetic index, so `build_level_order(&level_order(t), ..)`
/// reproduces `t`. Slot count grows with `2^height`, which is fine for the
/// shallow trees this crate animates.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Option<i64>> {
    fn fill(node: &TreeNode, index: usize, values: &mut Vec<Option<i64>>) {
        if values.len() <= index {
            values.resize(index + 1, None);
        }
        values[index] = Some(node.value);
        if let Some(left) = node.left() {
            fill(left, 2 * index + 1, values);
        }
        if let Some(right) = node.right() {
            fill(right, 2 * index + 2, values);
        }
    }

    let mut values = Vec::new();
    if let Some(root) = root {
        fill(root, 0, &mut values);
    }
    values
}

/// Depth ceiling for [`random_level_order`]; deeper trees do not fit on
/// screen, and the slot budget grows as `2^depth`.
pub const MAX_RANDOM_DEPTH: u32 = 6;

/// Generate a random level-order encoding.
///
/// The root is never `null`; any slot whose parent is `null` is forced `null`
/// (no orphaned children); trailing `null`s are trimmed. Values are drawn
/// from 1..=9: small enough to stay readable on screen. `max_depth` is
/// clamped to `1..=MAX_RANDOM_DEPTH`, so the result always has a root and
/// the slot budget stays bounded.
pub fn random_level_order<R: Rng>(
    max_depth: u32,
    null_probability: f64,
    rng: &mut R,
) -> Vec<Option<i64>> {
    let max_depth = max_depth.clamp(1, MAX_RANDOM_DEPTH);
    let null_probability = null_probability.clamp(0.0, 1.0);
    let total_slots = (1usize << max_depth) - 1;

    let mut values: Vec<Option<i64>> = Vec::with_capacity(total_slots);
    values.push(Some(rng.random_range(1..=9)));

    for index in 1..total_slots {
        let parent = (index - 1) / 2;
        if values[parent].is_none() || rng.random_bool(null_probability) {
            values.push(None);
        } else {
            values.push(Some(rng.random_range(1..=9)));
        }
    }

    while values.last() == Some(&None) {
        values.pop();
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_with_and_without_spaces() {
        let compact = parse_level_order("[1,3,2,5]").unwrap();
        let spaced = parse_level_order("  [ 1, 3 , 2,  5 ] ").unwrap();
        assert_eq!(compact, spaced);
        assert_eq!(compact, vec![Some(1), Some(3), Some(2), Some(5)]);
    }

    #[test]
    fn test_parse_nulls_and_empty() {
        assert_eq!(
            parse_level_order("[2,1,3,null,4,null,7]").unwrap(),
            vec![Some(2), Some(1), Some(3), None, Some(4), None, Some(7)]
        );
        assert_eq!(parse_level_order("[]").unwrap(), Vec::new());
        assert_eq!(parse_level_order("[null]").unwrap(), vec![None]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_level_order("1,2,3"), Err(FormatError::MissingBrackets));
        assert_eq!(
            parse_level_order("[1,two]"),
            Err(FormatError::InvalidEntry("two".to_string()))
        );
        assert_eq!(
            parse_level_order("[1,,2]"),
            Err(FormatError::InvalidEntry(String::new()))
        );
    }

    #[test]
    fn test_build_assigns_positional_ids() {
        let tree = build_level_order(&[Some(2), Some(1), Some(3), None, Some(4)], "t2").unwrap();
        assert_eq!(tree.id, "t2-0");
        assert_eq!(tree.left().unwrap().id, "t2-1");
        assert_eq!(tree.left().unwrap().right().unwrap().id, "t2-4");
        assert!(tree.left().unwrap().left().is_none());
    }

    #[test]
    fn test_build_empty_and_null_root() {
        assert!(build_level_order(&[], "t1").is_none());
        assert!(build_level_order(&[None, Some(1)], "t1").is_none());
    }

    #[test]
    fn test_level_order_round_trip() {
        let encoding = vec![Some(2), Some(1), Some(3), None, Some(4), None, Some(7)];
        let tree = build_level_order(&encoding, "t2").unwrap();
        assert_eq!(level_order(Some(&tree)), encoding);
        assert_eq!(render_level_order(&encoding), "[2,1,3,null,4,null,7]");
    }

    #[test]
    fn test_random_depth_is_clamped() {
        let mut rng = SmallRng::seed_from_u64(23);

        // extreme depths must neither overflow the shift nor blow the
        // slot budget
        for depth in [0, 64, u32::MAX] {
            let values = random_level_order(depth, 0.3, &mut rng);
            assert!(!values.is_empty());
            assert!(values[0].is_some());
            assert!(values.len() <= (1 << MAX_RANDOM_DEPTH) - 1);
        }

        // depth 0 behaves as depth 1: a single root
        let values = random_level_order(0, 0.0, &mut rng);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_random_encoding_invariants() {
        let mut rng = SmallRng::seed_from_u64(17);
        for _ in 0..50 {
            let values = random_level_order(4, 0.4, &mut rng);
            assert!(values[0].is_some(), "root must not be null");
            assert_ne!(values.last(), Some(&None), "trailing nulls must be trimmed");
            for index in 1..values.len() {
                if values[index].is_some() {
                    assert!(
                        values[(index - 1) / 2].is_some(),
                        "slot {index} has a null parent"
                    );
                }
            }
        }
    }
}
