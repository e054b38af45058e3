use itertools::Itertools;

use crate::parser::JunctionBox;

/// Straight-line distance between two junction boxes, with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairDistance {
    pub distance: f64,
    pub a: usize,
    pub b: usize,
}

/// Every unordered pair of boxes with its Euclidean distance, ordered by
/// increasing `a` then increasing `b`.
pub fn enumerate_pairs(boxes: &[JunctionBox]) -> Vec<PairDistance> {
    (0..boxes.len())
        .tuple_combinations()
        .map(|(a, b)| PairDistance {
            distance: boxes[a].as_dvec3().distance(boxes[b].as_dvec3()),
            a,
            b,
        })
        .collect()
}

pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
