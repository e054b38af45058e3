use tracing::debug;

use crate::distance::{enumerate_pairs, PairDistance};
use crate::dsu::Dsu;
use crate::error::CircuitError;
use crate::parser::JunctionBox;

/// All pairs of `boxes`, closest first. Equal distances keep enumeration order.
pub fn sorted_pairs(boxes: &[JunctionBox]) -> Vec<PairDistance> {
    let mut pairs = enumerate_pairs(boxes);
    // `sort_by` is stable, which is what decides ties.
    pairs.sort_by(|left, right| left.distance.total_cmp(&right.distance));
    pairs
}

/// Connects the `connections` closest pairs of `boxes` and returns the
/// resulting circuits.
///
/// Pairs that are already in the same circuit still count towards the total.
pub fn connect_closest(boxes: &[JunctionBox], connections: usize) -> Result<Dsu, CircuitError> {
    let pairs = sorted_pairs(boxes);

    if connections > pairs.len() {
        return Err(CircuitError::TooManyConnections {
            requested: connections,
            available: pairs.len(),
        });
    }

    let mut dsu = Dsu::new(boxes.len());
    for pair in &pairs[..connections] {
        dsu.union(pair.a, pair.b);
    }

    debug!(
        pairs = pairs.len(),
        connections,
        circuits = dsu.num_components(),
        "connected closest pairs"
    );

    Ok(dsu)
}
