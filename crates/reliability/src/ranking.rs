// Ranking of leaves by erasure probability.

use crate::probability::ErasureProbability;

/// Leaf indices ordered from the highest erasure probability (least
/// reliable) to the lowest. Ties keep ascending index order.
pub fn rank_descending<P: ErasureProbability>(probabilities: &[P]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..probabilities.len()).collect();
    positions.sort_by(|&a, &b| probabilities[b].compare(&probabilities[a]));
    positions
}
