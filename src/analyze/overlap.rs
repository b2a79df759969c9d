use crate::analyze::ranking::TeamRanking;
use crate::types::scoring::OverlapBasis;
use std::collections::HashSet;

/// Pairwise overlap percentages: `overlap[i][j]` is the share of team i's
/// top set found in team j's comparison set (its top set or its full
/// non-zero set, per `basis`). The denominator is always team i's top-set
/// size, so the matrix is not symmetric. Diagonal entries stay 0.
pub fn overlap_matrix(rankings: &[TeamRanking], basis: OverlapBasis) -> Vec<Vec<f64>> {
    let comparison_sets: Vec<HashSet<usize>> = rankings
        .iter()
        .map(|ranking| match basis {
            OverlapBasis::TopSet => ranking.top.iter().copied().collect(),
            OverlapBasis::NonZero => ranking.non_zero.iter().copied().collect(),
        })
        .collect();

    let team_count = rankings.len();
    let mut matrix = vec![vec![0.0; team_count]; team_count];
    for (i, ranking) in rankings.iter().enumerate() {
        if ranking.top.is_empty() {
            continue;
        }
        for (j, other) in comparison_sets.iter().enumerate() {
            if i == j {
                continue;
            }
            let shared = ranking
                .top
                .iter()
                .filter(|project| other.contains(project))
                .count();
            matrix[i][j] = shared as f64 / ranking.top.len() as f64 * 100.0;
        }
    }
    matrix
}
