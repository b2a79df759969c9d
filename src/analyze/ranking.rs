use crate::types::scoring::RankingParams;
use std::cmp::Ordering;

/// A team's project indices with positive score, split into the truncated
/// top set and the full non-zero set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRanking {
    /// Top-fraction project indices, best first.
    pub top: Vec<usize>,
    /// All positive-score project indices, ascending.
    pub non_zero: Vec<usize>,
}

/// Rank every team's projects: positive entries sorted descending by score
/// (ascending index on ties), truncated to `floor(count * top_fraction)`.
/// Normalization by the row maximum does not change the order, so raw
/// scores are compared directly.
pub fn rank_teams(scores: &[Vec<f64>], params: &RankingParams) -> Vec<TeamRanking> {
    scores
        .iter()
        .map(|row| rank_row(row, params.top_fraction))
        .collect()
}

fn rank_row(row: &[f64], top_fraction: f64) -> TeamRanking {
    let non_zero: Vec<usize> = row
        .iter()
        .enumerate()
        .filter(|(_, &value)| value > 0.0)
        .map(|(project, _)| project)
        .collect();

    let mut sorted = non_zero.clone();
    sorted.sort_by(|&a, &b| {
        row[b]
            .partial_cmp(&row[a])
            .unwrap_or(Ordering::Equal)
            .then(a.cmp(&b))
    });

    let keep = (non_zero.len() as f64 * top_fraction).floor() as usize;
    sorted.truncate(keep);

    TeamRanking {
        top: sorted,
        non_zero,
    }
}
