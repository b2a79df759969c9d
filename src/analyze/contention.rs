use crate::analyze::ranking::TeamRanking;
use crate::analyze::score::normalize_rows;
use std::collections::HashSet;

/// Lambda per team: for each of its top projects, count the other teams
/// whose top set also holds that project, averaged over the top-set size.
/// Empty top sets score 0.
pub fn contention_scores(rankings: &[TeamRanking]) -> Vec<f64> {
    let top_sets: Vec<HashSet<usize>> = rankings
        .iter()
        .map(|ranking| ranking.top.iter().copied().collect())
        .collect();

    rankings
        .iter()
        .enumerate()
        .map(|(team, ranking)| {
            if ranking.top.is_empty() {
                return 0.0;
            }
            let contested: usize = ranking
                .top
                .iter()
                .map(|project| {
                    top_sets
                        .iter()
                        .enumerate()
                        .filter(|(other, set)| *other != team && set.contains(project))
                        .count()
                })
                .sum();
            contested as f64 / ranking.top.len() as f64
        })
        .collect()
}

/// Sigma urgency coefficient per team: the population standard deviation of
/// the team's normalized non-zero scores, divided by their count. Teams
/// with no positive score get 0.
pub fn urgency_coefficients(scores: &[Vec<f64>]) -> Vec<f64> {
    normalize_rows(scores)
        .iter()
        .map(|row| {
            let non_zero: Vec<f64> = row.iter().copied().filter(|&value| value > 0.0).collect();
            if non_zero.is_empty() {
                return 0.0;
            }
            let count = non_zero.len() as f64;
            let mean = non_zero.iter().sum::<f64>() / count;
            let variance = non_zero
                .iter()
                .map(|value| (value - mean).powi(2))
                .sum::<f64>()
                / count;
            variance.sqrt() / count
        })
        .collect()
}
