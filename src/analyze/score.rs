use crate::error::{AllocError, Result};
use crate::types::scoring::ScoreParams;

/// Combine the three sheets into the benefit-score matrix:
/// `b[t][p] = impact[t][p] * (cw * capability[t][p] + pw * preference[t][p])`.
///
/// A zero impact entry always yields a zero score, marking the project
/// infeasible for that team.
pub fn score_matrix(
    impact: &[Vec<f64>],
    capability: &[Vec<f64>],
    preference: &[Vec<f64>],
    params: &ScoreParams,
) -> Result<Vec<Vec<f64>>> {
    check_shape(impact, capability, "capability")?;
    check_shape(impact, preference, "preference")?;

    let mut scores = Vec::with_capacity(impact.len());
    for (team, impact_row) in impact.iter().enumerate() {
        let mut row = Vec::with_capacity(impact_row.len());
        for (project, &imp) in impact_row.iter().enumerate() {
            let cap = capability[team][project];
            let pref = preference[team][project];
            row.push(imp * (params.capability_weight * cap + params.preference_weight * pref));
        }
        scores.push(row);
    }
    Ok(scores)
}

/// Per-team maximum score (0.0 for an empty row).
pub fn team_maxima(scores: &[Vec<f64>]) -> Vec<f64> {
    scores
        .iter()
        .map(|row| row.iter().copied().fold(0.0_f64, f64::max))
        .collect()
}

/// Divide each row by its own maximum. Rows without a strictly positive
/// maximum are returned unchanged, so no division by zero can occur.
pub fn normalize_rows(scores: &[Vec<f64>]) -> Vec<Vec<f64>> {
    scores
        .iter()
        .map(|row| {
            let max = row.iter().copied().fold(0.0_f64, f64::max);
            if max > 0.0 {
                row.iter().map(|value| value / max).collect()
            } else {
                row.clone()
            }
        })
        .collect()
}

fn check_shape(impact: &[Vec<f64>], other: &[Vec<f64>], label: &str) -> Result<()> {
    if impact.len() != other.len() {
        return Err(AllocError::ShapeMismatch(format!(
            "impact has {} team rows but {label} has {}",
            impact.len(),
            other.len()
        )));
    }
    for (team, (impact_row, other_row)) in impact.iter().zip(other).enumerate() {
        if impact_row.len() != other_row.len() {
            return Err(AllocError::ShapeMismatch(format!(
                "team row {team}: impact has {} projects but {label} has {}",
                impact_row.len(),
                other_row.len()
            )));
        }
    }
    Ok(())
}
