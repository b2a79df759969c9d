use crate::error::AllocError;
use serde::{Deserialize, Serialize};

/// Weights applied when combining the three workbook sheets into a single
/// benefit score: `b = impact * (capability_weight * capability +
/// preference_weight * preference)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreParams {
    pub capability_weight: f64,
    pub preference_weight: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            capability_weight: 1.0,
            preference_weight: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    /// Fraction of a team's positive-score projects kept in its top set,
    /// truncated to an integer count.
    pub top_fraction: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self { top_fraction: 0.5 }
    }
}

/// Which set of team j's projects an overlap percentage is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapBasis {
    /// Team i's top set against team j's top set.
    TopSet,
    /// Team i's top set against all of team j's positive-score projects.
    NonZero,
}

/// How an undirected contention edge is derived from the directed overlap
/// values of a team pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeRule {
    /// Edge when at least one direction exceeds the threshold.
    Either,
    /// Edge only when both directions exceed the threshold.
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapParams {
    pub basis: OverlapBasis,
    /// Percentage threshold an overlap value must strictly exceed.
    pub threshold: f64,
    pub edge_rule: EdgeRule,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            basis: OverlapBasis::TopSet,
            threshold: 80.0,
            edge_rule: EdgeRule::Either,
        }
    }
}

/// Sort key for team summaries in the rendered report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamSort {
    MaxScore,
    Urgency,
}

/// The full parameter set threaded through one analysis run. There is no
/// module-level state: every recompute receives its weights, fraction and
/// thresholds explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisParams {
    pub scoring: ScoreParams,
    pub ranking: RankingParams,
    pub overlap: OverlapParams,
    pub sort: TeamSort,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            scoring: ScoreParams::default(),
            ranking: RankingParams::default(),
            overlap: OverlapParams::default(),
            sort: TeamSort::MaxScore,
        }
    }
}

impl AnalysisParams {
    pub fn validate(&self) -> Result<(), AllocError> {
        for (name, weight) in [
            ("capability_weight", self.scoring.capability_weight),
            ("preference_weight", self.scoring.preference_weight),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(AllocError::ConfigParse(format!(
                    "{name} must be a finite non-negative number (found {weight})"
                )));
            }
        }

        let fraction = self.ranking.top_fraction;
        if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 {
            return Err(AllocError::ConfigParse(format!(
                "top_fraction must be within (0.0, 1.0] (found {fraction})"
            )));
        }

        let threshold = self.overlap.threshold;
        if !threshold.is_finite() || !(0.0..=100.0).contains(&threshold) {
            return Err(AllocError::ConfigParse(format!(
                "overlap threshold must be between 0 and 100 (found {threshold})"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_validate() {
        assert!(AnalysisParams::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_weight() {
        let mut params = AnalysisParams::default();
        params.scoring.preference_weight = -0.5;
        let err = params.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("preference_weight"));
    }

    #[test]
    fn validate_rejects_zero_fraction() {
        let mut params = AnalysisParams::default();
        params.ranking.top_fraction = 0.0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn validate_rejects_fraction_above_one() {
        let mut params = AnalysisParams::default();
        params.ranking.top_fraction = 1.5;
        assert!(params.validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_threshold() {
        let mut params = AnalysisParams::default();
        params.overlap.threshold = 120.0;
        let err = params.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn validate_accepts_threshold_boundaries() {
        let mut params = AnalysisParams::default();
        params.overlap.threshold = 0.0;
        assert!(params.validate().is_ok());
        params.overlap.threshold = 100.0;
        assert!(params.validate().is_ok());
    }
}
