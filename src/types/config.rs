use crate::error::AllocError;
use crate::types::scoring::{
    AnalysisParams, EdgeRule, OverlapBasis, OverlapParams, RankingParams, ScoreParams,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AllocConfig {
    pub sheets: Option<SheetsConfig>,
    pub scoring: Option<ScoringConfig>,
    pub ranking: Option<RankingConfig>,
    pub overlap: Option<OverlapConfig>,
}

/// Explicit sheet file names, relative to the workbook directory. Sheets
/// not named here are discovered by filename convention.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SheetsConfig {
    pub impact: Option<String>,
    pub capability: Option<String>,
    pub preference: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub capability_weight: Option<f64>,
    pub preference_weight: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankingConfig {
    pub top_fraction: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OverlapConfig {
    pub basis: Option<OverlapBasis>,
    pub threshold: Option<f64>,
    pub edge_rule: Option<EdgeRule>,
}

impl AllocConfig {
    pub fn score_params(&self) -> ScoreParams {
        let defaults = ScoreParams::default();
        match &self.scoring {
            Some(scoring) => ScoreParams {
                capability_weight: scoring
                    .capability_weight
                    .unwrap_or(defaults.capability_weight),
                preference_weight: scoring
                    .preference_weight
                    .unwrap_or(defaults.preference_weight),
            },
            None => defaults,
        }
    }

    pub fn ranking_params(&self) -> RankingParams {
        let defaults = RankingParams::default();
        match &self.ranking {
            Some(ranking) => RankingParams {
                top_fraction: ranking.top_fraction.unwrap_or(defaults.top_fraction),
            },
            None => defaults,
        }
    }

    pub fn overlap_params(&self) -> OverlapParams {
        let defaults = OverlapParams::default();
        match &self.overlap {
            Some(overlap) => OverlapParams {
                basis: overlap.basis.unwrap_or(defaults.basis),
                threshold: overlap.threshold.unwrap_or(defaults.threshold),
                edge_rule: overlap.edge_rule.unwrap_or(defaults.edge_rule),
            },
            None => defaults,
        }
    }

    pub fn validate(&self) -> Result<(), AllocError> {
        let params = AnalysisParams {
            scoring: self.score_params(),
            ranking: self.ranking_params(),
            overlap: self.overlap_params(),
            ..AnalysisParams::default()
        };
        params.validate()?;

        if let Some(sheets) = &self.sheets {
            for (key, value) in [
                ("sheets.impact", &sheets.impact),
                ("sheets.capability", &sheets.capability),
                ("sheets.preference", &sheets.preference),
            ] {
                if let Some(name) = value {
                    if name.trim().is_empty() {
                        return Err(AllocError::ConfigParse(format!(
                            "{key} must be a non-empty file name"
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config_uses_defaults() {
        let cfg: AllocConfig = toml::from_str("").expect("empty config should parse");
        let scoring = cfg.score_params();
        assert_eq!(scoring.capability_weight, 1.0);
        assert_eq!(scoring.preference_weight, 0.1);
        assert_eq!(cfg.ranking_params().top_fraction, 0.5);
        assert_eq!(cfg.overlap_params().basis, OverlapBasis::TopSet);
        assert_eq!(cfg.overlap_params().edge_rule, EdgeRule::Either);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[sheets]
impact = "impact.csv"
capability = "fit.csv"
preference = "pref.csv"

[scoring]
capability_weight = 2.0
preference_weight = 0.25

[ranking]
top_fraction = 0.2

[overlap]
basis = "non-zero"
threshold = 60.0
edge_rule = "both"
"#;
        let cfg: AllocConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.score_params().capability_weight, 2.0);
        assert_eq!(cfg.score_params().preference_weight, 0.25);
        assert_eq!(cfg.ranking_params().top_fraction, 0.2);
        let overlap = cfg.overlap_params();
        assert_eq!(overlap.basis, OverlapBasis::NonZero);
        assert_eq!(overlap.threshold, 60.0);
        assert_eq!(overlap.edge_rule, EdgeRule::Both);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parse_rejects_unknown_basis() {
        let toml_str = r#"
[overlap]
basis = "everything"
"#;
        assert!(toml::from_str::<AllocConfig>(toml_str).is_err());
    }

    #[test]
    fn validate_rejects_bad_fraction() {
        let toml_str = r#"
[ranking]
top_fraction = 0.0
"#;
        let cfg: AllocConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("top_fraction"));
    }

    #[test]
    fn validate_rejects_empty_sheet_name() {
        let toml_str = r#"
[sheets]
impact = " "
"#;
        let cfg: AllocConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("sheets.impact"));
    }
}
