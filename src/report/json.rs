use crate::types::report::AllocationReport;

pub fn to_json(report: &AllocationReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{ParamEcho, TeamSummary, WorkbookMeta};
    use crate::types::scoring::{EdgeRule, OverlapBasis};

    #[test]
    fn json_report_contains_fingerprint_and_params() {
        let report = AllocationReport {
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            workbook: WorkbookMeta {
                directory: "workbook".to_string(),
                teams: 1,
                projects: 2,
                fingerprint: "abc123".to_string(),
            },
            params: ParamEcho {
                capability_weight: 1.0,
                preference_weight: 0.1,
                top_fraction: 0.5,
                overlap_basis: OverlapBasis::TopSet,
                overlap_threshold: 80.0,
                edge_rule: EdgeRule::Either,
            },
            teams: vec![TeamSummary {
                name: "Alpha".to_string(),
                max_score: 2.0,
                feasible_projects: 2,
                top_projects: vec!["P1".to_string()],
                contention: 0.0,
                urgency: 0.125,
            }],
            overlap_teams: vec!["Alpha".to_string()],
            overlap_matrix: vec![vec![0.0]],
            edges: vec![],
            findings: vec![],
        };

        let rendered = to_json(&report).expect("json should serialize");
        assert!(rendered.contains("\"fingerprint\": \"abc123\""));
        assert!(rendered.contains("\"overlap_basis\": \"top-set\""));
        assert!(rendered.contains("\"edge_rule\": \"either\""));
    }
}
