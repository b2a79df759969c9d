use crate::types::report::AllocationReport;

pub fn to_markdown(report: &AllocationReport) -> String {
    let mut output = String::new();
    output.push_str("# Allocation Report\n\n");
    output.push_str(&format!(
        "Workbook: {} ({} teams x {} projects)\n",
        report.workbook.directory, report.workbook.teams, report.workbook.projects
    ));
    output.push_str(&format!(
        "Fingerprint: {}\nGenerated: {}\n\n",
        report.workbook.fingerprint, report.generated_at
    ));

    output.push_str("## Parameters\n\n");
    output.push_str(&format!(
        "- capability_weight: {}\n- preference_weight: {}\n- top_fraction: {}\n- overlap_basis: {:?}\n- overlap_threshold: {}\n- edge_rule: {:?}\n\n",
        report.params.capability_weight,
        report.params.preference_weight,
        report.params.top_fraction,
        report.params.overlap_basis,
        report.params.overlap_threshold,
        report.params.edge_rule
    ));

    output.push_str("## Teams\n\n");
    output.push_str("| team | max b | feasible | top projects | lambda | sigma |\n");
    output.push_str("|------|-------|----------|--------------|--------|-------|\n");
    for team in &report.teams {
        output.push_str(&format!(
            "| {} | {:.3} | {} | {} | {:.2} | {:.4} |\n",
            team.name,
            team.max_score,
            team.feasible_projects,
            if team.top_projects.is_empty() {
                "-".to_string()
            } else {
                team.top_projects.join(", ")
            },
            team.contention,
            team.urgency
        ));
    }
    output.push('\n');

    output.push_str("## Overlap (%)\n\n");
    output.push_str(&format!("| from \\ to | {} |\n", report.overlap_teams.join(" | ")));
    output.push_str(&format!(
        "|-----------|{}\n",
        "------|".repeat(report.overlap_teams.len())
    ));
    for (i, name) in report.overlap_teams.iter().enumerate() {
        let cells = report.overlap_matrix[i]
            .iter()
            .enumerate()
            .map(|(j, value)| {
                if i == j {
                    "-".to_string()
                } else {
                    format!("{value:.0}")
                }
            })
            .collect::<Vec<_>>()
            .join(" | ");
        output.push_str(&format!("| {name} | {cells} |\n"));
    }
    output.push('\n');

    output.push_str("## Contention Edges\n\n");
    if report.edges.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for edge in &report.edges {
            output.push_str(&format!("- {} -- {}\n", edge.a, edge.b));
        }
        output.push('\n');
    }

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n",
                if finding.blocking { "blocking" } else { "warning" },
                finding.title,
                finding.body
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::{ContentionEdge, Finding, ParamEcho, TeamSummary, WorkbookMeta};
    use crate::types::scoring::{EdgeRule, OverlapBasis};

    fn sample_report() -> AllocationReport {
        AllocationReport {
            generated_at: "2025-01-01T00:00:00+00:00".to_string(),
            workbook: WorkbookMeta {
                directory: "workbook".to_string(),
                teams: 2,
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
            teams: vec![
                TeamSummary {
                    name: "Alpha".to_string(),
                    max_score: 4.0,
                    feasible_projects: 2,
                    top_projects: vec!["P1".to_string()],
                    contention: 1.0,
                    urgency: 0.125,
                },
                TeamSummary {
                    name: "Beta".to_string(),
                    max_score: 0.0,
                    feasible_projects: 0,
                    top_projects: vec![],
                    contention: 0.0,
                    urgency: 0.0,
                },
            ],
            overlap_teams: vec!["Alpha".to_string(), "Beta".to_string()],
            overlap_matrix: vec![vec![0.0, 100.0], vec![0.0, 0.0]],
            edges: vec![ContentionEdge {
                a: "Alpha".to_string(),
                b: "Beta".to_string(),
            }],
            findings: vec![Finding {
                id: "ranking.empty_team".to_string(),
                title: "Empty ranked set for team 'Beta'".to_string(),
                body: "Team 'Beta' has no project with a positive benefit score.".to_string(),
                blocking: false,
            }],
        }
    }

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("# Allocation Report"));
        assert!(rendered.contains("## Teams"));
        assert!(rendered.contains("## Overlap (%)"));
        assert!(rendered.contains("## Contention Edges"));
        assert!(rendered.contains("## Findings"));
    }

    #[test]
    fn markdown_marks_diagonal_and_empty_top_set() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("| Alpha | - | 100 |"));
        assert!(rendered.contains("| Beta | 0.000 | 0 | - | 0.00 | 0.0000 |"));
    }

    #[test]
    fn markdown_lists_edges_and_findings() {
        let rendered = to_markdown(&sample_report());
        assert!(rendered.contains("- Alpha -- Beta"));
        assert!(rendered.contains("[warning] Empty ranked set for team 'Beta'"));
    }
}
