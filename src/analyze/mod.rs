pub mod contention;
pub mod graph;
pub mod overlap;
pub mod ranking;
pub mod score;

use crate::error::Result;
use crate::input::Workbook;
use crate::types::report::{
    AllocationReport, ContentionEdge, Finding, ParamEcho, TeamSummary, WorkbookMeta,
};
use crate::types::scoring::{AnalysisParams, TeamSort};
use chrono::Utc;
use graph::ContentionGraph;

/// Everything one run produces: the serializable report plus the contention
/// graph for DOT rendering.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub report: AllocationReport,
    pub graph: ContentionGraph,
}

pub fn analyze(workbook: &Workbook, params: &AnalysisParams) -> Result<Analysis> {
    params.validate()?;

    let scores = score::score_matrix(
        &workbook.impact.values,
        &workbook.capability.values,
        &workbook.preference.values,
        &params.scoring,
    )?;
    let maxima = score::team_maxima(&scores);
    let rankings = ranking::rank_teams(&scores, &params.ranking);
    let overlap = overlap::overlap_matrix(&rankings, params.overlap.basis);
    let lambdas = contention::contention_scores(&rankings);
    let sigmas = contention::urgency_coefficients(&scores);
    let graph = graph::contention_graph(workbook.teams(), &overlap, &lambdas, &params.overlap);

    let mut teams: Vec<TeamSummary> = workbook
        .teams()
        .iter()
        .enumerate()
        .map(|(team, name)| TeamSummary {
            name: name.clone(),
            max_score: maxima[team],
            feasible_projects: rankings[team].non_zero.len(),
            top_projects: rankings[team]
                .top
                .iter()
                .map(|&project| workbook.projects()[project].clone())
                .collect(),
            contention: lambdas[team],
            urgency: sigmas[team],
        })
        .collect();
    sort_teams(&mut teams, params.sort);

    let mut findings = Vec::new();
    for (team, ranking) in rankings.iter().enumerate() {
        if !ranking.top.is_empty() {
            continue;
        }
        let name = &workbook.teams()[team];
        let body = if ranking.non_zero.is_empty() {
            format!("Team '{name}' has no project with a positive benefit score.")
        } else {
            format!(
                "Team '{name}' has {} feasible project(s), but the top fraction truncates its ranked set to zero.",
                ranking.non_zero.len()
            )
        };
        findings.push(Finding {
            id: "ranking.empty_team".to_string(),
            title: format!("Empty ranked set for team '{name}'"),
            body,
            blocking: false,
        });
    }
    if graph.edges().is_empty() {
        findings.push(Finding {
            id: "graph.no_edges".to_string(),
            title: "No contention edges".to_string(),
            body: format!(
                "No team pair exceeds the {}% overlap threshold; the contention graph is edge-free.",
                params.overlap.threshold
            ),
            blocking: false,
        });
    }
    tracing::debug!("analysis produced {} finding(s)", findings.len());

    let edges = graph
        .edges()
        .iter()
        .map(|(a, b)| ContentionEdge {
            a: a.clone(),
            b: b.clone(),
        })
        .collect();

    let report = AllocationReport {
        generated_at: Utc::now().to_rfc3339(),
        workbook: WorkbookMeta {
            directory: workbook.directory.display().to_string(),
            teams: workbook.teams().len(),
            projects: workbook.projects().len(),
            fingerprint: workbook.fingerprint.clone(),
        },
        params: ParamEcho {
            capability_weight: params.scoring.capability_weight,
            preference_weight: params.scoring.preference_weight,
            top_fraction: params.ranking.top_fraction,
            overlap_basis: params.overlap.basis,
            overlap_threshold: params.overlap.threshold,
            edge_rule: params.overlap.edge_rule,
        },
        teams,
        overlap_teams: workbook.teams().to_vec(),
        overlap_matrix: overlap,
        edges,
        findings,
    };

    Ok(Analysis { report, graph })
}

fn sort_teams(teams: &mut [TeamSummary], sort: TeamSort) {
    teams.sort_by(|a, b| {
        let (ka, kb) = match sort {
            TeamSort::MaxScore => (a.max_score, b.max_score),
            TeamSort::Urgency => (a.urgency, b.urgency),
        };
        kb.partial_cmp(&ka)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.name.cmp(&b.name))
    });
}
