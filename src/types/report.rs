use crate::types::scoring::{EdgeRule, OverlapBasis};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct WorkbookMeta {
    pub directory: String,
    pub teams: usize,
    pub projects: usize,
    /// SHA-256 over the three sheet bodies, for reproducibility.
    pub fingerprint: String,
}

/// Echo of the parameters an analysis ran with, so a rendered report is
/// self-describing.
#[derive(Debug, Clone, Serialize)]
pub struct ParamEcho {
    pub capability_weight: f64,
    pub preference_weight: f64,
    pub top_fraction: f64,
    pub overlap_basis: OverlapBasis,
    pub overlap_threshold: f64,
    pub edge_rule: EdgeRule,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamSummary {
    pub name: String,
    /// Highest benefit score across the team's projects.
    pub max_score: f64,
    /// Number of projects with a strictly positive benefit score.
    pub feasible_projects: usize,
    /// Top-ranked project names, best first.
    pub top_projects: Vec<String>,
    /// Lambda: mean count of other teams contesting each top project.
    pub contention: f64,
    /// Sigma: std of normalized non-zero scores over their count.
    pub urgency: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContentionEdge {
    pub a: String,
    pub b: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub id: String,
    pub title: String,
    pub body: String,
    pub blocking: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AllocationReport {
    pub generated_at: String,
    pub workbook: WorkbookMeta,
    pub params: ParamEcho,
    /// Team summaries, ordered by the requested sort key.
    pub teams: Vec<TeamSummary>,
    /// Team names in workbook row order, indexing `overlap_matrix`.
    pub overlap_teams: Vec<String>,
    /// overlap_matrix[i][j] = percentage of team i's top set found in team
    /// j's comparison set; diagonal entries are 0 and carry no meaning.
    pub overlap_matrix: Vec<Vec<f64>>,
    pub edges: Vec<ContentionEdge>,
    pub findings: Vec<Finding>,
}
