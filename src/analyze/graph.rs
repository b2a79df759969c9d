use crate::types::scoring::{EdgeRule, OverlapParams};
use std::collections::{HashMap, HashSet};

/// The contention graph: every team as a labelled node, undirected edges
/// between teams whose overlap clears the configured threshold. Renderers
/// consume it read-only.
#[derive(Debug, Clone, Default)]
pub struct ContentionGraph {
    nodes: Vec<String>,
    labels: HashMap<String, String>,
    edges: Vec<(String, String)>,
    seen_nodes: HashSet<String>,
    seen_edges: HashSet<(String, String)>,
}

impl ContentionGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, name: &str, label: &str) {
        if self.seen_nodes.insert(name.to_string()) {
            self.nodes.push(name.to_string());
        }
        self.labels.insert(name.to_string(), label.to_string());
    }

    /// Add an undirected edge; endpoint order and duplicates are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        for endpoint in [a, b] {
            if self.seen_nodes.insert(endpoint.to_string()) {
                self.nodes.push(endpoint.to_string());
            }
        }
        let key = if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        if self.seen_edges.insert(key.clone()) {
            self.edges.push(key);
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn label<'a>(&'a self, name: &'a str) -> &'a str {
        self.labels.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn edges(&self) -> &[(String, String)] {
        &self.edges
    }
}

/// Build the contention graph from an overlap matrix. Every team becomes a
/// node labelled with its name and lambda; a pair gets an edge when its
/// overlap strictly exceeds the threshold in one direction (`Either`) or
/// both (`Both`).
pub fn contention_graph(
    teams: &[String],
    overlap: &[Vec<f64>],
    lambdas: &[f64],
    params: &OverlapParams,
) -> ContentionGraph {
    let mut graph = ContentionGraph::new();
    for (team, name) in teams.iter().enumerate() {
        let lambda = lambdas.get(team).copied().unwrap_or(0.0);
        graph.add_node(name, &format!("{name}\nλ = {lambda:.2}"));
    }

    for i in 0..teams.len() {
        for j in (i + 1)..teams.len() {
            let forward = overlap[i][j] > params.threshold;
            let backward = overlap[j][i] > params.threshold;
            let qualifies = match params.edge_rule {
                EdgeRule::Either => forward || backward,
                EdgeRule::Both => forward && backward,
            };
            if qualifies {
                graph.add_edge(&teams[i], &teams[j]);
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::scoring::OverlapBasis;

    fn params(threshold: f64, edge_rule: EdgeRule) -> OverlapParams {
        OverlapParams {
            basis: OverlapBasis::TopSet,
            threshold,
            edge_rule,
        }
    }

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn every_team_appears_even_when_isolated() {
        let teams = names(&["A", "B", "C"]);
        let overlap = vec![vec![0.0; 3]; 3];
        let graph = contention_graph(&teams, &overlap, &[0.0; 3], &params(80.0, EdgeRule::Either));
        assert_eq!(graph.nodes(), teams.as_slice());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn either_rule_connects_on_one_direction() {
        let teams = names(&["A", "B"]);
        let overlap = vec![vec![0.0, 100.0], vec![50.0, 0.0]];
        let graph = contention_graph(&teams, &overlap, &[0.0; 2], &params(80.0, EdgeRule::Either));
        assert_eq!(graph.edges(), [("A".to_string(), "B".to_string())]);
    }

    #[test]
    fn both_rule_requires_both_directions() {
        let teams = names(&["A", "B"]);
        let overlap = vec![vec![0.0, 100.0], vec![50.0, 0.0]];
        let graph = contention_graph(&teams, &overlap, &[0.0; 2], &params(80.0, EdgeRule::Both));
        assert!(graph.edges().is_empty());

        let overlap = vec![vec![0.0, 100.0], vec![90.0, 0.0]];
        let graph = contention_graph(&teams, &overlap, &[0.0; 2], &params(80.0, EdgeRule::Both));
        assert_eq!(graph.edges().len(), 1);
    }

    #[test]
    fn threshold_comparison_is_strict() {
        let teams = names(&["A", "B"]);
        let overlap = vec![vec![0.0, 80.0], vec![80.0, 0.0]];
        let graph = contention_graph(&teams, &overlap, &[0.0; 2], &params(80.0, EdgeRule::Either));
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn node_labels_carry_lambda() {
        let teams = names(&["A"]);
        let graph = contention_graph(&teams, &[vec![0.0]], &[1.25], &params(80.0, EdgeRule::Either));
        assert_eq!(graph.label("A"), "A\nλ = 1.25");
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut graph = ContentionGraph::new();
        graph.add_edge("B", "A");
        graph.add_edge("A", "B");
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.nodes().len(), 2);
    }
}
