use crate::analyze::graph::ContentionGraph;

/// Render the contention graph in Graphviz DOT form: one node per team
/// labelled with its name and lambda, one undirected edge per qualifying
/// pair.
pub fn to_dot(graph: &ContentionGraph) -> String {
    let mut output = String::new();
    output.push_str("graph contention {\n");
    output.push_str("    node [shape=ellipse];\n");
    for name in graph.nodes() {
        output.push_str(&format!(
            "    \"{}\" [label=\"{}\"];\n",
            escape(name),
            escape(graph.label(name))
        ));
    }
    for (a, b) in graph.edges() {
        output.push_str(&format!("    \"{}\" -- \"{}\";\n", escape(a), escape(b)));
    }
    output.push_str("}\n");
    output
}

/// Escape a string for a double-quoted DOT identifier; real newlines become
/// DOT's literal `\n` label breaks.
fn escape(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_output_lists_nodes_and_edges() {
        let mut graph = ContentionGraph::new();
        graph.add_node("Team 1", "Team 1\nλ = 1.00");
        graph.add_node("Team 2", "Team 2\nλ = 0.50");
        graph.add_edge("Team 1", "Team 2");

        let rendered = to_dot(&graph);
        assert!(rendered.starts_with("graph contention {"));
        assert!(rendered.contains("\"Team 1\" [label=\"Team 1\\nλ = 1.00\"];"));
        assert!(rendered.contains("\"Team 1\" -- \"Team 2\";"));
        assert!(rendered.ends_with("}\n"));
    }

    #[test]
    fn dot_escapes_quotes_in_names() {
        let mut graph = ContentionGraph::new();
        graph.add_node("Team \"A\"", "Team \"A\"");
        let rendered = to_dot(&graph);
        assert!(rendered.contains("\"Team \\\"A\\\"\""));
    }

    #[test]
    fn isolated_nodes_render_without_edges() {
        let mut graph = ContentionGraph::new();
        graph.add_node("Solo", "Solo\nλ = 0.00");
        let rendered = to_dot(&graph);
        assert!(rendered.contains("\"Solo\""));
        assert!(!rendered.contains("--"));
    }
}
