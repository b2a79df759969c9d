mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod types;

use crate::error::AllocError;
use crate::types::config::AllocConfig;
use crate::types::report::TeamSummary;
use crate::types::scoring::{AnalysisParams, EdgeRule, OverlapBasis, TeamSort};
use clap::Parser;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 2;
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let directives = if quiet {
        "allocscan=error"
    } else if verbose >= 1 {
        "allocscan=debug"
    } else {
        "allocscan=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(directives));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: cli::Cli) -> Result<i32, AllocError> {
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let config = config::load_config(&cmd.path)?;
            let params = resolve_params(
                config.as_ref(),
                &cmd.scoring,
                Some(&cmd.overlap),
                sort_from(&cmd.sort_by),
            );
            let workbook = input::load_workbook(&cmd.path, config.as_ref())?;
            let analysis = analyze::analyze(&workbook, &params)?;

            let format = match cmd.format {
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
            };
            println!("{}", report::render(&analysis, format)?);

            if analysis.report.findings.is_empty() {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Rank(cmd) => {
            let config = config::load_config(&cmd.path)?;
            let params = resolve_params(config.as_ref(), &cmd.scoring, None, TeamSort::MaxScore);
            let workbook = input::load_workbook(&cmd.path, config.as_ref())?;
            let analysis = analyze::analyze(&workbook, &params)?;

            let selected = select_teams(&analysis.report.teams, &cmd.teams);
            if selected.is_empty() {
                println!("rank: no teams to show");
                return Ok(exit_code::SUCCESS);
            }
            println!("rankings:");
            for team in selected {
                let top = if team.top_projects.is_empty() {
                    "-".to_string()
                } else {
                    team.top_projects.join(", ")
                };
                println!(
                    "- {}: {} ({} feasible, max b {:.3})",
                    team.name, top, team.feasible_projects, team.max_score
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Graph(cmd) => {
            let config = config::load_config(&cmd.path)?;
            let params = resolve_params(
                config.as_ref(),
                &cmd.scoring,
                Some(&cmd.overlap),
                TeamSort::MaxScore,
            );
            let workbook = input::load_workbook(&cmd.path, config.as_ref())?;
            let analysis = analyze::analyze(&workbook, &params)?;
            println!("{}", report::render(&analysis, report::OutputFormat::Dot)?);
            Ok(exit_code::SUCCESS)
        }
    }
}

/// Merge configuration defaults with command-line overrides; flags win.
fn resolve_params(
    config: Option<&AllocConfig>,
    scoring: &cli::ScoringArgs,
    overlap: Option<&cli::OverlapArgs>,
    sort: TeamSort,
) -> AnalysisParams {
    let mut params = match config {
        Some(cfg) => AnalysisParams {
            scoring: cfg.score_params(),
            ranking: cfg.ranking_params(),
            overlap: cfg.overlap_params(),
            sort,
        },
        None => AnalysisParams {
            sort,
            ..AnalysisParams::default()
        },
    };

    if let Some(weight) = scoring.capability_weight {
        params.scoring.capability_weight = weight;
    }
    if let Some(weight) = scoring.preference_weight {
        params.scoring.preference_weight = weight;
    }
    if let Some(fraction) = scoring.top_fraction {
        params.ranking.top_fraction = fraction;
    }

    if let Some(overlap) = overlap {
        if let Some(threshold) = overlap.threshold {
            params.overlap.threshold = threshold;
        }
        if let Some(basis) = &overlap.basis {
            params.overlap.basis = match basis {
                cli::BasisOpt::TopSet => OverlapBasis::TopSet,
                cli::BasisOpt::NonZero => OverlapBasis::NonZero,
            };
        }
        if let Some(rule) = &overlap.edge_rule {
            params.overlap.edge_rule = match rule {
                cli::EdgeRuleOpt::Either => EdgeRule::Either,
                cli::EdgeRuleOpt::Both => EdgeRule::Both,
            };
        }
    }

    params
}

fn sort_from(sort: &cli::SortOpt) -> TeamSort {
    match sort {
        cli::SortOpt::MaxScore => TeamSort::MaxScore,
        cli::SortOpt::Urgency => TeamSort::Urgency,
    }
}

/// Pick the summaries named by `filters`, in filter order; unknown names
/// are skipped with a warning rather than failing the run. An empty filter
/// list selects every team.
fn select_teams<'a>(teams: &'a [TeamSummary], filters: &[String]) -> Vec<&'a TeamSummary> {
    if filters.is_empty() {
        return teams.iter().collect();
    }
    let mut selected = Vec::new();
    for name in filters {
        match teams.iter().find(|team| &team.name == name) {
            Some(team) => selected.push(team),
            None => tracing::warn!("unknown team skipped: {name}"),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str) -> TeamSummary {
        TeamSummary {
            name: name.to_string(),
            max_score: 1.0,
            feasible_projects: 1,
            top_projects: vec![],
            contention: 0.0,
            urgency: 0.0,
        }
    }

    #[test]
    fn resolve_params_defaults_without_config_or_flags() {
        let params = resolve_params(
            None,
            &cli::ScoringArgs::default(),
            None,
            TeamSort::MaxScore,
        );
        assert_eq!(params, AnalysisParams::default());
    }

    #[test]
    fn resolve_params_flags_override_config() {
        let cfg: AllocConfig = toml::from_str(
            r#"
[scoring]
capability_weight = 2.0
preference_weight = 0.3

[overlap]
threshold = 60.0
"#,
        )
        .expect("config should parse");

        let scoring = cli::ScoringArgs {
            preference_weight: Some(0.9),
            ..cli::ScoringArgs::default()
        };
        let overlap = cli::OverlapArgs {
            edge_rule: Some(cli::EdgeRuleOpt::Both),
            ..cli::OverlapArgs::default()
        };

        let params = resolve_params(Some(&cfg), &scoring, Some(&overlap), TeamSort::Urgency);
        assert_eq!(params.scoring.capability_weight, 2.0);
        assert_eq!(params.scoring.preference_weight, 0.9);
        assert_eq!(params.overlap.threshold, 60.0);
        assert_eq!(params.overlap.edge_rule, EdgeRule::Both);
        assert_eq!(params.sort, TeamSort::Urgency);
    }

    #[test]
    fn select_teams_returns_all_without_filters() {
        let teams = vec![summary("A"), summary("B")];
        assert_eq!(select_teams(&teams, &[]).len(), 2);
    }

    #[test]
    fn select_teams_skips_unknown_names() {
        let teams = vec![summary("A"), summary("B")];
        let filters = vec!["B".to_string(), "Missing".to_string()];
        let selected = select_teams(&teams, &filters);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "B");
    }
}
