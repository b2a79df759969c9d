use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "allocscan",
    version,
    about = "Benefit-score and contention analysis for project-allocation workbooks"
)]
pub struct Cli {
    /// Increase verbosity (-v for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Analyze(AnalyzeCommand),
    Rank(RankCommand),
    Graph(GraphCommand),
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum BasisOpt {
    /// Compare top sets against top sets
    TopSet,
    /// Compare top sets against all positive-score projects
    NonZero,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum EdgeRuleOpt {
    Either,
    Both,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum SortOpt {
    MaxScore,
    Urgency,
}

#[derive(Args, Clone, Copy, Default)]
pub struct ScoringArgs {
    /// Weight on the capability sheet
    #[arg(long)]
    pub capability_weight: Option<f64>,

    /// Weight on the preference sheet
    #[arg(long)]
    pub preference_weight: Option<f64>,

    /// Fraction of each team's feasible projects kept in its top set
    #[arg(long)]
    pub top_fraction: Option<f64>,
}

#[derive(Args, Clone, Default)]
pub struct OverlapArgs {
    /// Overlap percentage a pair must strictly exceed for a contention edge
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Comparison set for overlap percentages
    #[arg(long, value_enum)]
    pub basis: Option<BasisOpt>,

    /// Whether one or both directions must exceed the threshold
    #[arg(long, value_enum)]
    pub edge_rule: Option<EdgeRuleOpt>,
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Workbook directory containing the impact, fit and pref sheets
    pub path: PathBuf,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// Sort key for the team table
    #[arg(long, value_enum, default_value = "max-score")]
    pub sort_by: SortOpt,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    #[command(flatten)]
    pub overlap: OverlapArgs,
}

#[derive(Args)]
pub struct RankCommand {
    /// Workbook directory containing the impact, fit and pref sheets
    pub path: PathBuf,

    /// Restrict output to these teams; unknown names are skipped
    #[arg(long = "team")]
    pub teams: Vec<String>,

    #[command(flatten)]
    pub scoring: ScoringArgs,
}

#[derive(Args)]
pub struct GraphCommand {
    /// Workbook directory containing the impact, fit and pref sheets
    pub path: PathBuf,

    #[command(flatten)]
    pub scoring: ScoringArgs,

    #[command(flatten)]
    pub overlap: OverlapArgs,
}
