pub mod dot;
pub mod json;
pub mod md;

use crate::analyze::Analysis;
use crate::error::AllocError;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
    Dot,
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> Result<String, AllocError> {
    match format {
        OutputFormat::Json => json::to_json(&analysis.report).map_err(AllocError::Json),
        OutputFormat::Md => Ok(md::to_markdown(&analysis.report)),
        OutputFormat::Dot => Ok(dot::to_dot(&analysis.graph)),
    }
}
