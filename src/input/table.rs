use crate::error::{AllocError, Result};

/// One parsed workbook sheet: a numeric grid with team rows and project
/// columns. The first header row names the projects; the first column of
/// every following row names the team.
#[derive(Debug, Clone)]
pub struct Table {
    pub teams: Vec<String>,
    pub projects: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Table {
    pub fn n_teams(&self) -> usize {
        self.teams.len()
    }

    pub fn n_projects(&self) -> usize {
        self.projects.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.n_teams(), self.n_projects())
    }
}

/// Parse a delimited sheet body. The delimiter is taken from the header
/// line: tab when one is present, comma otherwise.
pub fn parse_sheet(label: &str, text: &str) -> Result<Table> {
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| AllocError::Sheet(format!("{label}: sheet is empty")))?;
    let delimiter = if header.contains('\t') { '\t' } else { ',' };

    let projects = header
        .split(delimiter)
        .skip(1)
        .map(|cell| cell.trim().to_string())
        .collect::<Vec<_>>();
    if projects.is_empty() {
        return Err(AllocError::Sheet(format!(
            "{label}: header row names no projects"
        )));
    }
    if let Some(pos) = projects.iter().position(|name| name.is_empty()) {
        return Err(AllocError::Sheet(format!(
            "{label}: header column {} has an empty project name",
            pos + 2
        )));
    }

    let mut teams = Vec::new();
    let mut values = Vec::new();
    for (index, line) in lines {
        let line_no = index + 1;
        let mut cells = line.split(delimiter);
        let team = cells
            .next()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();
        if team.is_empty() {
            return Err(AllocError::Sheet(format!(
                "{label}: line {line_no}: missing team name"
            )));
        }

        let mut row = Vec::with_capacity(projects.len());
        for cell in cells {
            let raw = cell.trim();
            let value = raw.parse::<f64>().map_err(|_| {
                AllocError::Sheet(format!(
                    "{label}: line {line_no}: cell '{raw}' is not a number"
                ))
            })?;
            if !value.is_finite() || value < 0.0 {
                return Err(AllocError::Sheet(format!(
                    "{label}: line {line_no}: cell '{raw}' must be finite and non-negative"
                )));
            }
            row.push(value);
        }
        if row.len() != projects.len() {
            return Err(AllocError::Sheet(format!(
                "{label}: line {line_no}: expected {} value cells, found {}",
                projects.len(),
                row.len()
            )));
        }

        teams.push(team);
        values.push(row);
    }

    if teams.is_empty() {
        return Err(AllocError::Sheet(format!("{label}: sheet has no team rows")));
    }

    Ok(Table {
        teams,
        projects,
        values,
    })
}
