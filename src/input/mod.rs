pub mod table;

use crate::error::{AllocError, Result};
use crate::types::config::AllocConfig;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use table::{parse_sheet, Table};
use walkdir::WalkDir;

/// The three aligned sheets of a project-allocation workbook.
#[derive(Debug, Clone)]
pub struct Workbook {
    pub directory: PathBuf,
    pub impact: Table,
    pub capability: Table,
    pub preference: Table,
    pub fingerprint: String,
}

impl Workbook {
    pub fn teams(&self) -> &[String] {
        &self.impact.teams
    }

    pub fn projects(&self) -> &[String] {
        &self.impact.projects
    }
}

const IMPACT_STEMS: [&str; 1] = ["impact"];
const CAPABILITY_STEMS: [&str; 2] = ["fit", "capability"];
const PREFERENCE_STEMS: [&str; 2] = ["pref", "preference"];

pub fn load_workbook(dir: &Path, config: Option<&AllocConfig>) -> Result<Workbook> {
    if !dir.is_dir() {
        return Err(AllocError::PathNotFound(dir.display().to_string()));
    }

    let sheets = config.and_then(|cfg| cfg.sheets.as_ref());
    let impact_path = resolve_sheet(
        dir,
        "impact",
        sheets.and_then(|s| s.impact.as_deref()),
        &IMPACT_STEMS,
    )?;
    let capability_path = resolve_sheet(
        dir,
        "capability",
        sheets.and_then(|s| s.capability.as_deref()),
        &CAPABILITY_STEMS,
    )?;
    let preference_path = resolve_sheet(
        dir,
        "preference",
        sheets.and_then(|s| s.preference.as_deref()),
        &PREFERENCE_STEMS,
    )?;

    let impact_text = std::fs::read_to_string(&impact_path)?;
    let capability_text = std::fs::read_to_string(&capability_path)?;
    let preference_text = std::fs::read_to_string(&preference_path)?;

    let impact = parse_sheet("impact", &impact_text)?;
    let capability = parse_sheet("capability", &capability_text)?;
    let preference = parse_sheet("preference", &preference_text)?;

    check_alignment(&impact, "capability", &capability)?;
    check_alignment(&impact, "preference", &preference)?;

    tracing::info!(
        "workbook {}: {} teams x {} projects",
        dir.display(),
        impact.n_teams(),
        impact.n_projects()
    );

    let fingerprint = fingerprint(&[&impact_text, &capability_text, &preference_text]);

    Ok(Workbook {
        directory: dir.to_path_buf(),
        impact,
        capability,
        preference,
        fingerprint,
    })
}

fn resolve_sheet(
    dir: &Path,
    label: &str,
    configured: Option<&str>,
    stems: &[&str],
) -> Result<PathBuf> {
    if let Some(name) = configured {
        let path = dir.join(name);
        if !path.is_file() {
            return Err(AllocError::SheetNotFound(format!(
                "{label}: configured sheet {} does not exist",
                path.display()
            )));
        }
        return Ok(path);
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().to_path_buf())
        .filter(|path| {
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(|stem| stems.contains(&stem.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    candidates.sort();

    match candidates.first() {
        Some(path) => {
            tracing::debug!("{label} sheet: {}", path.display());
            Ok(path.clone())
        }
        None => Err(AllocError::SheetNotFound(format!(
            "{label}: no file named {} found in {}",
            stems.join(" or "),
            dir.display()
        ))),
    }
}

fn check_alignment(impact: &Table, label: &str, other: &Table) -> Result<()> {
    if impact.shape() != other.shape() {
        let (it, ip) = impact.shape();
        let (ot, op) = other.shape();
        return Err(AllocError::ShapeMismatch(format!(
            "impact is {it}x{ip} but {label} is {ot}x{op}"
        )));
    }
    for (impact_team, other_team) in impact.teams.iter().zip(&other.teams) {
        if impact_team != other_team {
            return Err(AllocError::ShapeMismatch(format!(
                "team '{impact_team}' in impact does not match '{other_team}' in {label}"
            )));
        }
    }
    for (impact_project, other_project) in impact.projects.iter().zip(&other.projects) {
        if impact_project != other_project {
            return Err(AllocError::ShapeMismatch(format!(
                "project '{impact_project}' in impact does not match '{other_project}' in {label}"
            )));
        }
    }
    Ok(())
}

fn fingerprint(sheet_texts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for text in sheet_texts {
        hasher.update(text.as_bytes());
    }
    let digest = hasher.finalize();
    digest.iter().map(|byte| format!("{byte:02x}")).collect()
}
