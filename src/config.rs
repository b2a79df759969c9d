use crate::error::{AllocError, Result};
use crate::types::config::AllocConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "allocscan.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".allocscan/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/allocscan/config.toml";

/// Load the layered configuration for a workbook directory: global user
/// config, then `allocscan.toml` next to the sheets, then a local override,
/// later layers winning. Returns `None` when no layer exists.
pub fn load_config(workbook_dir: &Path) -> Result<Option<AllocConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(workbook_dir, global.as_deref())
}

pub(crate) fn load_config_with_global(
    workbook_dir: &Path,
    global_path: Option<&Path>,
) -> Result<Option<AllocConfig>> {
    let mut merged = Value::Table(Map::new());
    let mut found = false;

    if let Some(path) = global_path {
        found |= merge_file_if_exists(&mut merged, path)?;
    }
    found |= merge_file_if_exists(&mut merged, &workbook_dir.join(DEFAULT_CONFIG_FILE))?;
    found |= merge_file_if_exists(&mut merged, &workbook_dir.join(DEFAULT_LOCAL_FILE))?;

    if !found {
        return Ok(None);
    }

    let cfg: AllocConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| AllocError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    tracing::debug!("merging config layer {}", path.display());
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(true)
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| AllocError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
