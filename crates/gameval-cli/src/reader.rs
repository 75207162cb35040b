use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use gameval_core::catalogs::DEFAULT_REVISION;
use gameval_core::{
    default_export_map, GamevalError, Result, DEFAULT_BASE_URL, DEFAULT_TABLE_PATH,
};

pub const CONFIG_FILE_NAME: &str = "gamevals.config.yaml";

/// Project configuration from gamevals.config.yaml. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    pub base_url: Option<String>,
    pub table_path: Option<PathBuf>,
    pub revision: Option<String>,
    pub export_map: Option<IndexMap<String, Vec<String>>>,
}

/// Settings for `gamevals generate`.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub base_url: String,
    pub output: PathBuf,
    pub export_map: IndexMap<String, Vec<String>>,
}

/// Settings for `gamevals report`.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub root: PathBuf,
    /// Table path relative to `root`.
    pub table_path: PathBuf,
    pub revision: String,
    pub dedupe: bool,
}

impl ReportConfig {
    pub fn table_file(&self) -> PathBuf {
        self.root.join(&self.table_path)
    }
}

/// Read gamevals.config.yaml from the project root, if present.
pub fn read_project_config(root: &Path) -> Result<ProjectConfig> {
    let config_path = root.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(ProjectConfig::default());
    }

    let content =
        fs::read_to_string(&config_path).map_err(|e| GamevalError::io(&config_path, e))?;
    serde_yaml::from_str(&content).map_err(|e| GamevalError::Config {
        message: format!("{}: {e}", config_path.display()),
    })
}

impl ProjectConfig {
    pub fn generate_config(
        self,
        root: &Path,
        table: Option<PathBuf>,
        base_url: Option<String>,
    ) -> GenerateConfig {
        let table_path = table
            .or(self.table_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));
        GenerateConfig {
            base_url: base_url
                .or(self.base_url)
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            output: root.join(table_path),
            export_map: self.export_map.unwrap_or_else(default_export_map),
        }
    }

    pub fn report_config(
        self,
        root: &Path,
        table: Option<PathBuf>,
        revision: Option<String>,
        dedupe: bool,
    ) -> ReportConfig {
        ReportConfig {
            root: root.to_path_buf(),
            table_path: table
                .or(self.table_path)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH)),
            revision: revision
                .or(self.revision)
                .unwrap_or_else(|| DEFAULT_REVISION.to_string()),
            dedupe,
        }
    }
}
