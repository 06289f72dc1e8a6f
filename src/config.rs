use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use textkit::render::OutputFormat;
use textkit::tools::ToolCatalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub catalog: CatalogConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Start from the built-in text tools
    pub include_builtins: bool,
    /// TOML catalog files overlaid in order, matched by page
    pub extra: Vec<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_builtins: true,
            extra: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Build the effective catalog: built-ins (if enabled) overlaid by each extra file
    pub fn build(&self) -> Result<ToolCatalog> {
        let mut catalog = if self.include_builtins {
            ToolCatalog::with_builtins()
        } else {
            ToolCatalog::new()
        };

        for path in &self.extra {
            let extra = ToolCatalog::from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display()))?;
            log::info!("Overlaying {} tools from {}", extra.len(), path.display());
            catalog.overlay(extra);
        }

        Ok(catalog)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            catalog: CatalogConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        Ok(Self::load_implicit(&Self::implicit_paths()))
    }

    /// Implicit config locations, most specific last:
    /// ~/.config/<project>/<project>.yml, then ./<project>.yml
    fn implicit_paths() -> Vec<PathBuf> {
        let project_name = env!("CARGO_PKG_NAME");
        let file_name = format!("{}.yml", project_name);

        let mut paths = Vec::new();
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(project_name).join(&file_name));
        }
        paths.push(PathBuf::from(file_name));
        paths
    }

    /// First candidate that exists and parses; broken files are warned about and skipped
    fn load_implicit(candidates: &[PathBuf]) -> Self {
        for path in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(path) {
                Ok(config) => return config,
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", path.display(), e);
                }
            }
        }

        log::info!("No config file found, using defaults");
        Self::default()
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}
