use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::rewrite::{DEFAULT_CALLEE, RewriteSettings, script::DEFAULT_PATTERN};
use crate::utils::is_identifier;

pub const CONFIG_FILE_NAME: &str = ".cn2i18nrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_callee")]
    pub callee: String,
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default = "default_output_suffix")]
    pub output_suffix: String,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
}

fn default_callee() -> String {
    DEFAULT_CALLEE.to_string()
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

fn default_output_suffix() -> String {
    "cache".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            callee: default_callee(),
            pattern: default_pattern(),
            output_suffix: default_output_suffix(),
            ignore_texts: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if the callee is not a plain identifier or the pattern
    /// does not compile.
    pub fn validate(&self) -> Result<()> {
        if !is_identifier(&self.callee) {
            bail!("Invalid 'callee': \"{}\" is not an identifier", self.callee);
        }
        if self.output_suffix.is_empty() || self.output_suffix.contains(['/', '\\']) {
            bail!(
                "Invalid 'outputSuffix': \"{}\" must be a non-empty file name part",
                self.output_suffix
            );
        }
        self.rewrite_settings().map(|_| ())
    }

    pub fn rewrite_settings(&self) -> Result<RewriteSettings> {
        RewriteSettings::new(&self.callee, &self.pattern, &self.ignore_texts)
            .context("Invalid 'pattern'")
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` if using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
