use handoff_normalizer::{ScssOptions, DEFAULT_COLOR_FALLBACK, DEFAULT_MAX_NESTING_DEPTH, DEFAULT_REM_PROPERTIES};
use handoff_prompt::NormalizeOptions;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "handoff.config.json";

/// Handoff configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Stylesheet lines nested deeper than this get a warning comment
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    /// Properties whose pixel values are rewritten to the rem mixin
    #[serde(default = "default_rem_properties")]
    pub rem_properties: Vec<String>,

    /// Hex used for unrecognized color variables
    #[serde(default = "default_color_fallback")]
    pub color_fallback: String,

    /// Put the first stylesheet class on the top-level markup tag
    #[serde(default = "default_enforce_wrapper_class")]
    pub enforce_wrapper_class: bool,
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

fn default_rem_properties() -> Vec<String> {
    DEFAULT_REM_PROPERTIES.iter().map(|name| name.to_string()).collect()
}

fn default_color_fallback() -> String {
    DEFAULT_COLOR_FALLBACK.to_string()
}

fn default_enforce_wrapper_class() -> bool {
    true
}

impl Config {
    /// Load the config named on the command line, or the default file in `cwd`.
    ///
    /// An explicit path must exist. A missing default file yields the defaults.
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config_path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = cwd.join(DEFAULT_CONFIG_NAME);
                if !path.exists() {
                    debug!("No config file found, using defaults");
                    return Ok(Config::default());
                }
                path
            }
        };

        Self::read(&config_path)
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|err| anyhow::anyhow!("Cannot read config {}: {}", path.display(), err))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| anyhow::anyhow!("Invalid config {}: {}", path.display(), err))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn scss_options(&self) -> ScssOptions {
        ScssOptions {
            max_nesting_depth: self.max_nesting_depth,
            rem_properties: self.rem_properties.clone(),
            color_fallback: self.color_fallback.clone(),
        }
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            scss: self.scss_options(),
            enforce_wrapper_class: self.enforce_wrapper_class,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_nesting_depth: default_max_nesting_depth(),
            rem_properties: default_rem_properties(),
            color_fallback: default_color_fallback(),
            enforce_wrapper_class: default_enforce_wrapper_class(),
        }
    }
}
