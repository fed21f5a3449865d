use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Top-level configuration loaded from `.wot.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WotConfig {
    pub openapi: OpenApiConfig,
    pub assertions: AssertionsConfig,
}

/// Which renderings `wot openapi` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
    Both,
}

impl OutputFormat {
    pub fn includes_yaml(self) -> bool {
        matches!(self, OutputFormat::Yaml | OutputFormat::Both)
    }

    pub fn includes_json(self) -> bool {
        matches!(self, OutputFormat::Json | OutputFormat::Both)
    }
}

/// TD to OpenAPI conversion options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenApiConfig {
    /// Directory for `openapi.yaml` / `openapi.json`. Stdout when unset.
    pub output: Option<String>,
    pub format: OutputFormat,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            output: None,
            format: OutputFormat::Yaml,
        }
    }
}

/// Assertion reconciliation options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssertionsConfig {
    pub dir: String,
    pub assertions: String,
    pub pre_implemented: String,
    pub manual_flag: String,
}

impl Default for AssertionsConfig {
    fn default() -> Self {
        Self {
            dir: "assertions-csv".to_string(),
            assertions: "assertions.csv".to_string(),
            pre_implemented: "manual-generation-inputs/pre-implemented.csv".to_string(),
            manual_flag: wot_assertions::MANUAL_FLAG.to_string(),
        }
    }
}

impl AssertionsConfig {
    /// Resolve input and output paths, with `dir` overriding the configured directory.
    pub fn paths(&self, dir: Option<&Path>) -> wot_assertions::AssertionPaths {
        let dir = dir.map_or_else(|| PathBuf::from(&self.dir), Path::to_path_buf);
        wot_assertions::AssertionPaths {
            assertions: dir.join(&self.assertions),
            pre_implemented: dir.join(&self.pre_implemented),
            output_dir: dir,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".wot.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<WotConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: WotConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# wot configuration
openapi:
  # output: openapi       # directory for openapi.yaml / openapi.json (stdout when unset)
  format: yaml            # yaml | json | both

assertions:
  dir: assertions-csv
  assertions: assertions.csv
  pre_implemented: manual-generation-inputs/pre-implemented.csv
  manual_flag: not testable with Assertion Tester
"#
}
