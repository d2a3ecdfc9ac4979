use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.cwmpgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CwmpgenConfig {
    /// Path or URL of the data model XML.
    pub input: String,
    /// Base output directory; each target writes into its own subdirectory.
    pub output: String,
    pub targets: Vec<TargetKind>,
    pub golang: GolangOptions,
    pub typescript: TypescriptOptions,
}

impl Default for CwmpgenConfig {
    fn default() -> Self {
        Self {
            input: "model.xml".to_string(),
            output: "generated".to_string(),
            targets: vec![TargetKind::Golang, TargetKind::Typescript, TargetKind::CHeader],
            golang: GolangOptions::default(),
            typescript: TypescriptOptions::default(),
        }
    }
}

/// Which backends to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    Golang,
    Typescript,
    CHeader,
}

impl TargetKind {
    /// Subdirectory of the output directory this target writes into.
    pub fn output_dir(&self) -> &'static str {
        match self {
            TargetKind::Golang => "go",
            TargetKind::Typescript => "typescript",
            TargetKind::CHeader => "include",
        }
    }
}

impl std::fmt::Display for TargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TargetKind::Golang => "golang",
            TargetKind::Typescript => "typescript",
            TargetKind::CHeader => "c_header",
        };
        write!(f, "{name}")
    }
}

/// Go backend options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GolangOptions {
    /// Package name override (defaults to the flat-lowered model name).
    pub package: Option<String>,
}

/// TypeScript backend options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypescriptOptions {
    /// Skip JSDoc comment blocks in the generated interfaces.
    pub no_jsdoc: bool,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".cwmpgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<CwmpgenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: CwmpgenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# cwmpgen configuration
input: model.xml      # local path or http(s) URL of the data model XML
output: generated     # base output directory (one subdirectory per target)

targets:              # golang | typescript | c_header
  - golang
  - typescript
  - c_header

golang:
  # package: tr181    # Go package name (defaults to the lower-cased model name)

typescript:
  no_jsdoc: false     # true to skip JSDoc blocks
"#
}
