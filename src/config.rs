//! Layered configuration for the extractor.
//!
//! `defaults/putusan.default.toml` is embedded into the binary so that docs and
//! runtime behavior stay in sync. Callers layer a user file, `PUTUSAN_*`
//! environment variables and CLI overrides on top via [`Loader`] before
//! deserializing into [`PutusanConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

const DEFAULT_TOML: &str = include_str!("../defaults/putusan.default.toml");

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct PutusanConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub parser: ParserConfig,
    pub court: CourtConfig,
}

/// Where judgment text files are read from.
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    pub dir: PathBuf,
    pub extension: String,
}

/// Table output knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub sheet_name: String,
    /// Cell value used for fields the parser could not find.
    pub not_found: String,
    pub evidence_separator: String,
    pub max_evidence_chars: usize,
}

/// Extraction heuristics.
#[derive(Debug, Clone, Deserialize)]
pub struct ParserConfig {
    /// Strip repository boilerplate before running the field rules.
    pub normalize_input: bool,
    /// Also accept `telah ditemukan` / `terbukti` as evidence headings.
    pub loose_evidence_fallbacks: bool,
    pub verdict_window_chars: usize,
    pub max_verdict_chars: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourtConfig {
    #[serde(default)]
    pub default_name: Option<String>,
    /// Court code (lower case, as in `PN Yyk`) to city name.
    #[serde(default)]
    pub codes: HashMap<String, String>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            normalize_input: true,
            loose_evidence_fallbacks: false,
            verdict_window_chars: 4000,
            max_verdict_chars: 3000,
        }
    }
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            default_name: Some("PN YOGYAKARTA".to_string()),
            codes: HashMap::from([("yyk".to_string(), "YOGYAKARTA".to_string())]),
        }
    }
}

/// Prefix of environment variables read by [`Loader::with_environment`].
pub const ENV_PREFIX: &str = "PUTUSAN";

/// Builds a [`PutusanConfig`] from the embedded defaults plus whatever layers
/// the caller stacks on top. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML settings file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), true)
    }

    /// Layer a TOML settings file if it exists (e.g. `./putusan.toml`).
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.with_toml(path.as_ref(), false)
    }

    fn with_toml(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `PUTUSAN_<SECTION>__<KEY>` variables from the process
    /// environment, e.g. `PUTUSAN_OUTPUT__NOT_FOUND=-`.
    pub fn with_environment(self) -> Self {
        self.with_environment_from(None)
    }

    /// As [`with_environment`](Self::with_environment), reading `vars`
    /// instead of the process environment when given.
    pub fn with_environment_from(mut self, vars: Option<HashMap<String, String>>) -> Self {
        let source = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .source(vars);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one dotted key (`output.format`), as the CLI flags do.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<PutusanConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Settings with no file, environment or override layered on.
pub fn load_defaults() -> Result<PutusanConfig, ConfigError> {
    Loader::new().build()
}
