//! Shared configuration loader for the ipyrmd toolchain.
//!
//! `defaults/rmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`RmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use rmd_babel::notebook::{Kernelspec, LanguageInfo, NotebookDefaults};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/rmd.default.toml");

/// Top-level configuration consumed by ipyrmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct RmdConfig {
    pub notebook: NotebookConfig,
    pub convert: ConvertConfig,
}

/// Metadata stamped on notebooks created from flat text.
#[derive(Debug, Clone, Deserialize)]
pub struct NotebookConfig {
    pub expected_language: String,
    pub nbformat_minor: u32,
    pub kernelspec: KernelspecConfig,
    pub language_info: LanguageInfoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KernelspecConfig {
    pub display_name: String,
    pub language: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageInfoConfig {
    pub name: String,
    pub file_extension: String,
    pub codemirror_mode: String,
    pub mimetype: String,
    pub pygments_lexer: String,
}

impl From<NotebookConfig> for NotebookDefaults {
    fn from(config: NotebookConfig) -> Self {
        NotebookDefaults {
            expected_language: config.expected_language,
            nbformat_minor: config.nbformat_minor,
            kernelspec: Kernelspec {
                display_name: config.kernelspec.display_name,
                language: config.kernelspec.language,
                name: config.kernelspec.name,
            },
            language_info: LanguageInfo {
                name: config.language_info.name,
                file_extension: config.language_info.file_extension,
                codemirror_mode: config.language_info.codemirror_mode,
                mimetype: config.language_info.mimetype,
                pygments_lexer: config.language_info.pygments_lexer,
            },
        }
    }
}

/// Conversion behavior of the cli.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub overwrite: bool,
    pub flat_format: FlatFormat,
}

/// Flat-text target chosen for notebook input when none is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum FlatFormat {
    #[serde(rename = "rmd")]
    Rmd,
    #[serde(rename = "spin")]
    Spin,
}

impl FlatFormat {
    /// Registry name of the format.
    pub fn as_str(&self) -> &'static str {
        match self {
            FlatFormat::Rmd => "rmd",
            FlatFormat::Spin => "spin",
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<RmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<RmdConfig, ConfigError> {
    Loader::new().build()
}
