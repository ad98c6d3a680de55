//! Configuration loading
//!
//! `defaults/postclean.default.toml` is embedded into the library so the
//! documented defaults and the runtime behavior cannot drift apart.
//! Callers layer their own files and single-key overrides on top through
//! [`Loader`] before deserializing into [`CleanConfig`].
//!
//! The outlet and brand phrases the header cleaner drops live here rather
//! than in code: they go stale quickly and are grouped by locale so a
//! deployment can enable only the lists it needs.

use crate::pipeline::{FilterPlacement, StageKind};
use crate::stages::EmojiMode;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/postclean.default.toml");

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CleanConfig {
    pub pipeline: PipelineConfig,
    pub header: HeaderConfig,
}

/// Which stages run and how the optional ones behave
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub emoji: EmojiMode,
    #[serde(default)]
    pub disabled: Vec<StageKind>,
    pub mention_remover: bool,
    pub short_record_filter: FilterPlacement,
    pub min_record_length: usize,
}

impl PipelineConfig {
    /// Stages this configuration enables, in canonical order
    pub fn enabled_stages(&self) -> Vec<StageKind> {
        StageKind::CANONICAL_ORDER
            .into_iter()
            .filter(|kind| match kind {
                StageKind::MentionRemover => self.mention_remover,
                kind => kind.enabled_by_default(),
            })
            .filter(|kind| !self.disabled.contains(kind))
            .collect()
    }
}

/// Phrase lists and thresholds for the header cleaner
#[derive(Debug, Clone, Deserialize)]
pub struct HeaderConfig {
    pub max_noise_length: usize,
    pub payment_window: usize,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub subscribe_patterns: Vec<String>,
    #[serde(default)]
    pub channel_markers: Vec<String>,
    #[serde(default)]
    pub payment_terms: Vec<String>,
    #[serde(default)]
    pub outlets: BTreeMap<String, Vec<String>>,
}

impl HeaderConfig {
    /// Outlet phrases of the active locales; every locale when none is selected
    pub fn active_outlets(&self) -> impl Iterator<Item = &str> {
        self.outlets
            .iter()
            .filter(move |(locale, _)| self.locales.is_empty() || self.locales.contains(*locale))
            .flat_map(|(_, phrases)| phrases.iter().map(String::as_str))
    }
}

/// Stacks configuration sources over the embedded defaults.
///
/// Later layers win key by key. A phrase list such as
/// `header.channel_markers` is replaced as a whole by a layer that sets it,
/// so a user file only has to name the lists it changes.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// A loader holding only `defaults/postclean.default.toml`
    pub fn new() -> Self {
        Loader {
            builder: Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// Layer a user TOML file. The file must exist.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let file = File::from(path.as_ref()).format(FileFormat::Toml);
        self.builder = self.builder.add_source(file);
        self
    }

    /// Layer inline TOML, e.g. a per-deployment locale selection
    pub fn with_toml(mut self, toml: &str) -> Self {
        self.builder = self.builder.add_source(File::from_str(toml, FileFormat::Toml));
        self
    }

    /// Set one dotted key, as the CLI does for `--emoji` and `--filter-short`
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge every layer into a [`CleanConfig`]
    pub fn build(self) -> Result<CleanConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The configuration every [`Pipeline::standard`](crate::Pipeline::standard) run uses
pub fn load_defaults() -> Result<CleanConfig, ConfigError> {
    Loader::new().build()
}
