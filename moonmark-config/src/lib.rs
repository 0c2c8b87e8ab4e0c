//! Reading tables and render options for moonmark.
//!
//! The site's tables (section icons, highlight words, the nine keyword groups) ship in
//! `defaults/moonmark.default.toml`, compiled into the binary. A deployment changes them
//! by layering its own TOML on top with [`Loader`]: every key a user file sets wins, and a
//! list it sets (keywords, highlight words, icon entries) replaces the default list as a
//! whole. `moonmark --escape` becomes a `render.escape_text` override.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use moonmark::moonmark::error::FormatError;
use moonmark::moonmark::formats::RenderOptions;
use moonmark::{FormatterTables, NarrativeFormatter};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/moonmark.default.toml");

/// Everything a [`NarrativeFormatter`] is built from.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MoonmarkConfig {
    pub tables: FormatterTables,
    #[serde(default)]
    pub render: RenderOptions,
}

impl MoonmarkConfig {
    /// Compile the tables into a ready-to-share formatter.
    pub fn formatter(&self) -> Result<NarrativeFormatter, FormatError> {
        NarrativeFormatter::with_options(&self.tables, self.render)
    }
}

/// Layers reading tables: built-in defaults first, then user files and overrides in the
/// order they are added.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Loader holding only the site's default tables.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a user table file; `build` fails if it is missing or not TOML.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a table file that may not exist, e.g. a per-user file in a home directory.
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Set one key, such as `render.escape_text`, above every file layer.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Merge the layers and deserialize the tables.
    pub fn build(self) -> Result<MoonmarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The site's default tables with no user layer.
pub fn load_defaults() -> Result<MoonmarkConfig, ConfigError> {
    Loader::new().build()
}
