// std imports
use std::include_str;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

// local imports
use crate::suite::{Engine, Group};

// ---

pub(crate) static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

// ---

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    pub groups: Vec<Group>,
    pub engines: Vec<Engine>,
    pub repetitions: usize,
    pub timing: bool,
    pub unit: SymbolUnit,
}

impl Default for Settings {
    fn default() -> Self {
        Config::builder()
            .add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Yaml))
            .build()
            .and_then(|config| config.try_deserialize())
            .expect("embedded default settings are valid")
    }
}

// ---

/// Granularity at which strings are split into symbols.
#[derive(ValueEnum, Clone, Copy, Debug, Deserialize, Serialize, Eq, Hash, PartialEq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SymbolUnit {
    /// Each byte is a symbol.
    Byte,
    /// Each Unicode scalar value is a symbol.
    #[default]
    Char,
    /// Each extended grapheme cluster is a symbol.
    Grapheme,
}

impl From<SymbolUnit> for wildcard::Unit {
    fn from(unit: SymbolUnit) -> Self {
        match unit {
            SymbolUnit::Byte => Self::Byte,
            SymbolUnit::Char => Self::Char,
            SymbolUnit::Grapheme => Self::Grapheme,
        }
    }
}
