use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::parse_context;
use crate::files;

pub const SUPPORTED_VERSION: u32 = 1;

const BUILTIN_MAPPINGS: &str = include_str!("mappings.json");

/// Export-name to store-name overrides for names that differ between the
/// source export and the destination store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NameMappings {
    pub version: u32,
    #[serde(default)]
    pub games: BTreeMap<String, String>,
    #[serde(default)]
    pub players: BTreeMap<String, String>,
}

impl NameMappings {
    /// Built-in table, or the file at `path` when one is configured
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mappings = match path {
            Some(path) => {
                let mappings: Self = files::read_json(path)?;
                info!("Loaded name mappings from {}", path.display());
                mappings
            }
            None => Self::builtin()?,
        };
        mappings.check_version()?;
        Ok(mappings)
    }

    pub fn builtin() -> Result<Self> {
        serde_json::from_str(BUILTIN_MAPPINGS).with_context(|| parse_context("built-in name mappings"))
    }

    fn check_version(&self) -> Result<()> {
        if self.version != SUPPORTED_VERSION {
            anyhow::bail!(
                "Unsupported name mappings version {} (expected {})",
                self.version,
                SUPPORTED_VERSION
            );
        }
        Ok(())
    }

    pub fn game(&self, export_name: &str) -> Option<&str> {
        self.games.get(export_name).map(String::as_str)
    }

    pub fn player(&self, export_name: &str) -> Option<&str> {
        self.players.get(export_name).map(String::as_str)
    }
}
