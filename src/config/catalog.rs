use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::domain::NewGame;
use crate::errors::parse_context;
use crate::files;

use super::mappings::SUPPORTED_VERSION;

const BUILTIN_CATALOG: &str = include_str!("catalog.json");

/// Games and players to seed into the destination store
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCatalog {
    pub version: u32,
    #[serde(default)]
    pub games: Vec<NewGame>,
    #[serde(default)]
    pub players: Vec<String>,
}

impl SeedCatalog {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let catalog = match path {
            Some(path) => {
                let catalog: Self = files::read_json(path)?;
                info!("Loaded seed catalog from {}", path.display());
                catalog
            }
            None => serde_json::from_str(BUILTIN_CATALOG)
                .with_context(|| parse_context("built-in seed catalog"))?,
        };

        if catalog.version != SUPPORTED_VERSION {
            anyhow::bail!(
                "Unsupported seed catalog version {} (expected {})",
                catalog.version,
                SUPPORTED_VERSION
            );
        }
        Ok(catalog)
    }
}
