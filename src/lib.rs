pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod files;
pub mod identity;
pub mod records;
pub mod report;
pub mod scoring;
pub mod services;
pub mod sink;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::AppConfig;
use crate::database::SqliteStore;
use crate::services::analysis::AnalysisService;
use crate::services::best_scores::BestScoreService;
use crate::services::conversion::ConversionService;
use crate::services::import::ImportService;
use crate::services::normalization::NormalizationService;
use crate::services::resolution::ResolutionService;
use crate::services::seeding::SeedingService;
use crate::services::store_admin;

const BIN_NAME: &str = "playlog-migrate";

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

fn open_store(config: &AppConfig) -> Result<SqliteStore> {
    SqliteStore::open(&config.store.path)
}

pub fn handle_init_store(config: AppConfig) -> Result<()> {
    store_admin::init_store(&config)
}

pub fn handle_convert(config: AppConfig) -> Result<()> {
    ConversionService::new(config).run_jsonl().map(|_| ())
}

pub fn handle_convert_csv(config: AppConfig) -> Result<()> {
    ConversionService::new(config).run_csv().map(|_| ())
}

pub fn handle_resolve(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    ResolutionService::new(config, &store).run().map(|_| ())
}

pub fn handle_normalize(config: AppConfig) -> Result<()> {
    NormalizationService::new(config).run().map(|_| ())
}

pub fn handle_import_plays(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    ImportService::new(config, &store).run().map(|_| ())
}

pub fn handle_add_games(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    SeedingService::new(config, &store).add_games().map(|_| ())
}

pub fn handle_add_players(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    SeedingService::new(config, &store).add_players().map(|_| ())
}

pub fn handle_analyze(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    AnalysisService::new(config, &store).analyze().map(|_| ())
}

pub fn handle_suggest(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    AnalysisService::new(config, &store).suggest().map(|_| ())
}

pub fn handle_best_scores(config: AppConfig, apply: bool) -> Result<()> {
    let store = open_store(&config)?;
    BestScoreService::new(config, &store).run(apply).map(|_| ())
}

pub fn handle_inspect(config: AppConfig) -> Result<()> {
    let store = open_store(&config)?;
    store_admin::inspect(&store).map(|_| ())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(shell, &mut command, BIN_NAME, &mut std::io::stdout());
    Ok(())
}
