use anyhow::Result;

use playlog_migrate::cli::Command;
use playlog_migrate::config::AppConfig;
use playlog_migrate::{
    handle_add_games, handle_add_players, handle_analyze, handle_best_scores, handle_completions,
    handle_convert, handle_convert_csv, handle_import_plays, handle_init_store, handle_inspect,
    handle_normalize, handle_resolve, handle_suggest, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    if let Command::Completions { shell } = command {
        return handle_completions(*shell);
    }

    let config = AppConfig::from_env()?;
    match command {
        Command::InitStore => handle_init_store(config),
        Command::Convert => handle_convert(config),
        Command::ConvertCsv => handle_convert_csv(config),
        Command::Resolve => handle_resolve(config),
        Command::Normalize => handle_normalize(config),
        Command::ImportPlays => handle_import_plays(config),
        Command::AddGames => handle_add_games(config),
        Command::AddPlayers => handle_add_players(config),
        Command::Analyze => handle_analyze(config),
        Command::Suggest => handle_suggest(config),
        Command::BestScores { apply } => handle_best_scores(config, *apply),
        Command::Inspect => handle_inspect(config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
