use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "Migrate board-game play history into a document store")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Create the destination store and its tables
    InitStore,
    /// Flatten the stats export into one JSON play per line
    Convert,
    /// Flatten the stats export into one CSV row per player score
    ConvertCsv,
    /// Replace game and player names with store identifiers
    Resolve,
    /// Coerce scores, derive ranks and rewrite timestamps
    Normalize,
    /// Append normalized plays to the store in batches
    ImportPlays,
    /// Seed catalog games the store does not have yet
    AddGames,
    /// Seed catalog players the store does not have yet
    AddPlayers,
    /// Report export names missing from the store
    Analyze,
    /// Suggest close store names for unresolved export names
    Suggest,
    /// Reconcile per-game best scores with historical plays
    BestScores {
        /// Write the updates (default is a dry run)
        #[arg(long)]
        apply: bool,
    },
    /// Show what the store currently holds
    Inspect,
    /// Print shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_scores_defaults_to_dry_run() {
        let cli = Cli::parse_from(["playlog-migrate", "best-scores"]);
        assert_eq!(cli.command, Command::BestScores { apply: false });

        let cli = Cli::parse_from(["playlog-migrate", "best-scores", "--apply"]);
        assert_eq!(cli.command, Command::BestScores { apply: true });
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::parse_from(["playlog-migrate", "import-plays"]);
        assert_eq!(cli.command, Command::ImportPlays);
        assert!(Cli::try_parse_from(["playlog-migrate", "bogus"]).is_err());
    }
}
