use colored::Colorize;
use std::collections::BTreeSet;

use crate::domain::RunSummary;
use crate::identity::Suggestion;
use crate::scoring::{GameHistory, UpdateDirective};
use crate::sink::WriteSummary;

const RULE_WIDTH: usize = 50;

pub fn print_heading(title: &str) {
    println!("\n{}", title.bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_run_summary(summary: &RunSummary) {
    println!("\n{}", "Summary".bold());
    println!("  {} {}", "processed:".dimmed(), summary.processed);
    println!("  {} {}", "succeeded:".dimmed(), summary.succeeded.to_string().green());
    println!("  {} {}", "skipped:".dimmed(), summary.skipped.to_string().yellow());
    println!("  {} {}", "errored:".dimmed(), colour_errors(summary.errored));
}

pub fn print_write_summary(label: &str, summary: &WriteSummary) {
    println!(
        "  {} {} written in {} batches, {} failed",
        format!("{}:", label).dimmed(),
        summary.written.to_string().green(),
        summary.batches,
        colour_errors(summary.failed)
    );
    if !summary.failed_records.is_empty() {
        let positions: Vec<String> = summary.failed_records.iter().map(usize::to_string).collect();
        println!("    {} {}", "failed records:".dimmed(), positions.join(", ").red());
    }
}

fn colour_errors(count: usize) -> colored::ColoredString {
    if count == 0 {
        count.to_string().normal()
    } else {
        count.to_string().red().bold()
    }
}

pub fn print_names<'a>(heading: &str, names: impl IntoIterator<Item = &'a String>) {
    let names: Vec<&String> = names.into_iter().collect();
    if names.is_empty() {
        return;
    }
    println!("\n{} ({})", heading.yellow().bold(), names.len());
    for name in names {
        println!("  - {}", name);
    }
}

pub fn print_sample(title: &str, lines: &[String]) {
    if lines.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    for line in lines {
        println!("  {}", line.dimmed());
    }
}

pub fn print_suggestions(name: &str, suggestions: &[Suggestion]) {
    if suggestions.is_empty() {
        println!("  {} {}", name, "(no close match)".dimmed());
        return;
    }
    let listed: Vec<String> = suggestions
        .iter()
        .map(|s| format!("{} ({:.2})", s.name, s.similarity))
        .collect();
    println!("  {} → {}", name, listed.join(", ").cyan());
}

pub fn print_history(history: &[GameHistory]) {
    if history.is_empty() {
        return;
    }
    println!("\n{} ({})", "Historical scores".bold(), history.len());
    for game in history {
        println!(
            "  - {}: {} plays, high {}, low {}",
            game.game_name,
            game.plays,
            game.high.to_string().green(),
            game.low.to_string().cyan()
        );
    }
}

/// Print best-score directives; `applied` switches the closing line
pub fn print_directives(directives: &[UpdateDirective], applied: bool) {
    if directives.is_empty() {
        println!("\n{}", "All best scores are up to date.".green());
        return;
    }

    println!("\n{} ({})", "Best score updates".bold(), directives.len());
    for directive in directives {
        println!("\n  {} ({})", directive.game_name.bold(), directive.direction.as_str().dimmed());
        println!(
            "    {} {}",
            "current:".dimmed(),
            directive.previous.as_deref().unwrap_or("None")
        );
        println!("    {} {}", "new:".dimmed(), directive.new_value.to_string().green());
        println!("    {} {}", "reason:".dimmed(), directive.reason);
    }

    if !applied {
        println!(
            "\n{}",
            "Dry run: no changes written. Re-run with --apply to update the store.".yellow()
        );
    }
}

/// Body of the missing games list file
pub fn missing_games_file_lines(
    priority: &BTreeSet<String>,
    missing: &BTreeSet<String>,
) -> Vec<String> {
    let mut lines = vec![
        "PRIORITY GAMES TO ADD (have valid players):".to_string(),
        "=".repeat(RULE_WIDTH),
    ];
    lines.extend(priority.iter().cloned());

    lines.push(String::new());
    lines.push(String::new());
    lines.push("ALL MISSING GAMES:".to_string());
    lines.push("=".repeat(RULE_WIDTH));
    lines.extend(missing.iter().map(|game| {
        if priority.contains(game) {
            format!("[PRIORITY] {}", game)
        } else {
            game.clone()
        }
    }));

    lines
}
