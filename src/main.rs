//! Strictly Grid - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use strictly_grid::{
    ConsoleView, GameConfig, GameResult, Harness, HarnessSettings, RulesEngine,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let has_targets = cli.command.has_target_flags();

    match cli.command {
        Command::Play { size, config } => run_play(size, config).await,
        Command::Synth {
            config,
            size,
            winner,
            draw,
            row,
            column,
            left_diagonal,
            right_diagonal,
            interval_ms,
            json,
        } => {
            let mut settings = match config {
                Some(path) => HarnessSettings::from_file(path)?,
                None => HarnessSettings::default(),
            };
            if has_targets {
                settings = settings
                    .with_draw(draw)
                    .with_row_win(row.is_some())
                    .with_row_index(row.unwrap_or_default())
                    .with_column_win(column.is_some())
                    .with_column_index(column.unwrap_or_default())
                    .with_left_diagonal_win(left_diagonal)
                    .with_right_diagonal_win(right_diagonal);
            }
            if let Some(size) = size {
                settings = settings.with_board_size(size);
            }
            if let Some(winner) = winner {
                settings = settings.with_player_to_win(winner);
            }
            if let Some(ms) = interval_ms {
                settings = settings.with_move_interval_secs(ms as f64 / 1000.0);
            }
            run_synth(settings, json).await
        }
    }
}

/// Runs the harness and exits non-zero when the verdict is a failure.
#[instrument(skip(settings))]
async fn run_synth(settings: HarnessSettings, json: bool) -> Result<()> {
    let harness = Harness::from_settings(&settings).context("Invalid harness settings")?;
    let plan = *harness.plan();
    info!(outcome = %plan.target, winner = %plan.player_to_win, size = plan.board_size, "Running harness");

    let mut engine = RulesEngine::new(plan.board_size)?;
    engine.subscribe(Box::new(ConsoleView::stdout()));
    harness.prepare(&mut engine)?;

    let verdict = harness.run(&mut engine).await?;
    println!("{}", engine.board().display());
    engine.print_move_history();
    if json {
        println!("{}", engine.history_json()?);
    }
    println!("{}", verdict);

    if !verdict.is_pass() {
        bail!("Harness check failed: {}", verdict);
    }
    Ok(())
}

/// Interactive game on stdin/stdout.
#[instrument]
async fn run_play(size: Option<usize>, config: Option<std::path::PathBuf>) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    let size = size.unwrap_or(*config.board_size());

    let mut engine = RulesEngine::new(size)?;
    engine.subscribe(Box::new(ConsoleView::stdout()));

    println!("Enter moves as `row column` (0-based). Commands: reset, history, quit.");
    print_turn(&engine);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "exit" => break,
            "reset" => {
                engine.reset();
                print_turn(&engine);
                continue;
            }
            "history" => {
                for record in engine.history() {
                    println!("{}", record);
                }
                continue;
            }
            _ => {}
        }

        let Some((row, column)) = parse_move(input) else {
            println!("Could not read `{}`; expected `row column`.", input);
            continue;
        };

        match engine.apply_move(row, column) {
            Ok(GameResult::InProgress) => print_turn(&engine),
            Ok(_) => {
                println!("{}", engine.board().display());
                println!("Type `reset` to play again or `quit` to exit.");
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                println!("{}. Try another cell.", e);
            }
        }
    }

    Ok(())
}

fn print_turn(engine: &RulesEngine) {
    let player = engine.current_player();
    println!("\n{}\n{}'s turn ({})", engine.board().display(), player, player.mark());
}

fn parse_move(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let column = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("1 2"), Some((1, 2)));
        assert_eq!(parse_move("0,3"), Some((0, 3)));
        assert_eq!(parse_move("  4   5 "), Some((4, 5)));
        assert_eq!(parse_move("1"), None);
        assert_eq!(parse_move("1 2 3"), None);
        assert_eq!(parse_move("a b"), None);
    }
}
