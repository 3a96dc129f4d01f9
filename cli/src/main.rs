// SPDX-License-Identifier: MIT OR Apache-2.0

//! Terminal front-end for nineboard.
//!
//! Renders the board, reads moves typed as coordinates ("E5"), and drives
//! the heuristic opponent. Cumulative win totals persist across games in a
//! JSON file.

mod render;
mod stats;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;

use nineboard_core::{
    Color, Coord, FinalScore, GameSession, HeuristicBot, Move, MovePolicy, WinTally, BOARD_SIZE,
};
use stats::FileTally;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(
    name = "nineboard",
    about = "Nine-by-nine Go against a heuristic opponent",
    version
)]
struct Args {
    /// Seed for the opponent's tie-breaking jitter (random when omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Start with the automated opponent disabled
    #[clap(long)]
    no_opponent: bool,

    /// Where cumulative win counters are stored
    #[clap(long, default_value = "nineboard-stats.json")]
    stats_file: PathBuf,

    /// Enable debug logging
    #[clap(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mut tally = FileTally::load(&args.stats_file)?;
    let mut bot = match args.seed {
        Some(seed) => HeuristicBot::seeded(seed),
        None => HeuristicBot::new(),
    };

    let mut session = GameSession::new();
    session.set_opponent(!args.no_opponent);

    println!("nineboard - 9x9 Go");
    println!("Moves look like 'E5'. Commands: pass, undo, new, ai, stats, reset-stats, quit.");
    println!(
        "Record so far: Black {} - White {}",
        tally.black_wins(),
        tally.white_wins()
    );
    show(&session);
    prompt(&session)?;

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let input = line?.trim().to_lowercase();

        match input.as_str() {
            "" => {}
            "quit" | "exit" => break,
            "new" => {
                let enabled = session.opponent_enabled();
                session = GameSession::new();
                session.set_opponent(enabled);
                show(&session);
            }
            "pass" => {
                if let Some(outcome) = session.pass() {
                    println!("{:?} passes.", outcome.color);
                    if let Some(score) = outcome.score {
                        finish(&session, &score, &mut tally)?;
                    } else {
                        opponent_turn(&mut session, &mut bot, &mut tally)?;
                    }
                } else {
                    println!("The game is over - 'new' starts another, 'undo' reopens this one.");
                }
            }
            "undo" => {
                if session.undo() {
                    show(&session);
                } else {
                    println!("Nothing to undo.");
                }
            }
            "ai" => {
                let enabled = !session.opponent_enabled();
                session.set_opponent(enabled);
                println!(
                    "Automated opponent {}.",
                    if enabled { "on" } else { "off" }
                );
                opponent_turn(&mut session, &mut bot, &mut tally)?;
            }
            "stats" => {
                println!(
                    "Record: Black {} - White {}",
                    tally.black_wins(),
                    tally.white_wins()
                );
            }
            "reset-stats" => {
                tally.reset()?;
                println!("Record cleared.");
            }
            _ => match parse_coord(&input) {
                Ok(coord) => match session.place_stone(coord) {
                    Ok(Some(outcome)) => {
                        if !outcome.captured.is_empty() {
                            println!("Captured {} stone(s).", outcome.captured.len());
                        }
                        show(&session);
                        opponent_turn(&mut session, &mut bot, &mut tally)?;
                    }
                    Ok(None) => {
                        println!(
                            "The game is over - 'new' starts another, 'undo' reopens this one."
                        );
                    }
                    Err(err) => println!("❌ {err}"),
                },
                Err(err) => println!("❌ {err}"),
            },
        }

        prompt(&session)?;
    }

    Ok(())
}

/// Let the automated opponent answer when it is enabled and on turn.
fn opponent_turn(
    session: &mut GameSession,
    bot: &mut HeuristicBot,
    tally: &mut FileTally,
) -> Result<()> {
    if !session.opponent_enabled() || session.is_over() || session.to_move() != Color::White {
        return Ok(());
    }

    match bot.next_move(session) {
        Move::Place(coord) => match session.place_stone(coord) {
            Ok(Some(outcome)) => {
                println!("White plays {}.", format_coord(coord));
                if !outcome.captured.is_empty() {
                    println!("Captured {} stone(s).", outcome.captured.len());
                }
                show(session);
            }
            Ok(None) => {}
            Err(err) => {
                // The policy verifies legality before proposing.
                tracing::warn!(%err, "opponent proposed an illegal move, passing instead");
                if let Some(outcome) = session.pass() {
                    println!("White passes.");
                    if let Some(score) = outcome.score {
                        finish(session, &score, tally)?;
                    }
                }
            }
        },
        Move::Pass => {
            if let Some(outcome) = session.pass() {
                println!("White passes.");
                if let Some(score) = outcome.score {
                    finish(session, &score, tally)?;
                }
            }
        }
    }

    Ok(())
}

/// Report the final score, record the result and persist the tally.
fn finish(session: &GameSession, score: &FinalScore, tally: &mut FileTally) -> Result<()> {
    println!(
        "\n{}",
        render::render_board(session.board(), session.last_move(), &score.territory)
    );
    println!(
        "Game over. Black {} - White {} (stones + territory)",
        score.black, score.white
    );
    match score.winner() {
        Some(Color::Black) => println!("Black wins!"),
        Some(Color::White) => println!("White wins!"),
        None => println!("Draw."),
    }

    tally.record(score.winner());
    tally.save()?;
    println!(
        "Record: Black {} - White {}",
        tally.black_wins(),
        tally.white_wins()
    );

    Ok(())
}

/// Print the board and capture totals.
fn show(session: &GameSession) {
    println!(
        "\n{}",
        render::render_board(session.board(), session.last_move(), &[])
    );
    let (black, white) = session.captures();
    if black > 0 || white > 0 {
        println!("Captures: Black {black} - White {white}");
    }
}

/// Print the status line and prompt for input.
fn prompt(session: &GameSession) -> Result<()> {
    if session.is_over() {
        print!("Game over - 'new', 'undo' or 'quit' > ");
    } else {
        let status = session.status();
        let mut line = format!("{:?} to move", status.to_move);
        if status.consecutive_passes > 0 {
            line.push_str(" (opponent passed)");
        }
        if status.in_atari {
            line.push_str(" ⚠ atari!");
        }
        print!("{line} > ");
    }
    io::stdout().flush()?;
    Ok(())
}

/// Parse a move typed as a coordinate like "E5" (column letter, row number)
fn parse_coord(input: &str) -> Result<Coord> {
    let mut chars = input.chars();
    let col_char = chars
        .next()
        .ok_or_else(|| anyhow!("moves look like 'E5', or a command like 'pass'"))?;
    let row_str = chars.as_str();

    // Column letters run A-H then J; 'I' is skipped by convention.
    let x = if ('a'..='h').contains(&col_char) {
        col_char as u8 - b'a'
    } else if col_char == 'j' {
        8
    } else {
        return Err(anyhow!("column must be A-H or J"));
    };

    let y = match row_str.parse::<u8>() {
        Ok(r) if (1..=BOARD_SIZE).contains(&r) => r - 1,
        _ => return Err(anyhow!("row must be between 1 and {BOARD_SIZE}")),
    };

    Ok(Coord::new(x, y))
}

/// Format a coordinate the way moves are typed
fn format_coord(coord: Coord) -> String {
    format!("{}{}", render::column_char(coord.x), coord.y + 1)
}
