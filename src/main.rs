//! Klotski
//!
//! A 4x5 board holds a handful of wooden pieces; the 2x2 king escapes
//! through the bottom once its footprint reaches the goal cell. This
//! binary wraps the engine in a small terminal loop: pick a layout, slide
//! pieces one cell at a time, and get told when the king is free.

use std::io::{self, BufRead};

use clap::{Parser, Subcommand, ValueEnum};

use klotski::board::{format_board, Board};
use klotski::geometry::Direction;
use klotski::pieces::{Layout, CLASSIC, TRAINING};

/// Plays the Klotski sliding-block puzzle in the terminal.
#[derive(Parser)]
#[command(name = "klotski")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play a layout interactively.
    Play {
        /// Starting layout.
        #[arg(long, value_enum, default_value = "classic")]
        layout: LayoutName,
    },
    /// Print a layout's starting position.
    Show {
        /// Starting layout.
        #[arg(long, value_enum, default_value = "classic")]
        layout: LayoutName,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutName {
    Classic,
    Training,
}

impl LayoutName {
    fn layout(self) -> &'static Layout {
        match self {
            LayoutName::Classic => &CLASSIC,
            LayoutName::Training => &TRAINING,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Play { layout }) => run_play(layout.layout()),
        Some(Command::Show { layout }) => run_show(layout.layout()),
        None => {
            // default: play the classic layout
            run_play(LayoutName::Classic.layout());
        }
    }
}

/// Prints a layout's starting position.
fn run_show(layout: &Layout) {
    match Board::from_layout(layout) {
        Ok(board) => print!("{}", format_board(&board)),
        Err(e) => eprintln!("invalid layout: {}", e),
    }
}

/// Runs the interactive move loop until the king escapes or input ends.
fn run_play(layout: &Layout) {
    let mut board = match Board::from_layout(layout) {
        Ok(board) => board,
        Err(e) => {
            eprintln!("invalid layout: {}", e);
            return;
        }
    };

    println!("Slide pieces with `x y up|down|left|right`. `quit` exits.");
    print!("{}", format_board(&board));

    let mut moves = 0u32;
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }
        let Some((x, y, dir)) = parse_move(input) else {
            println!("expected `x y up|down|left|right`");
            continue;
        };
        match board.move_piece(x, y, dir) {
            Ok(true) => {
                moves += 1;
                print!("{}", format_board(&board));
                if board.won() {
                    println!("Solved in {} moves", moves);
                    return;
                }
            }
            Ok(false) => println!("blocked"),
            Err(e) => println!("{}", e),
        }
    }
}

/// Parses an `x y direction` command.
fn parse_move(input: &str) -> Option<(i32, i32, Direction)> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let dir = match parts.next()? {
        "up" | "u" => Direction::Up,
        "down" | "d" => Direction::Down,
        "left" | "l" => Direction::Left,
        "right" | "r" => Direction::Right,
        _ => return None,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((x, y, dir))
}
