#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::game::{GameEngine, PlayerId};
use crate::player::{Action, Player};
use rand::rngs::SmallRng;

/// Interactive console player.
pub struct CliPlayer;

impl CliPlayer {
    pub fn new() -> Self {
        Self
    }
}

fn parse_coord(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let x: usize = parts.next()?.parse().ok()?;
    let y: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Render the grid: `P` poison square, `#` present, `.` eaten.
pub fn print_board(engine: &GameEngine) {
    let board = engine.board();
    std::print!("   ");
    for x in 0..board.cols() {
        std::print!(" {:2}", x);
    }
    std::println!();
    for y in 0..board.rows() {
        std::print!("{:2} ", y);
        for x in 0..board.cols() {
            let ch = if x == 0 && y == 0 && board.get(0, 0) {
                'P'
            } else if board.get(x, y) {
                '#'
            } else {
                '.'
            };
            std::print!("  {}", ch);
        }
        std::println!();
    }
}

impl Player for CliPlayer {
    fn next_action(&mut self, _rng: &mut SmallRng, engine: &GameEngine) -> Action {
        print_board(engine);
        loop {
            std::print!("Chomp at `x y`, or undo/quit: ");
            io::stdout().flush().unwrap();
            let mut line = String::new();
            if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
                // stdin closed
                return Action::Quit;
            }
            let line = line.trim();
            match line {
                "" => continue,
                "undo" | "u" => return Action::Undo,
                "quit" | "q" => return Action::Quit,
                _ => match parse_coord(line) {
                    Some((x, y)) => return Action::Chomp(x, y),
                    None => std::println!("Invalid input"),
                },
            }
        }
    }

    fn notify_move(&mut self, _mover: PlayerId, coord: (usize, usize)) {
        std::println!("Opponent chomped ({}, {})", coord.0, coord.1);
    }
}
