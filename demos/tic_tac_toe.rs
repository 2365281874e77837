//! Tic-Tac-Toe demo for the MCTS decision engine
//!
//! Play as X against a time-boxed engine. Run with
//! `RUST_LOG=info cargo run --example tic_tac_toe` to see the engine's
//! win-ratio report after each of its moves.

use std::fmt;
use std::io::{self, Write};

use transposition_mcts::{GameContext, MctsConfig, MctsPlayer, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Mark {
    X,
    O,
}

impl Player for Mark {}

impl Mark {
    fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Clone)]
struct TicTacToe {
    board: [Option<Mark>; 9],
    to_move: Mark,
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl TicTacToe {
    fn new() -> Self {
        TicTacToe {
            board: [None; 9],
            to_move: Mark::X,
        }
    }

    fn line_winner(&self) -> Option<Mark> {
        for line in &LINES {
            if let Some(mark) = self.board[line[0]] {
                if self.board[line[1]] == Some(mark) && self.board[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    fn full(&self) -> bool {
        self.board.iter().all(|cell| cell.is_some())
    }
}

impl GameContext for TicTacToe {
    type Action = usize;
    type Player = Mark;
    type Position = ([Option<Mark>; 9], Mark);

    fn valid_actions(&self) -> Vec<usize> {
        if !self.is_active() {
            return vec![];
        }
        (0..9).filter(|&cell| self.board[cell].is_none()).collect()
    }

    fn apply(&self, action: Option<&usize>) -> Self {
        let mut next = self.clone();
        if let Some(&cell) = action {
            next.board[cell] = Some(self.to_move);
        }
        next.to_move = self.to_move.other();
        next
    }

    fn position(&self) -> ([Option<Mark>; 9], Mark) {
        (self.board, self.to_move)
    }

    fn is_active(&self) -> bool {
        self.line_winner().is_none() && !self.full()
    }

    fn winner(&self) -> Option<Mark> {
        self.line_winner()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let glyph = match self.board[row * 3 + col] {
                    Some(Mark::X) => 'X',
                    Some(Mark::O) => 'O',
                    None => '.',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn main() {
    // Initialize logging so the engine's win-ratio report is visible
    env_logger::init();

    println!("MCTS Tic-Tac-Toe");
    println!("================");
    println!("You are X. Enter moves as `row col` (0-2).");
    println!();

    let mut game = TicTacToe::new();
    let mut engine = MctsPlayer::new(Mark::O, MctsConfig::from_seconds(0.5));

    while game.is_active() {
        println!("{}", game);

        if game.to_move == Mark::X {
            print!("Your move: ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            io::stdin().read_line(&mut input).unwrap();

            let coords: Vec<usize> = input
                .trim()
                .split_whitespace()
                .filter_map(|s| s.parse::<usize>().ok())
                .collect();

            if coords.len() != 2 || coords[0] > 2 || coords[1] > 2 {
                println!("Invalid move! Enter row and column (0-2).");
                continue;
            }

            let cell = coords[0] * 3 + coords[1];
            if game.board[cell].is_some() {
                println!("That cell is taken! Try again.");
                continue;
            }

            game = game.apply(Some(&cell));
        } else {
            println!("Engine is thinking...");

            match engine.decide(&game) {
                Ok(Some(cell)) => {
                    println!("Engine plays row {}, col {}", cell / 3, cell % 3);
                    game = game.apply(Some(&cell));
                }
                Ok(None) => {
                    println!("Engine has no move, passing.");
                    game = game.apply(None);
                }
                Err(e) => {
                    eprintln!("Search failed: {}", e);
                    return;
                }
            }
        }
    }

    println!("{}", game);
    match game.winner() {
        Some(Mark::X) => println!("You win!"),
        Some(Mark::O) => println!("The engine wins."),
        None => println!("Draw."),
    }
}
