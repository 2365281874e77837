use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use transposition_mcts::{GameContext, MctsConfig, MctsPlayer, Player};

// Tic-tac-toe implementation for end-to-end testing.
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

// X O X
// - X -
// O - O
// X to move can win immediately at cell 7.
fn board_with_a_winning_move() -> TicTacToe {
    let mut game = TicTacToe::new();
    game.board[0] = Some(Mark::X);
    game.board[1] = Some(Mark::O);
    game.board[2] = Some(Mark::X);
    game.board[4] = Some(Mark::X);
    game.board[6] = Some(Mark::O);
    game.board[8] = Some(Mark::O);
    game.to_move = Mark::X;
    game
}

#[test]
fn test_mcts_finds_the_winning_move() {
    let game = board_with_a_winning_move();

    let mut player = MctsPlayer::new(Mark::X, MctsConfig::from_seconds(0.1))
        .with_rng(StdRng::seed_from_u64(42));

    let action = player.decide(&game).unwrap();
    assert_eq!(action, Some(7), "cell 7 completes the middle column");
}

#[test]
fn test_decide_on_a_finished_game_returns_none() {
    let mut game = TicTacToe::new();
    for cell in 0..9 {
        game.board[cell] = Some(if cell % 2 == 0 { Mark::X } else { Mark::O });
    }

    let mut player = MctsPlayer::new(Mark::O, MctsConfig::from_seconds(0.01));
    let action = player.decide(&game).unwrap();

    assert_eq!(action, None);
}

#[test]
fn test_two_engines_play_a_full_game() {
    let mut game = TicTacToe::new();
    let mut x = MctsPlayer::new(Mark::X, MctsConfig::from_seconds(0.02))
        .with_rng(StdRng::seed_from_u64(1));
    let mut o = MctsPlayer::new(Mark::O, MctsConfig::from_seconds(0.02))
        .with_rng(StdRng::seed_from_u64(2));

    let mut moves = 0;
    while game.is_active() {
        let action = if game.to_move == Mark::X {
            x.decide(&game).unwrap()
        } else {
            o.decide(&game).unwrap()
        };

        let cell = action.expect("an active board always has a move");
        assert!(game.board[cell].is_none(), "engine must pick an empty cell");

        game = game.apply(Some(&cell));
        moves += 1;
        assert!(moves <= 9);
    }

    // Both sides searched; perfect play from both ends in a draw, but any
    // terminal state proves the loop drove the game to completion.
    assert!(game.line_winner().is_some() || game.full());
}

#[test]
fn test_time_budget_is_roughly_respected() {
    let game = TicTacToe::new();
    let budget = Duration::from_millis(50);

    let mut player =
        MctsPlayer::new(Mark::X, MctsConfig::default().with_max_time(budget));

    let start = Instant::now();
    let action = player.decide(&game).unwrap();
    let elapsed = start.elapsed();

    assert!(action.is_some());
    // Playouts on an empty board are cheap; the loop should stop shortly
    // after the budget elapses.
    assert!(
        elapsed < budget * 10,
        "elapsed {:?} exceeds any reasonable overrun of {:?}",
        elapsed,
        budget
    );
}

#[test]
fn test_transposed_move_orders_share_statistics() {
    // Two different openings that reach the same position must hash to the
    // same key, which is what the statistics table keys records by.
    let a = TicTacToe::new().apply(Some(&0)).apply(Some(&4)).apply(Some(&8));
    let b = TicTacToe::new().apply(Some(&8)).apply(Some(&4)).apply(Some(&0));

    assert_eq!(a.position(), b.position());
}
