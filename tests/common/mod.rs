//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use oxono::{Board, BotLevel, Game, GameConfig, Position, Strategy, Symbol, TotemMove};
use tracing_subscriber::EnvFilter;

/// A `(row, col, symbol)` totem move followed by its `(row, col)` insertion.
pub type Turn = ((usize, usize, Symbol), (usize, usize));

/// Install a test subscriber once per binary. Set `RUST_LOG=oxono=debug` to see engine logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// 6x6 game with both sides driven by the test.
pub fn two_player_game() -> Game {
    init_tracing();
    Game::new(GameConfig::default().with_bot(BotLevel::None)).unwrap()
}

/// 6x6 game with a seeded random BLACK.
pub fn game_against_bot(seed: u64) -> Game {
    init_tracing();
    Game::new(GameConfig::default().with_seed(seed)).unwrap()
}

/// 4x4 game with both sides driven by the test.
pub fn small_two_player_game(tokens_per_symbol: u32) -> Game {
    init_tracing();
    let config = GameConfig::default()
        .with_bot(BotLevel::None)
        .with_board_size(4)
        .with_tokens_per_symbol(tokens_per_symbol);
    Game::new(config).unwrap()
}

/// Play each turn through the public move/insert calls.
pub fn play(game: &mut Game, turns: &[Turn]) {
    for &((row, col, symbol), (ins_row, ins_col)) in turns {
        game.move_totem(row, col, symbol).unwrap();
        game.insert(ins_row, ins_col).unwrap();
    }
}

/// Plays a fixed list of turns, then declines.
#[derive(Debug)]
pub struct Scripted {
    turns: VecDeque<(TotemMove, Position)>,
}

impl Scripted {
    pub fn new(turns: &[Turn]) -> Self {
        let turns = turns
            .iter()
            .map(|&((row, col, symbol), (ins_row, ins_col))| {
                (TotemMove::new(symbol, Position::new(row, col)), Position::new(ins_row, ins_col))
            })
            .collect();
        Self { turns }
    }
}

impl Strategy for Scripted {
    fn choose_move(&mut self, _board: &Board, moves: &[TotemMove]) -> Option<TotemMove> {
        let (choice, _) = self.turns.front()?;
        moves.contains(choice).then_some(*choice)
    }

    fn choose_insert(&mut self, _board: &Board, positions: &[Position]) -> Option<Position> {
        let (_, at) = self.turns.pop_front()?;
        positions.contains(&at).then_some(at)
    }
}
