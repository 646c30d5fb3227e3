use super::{Strategy, TotemMove};
use crate::board::Board;
use crate::core::{GameRng, Position, Symbol};

/// Uniform random policy.
///
/// Picks a symbol uniformly among those with at least one legal move, then a
/// target uniformly among that totem's moves. Insertion cells are uniform.
#[derive(Clone, Debug)]
pub struct RandomStrategy {
    rng: GameRng,
}

impl RandomStrategy {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, _board: &Board, moves: &[TotemMove]) -> Option<TotemMove> {
        let symbols: Vec<Symbol> = Symbol::ALL
            .into_iter()
            .filter(|&symbol| moves.iter().any(|m| m.symbol == symbol))
            .collect();
        let symbol = *self.rng.choose(&symbols)?;

        let targets: Vec<TotemMove> =
            moves.iter().copied().filter(|m| m.symbol == symbol).collect();
        self.rng.choose(&targets).copied()
    }

    fn choose_insert(&mut self, _board: &Board, positions: &[Position]) -> Option<Position> {
        self.rng.choose(positions).copied()
    }
}
