//! Grid storage: cells, totem coordinates and the last-moved marker.

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Piece, Position, Symbol, Token};

/// Square grid of optional pieces.
///
/// Owns exactly one totem per symbol for its whole lifetime. The totems are
/// never created or destroyed, only relocated; their coordinates are cached
/// alongside the cells.
///
/// ## Invariants
///
/// - each totem occupies exactly one cell, and that cell holds the totem
/// - the two totems never share a cell
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    /// Row-major cells.
    cells: Vec<Option<Piece>>,
    /// Totem coordinates, indexed by `Symbol::index()`.
    totems: [Position; 2],
    /// Symbol of the most recently moved totem, restored on undo.
    last_moved: Option<Symbol>,
}

impl Board {
    /// Create an empty board with the two totems on the central diagonal.
    ///
    /// CIRCLE starts at `(size/2 - 1, size/2 - 1)`, CROSS at `(size/2, size/2)`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is odd or smaller than 4. Use
    /// [`GameConfig::validate`](crate::core::GameConfig::validate) to check
    /// user input first.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self::with_layout(size, false)
    }

    /// Create an empty board, optionally swapping the two starting totem cells.
    #[must_use]
    pub fn with_layout(size: usize, swapped: bool) -> Self {
        assert!(size >= 4, "Board size must be at least 4");
        assert!(size % 2 == 0, "Board size must be even");

        let upper = Position::new(size / 2 - 1, size / 2 - 1);
        let lower = Position::new(size / 2, size / 2);
        let (circle, cross) = if swapped { (lower, upper) } else { (upper, lower) };

        let mut board = Self {
            size,
            cells: vec![None; size * size],
            totems: [Position::new(0, 0); 2],
            last_moved: None,
        };
        board.totems[Symbol::Cross.index()] = cross;
        board.totems[Symbol::Circle.index()] = circle;
        let (cross_at, circle_at) = (board.index(cross), board.index(circle));
        board.cells[cross_at] = Some(Piece::Totem(Symbol::Cross));
        board.cells[circle_at] = Some(Piece::Totem(Symbol::Circle));
        board
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.size + pos.col
    }

    /// Piece at `pos`; `None` for empty and off-board cells.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Piece> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Piece at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is off the board.
    pub fn piece_at(&self, pos: Position) -> Result<Option<Piece>, GameError> {
        if !self.contains(pos) {
            return Err(GameError::OutOfBounds(pos));
        }
        Ok(self.cells[self.index(pos)])
    }

    /// Whether `pos` is on the board and holds nothing.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Current cell of a totem.
    #[must_use]
    pub fn totem_position(&self, symbol: Symbol) -> Position {
        self.totems[symbol.index()]
    }

    /// Symbol of the most recently moved totem.
    #[must_use]
    pub fn last_moved(&self) -> Option<Symbol> {
        self.last_moved
    }

    pub fn set_last_moved(&mut self, symbol: Option<Symbol>) {
        self.last_moved = symbol;
    }

    /// Number of empty cells.
    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// All cells in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Move a totem without checking the movement rules.
    ///
    /// Used to revert a validated move. The target must be on the board and
    /// either empty or the totem's own cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `to` is off the board.
    pub fn relocate_totem(&mut self, symbol: Symbol, to: Position) -> Result<(), GameError> {
        if !self.contains(to) {
            return Err(GameError::OutOfBounds(to));
        }
        debug_assert!(
            self.is_empty(to) || to == self.totem_position(symbol),
            "totem relocated onto an occupied cell"
        );

        let from = self.totem_position(symbol);
        let from_index = self.index(from);
        let to_index = self.index(to);
        self.cells[from_index] = None;
        self.cells[to_index] = Some(Piece::Totem(symbol));
        self.totems[symbol.index()] = to;
        Ok(())
    }

    /// Write a token into a cell the caller has already validated.
    pub(crate) fn place_token(&mut self, token: Token, pos: Position) {
        let index = self.index(pos);
        self.cells[index] = Some(Piece::Token(token));
    }

    /// Remove the token at `pos`.
    ///
    /// Returns the removed token, or `None` if the cell was empty. Totems are
    /// never removed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is off the board.
    pub fn remove_token(&mut self, pos: Position) -> Result<Option<Token>, GameError> {
        let Some(piece) = self.piece_at(pos)? else {
            return Ok(None);
        };
        let Some(token) = piece.as_token() else {
            return Ok(None);
        };
        let index = self.index(pos);
        self.cells[index] = None;
        Ok(Some(token))
    }
}

impl std::fmt::Display for Board {
    /// Three characters per cell: ` . ` empty, `[X]` totem, ` Xp` token
    /// (symbol, then colour initial).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                match self.cells[self.index(Position::new(row, col))] {
                    None => write!(f, " . ")?,
                    Some(Piece::Totem(symbol)) => write!(f, "[{}]", symbol.glyph())?,
                    Some(Piece::Token(token)) => {
                        let initial = match token.color {
                            crate::core::Color::Pink => 'p',
                            crate::core::Color::Black => 'b',
                        };
                        write!(f, " {}{}", token.symbol.glyph(), initial)?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
