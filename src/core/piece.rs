//! Symbols, colours and the pieces that occupy board cells.
//!
//! A cell holds either a totem (one per symbol, colourless, relocated every
//! MOVE phase) or a token (symbol + colour, placed once and never moved).

use serde::{Deserialize, Serialize};

/// The two piece symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    /// X.
    Cross,
    /// O.
    Circle,
}

impl Symbol {
    /// Both symbols, in index order.
    pub const ALL: [Symbol; 2] = [Symbol::Cross, Symbol::Circle];

    /// Stable 0-based index, used for per-symbol arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Symbol::Cross => 0,
            Symbol::Circle => 1,
        }
    }

    /// Single-character label.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Symbol::Cross => 'X',
            Symbol::Circle => 'O',
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Cross => write!(f, "CROSS"),
            Symbol::Circle => write!(f, "CIRCLE"),
        }
    }
}

/// Player colours. PINK moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Pink,
    Black,
}

impl Color {
    /// Both colours, in index order.
    pub const ALL: [Color; 2] = [Color::Pink, Color::Black];

    /// Stable 0-based index, used by [`ColorMap`](super::ColorMap).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Pink => 0,
            Color::Black => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Pink => Color::Black,
            Color::Black => Color::Pink,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Pink => write!(f, "PINK"),
            Color::Black => write!(f, "BLACK"),
        }
    }
}

/// A placed token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub symbol: Symbol,
    pub color: Color,
}

impl Token {
    /// Create a new token.
    #[must_use]
    pub const fn new(symbol: Symbol, color: Color) -> Self {
        Self { symbol, color }
    }
}

/// Contents of an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Piece {
    /// One of the two totems.
    Totem(Symbol),
    /// A player's token.
    Token(Token),
}

impl Piece {
    /// Symbol carried by the piece, totem or token.
    #[must_use]
    pub const fn symbol(self) -> Symbol {
        match self {
            Piece::Totem(symbol) => symbol,
            Piece::Token(token) => token.symbol,
        }
    }

    /// Colour of the piece. Totems have none.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Totem(_) => None,
            Piece::Token(token) => Some(token.color),
        }
    }

    /// The token, if this piece is one.
    #[must_use]
    pub const fn as_token(self) -> Option<Token> {
        match self {
            Piece::Totem(_) => None,
            Piece::Token(token) => Some(token),
        }
    }

    #[must_use]
    pub const fn is_totem(self) -> bool {
        matches!(self, Piece::Totem(_))
    }
}

impl From<Token> for Piece {
    fn from(token: Token) -> Self {
        Piece::Token(token)
    }
}
