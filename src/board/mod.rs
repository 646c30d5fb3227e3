//! The board: grid storage, legality rules and alignment detection.
//!
//! [`Board`] is a plain value. Its methods are split by concern:
//! - `grid`: cells, totem coordinates, raw mutation
//! - `legality`: movement/insertion validation and enumeration
//! - `alignment`: four-in-a-row detection
//!
//! ## Example
//!
//! ```
//! use oxono::board::Board;
//! use oxono::core::{Color, Position, Symbol, Token};
//!
//! let mut board = Board::new(6);
//! board.move_totem(Symbol::Circle, Position::new(2, 0)).unwrap();
//! board
//!     .insert_token(Token::new(Symbol::Circle, Color::Pink), Position::new(2, 1))
//!     .unwrap();
//! assert_eq!(board.count_empty(), 33);
//! ```

mod grid;
mod legality;
mod alignment;

pub use alignment::ALIGNMENT_LENGTH;
pub use grid::Board;
