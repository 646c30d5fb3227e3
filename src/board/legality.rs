//! Movement and insertion rules.
//!
//! ## Totem movement
//!
//! A totem moves to an empty cell. The first rule that applies decides:
//!
//! 1. **Fully blocked**: every other cell of the totem's row and column is
//!    occupied. The totem may go to any empty cell.
//! 2. **Surrounded**: the four orthogonal neighbours are occupied or off the
//!    board. The totem jumps along its row or column and must land on the
//!    first empty cell of that line.
//! 3. **Otherwise**: the totem slides along its row or column; every cell in
//!    between must be empty.
//!
//! ## Token insertion
//!
//! A token goes on an empty cell next to the totem of its symbol, or on any
//! empty cell when that totem is surrounded.
//!
//! Enumeration walks every cell and filters through the validators. Boards
//! are at most a few dozen cells, so no shortcut is taken.

use smallvec::SmallVec;

use super::grid::Board;
use crate::core::{
    Color, Direction, GameError, InsertRejection, MoveRejection, Position, Symbol, Token,
};

impl Board {
    /// On-board orthogonal neighbours of `pos`.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .filter_map(|&direction| pos.step(direction))
            .filter(|&p| self.contains(p))
            .collect()
    }

    /// Whether every orthogonal neighbour of `pos` is occupied or off the board.
    #[must_use]
    pub fn is_surrounded(&self, pos: Position) -> bool {
        self.neighbors(pos).iter().all(|&p| !self.is_empty(p))
    }

    /// Whether every other cell of `pos`'s row and column is occupied.
    #[must_use]
    pub fn is_fully_blocked(&self, pos: Position) -> bool {
        let row_blocked = (0..self.size())
            .filter(|&col| col != pos.col)
            .all(|col| !self.is_empty(Position::new(pos.row, col)));
        let col_blocked = (0..self.size())
            .filter(|&row| row != pos.row)
            .all(|row| !self.is_empty(Position::new(row, pos.col)));

        row_blocked && col_blocked
    }

    /// First empty cell reached by walking from `from` along `direction`.
    fn jump_landing(&self, from: Position, direction: Direction) -> Option<Position> {
        let mut current = from.step(direction)?;
        while self.contains(current) {
            if self.is_empty(current) {
                return Some(current);
            }
            current = current.step(direction)?;
        }
        None
    }

    /// Whether every cell strictly between `from` and `target` is empty.
    fn is_path_clear(&self, from: Position, target: Position, direction: Direction) -> bool {
        let distance = from.row.abs_diff(target.row) + from.col.abs_diff(target.col);
        (1..distance).all(|k| from.offset(direction, k).is_some_and(|p| self.is_empty(p)))
    }

    /// Check whether the totem of `symbol` may move to `target`.
    ///
    /// # Errors
    ///
    /// Returns the first rule the move breaks.
    pub fn validate_move(&self, symbol: Symbol, target: Position) -> Result<(), MoveRejection> {
        if !self.contains(target) {
            return Err(MoveRejection::OffBoard);
        }
        if !self.is_empty(target) {
            return Err(MoveRejection::Occupied);
        }

        let current = self.totem_position(symbol);
        if self.is_fully_blocked(current) {
            return Ok(());
        }

        let direction = current.direction_to(target).ok_or(MoveRejection::NotInLine)?;

        if self.is_surrounded(current) {
            match self.jump_landing(current, direction) {
                Some(landing) if landing == target => Ok(()),
                _ => Err(MoveRejection::NotFirstEmptyCell),
            }
        } else if self.is_path_clear(current, target, direction) {
            Ok(())
        } else {
            Err(MoveRejection::PathBlocked)
        }
    }

    /// Whether the totem of `symbol` may move to `target`.
    #[must_use]
    pub fn is_valid_move(&self, symbol: Symbol, target: Position) -> bool {
        self.validate_move(symbol, target).is_ok()
    }

    /// Every cell the totem of `symbol` may move to, in row-major order.
    #[must_use]
    pub fn possible_totem_moves(&self, symbol: Symbol) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.is_valid_move(symbol, pos))
            .collect()
    }

    /// Check whether `token` may be inserted at `target`.
    ///
    /// # Errors
    ///
    /// Returns the first rule the insertion breaks.
    pub fn validate_insert(&self, token: Token, target: Position) -> Result<(), InsertRejection> {
        if !self.contains(target) {
            return Err(InsertRejection::OffBoard);
        }
        if !self.is_empty(target) {
            return Err(InsertRejection::Occupied);
        }

        let reference = self.totem_position(token.symbol);
        if self.is_surrounded(reference) || target.is_adjacent_to(reference) {
            Ok(())
        } else {
            Err(InsertRejection::NotAdjacent)
        }
    }

    /// Whether `token` may be inserted at `target`.
    #[must_use]
    pub fn is_valid_insert(&self, token: Token, target: Position) -> bool {
        self.validate_insert(token, target).is_ok()
    }

    /// Every cell a token of `symbol` and `color` may be inserted at, in row-major order.
    #[must_use]
    pub fn empty_positions(&self, symbol: Symbol, color: Color) -> Vec<Position> {
        let token = Token::new(symbol, color);
        self.positions()
            .filter(|&pos| self.is_valid_insert(token, pos))
            .collect()
    }

    /// Move a totem after checking the movement rules.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move breaks a rule.
    pub fn move_totem(&mut self, symbol: Symbol, target: Position) -> Result<(), GameError> {
        self.validate_move(symbol, target)
            .map_err(|reason| GameError::IllegalMove { symbol, target, reason })?;
        self.relocate_totem(symbol, target)
    }

    /// Place a token after checking the insertion rules.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalInsert`] if the insertion breaks a rule.
    pub fn insert_token(&mut self, token: Token, target: Position) -> Result<(), GameError> {
        self.validate_insert(token, target)
            .map_err(|reason| GameError::IllegalInsert { target, reason })?;
        self.place_token(token, target);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Piece;

    const PINK_O: Token = Token::new(Symbol::Circle, Color::Pink);

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    /// 6x6 board with CIRCLE at (2,2) boxed in by four tokens.
    fn surrounded_circle() -> Board {
        let mut board = Board::new(6);
        for p in [pos(1, 2), pos(3, 2), pos(2, 1), pos(2, 3)] {
            board.place_token(PINK_O, p);
        }
        board
    }

    #[test]
    fn test_slide_along_line() {
        let board = Board::new(6);

        assert!(board.is_valid_move(Symbol::Circle, pos(0, 2)));
        assert!(board.is_valid_move(Symbol::Circle, pos(2, 0)));
        assert!(board.is_valid_move(Symbol::Circle, pos(2, 5)));
        assert!(board.is_valid_move(Symbol::Circle, pos(5, 2)));
        assert!(board.is_valid_move(Symbol::Cross, pos(3, 5)));
    }

    #[test]
    fn test_diagonal_and_arbitrary_moves_rejected() {
        let board = Board::new(6);

        assert_eq!(board.validate_move(Symbol::Circle, pos(0, 0)), Err(MoveRejection::NotInLine));
        assert_eq!(board.validate_move(Symbol::Cross, pos(1, 2)), Err(MoveRejection::NotInLine));
        assert_eq!(board.validate_move(Symbol::Circle, pos(5, 5)), Err(MoveRejection::NotInLine));
    }

    #[test]
    fn test_occupied_and_off_board_targets() {
        let board = Board::new(6);

        assert_eq!(board.validate_move(Symbol::Circle, pos(3, 3)), Err(MoveRejection::Occupied));
        assert_eq!(board.validate_move(Symbol::Circle, pos(2, 2)), Err(MoveRejection::Occupied));
        assert_eq!(board.validate_move(Symbol::Circle, pos(2, 10)), Err(MoveRejection::OffBoard));
    }

    #[test]
    fn test_slide_cannot_pass_pieces() {
        let mut board = Board::new(6);
        board.place_token(PINK_O, pos(2, 1));
        board.place_token(PINK_O, pos(3, 2));

        assert!(board.is_valid_move(Symbol::Circle, pos(0, 2)));
        assert_eq!(board.validate_move(Symbol::Circle, pos(2, 0)), Err(MoveRejection::PathBlocked));
        assert_eq!(board.validate_move(Symbol::Circle, pos(5, 2)), Err(MoveRejection::PathBlocked));
    }

    #[test]
    fn test_surrounded_totem_jumps_to_first_empty_cell() {
        let board = surrounded_circle();
        assert!(board.is_surrounded(pos(2, 2)));

        assert!(board.is_valid_move(Symbol::Circle, pos(2, 0)));
        assert!(board.is_valid_move(Symbol::Circle, pos(0, 2)));
        assert!(board.is_valid_move(Symbol::Circle, pos(4, 2)));
        // (2,3) is occupied, then (2,4) is the first empty cell
        assert!(board.is_valid_move(Symbol::Circle, pos(2, 4)));
        assert_eq!(
            board.validate_move(Symbol::Circle, pos(2, 5)),
            Err(MoveRejection::NotFirstEmptyCell)
        );
        assert_eq!(board.validate_move(Symbol::Circle, pos(5, 5)), Err(MoveRejection::NotInLine));
    }

    #[test]
    fn test_jump_over_several_pieces() {
        let mut board = surrounded_circle();
        board.place_token(PINK_O, pos(2, 4));

        // (2,3) and (2,4) are skipped
        assert!(board.is_valid_move(Symbol::Circle, pos(2, 5)));
    }

    #[test]
    fn test_jump_off_the_edge_is_illegal() {
        let mut board = surrounded_circle();
        board.place_token(PINK_O, pos(2, 4));
        board.place_token(PINK_O, pos(2, 5));

        let moves = board.possible_totem_moves(Symbol::Circle);
        assert!(!moves.iter().any(|p| p.row == 2 && p.col > 2));
        assert!(moves.contains(&pos(2, 0)));
    }

    #[test]
    fn test_corner_totem_is_surrounded_by_two() {
        let mut board = Board::new(6);
        board.relocate_totem(Symbol::Circle, pos(0, 0)).unwrap();
        board.place_token(PINK_O, pos(0, 1));
        board.place_token(PINK_O, pos(1, 0));

        assert!(board.is_surrounded(pos(0, 0)));
        assert!(board.is_valid_move(Symbol::Circle, pos(0, 2)));
        assert!(board.is_valid_move(Symbol::Circle, pos(2, 0)));
        assert!(!board.is_valid_move(Symbol::Circle, pos(0, 3)));
    }

    #[test]
    fn test_fully_blocked_totem_moves_anywhere() {
        let mut board = Board::new(6);
        // fill row 2 and column 2 around the CIRCLE totem at (2,2)
        for i in 0..6 {
            if i != 2 {
                board.place_token(PINK_O, pos(2, i));
                board.place_token(PINK_O, pos(i, 2));
            }
        }
        assert!(board.is_fully_blocked(pos(2, 2)));

        for target in board.positions().collect::<Vec<_>>() {
            assert_eq!(
                board.is_valid_move(Symbol::Circle, target),
                board.is_empty(target),
                "{target}"
            );
        }
        assert!(board.is_valid_move(Symbol::Circle, pos(0, 0)));
        assert!(board.is_valid_move(Symbol::Circle, pos(5, 5)));
    }

    #[test]
    fn test_possible_totem_moves_initial() {
        let board = Board::new(6);
        let moves = board.possible_totem_moves(Symbol::Circle);

        // row 2 except (2,2), column 2 except (2,2)
        assert_eq!(moves.len(), 10);
        for p in &moves {
            assert!(board.is_valid_move(Symbol::Circle, *p));
            assert!(p.row == 2 || p.col == 2);
        }
    }

    #[test]
    fn test_insert_next_to_totem() {
        let board = Board::new(6);

        assert!(board.is_valid_insert(PINK_O, pos(1, 2)));
        assert!(board.is_valid_insert(PINK_O, pos(2, 1)));
        assert_eq!(board.validate_insert(PINK_O, pos(0, 0)), Err(InsertRejection::NotAdjacent));
        // next to the CROSS totem, not the CIRCLE one
        assert_eq!(board.validate_insert(PINK_O, pos(3, 4)), Err(InsertRejection::NotAdjacent));
        assert_eq!(board.validate_insert(PINK_O, pos(2, 2)), Err(InsertRejection::Occupied));
        assert_eq!(board.validate_insert(PINK_O, pos(2, 10)), Err(InsertRejection::OffBoard));
    }

    #[test]
    fn test_insert_anywhere_when_surrounded() {
        let board = surrounded_circle();

        assert!(board.is_valid_insert(PINK_O, pos(5, 5)));
        assert!(board.is_valid_insert(PINK_O, pos(0, 0)));
        assert_eq!(board.empty_positions(Symbol::Circle, Color::Pink).len(), board.count_empty());
    }

    #[test]
    fn test_empty_positions_initial() {
        let board = Board::new(6);
        let positions = board.empty_positions(Symbol::Circle, Color::Black);
        assert_eq!(positions, vec![pos(1, 2), pos(2, 1), pos(2, 3), pos(3, 2)]);

        // CROSS at (3,3): (2,3), (3,2), (3,4), (4,3)
        let positions = board.empty_positions(Symbol::Cross, Color::Pink);
        assert_eq!(positions, vec![pos(2, 3), pos(3, 2), pos(3, 4), pos(4, 3)]);
    }

    #[test]
    fn test_move_totem_validates() {
        let mut board = Board::new(6);

        board.move_totem(Symbol::Circle, pos(1, 2)).unwrap();
        assert!(board.is_empty(pos(2, 2)));
        assert_eq!(board.get(pos(1, 2)), Some(Piece::Totem(Symbol::Circle)));

        let err = board.move_totem(Symbol::Circle, pos(5, 5)).unwrap_err();
        assert_eq!(
            err,
            GameError::IllegalMove {
                symbol: Symbol::Circle,
                target: pos(5, 5),
                reason: MoveRejection::NotInLine,
            }
        );
        assert_eq!(board.totem_position(Symbol::Circle), pos(1, 2));
    }

    #[test]
    fn test_insert_token_validates() {
        let mut board = Board::new(6);

        board.insert_token(PINK_O, pos(2, 1)).unwrap();
        assert_eq!(board.get(pos(2, 1)), Some(Piece::Token(PINK_O)));

        let err = board.insert_token(PINK_O, pos(5, 0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::IllegalInsert { reason: InsertRejection::NotAdjacent, .. }
        ));
        assert!(board.is_empty(pos(5, 0)));
    }

    #[test]
    fn test_neighbors_clipped_at_edges() {
        let board = Board::new(6);
        assert_eq!(board.neighbors(pos(0, 0)).len(), 2);
        assert_eq!(board.neighbors(pos(0, 3)).len(), 3);
        assert_eq!(board.neighbors(pos(3, 3)).len(), 4);
        assert_eq!(board.neighbors(pos(5, 5)).len(), 2);
    }
}
