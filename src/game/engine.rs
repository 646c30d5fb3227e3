//! The game aggregate: turn order, phases, history and notifications.
//!
//! [`Game`] is the only mutation entry point. A turn is a totem move
//! (MOVE phase) followed by the insertion of a token of the moved symbol
//! (INSERT phase). A winning insertion ends the game without passing the
//! turn.
//!
//! ## Silent no-ops
//!
//! Acting in the wrong phase, after the end, or with no token of the moved
//! symbol left changes nothing and returns `Ok(())`. These cases are logged
//! at `debug` level.
//!
//! ## Undo/redo granularity
//!
//! Against an automated opponent a single undo reverts the opponent's whole
//! turn plus the human's insertion (three commands), leaving the human in
//! INSERT with their totem move still applied. Redo mirrors it. Every other
//! undo/redo is a single command.

use tracing::{debug, instrument, trace};

use super::event::{GameEvent, ListenerId, Listeners};
use super::state::{GameResult, GameState};
use crate::board::Board;
use crate::core::{
    BotLevel, Color, ColorMap, GameConfig, GameError, GameRng, HistoryDirection, Piece, Player,
    Position, Symbol, Token,
};
use crate::history::{Command, History};
use crate::strategy::{RandomStrategy, Strategy, TotemMove};

/// Commands reverted or replayed by a compound undo/redo.
const COMPOUND_STEPS: usize = 3;

/// A single game of two players on one board.
///
/// ## Example
///
/// ```
/// use oxono::core::{BotLevel, GameConfig, Symbol};
/// use oxono::game::{Game, GameState};
///
/// let mut game = Game::new(GameConfig::default().with_bot(BotLevel::None)).unwrap();
/// game.move_totem(2, 0, Symbol::Circle).unwrap();
/// assert_eq!(game.game_state(), GameState::Insert);
/// game.insert(2, 1).unwrap();
/// assert_eq!(game.game_state(), GameState::Move);
/// assert_eq!(game.count_empty(), 33);
/// ```
#[derive(Debug)]
pub struct Game {
    board: Board,
    players: ColorMap<Player>,
    to_play: Color,
    state: GameState,
    /// Symbol that must be inserted next, set while in INSERT.
    to_insert: Option<Symbol>,
    winner: Option<Color>,
    history: History,
    listeners: Listeners,
}

impl Game {
    /// Create a game from a configuration.
    ///
    /// PINK starts in MOVE. BLACK gets a [`RandomStrategy`] when
    /// `config.bot` is [`BotLevel::Random`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidConfig`] if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;

        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let swapped = config.shuffle_totems && rng.for_context("layout").gen_bool(0.5);

        let mut players = ColorMap::new(|color| Player::new(color, config.tokens_per_symbol));
        if config.bot == BotLevel::Random {
            let bot = RandomStrategy::from_rng(rng.for_context("bot"));
            players[Color::Black].set_strategy(Some(Box::new(bot)));
        }

        debug!(size = config.board_size, bot = ?config.bot, seed = rng.seed(), swapped, "new game");

        Ok(Self {
            board: Board::with_layout(config.board_size, swapped),
            players,
            to_play: Color::Pink,
            state: GameState::Move,
            to_insert: None,
            winner: None,
            history: History::new(),
            listeners: Listeners::default(),
        })
    }

    // === Actions ===

    /// Move the totem of `symbol` to `(row, col)` for the current player.
    ///
    /// No-op if not in MOVE, if the game is over, or if the current player
    /// has no token of `symbol` left.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalMove`] if the move breaks the movement rules.
    #[instrument(skip(self), fields(color = %self.to_play))]
    pub fn move_totem(&mut self, row: usize, col: usize, symbol: Symbol) -> Result<(), GameError> {
        if self.is_end() || self.state != GameState::Move {
            debug!(state = %self.state, "move ignored");
            return Ok(());
        }
        if !self.players[self.to_play].has_tokens(symbol) {
            debug!("move ignored: no token of that symbol left");
            return Ok(());
        }

        let to = Position::new(row, col);
        let command = Command::move_totem(&self.board, self.to_play, symbol, to);
        self.history.do_it(command, &mut self.board, &mut self.players)?;
        self.replay(command);

        if let Command::MoveTotem { from, .. } = command {
            self.listeners.emit(&GameEvent::TotemMoved {
                color: self.to_play,
                symbol,
                from,
                to,
            });
        }
        Ok(())
    }

    /// Insert a token of the pending symbol at `(row, col)` for the current player.
    ///
    /// No-op if not in INSERT or if the game is over. A winning insertion
    /// ends the game; otherwise the turn passes.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IllegalInsert`] if the insertion breaks the rules.
    #[instrument(skip(self), fields(color = %self.to_play))]
    pub fn insert(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let pending = self.to_insert.filter(|_| !self.is_end() && self.state == GameState::Insert);
        let Some(symbol) = pending else {
            debug!(state = %self.state, "insert ignored");
            return Ok(());
        };

        let at = Position::new(row, col);
        let token = Token::new(symbol, self.to_play);
        let command = Command::insert_token(token, at);
        self.history.do_it(command, &mut self.board, &mut self.players)?;

        let won = self.replay(command);
        self.listeners.emit(&GameEvent::TokenInserted { token, at });
        if won {
            self.listeners.emit(&GameEvent::GameWon { winner: token.color });
        }
        Ok(())
    }

    /// Revert the last action.
    ///
    /// Reverts three commands when the last one is an automated opponent's
    /// insertion that followed a human's turn; otherwise one. This includes
    /// a winning bot turn: undoing it clears the winner and hands the human
    /// back their pending insertion.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to undo.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        if !self.history.can_undo() {
            return Err(GameError::EmptyHistory(HistoryDirection::Undo));
        }

        let steps = if self.is_compound_undo() { COMPOUND_STEPS } else { 1 };
        for _ in 0..steps {
            let command = self.history.undo(&mut self.board, &mut self.players)?;
            self.rewind(command);
            trace!(%command, "undone");
            self.listeners.emit(&GameEvent::Undone(command));
        }

        debug!(steps, state = %self.state, to_play = %self.to_play, "undo");
        Ok(())
    }

    /// Replay the last undone action, mirroring [`undo`](Self::undo).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to redo.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<(), GameError> {
        if !self.history.can_redo() {
            return Err(GameError::EmptyHistory(HistoryDirection::Redo));
        }

        let steps = if self.is_compound_redo() { COMPOUND_STEPS } else { 1 };
        for _ in 0..steps {
            let command = self.history.redo(&mut self.board, &mut self.players)?;
            let won = self.replay(command);
            trace!(%command, "redone");
            self.listeners.emit(&GameEvent::Redone(command));
            if won {
                self.listeners.emit(&GameEvent::GameWon { winner: command.actor() });
            }
        }

        debug!(steps, state = %self.state, to_play = %self.to_play, "redo");
        Ok(())
    }

    /// Let the current player's strategy play.
    ///
    /// In MOVE this plays a full move and insertion; in INSERT only the
    /// pending insertion. Returns `Ok(false)` without changing anything if
    /// the game is over, the current player has no strategy, or there is
    /// nothing legal to choose.
    ///
    /// # Errors
    ///
    /// Propagates the error if the strategy picks an illegal action.
    #[instrument(skip(self), fields(color = %self.to_play))]
    pub fn auto_play(&mut self) -> Result<bool, GameError> {
        if self.is_end() {
            debug!("auto play ignored: game over");
            return Ok(false);
        }

        let color = self.to_play;
        let Some(mut strategy) = self.players[color].take_strategy() else {
            debug!("auto play ignored: player is not automated");
            return Ok(false);
        };
        let outcome = self.play_with(strategy.as_mut());
        self.players[color].set_strategy(Some(strategy));
        outcome
    }

    fn play_with(&mut self, strategy: &mut dyn Strategy) -> Result<bool, GameError> {
        let mut played = false;

        if self.state == GameState::Move {
            let moves = self.legal_totem_moves();
            let Some(choice) = strategy.choose_move(&self.board, &moves) else {
                debug!(candidates = moves.len(), "no totem move chosen");
                return Ok(false);
            };
            trace!(%choice, "strategy move");
            self.move_totem(choice.to.row, choice.to.col, choice.symbol)?;
            played = self.state == GameState::Insert;
        }

        let Some(symbol) = self.to_insert.filter(|_| self.state == GameState::Insert) else {
            return Ok(played);
        };
        let cells = self.board.empty_positions(symbol, self.to_play);
        let Some(at) = strategy.choose_insert(&self.board, &cells) else {
            debug!(candidates = cells.len(), "no insertion chosen");
            return Ok(played);
        };
        trace!(%at, "strategy insert");
        self.insert(at.row, at.col)?;
        Ok(true)
    }

    /// Every legal move of the current player, over symbols with tokens left.
    #[must_use]
    pub fn legal_totem_moves(&self) -> Vec<TotemMove> {
        let player = &self.players[self.to_play];
        Symbol::ALL
            .into_iter()
            .filter(|&symbol| player.has_tokens(symbol))
            .flat_map(|symbol| {
                self.board
                    .possible_totem_moves(symbol)
                    .into_iter()
                    .map(move |to| TotemMove::new(symbol, to))
            })
            .collect()
    }

    // === State derivation ===

    /// Restore the turn state from before `command` ran.
    fn rewind(&mut self, command: Command) {
        match command {
            Command::MoveTotem { actor, .. } => {
                self.to_play = actor;
                self.state = GameState::Move;
                self.to_insert = None;
            }
            Command::InsertToken { token, .. } => {
                self.winner = None;
                self.to_play = token.color;
                self.state = GameState::Insert;
                self.to_insert = self.board.last_moved();
            }
        }
    }

    /// Advance the turn state past `command`. Returns whether it won the game.
    fn replay(&mut self, command: Command) -> bool {
        match command {
            Command::MoveTotem { actor, symbol, .. } => {
                self.to_play = actor;
                self.state = GameState::Insert;
                self.to_insert = Some(symbol);
                false
            }
            Command::InsertToken { token, at } => {
                self.to_play = token.color;
                if self.board.has_alignment_through(at) {
                    debug!(winner = %token.color, %at, "alignment");
                    self.winner = Some(token.color);
                    self.state = GameState::Insert;
                    true
                } else {
                    self.to_play = token.color.opponent();
                    self.state = GameState::Move;
                    self.to_insert = None;
                    false
                }
            }
        }
    }

    /// Whether `bot` is automated and faces a caller-driven opponent.
    fn is_bot_against_human(&self, bot: Color) -> bool {
        self.is_automated(bot) && !self.is_automated(bot.opponent())
    }

    /// Top of the undo stack reads bot insert, bot move, human insert.
    fn is_compound_undo(&self) -> bool {
        let peek = |depth| self.history.peek_undo(depth).copied();
        match (peek(0), peek(1), peek(2)) {
            (
                Some(Command::InsertToken { token: bot, .. }),
                Some(Command::MoveTotem { actor, .. }),
                Some(Command::InsertToken { token: human, .. }),
            ) => {
                actor == bot.color
                    && human.color == bot.color.opponent()
                    && self.is_bot_against_human(bot.color)
            }
            _ => false,
        }
    }

    /// Top of the redo stack reads human insert, bot move, bot insert.
    fn is_compound_redo(&self) -> bool {
        let peek = |depth| self.history.peek_redo(depth).copied();
        match (peek(0), peek(1), peek(2)) {
            (
                Some(Command::InsertToken { token: human, .. }),
                Some(Command::MoveTotem { actor, .. }),
                Some(Command::InsertToken { token: bot, .. }),
            ) => {
                actor == bot.color
                    && human.color == bot.color.opponent()
                    && self.is_bot_against_human(bot.color)
            }
            _ => false,
        }
    }

    // === Observers ===

    /// Register a listener called after every committed mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameEvent) + 'static) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    // === Players ===

    /// Replace a player's strategy. `None` makes the player caller-driven.
    pub fn set_strategy(&mut self, color: Color, strategy: Option<Box<dyn Strategy>>) {
        self.players[color].set_strategy(strategy);
    }

    #[must_use]
    pub fn is_automated(&self, color: Color) -> bool {
        self.players[color].is_automated()
    }

    #[must_use]
    pub fn player(&self, color: Color) -> &Player {
        &self.players[color]
    }

    // === Queries ===

    /// Whether someone has aligned four tokens.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.winner.is_some()
    }

    /// No winner, and either both inventories are empty or the board is full.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        if self.is_end() {
            return false;
        }
        let no_tokens = self.players.iter().all(|(_, player)| player.total_tokens() == 0);
        no_tokens || self.board.count_empty() == 0
    }

    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match self.winner {
            Some(color) => Some(GameResult::Winner(color)),
            None if self.is_draw() => Some(GameResult::Draw),
            None => None,
        }
    }

    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.state
    }

    /// Symbol the current player must insert, if in INSERT.
    #[must_use]
    pub fn to_insert(&self) -> Option<Symbol> {
        self.to_insert
    }

    #[must_use]
    pub fn current_color(&self) -> Color {
        self.to_play
    }

    #[must_use]
    pub fn nb_tokens(&self, color: Color, symbol: Symbol) -> u32 {
        self.players[color].tokens(symbol)
    }

    #[must_use]
    pub fn count_empty(&self) -> usize {
        self.board.count_empty()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn totem_position(&self, symbol: Symbol) -> Position {
        self.board.totem_position(symbol)
    }

    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `(row, col)` is off the board.
    pub fn piece_at(&self, row: usize, col: usize) -> Result<Option<Piece>, GameError> {
        self.board.piece_at(Position::new(row, col))
    }

    #[must_use]
    pub fn possible_totem_moves(&self, symbol: Symbol) -> Vec<Position> {
        self.board.possible_totem_moves(symbol)
    }

    #[must_use]
    pub fn empty_positions(&self, symbol: Symbol, color: Color) -> Vec<Position> {
        self.board.empty_positions(symbol, color)
    }

    #[must_use]
    pub fn is_valid_move(&self, symbol: Symbol, pos: Position) -> bool {
        self.board.is_valid_move(symbol, pos)
    }

    /// Whether the current player could insert a token of `symbol` at `pos`.
    #[must_use]
    pub fn is_valid_insert(&self, symbol: Symbol, pos: Position) -> bool {
        self.board.is_valid_insert(Token::new(symbol, self.to_play), pos)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }
}
