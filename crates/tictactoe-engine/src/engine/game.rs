use crate::core::{Board, Cell, Line, Outcome, Player};

use super::{
    cell_source::{CellSeed, CellSource, ShuffledCells},
    history::{History, Record},
};

/// The earliest turn on which a line can be complete.
pub const FIRST_DECISIVE_TURN: u8 = 5;

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum GameState {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameState {
    /// Returns the outcome of a finished game, or `None` while in progress.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::InProgress => None,
            Self::Won(player) => Some(Outcome::Win(player)),
            Self::Drawn => Some(Outcome::Draw),
        }
    }
}

/// A single random-play match.
///
/// Each turn the mover (player 1 on odd turns, player 2 on even turns)
/// marks the next cell drawn from the game's [`CellSource`]. From turn
/// [`FIRST_DECISIVE_TURN`] on, both players are checked against every line,
/// player 1 first, and the first complete line ends the game. A game still
/// undecided after turn 9 is a draw.
///
/// A game is played once. Calling [`play`](Self::play) on a finished game
/// returns its outcome without drawing any more cells.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{FixedCells, Game, Line, Outcome, Player};
///
/// let cells = FixedCells::from_positions(1..=9).unwrap();
/// let mut game = Game::with_source(cells);
///
/// assert_eq!(game.play(), Outcome::Win(Player::One));
/// assert_eq!(game.turn(), 7);
/// assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
/// ```
#[derive(Debug, Clone)]
pub struct Game<S = ShuffledCells> {
    board: Board,
    history: History,
    state: GameState,
    turn: u8,
    winning_line: Option<Line>,
    source: S,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game whose cells are shuffled with a random seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(ShuffledCells::new())
    }

    /// Like [`Self::new`], but with a specific seed for a reproducible game.
    #[must_use]
    pub fn with_seed(seed: CellSeed) -> Self {
        Self::with_source(ShuffledCells::with_seed(seed))
    }
}

impl<S> Game<S>
where
    S: CellSource,
{
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::EMPTY,
            history: History::new(),
            state: GameState::InProgress,
            turn: 0,
            winning_line: None,
            source,
        }
    }

    /// Plays the game to the end and returns its outcome.
    pub fn play(&mut self) -> Outcome {
        loop {
            if let Some(outcome) = self.play_turn().outcome() {
                return outcome;
            }
        }
    }

    /// Plays a single turn and returns the resulting state.
    ///
    /// Does nothing on a finished game.
    ///
    /// # Panics
    ///
    /// Panics if the source yields a cell that is already marked, or runs
    /// out of cells before the game ends.
    pub fn play_turn(&mut self) -> GameState {
        if !self.state.is_in_progress() {
            return self.state;
        }

        let turn = self.turn + 1;
        let cell = self.source.next_cell();
        let player = Player::for_turn(turn);
        self.board.mark(cell, player);
        self.history.append(Record::new(player, turn, cell));
        self.turn = turn;

        if turn >= FIRST_DECISIVE_TURN {
            for player in Player::ALL {
                if let Some(line) = self.board.winning_line(player) {
                    self.winning_line = Some(line);
                    self.state = GameState::Won(player);
                    return self.state;
                }
            }
        }

        if usize::from(turn) == Cell::COUNT {
            self.state = GameState::Drawn;
        }
        self.state
    }
}

impl<S> Game<S> {
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of turns played so far.
    #[must_use]
    pub fn turn(&self) -> u8 {
        self.turn
    }

    /// Returns the outcome once the game has finished.
    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the line that decided the game, if it was won.
    ///
    /// When the winning mark completes more than one line, this is the first
    /// of them in [`Line::ALL`] order.
    #[must_use]
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}
