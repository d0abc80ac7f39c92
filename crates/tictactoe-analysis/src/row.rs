//! Flattened game rows for the CSV record format.
//!
//! Each finished game becomes one row of exactly 19 integers:
//!
//! ```text
//! turn_1_player,turn_1_cell,...,turn_9_player,turn_9_cell,winner
//! ```
//!
//! Turns that were never played, because someone won early, are padded with
//! `0,0`. The last column is the outcome id (0 draw, 1 or 2 the winner).

use std::{fmt, num::ParseIntError, str::FromStr};

use tictactoe_engine::{Cell, FixedCells, Game, InvalidCellSequenceError, Outcome, Player, Record};

/// A game flattened into (player, cell) per turn plus its outcome.
///
/// # Example
///
/// ```
/// use tictactoe_analysis::row::GameRow;
/// use tictactoe_engine::{FixedCells, Game};
///
/// let mut game = Game::with_source(FixedCells::from_positions([1, 4, 2, 5, 3]).unwrap());
/// game.play();
///
/// let row = GameRow::from_game(&game).unwrap();
/// assert_eq!(row.to_string(), "1,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1");
/// assert_eq!(row.to_string().parse::<GameRow>().unwrap(), row);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRow {
    turns: [Option<(Player, Cell)>; Cell::COUNT],
    outcome: Outcome,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ParseGameRowError {
    #[display("expected {} columns, found {found}", GameRow::COLUMN_COUNT)]
    ColumnCount { found: usize },
    #[display("invalid integer in column {column}")]
    Integer { column: usize, source: ParseIntError },
    #[display("invalid player id {id} in column {column}")]
    Player { column: usize, id: u8 },
    #[display("invalid cell {position} in column {column}")]
    Cell { column: usize, position: u8 },
    #[display("invalid winner {id}")]
    Winner { id: u8 },
    #[display("turn {turn} has only one of player and cell set")]
    PartialTurn { turn: usize },
    #[display("turn {turn} is recorded after an unplayed turn")]
    Gap { turn: usize },
}

/// A row that does not describe a legal game.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ReplayError {
    #[display("row cells are not a valid sequence")]
    Sequence(InvalidCellSequenceError),
    #[display("turn {turn} was recorded for {recorded} but belongs to {expected}")]
    WrongPlayer {
        turn: usize,
        recorded: Player,
        expected: Player,
    },
    #[display("game ended on turn {turn} but the row records more turns")]
    EndedEarly { turn: u8 },
    #[display("row ends after turn {turn} before the game is decided")]
    Unfinished { turn: u8 },
    #[display("row records {recorded:?} but replay gives {replayed:?}")]
    OutcomeMismatch { recorded: Outcome, replayed: Outcome },
}

impl GameRow {
    /// Number of values in a row.
    pub const COLUMN_COUNT: usize = Cell::COUNT * 2 + 1;

    /// Builds the row of a finished game, or `None` if it is still in progress.
    #[must_use]
    pub fn from_game<S>(game: &Game<S>) -> Option<Self> {
        let outcome = game.outcome()?;
        Some(Self::from_records(game.history().records(), outcome))
    }

    /// Builds a row from records in turn order.
    ///
    /// # Panics
    ///
    /// Panics if there are more than 9 records.
    #[must_use]
    pub fn from_records(records: &[Record], outcome: Outcome) -> Self {
        assert!(records.len() <= Cell::COUNT, "a game has at most 9 turns");
        let mut turns = [None; Cell::COUNT];
        for (slot, record) in turns.iter_mut().zip(records) {
            *slot = Some((record.player(), record.cell()));
        }
        Self { turns, outcome }
    }

    /// The CSV header naming every column.
    #[must_use]
    pub fn header() -> String {
        let mut columns = (1..=Cell::COUNT)
            .flat_map(|n| [format!("turn_{n}_player"), format!("turn_{n}_cell")])
            .collect::<Vec<_>>();
        columns.push("winner".to_owned());
        columns.join(",")
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the number of turns played.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.iter().take_while(|t| t.is_some()).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns[0].is_none()
    }

    /// Returns the played turns as records.
    pub fn records(&self) -> impl Iterator<Item = Record> + '_ {
        (1..)
            .zip(&self.turns)
            .map_while(|(turn, t)| t.map(|(player, cell)| Record::new(player, turn, cell)))
    }

    /// Returns the 19 values of the row.
    #[must_use]
    pub fn values(&self) -> [u8; Self::COLUMN_COUNT] {
        let mut values = [0; Self::COLUMN_COUNT];
        for (pair, turn) in values.chunks_exact_mut(2).zip(&self.turns) {
            if let Some((player, cell)) = turn {
                pair[0] = player.id();
                pair[1] = cell.position();
            }
        }
        values[Self::COLUMN_COUNT - 1] = self.outcome.as_u8();
        values
    }

    /// Plays the recorded cells through a fresh [`Game`] and checks that the
    /// replay matches the row turn by turn.
    pub fn replay(&self) -> Result<Game<FixedCells>, ReplayError> {
        let cells =
            FixedCells::new(self.records().map(|r| r.cell())).map_err(ReplayError::Sequence)?;
        let mut game = Game::with_source(cells);

        for (i, record) in self.records().enumerate() {
            let expected = Player::for_turn(record.turn());
            if record.player() != expected {
                return Err(ReplayError::WrongPlayer {
                    turn: i + 1,
                    recorded: record.player(),
                    expected,
                });
            }
            if game.outcome().is_some() {
                return Err(ReplayError::EndedEarly { turn: game.turn() });
            }
            game.play_turn();
        }

        let Some(replayed) = game.outcome() else {
            return Err(ReplayError::Unfinished { turn: game.turn() });
        };
        if replayed != self.outcome {
            return Err(ReplayError::OutcomeMismatch {
                recorded: self.outcome,
                replayed,
            });
        }
        Ok(game)
    }
}

impl fmt::Display for GameRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl FromStr for GameRow {
    type Err = ParseGameRowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.trim_end().split(',').collect::<Vec<_>>();
        if fields.len() != Self::COLUMN_COUNT {
            return Err(ParseGameRowError::ColumnCount {
                found: fields.len(),
            });
        }

        let mut values = [0; Self::COLUMN_COUNT];
        for (column, (value, field)) in values.iter_mut().zip(&fields).enumerate() {
            *value = field
                .trim()
                .parse()
                .map_err(|source| ParseGameRowError::Integer { column, source })?;
        }

        let mut turns = [None; Cell::COUNT];
        let mut ended = false;
        for (i, pair) in values[..Self::COLUMN_COUNT - 1].chunks_exact(2).enumerate() {
            let turn = match (pair[0], pair[1]) {
                (0, 0) => None,
                (0, _) | (_, 0) => return Err(ParseGameRowError::PartialTurn { turn: i + 1 }),
                (id, position) => {
                    let player = Player::from_id(id)
                        .ok_or(ParseGameRowError::Player { column: i * 2, id })?;
                    let cell = Cell::new(position).ok_or(ParseGameRowError::Cell {
                        column: i * 2 + 1,
                        position,
                    })?;
                    Some((player, cell))
                }
            };
            match turn {
                None => ended = true,
                Some(_) if ended => return Err(ParseGameRowError::Gap { turn: i + 1 }),
                Some(_) => {}
            }
            turns[i] = turn;
        }

        let id = values[Self::COLUMN_COUNT - 1];
        let outcome = Outcome::from_u8(id).ok_or(ParseGameRowError::Winner { id })?;

        Ok(Self { turns, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(positions: &[u8]) -> Game<FixedCells> {
        let cells = FixedCells::from_positions(positions.iter().copied()).unwrap();
        let mut game = Game::with_source(cells);
        game.play();
        game
    }

    #[test]
    fn test_header() {
        let header = GameRow::header();
        let columns: Vec<&str> = header.split(',').collect();
        assert_eq!(columns.len(), GameRow::COLUMN_COUNT);
        assert_eq!(columns[0], "turn_1_player");
        assert_eq!(columns[1], "turn_1_cell");
        assert_eq!(columns[17], "turn_9_cell");
        assert_eq!(columns[18], "winner");
    }

    #[test]
    fn test_unfinished_game_has_no_row() {
        let game = Game::new();
        assert_eq!(GameRow::from_game(&game), None);
    }

    #[test]
    fn test_drawn_game_row() {
        let game = played(&[1, 2, 3, 5, 4, 6, 8, 7, 9]);
        let row = GameRow::from_game(&game).unwrap();
        assert_eq!(row.len(), 9);
        assert_eq!(
            row.to_string(),
            "1,1,2,2,1,3,2,5,1,4,2,6,1,8,2,7,1,9,0"
        );
    }

    #[test]
    fn test_early_win_is_padded() {
        let game = played(&[1, 2, 3, 4, 5, 6, 7]);
        let row = GameRow::from_game(&game).unwrap();
        let values = row.values();
        assert_eq!(row.len(), 7);
        assert_eq!(&values[14..], &[0, 0, 0, 0, 1]);
    }

    #[test]
    fn test_parsed_row_keeps_turns() {
        for _ in 0..200 {
            let mut game = Game::new();
            game.play();
            let row = GameRow::from_game(&game).unwrap();
            let parsed: GameRow = format!("{row}\n").parse().unwrap();

            let records: Vec<Record> = parsed.records().collect();
            assert_eq!(records.as_slice(), game.history().records());
            assert_eq!(parsed.outcome(), game.outcome().unwrap());

            let replayed = parsed.replay().unwrap();
            assert_eq!(replayed.board(), game.board());
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "1,2,3".parse::<GameRow>(),
            Err(ParseGameRowError::ColumnCount { found: 3 })
        ));
        assert!(matches!(
            "x,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse::<GameRow>(),
            Err(ParseGameRowError::Integer { column: 0, .. })
        ));
        assert!(matches!(
            "3,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse::<GameRow>(),
            Err(ParseGameRowError::Player { column: 0, id: 3 })
        ));
        assert!(matches!(
            "1,10,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse::<GameRow>(),
            Err(ParseGameRowError::Cell { column: 1, position: 10 })
        ));
        assert!(matches!(
            "1,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,7".parse::<GameRow>(),
            Err(ParseGameRowError::Winner { id: 7 })
        ));
        assert!(matches!(
            "1,1,2,0,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse::<GameRow>(),
            Err(ParseGameRowError::PartialTurn { turn: 2 })
        ));
        assert!(matches!(
            "1,1,0,0,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse::<GameRow>(),
            Err(ParseGameRowError::Gap { turn: 3 })
        ));
    }

    #[test]
    fn test_replay_rejects_inconsistent_rows() {
        // Wrong outcome.
        let row: GameRow = "1,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,2".parse().unwrap();
        assert!(matches!(
            row.replay(),
            Err(ReplayError::OutcomeMismatch { .. })
        ));

        // Players out of turn.
        let row: GameRow = "2,1,1,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse().unwrap();
        assert!(matches!(
            row.replay(),
            Err(ReplayError::WrongPlayer { turn: 1, .. })
        ));

        // Turns recorded after a win.
        let row: GameRow = "1,1,2,4,1,2,2,5,1,3,2,6,0,0,0,0,0,0,1".parse().unwrap();
        assert!(matches!(row.replay(), Err(ReplayError::EndedEarly { turn: 5 })));

        // Too few turns to decide the game.
        let row: GameRow = "1,1,2,4,1,2,0,0,0,0,0,0,0,0,0,0,0,0,0".parse().unwrap();
        assert!(matches!(row.replay(), Err(ReplayError::Unfinished { turn: 3 })));

        // Repeated cell.
        let row: GameRow = "1,1,2,1,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1".parse().unwrap();
        assert!(matches!(row.replay(), Err(ReplayError::Sequence(_))));
    }
}
