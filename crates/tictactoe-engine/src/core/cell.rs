use crate::{InvalidCellError, InvalidPlayerError};

/// A board position numbered 1 to 9 in row-major order.
///
/// ```text
/// 1 | 2 | 3
/// ---------
/// 4 | 5 | 6
/// ---------
/// 7 | 8 | 9
/// ```
///
/// The board index of a cell is its position minus one.
///
/// # Example
///
/// ```
/// use tictactoe_engine::Cell;
///
/// let center = Cell::try_from(5).unwrap();
/// assert_eq!(center.index(), 4);
/// assert!(Cell::try_from(10).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct Cell(u8);

impl Cell {
    /// Number of cells on the board.
    pub const COUNT: usize = 9;

    /// All cells in position order.
    pub const ALL: [Self; Self::COUNT] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
        Self(9),
    ];

    /// Returns the cell at `position`, or `None` if it is outside 1..=9.
    #[must_use]
    pub const fn new(position: u8) -> Option<Self> {
        if position >= 1 && position as usize <= Self::COUNT {
            Some(Self(position))
        } else {
            None
        }
    }

    /// Returns the cell stored at board `index` (0..=8).
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn position(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for Cell {
    type Error = InvalidCellError;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        Self::new(position).ok_or(InvalidCellError { position })
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.0
    }
}

/// One of the two players.
///
/// Player 1 moves on odd turns and player 2 on even turns. Their numeric ids
/// are 1 and 2; 0 is reserved for an empty cell or a drawn game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    #[display("player 1")]
    One,
    #[display("player 2")]
    Two,
}

impl Player {
    /// Both players in win-check order.
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    /// Returns the player who moves on `turn` (1-based).
    #[must_use]
    pub const fn for_turn(turn: u8) -> Self {
        if turn % 2 == 1 { Self::One } else { Self::Two }
    }

    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = InvalidPlayerError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::from_id(id).ok_or(InvalidPlayerError { id })
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> Self {
        player.id()
    }
}
