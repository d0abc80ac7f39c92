use std::{fmt, str::FromStr};

use arrayvec::ArrayVec;
use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
    seq::SliceRandom,
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{Cell, InvalidCellSequenceError, ParseCellSeedError};

/// Supplies the cells a game marks, one per turn.
///
/// A well-formed source yields distinct cells and never runs dry before the
/// game ends, which in the worst case is after all 9 cells. Sources are free
/// to panic when drawn past their end.
pub trait CellSource {
    /// Draws the next cell.
    fn next_cell(&mut self) -> Cell;

    /// Returns how many cells can still be drawn.
    fn remaining(&self) -> usize;
}

impl<S> CellSource for &mut S
where
    S: CellSource + ?Sized,
{
    fn next_cell(&mut self) -> Cell {
        (**self).next_cell()
    }

    fn remaining(&self) -> usize {
        (**self).remaining()
    }
}

/// Seed for deterministic cell shuffling.
///
/// A 128-bit seed for the PCG32 generator behind [`ShuffledCells`]. The same
/// seed always shuffles the board into the same order, so a game can be
/// reproduced from its seed alone.
///
/// Seeds serialize as a 32-character hex string, and parse from the same form.
///
/// # Example
///
/// ```
/// use rand::Rng as _;
/// use tictactoe_engine::{CellSeed, Game};
///
/// let seed: CellSeed = rand::rng().random();
///
/// let mut game1 = Game::with_seed(seed);
/// let mut game2 = Game::with_seed(seed);
/// assert_eq!(game1.play(), game2.play());
/// assert_eq!(game1.history(), game2.history());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellSeed([u8; 16]);

impl CellSeed {
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }
}

impl fmt::Display for CellSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for CellSeed {
    type Err = ParseCellSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 32 {
            return Err(ParseCellSeedError::Length { len: s.len() });
        }
        let num = u128::from_str_radix(s, 16).map_err(ParseCellSeedError::Digits)?;
        Ok(Self(num.to_be_bytes()))
    }
}

impl Serialize for CellSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CellSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        hex_str.parse().map_err(serde::de::Error::custom)
    }
}

/// Allows generating random `CellSeed` values with `rng.random()`.
impl Distribution<CellSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CellSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        CellSeed(seed)
    }
}

/// An endless, reproducible stream of per-game seeds derived from one master seed.
///
/// Bulk generation draws one seed per game from the stream up front, so the
/// games themselves can be played in any order or on any thread.
#[derive(Debug, Clone)]
pub struct SeedStream {
    rng: Pcg32,
}

impl SeedStream {
    #[must_use]
    pub fn new(master: CellSeed) -> Self {
        Self {
            rng: Pcg32::from_seed(master.0),
        }
    }
}

impl Iterator for SeedStream {
    type Item = CellSeed;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.rng.random())
    }
}

/// A uniformly random permutation of the 9 cells.
///
/// The permutation is fixed when the source is created; each draw takes the
/// next cell of it, so no cell is ever drawn twice.
#[derive(Debug, Clone)]
pub struct ShuffledCells {
    cells: [Cell; Cell::COUNT],
    next: usize,
}

impl Default for ShuffledCells {
    fn default() -> Self {
        Self::new()
    }
}

impl ShuffledCells {
    /// Creates a shuffled source with a random seed.
    ///
    /// For a reproducible order, use [`Self::with_seed`] instead.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(rand::rng().random())
    }

    #[must_use]
    pub fn with_seed(seed: CellSeed) -> Self {
        let mut rng = Pcg32::from_seed(seed.0);
        Self::from_rng(&mut rng)
    }

    pub fn from_rng<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let mut cells = Cell::ALL;
        cells.shuffle(rng);
        Self { cells, next: 0 }
    }

    /// Returns the cells not drawn yet, in draw order.
    #[must_use]
    pub fn upcoming(&self) -> &[Cell] {
        &self.cells[self.next..]
    }
}

impl CellSource for ShuffledCells {
    /// # Panics
    ///
    /// Panics once all 9 cells have been drawn.
    fn next_cell(&mut self) -> Cell {
        assert!(self.next < Cell::COUNT, "all 9 cells have already been drawn");
        let cell = self.cells[self.next];
        self.next += 1;
        cell
    }

    fn remaining(&self) -> usize {
        Cell::COUNT - self.next
    }
}

/// A caller-supplied cell order.
///
/// Used to force a specific game, either in tests or to replay a recorded
/// game. The sequence is validated on construction: every cell distinct,
/// hence at most 9 of them. It may be shorter than 9 when the game is known to end early.
///
/// # Example
///
/// ```
/// use tictactoe_engine::{FixedCells, Game, Outcome, Player};
///
/// let cells = FixedCells::from_positions([1, 4, 2, 5, 3]).unwrap();
/// let mut game = Game::with_source(cells);
/// assert_eq!(game.play(), Outcome::Win(Player::One));
/// assert_eq!(game.history().len(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct FixedCells {
    cells: ArrayVec<Cell, { Cell::COUNT }>,
    next: usize,
}

impl FixedCells {
    pub fn new<I>(cells: I) -> Result<Self, InvalidCellSequenceError>
    where
        I: IntoIterator<Item = Cell>,
    {
        let mut seq = ArrayVec::new();
        for cell in cells {
            if seq.contains(&cell) {
                return Err(InvalidCellSequenceError::Duplicate { cell });
            }
            // Nine distinct cells always fit.
            seq.push(cell);
        }
        Ok(Self {
            cells: seq,
            next: 0,
        })
    }

    /// Like [`Self::new`], but from raw positions (1..=9).
    pub fn from_positions<I>(positions: I) -> Result<Self, InvalidCellSequenceError>
    where
        I: IntoIterator<Item = u8>,
    {
        let cells = positions
            .into_iter()
            .map(Cell::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(InvalidCellSequenceError::InvalidCell)?;
        Self::new(cells)
    }

    /// Returns the cells not drawn yet, in draw order.
    #[must_use]
    pub fn upcoming(&self) -> &[Cell] {
        &self.cells[self.next..]
    }
}

impl CellSource for FixedCells {
    /// # Panics
    ///
    /// Panics when drawn past the end of the sequence.
    fn next_cell(&mut self) -> Cell {
        assert!(
            self.remaining() > 0,
            "fixed cell sequence exhausted after {} cells",
            self.cells.len()
        );
        let cell = self.cells[self.next];
        self.next += 1;
        cell
    }

    fn remaining(&self) -> usize {
        self.cells.len() - self.next
    }
}
