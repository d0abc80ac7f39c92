pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("cell position must be between 1 and 9, got {position}")]
pub struct InvalidCellError {
    pub position: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("player id must be 1 or 2, got {id}")]
pub struct InvalidPlayerError {
    pub id: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("outcome must be 0, 1 or 2, got {id}")]
pub struct InvalidOutcomeError {
    pub id: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidCellSequenceError {
    #[display("invalid cell in sequence: {_0}")]
    InvalidCell(InvalidCellError),
    #[display("cell {cell} appears more than once in sequence")]
    Duplicate { cell: Cell },
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCellSeedError {
    #[display("invalid seed: expected 32 hex characters, got {len}")]
    Length { len: usize },
    #[display("invalid seed: {_0}")]
    Digits(std::num::ParseIntError),
}
