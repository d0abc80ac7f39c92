use arrayvec::ArrayVec;

use crate::core::{Cell, Player};

/// One turn of a game: who moved, when, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    player: Player,
    turn: u8,
    cell: Cell,
}

impl Record {
    #[must_use]
    pub const fn new(player: Player, turn: u8, cell: Cell) -> Self {
        Self { player, turn, cell }
    }

    #[must_use]
    pub const fn player(&self) -> Player {
        self.player
    }

    /// Turn number, starting at 1.
    #[must_use]
    pub const fn turn(&self) -> u8 {
        self.turn
    }

    #[must_use]
    pub const fn cell(&self) -> Cell {
        self.cell
    }
}

/// Ordered, append-only log of the turns of one game.
///
/// Holds at most 9 records; the caller is responsible for appending them in
/// turn order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: ArrayVec<Record, { Cell::COUNT }>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: ArrayVec::new_const(),
        }
    }

    /// Appends a record.
    ///
    /// # Panics
    ///
    /// Panics if the history already holds 9 records.
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Returns all records in turn order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        for (turn, cell) in (1..).zip([5, 1, 9]) {
            let cell = Cell::try_from(cell).unwrap();
            history.append(Record::new(Player::for_turn(turn), turn, cell));
        }

        assert_eq!(history.len(), 3);
        let turns: Vec<u8> = history.records().iter().map(Record::turn).collect();
        assert_eq!(turns, [1, 2, 3]);
        let cells: Vec<u8> = history.into_iter().map(|r| r.cell().position()).collect();
        assert_eq!(cells, [5, 1, 9]);
        assert_eq!(history.last().map(Record::player), Some(Player::One));
    }

    #[test]
    #[should_panic]
    fn test_append_past_capacity_panics() {
        let mut history = History::new();
        for (turn, cell) in (1..).zip(Cell::ALL) {
            history.append(Record::new(Player::for_turn(turn), turn, cell));
        }
        history.append(Record::new(Player::Two, 10, Cell::ALL[0]));
    }
}
