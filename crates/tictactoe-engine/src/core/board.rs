use std::fmt;

use super::{
    cell::{Cell, Player},
    line::Line,
};

/// The 3×3 grid of marks.
///
/// Each cell is either empty or holds the mark of one player. Marks are only
/// ever added, so a board after `n` turns always holds exactly `n` marks.
///
/// The [`Display`](fmt::Display) output shows the grid as a matrix of player
/// ids (0 for an empty cell):
///
/// ```text
/// =========
/// | GRID  |
/// =========
/// [1, 2, 1]
/// [2, 1, 2]
/// [1, 0, 0]
/// ```
///
/// # Example
///
/// ```
/// use tictactoe_engine::{Board, Cell, Line, Player};
///
/// let mut board = Board::EMPTY;
/// for position in [1, 5, 9] {
///     board.mark(Cell::try_from(position).unwrap(), Player::One);
/// }
/// assert_eq!(board.winning_line(Player::One), Some(Line::MainDiagonal));
/// assert_eq!(board.winning_line(Player::Two), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Player>; Cell::COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [None; Cell::COUNT],
    };

    #[must_use]
    pub const fn get(&self, cell: Cell) -> Option<Player> {
        self.cells[cell.index()]
    }

    #[must_use]
    pub const fn is_empty_at(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Places `player`'s mark on `cell`.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already marked. Cells are drawn without
    /// replacement, so this only happens with a malformed cell source.
    pub fn mark(&mut self, cell: Cell, player: Player) {
        let slot = &mut self.cells[cell.index()];
        assert!(
            slot.is_none(),
            "cell {cell} is already marked by {}",
            slot.map_or(0, Player::id)
        );
        *slot = Some(player);
    }

    /// Returns the number of marked cells.
    #[must_use]
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the cells in board order.
    pub fn cells(&self) -> impl Iterator<Item = Option<Player>> + '_ {
        self.cells.iter().copied()
    }

    /// Returns the board as player ids, 0 for an empty cell.
    #[must_use]
    pub fn ids(&self) -> [u8; Cell::COUNT] {
        self.cells.map(|c| c.map_or(0, Player::id))
    }

    /// Returns `true` if `player` owns all three cells of `line`.
    #[must_use]
    pub fn owns_line(&self, player: Player, line: Line) -> bool {
        line.indices()
            .iter()
            .all(|&i| self.cells[i] == Some(player))
    }

    /// Returns the first line in [`Line::ALL`] order fully owned by `player`.
    #[must_use]
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        Line::ALL
            .into_iter()
            .find(|&line| self.owns_line(player, line))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=========")?;
        writeln!(f, "| GRID  |")?;
        writeln!(f, "=========")?;
        for row in self.ids().chunks(3) {
            writeln!(f, "[{}, {}, {}]", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_ids(ids: [u8; 9]) -> Board {
        let mut board = Board::EMPTY;
        for (cell, id) in Cell::ALL.into_iter().zip(ids) {
            if let Some(player) = Player::from_id(id) {
                board.mark(cell, player);
            }
        }
        board
    }

    #[test]
    fn test_empty_board() {
        let board = Board::EMPTY;
        assert_eq!(board.marked_count(), 0);
        assert_eq!(board.ids(), [0; 9]);
        for player in Player::ALL {
            assert_eq!(board.winning_line(player), None);
        }
    }

    #[test]
    fn test_each_line_wins_for_both_players() {
        for player in Player::ALL {
            for line in Line::ALL {
                let mut board = Board::EMPTY;
                for cell in line.cells() {
                    board.mark(cell, player);
                }
                assert_eq!(board.winning_line(player), Some(line));
                assert_eq!(board.winning_line(player.opponent()), None);
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from_ids([1, 1, 2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(board.winning_line(Player::One), None);
        assert_eq!(board.winning_line(Player::Two), None);
    }

    #[test]
    fn test_winning_line_reports_first_in_check_order() {
        // Player 1 owns both the top row and the left column.
        let board = board_from_ids([1, 1, 1, 1, 2, 2, 1, 2, 0]);
        assert_eq!(board.winning_line(Player::One), Some(Line::TopRow));
    }

    #[test]
    #[should_panic(expected = "already marked")]
    fn test_double_marking_panics() {
        let mut board = Board::EMPTY;
        let cell = Cell::ALL[0];
        board.mark(cell, Player::One);
        board.mark(cell, Player::Two);
    }

    #[test]
    fn test_display_grid() {
        let board = board_from_ids([1, 2, 1, 2, 1, 2, 1, 0, 0]);
        assert_eq!(
            board.to_string(),
            "=========\n| GRID  |\n=========\n[1, 2, 1]\n[2, 1, 2]\n[1, 0, 0]\n"
        );
    }
}
