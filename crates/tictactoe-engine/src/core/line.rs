use super::cell::Cell;

/// One of the eight lines of three cells that wins the game when a single
/// player owns all of it.
///
/// Lines are checked in the order of [`Line::ALL`]: rows top to bottom,
/// columns left to right, then the two diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Line {
    #[display("top row")]
    TopRow,
    #[display("middle row")]
    MiddleRow,
    #[display("bottom row")]
    BottomRow,
    #[display("left column")]
    LeftColumn,
    #[display("center column")]
    CenterColumn,
    #[display("right column")]
    RightColumn,
    #[display("main diagonal")]
    MainDiagonal,
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    pub const LEN: usize = 8;

    pub const ALL: [Self; Self::LEN] = [
        Self::TopRow,
        Self::MiddleRow,
        Self::BottomRow,
        Self::LeftColumn,
        Self::CenterColumn,
        Self::RightColumn,
        Self::MainDiagonal,
        Self::AntiDiagonal,
    ];

    /// Board indices (0..=8) covered by this line.
    #[must_use]
    pub const fn indices(self) -> [usize; 3] {
        match self {
            Self::TopRow => [0, 1, 2],
            Self::MiddleRow => [3, 4, 5],
            Self::BottomRow => [6, 7, 8],
            Self::LeftColumn => [0, 3, 6],
            Self::CenterColumn => [1, 4, 7],
            Self::RightColumn => [2, 5, 8],
            Self::MainDiagonal => [0, 4, 8],
            Self::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Position of this line within [`Line::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn cells(self) -> [Cell; 3] {
        self.indices().map(|i| Cell::ALL[i])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_ordinal_matches_all() {
        for (i, line) in Line::ALL.iter().enumerate() {
            assert_eq!(line.ordinal(), i);
        }
    }

    #[test]
    fn test_lines_are_distinct_triples() {
        let lines: HashSet<[usize; 3]> = Line::ALL.iter().map(|l| l.indices()).collect();
        assert_eq!(lines.len(), Line::LEN);
        for line in Line::ALL {
            let [a, b, c] = line.indices();
            assert!(a < b && b < c, "{line} indices should be ascending");
            assert!(c < Cell::COUNT);
        }
    }

    #[test]
    fn test_every_cell_is_on_a_line() {
        let covered: HashSet<usize> = Line::ALL.iter().flat_map(|l| l.indices()).collect();
        assert_eq!(covered.len(), Cell::COUNT);
    }

    #[test]
    fn test_center_lies_on_four_lines() {
        let center = Cell::ALL[4];
        let count = Line::ALL
            .iter()
            .filter(|l| l.cells().contains(&center))
            .count();
        assert_eq!(count, 4);
    }
}
