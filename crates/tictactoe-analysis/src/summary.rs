use tictactoe_engine::{Cell, Game, Line, Outcome, Player};

/// Aggregate statistics over many finished games.
///
/// Tracks:
///
/// - **Outcomes**: number of draws and wins per player
/// - **Game length**: how many games ended after each number of turns
/// - **Winning lines**: which line decided each won game
///
/// Summaries of disjoint batches can be combined with [`merge`](Self::merge).
///
/// # Example
///
/// ```
/// use tictactoe_analysis::summary::OutcomeSummary;
/// use tictactoe_engine::{FixedCells, Game, Line, Outcome, Player};
///
/// let mut game = Game::with_source(FixedCells::from_positions([1, 4, 2, 5, 3]).unwrap());
/// game.play();
///
/// let mut summary = OutcomeSummary::new();
/// summary.record_game(&game);
///
/// assert_eq!(summary.total_games(), 1);
/// assert_eq!(summary.count(Outcome::Win(Player::One)), 1);
/// assert_eq!(summary.length_counter()[5], 1);
/// assert_eq!(summary.line_count(Line::TopRow), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeSummary {
    outcome_counter: [usize; 3],
    length_counter: [usize; Cell::COUNT + 1],
    line_counter: [usize; Line::LEN],
}

impl Default for OutcomeSummary {
    fn default() -> Self {
        Self::new()
    }
}

impl OutcomeSummary {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcome_counter: [0; 3],
            length_counter: [0; Cell::COUNT + 1],
            line_counter: [0; Line::LEN],
        }
    }

    /// Counts a finished game. Games still in progress are ignored.
    pub fn record_game<S>(&mut self, game: &Game<S>) {
        let Some(outcome) = game.outcome() else {
            return;
        };
        self.record(outcome, game.history().len(), game.winning_line());
    }

    /// Counts one game from its parts.
    ///
    /// # Arguments
    ///
    /// * `outcome` - How the game ended
    /// * `turns` - Number of turns played (0-9)
    /// * `line` - The line that decided a won game
    pub fn record(&mut self, outcome: Outcome, turns: usize, line: Option<Line>) {
        self.outcome_counter[usize::from(outcome.as_u8())] += 1;
        self.length_counter[turns] += 1;
        if let Some(line) = line {
            self.line_counter[line.ordinal()] += 1;
        }
    }

    /// Adds the counts of `other` into `self`.
    pub fn merge(&mut self, other: &Self) {
        for (a, b) in self.outcome_counter.iter_mut().zip(other.outcome_counter) {
            *a += b;
        }
        for (a, b) in self.length_counter.iter_mut().zip(other.length_counter) {
            *a += b;
        }
        for (a, b) in self.line_counter.iter_mut().zip(other.line_counter) {
            *a += b;
        }
    }

    #[must_use]
    pub fn total_games(&self) -> usize {
        self.outcome_counter.iter().sum()
    }

    #[must_use]
    pub const fn count(&self, outcome: Outcome) -> usize {
        self.outcome_counter[outcome.as_u8() as usize]
    }

    #[must_use]
    pub const fn wins(&self, player: Player) -> usize {
        self.count(Outcome::Win(player))
    }

    #[must_use]
    pub const fn draws(&self) -> usize {
        self.count(Outcome::Draw)
    }

    /// Returns the share of games with `outcome`, or `None` if no games were counted.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn ratio(&self, outcome: Outcome) -> Option<f64> {
        let total = self.total_games();
        (total > 0).then(|| self.count(outcome) as f64 / total as f64)
    }

    /// Returns a histogram of game lengths.
    ///
    /// Index `n` holds the number of games that ended after `n` turns.
    #[must_use]
    pub const fn length_counter(&self) -> &[usize; Cell::COUNT + 1] {
        &self.length_counter
    }

    #[must_use]
    pub const fn line_count(&self, line: Line) -> usize {
        self.line_counter[line.ordinal()]
    }

    /// Returns how often each line decided a game, in [`Line::ALL`] order.
    pub fn lines(&self) -> impl Iterator<Item = (Line, usize)> + '_ {
        Line::ALL.into_iter().zip(self.line_counter.iter().copied())
    }
}
