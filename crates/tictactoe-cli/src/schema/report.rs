use std::{collections::BTreeMap, io};

use serde::Serialize;
use tictactoe_analysis::summary::OutcomeSummary;
use tictactoe_engine::{CellSeed, Outcome, Player};

use crate::util;

/// Outcome summary as written to JSON and printed after a run.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryReport {
    /// Master seed of the generating run, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<CellSeed>,
    pub total_games: usize,
    pub draws: usize,
    pub player_1_wins: usize,
    pub player_2_wins: usize,
    /// Number of games per game length in turns (only lengths that occurred)
    pub game_lengths: BTreeMap<usize, usize>,
    /// How often each line decided a game, in check order
    pub winning_lines: Vec<LineCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LineCount {
    pub line: String,
    pub games: usize,
}

impl SummaryReport {
    pub fn new(seed: Option<CellSeed>, summary: &OutcomeSummary) -> Self {
        let game_lengths = summary
            .length_counter()
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(turns, count)| (turns, *count))
            .collect();
        let winning_lines = summary
            .lines()
            .map(|(line, games)| LineCount {
                line: line.to_string(),
                games,
            })
            .collect();
        Self {
            seed,
            total_games: summary.total_games(),
            draws: summary.draws(),
            player_1_wins: summary.wins(Player::One),
            player_2_wins: summary.wins(Player::Two),
            game_lengths,
            winning_lines,
        }
    }

    #[expect(clippy::cast_precision_loss)]
    pub fn write_text<W>(&self, out: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        if let Some(seed) = self.seed {
            writeln!(out, "Seed: {seed}")?;
        }
        writeln!(out, "Games: {}", self.total_games)?;
        let outcomes = [
            (Outcome::Draw, self.draws),
            (Outcome::Win(Player::One), self.player_1_wins),
            (Outcome::Win(Player::Two), self.player_2_wins),
        ];
        for (outcome, count) in outcomes {
            let percent = if self.total_games == 0 {
                0.0
            } else {
                count as f64 * 100.0 / self.total_games as f64
            };
            writeln!(out, "{:>15} | {count:<8} ({percent:5.1}%)", outcome.to_string())?;
        }
        writeln!(out)?;

        writeln!(out, "Game length (turns):")?;
        util::write_histogram(out, self.game_lengths.iter().map(|(t, c)| (*t, *c)))?;
        writeln!(out)?;

        writeln!(out, "Winning lines:")?;
        util::write_histogram(
            out,
            self.winning_lines.iter().map(|l| (l.line.as_str(), l.games)),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tictactoe_engine::{FixedCells, Game};

    use super::*;

    #[test]
    fn test_report_from_summary() {
        let mut summary = OutcomeSummary::new();
        for positions in [&[1, 4, 2, 5, 3][..], &[1, 2, 3, 5, 4, 6, 8, 7, 9][..]] {
            let cells = FixedCells::from_positions(positions.iter().copied()).unwrap();
            let mut game = Game::with_source(cells);
            game.play();
            summary.record_game(&game);
        }

        let report = SummaryReport::new(None, &summary);
        assert_eq!(report.total_games, 2);
        assert_eq!(report.draws, 1);
        assert_eq!(report.player_1_wins, 1);
        assert_eq!(report.game_lengths, BTreeMap::from([(5, 1), (9, 1)]));
        assert_eq!(report.winning_lines.len(), 8);
        assert_eq!(report.winning_lines[0].line, "top row");
        assert_eq!(report.winning_lines[0].games, 1);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("seed").is_none());
        assert_eq!(json["game_lengths"]["9"], 1);

        let mut text = Vec::new();
        report.write_text(&mut text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.contains("Games: 2"));
        assert!(text.contains("Drawn game"));
    }
}
