use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use tictactoe_analysis::{row::GameRow, summary::OutcomeSummary};

use crate::{schema::report::SummaryReport, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SummarizeArg {
    /// CSV file written by the `generate` command
    csv: PathBuf,
    /// Write the summary as JSON to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SummarizeArg) -> anyhow::Result<()> {
    let SummarizeArg { csv, output } = arg;

    let file = File::open(csv).with_context(|| format!("Failed to open {}", csv.display()))?;
    let summary = summarize_records(BufReader::new(file), csv)?;
    log::info!("Validated {} games from {}", summary.total_games(), csv.display());

    let report = SummaryReport::new(None, &summary);
    report
        .write_text(&mut io::stdout().lock())
        .context("Failed to print summary")?;
    if let Some(path) = output {
        util::save_json(&report, path)?;
        log::info!("Summary written to {}", path.display());
    }
    Ok(())
}

/// Parses and replays every row, failing on the first invalid one.
fn summarize_records<R>(reader: R, path: &Path) -> anyhow::Result<OutcomeSummary>
where
    R: io::BufRead,
{
    let mut lines = reader.lines().enumerate();
    let header = match lines.next() {
        Some((_, line)) => line.with_context(|| format!("Failed to read {}", path.display()))?,
        None => anyhow::bail!("{} is empty", path.display()),
    };
    anyhow::ensure!(
        header.trim_end() == GameRow::header(),
        "{}: unexpected header: {header}",
        path.display()
    );

    let mut summary = OutcomeSummary::new();
    for (i, line) in lines {
        let line_no = i + 1;
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .parse::<GameRow>()
            .with_context(|| format!("{}:{line_no}: invalid record", path.display()))?;
        let game = row
            .replay()
            .with_context(|| format!("{}:{line_no}: inconsistent record", path.display()))?;
        summary.record_game(&game);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use tictactoe_engine::{Outcome, Player};

    use super::*;

    fn summarize(text: &str) -> anyhow::Result<OutcomeSummary> {
        summarize_records(text.as_bytes(), Path::new("records.csv"))
    }

    #[test]
    fn test_summarize_valid_rows() {
        let text = format!(
            "{}\n{}\n{}\n\n",
            GameRow::header(),
            "1,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1",
            "1,1,2,2,1,3,2,5,1,4,2,6,1,8,2,7,1,9,0",
        );
        let summary = summarize(&text).unwrap();
        assert_eq!(summary.total_games(), 2);
        assert_eq!(summary.count(Outcome::Win(Player::One)), 1);
        assert_eq!(summary.draws(), 1);
    }

    #[test]
    fn test_rejects_missing_header() {
        let err = summarize("1,1,2,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1\n").unwrap_err();
        assert!(err.to_string().contains("unexpected header"));
        assert!(summarize("").is_err());
    }

    #[test]
    fn test_reports_line_of_bad_record() {
        let text = format!(
            "{}\n{}\n",
            GameRow::header(),
            "1,1,3,4,1,2,2,5,1,3,0,0,0,0,0,0,0,0,1",
        );
        let err = summarize(&text).unwrap_err();
        assert_eq!(err.to_string(), "records.csv:2: invalid record");
    }

    #[test]
    fn test_rejects_mismatched_outcome() {
        // A drawn game recorded as a win for player 2.
        let text = format!(
            "{}\n{}\n",
            GameRow::header(),
            "1,1,2,2,1,3,2,5,1,4,2,6,1,8,2,7,1,9,2",
        );
        let err = summarize(&text).unwrap_err();
        assert_eq!(err.to_string(), "records.csv:2: inconsistent record");
    }
}
