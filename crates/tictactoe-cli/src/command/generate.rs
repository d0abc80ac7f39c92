use std::{io, path::PathBuf};

use anyhow::Context as _;
use rand::Rng as _;
use rayon::prelude::*;
use tictactoe_analysis::{row::GameRow, summary::OutcomeSummary};
use tictactoe_engine::{CellSeed, Game, SeedStream};

use crate::{
    schema::report::SummaryReport,
    util::{self, RecordStore},
};

const DEFAULT_NUMBER_GAMES: usize = 1_000_000;
const DEFAULT_CSV_FILENAME: &str = "tic-tac-toe-records.csv";
const DEFAULT_BATCH_SIZE: usize = 10_000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GenerateArg {
    /// Number of games to play
    #[arg(short, long, default_value_t = DEFAULT_NUMBER_GAMES)]
    number_games: usize,
    /// CSV file which stores the records (`-` for stdout)
    #[arg(short = 'f', long, default_value = DEFAULT_CSV_FILENAME)]
    csv_filename: PathBuf,
    /// Append to an existing CSV file instead of replacing it
    #[arg(long)]
    append: bool,
    /// Master seed (32 hex digits) for reproducible output
    #[arg(long)]
    seed: Option<CellSeed>,
    /// Number of games played in parallel per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,
    /// Worker threads (defaults to the number of CPUs)
    #[arg(short, long)]
    jobs: Option<usize>,
    /// Write an outcome summary as JSON to this file
    #[arg(long)]
    summary: Option<PathBuf>,
}

impl Default for GenerateArg {
    fn default() -> Self {
        Self {
            number_games: DEFAULT_NUMBER_GAMES,
            csv_filename: PathBuf::from(DEFAULT_CSV_FILENAME),
            append: false,
            seed: None,
            batch_size: DEFAULT_BATCH_SIZE,
            jobs: None,
            summary: None,
        }
    }
}

pub(crate) fn run(arg: &GenerateArg) -> anyhow::Result<()> {
    let GenerateArg {
        number_games,
        csv_filename,
        append,
        seed,
        batch_size,
        jobs,
        summary: summary_path,
    } = arg;
    anyhow::ensure!(*batch_size > 0, "batch size must be at least 1");

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs.unwrap_or(0))
        .build()
        .context("Failed to build worker thread pool")?;

    let mut store = if *append {
        RecordStore::create(csv_filename)?
    } else {
        RecordStore::overwrite(csv_filename)?
    };
    if store.was_empty() {
        store.append_line(&GameRow::header())?;
    }

    log::info!(
        "Generating {number_games} games into {} (seed {seed}, {} threads)",
        store.display_path(),
        pool.current_num_threads()
    );

    let mut seeds = SeedStream::new(seed);
    let mut summary = OutcomeSummary::new();
    let mut written = 0;
    while written < *number_games {
        let batch_len = (*number_games - written).min(*batch_size);
        let batch_seeds = seeds.by_ref().take(batch_len).collect::<Vec<_>>();
        let games = pool.install(|| play_batch(&batch_seeds));

        for game in &games {
            let row = GameRow::from_game(game).context("game ended without an outcome")?;
            store.append_line(&row.to_string())?;
            summary.record_game(game);
        }
        written += batch_len;
        log::debug!("{written}/{number_games} games written");
        if written.is_multiple_of(DEFAULT_BATCH_SIZE * 10) || written == *number_games {
            log::info!("{written}/{number_games} games written");
        }
    }

    let is_stdout = store.is_stdout();
    store.finish()?;

    let report = SummaryReport::new(Some(seed), &summary);
    // Keep stdout clean when it carries the records.
    if is_stdout {
        report.write_text(&mut io::stderr().lock())
    } else {
        report.write_text(&mut io::stdout().lock())
    }
    .context("Failed to print summary")?;
    if let Some(path) = summary_path {
        util::save_json(&report, path)?;
        log::info!("Summary written to {}", path.display());
    }

    Ok(())
}

/// Plays one game per seed, keeping the order of `seeds`.
fn play_batch(seeds: &[CellSeed]) -> Vec<Game> {
    seeds
        .par_iter()
        .map(|&seed| {
            let mut game = Game::with_seed(seed);
            game.play();
            game
        })
        .collect()
}
