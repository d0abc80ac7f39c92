use std::io;

use anyhow::Context as _;
use rand::Rng as _;
use tictactoe_engine::{CellSeed, CellSource, FixedCells, Game};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed (32 hex digits) for the cell order
    #[arg(long, conflicts_with = "cells")]
    seed: Option<CellSeed>,
    /// Comma-separated cell positions (1-9) to play in order
    #[arg(long, value_delimiter = ',')]
    cells: Option<Vec<u8>>,
    /// Print the grid after every turn
    #[arg(long)]
    each_turn: bool,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg {
        seed,
        cells,
        each_turn,
    } = arg;

    let mut out = io::stdout().lock();
    if let Some(cells) = cells {
        let source = FixedCells::from_positions(cells.iter().copied())
            .context("Invalid cell sequence")?;
        play_game(Game::with_source(source), *each_turn, &mut out)?;
    } else {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Playing with seed {seed}");
        play_game(Game::with_seed(seed), *each_turn, &mut out)?;
    }
    Ok(())
}

fn play_game<S, W>(mut game: Game<S>, each_turn: bool, out: &mut W) -> anyhow::Result<()>
where
    S: CellSource,
    W: io::Write,
{
    loop {
        if game.state().is_in_progress() && game.source().remaining() == 0 {
            anyhow::bail!(
                "cell sequence ran out after {} turns without deciding the game",
                game.turn()
            );
        }
        let state = game.play_turn();
        if let Some(record) = game.history().last() {
            writeln!(
                out,
                "turn {}: {} marks cell {}",
                record.turn(),
                record.player(),
                record.cell()
            )?;
        }
        if each_turn {
            writeln!(out, "{}", game.board())?;
        }
        if !state.is_in_progress() {
            break;
        }
    }

    if !each_turn {
        writeln!(out, "{}", game.board())?;
    }
    let outcome = game.outcome().context("game ended without an outcome")?;
    write!(out, "{outcome}")?;
    if let Some(line) = game.winning_line() {
        write!(out, " ({line})")?;
    }
    writeln!(out)?;
    Ok(())
}
