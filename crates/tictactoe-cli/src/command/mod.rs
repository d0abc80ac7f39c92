use clap::{Parser, Subcommand};

use self::{generate::GenerateArg, play::PlayArg, summarize::SummarizeArg};

mod generate;
mod play;
mod summarize;

#[derive(Debug, Clone, Parser)]
#[command(
    author,
    version,
    about = "Plays random Tic Tac Toe games and stores each game as a CSV record",
    long_about = None
)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play many games and write one CSV row per game
    Generate(#[clap(flatten)] GenerateArg),
    /// Play a single game and show the grid, turns and winner
    Play(#[clap(flatten)] PlayArg),
    /// Validate a generated CSV file and report its outcome statistics
    Summarize(#[clap(flatten)] SummarizeArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Generate(GenerateArg::default())) {
        Mode::Generate(arg) => generate::run(&arg)?,
        Mode::Play(arg) => play::run(&arg)?,
        Mode::Summarize(arg) => summarize::run(&arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_parses() {
        let args = CommandArgs::try_parse_from(["tictactoe"]).unwrap();
        assert!(args.mode.is_none());
    }
}
