//! Flashdeck CLI: classify scraped interview questions and export study decks.
//!
//! Loads a question bank, labels each question with where it was reported and
//! what it covers, and writes Word or Markdown documents, optionally one per
//! category or institution.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
