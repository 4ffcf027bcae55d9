//! Circle CLI Application
//!
//! Command-line interface for the circle address book.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use circle_core::StorageBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        no_color,
        command,
    } = Args::parse();

    // Schema output does not touch the data file.
    if let Some(Schema) = command {
        return Cli::print_schema();
    }

    let storage = StorageBuilder::new()
        .with_data_path(data_file)
        .build()
        .context("Failed to initialize storage")?;

    info!("Circle started with {}", storage.path().display());

    let cli = Cli::new(storage, TerminalRenderer::new(!no_color));

    match command {
        Some(Person { command }) => cli.handle_person_command(command),
        Some(Plan { command }) => cli.handle_plan_command(command),
        Some(Check) => cli.check(),
        Some(Schema) => Cli::print_schema(),
        None => cli.list_plans(),
    }
}
