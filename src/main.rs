use std::io::Write;

use anyhow::Result;
use clap::Parser;
use log::info;

use recto::cli::{CliArgs, OutputFormat};
use recto::input::load_rectangles_from_file;
use recto::output::{write_json, write_text};
use recto::relations::analyze;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because the failure may happen
        // before the logger is initialized
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let rectangles = load_rectangles_from_file(&cli.json)?;
    info!(
        "Loaded {} rectangles from {}",
        rectangles.len(),
        cli.json.display()
    );

    let reports = analyze(&rectangles);

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Text => write_text(&reports, &mut stdout)?,
        OutputFormat::Json => write_json(&reports, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(())
}
