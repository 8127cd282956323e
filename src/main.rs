//! Docman - A terminal document editor with styling and PDF export.
//!
//! # Usage
//!
//! ```bash
//! docman
//! docman notes.txt
//! docman --log-file docman.log notes.txt
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use docman::app::App;

/// A terminal document editor with styling, print preview and PDF export
#[derive(Parser, Debug)]
#[command(name = "docman", version, about, long_about = None)]
struct Cli {
    /// Text file to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Write log events to a file. Without it logs are discarded, since the
    /// editor owns the terminal
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Only offer the built-in PDF font families in the font dialog
    #[arg(long)]
    no_system_fonts: bool,
}

/// Log sink for the subscriber.
///
/// Anything written to stdout or stderr would land on top of the
/// alternate screen, so logs go to a file or nowhere.
fn log_writer(log_file: Option<&Path>) -> Result<BoxMakeWriter> {
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            Ok(BoxMakeWriter::new(Mutex::new(file)))
        }
        None => Ok(BoxMakeWriter::new(std::io::sink)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_writer(cli.log_file.as_deref())?)
        .with_ansi(false)
        .init();

    // Run the application
    let mut app = App::new(cli.file).with_system_fonts(!cli.no_system_fonts);

    app.run().context("Application error")
}
