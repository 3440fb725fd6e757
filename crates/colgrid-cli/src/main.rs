//! Read lines from stdin and print them as a column-aligned grid.
//!
//! ```text
//! ls | colgrid --width 60
//! ```

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;

use colgrid::{terminal_width, GridSpec};

/// Arrange stdin lines into a column-aligned grid.
#[derive(Debug, Parser)]
#[command(name = "colgrid", version, about)]
struct Args {
    /// Width of the output surface (defaults to the terminal width).
    #[arg(long)]
    width: Option<usize>,

    /// Use a fixed number of columns instead of auto-fitting.
    #[arg(long)]
    columns: Option<usize>,

    /// Blank characters between adjacent columns.
    #[arg(long, default_value_t = 2)]
    padding: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut items = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        items.push(line.trim_end().to_string());
    }

    let width = args.width.unwrap_or_else(terminal_width);
    let spec = GridSpec::new().padding(args.padding);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.columns {
        Some(cols) => spec.write_fixed(&mut out, width, cols, &items),
        None => spec.write_auto(&mut out, width, &items),
    }
    .context("writing grid")?;
    out.flush().context("flushing stdout")?;
    Ok(())
}
