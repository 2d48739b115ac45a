// tilawa-normalize: Print the normalized form of each stdin line.
//
// Diacritics, Quranic marks and tatweel are removed, letter variants
// unified, and non-Arabic characters dropped. Empty results print as empty
// lines so output lines stay aligned with input lines.

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use tilawa_engine::normalize;

/// Normalize Arabic text read from stdin, one line at a time.
#[derive(Parser)]
#[command(name = "tilawa-normalize")]
struct Cli {
    /// Skip lines that normalize to nothing.
    #[arg(long)]
    skip_empty: bool,
}

fn main() {
    tilawa_cli::init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut lines = 0usize;

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| tilawa_cli::fatal(&format!("failed to read stdin: {e}")));
        lines += 1;
        let normalized = normalize(&line);
        if cli.skip_empty && normalized.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{normalized}");
    }

    log::debug!("normalized {lines} lines");
}
