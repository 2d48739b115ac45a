// tilawa-variants: List the accepted surface forms of words from stdin.
//
// Reads whitespace-separated words from stdin and prints, for each one:
//   word: v1 v2 ...
// where the variants are those of the normalized word, sorted.

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use tilawa_engine::{normalize, variants};

/// Print article- and prefix-stripped variants of each word on stdin.
#[derive(Parser)]
#[command(name = "tilawa-variants")]
struct Cli {}

fn main() {
    tilawa_cli::init_logging();
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = line.unwrap_or_else(|e| tilawa_cli::fatal(&format!("failed to read stdin: {e}")));
        for word in line.split_whitespace() {
            let normalized = normalize(word);
            if normalized.is_empty() {
                log::debug!("skipping {word:?}: nothing left after normalization");
                continue;
            }
            let set = variants(&normalized);
            let _ = writeln!(out, "{word}: {}", set.sorted().join(" "));
        }
    }
}
