// tilawa-verify: Verify a recitation transcript against expected words.
//
// The expected sentence comes from --expected or --expected-file; the
// transcript from --transcript or stdin. Output, one line per word:
//   C: word <- spoken    (correct)
//   W: word <- spoken    (incorrect)
//   Score: c/n (p%)
//
// With --trace, `T:` lines list every correspondence and fallback candidate.
// With --json, the result is printed as JSON instead.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use tilawa_cli::{
    CliError, VerificationJson, expected_sentence, read_stdin, score_line, trace_line,
    verdict_line,
};
use tilawa_engine::{Verifier, VerifyOptions};

/// Verify a recitation transcript against the expected words.
#[derive(Parser)]
#[command(name = "tilawa-verify")]
struct Cli {
    /// Expected sentence (whitespace-separated words).
    #[arg(short, long)]
    expected: Option<String>,

    /// File containing the expected sentence.
    #[arg(long, conflicts_with = "expected")]
    expected_file: Option<PathBuf>,

    /// Recognizer transcript; read from stdin when absent.
    #[arg(short, long)]
    transcript: Option<String>,

    /// Print the result as JSON.
    #[arg(long)]
    json: bool,

    /// Include the alignment trace.
    #[arg(long)]
    trace: bool,
}

fn main() {
    tilawa_cli::init_logging();

    if let Err(e) = run(Cli::parse()) {
        tilawa_cli::fatal(&e.to_string());
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let sentence = expected_sentence(cli.expected.as_deref(), cli.expected_file.as_deref())?;
    let transcript = match cli.transcript {
        Some(t) => t,
        None => read_stdin()?,
    };

    let expected: Vec<&str> = sentence.split_whitespace().collect();
    log::debug!(
        "verifying {} expected words against {} transcript bytes",
        expected.len(),
        transcript.len()
    );

    let verifier = Verifier::with_options(VerifyOptions {
        collect_trace: cli.trace,
    });
    let result = verifier.verify(&expected, transcript.trim());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if cli.json {
        let json = VerificationJson::new(&expected, &result).to_json()?;
        let _ = writeln!(out, "{json}");
        return Ok(());
    }

    for (word, verdict) in expected.iter().zip(&result.words) {
        let _ = writeln!(out, "{}", verdict_line(word, verdict));
    }
    if let Some(trace) = &result.trace {
        for entry in trace {
            let _ = writeln!(out, "{}", trace_line(entry));
        }
    }
    let _ = writeln!(out, "{}", score_line(&result.score));
    Ok(())
}
