// tilawa-cli: shared utilities for CLI tools.

use std::io::{self, Read};
use std::path::Path;
use std::process;

use serde::Serialize;
use tilawa_core::verification::{Score, TraceEntry, Verdict, Verification};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TILAWA_LOG";

/// Error type for CLI input and output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no expected words given (use --expected or --expected-file)")]
    MissingExpected,
}

/// Initialise `env_logger`, reading the filter from `TILAWA_LOG`
/// (default `warn`).
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn")).init();
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Read all of stdin into a string.
pub fn read_stdin() -> Result<String, CliError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(CliError::Stdin)?;
    Ok(buf)
}

/// Read a UTF-8 text file.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}

/// Resolve the expected sentence from `--expected` or `--expected-file`.
///
/// The inline sentence wins when both are given.
pub fn expected_sentence(
    inline: Option<&str>,
    file: Option<&Path>,
) -> Result<String, CliError> {
    let sentence = match (inline, file) {
        (Some(s), _) => s.to_string(),
        (None, Some(path)) => read_file(path)?,
        (None, None) => return Err(CliError::MissingExpected),
    };
    if sentence.split_whitespace().next().is_none() {
        return Err(CliError::MissingExpected);
    }
    Ok(sentence)
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// `C: <word> <- <spoken>` for correct words, `W: ...` otherwise.
pub fn verdict_line(word: &str, verdict: &Verdict) -> String {
    let tag = if verdict.status.is_correct() { 'C' } else { 'W' };
    format!("{tag}: {word} <- {}", verdict.spoken_text)
}

/// `Score: c/n (p%)`.
pub fn score_line(score: &Score) -> String {
    format!(
        "Score: {}/{} ({}%)",
        score.correct,
        score.total,
        score.percent()
    )
}

/// `T: <index> <stage> <candidate> <score>`.
pub fn trace_line(entry: &TraceEntry) -> String {
    format!(
        "T: {} {} {} {:.3}",
        entry.expected_index,
        entry.stage.as_str(),
        entry.candidate,
        entry.score
    )
}

// ---------------------------------------------------------------------------
// JSON output
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictJson {
    pub word: String,
    pub status: &'static str,
    pub spoken_text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreJson {
    pub correct: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceJson {
    pub expected_index: usize,
    pub candidate: String,
    pub score: f64,
    pub stage: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationJson {
    pub words: Vec<VerdictJson>,
    pub score: ScoreJson,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<Vec<TraceJson>>,
}

impl VerificationJson {
    /// Pair each verdict with its expected word.
    pub fn new<S: AsRef<str>>(expected: &[S], result: &Verification) -> Self {
        Self {
            words: expected
                .iter()
                .zip(&result.words)
                .map(|(word, v)| VerdictJson {
                    word: word.as_ref().to_string(),
                    status: v.status.as_str(),
                    spoken_text: v.spoken_text.clone(),
                })
                .collect(),
            score: ScoreJson {
                correct: result.score.correct,
                total: result.score.total,
                percent: result.score.percent(),
            },
            trace: result.trace.as_ref().map(|entries| {
                entries
                    .iter()
                    .map(|e| TraceJson {
                        expected_index: e.expected_index,
                        candidate: e.candidate.clone(),
                        score: e.score,
                        stage: e.stage.as_str(),
                    })
                    .collect()
            }),
        }
    }

    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
