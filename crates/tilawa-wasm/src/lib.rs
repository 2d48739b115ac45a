// WASM bindings for Tilawa recitation verification.
//
// Exports two classes via wasm-bindgen:
//   - `WasmVerifier` wraps the stateless `Verifier` plus the text utilities
//   - `WasmPracticeSession` wraps `PracticeSession` for a guided practice UI
// Structured results are serialized to JavaScript values with
// serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const verifier = new WasmVerifier();
//   verifier.verify(["بسم", "الله"], "بسم الله");
//     // => { words: [{ status: "correct", spokenText: "بسم" }, ...],
//     //      score: { correct: 2, total: 2, percent: 100 } }
//   verifier.normalize("بِسْمِ");      // => "بسم"
//   verifier.variants("والكتاب");     // => ["الكتاب", "كتاب", "والكتاب"]
//
//   const session = new WasmPracticeSession();
//   session.start(WasmPracticeSession.sampleSentence());
//   session.submit("بسم الله الرحمن الرحيم");
//     // => { kind: "verified", verification: { ... } }
//   session.words();  // => [{ text: "بِسْمِ", status: "correct", spokenText: "بسم" }, ...]
//
//   // or one word at a time
//   session.reset();
//   session.start("بسم الله");
//   session.submitWord("بسم");
//     // => { kind: "advanced", index: 0, status: "correct", complete: false }
//   session.submitWord("كتاب");
//     // => { kind: "mismatch", index: 1, spokenText: "كتاب" }

use serde::Serialize;
use wasm_bindgen::prelude::*;

use tilawa_core::verification::Verification;
use tilawa_core::word::ExpectedWord;
use tilawa_engine::session::{
    AttemptOutcome, PracticeSession, SAMPLE_SENTENCE, SessionConfig, SessionError, WordOutcome,
};
use tilawa_engine::{Verifier, VerifyOptions};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsVerdict {
    status: &'static str,
    spoken_text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsScore {
    correct: usize,
    total: usize,
    percent: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTraceEntry {
    expected_index: usize,
    candidate: String,
    score: f64,
    stage: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsVerification {
    words: Vec<JsVerdict>,
    score: JsScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<JsTraceEntry>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsExpectedWord {
    text: String,
    status: &'static str,
    spoken_text: String,
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsAttemptOutcome {
    Retry { attempt: u32 },
    Verified { verification: JsVerification },
}

#[derive(Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
enum JsWordOutcome {
    Retry {
        attempt: u32,
    },
    #[serde(rename_all = "camelCase")]
    Mismatch {
        index: usize,
        spoken_text: String,
    },
    Advanced {
        index: usize,
        status: &'static str,
        complete: bool,
    },
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn verification_to_js(v: &Verification) -> JsVerification {
    JsVerification {
        words: v
            .words
            .iter()
            .map(|w| JsVerdict {
                status: w.status.as_str(),
                spoken_text: w.spoken_text.clone(),
            })
            .collect(),
        score: JsScore {
            correct: v.score.correct,
            total: v.score.total,
            percent: v.score.percent(),
        },
        trace: v.trace.as_ref().map(|entries| {
            entries
                .iter()
                .map(|e| JsTraceEntry {
                    expected_index: e.expected_index,
                    candidate: e.candidate.clone(),
                    score: e.score,
                    stage: e.stage.as_str(),
                })
                .collect()
        }),
    }
}

fn word_to_js(w: &ExpectedWord) -> JsExpectedWord {
    JsExpectedWord {
        text: w.text.clone(),
        status: w.status.as_str(),
        spoken_text: w.spoken_text.clone(),
    }
}

fn outcome_to_js(outcome: AttemptOutcome) -> JsAttemptOutcome {
    match outcome {
        AttemptOutcome::Retry { attempt } => JsAttemptOutcome::Retry { attempt },
        AttemptOutcome::Verified(v) => JsAttemptOutcome::Verified {
            verification: verification_to_js(&v),
        },
    }
}

fn word_outcome_to_js(outcome: WordOutcome) -> JsWordOutcome {
    match outcome {
        WordOutcome::Retry { attempt } => JsWordOutcome::Retry { attempt },
        WordOutcome::Mismatch { index, spoken_text } => {
            JsWordOutcome::Mismatch { index, spoken_text }
        }
        WordOutcome::Advanced {
            index,
            status,
            complete,
        } => JsWordOutcome::Advanced {
            index,
            status: status.as_str(),
            complete,
        },
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn session_error_to_js(e: SessionError) -> JsError {
    JsError::new(&e.to_string())
}

// ============================================================================
// WasmVerifier
// ============================================================================

/// Recitation verifier for WebAssembly.
#[wasm_bindgen]
pub struct WasmVerifier {
    verifier: Verifier,
}

#[wasm_bindgen]
impl WasmVerifier {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmVerifier {
        WasmVerifier {
            verifier: Verifier::new(),
        }
    }

    /// Verify a transcript against a list of expected words.
    ///
    /// Returns `{ words: [{ status, spokenText }], score: { correct, total,
    /// percent }, trace? }`.
    pub fn verify(&self, expected: Vec<String>, transcript: &str) -> Result<JsValue, JsError> {
        let result = self.verifier.verify(&expected, transcript);
        to_js(&verification_to_js(&result))
    }

    /// Verify a transcript against a whitespace-separated sentence.
    #[wasm_bindgen(js_name = "verifySentence")]
    pub fn verify_sentence(&self, sentence: &str, transcript: &str) -> Result<JsValue, JsError> {
        let result = self.verifier.verify_sentence(sentence, transcript);
        to_js(&verification_to_js(&result))
    }

    /// Normalize Arabic text to the form used for comparison.
    pub fn normalize(&self, text: &str) -> String {
        tilawa_engine::normalize(text)
    }

    /// Accepted surface forms of a word, sorted.
    pub fn variants(&self, word: &str) -> js_sys::Array {
        let normalized = tilawa_engine::normalize(word);
        let arr = js_sys::Array::new();
        if normalized.is_empty() {
            return arr;
        }
        for form in tilawa_engine::variants(&normalized).sorted() {
            arr.push(&JsValue::from_str(form));
        }
        arr
    }

    /// Similarity in [0, 1] between two normalized strings.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        tilawa_engine::similarity(a, b)
    }

    /// Acceptance threshold for a word of `length` characters.
    pub fn threshold(&self, length: usize) -> f64 {
        tilawa_engine::threshold(length)
    }

    /// Set whether results include the alignment trace.
    #[wasm_bindgen(js_name = "setCollectTrace")]
    pub fn set_collect_trace(&mut self, value: bool) {
        self.verifier.set_collect_trace(value);
    }
}

impl Default for WasmVerifier {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// WasmPracticeSession
// ============================================================================

/// Practice session for WebAssembly.
#[wasm_bindgen]
pub struct WasmPracticeSession {
    session: PracticeSession,
}

#[wasm_bindgen]
impl WasmPracticeSession {
    /// Create a session.
    ///
    /// - `max_empty_retries`: empty transcripts tolerated before verifying (default 1)
    /// - `collect_trace`: include the alignment trace in results (default false)
    #[wasm_bindgen(constructor)]
    pub fn new(max_empty_retries: Option<u32>, collect_trace: Option<bool>) -> WasmPracticeSession {
        let defaults = SessionConfig::default();
        let config = SessionConfig {
            max_empty_retries: max_empty_retries.unwrap_or(defaults.max_empty_retries),
            verify: VerifyOptions {
                collect_trace: collect_trace.unwrap_or(defaults.verify.collect_trace),
            },
        };
        WasmPracticeSession {
            session: PracticeSession::new(config),
        }
    }

    /// Sample sentence offered to new users.
    #[wasm_bindgen(js_name = "sampleSentence")]
    pub fn sample_sentence() -> String {
        SAMPLE_SENTENCE.to_string()
    }

    /// Load a sentence and start listening.
    pub fn start(&mut self, sentence: &str) -> Result<(), JsError> {
        self.session.start(sentence).map_err(session_error_to_js)
    }

    /// Submit a recognizer transcript.
    ///
    /// Returns `{ kind: "retry", attempt }` or
    /// `{ kind: "verified", verification }`.
    pub fn submit(&mut self, transcript: &str) -> Result<JsValue, JsError> {
        let outcome = self
            .session
            .submit(transcript)
            .map_err(session_error_to_js)?;
        to_js(&outcome_to_js(outcome))
    }

    /// Report a recognizer timeout; same result shape as `submit`.
    pub fn timeout(&mut self) -> Result<JsValue, JsError> {
        let outcome = self.session.timeout().map_err(session_error_to_js)?;
        to_js(&outcome_to_js(outcome))
    }

    /// Submit a transcript for the current word only.
    ///
    /// Returns `{ kind: "retry", attempt }`, `{ kind: "mismatch", index,
    /// spokenText }` or `{ kind: "advanced", index, status, complete }`.
    #[wasm_bindgen(js_name = "submitWord")]
    pub fn submit_word(&mut self, transcript: &str) -> Result<JsValue, JsError> {
        let outcome = self
            .session
            .submit_word(transcript)
            .map_err(session_error_to_js)?;
        to_js(&word_outcome_to_js(outcome))
    }

    /// Mark the current word incorrect and move on.
    #[wasm_bindgen(js_name = "skipWord")]
    pub fn skip_word(&mut self) -> Result<JsValue, JsError> {
        let outcome = self.session.skip_word().map_err(session_error_to_js)?;
        to_js(&word_outcome_to_js(outcome))
    }

    /// Index of the word being practised, if any.
    #[wasm_bindgen(js_name = "currentIndex")]
    pub fn current_index(&self) -> Option<usize> {
        self.session.current_index()
    }

    pub fn stop(&mut self) {
        self.session.stop();
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Current words: `[{ text, status, spokenText }]`.
    pub fn words(&self) -> Result<JsValue, JsError> {
        let words: Vec<JsExpectedWord> = self.session.words().iter().map(word_to_js).collect();
        to_js(&words)
    }

    /// Session state name: "idle", "listening", "complete" or "stopped".
    pub fn state(&self) -> String {
        self.session.state().as_str().to_string()
    }

    #[wasm_bindgen(js_name = "progressPercent")]
    pub fn progress_percent(&self) -> u32 {
        self.session.progress_percent()
    }
}

impl Default for WasmPracticeSession {
    fn default() -> Self {
        Self::new(None, None)
    }
}
