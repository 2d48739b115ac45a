// Practice session controller
//
// Synchronous state machine for one recitation practice: the host splits a
// sentence into expected words, feeds in recognizer results (or timeouts),
// and reads back per-word statuses. It owns no timers and does no I/O; the
// host decides when an attempt ends and calls `submit` or `timeout`.
//
// Two flows share the state machine. `submit` checks the whole sentence in
// one attempt. `submit_word` checks only the `Current` word and moves
// `Current` forward when it matches; `skip_word` moves on without a match.
//
//   Idle --start--> Listening --submit / last word--> Complete
//                      |  ^                               |
//                      |  +--Retry (empty) / next word    |
//                      +--stop--> Stopped                 |
//   any --reset--> Idle <---------------------------------+

use tilawa_core::enums::{VerdictStatus, WordStatus};
use tilawa_core::verification::{Score, Verdict, Verification};
use tilawa_core::word::ExpectedWord;

use crate::normalizer::normalize;
use crate::verifier::{Verifier, VerifyOptions};

/// Sample sentence offered to users (Bismillah).
pub const SAMPLE_SENTENCE: &str = "بِسْمِ اللَّهِ الرَّحْمَٰنِ الرَّحِيمِ";

/// Error type for invalid session transitions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The sentence passed to `start` has no words.
    #[error("sentence contains no words")]
    EmptySentence,

    /// `start` was called while a session is listening.
    #[error("a session is already listening")]
    AlreadyActive,

    /// A transcript was submitted while no session is listening.
    #[error("session is not listening (state: {0:?})")]
    NotListening(SessionState),
}

/// Lifecycle state of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No sentence loaded.
    #[default]
    Idle,
    /// Words loaded, waiting for a recognizer result.
    Listening,
    /// Verdicts written for every word.
    Complete,
    /// Stopped by the user before completion; words are kept.
    Stopped,
}

impl SessionState {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Listening => "listening",
            SessionState::Complete => "complete",
            SessionState::Stopped => "stopped",
        }
    }
}

/// Result of submitting one recognition attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// The transcript was empty and a retry is still allowed.
    /// `attempt` counts empty attempts so far (1-based).
    Retry { attempt: u32 },
    /// The engine ran and verdicts were written back.
    Verified(Verification),
}

/// Result of one attempt at the `Current` word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// The transcript was empty and a retry is still allowed.
    Retry { attempt: u32 },
    /// The word did not match. It stays `Current` with the heard token
    /// recorded in `spoken_text`.
    Mismatch { index: usize, spoken_text: String },
    /// The word was verified and `Current` moved on. `complete` is set when
    /// it was the last word.
    Advanced {
        index: usize,
        status: WordStatus,
        complete: bool,
    },
}

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Empty transcripts tolerated before verifying anyway. Default: 1.
    pub max_empty_retries: u32,
    /// Options passed to the verifier.
    pub verify: VerifyOptions,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_empty_retries: 1,
            verify: VerifyOptions::default(),
        }
    }
}

/// One practice session over a sentence.
#[derive(Debug, Clone, Default)]
pub struct PracticeSession {
    config: SessionConfig,
    verifier: Verifier,
    words: Vec<ExpectedWord>,
    state: SessionState,
    empty_attempts: u32,
    score: Score,
}

impl PracticeSession {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            verifier: Verifier::with_options(config.verify),
            ..Self::default()
        }
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn words(&self) -> &[ExpectedWord] {
        &self.words
    }

    /// Score of the last verification (`0 / word count` before that).
    pub fn score(&self) -> Score {
        self.score
    }

    /// Index of the word marked `Current`, if any.
    pub fn current_index(&self) -> Option<usize> {
        self.words
            .iter()
            .position(|w| w.status == WordStatus::Current)
    }

    /// Share of words with a verdict, as a rounded percentage.
    ///
    /// In the per-word flow this is `next_index / word_count`.
    pub fn progress_percent(&self) -> u32 {
        let done = self.words.iter().filter(|w| w.status.is_final()).count();
        Score::new(done, self.words.len()).percent()
    }

    /// Load a sentence and start listening.
    pub fn start(&mut self, sentence: &str) -> Result<(), SessionError> {
        if self.state == SessionState::Listening {
            return Err(SessionError::AlreadyActive);
        }
        let words = ExpectedWord::split_sentence(sentence);
        if words.is_empty() {
            return Err(SessionError::EmptySentence);
        }

        log::debug!("session started with {} words", words.len());
        self.score = Score::new(0, words.len());
        self.words = words;
        self.empty_attempts = 0;
        self.state = SessionState::Listening;
        Ok(())
    }

    /// Submit the final transcript of one recognition attempt.
    ///
    /// An empty transcript asks for a retry until `max_empty_retries` empty
    /// attempts have been seen; after that it is verified like any other
    /// transcript (every word becomes `Incorrect`).
    pub fn submit(&mut self, transcript: &str) -> Result<AttemptOutcome, SessionError> {
        if self.state != SessionState::Listening {
            return Err(SessionError::NotListening(self.state));
        }

        if normalize(transcript).is_empty() && self.empty_attempts < self.config.max_empty_retries {
            self.empty_attempts += 1;
            log::debug!(
                "empty transcript, retry {}/{}",
                self.empty_attempts,
                self.config.max_empty_retries
            );
            return Ok(AttemptOutcome::Retry {
                attempt: self.empty_attempts,
            });
        }

        let expected: Vec<&str> = self.words.iter().map(|w| w.text.as_str()).collect();
        let verification = self.verifier.verify(&expected, transcript);

        for (word, verdict) in self.words.iter_mut().zip(&verification.words) {
            word.apply(verdict.status, &verdict.spoken_text);
        }
        self.score = verification.score;
        self.state = SessionState::Complete;
        log::debug!(
            "session complete: {}/{} correct",
            self.score.correct,
            self.score.total
        );

        Ok(AttemptOutcome::Verified(verification))
    }

    /// The recognizer timed out without a result.
    pub fn timeout(&mut self) -> Result<AttemptOutcome, SessionError> {
        self.submit("")
    }

    /// Check a transcript against the `Current` word only.
    ///
    /// A match writes `Correct` onto the word and marks the next word
    /// `Current`; after the last word the session is `Complete`. A mismatch
    /// leaves the word `Current` so the reciter can try again. Empty
    /// transcripts follow the same retry rule as `submit` and then count as
    /// a mismatch. The empty-attempt counter restarts on every new word.
    pub fn submit_word(&mut self, transcript: &str) -> Result<WordOutcome, SessionError> {
        let index = self.listening_index()?;

        if normalize(transcript).is_empty() && self.empty_attempts < self.config.max_empty_retries {
            self.empty_attempts += 1;
            log::debug!(
                "empty transcript for word {index}, retry {}/{}",
                self.empty_attempts,
                self.config.max_empty_retries
            );
            return Ok(WordOutcome::Retry {
                attempt: self.empty_attempts,
            });
        }

        let word = &self.words[index];
        let verification = self.verifier.verify(&[word.text.as_str()], transcript);
        let verdict = verification
            .words
            .into_iter()
            .next()
            .unwrap_or_else(Verdict::missing);

        if verdict.status.is_correct() {
            self.words[index].apply(verdict.status, &verdict.spoken_text);
            return Ok(self.advance(index));
        }

        log::debug!("word {index} mismatched, heard {:?}", verdict.spoken_text);
        self.words[index].spoken_text.clone_from(&verdict.spoken_text);
        Ok(WordOutcome::Mismatch {
            index,
            spoken_text: verdict.spoken_text,
        })
    }

    /// Give up on the `Current` word: mark it `Incorrect` and move on.
    pub fn skip_word(&mut self) -> Result<WordOutcome, SessionError> {
        let index = self.listening_index()?;
        let spoken_text = std::mem::take(&mut self.words[index].spoken_text);
        self.words[index].apply(VerdictStatus::Incorrect, &spoken_text);
        Ok(self.advance(index))
    }

    fn listening_index(&self) -> Result<usize, SessionError> {
        if self.state != SessionState::Listening {
            return Err(SessionError::NotListening(self.state));
        }
        self.current_index()
            .ok_or(SessionError::NotListening(self.state))
    }

    fn advance(&mut self, index: usize) -> WordOutcome {
        let status = self.words[index].status;
        let correct = self
            .words
            .iter()
            .filter(|w| w.status == WordStatus::Correct)
            .count();
        self.score = Score::new(correct, self.words.len());
        self.empty_attempts = 0;

        let next = index + 1;
        let complete = match self.words.get_mut(next) {
            Some(word) => {
                word.status = WordStatus::Current;
                false
            }
            None => {
                self.state = SessionState::Complete;
                true
            }
        };
        log::debug!(
            "word {index} {}, progress {}%",
            status.as_str(),
            self.progress_percent()
        );

        WordOutcome::Advanced {
            index,
            status,
            complete,
        }
    }

    /// Stop listening, keeping the words and any verdicts.
    pub fn stop(&mut self) {
        if self.state == SessionState::Listening {
            log::debug!("session stopped");
            self.state = SessionState::Stopped;
        }
    }

    /// Discard the words and return to `Idle`.
    pub fn reset(&mut self) {
        log::debug!("session reset");
        self.words.clear();
        self.state = SessionState::Idle;
        self.empty_attempts = 0;
        self.score = Score::default();
    }
}
