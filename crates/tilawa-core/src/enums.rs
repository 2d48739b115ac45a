// Shared enums: WordStatus, VerdictStatus, TraceStage

/// Status of one expected word inside a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordStatus {
    /// Not yet reached.
    #[default]
    Pending,
    /// The word the reciter is expected to say next.
    Current,
    /// Verified as recited correctly.
    Correct,
    /// Verified as missing or recited incorrectly.
    Incorrect,
}

impl WordStatus {
    /// Returns `true` once a verdict has been written for the word.
    pub fn is_final(self) -> bool {
        matches!(self, WordStatus::Correct | WordStatus::Incorrect)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WordStatus::Pending => "pending",
            WordStatus::Current => "current",
            WordStatus::Correct => "correct",
            WordStatus::Incorrect => "incorrect",
        }
    }
}

/// Verdict produced by the verification engine for one expected word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerdictStatus {
    Correct,
    Incorrect,
}

impl VerdictStatus {
    pub fn is_correct(self) -> bool {
        self == VerdictStatus::Correct
    }

    /// Lowercase name used by the JSON and JavaScript front ends.
    pub fn as_str(self) -> &'static str {
        match self {
            VerdictStatus::Correct => "correct",
            VerdictStatus::Incorrect => "incorrect",
        }
    }
}

impl From<VerdictStatus> for WordStatus {
    fn from(status: VerdictStatus) -> Self {
        match status {
            VerdictStatus::Correct => WordStatus::Correct,
            VerdictStatus::Incorrect => WordStatus::Incorrect,
        }
    }
}

/// Which stage of verification produced a trace entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceStage {
    /// Correspondence found by the sequence alignment.
    Aligned,
    /// Candidate examined while resolving a word the alignment left unmatched.
    Fallback,
}

impl TraceStage {
    pub fn as_str(self) -> &'static str {
        match self {
            TraceStage::Aligned => "aligned",
            TraceStage::Fallback => "fallback",
        }
    }
}
