// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// tilawa-ffi: C-compatible FFI layer for the recitation verifier.
//
// Memory management rules:
// - Opaque `Verifier` pointer: created by `tilawa_verifier_new`, freed by
//   `tilawa_verifier_free`.
// - Returned strings: caller must free with `tilawa_free_str`.
// - Returned string arrays: caller must free with `tilawa_free_str_array`.
// - Returned `TilawaVerification`: caller must free with
//   `tilawa_free_verification`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;
use std::slice;

use tilawa_core::verification::Verification;
use tilawa_engine::Verifier;

/// `TilawaVerdict::status` for a correctly recited word.
pub const TILAWA_CORRECT: c_int = 1;
/// `TilawaVerdict::status` for a missing or wrong word.
pub const TILAWA_INCORRECT: c_int = 0;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a verifier with default options.
#[unsafe(no_mangle)]
pub extern "C" fn tilawa_verifier_new() -> *mut Verifier {
    Box::into_raw(Box::new(Verifier::new()))
}

/// Free a verifier created by `tilawa_verifier_new`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_verifier_free(verifier: *mut Verifier) {
    if !verifier.is_null() {
        drop(unsafe { Box::from_raw(verifier) });
    }
}

// ── Verification ────────────────────────────────────────────────

/// Verdict for one expected word.
#[repr(C)]
pub struct TilawaVerdict {
    /// `TILAWA_CORRECT` or `TILAWA_INCORRECT`.
    pub status: c_int,
    /// Spoken token attributed to the word (empty string when none).
    pub spoken_text: *mut c_char,
}

/// Result of `tilawa_verify`.
#[repr(C)]
pub struct TilawaVerification {
    /// One verdict per expected word, `count` entries.
    pub verdicts: *mut TilawaVerdict,
    pub count: usize,
    pub correct: usize,
    pub total: usize,
}

impl TilawaVerification {
    fn empty() -> Self {
        TilawaVerification {
            verdicts: ptr::null_mut(),
            count: 0,
            correct: 0,
            total: 0,
        }
    }
}

/// Verify a transcript against `expected_len` expected words.
///
/// - `expected`: array of `expected_len` C strings
/// - `transcript`: recognizer output
///
/// Returns a `TilawaVerification` the caller must free with
/// `tilawa_free_verification`. On invalid input (NULL pointers or non-UTF-8
/// strings) returns a result with `count = 0` and, if `error_out` is
/// non-NULL, stores an error string there (free with `tilawa_free_str`).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_verify(
    verifier: *const Verifier,
    expected: *const *const c_char,
    expected_len: usize,
    transcript: *const c_char,
    error_out: *mut *mut c_char,
) -> TilawaVerification {
    let Some(verifier) = (unsafe { verifier.as_ref() }) else {
        set_error(error_out, "verifier is null");
        return TilawaVerification::empty();
    };
    let Some(transcript) = cstr_to_str(transcript) else {
        set_error(error_out, "transcript is null or not valid UTF-8");
        return TilawaVerification::empty();
    };

    let words: Vec<&str> = if expected_len == 0 {
        Vec::new()
    } else if expected.is_null() {
        set_error(error_out, "expected is null");
        return TilawaVerification::empty();
    } else {
        let raw = unsafe { slice::from_raw_parts(expected, expected_len) };
        let mut words = Vec::with_capacity(expected_len);
        for (i, &p) in raw.iter().enumerate() {
            let Some(word) = cstr_to_str(p) else {
                set_error(error_out, &format!("expected[{i}] is null or not valid UTF-8"));
                return TilawaVerification::empty();
            };
            words.push(word);
        }
        words
    };

    verification_to_c(&verifier.verify(&words, transcript))
}

/// Verify a transcript against a whitespace-separated sentence.
///
/// Same ownership and error rules as `tilawa_verify`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_verify_sentence(
    verifier: *const Verifier,
    sentence: *const c_char,
    transcript: *const c_char,
    error_out: *mut *mut c_char,
) -> TilawaVerification {
    let Some(verifier) = (unsafe { verifier.as_ref() }) else {
        set_error(error_out, "verifier is null");
        return TilawaVerification::empty();
    };
    let Some(sentence) = cstr_to_str(sentence) else {
        set_error(error_out, "sentence is null or not valid UTF-8");
        return TilawaVerification::empty();
    };
    let Some(transcript) = cstr_to_str(transcript) else {
        set_error(error_out, "transcript is null or not valid UTF-8");
        return TilawaVerification::empty();
    };
    verification_to_c(&verifier.verify_sentence(sentence, transcript))
}

/// Free a result returned by `tilawa_verify` or `tilawa_verify_sentence`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_free_verification(result: TilawaVerification) {
    if result.verdicts.is_null() {
        return;
    }
    let verdicts = unsafe {
        Box::from_raw(ptr::slice_from_raw_parts_mut(result.verdicts, result.count))
    };
    for v in verdicts.iter() {
        free_c_str(v.spoken_text);
    }
}

// ── Text utilities ──────────────────────────────────────────────

/// Normalize Arabic text.
///
/// Returns a heap-allocated C string. Caller must free with `tilawa_free_str`.
/// Returns NULL on invalid input.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_normalize(text: *const c_char) -> *mut c_char {
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&tilawa_engine::normalize(text))
}

/// Sorted variants of a word.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `tilawa_free_str_array`. Returns NULL on invalid input or when the word
/// normalizes to nothing.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_variants(word: *const c_char) -> *mut *mut c_char {
    let Some(word) = cstr_to_str(word) else {
        return ptr::null_mut();
    };
    let normalized = tilawa_engine::normalize(word);
    if normalized.is_empty() {
        return ptr::null_mut();
    }
    strings_to_c_array(&tilawa_engine::variants(&normalized).sorted())
}

/// Free a heap-allocated C string returned by tilawa functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn tilawa_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn verification_to_c(v: &Verification) -> TilawaVerification {
    let verdicts: Box<[TilawaVerdict]> = v
        .words
        .iter()
        .map(|w| TilawaVerdict {
            status: if w.status.is_correct() {
                TILAWA_CORRECT
            } else {
                TILAWA_INCORRECT
            },
            spoken_text: str_to_c(&w.spoken_text),
        })
        .collect();
    let count = verdicts.len();
    let verdicts = if count == 0 {
        ptr::null_mut()
    } else {
        Box::into_raw(verdicts).cast::<TilawaVerdict>()
    };
    TilawaVerification {
        verdicts,
        count,
        correct: v.score.correct,
        total: v.score.total,
    }
}

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[&str]) -> *mut *mut c_char {
    let ptrs: Box<[*mut c_char]> = strings
        .iter()
        .map(|s| str_to_c(s))
        .chain(std::iter::once(ptr::null_mut()))
        .collect();
    Box::into_raw(ptrs).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut len = 0;
    loop {
        let p = unsafe { *arr.add(len) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        len += 1;
    }
    // The array was allocated as a boxed slice of len + 1 (terminator included).
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, len + 1)) });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    fn read(p: *const c_char) -> String {
        unsafe { CStr::from_ptr(p) }.to_str().unwrap().to_string()
    }

    #[test]
    fn verify_round_trip() {
        let verifier = tilawa_verifier_new();
        let words = [c("بسم"), c("الله"), c("الرحمن")];
        let ptrs: Vec<*const c_char> = words.iter().map(|w| w.as_ptr()).collect();
        let transcript = c("بسم الله");

        let result = unsafe {
            tilawa_verify(
                verifier,
                ptrs.as_ptr(),
                ptrs.len(),
                transcript.as_ptr(),
                ptr::null_mut(),
            )
        };
        assert_eq!(result.count, 3);
        assert_eq!((result.correct, result.total), (2, 3));

        let verdicts = unsafe { slice::from_raw_parts(result.verdicts, result.count) };
        assert_eq!(verdicts[0].status, TILAWA_CORRECT);
        assert_eq!(read(verdicts[0].spoken_text), "بسم");
        assert_eq!(verdicts[2].status, TILAWA_INCORRECT);
        assert_eq!(read(verdicts[2].spoken_text), "");

        unsafe {
            tilawa_free_verification(result);
            tilawa_verifier_free(verifier);
        }
    }

    #[test]
    fn verify_reports_invalid_input() {
        let verifier = tilawa_verifier_new();
        let mut err: *mut c_char = ptr::null_mut();
        let result = unsafe { tilawa_verify(verifier, ptr::null(), 2, ptr::null(), &mut err) };
        assert_eq!(result.count, 0);
        assert!(result.verdicts.is_null());
        assert!(!err.is_null());
        assert_eq!(read(err), "transcript is null or not valid UTF-8");
        unsafe {
            tilawa_free_str(err);
            tilawa_free_verification(result);
            tilawa_verifier_free(verifier);
        }
    }

    #[test]
    fn verify_with_no_expected_words() {
        let verifier = tilawa_verifier_new();
        let transcript = c("بسم");
        let result = unsafe {
            tilawa_verify(verifier, ptr::null(), 0, transcript.as_ptr(), ptr::null_mut())
        };
        assert_eq!((result.count, result.total), (0, 0));
        unsafe {
            tilawa_free_verification(result);
            tilawa_verifier_free(verifier);
        }
    }

    #[test]
    fn verify_sentence_splits_words() {
        let verifier = tilawa_verifier_new();
        let sentence = c("بِسْمِ اللَّهِ");
        let transcript = c("بسم الله");
        let mut err: *mut c_char = ptr::null_mut();
        let result = unsafe {
            tilawa_verify_sentence(verifier, sentence.as_ptr(), transcript.as_ptr(), &mut err)
        };
        assert_eq!((result.correct, result.total), (2, 2));
        assert!(err.is_null());
        unsafe {
            tilawa_free_verification(result);
            tilawa_verifier_free(verifier);
        }
    }

    #[test]
    fn verify_sentence_reports_invalid_input() {
        let verifier = tilawa_verifier_new();
        let transcript = c("بسم");
        let mut err: *mut c_char = ptr::null_mut();
        let result = unsafe {
            tilawa_verify_sentence(verifier, ptr::null(), transcript.as_ptr(), &mut err)
        };
        assert_eq!(result.count, 0);
        assert_eq!(read(err), "sentence is null or not valid UTF-8");
        unsafe { tilawa_free_str(err) };

        let sentence = c("بسم");
        let mut err: *mut c_char = ptr::null_mut();
        let result = unsafe {
            tilawa_verify_sentence(ptr::null(), sentence.as_ptr(), transcript.as_ptr(), &mut err)
        };
        assert!(result.verdicts.is_null());
        assert_eq!(read(err), "verifier is null");
        unsafe {
            tilawa_free_str(err);
            tilawa_verifier_free(verifier);
        }
    }

    #[test]
    fn normalize_returns_owned_string() {
        let input = c("بِسْمِ");
        let out = unsafe { tilawa_normalize(input.as_ptr()) };
        assert_eq!(read(out), "بسم");
        unsafe { tilawa_free_str(out) };
        assert!(unsafe { tilawa_normalize(ptr::null()) }.is_null());
    }

    #[test]
    fn variants_null_terminated() {
        let input = c("والكتاب");
        let arr = unsafe { tilawa_variants(input.as_ptr()) };
        assert!(!arr.is_null());
        let mut forms = Vec::new();
        let mut i = 0;
        loop {
            let p = unsafe { *arr.add(i) };
            if p.is_null() {
                break;
            }
            forms.push(read(p));
            i += 1;
        }
        assert_eq!(forms, vec!["الكتاب", "كتاب", "والكتاب"]);
        unsafe { tilawa_free_str_array(arr) };

        let latin = c("hello");
        assert!(unsafe { tilawa_variants(latin.as_ptr()) }.is_null());
    }
}
