// Arabic character classification and letter unification

// ---------------------------------------------------------------------------
// Letters
// ---------------------------------------------------------------------------

/// Plain alif (ا), the target of every hamza/alif variant.
pub const ALIF: char = '\u{0627}';

/// Lam (ل), second letter of the definite article.
pub const LAM: char = '\u{0644}';

/// Plain yaa (ي), the target of every yaa-like glyph.
pub const YAA: char = '\u{064A}';

/// Haa (ه), the target of taa marbuta.
pub const HAA: char = '\u{0647}';

/// Taa marbuta (ة).
pub const TAA_MARBUTA: char = '\u{0629}';

/// Alif maksura (ى).
pub const ALIF_MAKSURA: char = '\u{0649}';

/// Dotless final yaa as used in Persian-style orthography (ی).
pub const DOTLESS_YAA: char = '\u{06CC}';

/// Yaa with hamza above (ئ).
pub const YAA_HAMZA: char = '\u{0626}';

/// Arabic letter mark, an invisible bidi control.
pub const ARABIC_LETTER_MARK: char = '\u{061C}';

/// Tatweel / kashida (ـ), an elongation with no phonetic value.
pub const TATWEEL: char = '\u{0640}';

/// Hamza and alif variants unified to plain alif:
/// isolated hamza, alif with madda, alif with hamza above/below, alif wasla.
const ALIF_VARIANTS: &[char] = &[
    '\u{0621}', // ء HAMZA
    '\u{0622}', // آ ALEF WITH MADDA ABOVE
    '\u{0623}', // أ ALEF WITH HAMZA ABOVE
    '\u{0625}', // إ ALEF WITH HAMZA BELOW
    '\u{0671}', // ٱ ALEF WASLA
];

/// Yaa-like glyphs unified to plain yaa.
const YAA_VARIANTS: &[char] = &[ALIF_MAKSURA, DOTLESS_YAA, YAA_HAMZA];

// ---------------------------------------------------------------------------
// Character type classification
// ---------------------------------------------------------------------------

/// Character type classification for Arabic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharType {
    /// A letter of the Arabic block.
    Letter,
    /// A harakah (short-vowel, tanween, shadda, sukun, superscript alif).
    Diacritic,
    /// A Quranic annotation sign (small high letters, pause marks, ayah end).
    QuranicMark,
    /// The tatweel elongation character.
    Tatweel,
    /// Arabic-Indic or extended Arabic-Indic digit.
    Digit,
    /// Punctuation or sign inside the Arabic block.
    Punctuation,
    /// Any whitespace character.
    Whitespace,
    /// Anything outside the Arabic block (Latin text, ASCII punctuation, ...).
    Foreign,
    /// Invisible formatting control (the Arabic letter mark).
    Format,
}

/// Returns the character type for a given character.
pub fn get_char_type(c: char) -> CharType {
    if c.is_whitespace() {
        return CharType::Whitespace;
    }
    if !is_arabic_block(c) {
        return CharType::Foreign;
    }
    if c == ARABIC_LETTER_MARK {
        return CharType::Format;
    }
    if is_harakah(c) {
        return CharType::Diacritic;
    }
    if is_quranic_mark(c) {
        return CharType::QuranicMark;
    }
    if c == TATWEEL {
        return CharType::Tatweel;
    }
    if is_arabic_digit(c) {
        return CharType::Digit;
    }
    if is_arabic_punctuation(c) {
        return CharType::Punctuation;
    }
    CharType::Letter
}

/// Check whether a character lies in the Arabic Unicode block (U+0600..U+06FF).
pub fn is_arabic_block(c: char) -> bool {
    ('\u{0600}'..='\u{06FF}').contains(&c)
}

/// Check whether a character is a combining harakah.
///
/// Covers fathatan through wavy hamza below (U+064B..U+065F) and the
/// superscript alif (U+0670).
pub fn is_harakah(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Check whether a character is one of the Quranic small signs.
///
/// Covers the honorific and small high letters (U+0610..U+061A) and the
/// Quranic annotation range U+06D6..U+06ED (small high ligatures, pause marks,
/// end of ayah, rub el hizb, sajdah, small low/high letters).
pub fn is_quranic_mark(c: char) -> bool {
    matches!(c, '\u{0610}'..='\u{061A}' | '\u{06D6}'..='\u{06ED}')
}

/// Check whether a character is an Arabic-Indic digit.
pub fn is_arabic_digit(c: char) -> bool {
    matches!(c, '\u{0660}'..='\u{0669}' | '\u{06F0}'..='\u{06F9}')
}

fn is_arabic_punctuation(c: char) -> bool {
    matches!(
        c,
        '\u{0600}'..='\u{060F}' // number signs, comma, date separator, ...
            | '\u{061B}' // semicolon
            | '\u{061D}'..='\u{061F}' // end of text mark, triple dot, question mark
            | '\u{066A}'..='\u{066D}' // percent, decimal/thousands separators, star
            | '\u{06D4}' // full stop
            | '\u{06FD}'..='\u{06FE}'
    )
}

// ---------------------------------------------------------------------------
// Letter unification
// ---------------------------------------------------------------------------

/// Map a letter onto its canonical form.
///
/// - hamza/alif variants become plain alif
/// - yaa-like glyphs become plain yaa
/// - taa marbuta becomes haa
///
/// Every other character is returned unchanged.
pub fn unify_letter(c: char) -> char {
    if ALIF_VARIANTS.contains(&c) {
        ALIF
    } else if YAA_VARIANTS.contains(&c) {
        YAA
    } else if c == TAA_MARBUTA {
        HAA
    } else {
        c
    }
}
