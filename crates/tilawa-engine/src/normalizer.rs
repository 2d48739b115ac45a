// Arabic text normalization
//
// Canonical form used by every comparison in the engine:
//   1. harakat and Quranic small signs removed
//   2. tatweel removed
//   3. hamza/alif variants -> plain alif
//   4. yaa-like glyphs -> plain yaa
//   5. taa marbuta -> haa
//   6. everything outside the Arabic block (except whitespace) removed,
//      along with the invisible Arabic letter mark
//   7. whitespace runs collapsed to one space, ends trimmed

use tilawa_core::character::{CharType, get_char_type, unify_letter};

/// Normalize raw Arabic (or mixed) text into canonical form.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        match get_char_type(c) {
            CharType::Diacritic
            | CharType::QuranicMark
            | CharType::Tatweel
            | CharType::Format
            | CharType::Foreign => {}
            CharType::Whitespace => {
                // Leading whitespace is dropped; runs collapse into one space.
                pending_space = !result.is_empty();
            }
            CharType::Letter | CharType::Digit | CharType::Punctuation => {
                if pending_space {
                    result.push(' ');
                    pending_space = false;
                }
                result.push(unify_letter(c));
            }
        }
    }

    result
}

/// Number of characters (not bytes) in a normalized string.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_harakat() {
        assert_eq!(normalize("بِسْمِ"), "بسم");
        assert_eq!(normalize("الرَّحِيمِ"), "الرحيم");
    }

    #[test]
    fn normalizes_quranic_bismillah() {
        let input = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";
        assert_eq!(normalize(input), "بسم الله الرحمن الرحيم");
    }

    #[test]
    fn strips_quranic_small_signs() {
        // small high meem, end of ayah with digit
        assert_eq!(normalize("عَلِيمٌۢ"), "عليم");
        assert_eq!(normalize("الرَّحِيمِ ۝"), "الرحيم");
    }

    #[test]
    fn strips_tatweel() {
        assert_eq!(normalize("اللـــه"), "الله");
    }

    #[test]
    fn unifies_alif_variants() {
        assert_eq!(normalize("أَعُوذُ"), "اعوذ");
        assert_eq!(normalize("إِلَيْهِ"), "اليه");
        assert_eq!(normalize("آمَنُوا"), "امنوا");
        assert_eq!(normalize("سَمَاءٌ"), "سماا");
    }

    #[test]
    fn unifies_yaa_and_taa_marbuta() {
        assert_eq!(normalize("عَلَى"), "علي");
        assert_eq!(normalize("الصَّلَاةَ"), "الصلاه");
        assert_eq!(normalize("سُئِلَ"), "سيل");
    }

    #[test]
    fn strips_arabic_letter_mark() {
        assert_eq!(normalize("بسم\u{061C}"), "بسم");
        assert_eq!(normalize("\u{061C}الله \u{061C} اكبر"), "الله اكبر");
        assert_eq!(normalize("\u{061C}"), "");
    }

    #[test]
    fn strips_foreign_characters() {
        assert_eq!(normalize("بسم, الله! (hello)"), "بسم الله");
        assert_eq!(normalize("abc"), "");
    }

    #[test]
    fn keeps_arabic_punctuation() {
        assert_eq!(normalize("الله،"), "الله،");
    }

    #[test]
    fn collapses_and_trims_whitespace() {
        assert_eq!(normalize("  بسم \t\n  الله  "), "بسم الله");
        assert_eq!(normalize("بسم x الله"), "بسم الله");
    }

    #[test]
    fn empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\u{064E}\u{0650}"), "");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
            "  ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ ۝٢ ",
            "mixed نص with Latin, 123 and ـــ tatweel",
            "إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ",
            "",
            "\u{0670}\u{06DD}",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn char_len_counts_characters() {
        assert_eq!(char_len("الله"), 4);
        assert_eq!("الله".len(), 8);
        assert_eq!(char_len(""), 0);
    }
}
