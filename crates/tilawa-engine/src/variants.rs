// Prefix variant generation
//
// Recognizers attach or drop the definite article and the single-letter
// conjunctions/prepositions inconsistently. Treating those closed-class
// prefixes as optional gives match tolerance without merging distinct
// content words.

use hashbrown::HashSet;

/// The two-letter definite article prefix (alif + lam).
pub const DEFINITE_ARTICLE: &str = "\u{0627}\u{0644}";

/// Single-letter attachable prefixes.
pub const ATTACHABLE_PREFIXES: [char; 6] = [
    '\u{0648}', // و wa-  "and"
    '\u{0641}', // ف fa-  "so, then"
    '\u{0628}', // ب bi-  "with, by"
    '\u{0643}', // ك ka-  "like"
    '\u{0644}', // ل li-  "for, to"
    '\u{0633}', // س sa-  future marker
];

/// Every normalized surface form attributable to one source word.
///
/// Never empty: the source word itself is always a member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    forms: HashSet<String>,
}

impl VariantSet {
    pub fn contains(&self, form: &str) -> bool {
        self.forms.contains(form)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Iterate over the forms in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// The forms in sorted order, for stable display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut forms: Vec<&str> = self.iter().collect();
        forms.sort_unstable();
        forms
    }
}

impl IntoIterator for VariantSet {
    type Item = String;
    type IntoIter = hashbrown::hash_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.forms.into_iter()
    }
}

/// Strip the definite article, if the remainder is non-empty.
fn strip_article(word: &str) -> Option<&str> {
    word.strip_prefix(DEFINITE_ARTICLE)
        .filter(|rest| !rest.is_empty())
}

/// Expand one normalized word into its prefix variants.
///
/// - the word itself
/// - the word without the definite article
/// - for each attachable prefix letter the word starts with (word longer
///   than one letter): the word without that letter, and if the remainder
///   starts with the definite article, the remainder without it as well
pub fn variants(word: &str) -> VariantSet {
    let mut forms = HashSet::new();
    forms.insert(word.to_string());

    if let Some(rest) = strip_article(word) {
        forms.insert(rest.to_string());
    }

    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        let rest = chars.as_str();
        if ATTACHABLE_PREFIXES.contains(&first) && !rest.is_empty() {
            forms.insert(rest.to_string());
            if let Some(bare) = strip_article(rest) {
                forms.insert(bare.to_string());
            }
        }
    }

    VariantSet { forms }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(word: &str) -> Vec<String> {
        variants(word).sorted().into_iter().map(String::from).collect()
    }

    #[test]
    fn always_contains_word_itself() {
        for word in ["كتاب", "من", "الله", "و", ""] {
            assert!(variants(word).contains(word), "{word:?}");
        }
    }

    #[test]
    fn plain_word_has_single_variant() {
        assert_eq!(sorted("كتاب").len(), 2); // ك is a prefix letter: كتاب, تاب
        assert_eq!(sorted("رحمن"), vec!["رحمن"]);
        assert_eq!(sorted("من"), vec!["من"]);
    }

    #[test]
    fn strips_definite_article() {
        let v = variants("الرحمن");
        assert!(v.contains("الرحمن"));
        assert!(v.contains("رحمن"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn bare_article_is_not_stripped_to_empty() {
        let v = variants("ال");
        assert_eq!(v.len(), 1);
        assert!(v.contains("ال"));
    }

    #[test]
    fn strips_single_letter_prefix() {
        let v = variants("وقال");
        assert!(v.contains("وقال"));
        assert!(v.contains("قال"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn chains_prefix_and_article() {
        // wa + al + kitab
        let v = variants("والكتاب");
        assert!(v.contains("والكتاب"));
        assert!(v.contains("الكتاب"));
        assert!(v.contains("كتاب"));
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn bi_prefix_chain() {
        // bi + al + hamd
        let v = variants("بالحمد");
        assert!(v.contains("الحمد"));
        assert!(v.contains("حمد"));
    }

    #[test]
    fn single_prefix_letter_alone_is_not_stripped() {
        let v = variants("و");
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn lam_prefix_word() {
        // "lillah" normalized: لله -> له
        let v = variants("لله");
        assert!(v.contains("لله"));
        assert!(v.contains("له"));
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn article_and_lam_overlap() {
        // الله starts with the article (-> له); ا is not a prefix letter.
        assert_eq!(sorted("الله"), vec!["الله", "له"]);
    }

    #[test]
    fn variants_are_deterministic() {
        assert_eq!(variants("والكتاب"), variants("والكتاب"));
    }
}
