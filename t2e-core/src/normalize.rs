//! Turning free database text into identifier fragments.
//!
//! The pipeline is: diacritic removal, stop-word removal, then
//! lowercase/underscore/PascalCase segmentation.

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::utils::{to_pascal_case, to_underscore};

/// Articles and prepositions that never contribute to an identifier.
pub const BUILTIN_STOP_WORDS: &[&str] = &["da", "de", "di", "do", "du", "of", "the"];

/// Ordered set of lowercase words dropped from descriptions.
///
/// Always starts with [`BUILTIN_STOP_WORDS`]; caller-supplied words are
/// appended after them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: Vec<String>,
}

impl StopWords {
    /// The built-in set only.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_STOP_WORDS.iter().copied())
    }

    /// The built-in set followed by `additional`.
    pub fn with_additional<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::builtin();
        set.extend(additional);
        set
    }

    /// A set made of exactly `words`, without the built-in entries.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Append words to the set, keeping their order.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Whether `token` is a stop word (case-insensitive, whole token).
    pub fn contains(&self, token: &str) -> bool {
        let lowered = token.to_lowercase();
        self.words.iter().any(|w| *w == lowered)
    }

    /// The words in order, lowercased.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Remove every stop-word token from `text`.
    ///
    /// Tokens are split on single spaces and the survivors are rejoined with
    /// single spaces, in their original order.
    pub fn strip(&self, text: &str) -> String {
        text.split(' ')
            .filter(|token| !self.contains(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Strip diacritics, mapping accented letters to their base letter
/// (e.g., "São" -> "Sao").
///
/// Blank input is returned unchanged.
pub fn remove_diacritics(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }

    text.nfd()
        .filter(|c| c.general_category() != GeneralCategory::NonspacingMark)
        .nfc()
        .collect()
}

/// Normalize a description into a PascalCase identifier fragment.
///
/// # Example
///
/// ```
/// use table2enum_core::{StopWords, normalize};
///
/// let words = StopWords::builtin();
/// assert_eq!(normalize("São Paulo City", &words), "SaoPauloCity");
/// assert_eq!(normalize("Rio de Janeiro", &words), "RioJaneiro");
/// ```
pub fn normalize(raw: &str, stop_words: &StopWords) -> String {
    if raw.trim().is_empty() {
        return raw.to_string();
    }

    let plain = remove_diacritics(raw);
    let filtered = stop_words.strip(&plain);
    to_pascal_case(&to_underscore(&filtered))
}
