//! Identifier normalization.
//!
//! Free-text names (people, institutions) become slugs: the text is split on
//! punctuation and whitespace, each token is NFKD-decomposed and stripped of
//! non-ASCII characters, and the surviving tokens are joined with `_`. Slugs
//! are composed into dotted identifiers such as `root.mit.jane_doe`.
//!
//! Two names that produce the same slug are the same entity. Collisions are
//! not detected.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

/// Delimiter joining the tokens inside one slug.
pub const SLUG_DELIMITER: &str = "_";

/// Delimiter joining slugs into a hierarchical identifier.
pub const PATH_DELIMITER: &str = ".";

/// How letter case is treated when building slugs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMode {
    /// Fold ASCII letters to lowercase.
    #[default]
    Lower,
    /// Keep letters as written.
    Preserve,
}

/// Turns free text into slugs and dotted identifiers.
///
/// The only setting is the [`CaseMode`]; one normalizer should be used for a
/// whole run so every identifier follows the same rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    case: CaseMode,
}

impl Normalizer {
    /// Creates a normalizer with the given case handling.
    #[must_use]
    pub fn new(case: CaseMode) -> Self {
        Self { case }
    }

    /// Returns a URL-safe slug of `text`, tokens joined by `delimiter`.
    ///
    /// Runs of separator characters split the text. Splitting happens before
    /// decomposition, so punctuation that NFKD produces from compatibility
    /// characters (full-width `！`, for example) stays inside its token.
    /// Returns an empty string when nothing survives.
    #[must_use]
    pub fn slugify(&self, text: &str, delimiter: &str) -> String {
        let tokens: Vec<String> = text
            .split(is_separator)
            .filter_map(|token| {
                let mut folded: String = token.nfkd().filter(char::is_ascii).collect();
                if self.case == CaseMode::Lower {
                    folded.make_ascii_lowercase();
                }
                (!folded.is_empty()).then_some(folded)
            })
            .collect();
        tokens.join(delimiter)
    }

    /// Slugifies each part with `_` and joins the slugs with `delimiter`.
    ///
    /// Every part contributes a component, even one whose slug is empty.
    #[must_use]
    pub fn dotify<I, S>(&self, parts: I, delimiter: &str) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parts
            .into_iter()
            .map(|part| self.slugify(part.as_ref(), SLUG_DELIMITER))
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// Identifier of a person without institution, e.g. `jane_doe`.
    #[must_use]
    pub fn bare_id(&self, name: &str) -> String {
        self.dotify([name], PATH_DELIMITER)
    }

    /// Institution-qualified identifier, e.g. `root.mit.jane_doe`.
    #[must_use]
    pub fn root_id(&self, institution: &str, name: &str) -> String {
        self.dotify(["root", institution, name], PATH_DELIMITER)
    }
}

/// Slugifies with the default (lowercasing) normalizer.
#[must_use]
pub fn slugify(text: &str, delimiter: &str) -> String {
    Normalizer::default().slugify(text, delimiter)
}

/// Dotifies with the default (lowercasing) normalizer.
#[must_use]
pub fn dotify<I, S>(parts: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Normalizer::default().dotify(parts, delimiter)
}

/// Last component of a dotted identifier.
#[must_use]
pub fn bare_name(identifier: &str) -> &str {
    identifier
        .rsplit(PATH_DELIMITER)
        .next()
        .unwrap_or(identifier)
}

fn is_separator(c: char) -> bool {
    matches!(
        c,
        '\t' | ' '
            | '!'
            | '"'
            | '#'
            | '$'
            | '%'
            | '&'
            | '\''
            | '('
            | ')'
            | '*'
            | '-'
            | '/'
            | '<'
            | '='
            | '>'
            | '?'
            | '@'
            | '['
            | '\\'
            | ']'
            | '^'
            | '_'
            | '`'
            | '{'
            | '|'
            | '}'
            | ','
            | '.'
    )
}
