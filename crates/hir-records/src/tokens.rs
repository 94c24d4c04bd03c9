//! Token extraction from delimited free-text cells
//!
//! Location and stakeholder cells hold comma-separated lists such as
//! `"NB, NS , PEI"`. [`extract_tokens`] turns them into a [`TokenSet`].

use serde::Serialize;

/// Separator between tokens in a delimited cell
pub const TOKEN_SEPARATOR: char = ',';

/// Tokens extracted from one delimited cell
///
/// Order follows the source text and duplicates are kept; only membership
/// is meaningful. Membership is exact string equality after trimming, so
/// `"NS"` never matches a `"NSW"` token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenSet(Vec<String>);

impl TokenSet {
    /// Check whether `value` is one of the tokens
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|token| token == value)
    }

    /// Iterate over tokens in source order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Number of tokens, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no tokens were extracted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Split `text` on [`TOKEN_SEPARATOR`], trim each piece and drop empty ones
///
/// Total over all inputs: blank text yields an empty set.
#[must_use]
pub fn extract_tokens(text: &str) -> TokenSet {
    TokenSet(
        text.split(TOKEN_SEPARATOR)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(str::to_owned)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        let tokens = extract_tokens("NB,  NS ,PEI");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["NB", "NS", "PEI"]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(extract_tokens("").is_empty());
        assert!(extract_tokens("   ").is_empty());
        assert!(extract_tokens(" , ,, ").is_empty());
    }

    #[test]
    fn keeps_duplicates() {
        let tokens = extract_tokens("NB, NB");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("NB"));
    }

    #[test]
    fn membership_is_exact() {
        let tokens = extract_tokens("Municipal Government, Province");
        assert!(tokens.contains("Province"));
        assert!(!tokens.contains("Municipal"));
        assert!(!tokens.contains("Prov"));
    }

    #[test]
    fn no_separator_is_single_token() {
        let tokens = extract_tokens("  Atlantic Region ");
        assert_eq!(tokens.iter().collect::<Vec<_>>(), vec!["Atlantic Region"]);
    }
}
