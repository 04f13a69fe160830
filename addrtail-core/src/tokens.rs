//! Whitespace tokenization of address tails

use smallvec::SmallVec;
use std::ops::Deref;

/// Most address tails are "CITY STATE ZIP" plus a few extra city words.
const INLINE_TOKENS: usize = 8;

/// Ordered, borrowed tokens of an address tail.
///
/// Position is significant: the extractor assigns roles (zipcode, state,
/// country) by index, so the order of the source text is kept as-is.
/// Tokens are never empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSequence<'a> {
    tokens: SmallVec<[&'a str; INLINE_TOKENS]>,
}

impl<'a> TokenSequence<'a> {
    /// Split `text` on Unicode whitespace, dropping empty pieces
    pub fn new(text: &'a str) -> Self {
        text.split_whitespace().collect()
    }

    /// Borrow the tokens as a slice
    pub fn as_slice(&self) -> &[&'a str] {
        &self.tokens
    }
}

impl<'a> Deref for TokenSequence<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().filter(|t| !t.is_empty()).collect(),
        }
    }
}

/// Tokenize an address tail
pub fn tokenize(text: &str) -> TokenSequence<'_> {
    TokenSequence::new(text)
}
