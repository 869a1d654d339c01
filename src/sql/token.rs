//! Token model tying a `TokenKind` to its source slice.
//!
//! A `Token` borrows from the scanned input: `text` is the exact source slice
//! and `normalized` is the canonical spelling used for comparisons (the
//! upper-case vocabulary entry for keywords and vendor functions, the source
//! text otherwise). Neither allocates.
use crate::sql::{keyword::Keyword, token_kind::TokenKind, vendor::VendorFunction};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `&source[start..end] == text`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub normalized: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Construct a new token over `text` starting at byte `start`.
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        let normalized = match kind {
            TokenKind::Keyword(kw) => kw.as_str(),
            TokenKind::VendorFunction(f) => f.as_str(),
            _ => text,
        };
        Self {
            kind,
            text,
            normalized,
            start,
            end: start + text.len(),
        }
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the identifier text if this token is a plain identifier.
    pub fn ident(&self) -> Option<&'a str> {
        matches!(self.kind, TokenKind::Identifier).then_some(self.text)
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub fn is_vendor(&self, func: VendorFunction) -> bool {
        self.kind.is_vendor(func)
    }

    /// Returns the keyword if this token is one.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// True for punctuation or operator tokens spelled exactly `symbol`.
    pub fn is_symbol(&self, symbol: &str) -> bool {
        matches!(self.kind, TokenKind::Punctuation | TokenKind::Operator) && self.text == symbol
    }

    pub fn is_trivia(&self) -> bool {
        self.kind.is_trivia()
    }
}
