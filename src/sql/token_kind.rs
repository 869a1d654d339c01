//! Token kind definitions for the lenient SQL scanner.
//!
//! Each `TokenKind` variant represents a lexical atom discovered during the
//! single scanning pass. Nothing is ever dropped: whitespace and comments are
//! tokens too, and anything unrecognized becomes `Unknown`.
//!
//! Literal kinds carry a `terminated` flag so that partially typed input
//! (`'abc`, `[My Ta`, `/* ...`) is represented instead of rejected.

use crate::sql::{keyword::Keyword, vendor::VendorFunction};

/// Classification for a token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// A run of whitespace characters.
    #[display("whitespace")]
    Whitespace,
    /// `-- ...` up to (not including) the end of line.
    #[display("line comment")]
    LineComment,
    /// `/* ... */`; unterminated comments run to end of input.
    #[display("block comment")]
    BlockComment { terminated: bool },
    /// Single-quoted string, `''` escapes a quote.
    #[display("string literal")]
    StringLiteral { terminated: bool },
    /// `[...]` delimited identifier.
    #[display("bracketed identifier")]
    BracketedIdentifier { terminated: bool },
    /// Integer or decimal number.
    #[display("number literal")]
    NumberLiteral,
    /// Recognized SQL keyword.
    #[display("keyword {_0}")]
    Keyword(Keyword),
    /// Dialect built-in function name.
    #[display("vendor function {_0}")]
    VendorFunction(VendorFunction),
    /// Table / alias / column / generic identifier.
    #[display("identifier")]
    Identifier,
    /// Comparison, arithmetic or assignment operator.
    #[display("operator")]
    Operator,
    /// `(`, `)`, `,`, `.` or `;`.
    #[display("punctuation")]
    Punctuation,
    /// A single character no rule matched.
    #[display("unknown")]
    Unknown,
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    /// True if this token is the given vendor function.
    pub fn is_vendor(&self, func: VendorFunction) -> bool {
        matches!(self, TokenKind::VendorFunction(f) if *f == func)
    }

    /// Whitespace and comments: tokens that carry no syntax.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment { .. }
        )
    }

    /// Anything that can name a table or column.
    pub fn is_name(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::BracketedIdentifier { .. }
                | TokenKind::VendorFunction(_)
        )
    }
}
