//! Lenient, lossless SQL scanning.
//!
//! Every other part of the crate (formatting, highlighting, linting,
//! structural analysis and completion) consumes the token stream produced
//! here instead of re-matching the raw text.
//!
//! Modules:
//! - `keyword`    : The standard SQL keyword vocabulary.
//! - `vendor`     : Dialect specific built-in function names.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its source slice.
//! - `tokenizer`  : Single pass O(n) scanner producing a `Vec<Token>` from raw SQL.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing).
//! 2. Lossless: concatenating the text of every token reproduces the input.
//! 3. Never fail; unrecognized characters become `TokenKind::Unknown`.
//!
//! Example:
//! ```rust
//! use querystudio::sql::prelude::*;
//!
//! let tokens = scan("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
//! assert!(tokens.iter().any(|t| t.ident() == Some("my_table")));
//! ```

/// Declares a closed, ordered vocabulary of upper-case words as a `Copy` enum.
macro_rules! vocabulary {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal,)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every entry, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Classify an *upper-cased* word. Returns `None` for anything
            /// outside the vocabulary.
            pub fn from_upper(word: &str) -> Option<Self> {
                match word {
                    $($text => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Case-insensitive variant of `from_upper`.
            pub fn from_word(word: &str) -> Option<Self> {
                Self::from_upper(&word.to_ascii_uppercase())
            }

            /// Canonical upper-case spelling.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;
pub mod vendor;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::scan;
pub use vendor::VendorFunction;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use querystudio::sql::prelude::*;`
pub mod prelude {
    pub use super::{Keyword, Token, TokenKind, VendorFunction, scan};
}
