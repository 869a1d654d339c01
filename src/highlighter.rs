//! Syntax classification and markup rendering.
//!
//! `classify` computes the structured result: one `Span` per token, each with
//! at most one `HighlightClass`. `highlight` renders those spans to markup.
//! Because spans come straight from the token stream they never overlap or
//! nest, and every input character lands in exactly one span.
//!
//! Precedence (comment > string > number > vendor function > keyword >
//! bracketed identifier > operator > parenthesis) is enforced by the scanner:
//! a word is classified as a vendor function before it can be a keyword, and
//! nothing inside a comment or string is classified separately. This departs
//! from the older regex-based behaviour, which also tagged keywords inside
//! literal text; spans here never nest.
use crate::*;
use std::ops::Range;

/// Semantic class attached to a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum HighlightClass {
    #[display("sql-comment")]
    Comment,
    #[display("sql-string")]
    String,
    #[display("sql-number")]
    Number,
    #[display("sql-vendor")]
    VendorFunction,
    #[display("sql-keyword")]
    Keyword,
    #[display("sql-table")]
    Table,
    #[display("sql-operator")]
    Operator,
    #[display("sql-bracket")]
    Bracket,
}

/// A contiguous byte range of the source and its class, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub range: Range<usize>,
    pub class: Option<HighlightClass>,
}

impl HighlightClass {
    /// Class for a token, `None` for text rendered bare.
    pub fn of(token: &Token<'_>) -> Option<Self> {
        match token.kind {
            TokenKind::LineComment | TokenKind::BlockComment { .. } => Some(Self::Comment),
            TokenKind::StringLiteral { .. } => Some(Self::String),
            TokenKind::NumberLiteral => Some(Self::Number),
            TokenKind::VendorFunction(_) => Some(Self::VendorFunction),
            TokenKind::Keyword(_) => Some(Self::Keyword),
            TokenKind::BracketedIdentifier { .. } => Some(Self::Table),
            TokenKind::Operator => Some(Self::Operator),
            TokenKind::Punctuation if matches!(token.text, "(" | ")") => Some(Self::Bracket),
            TokenKind::Punctuation
            | TokenKind::Whitespace
            | TokenKind::Identifier
            | TokenKind::Unknown => None,
        }
    }
}

/// Classify `source` into non-overlapping spans covering all of it.
/// Adjacent unclassified tokens are merged into one bare span.
pub fn classify(source: &str) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for token in scan(source) {
        let class = HighlightClass::of(&token);
        match spans.last_mut() {
            Some(last) if class.is_none() && last.class.is_none() => last.range.end = token.end,
            _ => spans.push(Span {
                range: token.start..token.end,
                class,
            }),
        }
    }
    spans
}

/// Render `source` as markup: classified spans become
/// `<span class="...">...</span>`, everything else is emitted bare. Text is
/// escaped (`&`, `<`, `>`) in both cases.
pub fn highlight(source: &str) -> String {
    let spans = classify(source);
    let mut out = String::with_capacity(source.len() * 2);
    for span in &spans {
        let text = &source[span.range.clone()];
        match span.class {
            Some(class) => {
                out.push_str(&format!("<span class=\"{class}\">"));
                escape_into(text, &mut out);
                out.push_str("</span>");
            }
            None => escape_into(text, &mut out),
        }
    }
    trace!("highlighted {} spans", spans.len());
    out
}

fn escape_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    /// Drop tags and undo escaping.
    fn strip_markup(markup: &str) -> String {
        let mut out = String::new();
        let mut rest = markup;
        while let Some(open) = rest.find('<') {
            out.push_str(&rest[..open]);
            let close = rest[open..].find('>').map_or(rest.len(), |c| open + c + 1);
            rest = &rest[close..];
        }
        out.push_str(rest);
        out.replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    #[test]
    fn classifies_by_precedence() {
        let out = highlight("SELECT GETDATE(), 1 -- now");
        assert_eq!(
            out,
            "<span class=\"sql-keyword\">SELECT</span> \
             <span class=\"sql-vendor\">GETDATE</span>\
             <span class=\"sql-bracket\">(</span>\
             <span class=\"sql-bracket\">)</span>, \
             <span class=\"sql-number\">1</span> \
             <span class=\"sql-comment\">-- now</span>"
        );
    }

    #[test]
    fn keeps_original_case() {
        let out = highlight("select x");
        assert!(out.starts_with("<span class=\"sql-keyword\">select</span>"));
    }

    #[test]
    fn nothing_inside_literals_is_classified() {
        let out = highlight("'select 1' /* from 2 */");
        assert_eq!(
            out,
            "<span class=\"sql-string\">'select 1'</span> \
             <span class=\"sql-comment\">/* from 2 */</span>"
        );
    }

    #[test]
    fn escapes_markup() {
        let out = highlight("a<>b & [x<y]");
        assert_eq!(
            out,
            "a<span class=\"sql-operator\">&lt;&gt;</span>b \
             <span class=\"sql-operator\">&amp;</span> \
             <span class=\"sql-table\">[x&lt;y]</span>"
        );
    }

    #[test]
    fn bare_tokens_merge() {
        let spans = classify("a.b, c");
        assert_eq!(
            spans,
            vec![Span {
                range: 0..6,
                class: None
            }]
        );
    }

    #[rstest]
    #[case("")]
    #[case("SELECT * FROM [Data] WHERE Status = 'Active' AND x >= 1.5")]
    #[case("'unterminated <b>")]
    #[case("<span class=\"x\">&amp;</span>")]
    #[case("caf\u{e9} \u{1f600} /* open")]
    fn covers_every_character(#[case] source: &str) {
        assert_eq!(strip_markup(&highlight(source)), source);
    }

    #[test]
    fn covers_random_input() {
        crate::testing::common_init();
        for source in crate::testing::random_sql(0xabcd, 500) {
            assert_eq!(strip_markup(&highlight(&source)), source);
            let spans = classify(&source);
            assert!(spans.windows(2).all(|w| w[0].range.end == w[1].range.start));
            assert_eq!(spans.last().map_or(0, |s| s.range.end), source.len());
        }
    }
}
