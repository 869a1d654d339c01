use crate::cursor::Cursor;
use crate::sql::{Keyword, Token, TokenKind, VendorFunction, scan};
use std::ops::Range;

/// Shortest partial word that triggers prefix completion.
pub const MIN_PREFIX_LEN: usize = 2;

/// What the text before the cursor asks for. Resolution is a priority chain:
/// the first context that applies wins and the others are not consulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionContext {
    /// Just inside `func(` with nothing typed yet.
    Parameters(VendorFunction),
    /// Just after a clause keyword and some whitespace.
    Clause(Keyword),
    /// A partial word of at least `MIN_PREFIX_LEN` characters. `range` is its
    /// byte span in the source.
    Prefix { word: String, range: Range<usize> },
    /// Nothing worth completing.
    Nothing,
}

impl CompletionContext {
    /// Resolve the context for a caret at byte `offset`, clamped into
    /// `source`.
    pub fn resolve(source: &str, offset: usize) -> Self {
        let offset = Cursor::at(offset).clamp(source).start();
        let before = &source[..offset];
        let tokens = scan(before);

        if let Some(func) = open_call(&tokens) {
            return CompletionContext::Parameters(func);
        }
        if let Some(keyword) = clause_before(&tokens) {
            return CompletionContext::Clause(keyword);
        }

        let word_len = before
            .bytes()
            .rev()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'.')
            .count();
        let start = offset - word_len;
        let partial = &before[start..];
        if partial.len() < MIN_PREFIX_LEN {
            return CompletionContext::Nothing;
        }
        CompletionContext::Prefix {
            word: partial.to_ascii_uppercase(),
            range: start..offset,
        }
    }
}

/// `DATEADD(` (optionally followed by whitespace) at the very end.
fn open_call(tokens: &[Token<'_>]) -> Option<VendorFunction> {
    let rest = match tokens {
        [head @ .., last] if last.kind == TokenKind::Whitespace => head,
        _ => tokens,
    };
    match rest {
        [.., func, paren] if paren.is_symbol("(") => match func.kind {
            TokenKind::VendorFunction(
                f @ (VendorFunction::Dateadd
                | VendorFunction::Convert
                | VendorFunction::Hashbytes
                | VendorFunction::Datediff),
            ) => Some(f),
            _ => None,
        },
        _ => None,
    }
}

/// `SELECT `, `FROM `, `WHERE ` or `... JOIN ` at the very end.
fn clause_before(tokens: &[Token<'_>]) -> Option<Keyword> {
    match tokens {
        [.., keyword, gap] if gap.kind == TokenKind::Whitespace => match keyword.keyword()? {
            kw @ (Keyword::Select | Keyword::From | Keyword::Where | Keyword::Join) => Some(kw),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at_end(source: &str) -> CompletionContext {
        CompletionContext::resolve(source, source.len())
    }

    #[rstest]
    #[case("SELECT DATEADD(", VendorFunction::Dateadd)]
    #[case("where x > dateadd(  ", VendorFunction::Dateadd)]
    #[case("SELECT CONVERT(", VendorFunction::Convert)]
    #[case("HASHBYTES(", VendorFunction::Hashbytes)]
    #[case("DATEDIFF(\n", VendorFunction::Datediff)]
    fn parameters(#[case] source: &str, #[case] func: VendorFunction) {
        assert_eq!(at_end(source), CompletionContext::Parameters(func));
    }

    #[rstest]
    #[case("SELECT DATEADD(d")]
    #[case("SELECT DATEADD (")]
    #[case("SELECT GETDATE(")]
    #[case("SELECT DATEADD(day, 1, x)")]
    fn not_parameters(#[case] source: &str) {
        assert!(!matches!(at_end(source), CompletionContext::Parameters(_)));
    }

    #[rstest]
    #[case("SELECT ", Keyword::Select)]
    #[case("select a\nfrom\t", Keyword::From)]
    #[case("SELECT a FROM t LEFT OUTER JOIN ", Keyword::Join)]
    #[case("SELECT a FROM t WHERE  ", Keyword::Where)]
    fn clauses(#[case] source: &str, #[case] keyword: Keyword) {
        assert_eq!(at_end(source), CompletionContext::Clause(keyword));
    }

    #[rstest]
    #[case("SELECT")]
    #[case("ORDER BY ")]
    #[case("SELECT 'FROM ")]
    #[case("-- FROM ")]
    fn not_clauses(#[case] source: &str) {
        assert!(!matches!(at_end(source), CompletionContext::Clause(_)));
    }

    #[test]
    fn prefix_spans_word_and_dots() {
        let source = "SELECT s.Em";
        assert_eq!(at_end(source), CompletionContext::Prefix {
            word: "S.EM".to_string(),
            range: 7..11,
        });
    }

    #[test]
    fn prefix_stops_at_cursor() {
        let source = "SELECT sel FROM t";
        assert_eq!(
            CompletionContext::resolve(source, 9),
            CompletionContext::Prefix {
                word: "SE".to_string(),
                range: 7..9,
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case("SELECT a")]
    #[case("x = (")]
    #[case("é")]
    fn nothing(#[case] source: &str) {
        assert_eq!(at_end(source), CompletionContext::Nothing);
    }
}
