use crate::sql::{keyword::Keyword, token::Token, token_kind::TokenKind, vendor::VendorFunction};
use crate::*;

/// Two character operators, tried before single characters.
const COMPOUND_OPERATORS: [&str; 15] = [
    "<>", "!=", "<=", ">=", "!<", "!>", "||", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=",
];
const OPERATOR_CHARS: &[char] = &['=', '<', '>', '+', '-', '*', '/', '%', '&', '|', '^', '~', '!'];
const PUNCTUATION_CHARS: &[char] = &['(', ')', ',', '.', ';'];

/// Lenient, lossless SQL scanner producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Designed for live editing: input is usually partial or invalid.
/// - One left-to-right pass, longest match at each position, in precedence
///   order: block comment, line comment, string, bracketed identifier,
///   number, word, operator, punctuation, whitespace.
///
/// Behavior:
/// - Words are classified by case-insensitive lookup, vendor functions first,
///   then keywords; anything else is an identifier.
/// - Unterminated comments, strings and bracketed identifiers consume the
///   rest of the input and are flagged `terminated: false`.
/// - Any other character becomes a single-character `Unknown` token.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Concatenating `text` of the returned tokens reproduces `sql` exactly;
///   tokens are contiguous and ordered by `start`.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub fn scan(sql: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut offset = 0;

    while offset < sql.len() {
        let rest = &sql[offset..];
        let (kind, len) = next_token(rest);
        out.push(Token::new(kind, &rest[..len], offset));
        offset += len;
    }

    trace!("scanned {} bytes into {} tokens", sql.len(), out.len());
    out
}

/// Classify the token at the start of `rest` and return its byte length.
/// `rest` is never empty.
fn next_token(rest: &str) -> (TokenKind, usize) {
    let Some(first) = rest.chars().next() else {
        return (TokenKind::Unknown, 0);
    };

    if let Some(body) = rest.strip_prefix("/*") {
        return match body.find("*/") {
            Some(end) => (TokenKind::BlockComment { terminated: true }, end + 4),
            None => (TokenKind::BlockComment { terminated: false }, rest.len()),
        };
    }

    if rest.starts_with("--") {
        let len = rest.find(['\n', '\r']).unwrap_or(rest.len());
        return (TokenKind::LineComment, len);
    }

    if first == '\'' {
        let (terminated, len) = delimited(rest, '\'');
        return (TokenKind::StringLiteral { terminated }, len);
    }

    if first == '[' {
        let (terminated, len) = delimited(rest, ']');
        return (TokenKind::BracketedIdentifier { terminated }, len);
    }

    if first.is_ascii_digit() {
        return (TokenKind::NumberLiteral, number_len(rest));
    }

    if first.is_alphabetic() || first == '_' {
        let len = rest
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        return (classify_word(&rest[..len]), len);
    }

    if let Some(op) = COMPOUND_OPERATORS.iter().find(|op| rest.starts_with(**op)) {
        return (TokenKind::Operator, op.len());
    }

    if OPERATOR_CHARS.contains(&first) {
        return (TokenKind::Operator, 1);
    }

    if PUNCTUATION_CHARS.contains(&first) {
        return (TokenKind::Punctuation, 1);
    }

    if first.is_whitespace() {
        let len = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        return (TokenKind::Whitespace, len);
    }

    (TokenKind::Unknown, first.len_utf8())
}

/// Length of a literal opened by `rest`'s first character and closed by
/// `close`, where a doubled `close` is an escaped character.
fn delimited(rest: &str, close: char) -> (bool, usize) {
    let mut i = 1;
    while let Some(found) = rest[i..].find(close) {
        let at = i + found;
        if rest[at + 1..].starts_with(close) {
            i = at + 2;
            continue;
        }
        return (true, at + 1);
    }
    (false, rest.len())
}

/// Integer part, then an optional `.digits` fraction.
fn number_len(rest: &str) -> usize {
    let digits = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let int = digits(rest);
    let after = &rest[int..];
    match after.strip_prefix('.') {
        Some(frac) if frac.starts_with(|c: char| c.is_ascii_digit()) => int + 1 + digits(frac),
        _ => int,
    }
}

fn classify_word(word: &str) -> TokenKind {
    let upper = word.to_ascii_uppercase();
    if let Some(func) = VendorFunction::from_upper(&upper) {
        return TokenKind::VendorFunction(func);
    }
    Keyword::from_upper(&upper)
        .map(TokenKind::Keyword)
        .unwrap_or(TokenKind::Identifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(sql: &str) -> Vec<(TokenKind, &str)> {
        scan(sql).into_iter().map(|t| (t.kind, t.text)).collect()
    }

    #[test]
    fn basic_select_sequence() {
        let select = TokenKind::Keyword(Keyword::Select);
        let from = TokenKind::Keyword(Keyword::From);
        let ws = TokenKind::Whitespace;
        let ident = TokenKind::Identifier;
        assert_eq!(
            kinds("SELECT a, b FROM t"),
            vec![
                (select, "SELECT"),
                (ws, " "),
                (ident, "a"),
                (TokenKind::Punctuation, ","),
                (ws, " "),
                (ident, "b"),
                (ws, " "),
                (from, "FROM"),
                (ws, " "),
                (ident, "t"),
            ]
        );
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = scan("From MyTable");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(toks.iter().any(|t| t.ident() == Some("MyTable")));
    }

    #[test]
    fn vendor_functions_win_over_keywords() {
        let toks = scan("dateadd(day, 1, getdate())");
        assert!(toks[0].is_vendor(VendorFunction::Dateadd));
        assert_eq!(toks[0].normalized, "DATEADD");
        assert!(toks.iter().any(|t| t.is_vendor(VendorFunction::Getdate)));
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::Day)));
    }

    #[rstest]
    #[case("/* a */", TokenKind::BlockComment { terminated: true }, "/* a */")]
    #[case("/* never closed", TokenKind::BlockComment { terminated: false }, "/* never closed")]
    #[case("-- note\nx", TokenKind::LineComment, "-- note")]
    #[case("'it''s' x", TokenKind::StringLiteral { terminated: true }, "'it''s'")]
    #[case("'open", TokenKind::StringLiteral { terminated: false }, "'open")]
    #[case("''", TokenKind::StringLiteral { terminated: true }, "''")]
    #[case("[My Table] x", TokenKind::BracketedIdentifier { terminated: true }, "[My Table]")]
    #[case("[open", TokenKind::BracketedIdentifier { terminated: false }, "[open")]
    #[case("12.50x", TokenKind::NumberLiteral, "12.50")]
    #[case("12.x", TokenKind::NumberLiteral, "12")]
    #[case("<>1", TokenKind::Operator, "<>")]
    #[case(">=1", TokenKind::Operator, ">=")]
    #[case("*", TokenKind::Operator, "*")]
    #[case(";", TokenKind::Punctuation, ";")]
    #[case("@var", TokenKind::Unknown, "@")]
    #[case("\u{e9}t\u{e9} x", TokenKind::Identifier, "\u{e9}t\u{e9}")]
    #[case(" \t\r\n x", TokenKind::Whitespace, " \t\r\n ")]
    fn first_token(#[case] sql: &str, #[case] kind: TokenKind, #[case] text: &str) {
        let first = scan(sql)[0];
        assert_eq!((first.kind, first.text), (kind, text));
    }

    #[test]
    fn comment_precedence_over_operators() {
        let toks = kinds("a--b\n/*c*/-d");
        assert_eq!(toks[1], (TokenKind::LineComment, "--b"));
        assert_eq!(toks[3], (TokenKind::BlockComment { terminated: true }, "/*c*/"));
        assert_eq!(toks[4], (TokenKind::Operator, "-"));
    }

    #[test]
    fn incomplete_query_tokenization() {
        let toks = scan("SELECT ( FROM x WHERE y = 'abc");
        assert!(toks.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(toks.iter().any(|t| t.ident() == Some("x")));
        assert_eq!(
            toks.last().map(|t| t.kind),
            Some(TokenKind::StringLiteral { terminated: false })
        );
    }

    #[rstest]
    #[case("")]
    #[case("SELECT * FROM [Data] WHERE Status = 'Active'")]
    #[case("/* unterminated")]
    #[case("caf\u{e9} \u{1f600} -- \u{2603}\r\n'x''")]
    #[case("\u{0}\u{7f}$?{}\"#")]
    fn reproduces_input(#[case] sql: &str) {
        let toks = scan(sql);
        let rebuilt: String = toks.iter().map(|t| t.text).collect();
        assert_eq!(rebuilt, sql);
        let mut expected_start = 0;
        for t in &toks {
            assert_eq!(t.start, expected_start);
            assert!(!t.is_empty());
            assert_eq!(&sql[t.start..t.end], t.text);
            expected_start = t.end;
        }
    }

    #[test]
    fn random_inputs_are_covered_exactly() {
        crate::testing::common_init();
        for sql in crate::testing::random_sql(0x5eed, 500) {
            let toks = scan(&sql);
            let rebuilt: String = toks.iter().map(|t| t.text).collect();
            assert_eq!(rebuilt, sql);
            assert!(toks.windows(2).all(|w| w[0].end == w[1].start));
        }
    }
}
