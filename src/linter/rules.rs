//! Individual lint rules. Each rule sees the whole token stream and reports
//! at most one diagnostic; rules never look at each other's output.

use crate::linter::diagnostic::{Diagnostic, LintMessage};
use crate::sql::{Keyword, Token, TokenKind};

pub type Rule = fn(&[Token<'_>]) -> Option<Diagnostic>;

/// All rules, in the order their diagnostics are reported.
pub const RULES: [Rule; 6] = [
    limit_instead_of_top,
    select_star,
    delete_without_where,
    join_without_on,
    parenthesis_balance,
    unqualified_join_columns,
];

/// Index of the first non-trivia token at or after `from`.
pub fn next_significant(tokens: &[Token<'_>], from: usize) -> Option<usize> {
    (from..tokens.len()).find(|&i| !tokens[i].is_trivia())
}

pub fn count_keyword(tokens: &[Token<'_>], kw: Keyword) -> usize {
    tokens.iter().filter(|t| t.is_keyword(kw)).count()
}

/// `LIMIT n` is not valid here; the dialect spells it `TOP n`.
pub fn limit_instead_of_top(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    tokens.iter().enumerate().find_map(|(i, t)| {
        if !t.is_keyword(Keyword::Limit) {
            return None;
        }
        let gap = tokens.get(i + 1)?;
        let count = tokens.get(i + 2)?;
        (gap.kind == TokenKind::Whitespace && count.kind == TokenKind::NumberLiteral).then(|| {
            Diagnostic::new(
                LintMessage::LimitInsteadOfTop {
                    count: count.text.to_string(),
                },
                t.start..count.end,
            )
        })
    })
}

/// `SELECT` followed by `*`. Comments between the two are skipped, so
/// `SELECT/* all */*` is reported as well.
pub fn select_star(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    tokens.iter().enumerate().find_map(|(i, t)| {
        if !t.is_keyword(Keyword::Select) {
            return None;
        }
        let star = &tokens[next_significant(tokens, i + 1)?];
        star.is_symbol("*")
            .then(|| Diagnostic::new(LintMessage::SelectStar, t.start..star.end))
    })
}

/// A `DELETE` with no `WHERE` anywhere after it.
pub fn delete_without_where(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    let at = tokens.iter().position(|t| t.is_keyword(Keyword::Delete))?;
    let filtered = tokens[at..].iter().any(|t| t.is_keyword(Keyword::Where));
    (!filtered).then(|| {
        Diagnostic::new(
            LintMessage::DeleteWithoutWhere,
            tokens[at].start..tokens[at].end,
        )
    })
}

pub fn join_without_on(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    let joins = count_keyword(tokens, Keyword::Join);
    let ons = count_keyword(tokens, Keyword::On);
    (joins > ons).then(|| Diagnostic::new(LintMessage::JoinWithoutOn { joins, ons }, None))
}

/// Tracks parenthesis depth left to right. The first `)` that would take
/// the depth below zero is reported as an extra closing parenthesis and ends
/// the scan; otherwise any depth left at the end is reported as unclosed,
/// pointing at the innermost open `(`.
pub fn parenthesis_balance(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    let mut open = Vec::new();
    for t in tokens {
        if t.is_symbol("(") {
            open.push(t);
        } else if t.is_symbol(")") && open.pop().is_none() {
            return Some(Diagnostic::new(
                LintMessage::ExtraClosingParentheses(1),
                t.start..t.end,
            ));
        }
    }
    open.last().map(|t| {
        Diagnostic::new(LintMessage::UnclosedParentheses(open.len()), t.start..t.end)
    })
}

/// With joins present, every projected column of the first `SELECT` should
/// be qualified, a call, a wildcard, aliased or a literal.
pub fn unqualified_join_columns(tokens: &[Token<'_>]) -> Option<Diagnostic> {
    if count_keyword(tokens, Keyword::Join) == 0 {
        return None;
    }
    let select = tokens.iter().position(|t| t.is_keyword(Keyword::Select))?;
    let from = select + tokens[select..].iter().position(|t| t.is_keyword(Keyword::From))?;

    split_columns(&tokens[select + 1..from])
        .into_iter()
        .map(strip_modifiers)
        .find(|column| !column.is_empty() && is_ambiguous(column))
        .map(|column| {
            let span = column.first().map(|t| t.start).unwrap_or_default()
                ..column.last().map(|t| t.end).unwrap_or_default();
            Diagnostic::new(LintMessage::UnqualifiedColumns, span)
        })
}

/// Split a projection on commas outside parentheses, dropping trivia.
fn split_columns<'t, 'a>(tokens: &'t [Token<'a>]) -> Vec<Vec<&'t Token<'a>>> {
    let mut columns = vec![Vec::new()];
    let mut depth = 0usize;
    for t in tokens.iter().filter(|t| !t.is_trivia()) {
        if t.is_symbol("(") {
            depth += 1;
        } else if t.is_symbol(")") {
            depth = depth.saturating_sub(1);
        } else if depth == 0 && t.is_symbol(",") {
            columns.push(Vec::new());
            continue;
        }
        if let Some(column) = columns.last_mut() {
            column.push(t);
        }
    }
    columns
}

/// Drop a leading `DISTINCT` / `ALL` and `TOP n [PERCENT]`.
fn strip_modifiers<'t, 'a>(column: Vec<&'t Token<'a>>) -> Vec<&'t Token<'a>> {
    let mut skip = 0;
    loop {
        match column.get(skip).and_then(|t| t.keyword()) {
            Some(Keyword::Distinct | Keyword::All | Keyword::Percent) => skip += 1,
            Some(Keyword::Top) => {
                skip += 1;
                if column
                    .get(skip)
                    .is_some_and(|t| t.kind == TokenKind::NumberLiteral)
                {
                    skip += 1;
                }
            }
            _ => break,
        }
    }
    column.into_iter().skip(skip).collect()
}

fn is_ambiguous(column: &[&Token<'_>]) -> bool {
    let qualified = column.iter().any(|t| {
        t.is_symbol(".") || t.is_symbol("(") || t.is_symbol("*") || t.is_keyword(Keyword::As)
    });
    let literal = match column {
        [only] => matches!(
            only.kind,
            TokenKind::NumberLiteral | TokenKind::StringLiteral { .. }
        ),
        [first, ..] => matches!(first.kind, TokenKind::StringLiteral { .. }),
        [] => false,
    };
    !(qualified || literal)
}
