//! Canonical multi-line layout for a query.
//!
//! Whitespace between tokens collapses to a single space and every clause
//! phrase (see `Clause`) starts a new line, upper-cased. Clause lines sit at
//! indent level 0; continuation clauses (`ON`, `AND`, `OR`, `SET`, ...) and
//! any other line sit one level deeper. The first line is never indented.
//!
//! String literals and comments are copied verbatim, so keywords inside them
//! never break lines. This departs from the older regex-based behaviour,
//! which also matched clause words inside literal text. A line comment always
//! ends its line.
//!
//! `format(format(x)) == format(x)` for every input.
crate::reexport!(clause);

use crate::*;
use itertools::Itertools as _;

/// Layout settings for `format_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Width in spaces of one indent level.
    pub indent_width: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl From<&Config> for FormatOptions {
    fn from(config: &Config) -> Self {
        Self {
            indent_width: config.tab_size,
        }
    }
}

#[derive(Debug, Default)]
struct Line {
    clause: Option<Clause>,
    text: String,
}

impl Line {
    fn opened_by(clause: Clause) -> Self {
        Self {
            clause: Some(clause),
            text: clause.to_string(),
        }
    }

    fn indent_level(&self) -> usize {
        match self.clause {
            Some(clause) if !clause.is_continuation() => 0,
            _ => 1,
        }
    }
}

/// Format `source` with the default two-space indent.
pub fn format(source: &str) -> String {
    format_with(source, &FormatOptions::default())
}

/// Format `source`. Whitespace-only input is returned unchanged.
pub fn format_with(source: &str, options: &FormatOptions) -> String {
    if source.trim().is_empty() {
        return source.to_string();
    }

    let tokens = scan(source);
    let mut lines = Vec::new();
    let mut current = Line::default();
    let mut pending_space = false;
    let mut i = 0;

    while let Some(token) = tokens.get(i) {
        if token.kind == TokenKind::Whitespace {
            pending_space = true;
            i += 1;
            continue;
        }

        if let Some((clause, next)) = Clause::match_at(&tokens, i) {
            lines.push(std::mem::replace(&mut current, Line::opened_by(clause)));
            pending_space = false;
            i = next;
            continue;
        }

        if pending_space && !current.text.is_empty() {
            current.text.push(' ');
        }
        current.text.push_str(token.text);
        pending_space = false;

        if token.kind == TokenKind::LineComment {
            lines.push(std::mem::take(&mut current));
        }
        i += 1;
    }
    lines.push(current);

    let indent = " ".repeat(options.indent_width);
    let formatted = lines
        .iter()
        .filter(|line| !line.text.is_empty())
        .enumerate()
        .map(|(n, line)| {
            let level = if n == 0 { 0 } else { line.indent_level() };
            format!("{}{}", indent.repeat(level), line.text)
        })
        .join("\n");

    debug!(
        "formatted {} bytes into {} lines",
        source.len(),
        formatted.lines().count()
    );
    formatted
}
