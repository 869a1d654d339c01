//! Static checks over a query's token stream.
//!
//! Every rule in `RULES` runs on every call and contributes at most one
//! diagnostic; no rule suppresses another. An empty result means the query
//! is clean.
//!
//! Rules match significant tokens, so comments between words are skipped:
//! `SELECT /* c */ *` and `SELECT*` both count as `SELECT *`.
crate::reexport!(diagnostic);
crate::reexport!(rules);

use crate::*;

/// Run every rule over `source`, reporting in rule declaration order.
pub fn lint(source: &str) -> Vec<Diagnostic> {
    if source.trim().is_empty() {
        return Vec::new();
    }

    let tokens = scan(source);
    let diagnostics: Vec<_> = RULES.iter().filter_map(|rule| rule(&tokens)).collect();
    for d in &diagnostics {
        trace!("{d}");
    }
    debug!("lint produced {} diagnostic(s)", diagnostics.len());
    diagnostics
}
