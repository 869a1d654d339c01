//! Cursor-aware completion.
//!
//! `complete` looks only at the text before the cursor and picks the first
//! context that applies (see `CompletionContext`):
//!
//! 1. just inside a parameterized call such as `DATEADD(`: that function's
//!    argument snippets,
//! 2. just after `SELECT`, `FROM`, `WHERE` or a join: that clause's list,
//! 3. otherwise a partial word of two or more characters: keywords, vendor
//!    functions and signatures starting with it, capped at `PREFIX_LIMIT`.
//!
//! Lists from different contexts are never mixed.
crate::reexport!(candidate);
crate::reexport!(catalog);
crate::reexport!(context);
crate::reexport!(menu);

use crate::*;
use std::ops::Range;

/// Most candidates returned by prefix completion.
pub const PREFIX_LIMIT: usize = 12;

/// Candidates for one cursor position, plus the byte range accepting one of
/// them replaces (empty at the cursor unless a partial word is being typed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub candidates: Vec<CompletionCandidate>,
    pub replace: Range<usize>,
}

/// Candidate list for a caret at byte `offset`. Offsets past the end are
/// treated as the end of `source`.
pub fn complete(source: &str, offset: usize) -> Vec<CompletionCandidate> {
    complete_at(source, Cursor::at(offset)).candidates
}

/// Candidates for the text before `cursor`'s start. With a selection, the
/// selected text is part of what accepting a candidate replaces.
pub fn complete_at(source: &str, cursor: Cursor) -> Completion {
    let cursor = cursor.clamp(source);
    let offset = cursor.start();
    let selection_end = cursor.end().unwrap_or(offset);
    let context = CompletionContext::resolve(source, offset);
    trace!("completion context at {offset}: {context:?}");

    let (candidates, replace) = match context {
        CompletionContext::Parameters(func) => (
            parameter_candidates(func).unwrap_or_default().to_vec(),
            offset..selection_end,
        ),
        CompletionContext::Clause(keyword) => (
            clause_candidates(keyword).unwrap_or_default().to_vec(),
            offset..selection_end,
        ),
        CompletionContext::Prefix { word, range } => {
            (prefix_matches(&word), range.start..selection_end)
        }
        CompletionContext::Nothing => (Vec::new(), offset..selection_end),
    };

    debug!("{} completion candidate(s)", candidates.len());
    Completion {
        candidates,
        replace,
    }
}

/// Vocabulary entries starting with the upper-cased `word`, in vocabulary
/// order. Keywords and vendor functions equal to `word` are skipped.
fn prefix_matches(word: &str) -> Vec<CompletionCandidate> {
    let keywords = Keyword::ALL
        .iter()
        .map(|kw| CompletionCandidate::word(kw.as_str(), CandidateCategory::Keyword));
    let vendor = VendorFunction::ALL
        .iter()
        .map(|f| CompletionCandidate::word(f.as_str(), CandidateCategory::Vendor));

    keywords
        .chain(vendor)
        .filter(|c| c.insert_text.starts_with(word) && c.insert_text != word)
        .chain(
            SIGNATURES
                .iter()
                .copied()
                .filter(|sig| sig.insert_text.starts_with(word)),
        )
        .take(PREFIX_LIMIT)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn texts(candidates: &[CompletionCandidate]) -> Vec<&'static str> {
        candidates.iter().map(|c| c.insert_text).collect()
    }

    #[test]
    fn table_list_after_from() {
        let source = "SELECT * FROM ";
        let candidates = complete(source, source.len());
        assert_eq!(candidates, FROM_CANDIDATES.to_vec());
        assert_eq!(candidates.len(), 16);
        assert_eq!(candidates[0].category, CandidateCategory::SystemView);
    }

    #[rstest]
    #[case("SELECT ", "TOP 100")]
    #[case("SELECT a FROM t INNER JOIN ", "[_Subscribers]")]
    #[case("SELECT a FROM t WHERE ", "Status = 'Active'")]
    #[case("SELECT DATEADD(", "day, -30, GETDATE())")]
    #[case("SELECT CONVERT( ", "VARCHAR(10), GETDATE(), 120)")]
    #[case("SELECT DATEDIFF(", "day, StartDate, GETDATE())")]
    fn context_lists(#[case] source: &str, #[case] first: &str) {
        let candidates = complete(source, source.len());
        assert_eq!(candidates.first().map(|c| c.insert_text), Some(first));
    }

    #[test]
    fn parameters_win_over_clauses() {
        // `WHERE DATEADD(` is a call, not a clause position
        let candidates = complete("WHERE x > DATEADD( ", 19);
        assert!(candidates.iter().all(|c| c.category == CandidateCategory::Param));
    }

    #[test]
    fn prefix_orders_keywords_vendor_signatures() {
        let candidates = complete("SELECT co", 9);
        assert_eq!(texts(&candidates), vec![
            "COUNT",
            "CONCAT",
            "CONSTRAINT",
            "CONVERT",
            "COALESCE",
            "COMPRESS",
            "COLUMNPROPERTY",
            "COUNT(",
            "CONCAT(",
            "CONVERT(",
            "COALESCE(",
        ]);
    }

    #[test]
    fn exact_word_is_excluded_but_signature_kept() {
        let candidates = complete("SELECT count", 12);
        assert_eq!(texts(&candidates), vec!["COUNT("]);
    }

    #[test]
    fn prefix_is_capped() {
        let candidates = complete("x = da", 6);
        assert_eq!(candidates.len(), PREFIX_LIMIT);
        assert!(candidates.iter().all(|c| c.insert_text.starts_with("DA")));
    }

    #[rstest]
    #[case("", 0)]
    #[case("SELECT a", 8)]
    #[case("SELECT a FROM t", 99)]
    #[case("SELECT zz", 9)]
    fn no_candidates(#[case] source: &str, #[case] offset: usize) {
        assert_eq!(complete(source, offset), vec![]);
    }

    #[test]
    fn replace_range_covers_partial_word() {
        let completion = complete_at("SELECT a.sel", Cursor::at(12));
        assert_eq!(completion.replace, 7..12);
        assert!(completion.candidates.is_empty());

        let completion = complete_at("select ", Cursor::new(7, Some(7)));
        assert_eq!(completion.replace, 7..7);
        assert_eq!(texts(&completion.candidates), texts(&SELECT_CANDIDATES));
    }

    #[test]
    fn selection_is_replaced_on_accept() {
        let source = "SELECT * FROM [Old] WHERE x = 1";
        let completion = complete_at(source, Cursor::new(14, Some(19)));
        assert_eq!(completion.replace, 14..19);
        assert_eq!(completion.candidates, FROM_CANDIDATES.to_vec());

        let edit = CompletionMenu::open(completion)
            .expect("candidates")
            .accept(source)
            .expect("range still valid");
        assert_eq!(edit.text, "SELECT * FROM [_Subscribers] WHERE x = 1");
    }

    #[test]
    fn total_over_random_input() {
        crate::testing::common_init();
        for source in crate::testing::random_sql(0xc0de, 300) {
            for offset in 0..=source.len() + 1 {
                let completion = complete_at(&source, Cursor::at(offset));
                assert!(completion.replace.end <= source.len(), "{source:?}");
                assert!(completion.candidates.len() <= FROM_CANDIDATES.len());
            }
        }
    }
}
