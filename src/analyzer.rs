//! Structural summary of a query: what it touches, how it is shaped, and a
//! coarse complexity bucket with improvement hints.
//!
//! Everything is counted over significant tokens, so words inside strings and
//! comments never contribute.
crate::reexport!(report);

use crate::*;
use itertools::Itertools as _;

/// Summarize `source`, or `None` when it is empty or whitespace only.
pub fn analyze(source: &str) -> Option<AnalysisResult> {
    if source.trim().is_empty() {
        return None;
    }

    let tokens = scan(source);
    let followed_by = |at: usize, symbol: &str| {
        next_significant(&tokens, at + 1).is_some_and(|next| tokens[next].is_symbol(symbol))
    };

    let query_type = QueryType::from_keyword(
        next_significant(&tokens, 0).and_then(|first| tokens[first].keyword()),
    );

    let all = tokens.as_slice();
    let tables = [Keyword::From, Keyword::Join]
        .into_iter()
        .flat_map(move |kw| {
            all.iter()
                .positions(move |t| t.is_keyword(kw))
                .filter_map(move |at| qualified_name_after(all, at))
        })
        .collect();

    let join_count = count_keyword(&tokens, Keyword::Join);
    let condition_count = tokens
        .iter()
        .filter(|t| t.keyword().is_some_and(Keyword::is_conjunction))
        .count()
        + usize::from(tokens.iter().any(|t| t.is_keyword(Keyword::Where)));

    let subquery_count = tokens
        .iter()
        .positions(|t| t.is_symbol("("))
        .filter(|&at| {
            next_significant(&tokens, at + 1).is_some_and(|n| tokens[n].is_keyword(Keyword::Select))
        })
        .count();

    let aggregations = Keyword::AGGREGATES
        .into_iter()
        .filter(|&agg| {
            tokens
                .iter()
                .positions(|t| t.is_keyword(agg))
                .any(|at| followed_by(at, "("))
        })
        .collect();

    let window_function_count = tokens
        .iter()
        .positions(|t| t.is_keyword(Keyword::Over))
        .filter(|&at| followed_by(at, "("))
        .count();

    let mut result = AnalysisResult {
        query_type,
        tables,
        join_count,
        subquery_count,
        condition_count,
        aggregations,
        window_function_count,
        complexity: Complexity::Simple,
        suggestions: Vec::new(),
    };
    result.complexity = Complexity::from_score(result.score());

    let has = |kw| tokens.iter().any(|t: &Token<'_>| t.is_keyword(kw));
    let leading_wildcard = tokens
        .iter()
        .positions(|t| t.is_keyword(Keyword::Like))
        .filter_map(|at| next_significant(&tokens, at + 1))
        .any(|n| {
            matches!(tokens[n].kind, TokenKind::StringLiteral { .. })
                && tokens[n].text.starts_with("'%")
        });

    result.suggestions = [
        (join_count > 2 && !has(Keyword::Top), Advice::LimitManyJoins),
        (subquery_count > 1, Advice::PreferCtes),
        (join_count > 0 && !has(Keyword::Index), Advice::IndexJoinColumns),
        (select_star(&tokens).is_some(), Advice::NameColumns),
        (result.complexity == Complexity::Complex, Advice::TryWithTop),
        (leading_wildcard, Advice::LeadingWildcard),
    ]
    .into_iter()
    .filter_map(|(triggered, advice)| triggered.then_some(advice))
    .collect();

    debug!(
        "analyzed {} query: score {} ({})",
        result.query_type,
        result.score(),
        result.complexity
    );
    Some(result)
}

/// The dotted name right after the keyword at `at`, e.g. `dbo.[Orders]`.
fn qualified_name_after(tokens: &[Token<'_>], at: usize) -> Option<String> {
    let mut i = next_significant(tokens, at + 1)?;
    let mut name = String::new();
    loop {
        let part = tokens.get(i).filter(|t| t.kind.is_name())?;
        name.push_str(part.text);
        match tokens.get(i + 1) {
            Some(dot) if dot.is_symbol(".") => {
                name.push('.');
                i += 2;
            }
            _ => break,
        }
    }
    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn counts_joins_conditions_and_aggregates() {
        let sql = "SELECT COUNT(*) FROM a JOIN b ON a.k=b.k JOIN c ON b.k=c.k WHERE a.x=1 AND b.y=2";
        let result = analyze(sql).expect("non-empty");
        assert_eq!(result.query_type, QueryType::Select);
        assert_eq!(result.tables, vec!["a", "b", "c"]);
        assert_eq!(result.join_count, 2);
        assert_eq!(result.condition_count, 2);
        assert_eq!(result.aggregations, vec![Keyword::Count]);
        assert_eq!(result.score(), 7);
        assert_eq!(result.complexity, Complexity::Medium);
        assert_eq!(result.suggestions, vec![Advice::IndexJoinColumns]);
    }

    #[rstest]
    #[case("")]
    #[case(" \n\t ")]
    fn blank_is_absent(#[case] source: &str) {
        assert_eq!(analyze(source), None);
    }

    #[rstest]
    #[case("  select 1", QueryType::Select)]
    #[case("-- note\nINSERT INTO t VALUES (1)", QueryType::Insert)]
    #[case("update t set a = 1", QueryType::Update)]
    #[case("delete from t", QueryType::Delete)]
    #[case("WITH x AS (SELECT 1) SELECT * FROM x", QueryType::Unknown)]
    #[case("selected", QueryType::Unknown)]
    fn query_types(#[case] source: &str, #[case] expected: QueryType) {
        assert_eq!(analyze(source).map(|r| r.query_type), Some(expected));
    }

    #[test]
    fn tables_keep_duplicates_and_qualifiers() {
        let sql = "SELECT * FROM dbo.[Orders] o JOIN [_Open] x ON 1=1 \
                   WHERE o.id IN (SELECT id FROM dbo.[Orders])";
        let result = analyze(sql).expect("non-empty");
        assert_eq!(result.tables, vec!["dbo.[Orders]", "dbo.[Orders]", "[_Open]"]);
        assert_eq!(result.subquery_count, 1);
    }

    #[test]
    fn words_in_literals_do_not_count() {
        let sql = "SELECT 'a JOIN b AND (select' AS s /* OVER( */ FROM t";
        let result = analyze(sql).expect("non-empty");
        assert_eq!(result.join_count, 0);
        assert_eq!(result.condition_count, 0);
        assert_eq!(result.subquery_count, 0);
        assert_eq!(result.window_function_count, 0);
    }

    #[test]
    fn windows_and_spaced_calls() {
        let sql = "SELECT ROW_NUMBER() OVER (ORDER BY a), RANK() OVER(ORDER BY b), \
                   MAX (c), sum(d), MIN FROM t";
        let result = analyze(sql).expect("non-empty");
        assert_eq!(result.window_function_count, 2);
        assert_eq!(result.aggregations, vec![Keyword::Sum, Keyword::Max]);
    }

    #[test]
    fn every_trigger_fires_in_order() {
        let sql = "SELECT * FROM a JOIN b ON 1=1 JOIN c ON 1=1 JOIN d ON 1=1 \
                   WHERE a.x IN (SELECT x FROM e) AND a.y IN (SELECT y FROM f) \
                   AND a.n LIKE '%z'";
        let result = analyze(sql).expect("non-empty");
        assert_eq!(result.complexity, Complexity::Complex);
        assert_eq!(result.suggestions, vec![
            Advice::LimitManyJoins,
            Advice::PreferCtes,
            Advice::IndexJoinColumns,
            Advice::NameColumns,
            Advice::TryWithTop,
            Advice::LeadingWildcard,
        ]);
    }

    #[test]
    fn top_and_index_hints_suppress_advice() {
        let sql = "SELECT TOP 5 a.x FROM a WITH (INDEX(ix)) JOIN b ON 1=1 JOIN c ON 1=1 JOIN d ON 1=1";
        let result = analyze(sql).expect("non-empty");
        assert!(!result.suggestions.contains(&Advice::LimitManyJoins));
        assert!(!result.suggestions.contains(&Advice::IndexJoinColumns));
    }

    #[test]
    fn another_join_never_lowers_complexity() {
        let mut sql = String::from("SELECT a.x FROM a WHERE a.y = 1");
        let mut last = analyze(&sql).expect("non-empty");
        for n in 0..6 {
            let at = sql.find(" WHERE").unwrap_or(sql.len());
            sql.insert_str(at, &format!(" JOIN t{n} ON t{n}.k = a.k"));
            let next = analyze(&sql).expect("non-empty");
            assert!(next.score() >= last.score(), "{sql}");
            assert!(next.complexity >= last.complexity, "{sql}");
            last = next;
        }
    }

    #[test]
    fn renders_summary() {
        let text = analyze("SELECT * FROM t").expect("non-empty").to_string();
        assert!(text.starts_with("type:        SELECT\ntables:      t\n"), "{text}");
        assert!(text.ends_with(&format!("- {}", Advice::NameColumns)), "{text}");
    }
}
