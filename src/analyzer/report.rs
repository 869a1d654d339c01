use crate::sql::Keyword;

/// Statement kind, taken from the first significant token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum QueryType {
    #[display("SELECT")]
    Select,
    #[display("INSERT")]
    Insert,
    #[display("UPDATE")]
    Update,
    #[display("DELETE")]
    Delete,
    #[default]
    #[display("UNKNOWN")]
    Unknown,
}

impl QueryType {
    pub fn from_keyword(keyword: Option<Keyword>) -> Self {
        match keyword {
            Some(Keyword::Select) => QueryType::Select,
            Some(Keyword::Insert) => QueryType::Insert,
            Some(Keyword::Update) => QueryType::Update,
            Some(Keyword::Delete) => QueryType::Delete,
            _ => QueryType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Complexity {
    #[display("simple")]
    Simple,
    #[display("medium")]
    Medium,
    #[display("complex")]
    Complex,
}

impl Complexity {
    pub const SIMPLE_MAX: usize = 3;
    pub const MEDIUM_MAX: usize = 8;

    pub const fn from_score(score: usize) -> Self {
        if score <= Self::SIMPLE_MAX {
            Complexity::Simple
        } else if score <= Self::MEDIUM_MAX {
            Complexity::Medium
        } else {
            Complexity::Complex
        }
    }
}

/// An improvement hint. Variants are declared in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Advice {
    #[display("Consider adding TOP to limit results with multiple JOINs.")]
    LimitManyJoins,
    #[display("Multiple subqueries detected: consider using CTEs (WITH clause) for readability.")]
    PreferCtes,
    #[display("Ensure JOIN columns are indexed for better performance.")]
    IndexJoinColumns,
    #[display("Replace SELECT * with specific columns to reduce data transfer.")]
    NameColumns,
    #[display("Complex query: test with TOP 10 first to verify logic before full execution.")]
    TryWithTop,
    #[display(
        "Leading wildcard in LIKE prevents index usage: consider alternatives if performance is slow."
    )]
    LeadingWildcard,
}

/// Structural summary of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub query_type: QueryType,
    /// Names following `FROM`, then names following `JOIN`, as written.
    pub tables: Vec<String>,
    pub join_count: usize,
    pub subquery_count: usize,
    pub condition_count: usize,
    /// Aggregates called at least once, in `Keyword::AGGREGATES` order.
    pub aggregations: Vec<Keyword>,
    pub window_function_count: usize,
    pub complexity: Complexity,
    pub suggestions: Vec<Advice>,
}

impl AnalysisResult {
    /// `2×joins + 3×subqueries + conditions + |aggregates| + 2×windows`.
    pub fn score(&self) -> usize {
        2 * self.join_count
            + 3 * self.subquery_count
            + self.condition_count
            + self.aggregations.len()
            + 2 * self.window_function_count
    }
}

impl std::fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use itertools::Itertools as _;

        writeln!(f, "type:        {}", self.query_type)?;
        writeln!(f, "tables:      {}", self.tables.iter().join(", "))?;
        writeln!(f, "joins:       {}", self.join_count)?;
        writeln!(f, "subqueries:  {}", self.subquery_count)?;
        writeln!(f, "conditions:  {}", self.condition_count)?;
        writeln!(f, "aggregates:  {}", self.aggregations.iter().join(", "))?;
        writeln!(f, "windows:     {}", self.window_function_count)?;
        write!(f, "complexity:  {} ({})", self.complexity, self.score())?;
        for advice in &self.suggestions {
            write!(f, "\n- {advice}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, Complexity::Simple)]
    #[case(3, Complexity::Simple)]
    #[case(4, Complexity::Medium)]
    #[case(8, Complexity::Medium)]
    #[case(9, Complexity::Complex)]
    fn thresholds(#[case] score: usize, #[case] expected: Complexity) {
        assert_eq!(Complexity::from_score(score), expected);
    }

    #[test]
    fn query_type_names() {
        assert_eq!(QueryType::from_keyword(Some(Keyword::Delete)).to_string(), "DELETE");
        assert_eq!(QueryType::from_keyword(Some(Keyword::With)), QueryType::Unknown);
        assert_eq!(QueryType::from_keyword(None).to_string(), "UNKNOWN");
    }
}
