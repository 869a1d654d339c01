//! Standard SQL keyword vocabulary.
//!
//! Keywords are matched case-insensitively; `as_str` gives the canonical
//! upper-case spelling used when the formatter re-emits clause phrases and
//! when completion lists candidates. `Keyword::ALL` keeps declaration order,
//! which is also the order completion candidates are offered in.
//!
//! Aggregates and a handful of string/date helpers (`COUNT`, `LEN`,
//! `DATEPART`, ...) are deliberately part of this list rather than
//! `VendorFunction`; the two vocabularies are disjoint.

vocabulary! {
    /// A recognized standard SQL keyword.
    Keyword {
        Select => "SELECT",
        From => "FROM",
        Where => "WHERE",
        Join => "JOIN",
        Left => "LEFT",
        Right => "RIGHT",
        Inner => "INNER",
        Outer => "OUTER",
        Full => "FULL",
        Cross => "CROSS",
        On => "ON",
        And => "AND",
        Or => "OR",
        Not => "NOT",
        In => "IN",
        Exists => "EXISTS",
        Between => "BETWEEN",
        Like => "LIKE",
        Is => "IS",
        Null => "NULL",
        As => "AS",
        Distinct => "DISTINCT",
        Top => "TOP",
        Order => "ORDER",
        By => "BY",
        Group => "GROUP",
        Having => "HAVING",
        Union => "UNION",
        All => "ALL",
        Insert => "INSERT",
        Into => "INTO",
        Values => "VALUES",
        Update => "UPDATE",
        Set => "SET",
        Delete => "DELETE",
        Create => "CREATE",
        Table => "TABLE",
        Alter => "ALTER",
        Drop => "DROP",
        Index => "INDEX",
        Case => "CASE",
        When => "WHEN",
        Then => "THEN",
        Else => "ELSE",
        End => "END",
        Asc => "ASC",
        Desc => "DESC",
        With => "WITH",
        Limit => "LIMIT",
        Offset => "OFFSET",
        Count => "COUNT",
        Sum => "SUM",
        Avg => "AVG",
        Min => "MIN",
        Max => "MAX",
        Len => "LEN",
        Substring => "SUBSTRING",
        Replace => "REPLACE",
        Trim => "TRIM",
        Ltrim => "LTRIM",
        Rtrim => "RTRIM",
        Upper => "UPPER",
        Lower => "LOWER",
        Concat => "CONCAT",
        Charindex => "CHARINDEX",
        Rank => "RANK",
        DenseRank => "DENSE_RANK",
        Over => "OVER",
        Partition => "PARTITION",
        Format => "FORMAT",
        Datepart => "DATEPART",
        Datename => "DATENAME",
        Year => "YEAR",
        Month => "MONTH",
        Day => "DAY",
        Hour => "HOUR",
        Minute => "MINUTE",
        Second => "SECOND",
        Declare => "DECLARE",
        Begin => "BEGIN",
        Return => "RETURN",
        While => "WHILE",
        If => "IF",
        Print => "PRINT",
        Exec => "EXEC",
        Execute => "EXECUTE",
        Go => "GO",
        Use => "USE",
        Truncate => "TRUNCATE",
        Merge => "MERGE",
        Except => "EXCEPT",
        Intersect => "INTERSECT",
        Pivot => "PIVOT",
        Unpivot => "UNPIVOT",
        Fetch => "FETCH",
        Next => "NEXT",
        Rows => "ROWS",
        Only => "ONLY",
        Percent => "PERCENT",
        Rollup => "ROLLUP",
        Cube => "CUBE",
        Grouping => "GROUPING",
        Output => "OUTPUT",
        Inserted => "INSERTED",
        Deleted => "DELETED",
        Identity => "IDENTITY",
        ScopeIdentity => "SCOPE_IDENTITY",
        Primary => "PRIMARY",
        Key => "KEY",
        Foreign => "FOREIGN",
        References => "REFERENCES",
        Constraint => "CONSTRAINT",
        Check => "CHECK",
        Default => "DEFAULT",
        Unique => "UNIQUE",
        Clustered => "CLUSTERED",
        Nonclustered => "NONCLUSTERED",
        Nolock => "NOLOCK",
        Holdlock => "HOLDLOCK",
        Readuncommitted => "READUNCOMMITTED",
        Serializable => "SERIALIZABLE",
        Option => "OPTION",
        Recompile => "RECOMPILE",
        Apply => "APPLY",
    }
}

impl Keyword {
    /// Aggregate functions reported by the structural analyzer, in report order.
    pub const AGGREGATES: [Self; 5] = [
        Keyword::Count,
        Keyword::Sum,
        Keyword::Avg,
        Keyword::Min,
        Keyword::Max,
    ];

    /// True for `AND` / `OR`.
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Keyword::And | Keyword::Or)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("select", Keyword::Select)]
    #[case("FROM", Keyword::From)]
    #[case("Left", Keyword::Left)]
    #[case("dense_rank", Keyword::DenseRank)]
    #[case("scope_identity", Keyword::ScopeIdentity)]
    #[case("nolock", Keyword::Nolock)]
    fn recognizes_known_keywords(#[case] word: &str, #[case] expected: Keyword) {
        assert_eq!(Keyword::from_word(word), Some(expected));
    }

    #[test]
    fn rejects_unknown_words() {
        for w in ["foo", "selects", "dateadd", "getdate", "", "_"] {
            assert!(
                Keyword::from_word(w).is_none(),
                "{w} should NOT be recognized"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        for kw in Keyword::ALL {
            assert_eq!(kw.to_string(), kw.as_str());
            assert_eq!(Keyword::from_upper(kw.as_str()), Some(*kw));
        }
    }

    #[test]
    fn declaration_order_is_preserved() {
        assert_eq!(Keyword::ALL.len(), 124);
        assert_eq!(Keyword::ALL[0], Keyword::Select);
        assert_eq!(Keyword::ALL[1], Keyword::From);
        assert_eq!(Keyword::ALL.last(), Some(&Keyword::Apply));
    }
}
