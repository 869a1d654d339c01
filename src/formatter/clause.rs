//! Clause phrases that start a new output line.

use crate::sql::{Keyword, Token, TokenKind};
use itertools::Itertools as _;

/// A statement-structuring keyword or keyword phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Clause {
    LeftOuterJoin,
    RightOuterJoin,
    FullOuterJoin,
    LeftJoin,
    RightJoin,
    InnerJoin,
    OuterJoin,
    FullJoin,
    CrossJoin,
    OrderBy,
    GroupBy,
    UnionAll,
    InsertInto,
    DeleteFrom,
    CrossApply,
    OuterApply,
    Select,
    From,
    Where,
    Join,
    On,
    And,
    Or,
    Having,
    Union,
    Values,
    Update,
    Set,
    With,
    Limit,
    Offset,
}

impl Clause {
    /// Every clause in matching precedence: longer phrases come before any
    /// phrase they start with, so the first match is the longest one.
    pub const ALL: [Self; 31] = [
        Clause::LeftOuterJoin,
        Clause::RightOuterJoin,
        Clause::FullOuterJoin,
        Clause::LeftJoin,
        Clause::RightJoin,
        Clause::InnerJoin,
        Clause::OuterJoin,
        Clause::FullJoin,
        Clause::CrossJoin,
        Clause::OrderBy,
        Clause::GroupBy,
        Clause::UnionAll,
        Clause::InsertInto,
        Clause::DeleteFrom,
        Clause::CrossApply,
        Clause::OuterApply,
        Clause::Select,
        Clause::From,
        Clause::Where,
        Clause::Join,
        Clause::On,
        Clause::And,
        Clause::Or,
        Clause::Having,
        Clause::Union,
        Clause::Values,
        Clause::Update,
        Clause::Set,
        Clause::With,
        Clause::Limit,
        Clause::Offset,
    ];

    pub const fn phrase(self) -> &'static [Keyword] {
        use Keyword as K;
        match self {
            Clause::LeftOuterJoin => &[K::Left, K::Outer, K::Join],
            Clause::RightOuterJoin => &[K::Right, K::Outer, K::Join],
            Clause::FullOuterJoin => &[K::Full, K::Outer, K::Join],
            Clause::LeftJoin => &[K::Left, K::Join],
            Clause::RightJoin => &[K::Right, K::Join],
            Clause::InnerJoin => &[K::Inner, K::Join],
            Clause::OuterJoin => &[K::Outer, K::Join],
            Clause::FullJoin => &[K::Full, K::Join],
            Clause::CrossJoin => &[K::Cross, K::Join],
            Clause::OrderBy => &[K::Order, K::By],
            Clause::GroupBy => &[K::Group, K::By],
            Clause::UnionAll => &[K::Union, K::All],
            Clause::InsertInto => &[K::Insert, K::Into],
            Clause::DeleteFrom => &[K::Delete, K::From],
            Clause::CrossApply => &[K::Cross, K::Apply],
            Clause::OuterApply => &[K::Outer, K::Apply],
            Clause::Select => &[K::Select],
            Clause::From => &[K::From],
            Clause::Where => &[K::Where],
            Clause::Join => &[K::Join],
            Clause::On => &[K::On],
            Clause::And => &[K::And],
            Clause::Or => &[K::Or],
            Clause::Having => &[K::Having],
            Clause::Union => &[K::Union],
            Clause::Values => &[K::Values],
            Clause::Update => &[K::Update],
            Clause::Set => &[K::Set],
            Clause::With => &[K::With],
            Clause::Limit => &[K::Limit],
            Clause::Offset => &[K::Offset],
        }
    }

    /// Continuation clauses are indented one level under the clause they
    /// belong to.
    pub const fn is_continuation(self) -> bool {
        matches!(
            self,
            Clause::On
                | Clause::And
                | Clause::Or
                | Clause::Set
                | Clause::Values
                | Clause::Limit
                | Clause::Offset
        )
    }

    /// The longest clause whose phrase starts at `tokens[at]`, with the index
    /// of the first token after it. Phrase words must be separated by
    /// whitespace only.
    pub fn match_at(tokens: &[Token<'_>], at: usize) -> Option<(Self, usize)> {
        Self::ALL
            .iter()
            .find_map(|clause| clause.matches(tokens, at).map(|end| (*clause, end)))
    }

    fn matches(self, tokens: &[Token<'_>], at: usize) -> Option<usize> {
        let mut i = at;
        for (n, kw) in self.phrase().iter().enumerate() {
            if n > 0 {
                if tokens.get(i)?.kind != TokenKind::Whitespace {
                    return None;
                }
                i += 1;
            }
            if !tokens.get(i)?.is_keyword(*kw) {
                return None;
            }
            i += 1;
        }
        Some(i)
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.phrase().iter().join(" "))
    }
}
