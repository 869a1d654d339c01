/// Where a completion candidate comes from, shown next to it in a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum CandidateCategory {
    #[display("keyword")]
    Keyword,
    #[display("vendor")]
    Vendor,
    #[display("function")]
    Function,
    #[display("system view")]
    SystemView,
    #[display("pattern")]
    Pattern,
    #[display("condition")]
    Condition,
    #[display("field")]
    Field,
    #[display("aggregate")]
    Aggregate,
    #[display("param")]
    Param,
}

/// One suggestion for the text at the cursor. All candidates come from
/// static vocabularies, so none of them allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{display_text}")]
pub struct CompletionCandidate {
    pub display_text: &'static str,
    pub insert_text: &'static str,
    pub category: CandidateCategory,
    /// Short usage note; empty for bare vocabulary words.
    pub hint: &'static str,
}

impl CompletionCandidate {
    /// A candidate that inserts exactly what it displays.
    pub const fn new(text: &'static str, category: CandidateCategory, hint: &'static str) -> Self {
        Self {
            display_text: text,
            insert_text: text,
            category,
            hint,
        }
    }

    pub const fn word(text: &'static str, category: CandidateCategory) -> Self {
        Self::new(text, category, "")
    }
}
