use std::ops::Range;

/// Whether a finding makes the query wrong or merely questionable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DiagnosticKind {
    #[display("error")]
    Error,
    #[display("warning")]
    Warning,
}

/// Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum Severity {
    #[display("low")]
    Low,
    #[display("medium")]
    Medium,
    #[display("high")]
    High,
    #[display("critical")]
    Critical,
}

/// What a diagnostic reports, with the values its message mentions.
///
/// The English text is only a rendering of this data; callers that need to
/// localize or test conditions match on the variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LintMessage {
    #[display("This dialect uses TOP, not LIMIT. Replace LIMIT {count} with SELECT TOP {count}.")]
    LimitInsteadOfTop { count: String },
    #[display("Avoid SELECT *: specify columns explicitly for better performance.")]
    SelectStar,
    #[display("DELETE without WHERE will remove ALL records! Add a WHERE clause.")]
    DeleteWithoutWhere,
    #[display(
        "Found {joins} JOIN(s) but only {ons} ON clause(s). Each JOIN needs an ON condition."
    )]
    JoinWithoutOn { joins: usize, ons: usize },
    #[display("Mismatched parentheses: {_0} unclosed.")]
    UnclosedParentheses(usize),
    #[display("Mismatched parentheses: {_0} extra closing.")]
    ExtraClosingParentheses(usize),
    #[display("Some columns may need table aliases when using JOINs to avoid ambiguity.")]
    UnqualifiedColumns,
}

impl LintMessage {
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            LintMessage::SelectStar | LintMessage::UnqualifiedColumns => DiagnosticKind::Warning,
            _ => DiagnosticKind::Error,
        }
    }

    pub const fn severity(&self) -> Severity {
        match self {
            LintMessage::DeleteWithoutWhere => Severity::Critical,
            LintMessage::LimitInsteadOfTop { .. }
            | LintMessage::JoinWithoutOn { .. }
            | LintMessage::UnclosedParentheses(_)
            | LintMessage::ExtraClosingParentheses(_) => Severity::High,
            LintMessage::SelectStar => Severity::Medium,
            LintMessage::UnqualifiedColumns => Severity::Low,
        }
    }
}

/// A single lint finding. `span` is the byte range of the offending text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{kind}/{severity}: {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub message: LintMessage,
    pub span: Option<Range<usize>>,
}

impl Diagnostic {
    /// Build a diagnostic whose kind and severity follow from `message`.
    pub fn new(message: LintMessage, span: impl Into<Option<Range<usize>>>) -> Self {
        Self {
            kind: message.kind(),
            severity: message.severity(),
            message,
            span: span.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == DiagnosticKind::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_severity_follow_message() {
        let d = Diagnostic::new(LintMessage::DeleteWithoutWhere, 0..6);
        assert_eq!((d.kind, d.severity), (DiagnosticKind::Error, Severity::Critical));
        assert!(d.is_error());
        assert_eq!(d.span, Some(0..6));

        let d = Diagnostic::new(LintMessage::SelectStar, None);
        assert_eq!((d.kind, d.severity), (DiagnosticKind::Warning, Severity::Medium));
        assert!(!d.is_error());
    }

    #[test]
    fn renders_parameters() {
        let d = Diagnostic::new(LintMessage::JoinWithoutOn { joins: 2, ons: 1 }, None);
        assert_eq!(
            d.to_string(),
            "error/high: Found 2 JOIN(s) but only 1 ON clause(s). Each JOIN needs an ON condition."
        );
        assert_eq!(
            LintMessage::ExtraClosingParentheses(3).to_string(),
            "Mismatched parentheses: 3 extra closing."
        );
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::Medium > Severity::Low);
    }
}
