//! An open completion menu: the candidates for one request plus the current
//! selection. Each operation returns or mutates a plain value; nothing is
//! shared between requests.
use super::{Completion, CompletionCandidate};
use std::ops::Range;

/// Most entries a menu shows at once.
pub const MENU_CAPACITY: usize = 12;

/// The buffer and caret after accepting a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub text: String,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionMenu {
    candidates: Vec<CompletionCandidate>,
    replace: Range<usize>,
    selected: usize,
}

impl CompletionMenu {
    /// Open a menu over `completion`, or `None` if there is nothing to offer.
    pub fn open(completion: Completion) -> Option<Self> {
        let Completion {
            mut candidates,
            replace,
        } = completion;
        if candidates.is_empty() {
            return None;
        }
        candidates.truncate(MENU_CAPACITY);
        Some(Self {
            candidates,
            replace,
            selected: 0,
        })
    }

    pub fn visible(&self) -> &[CompletionCandidate] {
        &self.candidates
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &CompletionCandidate {
        &self.candidates[self.selected]
    }

    /// Move down, wrapping from the last entry to the first.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.candidates.len();
    }

    /// Move up, wrapping from the first entry to the last.
    pub fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.candidates.len() - 1);
    }

    /// Replace the partial word in `source` with the selected candidate.
    /// Returns `None` if `source` no longer contains the replaced range.
    pub fn accept(&self, source: &str) -> Option<Edit> {
        let head = source.get(..self.replace.start)?;
        let tail = source.get(self.replace.end..)?;
        let insert = self.selected().insert_text;
        Some(Edit {
            text: [head, insert, tail].concat(),
            cursor: head.len() + insert.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autocomplete::complete_at;
    use crate::cursor::Cursor;

    fn menu(source: &str) -> CompletionMenu {
        CompletionMenu::open(complete_at(source, Cursor::at(source.len()))).expect("candidates")
    }

    #[test]
    fn empty_completion_has_no_menu() {
        assert_eq!(CompletionMenu::open(complete_at("x", Cursor::at(1))), None);
    }

    #[test]
    fn caps_visible_entries() {
        // FROM offers 16 views and patterns
        let menu = menu("SELECT * FROM ");
        assert_eq!(menu.visible().len(), MENU_CAPACITY);
        assert_eq!(menu.selected().insert_text, "[_Subscribers]");
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut menu = menu("SELECT HASHBYTES(");
        assert_eq!(menu.visible().len(), 3);
        menu.select_previous();
        assert_eq!(menu.selected_index(), 2);
        menu.select_next();
        assert_eq!(menu.selected_index(), 0);
        menu.select_next();
        assert_eq!(menu.selected().insert_text, "'SHA2_256', EmailAddress)");
    }

    #[test]
    fn accept_replaces_partial_word() {
        let source = "select a fro";
        let edit = menu(source).accept(source).expect("range still valid");
        assert_eq!(edit, Edit {
            text: "select a FROM".to_string(),
            cursor: 13,
        });
    }

    #[test]
    fn accept_inserts_at_caret_for_context_lists() {
        let source = "SELECT * FROM  WHERE x = 1";
        let completion = complete_at(source, Cursor::at(14));
        let edit = CompletionMenu::open(completion)
            .expect("candidates")
            .accept(source)
            .expect("range still valid");
        assert_eq!(edit.text, "SELECT * FROM [_Subscribers] WHERE x = 1");
        assert_eq!(edit.cursor, 28);
    }

    #[test]
    fn accept_rejects_stale_source() {
        let menu = menu("SELECT * FROM ");
        assert_eq!(menu.accept("SEL"), None);
    }
}
