use super::{kinds::ListMarker, types::ListKind};

/// Bookkeeping for the list currently collecting lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenList {
    kind: ListKind,
    blank_run: usize,
}

impl OpenList {
    /// Longest run of consecutive blank lines a list tolerates.
    pub const MAX_BLANK_RUN: usize = 2;

    pub fn new(kind: ListKind) -> Self {
        Self { kind, blank_run: 0 }
    }

    pub fn kind(&self) -> ListKind {
        self.kind
    }

    /// Counts one more blank line and returns the length of the run.
    pub fn bump_blank_run(&mut self) -> usize {
        self.blank_run += 1;
        self.blank_run
    }

    /// Ends the current blank run.
    pub fn reset_blank_run(&mut self) {
        self.blank_run = 0;
    }

    /// Content of `line` if it is a new item marker of this list's family.
    ///
    /// Bullet lists only continue with their own symbol; ordered lists take
    /// any ordered marker regardless of its numeral.
    pub fn item_content<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self.kind {
            ListKind::Unordered { symbol } => ListMarker::bullet(line)
                .filter(|(found, _)| *found == symbol)
                .map(|(_, content)| content),
            ListKind::Ordered { .. } => ListMarker::ordered(line).map(|(_, content)| content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_list_accepts_only_its_symbol() {
        let list = OpenList::new(ListKind::Unordered { symbol: '-' });
        assert_eq!(list.item_content("- next"), Some("next"));
        assert_eq!(list.item_content("* other"), None);
        assert_eq!(list.item_content("1. num"), None);
    }

    #[test]
    fn ordered_list_accepts_any_numeral() {
        let list = OpenList::new(ListKind::Ordered { start: 7 });
        assert_eq!(list.item_content("2. two"), Some("two"));
        assert_eq!(list.item_content("99999999999999999999999. big"), Some("big"));
        assert_eq!(list.item_content("- bullet"), None);
    }

    #[test]
    fn blank_run_counts_and_resets() {
        let mut list = OpenList::new(ListKind::Unordered { symbol: '*' });
        assert_eq!(list.bump_blank_run(), 1);
        assert_eq!(list.bump_blank_run(), 2);
        list.reset_blank_run();
        assert_eq!(list.bump_blank_run(), 1);
    }
}
