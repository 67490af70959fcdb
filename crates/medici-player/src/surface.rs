//! Output surface - where revealed lines end up.
//!
//! The player only talks to the [`OutputSurface`] trait. [`Transcript`] is
//! the in-memory implementation: the TUI renders it and the tests inspect
//! it.

use crate::script::{Line, LineKind};

/// Handle to one element on an output surface.
///
/// Only meaningful until the next [`OutputSurface::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

/// One rendered element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Kind of the line that produced the element.
    pub kind: LineKind,
    /// Prompt text, for elements produced by a prompt marker.
    pub prompt: Option<String>,
    /// Display text. For prompt elements this is the typed input so far.
    pub text: String,
    /// Whether the element has finished its hidden → visible transition.
    pub visible: bool,
    /// Typing caret after the last revealed character.
    pub caret: bool,
    /// Blinking caret that stays after the element is shown.
    pub trailing_caret: bool,
}

impl Entry {
    /// A fully visible prompt element with nothing typed yet.
    #[must_use]
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            kind: LineKind::PromptMarker,
            prompt: Some(prompt.into()),
            text: String::new(),
            visible: true,
            caret: false,
            trailing_caret: false,
        }
    }

    /// A visible spacer row.
    #[must_use]
    pub fn gap() -> Self {
        Self {
            kind: LineKind::Gap,
            prompt: None,
            text: String::new(),
            visible: true,
            caret: false,
            trailing_caret: false,
        }
    }

    /// A hidden element that will fade in.
    #[must_use]
    pub fn hidden(line: &Line) -> Self {
        Self {
            kind: line.kind,
            prompt: None,
            text: line.text.clone(),
            visible: false,
            caret: false,
            trailing_caret: line.trailing_caret,
        }
    }
}

/// Contract the player renders through.
///
/// Implementations decide what an element is (a DOM node, a terminal row,
/// a `Vec` slot). Ids passed back in are always ones this surface returned
/// from [`append`](Self::append) since the last [`clear`](Self::clear);
/// unknown ids must be ignored.
pub trait OutputSurface {
    /// Remove every element.
    fn clear(&mut self);

    /// Append a new element and return its handle.
    fn append(&mut self, entry: Entry) -> EntryId;

    /// Finish the element's hidden → visible transition.
    fn reveal(&mut self, id: EntryId);

    /// Append one typed character to the element's text.
    fn type_char(&mut self, id: EntryId, ch: char);

    /// Show or remove the typing caret on the element.
    fn set_caret(&mut self, id: EntryId, on: bool);

    /// Scroll so the most recently appended element is in view.
    fn scroll_to_latest(&mut self);
}

/// In-memory output surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
    /// Element the viewport must keep in view.
    anchor: Option<EntryId>,
}

impl Transcript {
    /// Create an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All elements in append order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Look up one element.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(id.0)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Element the last [`scroll_to_latest`](OutputSurface::scroll_to_latest)
    /// asked to keep in view.
    #[must_use]
    pub fn scroll_anchor(&self) -> Option<EntryId> {
        self.anchor
    }
}

impl OutputSurface for Transcript {
    fn clear(&mut self) {
        self.entries.clear();
        self.anchor = None;
    }

    fn append(&mut self, entry: Entry) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(entry);
        id
    }

    fn reveal(&mut self, id: EntryId) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.visible = true;
        }
    }

    fn type_char(&mut self, id: EntryId, ch: char) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.text.push(ch);
        }
    }

    fn set_caret(&mut self, id: EntryId, on: bool) {
        if let Some(entry) = self.entries.get_mut(id.0) {
            entry.caret = on;
        }
    }

    fn scroll_to_latest(&mut self) {
        self.anchor = self.entries.len().checked_sub(1).map(EntryId);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_returns_sequential_ids() {
        let mut t = Transcript::new();
        assert_eq!(t.append(Entry::gap()), EntryId(0));
        assert_eq!(t.append(Entry::gap()), EntryId(1));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_hidden_then_reveal() {
        let mut t = Transcript::new();
        let id = t.append(Entry::hidden(&Line::response("hello")));
        assert!(!t.get(id).unwrap().visible);
        t.reveal(id);
        assert!(t.get(id).unwrap().visible);
    }

    #[test]
    fn test_type_char_and_caret() {
        let mut t = Transcript::new();
        let id = t.append(Entry::prompt("$ "));
        t.set_caret(id, true);
        for ch in "ls -la".chars() {
            t.type_char(id, ch);
        }
        let e = t.get(id).unwrap();
        assert_eq!(e.text, "ls -la");
        assert_eq!(e.prompt.as_deref(), Some("$ "));
        assert!(e.caret);
        t.set_caret(id, false);
        assert!(!t.get(id).unwrap().caret);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut t = Transcript::new();
        t.reveal(EntryId(3));
        t.type_char(EntryId(3), 'x');
        t.set_caret(EntryId(3), true);
        assert!(t.is_empty());
    }

    #[test]
    fn test_clear_resets_anchor() {
        let mut t = Transcript::new();
        t.append(Entry::gap());
        t.scroll_to_latest();
        assert_eq!(t.scroll_anchor(), Some(EntryId(0)));
        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.scroll_anchor(), None);
    }

    #[test]
    fn test_scroll_on_empty_surface() {
        let mut t = Transcript::new();
        t.scroll_to_latest();
        assert_eq!(t.scroll_anchor(), None);
    }

    #[test]
    fn test_hidden_keeps_trailing_caret() {
        let e = Entry::hidden(&Line::highlight("✓ done").with_caret());
        assert!(e.trailing_caret);
        assert!(!e.visible);
    }
}
