//! # In-memory editor
//!
//! ## Overview
//!
//! [MemEditor] is a small rope-backed editor implementing [EditorHandle],
//! with just enough default editing behavior (self-insertion, Backspace,
//! arrow motion) for the in-memory host to behave like a real one in tests
//! and demos.
use ropey::Rope;

use crate::editor::{Cursor, EditorHandle, Span};
use crate::util::is_word_char;

/// An in-memory editor over a single document.
#[derive(Clone, Debug)]
pub struct MemEditor {
    rope: Rope,
    cursor: Cursor,
    selection: Option<Span>,
}

impl MemEditor {
    /// Create an editor over a document containing `text`.
    pub fn new(text: &str) -> Self {
        MemEditor {
            rope: Rope::from_str(text),
            cursor: Cursor::default(),
            selection: None,
        }
    }

    /// Create an editor over an empty document.
    pub fn empty() -> Self {
        MemEditor::new("")
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// The currently selected span, if any.
    pub fn selection_span(&self) -> Option<Span> {
        self.selection.clone()
    }

    /// Move the cursor, clamping it into the document and clearing any
    /// selection.
    pub fn move_to(&mut self, cursor: Cursor) {
        self.cursor = self.clamp(cursor);
        self.selection = None;
    }

    /// Move the cursor one column left, wrapping to the previous line end.
    pub fn move_left(&mut self) {
        let (y, x) = (self.cursor.get_y(), self.cursor.get_x());

        if x > 0 {
            self.move_to(Cursor::new(y, x - 1));
        } else if y > 0 {
            self.move_to(Cursor::new(y - 1, self.line_len(y - 1)));
        }
    }

    /// Move the cursor one column right, wrapping to the next line start.
    pub fn move_right(&mut self) {
        let (y, x) = (self.cursor.get_y(), self.cursor.get_x());

        if x < self.line_len(y) {
            self.move_to(Cursor::new(y, x + 1));
        } else if y + 1 < self.rope.len_lines() {
            self.move_to(Cursor::new(y + 1, 0));
        }
    }

    /// Move the cursor one line up, clamping the column.
    pub fn move_up(&mut self) {
        let (y, x) = (self.cursor.get_y(), self.cursor.get_x());

        if y > 0 {
            self.move_to(Cursor::new(y - 1, x));
        }
    }

    /// Move the cursor one line down, clamping the column.
    pub fn move_down(&mut self) {
        let (y, x) = (self.cursor.get_y(), self.cursor.get_x());

        if y + 1 < self.rope.len_lines() {
            self.move_to(Cursor::new(y + 1, x));
        }
    }

    /// Insert a character at the cursor, replacing any selection.
    pub fn type_char(&mut self, c: char) {
        self.replace_selection(c.to_string().as_str());
    }

    /// Delete the selection if there is one, or the character before the
    /// cursor.
    pub fn backspace(&mut self) {
        if self.selection.is_some() {
            self.replace_selection("");

            return;
        }

        let off = self.cursor_to_char(&self.cursor);

        if off == 0 {
            return;
        }

        self.rope.remove(off - 1..off);
        self.cursor = self.char_to_cursor(off - 1);
    }

    fn clamp(&self, cursor: Cursor) -> Cursor {
        let y = cursor.get_y().min(self.rope.len_lines().saturating_sub(1));
        let x = cursor.get_x().min(self.line_len(y));

        Cursor::new(y, x)
    }

    /// The length of a line in characters, excluding its line ending.
    fn line_len(&self, y: usize) -> usize {
        let line = self.rope.line(y);
        let mut len = line.len_chars();

        if len > 0 && line.char(len - 1) == '\n' {
            len -= 1;
        }

        return len;
    }

    fn cursor_to_char(&self, cursor: &Cursor) -> usize {
        self.rope.line_to_char(cursor.get_y()) + cursor.get_x()
    }

    fn char_to_cursor(&self, off: usize) -> Cursor {
        let y = self.rope.char_to_line(off);
        let x = off - self.rope.line_to_char(y);

        Cursor::new(y, x)
    }

    fn word_span(&self, pos: &Cursor) -> Option<Span> {
        let y = pos.get_y();

        if y >= self.rope.len_lines() {
            return None;
        }

        let line = self.rope.line(y);
        let len = self.line_len(y);
        let x = pos.get_x().min(len);

        let mut start = x;
        let mut end = x;

        while start > 0 && is_word_char(line.char(start - 1)) {
            start -= 1;
        }

        while end < len && is_word_char(line.char(end)) {
            end += 1;
        }

        if start == end {
            return None;
        }

        return Some(Span::new(Cursor::new(y, start), Cursor::new(y, end)));
    }
}

impl EditorHandle for MemEditor {
    fn cursor(&self) -> Cursor {
        self.cursor.clone()
    }

    fn word_at(&self, pos: &Cursor) -> Option<Span> {
        self.word_span(pos)
    }

    fn selection(&self) -> String {
        match &self.selection {
            Some(span) => {
                let so = self.cursor_to_char(&span.from);
                let eo = self.cursor_to_char(&span.to);

                self.rope.slice(so..eo).to_string()
            },
            None => String::new(),
        }
    }

    fn set_selection(&mut self, span: Span) {
        let span = Span::new(self.clamp(span.from), self.clamp(span.to));

        self.cursor = span.to.clone();
        self.selection = Some(span);
    }

    fn replace_selection(&mut self, text: &str) {
        let (so, eo) = match self.selection.take() {
            Some(span) => (self.cursor_to_char(&span.from), self.cursor_to_char(&span.to)),
            None => {
                let off = self.cursor_to_char(&self.cursor);

                (off, off)
            },
        };

        self.rope.remove(so..eo);
        self.rope.insert(so, text);

        self.cursor = self.char_to_cursor(so + text.chars().count());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! cursor {
        ($y: expr, $x: expr) => {
            Cursor::new($y, $x)
        };
    }

    macro_rules! span {
        ($y: expr, $a: expr, $b: expr) => {
            Span::new(Cursor::new($y, $a), Cursor::new($y, $b))
        };
    }

    #[test]
    fn test_word_at_within_word() {
        let ed = MemEditor::new("hello world\n");

        // Start, middle and end of "hello".
        assert_eq!(ed.word_at(&cursor!(0, 0)), Some(span!(0, 0, 5)));
        assert_eq!(ed.word_at(&cursor!(0, 2)), Some(span!(0, 0, 5)));
        assert_eq!(ed.word_at(&cursor!(0, 4)), Some(span!(0, 0, 5)));

        // A position just past a word still touches it.
        assert_eq!(ed.word_at(&cursor!(0, 5)), Some(span!(0, 0, 5)));

        // "world" at the end of the line, including the position past it.
        assert_eq!(ed.word_at(&cursor!(0, 6)), Some(span!(0, 6, 11)));
        assert_eq!(ed.word_at(&cursor!(0, 11)), Some(span!(0, 6, 11)));
    }

    #[test]
    fn test_word_at_nothing_under_cursor() {
        let ed = MemEditor::new("a  b\n\n- c\n");

        // Between two spaces, touching neither word.
        assert_eq!(ed.word_at(&cursor!(0, 2)), None);

        // An empty line.
        assert_eq!(ed.word_at(&cursor!(1, 0)), None);

        // Punctuation with no adjacent word character.
        assert_eq!(ed.word_at(&cursor!(2, 1)), None);

        // A line past the end of the document.
        assert_eq!(ed.word_at(&cursor!(9, 0)), None);

        // An empty document has no words anywhere.
        assert_eq!(MemEditor::empty().word_at(&cursor!(0, 0)), None);
    }

    #[test]
    fn test_word_at_word_characters() {
        let ed = MemEditor::new("foo_bar42 baz-quux\n");

        // Underscores and digits are word characters.
        assert_eq!(ed.word_at(&cursor!(0, 4)), Some(span!(0, 0, 9)));

        // Hyphens are not, so "baz" and "quux" are separate words.
        assert_eq!(ed.word_at(&cursor!(0, 12)), Some(span!(0, 10, 13)));
        assert_eq!(ed.word_at(&cursor!(0, 15)), Some(span!(0, 14, 18)));
    }

    #[test]
    fn test_word_at_later_lines() {
        let ed = MemEditor::new("first\nsecond line\n");

        assert_eq!(ed.word_at(&cursor!(1, 3)), Some(span!(1, 0, 6)));
        assert_eq!(ed.word_at(&cursor!(1, 8)), Some(span!(1, 7, 11)));
    }

    #[test]
    fn test_set_selection_and_read() {
        let mut ed = MemEditor::new("hello world\n");

        ed.set_selection(span!(0, 0, 5));
        assert_eq!(ed.selection(), "hello");
        assert_eq!(ed.selection_span(), Some(span!(0, 0, 5)));

        // The cursor moves to the end of the selection.
        assert_eq!(ed.cursor(), cursor!(0, 5));
    }

    #[test]
    fn test_set_selection_reversed_span() {
        let mut ed = MemEditor::new("hello world\n");

        // A span built backwards through the public fields is normalized,
        // and the cursor still lands on its end.
        ed.set_selection(Span { from: cursor!(0, 5), to: cursor!(0, 0) });

        assert_eq!(ed.selection(), "hello");
        assert_eq!(ed.selection_span(), Some(span!(0, 0, 5)));
        assert_eq!(ed.cursor(), cursor!(0, 5));
    }

    #[test]
    fn test_selection_across_lines() {
        let mut ed = MemEditor::new("one\ntwo\nthree\n");

        ed.set_selection(Span::new(cursor!(0, 1), cursor!(2, 3)));
        assert_eq!(ed.selection(), "ne\ntwo\nthr");
    }

    #[test]
    fn test_selection_empty_without_one() {
        let ed = MemEditor::new("hello world\n");

        assert_eq!(ed.selection(), "");
        assert_eq!(ed.selection_span(), None);
    }

    #[test]
    fn test_replace_selection_deletes() {
        let mut ed = MemEditor::new("hello world\n");

        ed.set_selection(span!(0, 0, 6));
        ed.replace_selection("");

        assert_eq!(ed.text(), "world\n");
        assert_eq!(ed.selection(), "");
        assert_eq!(ed.cursor(), cursor!(0, 0));
    }

    #[test]
    fn test_replace_selection_inserts_at_cursor() {
        let mut ed = MemEditor::new("world\n");

        ed.replace_selection("hello ");
        assert_eq!(ed.text(), "hello world\n");
        assert_eq!(ed.cursor(), cursor!(0, 6));
    }

    #[test]
    fn test_type_char() {
        let mut ed = MemEditor::new("hello world\n");

        ed.set_selection(span!(0, 0, 5));
        ed.type_char('d');

        // Typing over a selection replaces it.
        assert_eq!(ed.text(), "d world\n");
        assert_eq!(ed.cursor(), cursor!(0, 1));

        ed.type_char('\n');
        assert_eq!(ed.text(), "d\n world\n");
        assert_eq!(ed.cursor(), cursor!(1, 0));
    }

    #[test]
    fn test_backspace() {
        let mut ed = MemEditor::new("hi\n");

        // Backspace at the start of the document does nothing.
        ed.backspace();
        assert_eq!(ed.text(), "hi\n");

        ed.move_to(cursor!(0, 2));
        ed.backspace();
        assert_eq!(ed.text(), "h\n");
        assert_eq!(ed.cursor(), cursor!(0, 1));

        // With a selection, backspace deletes the selection instead.
        let mut ed = MemEditor::new("hello world\n");
        ed.set_selection(span!(0, 0, 6));
        ed.backspace();
        assert_eq!(ed.text(), "world\n");
    }

    #[test]
    fn test_move_to_clamps() {
        let mut ed = MemEditor::new("hi\nthere\n");

        ed.move_to(cursor!(0, 99));
        assert_eq!(ed.cursor(), cursor!(0, 2));

        ed.move_to(cursor!(99, 1));
        assert_eq!(ed.cursor(), cursor!(2, 0));
    }

    #[test]
    fn test_cursor_motion() {
        let mut ed = MemEditor::new("one\nlonger\n");

        // Left at the start of the document stays put.
        ed.move_left();
        assert_eq!(ed.cursor(), cursor!(0, 0));

        ed.move_right();
        assert_eq!(ed.cursor(), cursor!(0, 1));

        // Down keeps the column when it fits.
        ed.move_down();
        assert_eq!(ed.cursor(), cursor!(1, 1));

        // Up clamps the column to the shorter line.
        ed.move_to(cursor!(1, 6));
        ed.move_up();
        assert_eq!(ed.cursor(), cursor!(0, 3));

        // Right at the end of a line wraps to the next line...
        ed.move_right();
        assert_eq!(ed.cursor(), cursor!(1, 0));

        // ...and left wraps back.
        ed.move_left();
        assert_eq!(ed.cursor(), cursor!(0, 3));

        // Motion clears the selection.
        ed.set_selection(span!(0, 0, 3));
        ed.move_right();
        assert_eq!(ed.selection_span(), None);
    }
}
