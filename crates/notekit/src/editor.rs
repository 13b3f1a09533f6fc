//! # Editor capabilities
//!
//! ## Overview
//!
//! This module contains the capability surface a host's editor exposes to
//! plugin commands: a [Cursor] position within the document, a [Span] of
//! text, and the [EditorHandle] operations for reading and changing the
//! current selection.
use std::cmp::Ordering;

use crate::util::sort2;

/// A movable point within a document.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Cursor {
    pub(crate) y: usize,
    pub(crate) x: usize,
}

impl Cursor {
    /// Create a new cursor.
    pub fn new(line: usize, column: usize) -> Self {
        Cursor { y: line, x: column }
    }

    /// Get the line that this cursor is on.
    pub fn get_y(&self) -> usize {
        self.y
    }

    /// Get the column that this cursor is on.
    pub fn get_x(&self) -> usize {
        self.x
    }
}

impl PartialOrd for Cursor {
    fn partial_cmp(&self, other: &Cursor) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cursor {
    fn cmp(&self, other: &Cursor) -> Ordering {
        let ycmp = self.y.cmp(&other.y);

        if ycmp != Ordering::Equal {
            return ycmp;
        }

        return self.x.cmp(&other.x);
    }
}

/// A contiguous region of a document, bounded by two cursors.
///
/// The region covers the characters from [Span::from] up to, but not
/// including, [Span::to].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Span {
    /// Where the region begins.
    pub from: Cursor,

    /// Where the region ends (exclusive).
    pub to: Cursor,
}

impl Span {
    /// Create a new span, ordering the cursors so that `from <= to`.
    pub fn new(a: Cursor, b: Cursor) -> Self {
        let (from, to) = sort2(a, b);

        Span { from, to }
    }

    /// Whether this span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// The operations a host's editor exposes to plugin commands.
///
/// Commands borrow the editor for the duration of a single invocation, and
/// get a fresh borrow each time they run; nothing here can be held onto
/// between invocations.
pub trait EditorHandle {
    /// The current cursor position.
    fn cursor(&self) -> Cursor;

    /// The span of word characters touching `pos`, if there is one.
    ///
    /// The span covers the longest run of alphanumeric and underscore
    /// characters around or immediately before `pos`. A position on
    /// whitespace or punctuation with no adjacent word character yields
    /// `None`; that is a normal outcome, not an error.
    fn word_at(&self, pos: &Cursor) -> Option<Span>;

    /// The currently selected text, or the empty string when nothing is
    /// selected.
    fn selection(&self) -> String;

    /// Select the given span and move the cursor to its end.
    fn set_selection(&mut self, span: Span);

    /// Replace the selected text with `text` and clear the selection.
    ///
    /// When nothing is selected, the text is inserted at the cursor. The
    /// cursor ends up after the inserted text.
    fn replace_selection(&mut self, text: &str);
}
