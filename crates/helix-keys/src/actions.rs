//! # Command handlers
//!
//! ## Overview
//!
//! The handlers behind the two commands this plugin registers. Both operate
//! entirely through the capabilities borrowed from the host for the length
//! of the call, and report their outcome with a notice; having nothing to
//! act on is a normal outcome, not an error.
use notekit::editor::EditorHandle;
use notekit::notice::Notifier;

/// Select the word underneath the cursor.
///
/// When no word touches the cursor (whitespace, bare punctuation, an empty
/// line), the selection is left alone and the user is told instead.
pub fn select_word_under_cursor(editor: &mut dyn EditorHandle, notices: &mut dyn Notifier) {
    let cursor = editor.cursor();

    if let Some(word) = editor.word_at(&cursor) {
        editor.set_selection(word);

        notices.notice(format!("Selected: {}", editor.selection()).into());
    } else {
        notices.notice("No word found under the cursor.".into());
    }
}

/// Delete the currently selected text.
///
/// When nothing is selected, the document is left alone and the user is
/// told instead.
pub fn delete_selection(editor: &mut dyn EditorHandle, notices: &mut dyn Notifier) {
    let selection = editor.selection();

    if !selection.is_empty() {
        editor.replace_selection("");

        notices.notice("Deleted selection.".into());
    } else {
        notices.notice("No selection to delete.".into());
    }
}
