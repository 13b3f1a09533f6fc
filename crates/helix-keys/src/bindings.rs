//! # Key bindings
//!
//! ## Overview
//!
//! The plugin's keydown dispatch table. The keydown listener checks every
//! document key press against each binding and queues the command of every
//! binding that matches, so one key press can trigger more than one command.
//!
//! The default table binds `<A-w>` to select-word and a bare `d` to
//! delete-selection. The `d` binding requires no modifiers, so it fires on
//! every press of the key -- including presses made while typing into the
//! editor, the plugin's own settings box, or any other text field the host
//! shows. Any surface that lets the user type a `d` will also run
//! delete-selection; rebind it with a modifier if that gets in your way.
use notekit::events::CommandQueue;
use notekit::key::{KeyMatch, KeyParseError, Keydown};

use crate::{full_command_id, DELETE_SELECTION, SELECT_WORD};

/// A single key-to-command binding.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Binding {
    key: KeyMatch,
    command: String,
}

impl Binding {
    /// Bind a chord, written in key notation, to a full command identifier.
    pub fn parse<C: Into<String>>(chord: &str, command: C) -> Result<Binding, KeyParseError> {
        Ok(Binding { key: chord.parse()?, command: command.into() })
    }

    /// The pattern this binding fires on.
    pub fn key(&self) -> &KeyMatch {
        &self.key
    }

    /// The full identifier of the command this binding runs.
    pub fn command(&self) -> &str {
        &self.command
    }
}

/// The plugin's dispatch table.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Bindings {
    bindings: Vec<Binding>,
}

impl Bindings {
    /// Build a table from chord and command identifier pairs.
    pub fn parse<'a, I, C>(pairs: I) -> Result<Bindings, KeyParseError>
    where
        I: IntoIterator<Item = (&'a str, C)>,
        C: Into<String>,
    {
        let mut bindings = Vec::new();

        for (chord, command) in pairs {
            bindings.push(Binding::parse(chord, command)?);
        }

        Ok(Bindings { bindings })
    }

    /// The table this plugin ships with: `<A-w>` selects the word under the
    /// cursor, and an unguarded `d` deletes the selection.
    pub fn defaults() -> Result<Bindings, KeyParseError> {
        Bindings::parse([
            ("<A-w>", full_command_id(SELECT_WORD)),
            ("d", full_command_id(DELETE_SELECTION)),
        ])
    }

    /// The bindings whose pattern matches a key press.
    pub fn matches(&self, key: &Keydown) -> impl Iterator<Item = &Binding> + '_ {
        let key = *key;

        self.bindings.iter().filter(move |b| b.key.matches(&key))
    }

    /// Queue the command of every binding that matches a key press.
    pub fn dispatch(&self, key: &Keydown, queue: &mut CommandQueue) {
        for binding in self.matches(key) {
            queue.run(binding.command());
        }
    }

    /// The number of bindings in the table.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
