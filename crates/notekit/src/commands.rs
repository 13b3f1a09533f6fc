//! # Host command registry
//!
//! ## Overview
//!
//! This module contains the registry a host uses to track the commands its
//! plugins have registered, and to execute them by identifier.
//!
//! Each [Command] is keyed by a full identifier of the form
//! `plugin-id.command-id`, so that different plugins can reuse short command
//! names without colliding. Surfaces like a command palette can list and
//! prefix-complete the full identifiers.
use std::fmt;
use std::sync::Arc;

use radix_trie::{Trie, TrieCommon};

use crate::editor::EditorHandle;
use crate::errors::CommandError;
use crate::notice::Notifier;

/// Internal upper limit on the number of completion candidates to return.
const MAX_COMPLETIONS: usize = 500;

/// The body of a [Command].
///
/// Callbacks borrow the host's editor and notice capabilities for the
/// duration of the call, and communicate only through them; there is no
/// return value.
pub type EditorCallback = Arc<dyn Fn(&mut dyn EditorHandle, &mut dyn Notifier)>;

/// Compute the full identifier for a plugin's command.
pub fn full_id(plugin: &str, command: &str) -> String {
    format!("{plugin}.{command}")
}

/// An editor command that plugins can register with the host.
#[derive(Clone)]
pub struct Command {
    id: String,
    name: String,
    callback: EditorCallback,
}

impl Command {
    /// Create a new command from its short identifier, its human-readable
    /// name, and the callback run when it is executed.
    pub fn new<I, N, F>(id: I, name: N, callback: F) -> Self
    where
        I: Into<String>,
        N: Into<String>,
        F: Fn(&mut dyn EditorHandle, &mut dyn Notifier) + 'static,
    {
        Command {
            id: id.into(),
            name: name.into(),
            callback: Arc::new(callback),
        }
    }

    /// The short identifier this command was declared with.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The human-readable name shown for this command.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Track registered commands and handle their execution.
#[derive(Debug)]
pub struct CommandRegistry {
    commands: Trie<String, Command>,
}

impl CommandRegistry {
    /// Create a new instance.
    pub fn new() -> Self {
        CommandRegistry { commands: Trie::new() }
    }

    /// Register a command under a plugin's identifier, and return the full
    /// identifier it can be executed with from now on.
    pub fn register(&mut self, plugin: &str, cmd: Command) -> Result<String, CommandError> {
        let full = full_id(plugin, cmd.id());

        if self.commands.get(&full).is_some() {
            return Err(CommandError::DuplicateCommand(full));
        }

        self.commands.insert(full.clone(), cmd);

        return Ok(full);
    }

    /// Look up a command by its full identifier.
    pub fn get(&self, id: &str) -> Result<&Command, CommandError> {
        if let Some(cmd) = self.commands.get(id) {
            Ok(cmd)
        } else {
            Err(CommandError::InvalidCommand(id.into()))
        }
    }

    /// Whether a command is registered under a full identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.commands.get(id).is_some()
    }

    /// Remove a command by its full identifier.
    pub fn remove(&mut self, id: &str) -> Option<Command> {
        self.commands.remove(id)
    }

    /// The number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Generate a list of full identifiers that start with the given prefix.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        self.commands
            .get_raw_descendant(prefix)
            .map(|st| st.keys().take(MAX_COMPLETIONS).cloned().collect())
            .unwrap_or_default()
    }

    /// Execute the command registered under a full identifier.
    pub fn execute(
        &self,
        id: &str,
        editor: &mut dyn EditorHandle,
        notices: &mut dyn Notifier,
    ) -> Result<(), CommandError> {
        let cmd = self.get(id)?;

        (cmd.callback)(editor, notices);

        return Ok(());
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        CommandRegistry::new()
    }
}
