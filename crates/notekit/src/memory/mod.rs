//! # An in-memory note host
//!
//! ## Overview
//!
//! [MemHost] wires every host-owned component together over a [MemEditor]:
//! the command registry, the document keydown stream, the plugin lifecycle,
//! a data store, and a log of the notices shown. Tests and demos drive it
//! one key press at a time with [MemHost::press].
//!
//! Key presses follow the same path a real host's document takes: every
//! live listener sees the key first and queues whatever commands it wants
//! run, the host then executes the queued commands against the editor, and
//! only after that does the key's default behavior (like self-insertion
//! into the focused surface) happen. Nothing a listener does prevents the
//! default.
use crossterm::event::KeyCode;

use crate::commands::CommandRegistry;
use crate::data::{DataStore, MemDataStore};
use crate::errors::{HostError, HostResult};
use crate::events::{CommandQueue, KeydownRouter};
use crate::key::Keydown;
use crate::notice::{Notice, Notifier};
use crate::plugin::{Plugin, PluginSet, Registrar, Teardown};
use crate::ui::Form;

mod editor;

pub use self::editor::MemEditor;

/// The surface that keyboard input is focused on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Focus {
    /// The note editor.
    #[default]
    Editor,

    /// An unrelated text field, such as a settings page input.
    TextField,
}

/// An ordered record of the notices a host has shown.
#[derive(Debug, Default)]
pub struct NoticeLog {
    notices: Vec<Notice>,
}

impl NoticeLog {
    /// Create an empty log.
    pub fn new() -> Self {
        NoticeLog::default()
    }

    /// Every notice shown so far, oldest first.
    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    /// The most recently shown notice.
    pub fn last(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// The number of notices shown.
    pub fn len(&self) -> usize {
        self.notices.len()
    }
}

impl Notifier for NoticeLog {
    fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// An in-memory host to wire plugins into for tests and demos.
///
/// ## Example
///
/// ```
/// use notekit::key::Keydown;
/// use notekit::memory::MemHost;
///
/// let mut host = MemHost::new("");
///
/// host.press(Keydown::char('h'));
/// host.press(Keydown::char('i'));
///
/// assert_eq!(host.editor().text(), "hi");
/// ```
pub struct MemHost {
    editor: MemEditor,
    commands: CommandRegistry,
    keydowns: KeydownRouter,
    plugins: PluginSet,
    data: Box<dyn DataStore>,
    notices: NoticeLog,
    focus: Focus,
    field: String,
}

impl MemHost {
    /// Create a host over a document containing `text`, with an in-memory
    /// data store.
    pub fn new(text: &str) -> Self {
        MemHost::with_data(text, Box::new(MemDataStore::new()))
    }

    /// Create a host over a document, persisting plugin data to `data`.
    pub fn with_data(text: &str, data: Box<dyn DataStore>) -> Self {
        MemHost {
            editor: MemEditor::new(text),
            commands: CommandRegistry::new(),
            keydowns: KeydownRouter::new(),
            plugins: PluginSet::new(),
            data,
            notices: NoticeLog::new(),
            focus: Focus::default(),
            field: String::new(),
        }
    }

    /// Load a plugin.
    ///
    /// If the plugin's [Plugin::load] fails, everything it registered before
    /// the failure is disposed of, and the error is returned.
    pub fn load_plugin(&mut self, mut plugin: Box<dyn Plugin>) -> HostResult<()> {
        let id = plugin.id();
        let mut teardown = Teardown::new();

        log::info!("loading plugin {id:?}");

        let mut reg = Registrar::new(
            id,
            &mut self.commands,
            &mut self.keydowns,
            &mut *self.data,
            &mut teardown,
        );

        if let Err(e) = plugin.load(&mut reg) {
            log::warn!("plugin {id:?} failed to load: {e}");
            teardown.dispose(&mut self.commands, &mut self.keydowns);

            return Err(e);
        }

        self.plugins.insert(plugin, teardown);

        return Ok(());
    }

    /// Unload a plugin, disposing of its registrations first.
    pub fn unload_plugin(&mut self, id: &str) -> HostResult<()> {
        let (mut plugin, mut teardown) =
            self.plugins.remove(id).ok_or_else(|| HostError::NoPlugin(id.into()))?;

        teardown.dispose(&mut self.commands, &mut self.keydowns);
        plugin.unload();

        log::info!("unloaded plugin {id:?}");

        return Ok(());
    }

    /// Deliver one key press to the document, then perform its default
    /// behavior for the focused surface.
    pub fn press<K: Into<Keydown>>(&mut self, key: K) {
        let key = key.into();
        let mut queue = CommandQueue::new();

        self.keydowns.route(&key, &mut queue);

        while let Some(id) = queue.pop() {
            if let Err(e) = self.commands.execute(&id, &mut self.editor, &mut self.notices) {
                log::debug!("skipping queued command {id:?}: {e}");
            }
        }

        self.default_behavior(&key);
    }

    /// Type a string into the focused surface, one key press per character.
    pub fn type_str(&mut self, text: &str) {
        for c in text.chars() {
            self.press(Keydown::char(c));
        }
    }

    /// Execute a command by its full identifier, the way a command palette
    /// would.
    pub fn run_command(&mut self, id: &str) -> HostResult<()> {
        self.commands.execute(id, &mut self.editor, &mut self.notices)?;

        return Ok(());
    }

    /// The settings page for a loaded plugin, if it presents one.
    pub fn settings_form(&self, id: &str) -> HostResult<Option<Form>> {
        let plugin = self.plugins.get(id).ok_or_else(|| HostError::NoPlugin(id.into()))?;

        Ok(plugin.settings_form())
    }

    /// Deliver a change event from a plugin's settings page.
    pub fn change_setting(&mut self, id: &str, key: &str, value: &str) -> HostResult<()> {
        let data = &mut *self.data;
        let plugin = self.plugins.get_mut(id).ok_or_else(|| HostError::NoPlugin(id.into()))?;

        plugin.apply_setting(key, value, data)
    }

    /// Move keyboard focus between the editor and a text field.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    /// The surface currently focused.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// The contents of the unrelated text field.
    pub fn field_text(&self) -> &str {
        &self.field
    }

    /// The host's editor.
    pub fn editor(&self) -> &MemEditor {
        &self.editor
    }

    /// The host's editor.
    pub fn editor_mut(&mut self) -> &mut MemEditor {
        &mut self.editor
    }

    /// The host's command registry.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The notices shown so far.
    pub fn notices(&self) -> &NoticeLog {
        &self.notices
    }

    /// The host's plugin data store.
    pub fn data(&self) -> &dyn DataStore {
        &*self.data
    }

    /// The number of live keydown listeners.
    pub fn keydown_listeners(&self) -> usize {
        self.keydowns.len()
    }

    fn default_behavior(&mut self, key: &Keydown) {
        if !key.modifiers().is_empty() {
            return;
        }

        match self.focus {
            Focus::Editor => {
                match key.code() {
                    KeyCode::Backspace => self.editor.backspace(),
                    KeyCode::Enter => self.editor.type_char('\n'),
                    KeyCode::Left => self.editor.move_left(),
                    KeyCode::Right => self.editor.move_right(),
                    KeyCode::Up => self.editor.move_up(),
                    KeyCode::Down => self.editor.move_down(),
                    _ => {
                        if let Some(c) = key.get_char() {
                            self.editor.type_char(c);
                        }
                    },
                }
            },
            Focus::TextField => {
                match key.code() {
                    KeyCode::Backspace => {
                        let _ = self.field.pop();
                    },
                    _ => {
                        if let Some(c) = key.get_char() {
                            self.field.push(c);
                        }
                    },
                }
            },
        }
    }
}
