//! # helix-keys
//!
//! ## Overview
//!
//! A [notekit] plugin bringing two Helix-flavored, selection-first editing
//! commands to the host:
//!
//! - **select-word** (`<A-w>`) selects the word under the cursor;
//! - **delete-selection** (`d`) deletes whatever is selected.
//!
//! Each command reports what it did -- or that there was nothing to do --
//! with a transient notice. The plugin also keeps one persisted setting,
//! surfaced through the host's settings page as a single text input.
//!
//! Note that the default `d` binding is deliberately unguarded; see
//! [bindings] for what that implies before rebinding anything.
//!
//! ## Example
//!
//! ```
//! use helix_keys::HelixKeysPlugin;
//! use notekit::editor::EditorHandle;
//! use notekit::key::Keydown;
//! use notekit::memory::MemHost;
//!
//! let mut host = MemHost::new("hello world\n");
//!
//! host.load_plugin(Box::new(HelixKeysPlugin::new())).unwrap();
//!
//! // Alt+w selects the word under the cursor.
//! host.press(Keydown::alt('w'));
//! assert_eq!(host.editor().selection(), "hello");
//!
//! // Deleting the selection, as the command palette would run it.
//! host.run_command("helix-keys.delete-selection").unwrap();
//! assert_eq!(host.editor().text(), " world\n");
//! ```

// Require docs for public APIs, and disable the more annoying clippy lints.
#![deny(missing_docs)]
#![allow(clippy::bool_to_int_with_if)]
#![allow(clippy::field_reassign_with_default)]
#![allow(clippy::len_without_is_empty)]
#![allow(clippy::manual_range_contains)]
#![allow(clippy::match_like_matches_macro)]
#![allow(clippy::needless_return)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::type_complexity)]

pub mod actions;
pub mod bindings;
pub mod settings;

use notekit::commands::{full_id, Command};
use notekit::data::DataStore;
use notekit::errors::{DataError, HostError, HostResult};
use notekit::key::KeyParseError;
use notekit::plugin::{Plugin, Registrar};
use notekit::ui::{Form, FormItem};

use self::bindings::Bindings;
use self::settings::Settings;

/// The identifier this plugin registers everything under.
pub const PLUGIN_ID: &str = "helix-keys";

/// The short identifier of the select-word command.
pub const SELECT_WORD: &str = "select-word";

/// The short identifier of the delete-selection command.
pub const DELETE_SELECTION: &str = "delete-selection";

/// The settings-page key for [Settings::my_setting].
pub const MY_SETTING_KEY: &str = "my-setting";

/// The full identifier a command is executed by once registered.
pub fn full_command_id(command: &str) -> String {
    full_id(PLUGIN_ID, command)
}

/// Errors specific to this plugin's own code.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum PluginError {
    /// Failure while loading or saving plugin data.
    #[error("Data error: {0}")]
    Data(#[from] DataError),

    /// Failure while serializing or deserializing settings.
    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),

    /// Failure while parsing a key binding chord.
    #[error("Binding error: {0}")]
    Binding(#[from] KeyParseError),
}

impl From<PluginError> for HostError {
    fn from(e: PluginError) -> Self {
        HostError::Plugin(Box::new(e))
    }
}

/// The plugin: two selection-first editing commands and one setting.
#[derive(Clone, Debug, Default)]
pub struct HelixKeysPlugin {
    settings: Settings,
}

impl HelixKeysPlugin {
    /// Create the plugin.
    ///
    /// Persisted settings are picked up when the host loads it, not here.
    pub fn new() -> Self {
        HelixKeysPlugin { settings: Settings::default() }
    }

    /// The plugin's current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Plugin for HelixKeysPlugin {
    fn id(&self) -> &'static str {
        PLUGIN_ID
    }

    fn name(&self) -> &'static str {
        "Helix Keybindings"
    }

    fn load(&mut self, reg: &mut Registrar<'_>) -> HostResult<()> {
        self.settings = Settings::load(reg.data())?;

        reg.add_command(Command::new(
            SELECT_WORD,
            "Select word under cursor",
            actions::select_word_under_cursor,
        ))?;

        reg.add_command(Command::new(
            DELETE_SELECTION,
            "Delete selected text",
            actions::delete_selection,
        ))?;

        let bindings = Bindings::defaults().map_err(PluginError::from)?;

        reg.observe_keydown(Box::new(move |key, queue| {
            bindings.dispatch(key, queue);
        }));

        log::info!("Loaded {} plugin", self.name());

        return Ok(());
    }

    fn unload(&mut self) {
        log::info!("Unloaded {} plugin", self.name());
    }

    fn settings_form(&self) -> Option<Form> {
        let item = FormItem::text(
            MY_SETTING_KEY,
            "Custom Setting",
            "Example setting description.",
            "Enter a value",
            self.settings.my_setting.clone(),
        );

        Some(Form::new().item(item))
    }

    fn apply_setting(
        &mut self,
        key: &str,
        value: &str,
        data: &mut dyn DataStore,
    ) -> HostResult<()> {
        if key != MY_SETTING_KEY {
            return Err(HostError::Failure(format!("No settings field named {key:?}")));
        }

        self.settings.my_setting = value.to_string();
        self.settings.save(data)?;

        return Ok(());
    }
}
