//! # Plugin lifecycle
//!
//! ## Overview
//!
//! Plugins declare what they need during [Plugin::load] through a
//! [Registrar], which records every registration in a [Teardown] ledger as
//! it is made. The host disposes of the ledger when the plugin unloads, or
//! when its load fails partway through, so that nothing a plugin registered
//! can outlive it. Loaded plugins are kept alongside their ledgers in a
//! [PluginSet].
use std::fmt;

use crate::commands::{Command, CommandRegistry};
use crate::data::DataStore;
use crate::errors::{HostError, HostResult};
use crate::events::{KeydownListener, KeydownRouter, Subscription};
use crate::ui::Form;

/// A plugin that can be loaded into a note-taking host.
pub trait Plugin {
    /// The identifier used to namespace this plugin's commands and data.
    fn id(&self) -> &'static str;

    /// The human-readable plugin name.
    fn name(&self) -> &'static str;

    /// Called when the host loads this plugin.
    ///
    /// Errors propagate to the host unchanged; the host then disposes of
    /// whatever was registered before the failure.
    fn load(&mut self, reg: &mut Registrar<'_>) -> HostResult<()>;

    /// Called when the host unloads this plugin, after its registrations
    /// have been disposed of.
    fn unload(&mut self) {}

    /// Describe this plugin's settings page, if it presents one.
    fn settings_form(&self) -> Option<Form> {
        None
    }

    /// Apply a change event from this plugin's settings page.
    ///
    /// `key` names the form item that changed and `value` carries its full
    /// new value. Plugins that persist their settings should do so before
    /// returning.
    fn apply_setting(
        &mut self,
        key: &str,
        value: &str,
        data: &mut dyn DataStore,
    ) -> HostResult<()> {
        let _ = (value, data);

        Err(HostError::Failure(format!("No settings field named {key:?}")))
    }
}

/// The registration context handed to [Plugin::load].
///
/// Everything registered through it lands in the plugin's [Teardown] ledger,
/// so the host can undo the registrations when the plugin goes away.
pub struct Registrar<'a> {
    plugin: &'a str,
    commands: &'a mut CommandRegistry,
    keydowns: &'a mut KeydownRouter,
    data: &'a mut dyn DataStore,
    teardown: &'a mut Teardown,
}

impl<'a> Registrar<'a> {
    /// Create a registration context for the named plugin.
    pub fn new(
        plugin: &'a str,
        commands: &'a mut CommandRegistry,
        keydowns: &'a mut KeydownRouter,
        data: &'a mut dyn DataStore,
        teardown: &'a mut Teardown,
    ) -> Self {
        Registrar { plugin, commands, keydowns, data, teardown }
    }

    /// Register a command under this plugin's identifier, and return the
    /// full identifier it can be executed with.
    pub fn add_command(&mut self, cmd: Command) -> HostResult<String> {
        let full = self.commands.register(self.plugin, cmd)?;

        self.teardown.commands.push(full.clone());

        return Ok(full);
    }

    /// Subscribe a listener to the document-level keydown stream.
    ///
    /// The subscription stays live until the plugin is unloaded; its token
    /// goes straight into the teardown ledger.
    pub fn observe_keydown(&mut self, listener: KeydownListener) {
        let sub = self.keydowns.subscribe(listener);

        self.teardown.subscriptions.push(sub);
    }

    /// The host's plugin data store.
    pub fn data(&mut self) -> &mut dyn DataStore {
        &mut *self.data
    }
}

/// The registrations a plugin has made, in the order it made them.
#[derive(Debug, Default)]
pub struct Teardown {
    pub(crate) commands: Vec<String>,
    pub(crate) subscriptions: Vec<Subscription>,
}

impl Teardown {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Teardown::default()
    }

    /// Undo every recorded registration.
    pub fn dispose(&mut self, commands: &mut CommandRegistry, keydowns: &mut KeydownRouter) {
        for id in self.commands.drain(..) {
            if commands.remove(&id).is_none() {
                log::debug!("tearing down command {id:?} that is no longer registered");
            }
        }

        for sub in self.subscriptions.drain(..) {
            keydowns.unsubscribe(sub);
        }
    }
}

struct LoadedPlugin {
    plugin: Box<dyn Plugin>,
    teardown: Teardown,
}

/// The plugins a host has loaded, in load order.
#[derive(Default)]
pub struct PluginSet {
    loaded: Vec<LoadedPlugin>,
}

impl PluginSet {
    /// Create a new, empty set.
    pub fn new() -> Self {
        PluginSet { loaded: Vec::new() }
    }

    /// Record a plugin that finished loading, along with its ledger.
    pub fn insert(&mut self, plugin: Box<dyn Plugin>, teardown: Teardown) {
        self.loaded.push(LoadedPlugin { plugin, teardown });
    }

    /// Remove a loaded plugin by identifier.
    pub fn remove(&mut self, id: &str) -> Option<(Box<dyn Plugin>, Teardown)> {
        let idx = self.loaded.iter().position(|l| l.plugin.id() == id)?;
        let l = self.loaded.remove(idx);

        Some((l.plugin, l.teardown))
    }

    /// Fetch a loaded plugin by identifier.
    pub fn get(&self, id: &str) -> Option<&dyn Plugin> {
        self.loaded.iter().find(|l| l.plugin.id() == id).map(|l| &*l.plugin)
    }

    /// Fetch a loaded plugin mutably by identifier.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut (dyn Plugin + '_)> {
        // The boxed object's lifetime bound has to shrink behind the mutable
        // reference, which map() cannot express.
        match self.loaded.iter_mut().find(|l| l.plugin.id() == id) {
            Some(l) => Some(&mut *l.plugin),
            None => None,
        }
    }

    /// The identifiers of the loaded plugins, in load order.
    pub fn ids(&self) -> Vec<&str> {
        self.loaded.iter().map(|l| l.plugin.id()).collect()
    }

    /// The number of loaded plugins.
    pub fn len(&self) -> usize {
        self.loaded.len()
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSet").field("loaded", &self.ids()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MemDataStore;

    struct TestPlugin;

    impl Plugin for TestPlugin {
        fn id(&self) -> &'static str {
            "test-plugin"
        }

        fn name(&self) -> &'static str {
            "Test Plugin"
        }

        fn load(&mut self, reg: &mut Registrar<'_>) -> HostResult<()> {
            reg.add_command(Command::new("noop", "Do nothing", |_, _| {}))?;
            reg.observe_keydown(Box::new(|_, _| {}));

            return Ok(());
        }
    }

    #[test]
    fn test_registrar_records_teardown() {
        let mut commands = CommandRegistry::new();
        let mut keydowns = KeydownRouter::new();
        let mut data = MemDataStore::new();
        let mut teardown = Teardown::new();

        let mut plugin = TestPlugin;
        let mut reg =
            Registrar::new(plugin.id(), &mut commands, &mut keydowns, &mut data, &mut teardown);

        plugin.load(&mut reg).unwrap();

        assert_eq!(teardown.commands, vec!["test-plugin.noop".to_string()]);
        assert_eq!(teardown.subscriptions.len(), 1);
        assert_eq!(commands.contains("test-plugin.noop"), true);
        assert_eq!(keydowns.len(), 1);

        teardown.dispose(&mut commands, &mut keydowns);

        assert_eq!(commands.contains("test-plugin.noop"), false);
        assert_eq!(keydowns.len(), 0);
        assert_eq!(teardown.commands.len(), 0);
        assert_eq!(teardown.subscriptions.len(), 0);
    }

    #[test]
    fn test_plugin_set() {
        let mut plugins = PluginSet::new();

        plugins.insert(Box::new(TestPlugin), Teardown::new());
        assert_eq!(plugins.len(), 1);
        assert_eq!(plugins.ids(), vec!["test-plugin"]);
        assert_eq!(plugins.get("test-plugin").is_some(), true);
        assert_eq!(plugins.get("other").is_none(), true);

        let (_, _) = plugins.remove("test-plugin").unwrap();
        assert_eq!(plugins.len(), 0);
        assert_eq!(plugins.remove("test-plugin").is_none(), true);
    }

    #[test]
    fn test_plugin_set_get_mut() {
        let mut plugins = PluginSet::new();
        let mut data = MemDataStore::new();

        plugins.insert(Box::new(TestPlugin), Teardown::new());

        // The plugin itself is reachable through the mutable borrow.
        let plugin = plugins.get_mut("test-plugin").unwrap();
        let res = plugin.apply_setting("nope", "value", &mut data);
        assert!(matches!(res, Err(HostError::Failure(_))));

        assert_eq!(plugins.get_mut("other").is_none(), true);
    }

    #[test]
    fn test_default_apply_setting_errors() {
        let mut plugin = TestPlugin;
        let mut data = MemDataStore::new();

        let res = plugin.apply_setting("nope", "value", &mut data);
        assert!(matches!(res, Err(HostError::Failure(_))));
    }
}
