//! # notekit
//!
//! ## Overview
//!
//! This crate contains the pieces needed to host editor plugins inside a
//! note-taking application:
//!
//! - capability traits for the parts of the host that plugin code borrows
//!   while it runs ([editor::EditorHandle], [notice::Notifier] and
//!   [data::DataStore]);
//! - the machinery the host itself owns: a [commands::CommandRegistry] for
//!   executing plugin commands by identifier, and an [events::KeydownRouter]
//!   delivering document-level key presses;
//! - a plugin lifecycle ([plugin::Plugin] and [plugin::Registrar]) that
//!   records every registration in a ledger, so that the host can undo all
//!   of them when the plugin unloads;
//! - a plain-data vocabulary for settings pages ([ui::Form]).
//!
//! The [memory] module contains a complete in-memory host built from these
//! parts, used for tests, demos, and embedding experiments.

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

mod util;

pub mod commands;
pub mod data;
pub mod editor;
pub mod errors;
pub mod events;
pub mod key;
pub mod memory;
pub mod notice;
pub mod plugin;
pub mod ui;

pub use crossterm;
