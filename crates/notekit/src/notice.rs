//! # Notices
//!
//! ## Overview
//!
//! A [Notice] is a short, transient message shown to the user outside of the
//! document, and showing one returns nothing to the caller. Hosts decide how
//! notices are actually displayed (or recorded) by implementing [Notifier],
//! which is one of the capabilities handed to plugin commands.
use std::fmt::{self, Display, Formatter};

/// A transient user-facing message.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    text: String,
}

impl Notice {
    /// The message text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl From<&str> for Notice {
    fn from(text: &str) -> Self {
        Notice::from(text.to_string())
    }
}

impl From<String> for Notice {
    fn from(text: String) -> Self {
        Notice { text }
    }
}

/// Trait for objects that can show the user a [Notice].
pub trait Notifier {
    /// Show a notice.
    fn notice(&mut self, notice: Notice);
}
