//! # Key presses and chord notation
//!
//! ## Overview
//!
//! This module contains types for describing document-level keyboard input.
//! [Keydown] is a single key press as delivered by the host, and [KeyMatch]
//! is the pattern a key binding declares interest in.
//!
//! Patterns can be parsed from a compact chord notation:
//!
//! - a bare character (`"d"`) names that key with no required modifiers;
//! - `"<A-w>"` requires Alt to be held (`C` is Control, `S` is Shift, and
//!   both `A` and `M` mean Alt);
//! - a few keys are named: `"<Esc>"`, `"<Enter>"` (or `"<CR>"`),
//!   `"<Space>"`, `"<Tab>"`, `"<BS>"` and `"<Del>"`.
//!
//! Matching is by required subset: modifiers held beyond the required ones
//! do not prevent a match, and a pattern with no required modifiers fires on
//! every press of its key, no matter what else is held or focused.
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use nom::{
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{anychar, char},
    combinator::{all_consuming, map, value},
    multi::many0,
    IResult,
};

/// Errors that can occur when parsing key chord notation.
#[derive(thiserror::Error, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyParseError {
    /// Failure to interpret a chord string.
    #[error("Invalid key notation: {0:?}")]
    InvalidKey(String),

    /// Failure due to an empty chord string.
    #[error("Empty key notation")]
    EmptyKey,
}

/// A key pressed while the host has keyboard focus.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Keydown {
    code: KeyCode,
    mods: KeyModifiers,
}

impl Keydown {
    /// Create a new key press.
    pub fn new(code: KeyCode, mut mods: KeyModifiers) -> Self {
        if let KeyCode::Char(_) = code {
            // Terminals vary over whether they include SHIFT with characters
            // like '?' and 'A', so strip it here to keep comparisons behaving
            // the same everywhere.
            mods -= KeyModifiers::SHIFT;
        }

        Keydown { code, mods }
    }

    /// A press of a character key with no modifiers held.
    pub fn char(c: char) -> Self {
        Keydown::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    /// A press of a character key with Alt held.
    pub fn alt(c: char) -> Self {
        Keydown::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    /// A press of a character key with Control held.
    pub fn ctrl(c: char) -> Self {
        Keydown::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// The code of the pressed key.
    pub fn code(&self) -> KeyCode {
        self.code
    }

    /// The modifiers held during this key press.
    pub fn modifiers(&self) -> KeyModifiers {
        self.mods
    }

    /// The character this key press would type, if any.
    ///
    /// Character keys pressed with modifiers beyond Shift type nothing.
    pub fn get_char(&self) -> Option<char> {
        if let KeyCode::Char(c) = self.code {
            if self.mods.is_empty() {
                return Some(c);
            }
        }

        return None;
    }
}

impl From<KeyEvent> for Keydown {
    fn from(ke: KeyEvent) -> Self {
        Keydown::new(ke.code, ke.modifiers)
    }
}

/// The keys a binding fires on.
///
/// A [KeyMatch] names a key code and the modifiers required alongside it.
/// Matching is by subset ([KeyMatch::matches]), so a pattern with an empty
/// required set fires on every press of its key, including presses that
/// happen while the user is typing into a text field somewhere. Bindings
/// that want to stay out of the way of ordinary typing have to require at
/// least one modifier.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct KeyMatch {
    code: KeyCode,
    required: KeyModifiers,
}

impl KeyMatch {
    /// Create a new pattern from a key code and its required modifiers.
    pub fn new(code: KeyCode, mut required: KeyModifiers) -> Self {
        if let KeyCode::Char(_) = code {
            // Keydown strips SHIFT from characters, so a pattern requiring it
            // could never match; shifted characters are written as the
            // character they produce (e.g. "D", not "<S-d>").
            required -= KeyModifiers::SHIFT;
        }

        KeyMatch { code, required }
    }

    /// Whether a key press satisfies this pattern.
    ///
    /// The press must be of the same key, holding at least the required
    /// modifiers; extra held modifiers do not prevent the match.
    pub fn matches(&self, key: &Keydown) -> bool {
        self.code == key.code() && key.modifiers().contains(self.required)
    }
}

impl FromStr for KeyMatch {
    type Err = KeyParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.is_empty() {
            return Err(KeyParseError::EmptyKey);
        }

        match all_consuming(parse_key_match)(input) {
            Ok((_, km)) => Ok(km),
            Err(_) => Err(KeyParseError::InvalidKey(input.to_string())),
        }
    }
}

impl Display for KeyMatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.required.is_empty() {
            if let KeyCode::Char(c) = self.code {
                if c != ' ' {
                    return write!(f, "{c}");
                }
            }
        }

        write!(f, "<")?;

        if self.required.contains(KeyModifiers::CONTROL) {
            write!(f, "C-")?;
        }

        if self.required.contains(KeyModifiers::SHIFT) {
            write!(f, "S-")?;
        }

        if self.required.contains(KeyModifiers::ALT) {
            write!(f, "A-")?;
        }

        match self.code {
            KeyCode::Esc => write!(f, "Esc")?,
            KeyCode::Enter => write!(f, "Enter")?,
            KeyCode::Tab => write!(f, "Tab")?,
            KeyCode::Backspace => write!(f, "BS")?,
            KeyCode::Delete => write!(f, "Del")?,
            KeyCode::Char(' ') => write!(f, "Space")?,
            KeyCode::Char(c) => write!(f, "{c}")?,
            ref code => write!(f, "{code:?}")?,
        }

        return write!(f, ">");
    }
}

fn parse_modifier(input: &str) -> IResult<&str, KeyModifiers> {
    alt((
        value(KeyModifiers::ALT, tag("A-")),
        value(KeyModifiers::ALT, tag("M-")),
        value(KeyModifiers::CONTROL, tag("C-")),
        value(KeyModifiers::SHIFT, tag("S-")),
    ))(input)
}

fn parse_named(input: &str) -> IResult<&str, KeyCode> {
    alt((
        value(KeyCode::Esc, tag_no_case("Esc")),
        value(KeyCode::Enter, tag_no_case("Enter")),
        value(KeyCode::Enter, tag_no_case("CR")),
        value(KeyCode::Char(' '), tag_no_case("Space")),
        value(KeyCode::Tab, tag_no_case("Tab")),
        value(KeyCode::Backspace, tag_no_case("BS")),
        value(KeyCode::Delete, tag_no_case("Del")),
    ))(input)
}

fn parse_chord(input: &str) -> IResult<&str, KeyMatch> {
    let (input, _) = char('<')(input)?;
    let (input, mods) = many0(parse_modifier)(input)?;
    let (input, code) = alt((parse_named, map(anychar, KeyCode::Char)))(input)?;
    let (input, _) = char('>')(input)?;

    let required = mods.into_iter().fold(KeyModifiers::NONE, |acc, m| acc | m);

    Ok((input, chord_match(code, required)))
}

fn parse_bare(input: &str) -> IResult<&str, KeyMatch> {
    let (input, c) = anychar(input)?;

    Ok((input, KeyMatch::new(KeyCode::Char(c), KeyModifiers::NONE)))
}

fn parse_key_match(input: &str) -> IResult<&str, KeyMatch> {
    alt((parse_chord, parse_bare))(input)
}

fn chord_match(code: KeyCode, required: KeyModifiers) -> KeyMatch {
    if let KeyCode::Char(c) = code {
        if required.contains(KeyModifiers::SHIFT) {
            // "<S-a>" names the uppercase character.
            return KeyMatch::new(KeyCode::Char(c.to_ascii_uppercase()), required);
        }
    }

    return KeyMatch::new(code, required);
}
