//! Option definitions: the table tokens are matched against.

use crate::error::ConfigError;

// indicator of the start of a short, two for a long option
pub(crate) const INDICATOR: char = '-';

/// A definition that describes one recognized option. This includes the following metadata:
///
/// - `name`: the exact spelling matched against tokens, either `-x` (short) or `--name` (long).
/// - `takes_value`: whether the option consumes a value. If not, this is a flag.
///
/// A short definition matches its character anywhere in a cluster such as `-xvf`; a long
/// definition only matches a token that is exactly equal to its name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OptionDef<'a> {
    name: &'a str,
    takes_value: bool
}

impl<'a> OptionDef<'a> {
    /// Creates an `OptionDef` with `name`.
    #[must_use]
    pub const fn new(name: &'a str, takes_value: bool) -> OptionDef<'a> {
        OptionDef { name, takes_value }
    }

    /// Creates an `OptionDef` which does not take a value.
    #[must_use]
    pub const fn flag(name: &'a str) -> OptionDef<'a> {
        OptionDef::new(name, false)
    }

    /// Creates an `OptionDef` which takes exactly one value.
    #[must_use]
    pub const fn valued(name: &'a str) -> OptionDef<'a> {
        OptionDef::new(name, true)
    }

    /// Sets whether this option takes a value.
    #[must_use]
    pub const fn set_takes_value(mut self, takes_value: bool) -> OptionDef<'a> {
        self.takes_value = takes_value;
        self
    }

    /// Returns the option's name, including its leading dash(es).
    #[must_use]
    #[inline]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Returns whether this option takes a value.
    #[must_use]
    #[inline]
    pub const fn takes_value(&self) -> bool {
        self.takes_value
    }

    /// Returns `true` if the name starts with two dashes.
    #[must_use]
    #[inline]
    pub const fn is_long(&self) -> bool {
        let bytes = self.name.as_bytes();
        bytes.len() >= 2 && bytes[0] == b'-' && bytes[1] == b'-'
    }

    /// Returns the character this option matches inside a short cluster, if the name is exactly
    /// a dash followed by one character.
    ///
    /// Note that `--` is two characters long, so it matches a `-` inside a cluster.
    #[must_use]
    pub fn short(&self) -> Option<char> {
        let mut chars = self.name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(INDICATOR), Some(c), None) => Some(c),
            _ => None
        }
    }

    /// Checks the shape of the name: at least two characters, a leading dash, and exactly one
    /// character after the dash unless the name starts with `--`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OptionName`] if the name is malformed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut chars = self.name.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(INDICATOR), Some(INDICATOR), _) | (Some(INDICATOR), Some(_), None) => Ok(()),
            _ => Err(ConfigError::OptionName { name: self.name.into() })
        }
    }
}
