use crate::{
    def::OptionDef,
    error::{ConfigError, ParseError},
    parsed::ParsedArgs
};

import! {
    use core::{
        clone::Clone,
        fmt::{Debug, Formatter, Result as FmtRes},
        marker::Copy,
        ops::{Bound, RangeBounds}
    }
}

/// Everything a parse needs: the token vector, the option table and the positional bounds.
///
/// - `tokens`: the full argument vector. Token 0 is the program name and is always skipped.
/// - `options`: the option table, searched in order. The first matching definition wins.
/// - `min_positional`/`max_positional`: inclusive bounds on the number of positional arguments.
///   Defaults to `0..=usize::MAX`.
///
/// Parsed values borrow from `tokens`, so the tokens must outlive the results.
pub struct ParseConfig<'a, S = &'a str> {
    tokens: &'a [S],
    options: &'a [OptionDef<'a>],
    min_positional: usize,
    max_positional: usize
}

impl<'a, S> ParseConfig<'a, S> {
    /// Creates a `ParseConfig` accepting any number of positional arguments.
    #[must_use]
    pub const fn new(tokens: &'a [S], options: &'a [OptionDef<'a>]) -> ParseConfig<'a, S> {
        ParseConfig { tokens, options, min_positional: 0, max_positional: usize::MAX }
    }

    /// Sets the minimum number of positional arguments.
    #[must_use]
    pub const fn set_min_positional(mut self, min: usize) -> ParseConfig<'a, S> {
        self.min_positional = min;
        self
    }

    /// Sets the maximum number of positional arguments.
    #[must_use]
    pub const fn set_max_positional(mut self, max: usize) -> ParseConfig<'a, S> {
        self.max_positional = max;
        self
    }

    /// Sets both positional bounds from a range, e.g. `1..=3`, `..4` or `2..`.
    ///
    /// An empty range such as `..0` is clamped to a maximum of 0.
    #[must_use]
    pub fn set_positional(mut self, range: impl RangeBounds<usize>) -> ParseConfig<'a, S> {
        self.min_positional = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0
        };
        self.max_positional = match range.end_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_sub(1),
            Bound::Unbounded => usize::MAX
        };
        self
    }

    /// Returns the token vector, including the program name.
    #[must_use]
    #[inline]
    pub const fn tokens(&self) -> &'a [S] {
        self.tokens
    }

    /// Returns the option table.
    #[must_use]
    #[inline]
    pub const fn options(&self) -> &'a [OptionDef<'a>] {
        self.options
    }

    /// Returns the minimum number of positional arguments.
    #[must_use]
    #[inline]
    pub const fn min_positional(&self) -> usize {
        self.min_positional
    }

    /// Returns the maximum number of positional arguments.
    #[must_use]
    #[inline]
    pub const fn max_positional(&self) -> usize {
        self.max_positional
    }

    /// Checks the positional bounds and the shape of every option name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::PositionalBounds`] if the minimum exceeds the maximum, or
    /// [`ConfigError::OptionName`] for the first malformed option name.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_positional > self.max_positional {
            return Err(ConfigError::PositionalBounds {
                min: self.min_positional,
                max: self.max_positional
            });
        }
        self.options.iter().try_for_each(OptionDef::validate)
    }
}

impl<'a, S: AsRef<str>> ParseConfig<'a, S> {
    /// Parses the tokens. Shorthand for [`parse(&config)`](crate::parse).
    ///
    /// # Errors
    ///
    /// See [`parse`](crate::parse).
    pub fn parse(&self) -> Result<ParsedArgs<'a>, ParseError> {
        crate::parser::parse(self)
    }
}

// manual impls so `S` doesn't need to be Clone/Copy, only the slice is copied
impl<S> Clone for ParseConfig<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for ParseConfig<'_, S> {}

impl<S: AsRef<str>> Debug for ParseConfig<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtRes {
        f.debug_struct("ParseConfig")
            .field("tokens", &DebugTokens(self.tokens))
            .field("options", &self.options)
            .field("min_positional", &self.min_positional)
            .field("max_positional", &self.max_positional)
            .finish()
    }
}

struct DebugTokens<'a, S>(&'a [S]);

impl<S: AsRef<str>> Debug for DebugTokens<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtRes {
        f.debug_list().entries(self.0.iter().map(AsRef::<str>::as_ref)).finish()
    }
}
