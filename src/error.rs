//! Errors reported by the parser.

import! {
    use alloc::string::String
}

/// An error which can occur while parsing arguments.
///
/// Every error is terminal: the parse that produced it returns no records. Positions are indices
/// into the token vector, so the program name is position 0.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The configuration was rejected before any token was looked at.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// A `--name` token or a `-x` character has no matching option definition.
    #[error("unrecognized argument `{name}` at position {index}")]
    UnrecognizedArgument {
        /// Position of the offending token.
        index: usize,
        /// The unmatched long token, or `-x` for an unmatched short character.
        name: String
    },
    /// An option that takes a value was the last token.
    #[error("option `{name}` at position {index} requires a value")]
    MissingValue {
        /// Position of the option's token.
        index: usize,
        /// Name of the option definition.
        name: String
    },
    /// A positional argument was found after the maximum was already reached.
    #[error("too many positional arguments: position {index} exceeds the maximum of {max}")]
    TooManyPositionalArguments {
        /// Position of the first positional argument over the limit.
        index: usize,
        /// The configured maximum.
        max: usize
    },
    /// Fewer positional arguments than the configured minimum were found.
    #[error("too few positional arguments: found {found}, expected at least {min}")]
    TooFewPositionalArguments {
        /// How many positional arguments were found.
        found: usize,
        /// The configured minimum.
        min: usize
    }
}

impl ParseError {
    /// Returns the kind of this error without its details.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            ParseError::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            ParseError::UnrecognizedArgument { .. } => ErrorKind::UnrecognizedArgument,
            ParseError::MissingValue { .. } => ErrorKind::MissingValue,
            ParseError::TooManyPositionalArguments { .. } => ErrorKind::TooManyPositionalArguments,
            ParseError::TooFewPositionalArguments { .. } => ErrorKind::TooFewPositionalArguments
        }
    }
}

/// The kind of a [`ParseError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    /// See [`ParseError::InvalidConfiguration`].
    InvalidConfiguration,
    /// See [`ParseError::UnrecognizedArgument`].
    UnrecognizedArgument,
    /// See [`ParseError::MissingValue`].
    MissingValue,
    /// See [`ParseError::TooManyPositionalArguments`].
    TooManyPositionalArguments,
    /// See [`ParseError::TooFewPositionalArguments`].
    TooFewPositionalArguments
}

/// Why a [`ParseConfig`](crate::ParseConfig) was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The minimum positional count is greater than the maximum.
    #[error("minimum positional count {min} exceeds the maximum of {max}")]
    PositionalBounds {
        /// The configured minimum.
        min: usize,
        /// The configured maximum.
        max: usize
    },
    /// An option name is not `-x` or `--name` shaped.
    #[error("malformed option name `{name}`")]
    OptionName {
        /// The rejected name.
        name: String
    }
}
