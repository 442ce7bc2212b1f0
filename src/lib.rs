//! `argscan` is a small, zero-copy parser for POSIX/GNU style command lines.
//!
//! Given the raw argument vector and a table of [`OptionDef`]s, [`parse`] classifies every token
//! as a long option (`--name`), a short option or cluster of short options (`-v`, `-abc`), an
//! option value (`-n 10`, `-n10`, `--number 10`) or a positional argument, and returns the
//! results in command line order as [`ParsedArgs`].
//!
//! - values are never copied: every value is a `&str` borrowed from the token vector
//! - `--` ends option parsing; everything after it is positional
//! - positional arguments are counted against configurable bounds
//! - any error aborts the whole parse, no partial result is returned
//!
//! ```
//! use argscan::{OptionDef, ParseConfig};
//!
//! let options = [OptionDef::flag("-v"), OptionDef::valued("-n"), OptionDef::valued("--output")];
//! let tokens = ["prog", "-vn10", "--output", "out.txt", "input"];
//!
//! let parsed = ParseConfig::new(&tokens, &options).set_max_positional(1).parse().unwrap();
//! assert!(parsed.flag("-v"));
//! assert_eq!(parsed.value("-n"), Some("10"));
//! assert_eq!(parsed.value("--output"), Some("out.txt"));
//! assert_eq!(parsed.positional(0), Some("input"));
//! ```
//!
//! `no_std` compatible (requires `alloc`); the default `std` feature only adds
//! `std::error::Error` implementations.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![allow(clippy::use_self, clippy::doc_markdown, clippy::module_name_repetitions)]

extern crate alloc;

macro_rules! import {
    (use core::$($v:tt)*) => {
        #[cfg(feature = "std")]
        use std::$($v)*;
        #[cfg(not(feature = "std"))]
        use core::$($v)*;
    };
    (use alloc::$($v:tt)*) => {
        #[cfg(feature = "std")]
        use std::$($v)*;
        #[cfg(not(feature = "std"))]
        use alloc::$($v)*;
    };
}

/// The parse configuration: tokens, option table and positional bounds.
pub mod config;
pub mod def;
pub mod error;
/// Parse results.
pub mod parsed;
/// The token scanner.
pub mod parser;

pub use {
    config::ParseConfig,
    def::OptionDef,
    error::{ConfigError, ErrorKind, ParseError},
    parsed::{OptValues, ParsedArg, ParsedArgs, Positionals},
    parser::parse
};
