use crate::{config::ParseConfig, error::ParseError, parsed::ParsedArgs};

mod scan;

use self::scan::Scanner;

/// Parses the tokens in `config` against its option table.
///
/// Token 0 is the program name and is skipped. The remaining tokens are classified left to right:
///
/// - `--` ends option parsing. Every token after it is positional, even if it starts with `-`.
/// - `--name` must exactly equal a long option's name. If the option takes a value, the next token
///   is consumed as the value.
/// - `-abc` is a cluster of short options. Flags are recorded in order; the first option that
///   takes a value takes the rest of the token (`-n10`), or the next token if nothing is left
///   (`-n 10`), and ends the cluster.
/// - anything else, including a lone `-`, is positional.
///
/// Options are looked up in table order and the first match wins. No prefix matching is done.
///
/// # Errors
///
/// - [`ParseError::InvalidConfiguration`] if the configuration fails
///   [`ParseConfig::validate`]. Checked before any token is looked at.
/// - [`ParseError::UnrecognizedArgument`] for an option with no definition.
/// - [`ParseError::MissingValue`] if an option that takes a value is the last token.
/// - [`ParseError::TooManyPositionalArguments`] as soon as the maximum is exceeded.
/// - [`ParseError::TooFewPositionalArguments`] if the minimum isn't reached by the end.
///
/// On error, no results are returned.
///
/// # Examples
///
/// ```
/// use argscan::{parse, ErrorKind, OptionDef, ParseConfig};
///
/// let options = [OptionDef::flag("-a"), OptionDef::flag("-b"), OptionDef::valued("-n")];
///
/// let tokens = ["prog", "-ab", "-n", "1000", "--", "-a"];
/// let parsed = parse(&ParseConfig::new(&tokens, &options)).unwrap();
/// assert_eq!(parsed.len(), 4);
/// assert_eq!(parsed.value("-n"), Some("1000"));
/// assert_eq!(parsed.positional(0), Some("-a"));
///
/// let tokens = ["prog", "-abx"];
/// let err = parse(&ParseConfig::new(&tokens, &options)).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnrecognizedArgument);
/// ```
#[cfg_attr(not(feature = "no_cold"), cold)]
pub fn parse<'a, S: AsRef<str>>(config: &ParseConfig<'a, S>) -> Result<ParsedArgs<'a>, ParseError> {
    config.validate()?;
    Scanner::new(config).run()
}
