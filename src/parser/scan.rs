use {
    crate::{
        config::ParseConfig,
        def::{INDICATOR, OptionDef},
        error::ParseError,
        parsed::{ParsedArg, ParsedArgs}
    },
    tracing::{debug, trace}
};

import! {
    use alloc::{string::String, vec::Vec}
}

/// State of one parse. Consumed by [`Scanner::run`], so the partial results are dropped with it
/// when a token is rejected.
pub(crate) struct Scanner<'a, S> {
    tokens: &'a [S],
    options: &'a [OptionDef<'a>],
    min_positional: usize,
    max_positional: usize,
    out: Vec<ParsedArg<'a>>,
    positionals: usize,
    // cleared by `--`
    accept_options: bool
}

impl<'a, S: AsRef<str>> Scanner<'a, S> {
    pub(crate) fn new(config: &ParseConfig<'a, S>) -> Scanner<'a, S> {
        Scanner {
            tokens: config.tokens(),
            options: config.options(),
            min_positional: config.min_positional(),
            max_positional: config.max_positional(),
            out: Vec::with_capacity(config.tokens().len()),
            positionals: 0,
            accept_options: true
        }
    }

    pub(crate) fn run(mut self) -> Result<ParsedArgs<'a>, ParseError> {
        let tokens = self.tokens;

        // skip the program name
        let mut i = 1;
        while i < tokens.len() {
            let token = tokens[i].as_ref();

            let mut chars = token.chars();
            match (self.accept_options, chars.next(), chars.next(), chars.next()) {
                (true, Some(INDICATOR), Some(INDICATOR), None) => {
                    // end-of-options marker --
                    trace!(index = i, "end of options");
                    self.accept_options = false;
                }
                (true, Some(INDICATOR), Some(INDICATOR), Some(_)) => {
                    // long
                    self.push_long(token, &mut i)?;
                }
                (true, Some(INDICATOR), Some(_), _) => {
                    // short or bundle
                    self.push_short(token, &mut i)?;
                }
                // a lone '-' (stdin shorthand) and the empty string land here too
                _ => self.push_positional(token, i)?
            }

            i += 1;
        }

        if self.positionals < self.min_positional {
            return Err(ParseError::TooFewPositionalArguments {
                found: self.positionals,
                min: self.min_positional
            });
        }

        debug!(results = self.out.len(), positionals = self.positionals, "parsed arguments");
        Ok(ParsedArgs::new(self.out, self.positionals))
    }

    fn push_positional(&mut self, token: &'a str, index: usize) -> Result<(), ParseError> {
        self.positionals += 1;
        if self.positionals > self.max_positional {
            return Err(ParseError::TooManyPositionalArguments { index, max: self.max_positional });
        }

        trace!(index, n = self.positionals - 1, token, "positional");
        self.out.push(ParsedArg::positional(token));
        Ok(())
    }

    fn push_long(&mut self, token: &'a str, i: &mut usize) -> Result<(), ParseError> {
        let index = *i;
        let def = self.lookup(|def| def.name() == token).ok_or_else(|| {
            ParseError::UnrecognizedArgument { index, name: token.into() }
        })?;

        let value = if def.takes_value() { Some(self.take_next(def, i)?) } else { None };

        trace!(index, option = def.name(), value, "long option");
        self.out.push(ParsedArg::option(def, value));
        Ok(())
    }

    fn push_short(&mut self, token: &'a str, i: &mut usize) -> Result<(), ParseError> {
        let index = *i;
        // cut off '-'
        let cut = &token[1..];

        for (c_i, c) in cut.char_indices() {
            let def = self
                .lookup(|def| def.short() == Some(c))
                .ok_or_else(|| ParseError::UnrecognizedArgument { index, name: short_name(c) })?;

            if !def.takes_value() {
                trace!(index, option = def.name(), "short flag");
                self.out.push(ParsedArg::option(def, None));
                continue;
            }

            // the rest of the token is the value (-n10), otherwise the next token is (-n 10).
            // either way nothing after this option is part of the cluster.
            let rest = &cut[c_i + c.len_utf8()..];
            let value = if rest.is_empty() { self.take_next(def, i)? } else { rest };

            trace!(index, option = def.name(), value, "short option");
            self.out.push(ParsedArg::option(def, Some(value)));
            return Ok(());
        }

        Ok(())
    }

    // first match in table order
    #[inline]
    fn lookup(&self, matches: impl Fn(&OptionDef<'a>) -> bool) -> Option<&'a OptionDef<'a>> {
        let options = self.options;
        options.iter().find(|def| matches(def))
    }

    /// Consumes the token after `*i` as the value of `def`.
    fn take_next(&self, def: &OptionDef<'a>, i: &mut usize) -> Result<&'a str, ParseError> {
        let tokens = self.tokens;
        match tokens.get(*i + 1) {
            Some(next) => {
                *i += 1;
                Ok(next.as_ref())
            }
            None => Err(ParseError::MissingValue { index: *i, name: def.name().into() })
        }
    }
}

fn short_name(c: char) -> String {
    let mut name = String::with_capacity(1 + c.len_utf8());
    name.push(INDICATOR);
    name.push(c);
    name
}
