use crate::def::OptionDef;

import! {
    use alloc::vec::{self, Vec}
}
import! {
    use core::{
        fmt::{Debug, Formatter, Result as FmtRes},
        iter::{DoubleEndedIterator, FusedIterator, IntoIterator, Iterator},
        ops::Index,
        slice
    }
}

/// One parse result: an option occurrence or a positional argument.
///
/// `value` borrows from the token vector the parse was run on. For a positional argument it is the
/// whole token; for an option it is either the remainder of a short cluster (`-n10`) or the
/// following token (`-n 10`, `--number 10`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParsedArg<'a> {
    def: Option<&'a OptionDef<'a>>,
    value: Option<&'a str>
}

impl<'a> ParsedArg<'a> {
    #[inline]
    pub(crate) const fn option(def: &'a OptionDef<'a>, value: Option<&'a str>) -> ParsedArg<'a> {
        ParsedArg { def: Some(def), value }
    }

    #[inline]
    pub(crate) const fn positional(value: &'a str) -> ParsedArg<'a> {
        ParsedArg { def: None, value: Some(value) }
    }

    /// Returns the matched option definition, or `None` for a positional argument.
    #[must_use]
    #[inline]
    pub const fn definition(&self) -> Option<&'a OptionDef<'a>> {
        self.def
    }

    /// Returns the matched option's name, or `None` for a positional argument.
    #[must_use]
    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        self.def.map(OptionDef::name)
    }

    /// Returns the value, if any. Positional arguments always have one.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Returns `true` if this result carries a value.
    #[must_use]
    #[inline]
    pub const fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if this is a positional argument.
    #[must_use]
    #[inline]
    pub const fn is_positional(&self) -> bool {
        self.def.is_none()
    }

    #[inline]
    fn is(&self, name: &str) -> bool {
        match self.def {
            Some(def) => def.name() == name,
            None => false
        }
    }
}

/// Parse results in command line order.
///
/// Returned by [`parse`](crate::parse). Besides ordered access, this offers lookups by option name;
/// these are linear scans, as command lines are short.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ParsedArgs<'a> {
    args: Vec<ParsedArg<'a>>,
    positionals: usize
}

impl<'a> ParsedArgs<'a> {
    pub(crate) fn new(args: Vec<ParsedArg<'a>>, positionals: usize) -> ParsedArgs<'a> {
        ParsedArgs { args, positionals }
    }

    /// Returns the number of results.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns `true` if nothing but the program name was given.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Returns the results as a slice.
    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[ParsedArg<'a>] {
        &self.args
    }

    /// Returns an iterator over the results.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ParsedArg<'a>> {
        self.args.iter()
    }

    /// Consumes `self`, returning the underlying vector.
    #[must_use]
    #[inline]
    pub fn into_vec(self) -> Vec<ParsedArg<'a>> {
        self.args
    }

    /// Returns the number of positional arguments.
    #[must_use]
    #[inline]
    pub const fn positional_count(&self) -> usize {
        self.positionals
    }

    /// Returns the `n`th positional argument, or `None` if it does not exist.
    #[must_use]
    pub fn positional(&self, n: usize) -> Option<&'a str> {
        if n >= self.positionals {
            return None;
        }
        self.positionals().nth(n)
    }

    /// Returns an iterator over the positional arguments.
    #[must_use]
    pub fn positionals(&self) -> Positionals<'_, 'a> {
        Positionals { inner: self.args.iter() }
    }

    /// Returns `true` if the option `name` was given at least once.
    ///
    /// Note: this also treats options with values as flags.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        self.args.iter().any(|arg| arg.is(name))
    }

    /// Returns how many times the option `name` was given, e.g. 3 for `-vvv`.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.args.iter().filter(|arg| arg.is(name)).count()
    }

    /// Returns the last value given for `name`, or `None` if the option never received one.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&'a str> {
        self.values(name).next_back()
    }

    /// Returns an iterator over every value given for `name`, in command line order.
    #[must_use]
    pub fn values<'p>(&'p self, name: &'p str) -> OptValues<'p, 'a> {
        OptValues { inner: self.args.iter(), name }
    }

    fn debug_alt(&self, f: &mut Formatter<'_>) -> FmtRes {
        writeln!(f, "ParsedArgs(")?;
        let mut n = 0;
        for arg in &self.args {
            match (arg.def, arg.value) {
                (None, Some(val)) => {
                    writeln!(f, "    Positional #{}: {:?}", n, val)?;
                    n += 1;
                }
                (Some(def), Some(val)) => writeln!(f, "    Option {:?}: {:?}", def.name(), val)?,
                (Some(def), None) => writeln!(f, "    Flag {:?}", def.name())?,
                (None, None) => {}
            }
        }
        write!(f, ")")
    }

    fn debug_norm(&self, f: &mut Formatter<'_>) -> FmtRes {
        write!(f, "ParsedArgs(")?;
        let mut n = 0;
        for (i, arg) in self.args.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }

            match (arg.def, arg.value) {
                (None, Some(val)) => {
                    write!(f, "#{}={:?}", n, val)?;
                    n += 1;
                }
                (Some(def), Some(val)) => write!(f, "{}={:?}", def.name(), val)?,
                (Some(def), None) => write!(f, "{}", def.name())?,
                (None, None) => {}
            }
        }
        write!(f, ")")
    }
}

impl Debug for ParsedArgs<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtRes {
        if self.args.is_empty() {
            return write!(f, "ParsedArgs(empty)");
        }

        if f.alternate() {
            return self.debug_alt(f);
        }

        self.debug_norm(f)
    }
}

impl<'a> Index<usize> for ParsedArgs<'a> {
    type Output = ParsedArg<'a>;

    #[inline]
    fn index(&self, index: usize) -> &ParsedArg<'a> {
        &self.args[index]
    }
}

impl<'a> IntoIterator for ParsedArgs<'a> {
    type Item = ParsedArg<'a>;
    type IntoIter = vec::IntoIter<ParsedArg<'a>>;

    fn into_iter(self) -> vec::IntoIter<ParsedArg<'a>> {
        self.args.into_iter()
    }
}

impl<'p, 'a> IntoIterator for &'p ParsedArgs<'a> {
    type Item = &'p ParsedArg<'a>;
    type IntoIter = slice::Iter<'p, ParsedArg<'a>>;

    fn into_iter(self) -> slice::Iter<'p, ParsedArg<'a>> {
        self.args.iter()
    }
}

/// An iterator over the values of an option. Created by [`ParsedArgs::values`].
#[derive(Clone, Debug)]
pub struct OptValues<'p, 'a> {
    inner: slice::Iter<'p, ParsedArg<'a>>,
    name: &'p str
}

impl<'a> Iterator for OptValues<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let name = self.name;
        self.inner.by_ref().filter(|arg| arg.is(name)).find_map(|arg| arg.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a> DoubleEndedIterator for OptValues<'_, 'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        let name = self.name;
        self.inner.by_ref().rev().filter(|arg| arg.is(name)).find_map(|arg| arg.value)
    }
}

impl FusedIterator for OptValues<'_, '_> {}

/// An iterator over the positional arguments. Created by [`ParsedArgs::positionals`].
#[derive(Clone, Debug)]
pub struct Positionals<'p, 'a> {
    inner: slice::Iter<'p, ParsedArg<'a>>
}

impl<'a> Iterator for Positionals<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.inner.by_ref().filter(|arg| arg.is_positional()).find_map(|arg| arg.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a> DoubleEndedIterator for Positionals<'_, 'a> {
    fn next_back(&mut self) -> Option<&'a str> {
        self.inner.by_ref().rev().filter(|arg| arg.is_positional()).find_map(|arg| arg.value)
    }
}

impl FusedIterator for Positionals<'_, '_> {}
