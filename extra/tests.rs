extern crate argscan;

use {
    argscan::{ConfigError, ErrorKind, OptionDef, ParseConfig, ParseError, ParsedArgs},
    pretty_assertions::assert_eq
};

const OPTS: [OptionDef<'static>; 8] = [
    OptionDef::flag("-a"),
    OptionDef::flag("-b"),
    OptionDef::flag("-v"),
    OptionDef::valued("-n"),
    OptionDef::valued("-o"),
    OptionDef::flag("--all"),
    OptionDef::flag("--foo"),
    OptionDef::valued("--output")
];

fn parse<'a>(tokens: &'a [&'a str]) -> Result<ParsedArgs<'a>, ParseError> {
    ParseConfig::new(tokens, &OPTS).parse()
}

// (option name or None for positionals, value)
fn summary<'a>(parsed: &ParsedArgs<'a>) -> Vec<(Option<&'a str>, Option<&'a str>)> {
    parsed.iter().map(|arg| (arg.name(), arg.value())).collect()
}

// config validation

#[test]
fn min_above_max_rejected_without_tokens() {
    let tokens: [&str; 0] = [];
    let err = ParseConfig::new(&tokens, &OPTS)
        .set_min_positional(3)
        .set_max_positional(2)
        .parse()
        .unwrap_err();

    assert_eq!(
        err,
        ParseError::InvalidConfiguration(ConfigError::PositionalBounds { min: 3, max: 2 })
    );
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn min_above_max_rejected_before_scanning() {
    // the unknown option would otherwise be reported first
    let tokens = ["prog", "--nope"];
    let err = ParseConfig::new(&tokens, &OPTS).set_positional(5..=1).parse().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn malformed_names_rejected() {
    for name in ["", "-", "x", "ab", "-ab", "-é-", "+x"] {
        let opts = [OptionDef::flag("-a"), OptionDef::flag(name)];
        let tokens = ["prog"];
        let err = ParseConfig::new(&tokens, &opts).parse().unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidConfiguration(ConfigError::OptionName { name: name.into() }),
            "name {:?}",
            name
        );
    }
}

#[test]
fn well_formed_names_accepted() {
    for name in ["-a", "-é", "-1", "--", "--x", "--long-name"] {
        assert_eq!(OptionDef::valued(name).validate(), Ok(()), "name {:?}", name);
    }
}

#[test]
fn first_malformed_name_reported() {
    let opts = [OptionDef::flag("-ab"), OptionDef::flag("cd")];
    let tokens = ["prog"];
    let err = ParseConfig::new(&tokens, &opts).parse().unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidConfiguration(ConfigError::OptionName { name: "-ab".into() })
    );
}

// empty input

#[test]
fn program_name_only() {
    let tokens = ["prog"];
    let parsed = parse(&tokens).unwrap();
    assert!(parsed.is_empty());
    assert_eq!(parsed.positional_count(), 0);

    let err = ParseConfig::new(&tokens, &OPTS).set_min_positional(1).parse().unwrap_err();
    assert_eq!(err, ParseError::TooFewPositionalArguments { found: 0, min: 1 });
}

#[test]
fn no_tokens_at_all() {
    let tokens: [&str; 0] = [];
    assert!(parse(&tokens).unwrap().is_empty());
}

#[test]
fn program_name_is_never_parsed() {
    let tokens = ["--nope"];
    assert!(parse(&tokens).unwrap().is_empty());
}

// long options

#[test]
fn long_flag() {
    let tokens = ["prog", "--all"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("--all"), None)]);
    assert!(!parsed[0].has_value());
}

#[test]
fn long_with_value() {
    let tokens = ["prog", "--output", "out.txt", "in.txt"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("--output"), Some("out.txt")), (None, Some("in.txt"))]);
}

#[test]
fn long_value_may_look_like_an_option() {
    let tokens = ["prog", "--output", "--all"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("--output"), Some("--all"))]);
    assert!(!parsed.flag("--all"));
}

#[test]
fn long_value_may_be_double_dash() {
    let tokens = ["prog", "--output", "--", "-a"];
    let parsed = parse(&tokens).unwrap();
    // `--` was consumed as a value, so `-a` is still an option
    assert_eq!(summary(&parsed), vec![(Some("--output"), Some("--")), (Some("-a"), None)]);
}

#[test]
fn long_requires_exact_match() {
    let tokens = ["prog", "--fo"];
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::UnrecognizedArgument { index: 1, name: "--fo".into() }
    );

    let tokens = ["prog", "--fooo"];
    assert_eq!(parse(&tokens).unwrap_err().kind(), ErrorKind::UnrecognizedArgument);
}

#[test]
fn long_with_equals_is_not_split() {
    let tokens = ["prog", "--output=out.txt"];
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::UnrecognizedArgument { index: 1, name: "--output=out.txt".into() }
    );
}

#[test]
fn long_missing_value() {
    let tokens = ["prog", "--output"];
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::MissingValue { index: 1, name: "--output".into() }
    );
}

#[test]
fn first_definition_wins() {
    let opts = [OptionDef::flag("--dup"), OptionDef::valued("--dup")];
    let tokens = ["prog", "--dup", "x"];
    let parsed = ParseConfig::new(&tokens, &opts).parse().unwrap();
    assert_eq!(summary(&parsed), vec![(Some("--dup"), None), (None, Some("x"))]);
    assert!(core::ptr::eq(parsed[0].definition().unwrap(), &opts[0]));
}

// short options

#[test]
fn combined_short_flags() {
    let tokens = ["prog", "-ab"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-a"), None), (Some("-b"), None)]);
}

#[test]
fn repeated_short_flags_counted() {
    let tokens = ["prog", "-vvv", "-v"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(parsed.count("-v"), 4);
    assert_eq!(parsed.count("-a"), 0);
}

#[test]
fn short_inline_value() {
    let tokens = ["prog", "-n1000"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-n"), Some("1000"))]);
}

#[test]
fn short_separate_value() {
    let tokens = ["prog", "-n", "1000", "x"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-n"), Some("1000")), (None, Some("x"))]);
}

#[test]
fn value_ends_cluster() {
    // `b` is part of the value, not a flag
    let tokens = ["prog", "-anb"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-a"), None), (Some("-n"), Some("b"))]);

    // `-o` at the end of a cluster takes the next token
    let tokens = ["prog", "-abo", "file", "-v"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(
        summary(&parsed),
        vec![(Some("-a"), None), (Some("-b"), None), (Some("-o"), Some("file")), (Some("-v"), None)]
    );
}

#[test]
fn short_value_may_start_with_dash() {
    let tokens = ["prog", "-n", "-5"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-n"), Some("-5"))]);

    let tokens = ["prog", "-n-5"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-n"), Some("-5"))]);
}

#[test]
fn short_missing_value() {
    let tokens = ["prog", "-a", "-bn"];
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::MissingValue { index: 2, name: "-n".into() }
    );
}

#[test]
fn unknown_short_in_cluster() {
    let tokens = ["prog", "-abx", "rest"];
    assert_eq!(
        parse(&tokens).unwrap_err(),
        ParseError::UnrecognizedArgument { index: 1, name: "-x".into() }
    );
}

#[test]
fn short_does_not_match_long_names() {
    let opts = [OptionDef::flag("--a")];
    let tokens = ["prog", "-a"];
    let err = ParseConfig::new(&tokens, &opts).parse().unwrap_err();
    assert_eq!(err, ParseError::UnrecognizedArgument { index: 1, name: "-a".into() });
}

#[test]
fn multibyte_short_options() {
    let opts = [OptionDef::flag("-é"), OptionDef::valued("-ñ")];
    let tokens = ["prog", "-éñvalüe"];
    let parsed = ParseConfig::new(&tokens, &opts).parse().unwrap();
    assert_eq!(summary(&parsed), vec![(Some("-é"), None), (Some("-ñ"), Some("valüe"))]);
}

// positionals

#[test]
fn lone_dash_is_positional() {
    let tokens = ["prog", "-", "-a"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(None, Some("-")), (Some("-a"), None)]);
}

#[test]
fn empty_token_is_positional() {
    let tokens = ["prog", ""];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(summary(&parsed), vec![(None, Some(""))]);
}

#[test]
fn double_dash_ends_options() {
    let tokens = ["prog", "-a", "--", "-b", "--all", "--", "-"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(
        summary(&parsed),
        vec![
            (Some("-a"), None),
            (None, Some("-b")),
            (None, Some("--all")),
            (None, Some("--")),
            (None, Some("-"))
        ]
    );
    assert_eq!(parsed.positional_count(), 4);
}

#[test]
fn double_dash_alone_produces_nothing() {
    let tokens = ["prog", "--"];
    assert!(parse(&tokens).unwrap().is_empty());
}

#[test]
fn too_many_positionals() {
    let tokens = ["prog", "a", "b"];
    let err = ParseConfig::new(&tokens, &OPTS).set_max_positional(1).parse().unwrap_err();
    assert_eq!(err, ParseError::TooManyPositionalArguments { index: 2, max: 1 });
}

#[test]
fn too_many_positionals_reported_before_later_errors() {
    let tokens = ["prog", "a", "b", "--nope"];
    let err = ParseConfig::new(&tokens, &OPTS).set_max_positional(1).parse().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TooManyPositionalArguments);
}

#[test]
fn positionals_after_double_dash_are_counted() {
    let tokens = ["prog", "a", "--", "-b"];
    let err = ParseConfig::new(&tokens, &OPTS).set_positional(..=1).parse().unwrap_err();
    assert_eq!(err, ParseError::TooManyPositionalArguments { index: 3, max: 1 });
}

#[test]
fn too_few_positionals() {
    let tokens = ["prog", "a", "-v"];
    let err = ParseConfig::new(&tokens, &OPTS).set_positional(2..).parse().unwrap_err();
    assert_eq!(err, ParseError::TooFewPositionalArguments { found: 1, min: 2 });
}

#[test]
fn option_values_are_not_positionals() {
    let tokens = ["prog", "-n", "1", "--output", "2", "3"];
    let parsed = ParseConfig::new(&tokens, &OPTS).set_positional(1..=1).parse().unwrap();
    assert_eq!(parsed.positional_count(), 1);
    assert_eq!(parsed.positional(0), Some("3"));
}

#[test]
fn positional_bounds_from_ranges() {
    let tokens: [&str; 0] = [];
    let cfg = ParseConfig::new(&tokens, &OPTS);

    let r = cfg.set_positional(1..3);
    assert_eq!((r.min_positional(), r.max_positional()), (1, 2));
    let r = cfg.set_positional(..);
    assert_eq!((r.min_positional(), r.max_positional()), (0, usize::MAX));
    let r = cfg.set_positional(..0);
    assert_eq!((r.min_positional(), r.max_positional()), (0, 0));
    let r = cfg.set_positional(4..=4);
    assert_eq!((r.min_positional(), r.max_positional()), (4, 4));
}

// results

#[test]
fn order_is_preserved() {
    let tokens = ["prog", "x", "-v", "--output", "o", "y", "-n3", "z"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(
        summary(&parsed),
        vec![
            (None, Some("x")),
            (Some("-v"), None),
            (Some("--output"), Some("o")),
            (None, Some("y")),
            (Some("-n"), Some("3")),
            (None, Some("z"))
        ]
    );
    assert_eq!(parsed.positionals().collect::<Vec<_>>(), vec!["x", "y", "z"]);
    assert_eq!(parsed.positionals().rev().collect::<Vec<_>>(), vec!["z", "y", "x"]);
    assert_eq!(parsed.positional(3), None);
}

#[test]
fn values_in_order_and_last_wins() {
    let tokens = ["prog", "-n1", "-v", "-n", "2", "-vn3"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(parsed.values("-n").collect::<Vec<_>>(), vec!["1", "2", "3"]);
    assert_eq!(parsed.value("-n"), Some("3"));
    assert_eq!(parsed.value("-v"), None);
    assert_eq!(parsed.value("-o"), None);
    assert!(parsed.flag("-n"));
    assert!(!parsed.flag("-o"));
}

#[test]
fn values_borrow_from_tokens() {
    let owned: Vec<String> =
        ["prog", "-n1000", "--output", "out", "pos"].iter().map(|s| s.to_string()).collect();
    let parsed = ParseConfig::new(&owned, &OPTS).parse().unwrap();

    let inline = parsed.value("-n").unwrap();
    assert!(core::ptr::eq(inline.as_ptr(), owned[1][2..].as_ptr()));
    let separate = parsed.value("--output").unwrap();
    assert!(core::ptr::eq(separate.as_ptr(), owned[3].as_ptr()));
    let positional = parsed.positional(0).unwrap();
    assert!(core::ptr::eq(positional.as_ptr(), owned[4].as_ptr()));
}

#[test]
fn parse_is_repeatable() {
    let tokens = ["prog", "-abn", "5", "--all", "x", "--", "-v"];
    let cfg = ParseConfig::new(&tokens, &OPTS).set_positional(..=2);
    let first = cfg.parse().unwrap();
    let second = argscan::parse(&cfg).unwrap();
    assert_eq!(first, second);
}

#[test]
fn into_iter_and_into_vec() {
    let tokens = ["prog", "-a", "x"];
    let parsed = parse(&tokens).unwrap();
    let names: Vec<_> = (&parsed).into_iter().map(|arg| arg.is_positional()).collect();
    assert_eq!(names, vec![false, true]);
    assert_eq!(parsed.clone().into_iter().count(), 2);
    assert_eq!(parsed.into_vec().len(), 2);
}

#[test]
fn debug_formats() {
    let tokens = ["prog", "-v", "-n", "10", "file"];
    let parsed = parse(&tokens).unwrap();
    assert_eq!(format!("{:?}", parsed), "ParsedArgs(-v, -n=\"10\", #0=\"file\")");
    assert_eq!(
        format!("{:#?}", parsed),
        "ParsedArgs(\n    Flag \"-v\"\n    Option \"-n\": \"10\"\n    Positional #0: \"file\"\n)"
    );

    let tokens = ["prog"];
    assert_eq!(format!("{:?}", parse(&tokens).unwrap()), "ParsedArgs(empty)");
}

#[test]
fn error_messages() {
    assert_eq!(
        ParseError::UnrecognizedArgument { index: 2, name: "-x".into() }.to_string(),
        "unrecognized argument `-x` at position 2"
    );
    assert_eq!(
        ParseError::MissingValue { index: 1, name: "--output".into() }.to_string(),
        "option `--output` at position 1 requires a value"
    );
    assert_eq!(
        ParseError::from(ConfigError::PositionalBounds { min: 2, max: 1 }).to_string(),
        "invalid configuration: minimum positional count 2 exceeds the maximum of 1"
    );
}

#[test]
fn definition_accessors() {
    let short = OptionDef::flag("-x");
    assert_eq!(short.short(), Some('x'));
    assert!(!short.is_long());
    assert!(!short.takes_value());
    assert!(short.set_takes_value(true).takes_value());

    let long = OptionDef::valued("--xy");
    assert_eq!(long.short(), None);
    assert!(long.is_long());
    assert_eq!(long.name(), "--xy");
}
