extern crate argscan;

use {
    argscan::{ErrorKind, OptionDef, ParseConfig, ParseError},
    proptest::{collection::vec, prelude::*}
};

const OPTS: [OptionDef<'static>; 5] = [
    OptionDef::flag("-a"),
    OptionDef::flag("-b"),
    OptionDef::valued("-n"),
    OptionDef::flag("--all"),
    OptionDef::valued("--output")
];

// a mix of known and unknown options, clusters, values and plain words
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("--".to_string()),
        Just("-".to_string()),
        "-{1,2}[abnx]{0,3}",
        "--(all|output|out)",
        "[a-z0-9]{0,4}",
    ]
}

// tokens that never consume the following token
fn flag_or_word() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("-a".to_string()),
        Just("-ab".to_string()),
        Just("--all".to_string()),
        "[a-z]{1,4}",
    ]
}

fn with_prog(rest: Vec<String>) -> Vec<String> {
    let mut tokens = Vec::with_capacity(rest.len() + 1);
    tokens.push("prog".to_string());
    tokens.extend(rest);
    tokens
}

proptest! {
    #[test]
    fn parse_is_idempotent(rest in vec(token(), 0..12), max in 0usize..6) {
        let tokens = with_prog(rest);
        let cfg = ParseConfig::new(&tokens, &OPTS).set_max_positional(max);
        prop_assert_eq!(cfg.parse(), cfg.parse());
    }

    #[test]
    fn values_point_into_tokens(rest in vec(token(), 0..12)) {
        let tokens = with_prog(rest);
        if let Ok(parsed) = ParseConfig::new(&tokens, &OPTS).parse() {
            for value in parsed.iter().filter_map(|arg| arg.value()) {
                let start = value.as_ptr() as usize;
                let inside = tokens[1..].iter().any(|t| {
                    let t_start = t.as_ptr() as usize;
                    t_start <= start && start + value.len() <= t_start + t.len()
                });
                prop_assert!(inside, "value {:?} is not a span of the tokens", value);
            }
        }
    }

    #[test]
    fn double_dash_ends_options(
        head in vec(flag_or_word(), 0..6),
        tail in vec("-{0,2}[a-z]{0,3}", 0..6)
    ) {
        let mut rest = head;
        rest.push("--".to_string());
        rest.extend(tail.iter().cloned());
        let tokens = with_prog(rest);

        let parsed = ParseConfig::new(&tokens, &OPTS).parse().unwrap();
        let results = parsed.as_slice();
        prop_assert!(results.len() >= tail.len());

        let after = &results[results.len() - tail.len()..];
        for (arg, expected) in after.iter().zip(&tail) {
            prop_assert!(arg.is_positional());
            prop_assert_eq!(arg.value(), Some(expected.as_str()));
        }
    }

    #[test]
    fn positional_maximum_enforced(words in vec("[a-z]{1,4}", 0..8), max in 0usize..8) {
        let tokens = with_prog(words.clone());
        let result = ParseConfig::new(&tokens, &OPTS).set_max_positional(max).parse();

        if words.len() <= max {
            let parsed = result.unwrap();
            prop_assert_eq!(parsed.positional_count(), words.len());
            let expected: Vec<&str> = words.iter().map(String::as_str).collect();
            prop_assert_eq!(parsed.positionals().collect::<Vec<_>>(), expected);
        } else {
            // the first positional past the limit sits right after max others and the program name
            prop_assert_eq!(
                result,
                Err(ParseError::TooManyPositionalArguments { index: max + 1, max })
            );
        }
    }

    #[test]
    fn positional_minimum_enforced(words in vec("[a-z]{1,4}", 0..6), min in 0usize..6) {
        let tokens = with_prog(words.clone());
        let result = ParseConfig::new(&tokens, &OPTS).set_min_positional(min).parse();
        prop_assert_eq!(result.is_ok(), words.len() >= min);
        if let Err(err) = result {
            prop_assert_eq!(err.kind(), ErrorKind::TooFewPositionalArguments);
        }
    }

    #[test]
    fn bad_bounds_fail_before_scanning(rest in vec(token(), 0..8), min in 1usize..10) {
        let tokens = with_prog(rest);
        let result = ParseConfig::new(&tokens, &OPTS)
            .set_min_positional(min)
            .set_max_positional(min - 1)
            .parse();
        prop_assert_eq!(result.map_err(|err| err.kind()), Err(ErrorKind::InvalidConfiguration));
    }
}
