use {
    argscan::{OptionDef, ParseConfig, ParsedArgs},
    std::{env, process::ExitCode},
    tracing_subscriber::EnvFilter
};

const OPTIONS: [OptionDef<'static>; 6] = [
    OptionDef::flag("-v"),
    OptionDef::flag("--verbose"),
    OptionDef::valued("-n"),
    OptionDef::valued("--number"),
    OptionDef::valued("-o"),
    OptionDef::valued("--output")
];

const MAX_POSITIONAL: usize = 8;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("ARGSCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
        )
        .with_writer(std::io::stderr)
        .init();

    let mut tokens = Vec::new();
    for (i, arg) in env::args_os().enumerate() {
        match arg.into_string() {
            Ok(s) => tokens.push(s),
            Err(raw) => {
                eprintln!("argscan: argument {} is not valid UTF-8: {:?}", i, raw);
                return ExitCode::from(2);
            }
        }
    }

    let config = ParseConfig::new(&tokens, &OPTIONS).set_max_positional(MAX_POSITIONAL);
    match config.parse() {
        Ok(parsed) => {
            report(&parsed);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("argscan: {}", err);
            ExitCode::from(2)
        }
    }
}

fn report(parsed: &ParsedArgs<'_>) {
    println!("Parsed: {:?}\n", parsed);
    println!("Parsed pretty: {:#?}\n", parsed);

    let verbosity = parsed.count("-v") + parsed.count("--verbose");
    let number = parsed.value("--number").or_else(|| parsed.value("-n"));
    let output = parsed.value("--output").or_else(|| parsed.value("-o"));

    println!("verbosity: {}", verbosity);
    println!("number: {:?}", number);
    println!("output: {:?}", output);
    for (n, positional) in parsed.positionals().enumerate() {
        println!("positional #{}: {}", n, positional);
    }
}
