use {
    argscan::{OptionDef, ParseConfig},
    core::{hint::black_box, time::Duration},
    criterion::{BatchSize, Criterion}
};

const OPTS: [OptionDef<'static>; 8] = [
    OptionDef::flag("-a"),
    OptionDef::flag("-b"),
    OptionDef::flag("-v"),
    OptionDef::valued("-n"),
    OptionDef::valued("-o"),
    OptionDef::flag("--all"),
    OptionDef::flag("--verbose"),
    OptionDef::valued("--output")
];

static POSITIONALS: [&str; 16] = [
    "target/debug/argscan",
    "1",
    "2",
    "3",
    "4",
    "5",
    "6",
    "7",
    "8",
    "9",
    "10",
    "11",
    "12",
    "13",
    "14",
    "15"
];

static LONGS: [&str; 9] = [
    "target/debug/argscan",
    "--all",
    "--verbose",
    "--output",
    "out.txt",
    "--all",
    "--output",
    "other.txt",
    "--verbose"
];

static CLUSTERS: [&str; 7] =
    ["target/debug/argscan", "-abv", "-vvvv", "-n1000", "-abn", "10", "-vo-"];

static MIXED: [&str; 12] = [
    "target/debug/argscan",
    "-v",
    "input.txt",
    "--output",
    "out.txt",
    "-abn5",
    "second",
    "--",
    "-not-an-option",
    "--all",
    "third",
    "-"
];

fn token_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (name, tokens) in [
        ("positionals", &POSITIONALS[..]),
        ("longs", &LONGS[..]),
        ("clusters", &CLUSTERS[..]),
        ("mixed", &MIXED[..])
    ] {
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || ParseConfig::new(tokens, &OPTS),
                |cfg| {
                    // measured: validation, scanning and the result allocation
                    let _ = black_box(black_box(&*cfg).parse());
                },
                BatchSize::SmallInput
            );
        });
    }

    group.finish();
}

fn lookups(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    let parsed = ParseConfig::new(&MIXED, &OPTS).parse().expect("bench tokens must parse");

    group.bench_function("flag", |b| {
        b.iter(|| black_box(parsed.flag(black_box("--all"))));
    });

    group.bench_function("value", |b| {
        b.iter(|| black_box(parsed.value(black_box("-n"))));
    });

    group.bench_function("positional", |b| {
        b.iter(|| black_box(parsed.positional(black_box(3))));
    });

    group.finish();
}

pub fn all() {
    let mut criterion: Criterion<_> = Criterion::default()
        .sample_size(200)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .noise_threshold(0.01)
        .configure_from_args();
    token_shapes(&mut criterion);
    lookups(&mut criterion);
}

fn main() {
    all();

    Criterion::default().configure_from_args().final_summary();
}
