use clap::Parser;
use concordance_cli::args::Args;
use concordance_cli::config::Config;
use concordance_cli::presentation::write_report;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::Cursor;

fn corpus() -> String {
    let words = ["the", "Quick", "brown", "fox,", "jumps", "over", "lazy", "dog's", "(tail)"];
    let mut text = String::new();
    for i in 0..50_000 {
        text.push_str(words[i % words.len()]);
        text.push(if i % 12 == 0 { '\n' } else { ' ' });
    }
    text
}

fn benchmark_cli_parsing(c: &mut Criterion) {
    c.bench_function("parse_args_simple", |b| {
        b.iter(|| {
            let args = Args::try_parse_from(black_box(["concordance", "-n", "20", "book.txt"])).unwrap();
            black_box(args);
        })
    });
}

fn benchmark_end_to_end(c: &mut Criterion) {
    let text = corpus();
    let config = Config::default();
    c.bench_function("build_and_render_table", |b| {
        b.iter(|| {
            let concordance =
                concordance_engine::run_reader(Cursor::new(black_box(text.as_bytes())), &config)
                    .unwrap();
            let mut out = Vec::new();
            write_report(&mut out, &concordance, &config).unwrap();
            black_box(out);
        })
    });
}

criterion_group!(benches, benchmark_cli_parsing, benchmark_end_to_end);
criterion_main!(benches);
