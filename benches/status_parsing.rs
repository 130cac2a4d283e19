//! Benchmarks for parsing and rendering `git status --porcelain=v2` output.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gis::config::GisConfig;
use gis::output::Palette;
use gis::status::{self, parser};

const HEADER: &str = "# branch.oid 1b4d2a3f9e0c7d6b5a4f3e2d1c0b9a8f7e6d5c4b
# branch.head feature/parsing
# branch.upstream origin/feature/parsing
# branch.ab +2 -9
";

/// Status output with `changes` entries cycling through every line kind.
fn status_output(changes: usize) -> String {
    let mut out = String::from(HEADER);
    for i in 0..changes {
        let line = match i % 5 {
            0 => format!(
                "1 .M N... 100644 100644 100644 3f2a 3f2a src/module_{}/lib.rs\n",
                i
            ),
            1 => format!(
                "1 A. N... 000000 100644 100644 0000 9c1e docs/page_{}.md\n",
                i
            ),
            2 => format!(
                "2 R. N... 100644 100644 100644 77aa 77aa R100 text-{0:04}\ttext-{0}\n",
                i
            ),
            3 => format!(
                "u UU N... 100644 100644 100644 100644 1a 2b 3c conflict_{}.txt\n",
                i
            ),
            _ => format!("? scratch/notes_{}.txt\n", i),
        };
        out.push_str(&line);
    }
    out
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_status");
    for size in [0, 10, 100, 1000] {
        let output = status_output(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &output, |b, output| {
            b.iter(|| parser::parse_output(black_box(output)))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let config = GisConfig::new("/work");
    let snapshot = parser::parse_output(&status_output(100));

    let mut group = c.benchmark_group("render_status");
    for (name, palette) in [("plain", Palette::new(false)), ("colored", Palette::colored())] {
        group.bench_function(format!("full_{}", name), |b| {
            b.iter(|| status::render_full(black_box(&snapshot), palette))
        });
        group.bench_function(format!("one_line_{}", name), |b| {
            b.iter(|| {
                status::render_one_line(
                    black_box(&snapshot),
                    |branch| status::render::color_branch(branch, &config, palette),
                    palette,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse, bench_render);
criterion_main!(benches);
