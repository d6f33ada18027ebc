use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use tempfile::TempDir;

use varlink::discovery::{locate, SearchLimits};
use varlink::env::{self, MemoryEnv};
use varlink::tfvars::{parse_files, parse_str};

const DEPTHS: &[usize] = &[1, 4, 8];
const VARIABLE_COUNTS: &[usize] = &[10, 100, 1000];

/// Builds `environments/bench/d1/.../dN` with one variable file per level.
fn setup_tree(depth: usize) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("failed to create temporary directory");
    let mut dir = temp_dir.path().join("environments").join("bench");
    fs::create_dir_all(&dir).expect("failed to create environment");
    fs::write(dir.join("bench.tfvars"), "region = \"us-east-1\"\n").expect("write failed");

    for level in 0..depth {
        dir = dir.join(format!("d{level}"));
        fs::create_dir_all(&dir).expect("failed to create level");
        fs::write(dir.join("level.tfvars"), format!("level = {level}\n")).expect("write failed");
    }

    (temp_dir, dir)
}

fn variable_file(count: usize) -> String {
    let mut contents = String::new();
    for i in 0..count {
        let _ = writeln!(contents, "# variable {i}\nvar_{i} = \"value {i}\"");
    }
    contents
}

fn bench_locate(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate");

    for &depth in DEPTHS {
        let (_temp, start) = setup_tree(depth);
        let limits = SearchLimits::new(1, depth + 8);

        group.bench_with_input(BenchmarkId::from_parameter(depth), &start, |b, start| {
            b.iter(|| locate(black_box(start), limits).expect("locate failed"));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for &count in VARIABLE_COUNTS {
        let contents = variable_file(count);
        group.bench_with_input(BenchmarkId::new("parse_str", count), &contents, |b, text| {
            b.iter(|| parse_str(black_box(text)));
        });

        let temp_dir = TempDir::new().expect("failed to create temporary directory");
        let path = temp_dir.path().join("vars.tfvars");
        fs::write(&path, &contents).expect("write failed");
        group.bench_with_input(BenchmarkId::new("parse_files", count), &path, |b, path| {
            b.iter(|| parse_files(black_box(&[path])).expect("parse failed"));
        });
    }

    group.finish();
}

fn bench_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply");

    for &count in VARIABLE_COUNTS {
        let vars = parse_str(&variable_file(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &vars, |b, vars| {
            b.iter(|| {
                let mut store = MemoryEnv::new();
                env::apply(black_box(vars), &mut store);
                env::deactivate(&mut store)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_locate, bench_parse, bench_apply);
criterion_main!(benches);
