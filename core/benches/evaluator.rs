//! Benchmarks for expression evaluation.
//!
//! Run with: `cargo bench` in the core/ directory.
//!
//! Benchmark groups:
//! 1. exponential: interpolation over tables of increasing size
//! 2. interval: step lookups over tables of increasing size
//! 3. categorical: string key lookups

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use serde_json::{Map, Value, json};
use stylefn_core::{EvalContext, FunctionSpec, TargetKind, evaluator};

/// A zoom function with `n` stops at keys 0, 1, ..., n-1.
fn generate_stops(n: usize, output: impl Fn(usize) -> Value) -> Vec<Value> {
    (0..n).map(|i| json!([i, output(i)])).collect()
}

fn bench_exponential(c: &mut Criterion) {
    let mut group = c.benchmark_group("exponential");

    for size in [2, 16, 128, 1024] {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let spec = FunctionSpec::from_json(&json!({
                "base": 1.2,
                "stops": generate_stops(size, |i| json!(i * 2)),
            }))
            .expect("invalid function");
            let expr = evaluator::build(&spec, TargetKind::Number).expect("build failed");
            let context = EvalContext::at_zoom(size as f64 / 2.0 + 0.5);

            b.iter(|| black_box(expr.evaluate(black_box(&context))));
        });
    }

    group.finish();
}

fn bench_interval(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval");

    for size in [2, 16, 128, 1024] {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let spec = FunctionSpec::from_json(&json!({
                "stops": generate_stops(size, |i| json!(format!("#{:06X}", i * 97))),
            }))
            .expect("invalid function");
            let expr = evaluator::build(&spec, TargetKind::String).expect("build failed");
            let context = EvalContext::at_zoom(size as f64 / 3.0);

            b.iter(|| black_box(expr.evaluate(black_box(&context))));
        });
    }

    group.finish();
}

fn bench_categorical(c: &mut Criterion) {
    let mut group = c.benchmark_group("categorical");

    for size in [4, 64, 1024] {
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let stops: Vec<Value> = (0..size).map(|i| json!([format!("class-{i}"), i])).collect();
            let spec = FunctionSpec::from_json(&json!({
                "property": "class",
                "type": "categorical",
                "default": -1,
                "stops": stops,
            }))
            .expect("invalid function");
            let expr = evaluator::build(&spec, TargetKind::Number).expect("build failed");

            let mut feature = Map::new();
            feature.insert("class".to_string(), json!(format!("class-{}", size - 1)));
            let context = EvalContext::for_feature(&feature);

            b.iter(|| black_box(expr.evaluate(black_box(&context))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_exponential, bench_interval, bench_categorical);
criterion_main!(benches);
