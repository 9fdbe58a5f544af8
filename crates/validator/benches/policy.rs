// Policy evaluation benchmarks.
//
// Measures a full preset run (construction excluded) and the cost of the
// grapheme-aware counting validators on longer inputs.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sieve_validator::prelude::*;

fn bench_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("presets");

    let mut hard = hard_password("Str0ng!Pass99");
    group.bench_function("hard_pass", |b| b.iter(|| black_box(hard.check())));

    let mut failing = hard_password("password");
    group.bench_function("hard_fail", |b| b.iter(|| black_box(failing.check())));

    group.finish();
}

fn bench_policy_width(c: &mut Criterion) {
    let inputs: Vec<String> = (0..64).map(|i| format!("user-{i}@example.com")).collect();
    let mut policy = SingleInputPolicy::new(inputs, vec![Box::new(email()), Box::new(has_max_length(64))]);

    c.bench_function("policy_64_emails", |b| b.iter(|| black_box(policy.check())));
}

fn bench_counting(c: &mut Criterion) {
    let text = "Ünïcödé 🚀 text with 123 digits and MIXED case! ".repeat(32);
    let mut validator = ContainsNSpecialChars::with_input(text, 10);

    c.bench_function("count_special_graphemes", |b| b.iter(|| black_box(validator.check())));
}

criterion_group!(benches, bench_presets, bench_policy_width, bench_counting);
criterion_main!(benches);
