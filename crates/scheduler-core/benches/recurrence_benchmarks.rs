use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scheduler_core::models::TaskDraft;
use scheduler_core::normalizer::normalize;
use scheduler_core::recurrence::{advance, next_date, RecurrenceRule};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn bench_rule_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("rule_parsing");
    for rule in ["d 1", "d 400", "y", "w 1,2,3", "bogus"] {
        group.bench_with_input(BenchmarkId::from_parameter(rule), rule, |b, rule| {
            b.iter(|| black_box(rule).parse::<RecurrenceRule>())
        });
    }
    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let start = day(1990, 1, 1);
    let reference = day(2024, 6, 1);

    for rule in [
        RecurrenceRule::EveryNDays(1),
        RecurrenceRule::EveryNDays(30),
        RecurrenceRule::EveryNDays(400),
        RecurrenceRule::EveryYear,
    ] {
        group.bench_with_input(
            BenchmarkId::from_parameter(rule.to_string()),
            &rule,
            |b, rule| b.iter(|| advance(black_box(*rule), black_box(start), black_box(reference))),
        );
    }
    group.finish();
}

fn bench_next_date(c: &mut Criterion) {
    let now = day(2024, 6, 1);
    c.bench_function("next_date_weekly_catch_up", |b| {
        b.iter(|| next_date(black_box(now), black_box("20200101"), black_box("d 7")))
    });
}

fn bench_normalize(c: &mut Criterion) {
    let today = day(2024, 6, 1);
    let draft = TaskDraft {
        date: "20230101".to_string(),
        title: "Benchmark Task".to_string(),
        repeat: "d 14".to_string(),
        ..Default::default()
    };
    c.bench_function("normalize_past_recurring", |b| {
        b.iter(|| normalize(black_box(draft.clone()), black_box(today)))
    });
}

criterion_group!(
    benches,
    bench_rule_parsing,
    bench_advance,
    bench_next_date,
    bench_normalize
);
criterion_main!(benches);
