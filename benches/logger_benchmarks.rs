//! Criterion benchmarks for tagged_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::io;
use std::sync::Arc;
use std::thread;
use tagged_logger::prelude::*;

fn discard_logger(flags: Flags) -> Logger {
    Logger::builder()
        .writer(io::sink())
        .flags(flags)
        .build()
        .unwrap()
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("builder_null", |b| {
        b.iter(|| {
            let logger = Logger::new("null").unwrap();
            black_box(logger)
        });
    });

    let parent = discard_logger(Flags::DEFAULT);
    group.bench_function("child", |b| {
        b.iter(|| {
            let child = parent.child(["request", "42"]);
            black_box(child)
        });
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    let bare = discard_logger(Flags::NONE);
    group.bench_function("no_header_fields", |b| {
        b.iter(|| {
            bare.info(black_box("Info message"));
        });
    });

    let dated = discard_logger(Flags::DATE | Flags::MICROSECONDS);
    group.bench_function("date_microseconds", |b| {
        b.iter(|| {
            dated.info(black_box("Info message"));
        });
    });

    let full = discard_logger(Flags::DEFAULT);
    full.set_tags(["api", "eu-west", "v2"]);
    group.bench_function("default_flags_tagged", |b| {
        b.iter(|| {
            full.info(black_box("Info message"));
        });
    });

    let colored = discard_logger(Flags::DEFAULT);
    colored.set_color(true);
    group.bench_function("colored", |b| {
        b.iter(|| {
            colored.warn(black_box("Warn message"));
        });
    });

    group.bench_function("formatted", |b| {
        b.iter(|| {
            full.info(format_args!("user {} did {}", black_box(42), black_box("login")));
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Flags::DEFAULT);
    logger.set_level(Level::Error).unwrap();

    group.bench_function("filtered_plain", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    group.bench_function("filtered_formatted", |b| {
        b.iter(|| {
            logger.debug(format_args!("{:?}", black_box([1u64; 32])));
        });
    });

    group.bench_function("filtered_structured", |b| {
        b.iter(|| {
            logger.text().str("key", "value").info(black_box("Filtered"));
        });
    });

    group.finish();
}

// ============================================================================
// Structured Logging Benchmarks
// ============================================================================

fn bench_structured(c: &mut Criterion) {
    let mut group = c.benchmark_group("structured");
    group.throughput(Throughput::Elements(1));

    let logger = discard_logger(Flags::DEFAULT);

    group.bench_function("text_three_fields", |b| {
        b.iter(|| {
            logger
                .text()
                .str("user", "ada")
                .bool("admin", true)
                .field("latency_ms", 12.5)
                .info(black_box("Request processed"));
        });
    });

    group.bench_function("json_three_fields", |b| {
        b.iter(|| {
            logger
                .json()
                .str("user", "ada")
                .bool("admin", true)
                .field("latency_ms", 12.5)
                .info(black_box("Request processed"));
        });
    });

    group.finish();
}

// ============================================================================
// Concurrent Logging Benchmarks
// ============================================================================

fn bench_concurrent_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_logging");

    for threads in [2usize, 4] {
        group.throughput(Throughput::Elements((threads * 100) as u64));

        group.bench_function(format!("shared_{}_threads", threads), |b| {
            let logger = Arc::new(discard_logger(Flags::DEFAULT));
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let logger = Arc::clone(&logger);
                        thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format_args!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });

        group.bench_function(format!("children_{}_threads", threads), |b| {
            let parent = discard_logger(Flags::DEFAULT);
            b.iter(|| {
                let handles: Vec<_> = (0..threads)
                    .map(|t| {
                        let child = parent.child([format!("worker-{}", t)]);
                        thread::spawn(move || {
                            for i in 0..100 {
                                child.info(format_args!("message {}", i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_level_filtering,
    bench_structured,
    bench_concurrent_logging,
);
criterion_main!(benches);
