//! Benchmarks for the directory core
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use docentes::directory::{decode_payload, tally, TeacherRecord, ViewEvent, ViewState};
use docentes::render::{render, render_text};

fn create_test_records(count: usize) -> Vec<TeacherRecord> {
    (0..count)
        .map(|i| {
            let sex = match i % 5 {
                0 | 1 => "M",
                2 | 3 => "F",
                _ => "X",
            };
            TeacherRecord::new(i.to_string(), format!("Docente {}", i), sex, "555-0000")
        })
        .collect()
}

fn bench_tally(c: &mut Criterion) {
    let mut group = c.benchmark_group("tally");

    for size in [100, 1000, 10000] {
        let records = create_test_records(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("tally_{}", size), |b| {
            b.iter(|| tally(black_box(&records)))
        });

        let body = serde_json::to_vec(&records).unwrap();
        group.bench_function(format!("decode_{}", size), |b| {
            b.iter(|| decode_payload(black_box(&body)).unwrap())
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");

    for size in [100, 1000] {
        let mut state = ViewState::new();
        state.apply(ViewEvent::CycleFinished {
            ticket: 1,
            outcome: Ok(create_test_records(size)),
            at: chrono::Utc::now(),
        });

        group.bench_function(format!("view_{}", size), |b| {
            b.iter(|| render(black_box(&state)))
        });

        let view = render(&state);
        group.bench_function(format!("text_{}", size), |b| {
            b.iter(|| render_text(black_box(&view), None))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tally, bench_render);
criterion_main!(benches);
