//! Record vs. map aggregation microbenchmarks
//!
//! Run with: cargo bench --bench representations
//!
//! Both sides aggregate the same data: the map batch is converted from the
//! record batch, so only field access differs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use shapebench_core::aggregate::{map, record};
use shapebench_core::{ages, generate_profile_records, ProfileMap, SyntheticProfileSource};

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_statistics");

    for size in [1_000_usize, 10_000, 100_000] {
        let mut source = SyntheticProfileSource::new(StdRng::seed_from_u64(42));
        let year = source.current_year();
        let records = generate_profile_records(&mut source, size, year);
        let record_ages = ages(&records);
        let maps: Vec<ProfileMap> = records.iter().map(|profile| profile.to_map()).collect();

        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("record", size), &size, |b, _| {
            b.iter(|| {
                black_box(record::largest_blood_type(black_box(&records)));
                black_box(record::mean_location(black_box(&records)).ok());
                black_box(record::oldest_age(black_box(&record_ages)).ok());
                black_box(record::average_age(black_box(&record_ages)).ok());
            })
        });

        group.bench_with_input(BenchmarkId::new("map", size), &size, |b, _| {
            b.iter(|| {
                black_box(map::largest_blood_type(black_box(&maps)).ok());
                black_box(map::mean_location(black_box(&maps)).ok());
                black_box(map::oldest_age(black_box(&maps)).ok());
                black_box(map::average_age(black_box(&maps)).ok());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics);
criterion_main!(benches);
