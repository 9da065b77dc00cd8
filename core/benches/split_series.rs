//! Splitting a large flush of single-point series, sequentially and with
//! sibling branches forked across cores.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serializer_core::config::SerializerConfig;
use serializer_core::metrics::{MetricType, Point, Serie, SeriesMarshaler};
use serializer_core::split::ParallelismProfile;

fn single_point_series(count: usize) -> Vec<Serie> {
    (0..count)
        .map(|i| Serie {
            name: format!("test.metrics{i}"),
            points: vec![Point { ts: 12345.0, value: 1.2 * i as f64 }],
            mtype: MetricType::Gauge,
            interval: 1,
            host: "localHost".into(),
            tags: vec!["tag1".into(), "tag2:yes".into()],
            ..Default::default()
        })
        .collect()
}

fn split_series_benchmark(c: &mut Criterion) {
    let series = single_point_series(400_000);
    let config = SerializerConfig::default();
    let mut group = c.benchmark_group("split_series");
    group.sample_size(10);

    for (label, parallelism) in [
        ("sequential", ParallelismProfile::single_threaded()),
        ("dynamic", ParallelismProfile::dynamic()),
    ] {
        let splitter = match config.splitter() {
            Ok(splitter) => splitter.with_parallelism(parallelism),
            Err(err) => panic!("default config rejected: {err}"),
        };

        group.bench_function(format!("400k_single_point_{label}"), |b| {
            b.iter(|| {
                let payloads = match splitter.split(black_box(&series), true, &SeriesMarshaler) {
                    Ok(payloads) => payloads,
                    Err(err) => panic!("split failed: {err}"),
                };
                assert!(payloads.len() > 1, "expected more than one payload");
                let compressed: usize = payloads.iter().map(|p| p.len()).sum();
                assert!(compressed <= 3_600_000, "expected no more than 3.6 MB, got {compressed}");
                black_box(payloads);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, split_series_benchmark);
criterion_main!(benches);
