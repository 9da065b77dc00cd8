#![allow(dead_code)]

use serializer_core::compression::{create_decompressor, CompressionCodec};
use serializer_core::metrics::{
    Event, MetricType, Point, Serie, ServiceCheck, ServiceCheckStatus, Sketch, SketchPoint,
    SketchSeries,
};
use serializer_core::split::Payloads;

/// Install a test subscriber once per test binary.
pub fn init_test_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let _ = fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("serializer_core=info".parse().expect("valid directive")),
        )
        .with_test_writer()
        .try_init();
}

pub fn eleven_point_series(count: usize) -> Vec<Serie> {
    (0..count)
        .map(|i| Serie {
            name: format!("test.metrics{}", i),
            points: vec![
                Point { ts: 12345.0, value: 21.21 },
                Point { ts: 67890.0, value: 12.12 },
                Point { ts: 2222.0, value: 22.12 },
                Point { ts: 333.0, value: 32.12 },
                Point { ts: 444444.0, value: 42.12 },
                Point { ts: 882787.0, value: 52.12 },
                Point { ts: 99990.0, value: 62.12 },
                Point { ts: 121212.0, value: 72.12 },
                Point { ts: 222227.0, value: 82.12 },
                Point { ts: 808080.0, value: 92.12 },
                Point { ts: 9090.0, value: 13.12 },
            ],
            mtype: MetricType::Gauge,
            interval: 1,
            host: "localHost".into(),
            tags: vec!["tag1".into(), "tag2:yes".into()],
            ..Default::default()
        })
        .collect()
}

pub fn single_point_series(count: usize) -> Vec<Serie> {
    (0..count)
        .map(|i| Serie {
            name: format!("test.metrics{}", i),
            points: vec![Point { ts: 12345.0, value: 1.2 * i as f64 }],
            mtype: MetricType::Gauge,
            interval: 1,
            host: "localHost".into(),
            tags: vec!["tag1".into(), "tag2:yes".into()],
            ..Default::default()
        })
        .collect()
}

pub fn events(count: usize) -> Vec<Event> {
    (0..count)
        .map(|i| Event {
            title: format!("test title {}", i),
            text: "test text".into(),
            ts: 12345,
            host: "test.localhost".into(),
            tags: vec!["tag1".into(), "tag2:yes".into()],
            aggregation_key: "test aggregation".into(),
            // Three groups interleaved, so splits cut across groups.
            source_type_name: match i % 3 {
                0 => "test source".into(),
                1 => "nagios".into(),
                _ => String::new(),
            },
            ..Default::default()
        })
        .collect()
}

pub fn service_checks(count: usize) -> Vec<ServiceCheck> {
    (0..count)
        .map(|_| ServiceCheck {
            check_name: "test.check".into(),
            host: "test.localhost".into(),
            ts: 1000,
            status: ServiceCheckStatus::Ok,
            message: "this is fine".into(),
            tags: vec!["tag1".into(), "tag2:yes".into()],
        })
        .collect()
}

/// A sketch series carrying a few hundred distinct bins.
pub fn make_sketch_series(i: usize) -> SketchSeries {
    let mut points = Vec::new();
    for ts in 0..10i64 {
        let mut sketch = Sketch::new();
        for v in 0..500 {
            sketch.insert((i as f64 + 1.0) * (v as f64 + 1.0) * 1.07f64.powi((ts % 5) as i32));
        }
        points.push(SketchPoint::new(ts * 10, &sketch));
    }
    SketchSeries {
        name: format!("test.sketch.{}", i),
        tags: vec!["a:0".into(), "b:1".into()],
        host: "host".into(),
        interval: 10,
        points,
    }
}

pub fn sketch_series(count: usize) -> Vec<SketchSeries> {
    (0..count).map(make_sketch_series).collect()
}

/// Inflate every payload with the given codec.
pub fn inflate(payloads: &Payloads, codec: CompressionCodec) -> Vec<Vec<u8>> {
    let decompressor = create_decompressor(codec);
    payloads
        .iter()
        .map(|p| decompressor.decompress(p).expect("payload decompresses"))
        .collect()
}
