use criterion::{criterion_group, criterion_main, Criterion};
use geojson2csv::flatten::flatten;
use geojson2csv::geojson::FeatureCollection;
use geojson2csv::output::Output;
use serde_json::json;
use std::io::{Result, Write};

struct MockWriter;

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(buf.len())
    }
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

fn incidents(count: usize) -> FeatureCollection {
    let features: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "type": "Feature",
                "properties": {
                    "INCIDENT_REPORT_ID": format!("2024{:06}", i),
                    "DIVISION": if i % 2 == 0 { "Central" } else { "Metro" },
                    "YEAR": 2024,
                    "LATITUDE_PUBLIC": 35.2 + (i as f64) * 1e-5,
                },
                "geometry": {
                    "type": "Point",
                    "coordinates": [-80.84 - (i as f64) * 1e-5, 35.23]
                }
            })
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
        .to_string()
        .parse()
        .unwrap()
}

pub fn flatten_bench(c: &mut Criterion) {
    let collection = incidents(10_000);
    let mut group = c.benchmark_group("incidents");
    group.sample_size(10);
    group.bench_function("flatten", |b| b.iter(|| flatten(&collection)));
    group.bench_function("write_csv", |b| {
        b.iter(|| {
            let mut writer = MockWriter;
            collection.write_csv(&mut writer).unwrap();
        })
    });
    group.finish();
}

criterion_group!(benches, flatten_bench);
criterion_main!(benches);
