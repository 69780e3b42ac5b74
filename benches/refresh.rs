//! Benchmarks for CSV decoding and point layer refresh.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_precision_loss)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sheetmap::csv::parse_rows;
use sheetmap::error::Result;
use sheetmap::layer::{build_layer, LayerId, LayerOptions, MapSurface, PointLayerManager};
use sheetmap::types::{LatLng, LatLngBounds, PointLayer};

/// Surface that accepts everything and draws nothing.
struct NullSurface {
    next: u32,
}

impl MapSurface for NullSurface {
    fn add_layer(&mut self, _layer: &PointLayer) -> Result<LayerId> {
        self.next += 1;
        Ok(LayerId(self.next))
    }
    fn remove_layer(&mut self, _id: LayerId) {}
    fn fit_bounds(&mut self, _bounds: LatLngBounds) {}
    fn set_view(&mut self, _center: LatLng, _zoom: u8) {}
}

/// A sheet export with `rows` data rows spread over Sweden.
fn sheet_csv(rows: usize) -> String {
    let mut csv = String::from(
        "Institution,Latitud,Longitud,Dokumentationens namn,Dokumentationens webbplats,\
         Kontaktperson,Mejl till kontaktperson (om det ska synas),\
         Telefonnr till kontaktperson (om det ska synas)\n",
    );
    for i in 0..rows {
        let lat = 55.0 + (i % 140) as f64 * 0.1;
        let lng = 11.0 + (i % 120) as f64 * 0.1;
        csv.push_str(&format!(
            "\"Institution {i}, avd. {}\",{lat:.4},{lng:.4},Arkiv {i},https://example.se/{i},\
             Person {i},p{i}@example.se,08-{i:06}\n",
            i % 7
        ));
    }
    csv
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_rows");
    for rows in [100usize, 1_000, 10_000] {
        let csv = sheet_csv(rows);
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| parse_rows(black_box(csv)).expect("Failed to parse"))
        });
    }
    group.finish();
}

fn bench_build_layer(c: &mut Criterion) {
    let rows = parse_rows(&sheet_csv(1_000)).expect("Failed to parse");
    let options = LayerOptions::default();
    c.bench_function("build_layer_1000", |b| {
        b.iter(|| build_layer(black_box(&rows), &options))
    });
}

fn bench_refresh(c: &mut Criterion) {
    let rows = parse_rows(&sheet_csv(1_000)).expect("Failed to parse");
    let mut manager = PointLayerManager::new(NullSurface { next: 0 }, LayerOptions::default());
    c.bench_function("refresh_1000", |b| {
        b.iter(|| {
            manager
                .refresh(black_box(&rows))
                .map(PointLayer::len)
                .expect("Failed to refresh")
        })
    });
}

criterion_group!(benches, bench_parse, bench_build_layer, bench_refresh);
criterion_main!(benches);
