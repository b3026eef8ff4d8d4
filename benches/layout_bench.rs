use criterion::{Criterion, criterion_group, criterion_main};
use ohlc_layout::core::{LinearScale, aggregate_interval};
use ohlc_layout::{LayoutParameters, Sample, SeriesStyle, layout_series};
use std::hint::black_box;

fn synthetic_series(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| {
            let x = i as f64;
            let base = 100.0 + x * 0.05;
            let open = base;
            let close = if i % 2 == 0 { base + 1.0 } else { base - 1.0 };
            let low = open.min(close) - 0.75;
            let high = open.max(close) + 0.75;
            Sample::new(x, open, high, low, close).expect("valid generated sample")
        })
        .collect()
}

fn bench_aggregate_60x(c: &mut Criterion) {
    let samples = synthetic_series(10_000);

    c.bench_function("aggregate_interval_60", |b| {
        b.iter(|| {
            let mut start = 0;
            while start < samples.len() {
                let _ = aggregate_interval(black_box(&samples), black_box(60), start);
                start += 60;
            }
        })
    });
}

fn bench_layout_pass_10k(c: &mut Criterion) {
    let samples = synthetic_series(10_000);
    let x_scale = LinearScale::new(0.0, 10_001.0, 0.0, 1920.0).expect("x scale");
    let y_scale = LinearScale::new(0.0, 700.0, 1080.0, 0.0).expect("y scale");
    let params = LayoutParameters {
        unit_width: x_scale.pixels_per_unit(),
        interval: 1,
        max_column_width: 12.0,
    };

    c.bench_function("layout_pass_10k_interval_1", |b| {
        b.iter(|| {
            let _ = layout_series(
                black_box(&samples),
                black_box(params),
                &x_scale,
                &y_scale,
                SeriesStyle::Candle,
            )
            .expect("layout pass should succeed");
        })
    });

    let hourly = LayoutParameters {
        unit_width: x_scale.pixels_per_unit(),
        interval: 60,
        max_column_width: 12.0,
    };

    c.bench_function("layout_pass_10k_interval_60", |b| {
        b.iter(|| {
            let _ = layout_series(
                black_box(&samples),
                black_box(hourly),
                &x_scale,
                &y_scale,
                SeriesStyle::OhlcBars,
            )
            .expect("layout pass should succeed");
        })
    });
}

criterion_group!(benches, bench_aggregate_60x, bench_layout_pass_10k);
criterion_main!(benches);
