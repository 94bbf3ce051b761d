//! Benchmarks for the Snapcap pipeline stages that run without models.
//!
//! Run with: cargo bench -p snapcap-core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, ImageFormat, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;
use snapcap_core::config::LimitsConfig;
use snapcap_core::generation::CaptionStyle;
use std::io::Cursor;

fn png_fixture() -> Vec<u8> {
    let img = DynamicImage::ImageRgb8(RgbImage::new(1280, 960));
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn benchmark_content_hash(c: &mut Criterion) {
    let bytes = png_fixture();

    c.bench_function("content_hash_blake3", |b| {
        b.iter(|| {
            let _ = snapcap_core::Hasher::content_hash_from_bytes(black_box(&bytes));
        })
    });
}

fn benchmark_decode(c: &mut Criterion) {
    let bytes = png_fixture();
    let decoder = snapcap_core::ImageDecoder::new(LimitsConfig::default());
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("decode_image", |b| {
        b.iter(|| {
            let _ = rt.block_on(
                decoder.decode_from_bytes(black_box(bytes.clone()), std::path::Path::new("bench.png")),
            );
        })
    });
}

fn benchmark_hashtags(c: &mut Criterion) {
    let description = "A beach scene showing person, sunset and drink with relaxing activity";

    c.bench_function("generate_hashtags", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| {
            let _ = snapcap_core::generate_hashtags(black_box(description), 10, &mut rng);
        })
    });
}

fn benchmark_fallback_captions(c: &mut Criterion) {
    let description = "A beach scene showing people in a happy mood";

    c.bench_function("fallback_captions", |b| {
        b.iter(|| {
            let _ = snapcap_core::generate_fallback(
                black_box(description),
                CaptionStyle::Casual,
                5,
            );
        })
    });
}

criterion_group!(
    benches,
    benchmark_content_hash,
    benchmark_decode,
    benchmark_hashtags,
    benchmark_fallback_captions,
);
criterion_main!(benches);
