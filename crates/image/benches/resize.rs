//! Benchmarks for watermark cleanup and padded resizing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iconkit_image::{median_filter, remove_watermark, resize_with_padding};
use image::{DynamicImage, Rgba, RgbaImage};

fn logo(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for (x, y, p) in img.enumerate_pixels_mut() {
        let a = if (x + y) % 7 == 0 { 150 } else { 255 };
        *p = Rgba([(x % 256) as u8, (y % 256) as u8, 128, a]);
    }
    img
}

fn bench_cleanup(c: &mut Criterion) {
    let source = logo(512);

    c.bench_function("remove_watermark_512", |b| {
        b.iter(|| remove_watermark(black_box(DynamicImage::ImageRgba8(source.clone()))))
    });

    c.bench_function("median_filter_512", |b| {
        b.iter(|| median_filter(black_box(&source)))
    });
}

fn bench_resize(c: &mut Criterion) {
    let source = logo(1024);

    c.bench_function("resize_with_padding_1024_to_20", |b| {
        b.iter(|| resize_with_padding(black_box(&source), black_box(20)))
    });

    c.bench_function("resize_with_padding_1024_to_512", |b| {
        b.iter(|| resize_with_padding(black_box(&source), black_box(512)))
    });
}

criterion_group!(benches, bench_cleanup, bench_resize);
criterion_main!(benches);
