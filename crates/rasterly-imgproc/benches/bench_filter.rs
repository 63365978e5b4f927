use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use rasterly_image::{ImageSize, Pixel, RasterBuffer};
use rasterly_imgproc::filter;

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("Filter");

    for &side in [64usize, 128, 255].iter() {
        let size = ImageSize {
            width: side,
            height: side,
        };
        let image = RasterBuffer::from_fn(size, 255, |row, col| {
            Pixel::from_channels((row % 256) as u8, (col % 256) as u8, 128, 255)
        })
        .unwrap();

        group.bench_with_input(
            BenchmarkId::new("blur_3x3", format!("{side}x{side}")),
            &image,
            |b, src| b.iter(|| black_box(filter::blur(src, None).unwrap())),
        );

        group.bench_with_input(
            BenchmarkId::new("sharpen_5x5", format!("{side}x{side}")),
            &image,
            |b, src| b.iter(|| black_box(filter::sharpen(src, None).unwrap())),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
