use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harris_filter::kernels::{gaussian_filter, gx_filter};
use harris_filter::{convolve, smooth, PixelBuffer};

/// Benchmark image with a few bright blocks over a gradient
fn create_benchmark_image(width: usize, height: usize, channels: usize) -> PixelBuffer {
    let mut img = PixelBuffer::new(width, height, channels);
    for c in 0..channels {
        for y in 0..height {
            for x in 0..width {
                let gradient = x as f32 / width as f32 * 0.3;
                let block = if (x / 16 + y / 16) % 3 == 0 { 0.5 } else { 0.0 };
                img.set(x as isize, y as isize, c, 0.1 + gradient + block);
            }
        }
    }
    img
}

fn bench_convolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("convolve");
    let sizes = vec![(64, 64), (256, 256), (512, 512)];

    for &(width, height) in &sizes {
        let img = create_benchmark_image(width, height, 3);
        let gx = gx_filter();
        group.bench_with_input(
            BenchmarkId::new("gx_collapse", format!("{}x{}", width, height)),
            &img,
            |b, img| b.iter(|| black_box(convolve(black_box(img), &gx, false))),
        );
    }

    group.finish();
}

/// Separable smoothing against the single-pass 2D Gaussian
fn bench_smoothing(c: &mut Criterion) {
    let mut group = c.benchmark_group("smoothing");
    let img = create_benchmark_image(256, 256, 3);

    for &sigma in &[1.0f32, 2.0, 3.0] {
        group.bench_with_input(BenchmarkId::new("separable", sigma), &sigma, |b, &sigma| {
            b.iter(|| black_box(smooth(black_box(&img), sigma)))
        });
        let kernel = gaussian_filter(sigma);
        group.bench_with_input(BenchmarkId::new("direct_2d", sigma), &kernel, |b, kernel| {
            b.iter(|| black_box(convolve(black_box(&img), kernel, true)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_convolve, bench_smoothing);
criterion_main!(benches);
