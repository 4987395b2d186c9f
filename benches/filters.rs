use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ppm_filter_rs::image_pipeline::{
    GaussianKernel, Rgb, RgbImage, Schedule, convolve, mirror, negate, ppm,
};

fn generate_mock_image(width: u32, height: u32) -> RgbImage {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let value = ((x + y) % 256) as u16;
                Rgb::new(value, 255 - value, (x % 256) as u16)
            })
        })
        .collect();
    RgbImage::new(width, height, 255, pixels).unwrap()
}

const SCHEDULES: [(Schedule, &str); 3] = [
    (Schedule::Sequential, "sequential"),
    (Schedule::Rows, "rows"),
    (Schedule::Pixels, "pixels"),
];

fn benchmark_blur_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_by_schedule");
    let image = generate_mock_image(500, 500);
    let kernel = GaussianKernel::build(3, 2.0).unwrap();

    for (schedule, label) in SCHEDULES {
        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| convolve(black_box(image), &kernel, schedule));
        });
    }

    group.finish();
}

fn benchmark_blur_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("blur_by_radius");
    let image = generate_mock_image(500, 500);

    for radius in [1u32, 3, 7] {
        let kernel = GaussianKernel::build(radius, radius as f64 / 2.0).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(radius), &image, |b, image| {
            b.iter(|| convolve(black_box(image), &kernel, Schedule::Rows));
        });
    }

    group.finish();
}

fn benchmark_pointwise_filters(c: &mut Criterion) {
    let mut group = c.benchmark_group("pointwise_by_schedule");
    let image = generate_mock_image(1000, 1000);

    for (schedule, label) in SCHEDULES {
        group.bench_with_input(BenchmarkId::new("negate", label), &image, |b, image| {
            b.iter(|| negate(black_box(image), schedule));
        });
        group.bench_with_input(BenchmarkId::new("mirror", label), &image, |b, image| {
            b.iter(|| mirror(black_box(image.clone()), schedule));
        });
    }

    group.finish();
}

fn benchmark_codec(c: &mut Criterion) {
    let image = generate_mock_image(1000, 1000);
    let encoded = ppm::encode(&image);

    c.bench_function("encode_1000x1000", |b| b.iter(|| ppm::encode(black_box(&image))));
    c.bench_function("decode_1000x1000", |b| b.iter(|| ppm::decode(black_box(&encoded))));
}

criterion_group!(
    benches,
    benchmark_blur_schedules,
    benchmark_blur_radius,
    benchmark_pointwise_filters,
    benchmark_codec
);
criterion_main!(benches);
