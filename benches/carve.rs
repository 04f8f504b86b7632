#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};
use image::{Rgb, RgbImage};
use seamslice::{calculate_energy, energy_to_vertical_seam, grayscale, seamcarve};

fn noisy(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let v = (x.wrapping_mul(2654435761) ^ y.wrapping_mul(40503)) as u8;
        Rgb([v, v.wrapping_add(80), v.wrapping_mul(3)])
    })
}

fn energy_benchmark(c: &mut Criterion) {
    let gray = grayscale(&noisy(320, 240));
    c.bench_function("energy 320x240", move |b| {
        b.iter(|| calculate_energy(black_box(&gray)))
    });
}

fn seam_benchmark(c: &mut Criterion) {
    let energy = calculate_energy(&grayscale(&noisy(320, 240)));
    c.bench_function("seam 320x240", move |b| {
        b.iter(|| energy_to_vertical_seam(black_box(&energy)))
    });
}

fn carve_benchmark(c: &mut Criterion) {
    let image = noisy(160, 120);
    c.bench_function("carve 160x120 to 0.75", move |b| {
        b.iter(|| seamcarve(black_box(&image), 0.75).unwrap())
    });
}

criterion_group!(benches, energy_benchmark, seam_benchmark, carve_benchmark);
criterion_main!(benches);
