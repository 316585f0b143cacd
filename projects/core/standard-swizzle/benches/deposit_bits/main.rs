use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use standard_swizzle::bench::bits::*;
use standard_swizzle::morton::{MASK_2D_X, MASK_3D_Z};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

const VALUES: u32 = 65536;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Deposit / Extract Bits");
    group.throughput(Throughput::Elements(VALUES as u64));

    for (name, mask) in [("mask_2d_x", MASK_2D_X), ("mask_3d_z", MASK_3D_Z)] {
        group.bench_function(format!("portable_deposit_{name}"), |b| {
            b.iter(|| {
                let mut acc = 0u32;
                for value in 0..VALUES {
                    acc ^= portable_deposit_bits(black_box(value), mask);
                }
                acc
            })
        });

        group.bench_function(format!("portable_extract_{name}"), |b| {
            b.iter(|| {
                let mut acc = 0u32;
                for value in 0..VALUES {
                    acc ^= portable_extract_bits(black_box(value), mask);
                }
                acc
            })
        });

        #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
        if std::is_x86_feature_detected!("bmi2") {
            group.bench_function(format!("bmi2_deposit_{name}"), |b| {
                b.iter(|| {
                    let mut acc = 0u32;
                    for value in 0..VALUES {
                        acc ^= unsafe { bmi2_deposit_bits(black_box(value), mask) };
                    }
                    acc
                })
            });

            group.bench_function(format!("bmi2_extract_{name}"), |b| {
                b.iter(|| {
                    let mut acc = 0u32;
                    for value in 0..VALUES {
                        acc ^= unsafe { bmi2_extract_bits(black_box(value), mask) };
                    }
                    acc
                })
            });
        }
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
