use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use standard_swizzle::allocate::allocate_zeroed_align_64;
use standard_swizzle::{
    transform_plane, transform_volume, DxgiFormat, PlaneMut, PlaneRef, SurfaceLayout,
    SwizzleDirection,
};

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

fn bench_plane(c: &mut Criterion) {
    let mut group = c.benchmark_group("Swizzle Plane");

    for (format, size) in [
        (DxgiFormat::R8G8B8A8Unorm, 1024usize),
        (DxgiFormat::R32G32B32A32Float, 1024),
        (DxgiFormat::Bc1Unorm, 4096),
        (DxgiFormat::Bc7Unorm, 4096),
    ] {
        let layout = SurfaceLayout::new(format, size, size).unwrap();
        let len = layout.swizzled_len();
        let mut input = allocate_zeroed_align_64(len).unwrap();
        let mut output = allocate_zeroed_align_64(len).unwrap();
        input
            .as_mut_slice()
            .iter_mut()
            .enumerate()
            .for_each(|(i, b)| *b = (i % 251) as u8);

        group.throughput(Throughput::Bytes(len as u64));
        for direction in [SwizzleDirection::Swizzle, SwizzleDirection::Deswizzle] {
            let id = BenchmarkId::new(format!("{format:?}_{direction:?}"), size);
            group.bench_function(id, |b| {
                b.iter(|| unsafe {
                    transform_plane(
                        PlaneRef::new(black_box(input.as_ptr()), layout.unpadded_row_bytes()),
                        PlaneMut::new(black_box(output.as_mut_ptr()), layout.unpadded_row_bytes()),
                        &layout,
                        direction,
                    )
                    .unwrap()
                })
            });
        }
    }

    group.finish();
}

fn bench_volume(c: &mut Criterion) {
    let mut group = c.benchmark_group("Swizzle Volume");

    let size = 128usize;
    let layout = SurfaceLayout::new(DxgiFormat::R8G8B8A8Unorm, size, size).unwrap();
    let slice_len = layout.swizzled_len();
    let input = allocate_zeroed_align_64(slice_len * size).unwrap();
    let mut output = allocate_zeroed_align_64(slice_len * size).unwrap();

    let src: Vec<PlaneRef> = (0..size)
        .map(|z| PlaneRef::new(unsafe { input.as_ptr().add(z * slice_len) }, layout.unpadded_row_bytes()))
        .collect();
    let dst: Vec<PlaneMut> = (0..size)
        .map(|z| {
            PlaneMut::new(
                unsafe { output.as_mut_ptr().add(z * slice_len) },
                layout.unpadded_row_bytes(),
            )
        })
        .collect();

    group.throughput(Throughput::Bytes((slice_len * size) as u64));
    for direction in [SwizzleDirection::Swizzle, SwizzleDirection::Deswizzle] {
        group.bench_function(BenchmarkId::new(format!("{direction:?}"), size), |b| {
            b.iter(|| unsafe { transform_volume(black_box(&src), &dst, &layout, direction).unwrap() })
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = bench_plane, bench_volume
}

#[cfg(target_os = "windows")]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = bench_plane, bench_volume
}

criterion_main!(benches);
