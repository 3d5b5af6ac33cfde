// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_arc_mesh::{ArcMesh, ArcParams, hit_test};

fn bench_arc_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_arc_mesh");
    group.sample_size(50);

    let rect = Rect::new(0.0, 0.0, 256.0, 256.0);
    for &precision in &[16_u32, 64_u32, 256_u32] {
        let mut params = ArcParams::ring();
        params.set_precision(precision);

        group.bench_function(format!("build_ring(p={precision})"), |b| {
            b.iter(|| black_box(ArcMesh::build(black_box(&params))));
        });

        let mesh = ArcMesh::build(&params);
        group.bench_function(format!("layout_ring(p={precision})"), |b| {
            b.iter(|| black_box(mesh.layout(black_box(rect))));
        });
    }

    let mut gauge = ArcParams::default();
    gauge.set_start_angle(-120.0).set_length(240.0);
    let points: Vec<Point> = (0..1024)
        .map(|i| Point::new(f64::from(i % 32) * 8.0, f64::from(i / 32) * 8.0))
        .collect();
    group.bench_function("hit_test_grid(1024)", |b| {
        b.iter(|| {
            let hits = points
                .iter()
                .filter(|p| hit_test(&gauge, rect, **p))
                .count();
            black_box(hits)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_arc_mesh);
criterion_main!(benches);
