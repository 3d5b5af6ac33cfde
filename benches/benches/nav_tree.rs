// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_nav_tree::{BranchConfig, BranchId, NavigationTree};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    fn gen_range_usize(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        (self.next_u32() as usize) % upper_exclusive
    }
}

/// A random tree with `n` branches; each branch picks an earlier branch as its parent.
fn build_tree(n: u32, roots: u32, seed: u64) -> (NavigationTree<u32>, Vec<BranchId>) {
    let mut tree = NavigationTree::new();
    let mut rng = Lcg::new(seed);
    let mut ids = Vec::with_capacity(n as usize);
    for view in 0..n {
        let id = if view < roots {
            tree.insert_root(view, BranchConfig::default())
        } else {
            let parent = ids[rng.gen_range_usize(ids.len())];
            tree.insert_child(parent, view, BranchConfig::default())
                .expect("parent was inserted earlier")
        };
        ids.push(id);
    }
    (tree, ids)
}

fn bench_nav_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_nav_tree");
    group.sample_size(50);

    for &n in &[256_u32, 4_096_u32] {
        group.bench_function(format!("build(n={n})"), |b| {
            b.iter(|| black_box(build_tree(n, 4, 0x4E41_0000_0000_0001)));
        });

        let (tree, ids) = build_tree(n, 4, 0x4E41_0000_0000_0002);

        group.bench_function(format!("preorder(n={n})"), |b| {
            b.iter(|| black_box(tree.branches().count()));
        });

        group.bench_function(format!("ancestry_queries(n={n})"), |b| {
            b.iter_batched(
                || Lcg::new(0x4E41_0000_0000_0003),
                |mut rng| {
                    let mut hits = 0_u32;
                    for _ in 0..256 {
                        let a = ids[rng.gen_range_usize(ids.len())];
                        let d = ids[rng.gen_range_usize(ids.len())];
                        if tree.is_ancestor_or_self(a, d) {
                            hits += 1;
                        }
                    }
                    black_box(hits);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("map(n={n})"), |b| {
            b.iter_batched(
                || tree.clone(),
                |tree| black_box(tree.map(|id, view| (id, u64::from(view)))),
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_nav_tree);
criterion_main!(benches);
