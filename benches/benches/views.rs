// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use understory_nav_tree::{BranchConfig, NavigationTree};
use understory_views::{
    ContainerConfig, ContainerDelegate, View, ViewHandle, ViewId, ViewsContainer,
};

struct Page(u32);

impl View for Page {
    fn id(&self) -> ViewId {
        ViewId::new("bench", self.0.to_string())
    }
}

/// `groups` root pages, each with `depth` nested pages below it.
struct Menu {
    groups: u32,
    depth: u32,
}

impl ContainerDelegate<Page> for Menu {
    fn build_navigation_tree(&mut self) -> NavigationTree<Page> {
        let mut tree = NavigationTree::new();
        let mut next = 0;
        for _ in 0..self.groups {
            let mut parent = tree.insert_root(Page(next), BranchConfig::default());
            next += 1;
            for _ in 0..self.depth {
                parent = tree
                    .insert_child(parent, Page(next), BranchConfig::default())
                    .expect("parent was inserted earlier");
                next += 1;
            }
        }
        tree
    }
}

fn initialized(groups: u32, depth: u32) -> (ViewsContainer<Page>, Vec<ViewHandle<Page>>) {
    let container = ViewsContainer::new(Menu { groups, depth }, ContainerConfig::default());
    container.initialize().expect("fresh container");
    let views = container.views();
    (container, views)
}

fn bench_views(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_views");
    group.sample_size(50);

    for &(groups, depth) in &[(8_u32, 2_u32), (64_u32, 4_u32)] {
        group.bench_function(format!("initialize(g={groups},d={depth})"), |b| {
            b.iter_batched(
                || ViewsContainer::new(Menu { groups, depth }, ContainerConfig::default()),
                |container| {
                    container.initialize().expect("fresh container");
                    black_box(container);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("navigate_groups(g={groups},d={depth})"), |b| {
            let (_container, views) = initialized(groups, depth);
            let stride = (depth + 1) as usize;
            let roots: Vec<_> = views.iter().step_by(stride).collect();
            let leaves: Vec<_> = views.iter().skip(depth as usize).step_by(stride).collect();
            b.iter(|| {
                for (root, leaf) in roots.iter().zip(&leaves) {
                    let _ = root.open();
                    let _ = leaf.open();
                }
                black_box(&views);
            });
        });

        group.bench_function(format!("lookup_by_id(g={groups},d={depth})"), |b| {
            let (container, views) = initialized(groups, depth);
            let ids: Vec<ViewId> = views.iter().map(|v| v.id().clone()).collect();
            b.iter(|| {
                for id in &ids {
                    black_box(container.view(id));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_views);
criterion_main!(benches);
