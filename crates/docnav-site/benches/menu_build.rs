//! Benchmarks for menu building and per-path queries.

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use docnav_config::Config;
use docnav_content::Documents;
use docnav_menu::{Declaration, MenuBuilder};
use docnav_site::Site;
use docnav_state::MemoryStore;

/// Generate `count` documents, half of them with frontmatter.
fn generate_documents(count: usize) -> Documents {
    (0..count)
        .map(|i| {
            let id = format!("section-{}/{i:03}_page-{i}", i % 10);
            let raw = if i % 2 == 0 {
                format!("---\ntitle: Page {i}\norder: {}\n---\nSee [next](./{:03}_page-{}.md).", count - i, i + 1, i + 1)
            } else {
                format!("# Page {i}\n\nPlain body.")
            };
            (id, raw)
        })
        .collect()
}

/// One folder per section claiming its documents.
fn generate_declarations(documents: &Documents) -> Vec<Declaration> {
    (0..10)
        .map(|s| Declaration::Folder {
            id: format!("folder-{s}"),
            title: format!("Folder {s}"),
            order: None,
            children: documents
                .iter()
                .filter(|(id, _)| id.starts_with(&format!("section-{s}/")))
                .map(|(id, _)| Declaration::Document { id: id.to_owned() })
                .collect(),
        })
        .collect()
}

fn bench_menu_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_build");

    for count in [50, 500, 2000] {
        let documents = generate_documents(count);
        let declarations = generate_declarations(&documents);

        group.bench_with_input(BenchmarkId::new("flat", count), &documents, |b, docs| {
            b.iter(|| MenuBuilder::new("Bench").documents(docs.iter()).build());
        });

        group.bench_with_input(
            BenchmarkId::new("declared", count),
            &documents,
            |b, docs| {
                b.iter(|| {
                    MenuBuilder::new("Bench")
                        .documents(docs.iter())
                        .declarations(&declarations)
                        .build()
                });
            },
        );
    }

    group.finish();
}

fn bench_site_queries(c: &mut Criterion) {
    let documents = generate_documents(500);
    let mut config = Config::default();
    config.navigation.base_path = "/docs".to_owned();
    config.sections = generate_declarations(&documents);
    let site = Site::new(&config, documents, Arc::new(MemoryStore::new()));

    let mut group = c.benchmark_group("site_queries");

    group.bench_function("sidebar", |b| {
        b.iter(|| site.sidebar("/docs/section-4/254_page-254"));
    });

    group.bench_function("page_with_links", |b| {
        b.iter(|| site.page("/docs/section-2/252_page-252"));
    });

    group.bench_function("page_fallback", |b| {
        b.iter(|| site.page("/docs/missing"));
    });

    group.finish();
}

criterion_group!(benches, bench_menu_build, bench_site_queries);
criterion_main!(benches);
