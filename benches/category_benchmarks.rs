use catalog_domain::{Category, CategoryUpdate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_category_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_new");

    for size in [0, 100, 1_000, 10_000].iter() {
        let description = "d".repeat(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                Category::new(black_box("Category Name"), black_box(description.as_str()))
                    .unwrap()
            });
        });
    }

    group.finish();
}

fn benchmark_category_update(c: &mut Criterion) {
    let mut category = Category::new("Category Name", "Category Description").unwrap();

    c.bench_function("category_update_name", |b| {
        b.iter(|| {
            category
                .update(CategoryUpdate::default().with_name(black_box("Renamed Category")))
                .unwrap()
        });
    });
}

fn benchmark_category_toggle(c: &mut Criterion) {
    let mut category = Category::new("Category Name", "Category Description").unwrap();

    c.bench_function("category_toggle", |b| {
        b.iter(|| {
            category.deactivate().unwrap();
            category.activate().unwrap();
        });
    });
}

criterion_group!(
    benches,
    benchmark_category_new,
    benchmark_category_update,
    benchmark_category_toggle
);
criterion_main!(benches);
