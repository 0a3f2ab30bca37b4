use countrypick::cookies::accessor::CookieAccessor;
use countrypick::cookies::store::MemoryCookieStore;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_cookie_set(c: &mut Criterion) {
    let cookies = CookieAccessor::new(MemoryCookieStore::new());

    c.bench_function("cookie_set", |b| {
        b.iter(|| cookies.set(black_box("country"), black_box("ID"), black_box(Some(30))))
    });
}

fn benchmark_cookie_get(c: &mut Criterion) {
    let cookies = CookieAccessor::new(MemoryCookieStore::new());
    // Pre-populate
    for i in 0..40 {
        cookies.set(&format!("cookie{}", i), "val", None);
    }

    c.bench_function("cookie_get_last", |b| {
        b.iter(|| black_box(cookies.get(black_box("cookie39"))))
    });
}

criterion_group!(benches, benchmark_cookie_set, benchmark_cookie_get);
criterion_main!(benches);
