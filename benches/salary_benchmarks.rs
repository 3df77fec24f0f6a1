//! Performance benchmarks for the compensation engine.
//!
//! Covers the in-process salary computation and the `/salary` endpoint.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_decimal::Decimal;

use rep_payroll::api::{create_router, AppState};
use rep_payroll::config::ConfigLoader;
use rep_payroll::models::{GeographicZone, Representative};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with the sample roster loaded.
fn create_test_state() -> AppState {
    let roster = ConfigLoader::load("./config/sample").expect("Failed to load roster");
    AppState::new(roster)
}

/// Benchmark: a full year of salary computations for one representative.
fn bench_monthly_salary(c: &mut Criterion) {
    let mut zone = GeographicZone::new(1, "Occitanie");
    zone.set_meal_allowance(Decimal::from(200));

    let mut rep = Representative::new(36, "Bastide", "Rémi", &zone);
    rep.set_fixed_salary(Decimal::from(1000));
    for month in 0..12 {
        rep.record_revenue(month, Decimal::new(5_000_000 + i64::from(month) * 12_345, 2))
            .unwrap();
    }
    let rate = Decimal::new(1, 1);

    let mut group = c.benchmark_group("monthly_salary");
    group.throughput(Throughput::Elements(12));
    group.bench_function("full_year", |b| {
        b.iter(|| {
            for month in 0..12 {
                black_box(rep.monthly_salary(black_box(month), rate).unwrap());
            }
        })
    });
    group.finish();
}

/// Benchmark: loading the sample roster from disk.
fn bench_roster_load(c: &mut Criterion) {
    c.bench_function("roster_load", |b| {
        b.iter(|| black_box(ConfigLoader::load("./config/sample").unwrap()))
    });
}

/// Benchmark: a single salary statement through the HTTP router.
fn bench_salary_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = serde_json::json!({
        "representative_id": 36,
        "month": 0,
        "commission_rate": "0.1"
    })
    .to_string();

    c.bench_function("salary_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/salary")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_monthly_salary,
    bench_roster_load,
    bench_salary_endpoint
);
criterion_main!(benches);
