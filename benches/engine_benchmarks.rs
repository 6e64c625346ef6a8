//! Performance benchmarks for the Journey Accounting Engine.
//!
//! The engine is meant to be cheap enough that callers recompute every
//! breakdown on each settings change instead of caching:
//! - Single breakdown: < 1μs mean
//! - Listing of 100 journeys: < 1ms mean
//! - Listing of 1000 journeys: < 10ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};

use jornada_engine::api::{AppState, create_router};
use jornada_engine::calculation::{PeriodFilter, SortKey, compute_breakdown, view};
use jornada_engine::models::{Journey, Settings};
use jornada_engine::store::MemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn bench_settings() -> Settings {
    Settings {
        month_start_day: 25,
        km_enabled: false,
        standard_workday_minutes: 480,
        overtime_tier1_cap_minutes: 120,
        km_rate: None,
    }
}

/// Creates `count` journeys spread over the days before `today`.
fn create_journeys(count: usize, today: NaiveDate) -> Vec<Journey> {
    (0..count)
        .map(|i| Journey {
            id: format!("jrn_{:04}", i),
            date: today - Days::new((i % 45) as u64),
            start_at: "08:00".to_string(),
            end_at: if i % 3 == 0 { "18:00" } else { "16:00" }.to_string(),
            is_feriado: i % 7 == 0,
            distance_traveled: None,
        })
        .collect()
}

/// Benchmark: single journey breakdown.
fn bench_single_breakdown(c: &mut Criterion) {
    let journey = Journey {
        id: "jrn_bench".to_string(),
        date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
        start_at: "22:00".to_string(),
        end_at: "06:00".to_string(),
        is_feriado: false,
        distance_traveled: None,
    };
    let settings = bench_settings();

    c.bench_function("single_breakdown", |b| {
        b.iter(|| black_box(compute_breakdown(black_box(&journey), &settings).unwrap()))
    });
}

/// Benchmark: filtered and sorted listings of growing collections.
fn bench_listing(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let settings = bench_settings();

    let mut group = c.benchmark_group("listing");
    for count in [100usize, 1000] {
        let journeys = create_journeys(count, today);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &journeys, |b, journeys| {
            b.iter(|| {
                black_box(
                    view(
                        journeys,
                        &settings,
                        today,
                        PeriodFilter::CurrentPeriod,
                        SortKey::ExtraHoursDesc,
                    )
                    .unwrap(),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark: full request path through the router.
fn bench_api_listing(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let today = chrono::Local::now().date_naive();
    let store = MemoryStore::with_journeys(bench_settings(), create_journeys(100, today));
    let router = create_router(AppState::new(store));

    c.bench_function("api_list_100", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("GET")
                        .uri("/journeys?period=current_period&sort=extra_hours_desc")
                        .body(Body::empty())
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
    bench_single_breakdown,
    bench_listing,
    bench_api_listing
);
criterion_main!(benches);
