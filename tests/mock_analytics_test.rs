//! Contract tests for the mock analytics service.
//!
//! Latency tests run on Tokio's paused clock, so the one-second delay costs
//! no wall-clock time.

use std::task::Poll;
use std::time::Duration;

use chrono::NaiveDate;
use futures::poll;
use supply_chain_dashboard::{
    fixtures,
    models::Trend,
    services::calendar::FixedCalendar,
    AnalyticsApi, MockAnalyticsService,
};
use tokio::time::{self, Instant};

fn october_service(seed: u64) -> MockAnalyticsService {
    MockAnalyticsService::new()
        .with_seed(seed)
        .with_calendar(FixedCalendar(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()))
}

#[tokio::test(start_paused = true)]
async fn predictive_data_is_the_reference_series() {
    let series = october_service(1).fetch_predictive_data().await;

    assert_eq!(series.labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    assert_eq!(series.data, vec![65, 59, 80, 81, 56, 55]);
}

#[tokio::test(start_paused = true)]
async fn insights_are_the_reference_list_in_order() {
    let insights = october_service(1).fetch_real_time_insights().await;
    let messages: Vec<&str> = insights.iter().map(|i| i.as_str()).collect();

    assert_eq!(
        messages,
        vec![
            "Shipment #1234 delayed by 2 hours",
            "New supplier onboarded successfully",
            "Smart contract executed for order #5678",
            "Inventory levels optimal",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn sales_data_is_the_reference_history() {
    let records = october_service(1).fetch_sales_data().await;

    assert_eq!(records, fixtures::sales_records());
    let products: Vec<&str> = records.iter().map(|r| r.product_name.as_str()).collect();
    assert_eq!(products, vec!["Laptop Pro X", "Smartphone Y", "Tablet Z"]);
    assert_eq!(records[1].latitude, 34.0522);
    assert_eq!(records[1].longitude, -118.2437);
}

#[tokio::test(start_paused = true)]
async fn empty_product_name_still_gets_a_prediction() {
    let prediction = october_service(2).predict_sales("").await;

    assert!((500..=2499).contains(&prediction.next_month_sales));
    assert!((70..=99).contains(&prediction.confidence));
    assert_eq!(prediction.trend, Trend::Increasing);
}

#[tokio::test(start_paused = true)]
async fn forecast_covers_the_next_three_months() {
    let forecast = october_service(4).fetch_demand_forecast("Tablet Z", None).await;

    assert_eq!(forecast.next_three_months.len(), 3);
    assert_eq!(forecast.chart_labels(), vec!["Nov", "Dec", "Jan"]);
    for month in &forecast.next_three_months {
        assert!((500..=1499).contains(&month.predicted_demand));
        assert!((80..=99).contains(&month.confidence));
    }
    assert!(matches!(
        forecast.seasonal_trend,
        Trend::Increasing | Trend::Decreasing
    ));
    assert_eq!(
        forecast.factors,
        vec![
            "Historical sales patterns",
            "Seasonal variations",
            "Market trends",
            "Economic indicators",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn operations_do_not_settle_before_the_delay() {
    let service = october_service(5);
    let mut call = service.predict_sales("Laptop Pro X");

    assert!(poll!(&mut call).is_pending());
    time::advance(Duration::from_millis(999)).await;
    assert!(poll!(&mut call).is_pending());

    time::advance(Duration::from_millis(1)).await;
    assert!(matches!(poll!(&mut call), Poll::Ready(_)));
}

#[tokio::test(start_paused = true)]
async fn every_operation_waits_for_the_configured_latency() {
    let service = october_service(6).with_latency(Duration::from_millis(250));

    let start = Instant::now();
    service.fetch_predictive_data().await;
    assert!(start.elapsed() >= Duration::from_millis(250));
    assert!(start.elapsed() < Duration::from_millis(500));

    let start = Instant::now();
    service.fetch_real_time_insights().await;
    service.fetch_sales_data().await;
    service.predict_sales("Tablet Z").await;
    service.fetch_demand_forecast("Tablet Z", None).await;
    assert!(start.elapsed() >= Duration::from_millis(1000));
}

#[tokio::test(start_paused = true)]
async fn concurrent_calls_finish_within_one_delay() {
    let service = october_service(7);
    let start = Instant::now();

    let (series, insights, sales, prediction, forecast) = tokio::join!(
        service.fetch_predictive_data(),
        service.fetch_real_time_insights(),
        service.fetch_sales_data(),
        service.predict_sales("Laptop Pro X"),
        service.fetch_demand_forecast("Smartphone Y", None),
    );

    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(start.elapsed() < Duration::from_secs(2));
    assert_eq!(series, fixtures::predictive_series());
    assert_eq!(insights, fixtures::insights());
    assert_eq!(sales, fixtures::sales_records());
    assert!(prediction.is_within_bounds());
    assert_eq!(forecast.next_three_months.len(), 3);
}

#[tokio::test]
async fn zero_latency_resolves_immediately() {
    let service = MockAnalyticsService::new().with_latency(Duration::ZERO);
    let mut call = service.fetch_sales_data();
    assert!(matches!(poll!(&mut call), Poll::Ready(_)));
}

#[tokio::test(start_paused = true)]
async fn same_seed_reproduces_results() {
    let a = october_service(42);
    let b = october_service(42);

    for _ in 0..5 {
        assert_eq!(a.predict_sales("X").await, b.predict_sales("Y").await);
        assert_eq!(
            a.fetch_demand_forecast("X", None).await,
            b.fetch_demand_forecast("Y", None).await
        );
    }
}

#[tokio::test(start_paused = true)]
async fn concurrent_results_match_sequential_ones() {
    // Each call owns the generator it forks, so interleaving two calls in
    // flight yields the same values as running them one after the other.
    let sequential = october_service(99);
    let first = sequential.predict_sales("A").await;
    let second = sequential.fetch_demand_forecast("B", None).await;

    let concurrent = october_service(99);
    let (c_first, c_second) = tokio::join!(
        concurrent.predict_sales("A"),
        concurrent.fetch_demand_forecast("B", None),
    );

    assert_eq!(first, c_first);
    assert_eq!(second, c_second);
}

#[tokio::test(start_paused = true)]
async fn service_is_usable_as_a_trait_object() {
    let service: Box<dyn AnalyticsApi> = Box::new(october_service(3));
    let history = fixtures::sales_records();
    let forecast = service
        .fetch_demand_forecast("Laptop Pro X", Some(history.as_slice()))
        .await;
    assert_eq!(forecast.factors.len(), 4);
}

#[tokio::test(start_paused = true)]
async fn shared_service_is_safe_across_tasks() {
    let service = std::sync::Arc::new(october_service(8));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let service = service.clone();
            tokio::spawn(async move { service.predict_sales(&format!("product-{}", i)).await })
        })
        .collect();

    for handle in handles {
        let prediction = handle.await.unwrap();
        assert!(prediction.is_within_bounds());
    }
}
