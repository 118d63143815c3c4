use std::time::Duration;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde::Serialize;
use supply_chain_dashboard::{
    config::{self, AppConfig},
    models::{DemandForecast, SalesPrediction},
    views::{DashboardData, DashboardView, DemandForecastView, SalesPredictionView},
    MockAnalyticsService,
};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = config::load_config().context("failed to load configuration")?;
    config::init_tracing(app_config.log_level(), app_config.log_json);
    info!(environment = %app_config.environment, "Configuration loaded");

    let service = build_service(&app_config, &cli);
    debug!(latency_ms = service.latency().as_millis() as u64, "Analytics service ready");

    match cli.command {
        Commands::Dashboard(args) => handle_dashboard(&service, args, cli.json).await?,
        Commands::Sales => handle_sales(&service, cli.json).await?,
        Commands::Predict(args) => handle_predict(&service, args, cli.json).await?,
        Commands::Forecast(args) => handle_forecast(&service, args, cli.json).await?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "supply-chain-dashboard",
    about = "Mock supply-chain analytics: sales history, predictions and demand forecasts",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON"
    )]
    json: bool,
    #[arg(long, global = true, help = "Seed for reproducible random results")]
    seed: Option<u64>,
    #[arg(long, global = true, help = "Override the simulated latency in milliseconds")]
    latency_ms: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predictive chart, insights and blockchain features
    Dashboard(DashboardArgs),
    /// Sales history and product list
    Sales,
    /// Next-month sales prediction for a product from the sales history
    Predict(ProductArgs),
    /// Three-month demand forecast for any product name
    Forecast(ProductArgs),
}

#[derive(Args)]
struct DashboardArgs {
    #[arg(long, help = "Also run a sales prediction and demand forecast for this product")]
    product: Option<String>,
}

#[derive(Args)]
struct ProductArgs {
    #[arg(long)]
    product: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardOutput<'a> {
    #[serde(flatten)]
    data: Option<&'a DashboardData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sales_prediction: Option<&'a SalesPrediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    demand_forecast: Option<&'a DemandForecast>,
}

fn build_service(app_config: &AppConfig, cli: &Cli) -> MockAnalyticsService {
    let mut service = MockAnalyticsService::from_config(&app_config.analytics);
    if let Some(latency_ms) = cli.latency_ms {
        service = service.with_latency(Duration::from_millis(latency_ms));
    }
    if let Some(seed) = cli.seed {
        service = service.with_seed(seed);
    }
    service
}

async fn handle_dashboard(
    service: &MockAnalyticsService,
    args: DashboardArgs,
    json: bool,
) -> Result<()> {
    let mut dashboard = DashboardView::new();
    let mut prediction_view = SalesPredictionView::new();
    let mut forecast_view = DemandForecastView::new();

    match args.product.as_deref() {
        Some(product) => {
            prediction_view.load_sales(service).await;
            let history = prediction_view.sales().ready().cloned().unwrap_or_default();
            forecast_view = forecast_view.with_history(history);
            prediction_view
                .select_product(product)
                .with_context(|| format!("cannot predict sales for '{}'", product))?;
            forecast_view.set_product_name(product);

            let (_, prediction, forecast) = tokio::join!(
                dashboard.load(service),
                prediction_view.predict(service),
                forecast_view.generate(service),
            );
            prediction.context("sales prediction failed")?;
            forecast.context("demand forecast failed")?;
        }
        None => dashboard.load(service).await,
    }

    if json {
        let output = DashboardOutput {
            data: dashboard.data(),
            sales_prediction: prediction_view.prediction(),
            demand_forecast: forecast_view.forecast(),
        };
        return print_json(&output);
    }

    print!("{}", dashboard);
    if args.product.is_some() {
        println!();
        print!("{}", prediction_view);
        println!();
        print!("{}", forecast_view);
    }
    Ok(())
}

async fn handle_sales(service: &MockAnalyticsService, json: bool) -> Result<()> {
    let mut view = SalesPredictionView::new();
    view.load_sales(service).await;

    if json {
        return print_json(&view.sales().ready());
    }

    print!("{}", view);
    println!();
    println!("Products:");
    for product in view.products() {
        println!("  {}", product);
    }
    Ok(())
}

async fn handle_predict(
    service: &MockAnalyticsService,
    args: ProductArgs,
    json: bool,
) -> Result<()> {
    let mut view = SalesPredictionView::new();
    view.load_sales(service).await;
    view.select_product(&args.product)
        .with_context(|| format!("cannot predict sales for '{}'", args.product))?;
    let prediction = view
        .predict(service)
        .await
        .context("sales prediction failed")?;

    if json {
        return print_json(prediction);
    }
    print!("{}", view);
    Ok(())
}

async fn handle_forecast(
    service: &MockAnalyticsService,
    args: ProductArgs,
    json: bool,
) -> Result<()> {
    let mut view = DemandForecastView::new();
    view.load_history(service).await;
    view.set_product_name(args.product);
    let forecast = view
        .generate(service)
        .await
        .context("demand forecast failed")?;

    if json {
        return print_json(forecast);
    }
    print!("{}", view);
    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}
