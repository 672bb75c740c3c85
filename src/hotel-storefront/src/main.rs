//! Hotel Storefront: derived-value API for the hotel booking storefront.
//!
//! Main entry point: loads configuration, wires the booking API client and
//! starts the HTTP and metrics listeners.

use clap::Parser;
use hotel_api::{ApiServer, BookingSource, RestBookingSource};
use hotel_core::config::AppConfig;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "hotel-storefront")]
#[command(about = "Loyalty, checkout pricing and revenue reporting for the hotel storefront")]
#[command(version)]
struct Cli {
    /// Node identifier (overrides config)
    #[arg(long, env = "HOTEL_STOREFRONT__NODE_ID")]
    node_id: Option<String>,

    /// HTTP port (overrides config)
    #[arg(long, env = "HOTEL_STOREFRONT__API__HTTP_PORT")]
    http_port: Option<u16>,

    /// Booking API base URL (overrides config)
    #[arg(long, env = "HOTEL_STOREFRONT__UPSTREAM__BASE_URL")]
    upstream_url: Option<String>,

    /// Default tax rate for quotes (overrides config)
    #[arg(long, env = "HOTEL_STOREFRONT__PRICING__DEFAULT_TAX_RATE")]
    tax_rate: Option<f64>,

    /// Skip the Prometheus exporter
    #[arg(long, default_value_t = false)]
    no_metrics: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hotel_storefront=info,hotel_api=info,tower_http=info".into()),
        )
        .json()
        .init();

    let cli = Cli::parse();

    info!("Hotel Storefront starting up");

    let mut config = AppConfig::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        AppConfig::default()
    });

    if let Some(node_id) = cli.node_id {
        config.node_id = node_id;
    }
    if let Some(port) = cli.http_port {
        config.api.http_port = port;
    }
    if let Some(url) = cli.upstream_url {
        config.upstream.base_url = url;
    }
    if let Some(rate) = cli.tax_rate {
        config.pricing.default_tax_rate = rate;
    }
    if cli.no_metrics {
        config.metrics.enabled = false;
    }

    info!(
        node_id = %config.node_id,
        http_port = config.api.http_port,
        upstream = %config.upstream.base_url,
        tax_rate = config.pricing.default_tax_rate,
        loyalty = config.loyalty.enabled,
        "Configuration loaded"
    );

    let bookings: Arc<dyn BookingSource> = Arc::new(RestBookingSource::new(&config.upstream)?);
    let api_server = ApiServer::new(config, bookings);

    if let Err(e) = api_server.start_metrics() {
        error!(error = %e, "Failed to start metrics exporter");
    }

    info!("Hotel Storefront is ready to serve traffic");

    api_server.start_http().await?;

    info!("Hotel Storefront stopped");
    Ok(())
}
