//! API server: builds the router and runs the HTTP and metrics listeners.

use crate::loyalty_rest::{self, LoyaltyState};
use crate::pricing_rest::{self, PricingState};
use crate::report_rest::{self, ReportState};
use crate::rest::{self, AppState};
use crate::swagger::ApiDoc;
use crate::upstream::BookingSource;
use axum::routing::{get, post};
use axum::Router;
use hotel_core::config::AppConfig;
use hotel_loyalty::LoyaltyEngine;
use hotel_pricing::StayPricer;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Storefront API server.
pub struct ApiServer {
    config: AppConfig,
    loyalty: Arc<LoyaltyEngine>,
    pricer: Arc<StayPricer>,
    bookings: Arc<dyn BookingSource>,
    start_time: Instant,
}

impl ApiServer {
    pub fn new(config: AppConfig, bookings: Arc<dyn BookingSource>) -> Self {
        let loyalty = Arc::new(LoyaltyEngine::new(&config.loyalty));
        let pricer = Arc::new(StayPricer::new(&config.pricing));
        Self {
            config,
            loyalty,
            pricer,
            bookings,
            start_time: Instant::now(),
        }
    }

    /// Every route with its state and middleware applied.
    pub fn router(&self) -> Router {
        let ops: Router = Router::new()
            .route("/health", get(rest::health_check))
            .route("/ready", get(rest::readiness))
            .route("/live", get(rest::liveness))
            .with_state(AppState {
                node_id: self.config.node_id.clone(),
                start_time: self.start_time,
            });

        let pricing: Router = Router::new()
            .route("/v1/pricing/quote", post(pricing_rest::handle_quote))
            .with_state(PricingState {
                pricer: self.pricer.clone(),
            });

        let reports: Router = Router::new()
            .route("/v1/reports/revenue", get(report_rest::handle_revenue))
            .with_state(ReportState {
                bookings: self.bookings.clone(),
            });

        let mut app: Router = Router::new().merge(ops).merge(pricing).merge(reports);

        if self.config.loyalty.enabled {
            let loyalty: Router = Router::new()
                .route("/v1/loyalty/tiers", get(loyalty_rest::handle_tiers))
                .route("/v1/loyalty/summary", post(loyalty_rest::handle_summary))
                .route(
                    "/v1/loyalty/users/:user_id",
                    get(loyalty_rest::handle_user_summary),
                )
                .with_state(LoyaltyState {
                    engine: self.loyalty.clone(),
                    bookings: self.bookings.clone(),
                });
            app = app.merge(loyalty);
        } else {
            info!("Loyalty endpoints disabled");
        }

        app.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http())
    }

    /// Serve on an already-bound listener until `shutdown` resolves.
    pub async fn serve<F>(&self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        info!(addr = %addr, "Serving HTTP");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await?;
        Ok(())
    }

    /// Bind the configured address and serve until Ctrl-C.
    pub async fn start_http(&self) -> anyhow::Result<()> {
        let addr = SocketAddr::new(self.config.api.host.parse()?, self.config.api.http_port);

        info!(addr = %addr, "Starting HTTP server");

        let listener = TcpListener::bind(addr).await?;
        self.serve(listener, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
    }

    /// Start the Prometheus exporter on a separate port.
    pub fn start_metrics(&self) -> anyhow::Result<()> {
        if !self.config.metrics.enabled {
            info!("Metrics exporter disabled");
            return Ok(());
        }

        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(SocketAddr::new(
                self.config.api.host.parse()?,
                self.config.metrics.port,
            ))
            .install()?;

        info!(port = self.config.metrics.port, "Metrics exporter started");
        Ok(())
    }
}
