use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `HOTEL_STOREFRONT__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_node_id")]
    pub node_id: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub metrics: MetricsConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub loyalty: LoyaltyConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MetricsConfig {
    #[serde(default = "default_metrics_enabled")]
    pub enabled: bool,
    #[serde(default = "default_metrics_port")]
    pub port: u16,
}

/// Remote booking REST API that owns hotels, rooms, bookings and users.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_upstream_url")]
    pub base_url: String,
    #[serde(default = "default_upstream_timeout_ms")]
    pub timeout_ms: u64,
    /// Bearer token forwarded on every upstream call, if set.
    #[serde(default)]
    pub auth_token: Option<String>,
}

fn default_node_id() -> String {
    "storefront-01".to_string()
}
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_http_port() -> u16 {
    8080
}
fn default_metrics_enabled() -> bool {
    true
}
fn default_metrics_port() -> u16 {
    9091
}
fn default_upstream_url() -> String {
    "http://localhost:5000/api".to_string()
}
fn default_upstream_timeout_ms() -> u64 {
    5000
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            http_port: default_http_port(),
        }
    }
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: default_metrics_enabled(),
            port: default_metrics_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_ms: default_upstream_timeout_ms(),
            auth_token: None,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            node_id: default_node_id(),
            api: ApiConfig::default(),
            metrics: MetricsConfig::default(),
            upstream: UpstreamConfig::default(),
            loyalty: LoyaltyConfig::default(),
            pricing: PricingConfig::default(),
        }
    }
}

// ─── Loyalty Config ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct LoyaltyConfig {
    /// Mounts the loyalty endpoints when true.
    #[serde(default = "default_loyalty_enabled")]
    pub enabled: bool,
}

fn default_loyalty_enabled() -> bool { true }

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            enabled: default_loyalty_enabled(),
        }
    }
}

// ─── Pricing Config ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    /// Tax rate applied when a quote request does not carry its own.
    #[serde(default = "default_tax_rate")]
    pub default_tax_rate: f64,
}

fn default_tax_rate() -> f64 { 0.10 }

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            default_tax_rate: default_tax_rate(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("HOTEL_STOREFRONT")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
