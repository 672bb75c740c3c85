//! OpenAPI specification and Swagger UI configuration.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotel Storefront API",
        version = "0.1.0",
        description = "Derived values for the hotel booking storefront.\n\nLoyalty tiers and points, checkout stay quotes, and back-office revenue reporting over the booking API.",
        license(name = "MIT"),
    ),
    tags(
        (name = "Operations", description = "Health, readiness, and liveness probes"),
        (name = "Loyalty", description = "Loyalty tiers, points, and progress to the next tier"),
        (name = "Pricing", description = "Checkout stay quotes"),
        (name = "Reports", description = "Back-office revenue reporting"),
    ),
    paths(
        // Operations
        crate::rest::health_check,
        crate::rest::readiness,
        crate::rest::liveness,
        // Loyalty
        crate::loyalty_rest::handle_tiers,
        crate::loyalty_rest::handle_summary,
        crate::loyalty_rest::handle_user_summary,
        // Pricing
        crate::pricing_rest::handle_quote,
        // Reports
        crate::report_rest::handle_revenue,
    ),
    components(schemas(
        crate::rest::ErrorResponse,
        crate::rest::HealthResponse,
        // Loyalty types
        hotel_core::loyalty::TierLevel,
        hotel_core::loyalty::TierInfo,
        hotel_core::loyalty::LoyaltyInput,
        hotel_core::loyalty::TierRequirements,
        hotel_core::loyalty::LoyaltySummary,
        // Pricing types
        hotel_core::pricing::QuoteRejection,
        hotel_core::pricing::StayQuote,
        crate::pricing_rest::QuoteRequest,
        // Reporting types
        hotel_core::booking::BookingStatus,
        hotel_reporting::StatusBreakdown,
        hotel_reporting::HotelRevenue,
        hotel_reporting::RevenueReport,
    ))
)]
pub struct ApiDoc;
