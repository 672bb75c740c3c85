use thiserror::Error;

pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream API error: {0}")]
    Upstream(String),

    #[error("Upstream API returned status {status} for {path}")]
    UpstreamStatus { status: u16, path: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl StorefrontError {
    /// Whether the failure originated in the remote booking API rather than
    /// in this service.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            StorefrontError::Upstream(_) | StorefrontError::UpstreamStatus { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_classification() {
        assert!(StorefrontError::Upstream("timeout".into()).is_upstream());
        assert!(StorefrontError::UpstreamStatus {
            status: 503,
            path: "/bookings".into()
        }
        .is_upstream());
        assert!(!StorefrontError::Validation("bad date".into()).is_upstream());
    }

    #[test]
    fn test_status_message() {
        let err = StorefrontError::UpstreamStatus {
            status: 404,
            path: "/bookings/user/u-1".into(),
        };
        assert_eq!(
            err.to_string(),
            "Upstream API returned status 404 for /bookings/user/u-1"
        );
    }
}
