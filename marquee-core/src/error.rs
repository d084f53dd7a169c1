use std::time::Duration;

/// Failures surfaced by a [`CatalogService`](crate::CatalogService).
///
/// Two classes matter to callers: transport failures (the request never got
/// a usable answer) and upstream failures (the provider answered with a
/// non-success status). `InvalidApiKey`, `NotFound` and `RateLimited` are
/// upstream failures with a well-known status.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("network error: {message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("failed to decode catalog response: {0}")]
    Decode(String),
}

impl CatalogError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            source: None,
        }
    }

    /// Maps a non-success status and provider message onto the taxonomy.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        match status {
            401 => Self::InvalidApiKey,
            404 => Self::NotFound,
            429 => Self::RateLimited,
            _ => Self::Upstream {
                status,
                message: message.into(),
            },
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout(_))
    }

    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. }
                | Self::InvalidApiKey
                | Self::NotFound
                | Self::RateLimited
        )
    }

    /// Only transport failures are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        self.is_transport()
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Decode(err.to_string());
        }
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), err.to_string());
        }
        Self::Transport {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_known_statuses_get_dedicated_variants() {
        assert!(matches!(
            CatalogError::from_status(401, "bad key"),
            CatalogError::InvalidApiKey
        ));
        assert!(matches!(
            CatalogError::from_status(404, "missing"),
            CatalogError::NotFound
        ));
        assert!(matches!(
            CatalogError::from_status(429, "slow down"),
            CatalogError::RateLimited
        ));
        assert!(matches!(
            CatalogError::from_status(503, "maintenance"),
            CatalogError::Upstream { status: 503, .. }
        ));
    }

    #[test]
    fn only_transport_failures_are_retryable() {
        assert!(CatalogError::transport("reset").is_retryable());
        assert!(CatalogError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!CatalogError::from_status(500, "boom").is_retryable());
        assert!(!CatalogError::Decode("eof".into()).is_retryable());
        assert!(CatalogError::RateLimited.is_upstream());
    }
}
