use crate::allowed_headers::InvalidHeaderPattern;
use crate::constants::header;
use crate::decision::CorsDecision;
use crate::headers::{HeaderCollection, Headers};
use crate::options::ValidationError;
use crate::origin_set::InvalidOriginPattern;
use thiserror::Error;

/// Headers to attach to a response, plus the origin decision behind them.
#[derive(Debug, Clone)]
pub struct CorsResult {
    pub decision: CorsDecision,
    pub headers: Headers,
}

impl CorsResult {
    pub fn allow_origin(&self) -> Option<&str> {
        self.headers
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(String::as_str)
    }

    /// Combines the engine's `Vary` value with one already on the response.
    pub fn merge_vary(&self, existing: Option<&str>) -> Option<String> {
        let mut collection = HeaderCollection::new();
        if let Some(existing) = existing {
            collection.add_vary(existing);
        }
        if let Some(ours) = self.headers.get(header::VARY) {
            collection.add_vary(ours.as_str());
        }
        collection.into_headers().remove(header::VARY)
    }
}

/// Configuration-time failures. Request evaluation itself never fails.
#[derive(Debug, Error)]
pub enum CorsError {
    #[error("invalid CORS configuration: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidOriginPattern(#[from] InvalidOriginPattern),
    #[error(transparent)]
    InvalidHeaderPattern(#[from] InvalidHeaderPattern),
}
