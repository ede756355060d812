use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::WILDCARD;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::looks_like_pattern;
use crate::origin_set::Origins;
use crate::util::is_http_token;
use serde::Deserialize;
use thiserror::Error;

/// Per-route CORS configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsOptions {
    pub origins: Origins,
    pub methods: AllowedMethods,
    pub allow_headers: AllowedHeaders,
    pub expose_headers: ExposedHeaders,
    pub supports_credentials: bool,
    /// Seconds a preflight result may be cached.
    pub max_age: Option<u64>,
    /// Send an allow-origin header even when the request has no `Origin`.
    #[serde(alias = "send_wildcard")]
    pub always_send: bool,
    pub vary_header: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origins: Origins::Any,
            methods: AllowedMethods::default(),
            allow_headers: AllowedHeaders::Any,
            expose_headers: ExposedHeaders::default(),
            supports_credentials: false,
            max_age: None,
            always_send: true,
            vary_header: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "supports_credentials cannot be combined with an origin of '*'; the allow-origin header would be a wildcard"
    )]
    CredentialsWithWildcardOrigin,
    #[error("'{0}' is not a valid HTTP method")]
    InvalidMethod(String),
    #[error("'{0}' is not a valid header name")]
    InvalidHeaderName(String),
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<O: Into<Origins>>(mut self, origins: O) -> Self {
        self.origins = origins.into();
        self
    }

    pub fn methods(mut self, methods: AllowedMethods) -> Self {
        self.methods = methods;
        self
    }

    pub fn allow_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allow_headers = headers;
        self
    }

    pub fn expose_headers(mut self, headers: ExposedHeaders) -> Self {
        self.expose_headers = headers;
        self
    }

    pub fn supports_credentials(mut self, enabled: bool) -> Self {
        self.supports_credentials = enabled;
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn always_send(mut self, enabled: bool) -> Self {
        self.always_send = enabled;
        self
    }

    pub fn vary_header(mut self, enabled: bool) -> Self {
        self.vary_header = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.supports_credentials && self.origins.contains_wildcard() {
            return Err(ValidationError::CredentialsWithWildcardOrigin);
        }

        if let Some(invalid) = self
            .methods
            .values()
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(invalid.clone()));
        }

        if let AllowedHeaders::List(values) = &self.allow_headers
            && let Some(invalid) = values
                .iter()
                .find(|name| name.as_str() == WILDCARD || !is_allowed_header_entry(name))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        if let Some(invalid) = self
            .expose_headers
            .iter()
            .find(|name| name.as_str() == WILDCARD || !is_http_token(name))
        {
            return Err(ValidationError::InvalidHeaderName(invalid.clone()));
        }

        Ok(())
    }
}

/// A name or an expression; expressions are checked when compiled.
fn is_allowed_header_entry(entry: &str) -> bool {
    looks_like_pattern(entry) || is_http_token(entry)
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
