use crate::allowed_headers::HeaderRules;
use crate::context::RequestContext;
use crate::decision::{CorsDecision, decide};
use crate::header_builder::HeaderBuilder;
use crate::options::CorsOptions;
use crate::origin_set::OriginSet;
use crate::result::{CorsError, CorsResult};
use tracing::debug;

/// CORS engine for one protected route.
///
/// Built once from [`CorsOptions`]; origin and header patterns are compiled here, so
/// evaluating requests never fails and needs no locking when shared.
#[derive(Debug, Clone)]
pub struct Cors {
    options: CorsOptions,
    origins: OriginSet,
    allow_headers: HeaderRules,
}

impl Cors {
    pub fn new(options: CorsOptions) -> Result<Self, CorsError> {
        options.validate()?;
        let origins = OriginSet::new(&options.origins)?;
        let allow_headers = HeaderRules::new(&options.allow_headers)?;

        debug!(
            origins = ?origins.iter().collect::<Vec<_>>(),
            always_send = options.always_send,
            supports_credentials = options.supports_credentials,
            "configured CORS origins"
        );

        Ok(Self {
            options,
            origins,
            allow_headers,
        })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn origins(&self) -> &OriginSet {
        &self.origins
    }

    /// Decides the allow-origin outcome alone, for callers that attach headers themselves.
    pub fn decide_origin(&self, request_origin: Option<&str>) -> CorsDecision {
        decide(&self.origins, request_origin, self.options.always_send)
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsResult {
        let decision = self.decide_origin(request.origin);
        let headers = HeaderBuilder::new(&self.options, &self.allow_headers)
            .build(&decision, request)
            .into_headers();

        debug!(?decision, headers = ?headers, "evaluated CORS request");
        CorsResult { decision, headers }
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
