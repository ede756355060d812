use crate::allowed_headers::HeaderRules;
use crate::constants::header;
use crate::context::RequestContext;
use crate::decision::CorsDecision;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use tracing::info;

/// Turns an origin decision and the route configuration into response headers.
pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
    allow_headers: &'a HeaderRules,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions, allow_headers: &'a HeaderRules) -> Self {
        Self {
            options,
            allow_headers,
        }
    }

    pub(crate) fn build(
        &self,
        decision: &CorsDecision,
        request: &RequestContext<'_>,
    ) -> HeaderCollection {
        let mut headers = self.build_origin_headers(decision);
        if headers.is_empty() {
            return headers;
        }

        self.build_exposed_headers(&mut headers);
        self.build_credentials_header(&mut headers);
        if request.is_preflight() {
            self.build_preflight_headers(&mut headers, request);
        }
        headers
    }

    pub(crate) fn build_origin_headers(&self, decision: &CorsDecision) -> HeaderCollection {
        let Some(value) = decision.header_value() else {
            return HeaderCollection::new();
        };

        let mut headers = HeaderCollection::with_capacity(6);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
        if self.options.vary_header && decision.is_origin_specific() {
            headers.add_vary(header::ORIGIN);
        }
        headers
    }

    fn build_exposed_headers(&self, headers: &mut HeaderCollection) {
        if let Some(value) = self.options.expose_headers.header_value() {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
        }
    }

    fn build_credentials_header(&self, headers: &mut HeaderCollection) {
        if self.options.supports_credentials {
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        }
    }

    fn build_preflight_headers(
        &self,
        headers: &mut HeaderCollection,
        request: &RequestContext<'_>,
    ) {
        let requested_method = request.access_control_request_method.unwrap_or_default();
        if !self.options.methods.allows_method(requested_method) {
            info!(
                requested_method,
                allowed = ?self.options.methods.values(),
                "Access-Control-Request-Method does not match allowed methods"
            );
            return;
        }

        if let Some(requested) = request.access_control_request_headers
            && let Some(value) = self.allow_headers.header_value(requested)
        {
            headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, value);
        }
        if let Some(max_age) = self.options.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        if let Some(value) = self.options.methods.header_value() {
            headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
