use crate::constants::WILDCARD;
use crate::origin_set::OriginSet;
use tracing::debug;

/// Outcome of origin matching for a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    /// Emit no allow-origin header.
    NoHeader,
    /// Emit the request origin exactly as received.
    EchoOrigin(String),
    /// Emit `*`.
    Wildcard,
    /// Emit a configured literal standing in for the whole origin list.
    SerializedList(String),
}

impl CorsDecision {
    /// The `Access-Control-Allow-Origin` value, if one should be sent.
    pub fn header_value(&self) -> Option<&str> {
        match self {
            CorsDecision::NoHeader => None,
            CorsDecision::Wildcard => Some(WILDCARD),
            CorsDecision::EchoOrigin(value) | CorsDecision::SerializedList(value) => Some(value),
        }
    }

    /// True when the emitted value depends on which origin asked.
    pub fn is_origin_specific(&self) -> bool {
        matches!(self.header_value(), Some(value) if value != WILDCARD)
    }
}

/// Decides the allow-origin outcome for a request.
///
/// An empty `request_origin` is handled like a missing one.
pub fn decide(
    origin_set: &OriginSet,
    request_origin: Option<&str>,
    always_send: bool,
) -> CorsDecision {
    match request_origin.filter(|origin| !origin.is_empty()) {
        None => decide_without_origin(origin_set, always_send),
        Some(origin) => decide_with_origin(origin_set, origin),
    }
}

fn decide_without_origin(origin_set: &OriginSet, always_send: bool) -> CorsDecision {
    if !always_send {
        debug!("'Origin' header was not set, which means CORS was not requested, skipping");
        return CorsDecision::NoHeader;
    }

    if origin_set.has_wildcard() {
        debug!("no 'Origin' header, allowed origins are '*', sending wildcard");
        return CorsDecision::Wildcard;
    }

    match origin_set.first_literal_or_wildcard() {
        Some(value) => {
            debug!(value, "no 'Origin' header, sending first non-pattern origin");
            CorsDecision::SerializedList(value.to_owned())
        }
        None => {
            debug!("no 'Origin' header and every allowed origin is a pattern, skipping");
            CorsDecision::NoHeader
        }
    }
}

fn decide_with_origin(origin_set: &OriginSet, origin: &str) -> CorsDecision {
    debug!(origin, "CORS request received");

    if origin_set.has_wildcard() {
        debug!("allowed origins are '*', assuming valid request");
        return CorsDecision::Wildcard;
    }

    match origin_set.find_match(origin) {
        Some(spec) => {
            debug!(origin, matched = spec.as_str(), "origin matches allowed origins");
            CorsDecision::EchoOrigin(origin.to_owned())
        }
        None => {
            debug!(
                origin,
                allowed = ?origin_set.iter().map(|spec| spec.as_str()).collect::<Vec<_>>(),
                "origin does not match any allowed origin"
            );
            CorsDecision::NoHeader
        }
    }
}

#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;
