//! Origin matching and CORS response header decisions.
//!
//! Allowed origins are configured as literals, the `*` wildcard or regular
//! expressions. [`Cors`] classifies and compiles them once, then answers each
//! request with a [`CorsDecision`] and the response headers that follow from it.

pub mod constants;
mod allowed_headers;
mod allowed_methods;
mod context;
mod cors;
mod decision;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod origin_set;
mod result;
mod util;

pub use allowed_headers::{AllowedHeaders, InvalidHeaderPattern};
pub use allowed_methods::AllowedMethods;
pub use context::RequestContext;
pub use cors::Cors;
pub use decision::{CorsDecision, decide};
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{OriginSpec, PatternError, classify_origin, looks_like_pattern};
pub use origin_set::{InvalidOriginPattern, OriginSet, Origins};
pub use result::{CorsError, CorsResult};
