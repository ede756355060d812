use crate::constants::WILDCARD;
use crate::origin::{PatternError, compile_anchored, looks_like_pattern};
use crate::util::{StringOrList, sorted_join};
use regex_automata::meta::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Request headers a preflight may ask for.
#[derive(Clone, PartialEq, Eq, Debug, Default, Deserialize)]
#[serde(from = "StringOrList")]
pub enum AllowedHeaders {
    /// Every requested header is allowed.
    #[default]
    Any,
    List(Vec<String>),
}

impl AllowedHeaders {
    /// Builds the list, trimming names and dropping case-insensitive duplicates.
    ///
    /// A list made only of `"*"` collapses to [`AllowedHeaders::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let trimmed = value.into().trim().to_string();
            if trimmed.is_empty()
                || deduped
                    .iter()
                    .any(|existing| existing.eq_ignore_ascii_case(&trimmed))
            {
                continue;
            }
            deduped.push(trimmed);
        }

        if deduped.len() == 1 && deduped[0] == WILDCARD {
            return Self::Any;
        }
        Self::List(deduped)
    }

    pub fn any() -> Self {
        Self::Any
    }
}

#[derive(Debug, Error)]
#[error("invalid allowed header pattern '{pattern}'")]
pub struct InvalidHeaderPattern {
    pub pattern: String,
    #[source]
    pub source: PatternError,
}

#[derive(Debug, Clone)]
enum HeaderRule {
    Any,
    Name(String),
    Pattern(Regex),
}

impl HeaderRule {
    fn matches(&self, name: &str) -> bool {
        match self {
            HeaderRule::Any => true,
            HeaderRule::Name(allowed) => allowed.eq_ignore_ascii_case(name),
            HeaderRule::Pattern(regex) => regex.is_match(name),
        }
    }
}

/// [`AllowedHeaders`] compiled once per route. Names compare
/// case-insensitively, and entries that look like expressions match the whole
/// requested name, also ignoring case.
#[derive(Debug, Clone)]
pub(crate) struct HeaderRules {
    rules: Vec<HeaderRule>,
}

impl HeaderRules {
    pub(crate) fn new(allowed: &AllowedHeaders) -> Result<Self, InvalidHeaderPattern> {
        let rules = match allowed {
            AllowedHeaders::Any => vec![HeaderRule::Any],
            AllowedHeaders::List(values) => values
                .iter()
                .map(|value| Self::compile(value))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Self { rules })
    }

    fn compile(value: &str) -> Result<HeaderRule, InvalidHeaderPattern> {
        if value == WILDCARD {
            Ok(HeaderRule::Any)
        } else if looks_like_pattern(value) {
            compile_anchored(value, true)
                .map(HeaderRule::Pattern)
                .map_err(|source| InvalidHeaderPattern {
                    pattern: value.to_owned(),
                    source,
                })
        } else {
            Ok(HeaderRule::Name(value.to_owned()))
        }
    }

    pub(crate) fn allows_header(&self, name: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(name))
    }

    /// Filters an `Access-Control-Request-Headers` value down to the permitted names.
    pub(crate) fn permitted<'a>(&self, request_headers: &'a str) -> Vec<&'a str> {
        request_headers
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty() && self.allows_header(name))
            .collect()
    }

    /// The `Access-Control-Allow-Headers` value answering `request_headers`.
    pub(crate) fn header_value(&self, request_headers: &str) -> Option<String> {
        let permitted = self.permitted(request_headers);
        if permitted.is_empty() {
            None
        } else {
            Some(sorted_join(permitted))
        }
    }
}

impl From<StringOrList> for AllowedHeaders {
    fn from(raw: StringOrList) -> Self {
        Self::list(raw.into_vec())
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
