use crate::constants::method;
use crate::util::{StringOrList, sorted_join};
use serde::Deserialize;

/// Methods advertised in `Access-Control-Allow-Methods` on preflight responses.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(from = "StringOrList")]
pub struct AllowedMethods {
    values: Vec<String>,
}

impl AllowedMethods {
    /// Builds the list, upper-casing names and dropping blanks and duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for value in values {
            let upper = value.into().trim().to_ascii_uppercase();
            if !upper.is_empty() && !deduped.contains(&upper) {
                deduped.push(upper);
            }
        }
        Self { values: deduped }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Case-insensitive membership test for an `Access-Control-Request-Method` value.
    pub fn allows_method(&self, requested: &str) -> bool {
        let requested = requested.trim();
        !requested.is_empty()
            && self
                .values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(requested))
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(sorted_join(self.values.iter().map(String::as_str)))
        }
    }
}

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list([
            method::GET,
            method::HEAD,
            method::POST,
            method::OPTIONS,
            method::PUT,
            method::PATCH,
            method::DELETE,
        ])
    }
}

impl From<StringOrList> for AllowedMethods {
    fn from(raw: StringOrList) -> Self {
        Self::list(raw.into_vec())
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
