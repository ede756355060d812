use crate::util::{StringOrList, sorted_join};
use serde::Deserialize;
use std::ops::Deref;

/// Response headers scripts from an allowed origin may read.
#[derive(Clone, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "StringOrList")]
pub struct ExposedHeaders {
    values: Vec<String>,
}

impl ExposedHeaders {
    /// Builds the list, trimming names and dropping blanks and case-insensitive duplicates.
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
        Self { values: deduped }
    }

    pub fn header_value(&self) -> Option<String> {
        if self.values.is_empty() {
            None
        } else {
            Some(sorted_join(self.values.iter().map(String::as_str)))
        }
    }
}

impl Deref for ExposedHeaders {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.values
    }
}

impl From<StringOrList> for ExposedHeaders {
    fn from(raw: StringOrList) -> Self {
        Self::list(raw.into_vec())
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
