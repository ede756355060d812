use crate::constants::header;
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

/// Accumulates response headers, folding every `Vary` contribution into one value.
#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            headers: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn push<V: Into<String>>(&mut self, name: &str, value: V) {
        if name.eq_ignore_ascii_case(header::VARY) {
            self.add_vary(value);
        } else {
            self.headers.insert(name.to_owned(), value.into());
        }
    }

    pub(crate) fn add_vary<S: Into<String>>(&mut self, value: S) {
        let mut entries: Vec<String> = Vec::new();
        let existing = self.headers.remove(header::VARY).unwrap_or_default();
        let incoming: String = value.into();

        for entry in existing.split(',').chain(incoming.split(',')) {
            let entry = entry.trim();
            if entry.is_empty()
                || entries
                    .iter()
                    .any(|seen| seen.eq_ignore_ascii_case(entry))
            {
                continue;
            }
            entries.push(entry.to_owned());
        }

        if !entries.is_empty() {
            self.headers
                .insert(header::VARY.to_owned(), entries.join(", "));
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
