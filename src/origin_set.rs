use crate::constants::WILDCARD;
use crate::origin::{OriginSpec, PatternError, classify_origin};
use serde::Deserialize;
use thiserror::Error;

/// The `origins` value of a route configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "RawOrigins")]
pub enum Origins {
    /// The `"*"` sentinel.
    #[default]
    Any,
    One(String),
    Many(Vec<String>),
}

impl Origins {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn one<S: Into<String>>(value: S) -> Self {
        let value = value.into();
        if value == WILDCARD {
            Self::Any
        } else {
            Self::One(value)
        }
    }

    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }

    /// Whether the configuration reduces to the `"*"` sentinel.
    pub fn is_wildcard(&self) -> bool {
        match self {
            Origins::Any => true,
            Origins::One(value) => value == WILDCARD,
            Origins::Many(values) => {
                !values.is_empty() && values.iter().all(|value| value == WILDCARD)
            }
        }
    }
}

impl Origins {
    /// Whether any entry is `"*"`, alone or mixed with other origins.
    pub fn contains_wildcard(&self) -> bool {
        match self {
            Origins::Any => true,
            Origins::One(value) => value == WILDCARD,
            Origins::Many(values) => values.iter().any(|value| value == WILDCARD),
        }
    }
}

impl From<&str> for Origins {
    fn from(value: &str) -> Self {
        Origins::one(value)
    }
}

impl From<String> for Origins {
    fn from(value: String) -> Self {
        Origins::one(value)
    }
}

impl From<Vec<String>> for Origins {
    fn from(values: Vec<String>) -> Self {
        Origins::Many(values)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawOrigins {
    One(String),
    Many(Vec<String>),
}

impl From<RawOrigins> for Origins {
    fn from(raw: RawOrigins) -> Self {
        match raw {
            RawOrigins::One(value) => Origins::one(value),
            RawOrigins::Many(values) => Origins::Many(values),
        }
    }
}

/// A configured origin that failed to compile as a pattern.
#[derive(Debug, Error)]
#[error("invalid origin pattern '{pattern}'")]
pub struct InvalidOriginPattern {
    pub pattern: String,
    #[source]
    pub source: PatternError,
}

/// Ordered, immutable set of configured origins for one route.
#[derive(Debug, Clone, PartialEq)]
pub struct OriginSet {
    specs: Vec<OriginSpec>,
    wildcard: bool,
}

impl OriginSet {
    /// Classifies and compiles every configured entry, preserving order.
    pub fn new(origins: &Origins) -> Result<Self, InvalidOriginPattern> {
        let specs = match origins {
            Origins::Any => vec![OriginSpec::Wildcard],
            Origins::One(value) => vec![Self::classify(value)?],
            Origins::Many(values) => values
                .iter()
                .map(|value| Self::classify(value))
                .collect::<Result<Vec<_>, _>>()?,
        };

        Ok(Self::from_specs(specs))
    }

    fn classify(value: &str) -> Result<OriginSpec, InvalidOriginPattern> {
        classify_origin(value).map_err(|source| InvalidOriginPattern {
            pattern: value.to_owned(),
            source,
        })
    }

    pub fn from_specs(specs: Vec<OriginSpec>) -> Self {
        let wildcard = !specs.is_empty()
            && specs
                .iter()
                .all(|spec| matches!(spec, OriginSpec::Wildcard));
        Self { specs, wildcard }
    }

    pub fn wildcard() -> Self {
        Self::from_specs(vec![OriginSpec::Wildcard])
    }

    /// Returns the first configured entry that matches `candidate`.
    pub fn find_match(&self, candidate: &str) -> Option<&OriginSpec> {
        self.specs.iter().find(|spec| spec.matches(candidate))
    }

    /// True when the set reduces to the single wildcard.
    pub fn has_wildcard(&self) -> bool {
        self.wildcard
    }

    /// The first non-pattern entry, used when no request origin can be tested.
    pub fn first_literal_or_wildcard(&self) -> Option<&str> {
        self.specs
            .iter()
            .find(|spec| !spec.is_pattern())
            .map(OriginSpec::as_str)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OriginSpec> {
        self.specs.iter()
    }
}

impl<'a> IntoIterator for &'a OriginSet {
    type Item = &'a OriginSpec;
    type IntoIter = std::slice::Iter<'a, OriginSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "origin_set_test.rs"]
mod origin_set_test;
