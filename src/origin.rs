use crate::constants::WILDCARD;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;
/// Longest candidate a pattern is run against. Literal and wildcard entries have no cap.
pub(crate) const MAX_ORIGIN_LENGTH: usize = 4_096;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to compile pattern")]
    Build(#[source] Box<BuildError>),
    #[error("pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
}

/// A single configured origin, classified once when the route is configured.
#[derive(Clone)]
pub enum OriginSpec {
    /// Matches any origin.
    Wildcard,
    /// Matches only a byte-for-byte equal origin.
    Literal(String),
    /// Matches origins for which the whole string matches the expression.
    Pattern { source: String, regex: Regex },
}

impl OriginSpec {
    pub fn literal<S: Into<String>>(value: S) -> Self {
        Self::Literal(value.into())
    }

    /// Compiles `pattern` as an anchored, full-string expression.
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        Ok(Self::Pattern {
            source: pattern.to_owned(),
            regex: compile_anchored(pattern, false)?,
        })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            OriginSpec::Wildcard => true,
            OriginSpec::Literal(value) => value == candidate,
            OriginSpec::Pattern { regex, .. } => {
                candidate.len() <= MAX_ORIGIN_LENGTH && regex.is_match(candidate)
            }
        }
    }

    /// The configured text of this entry.
    pub fn as_str(&self) -> &str {
        match self {
            OriginSpec::Wildcard => WILDCARD,
            OriginSpec::Literal(value) => value,
            OriginSpec::Pattern { source, .. } => source,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, OriginSpec::Pattern { .. })
    }
}

impl fmt::Debug for OriginSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginSpec::Wildcard => f.write_str("Wildcard"),
            OriginSpec::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            OriginSpec::Pattern { source, .. } => f.debug_tuple("Pattern").field(source).finish(),
        }
    }
}

impl PartialEq for OriginSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OriginSpec::Wildcard, OriginSpec::Wildcard) => true,
            (OriginSpec::Literal(a), OriginSpec::Literal(b)) => a == b,
            (OriginSpec::Pattern { source: a, .. }, OriginSpec::Pattern { source: b, .. }) => {
                a == b
            }
            _ => false,
        }
    }
}

/// Compiles `pattern` so that it only matches whole strings.
pub(crate) fn compile_anchored(
    pattern: &str,
    case_insensitive: bool,
) -> Result<Regex, PatternError> {
    if pattern.len() > MAX_PATTERN_LENGTH {
        return Err(PatternError::TooLong {
            length: pattern.len(),
            max: MAX_PATTERN_LENGTH,
        });
    }

    let flags = if case_insensitive { "(?i)" } else { "" };
    Regex::new(&format!("{flags}^(?:{pattern})$"))
        .map_err(|err| PatternError::Build(Box::new(err)))
}

/// Reports whether a configured origin string is meant as a regular expression.
///
/// A string is a pattern when it contains an unescaped `*` or `?` and is not
/// the bare wildcard. A literal origin that happens to contain either
/// character is therefore treated as a pattern too.
pub fn looks_like_pattern(value: &str) -> bool {
    if value == WILDCARD {
        return false;
    }

    let mut escaped = false;
    for ch in value.chars() {
        match ch {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '*' | '?' => return true,
            _ => {}
        }
    }
    false
}

/// Turns one configured origin string into its [`OriginSpec`].
pub fn classify_origin(value: &str) -> Result<OriginSpec, PatternError> {
    if value == WILDCARD {
        Ok(OriginSpec::Wildcard)
    } else if looks_like_pattern(value) {
        OriginSpec::pattern(value)
    } else {
        Ok(OriginSpec::literal(value))
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
