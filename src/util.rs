use serde::Deserialize;

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

/// Joins values with `", "` after sorting them, so generated headers are stable.
pub(crate) fn sorted_join<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut values: Vec<&str> = values.into_iter().collect();
    values.sort_unstable();
    values.join(", ")
}

/// Configuration values that accept either a single string or a list.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl StringOrList {
    pub(crate) fn into_vec(self) -> Vec<String> {
        match self {
            StringOrList::One(value) => vec![value],
            StringOrList::Many(values) => values,
        }
    }
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
