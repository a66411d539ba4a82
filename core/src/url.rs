//! Request URL assembly.
//!
//! # Design
//! `build_url` is a pure string concatenation of base URL, path and an
//! optional query string. Path parameters are substituted by the caller
//! before the path reaches this module. Neither path nor query values are
//! percent-encoded, and the base URL is used literally.
//!
//! Query keys are written in snake_case by callers and converted to the
//! camelCase form the remote API expects (`page_size` → `pageSize`).

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::UInt(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

macro_rules! unsigned_query_value {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                QueryValue::UInt(value as u64)
            }
        })*
    };
}

macro_rules! signed_query_value {
    ($($t:ty),*) => {
        $(impl From<$t> for QueryValue {
            fn from(value: $t) -> Self {
                QueryValue::Int(value as i64)
            }
        })*
    };
}

unsigned_query_value!(u8, u16, u32, u64, usize);
signed_query_value!(i8, i16, i32, i64, isize);

/// Insertion-ordered query parameters.
///
/// Keys are stored as given (snake_case) and camel-cased when the URL is
/// built. Duplicate keys are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl Into<QueryValue>) -> &mut Self {
        self.pairs.push((key.to_string(), value.into()));
        self
    }

    /// Push `value` only when it is `Some`.
    pub fn push_opt<V: Into<QueryValue>>(&mut self, key: &str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn with(mut self, key: &str, value: impl Into<QueryValue>) -> Self {
        self.push(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Convert a snake_case key into camelCase.
///
/// The first word is kept as-is; each later word has its first character
/// upper-cased and the remainder left untouched.
pub fn to_camel_case(key: &str) -> String {
    let mut words = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        let mut chars = word.chars();
        if let Some(c) = chars.next() {
            out.extend(c.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}

/// Concatenate `base_url`, `path` and, when `params` is non-empty, a
/// `?key=value&...` query string in insertion order.
pub fn build_url(base_url: &str, path: &str, params: Option<&QueryParams>) -> String {
    let mut url = format!("{base_url}{path}");
    let Some(params) = params.filter(|p| !p.is_empty()) else {
        return url;
    };
    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(&to_camel_case(key));
        url.push('=');
        url.push_str(&value.to_string());
    }
    url
}
