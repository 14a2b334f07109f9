//! Query String Builder
//!
//! Percent-encodes values and supports repeated keys such as `sort_by`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Encode a single path segment (e.g. an image ID).
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.pairs.push((key.to_string(), value.as_ref().to_string()));
        self
    }

    /// Push only non-empty values
    pub fn push_opt(self, key: &str, value: Option<&str>) -> Self {
        match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    /// Push one pair per value, keeping order
    pub fn push_all<I, S>(self, key: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().fold(self, |q, v| q.push(key, v))
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `?k=v&k2=v2`, or an empty string when there are no pairs.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }
        let joined = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode_segment(k), encode_segment(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }

    /// Append this query to a path
    pub fn apply(&self, path: &str) -> String {
        format!("{}{}", path, self.to_query_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query() {
        assert_eq!(Query::new().to_query_string(), "");
        assert_eq!(Query::new().apply("/items"), "/items");
    }

    #[test]
    fn test_repeated_keys_keep_order() {
        let q = Query::new().push_all("sort_by", ["date", "amount"]);
        assert_eq!(q.apply("/items"), "/items?sort_by=date&sort_by=amount");
    }

    #[test]
    fn test_push_opt_skips_blank() {
        let q = Query::new()
            .push_opt("from", Some("2024-01-01"))
            .push_opt("to", Some("  "))
            .push_opt("category", None);
        assert_eq!(q.to_query_string(), "?from=2024-01-01");
    }

    #[test]
    fn test_encoding() {
        assert_eq!(encode_segment("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_segment("img_1-2.png~"), "img_1-2.png~");
        assert_eq!(encode_segment("еда"), "%D0%B5%D0%B4%D0%B0");
    }
}
