//! The request description passed from query construction to execution

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Structured, immutable description of one request
///
/// `subendpoints` are path segments appended after an endpoint's sub-url, in
/// order. `parameters` end up in the query string; values are stored after
/// plain string conversion. Parameters are kept sorted by name so the string
/// form and any URL built from a query are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    subendpoints: Vec<String>,
    parameters: BTreeMap<String, String>,
}

impl Query {
    /// Build a query from path segments and `(name, value)` pairs
    pub fn new<S, P, K, V>(subendpoints: S, parameters: P) -> Self
    where
        S: IntoIterator,
        S::Item: Into<String>,
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        Self {
            subendpoints: subendpoints.into_iter().map(Into::into).collect(),
            parameters: parameters
                .into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        }
    }

    /// A query with no path segments and no parameters
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn subendpoints(&self) -> &[String] {
        &self.subendpoints
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_contains_both_attributes() {
        let query = Query::new(["suggest"], [("q", "Picea abies")]);
        assert_eq!(
            query.to_string(),
            r#"{"subendpoints":["suggest"],"parameters":{"q":"Picea abies"}}"#
        );
    }

    #[test]
    fn test_display_is_independent_of_insertion_order() {
        let a = Query::new(["search"], [("limit", "5"), ("country", "DK")]);
        let b = Query::new(["search"], [("country", "DK"), ("limit", "5")]);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_subendpoint_order_is_kept() {
        let query = Query::new(["5231190", "children"], Vec::<(String, String)>::new());
        assert_eq!(query.subendpoints(), ["5231190", "children"]);
        assert!(query.parameters().is_empty());
    }

    #[test]
    fn test_empty_query() {
        let query = Query::empty();
        assert!(query.subendpoints().is_empty());
        assert!(query.parameters().is_empty());
        assert_eq!(query.to_string(), r#"{"subendpoints":[],"parameters":{}}"#);
    }

    #[test]
    fn test_values_use_plain_string_conversion() {
        let query = Query::new(Vec::<String>::new(), [("limit", 20), ("offset", 0)]);
        assert_eq!(query.parameters()["limit"], "20");
        assert_eq!(query.parameters()["offset"], "0");
    }
}
