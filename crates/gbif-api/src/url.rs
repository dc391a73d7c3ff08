//! Request URL composition

use data_provider::Query;

/// Separators used when composing a request URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Between base URL, sub-url and subendpoints
    pub endpoint: String,
    /// Between `key=value` pairs
    pub arguments: String,
    /// Between the path and the query string
    pub endpoint_arguments: String,
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            endpoint: "/".to_string(),
            arguments: "&".to_string(),
            endpoint_arguments: "?".to_string(),
        }
    }
}

/// Build `<base>/<sub_url>/<seg>...?<k>=<v>&...`
///
/// Values are inserted as-is, without percent-encoding; callers must pass
/// values that are already safe to put in a URL. The query string is left
/// out when the query has no parameters.
pub fn compose_url(base_url: &str, sub_url: &str, query: &Query, delimiters: &Delimiters) -> String {
    let base = base_url.trim_end_matches(delimiters.endpoint.as_str());

    let mut segments = vec![base, sub_url];
    segments.extend(query.subendpoints().iter().map(String::as_str));
    let mut url = segments.join(&delimiters.endpoint);

    if !query.parameters().is_empty() {
        let arguments: Vec<String> = query
            .parameters()
            .iter()
            .map(|(key, value)| format!("{}={}", key, value))
            .collect();
        url.push_str(&delimiters.endpoint_arguments);
        url.push_str(&arguments.join(&delimiters.arguments));
    }

    url
}
