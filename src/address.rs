/// Address bar input handling
use url::Url;

/// Placeholder replaced by the encoded query in search templates
pub const QUERY_PLACEHOLDER: &str = "%s";

/// Turn address bar input into the URL to visit
///
/// Algorithm:
/// 1. Parse the input strictly as an absolute URL
/// 2. On success, return its serialized form (e.g. "https://example.com" → "https://example.com/")
/// 3. Otherwise percent-encode the input and substitute it for `%s` in `search_template`
///
/// Malformed input is never an error: it becomes a search.
pub fn format_url(input: &str, search_template: &str) -> String {
    match Url::parse(input) {
        Ok(url) => url.to_string(),
        Err(_) => search_url(input, search_template),
    }
}

/// Build the search URL for `query` from a `%s` template. Only the first
/// placeholder is substituted.
pub fn search_url(query: &str, search_template: &str) -> String {
    search_template.replacen(QUERY_PLACEHOLDER, &urlencoding::encode(query), 1)
}
