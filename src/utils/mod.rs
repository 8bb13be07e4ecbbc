//! Utility functions and helpers.

pub mod http;

use url::Url;

/// Strip the thumbnail-size query parameter (`_ex`) from a cover URL so
/// the full-size image is requested instead.
///
/// Returns the input unchanged if it does not parse as a URL.
pub fn full_size_cover_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "_ex")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }

    url.to_string()
}
