//! Shared request and payload plumbing for dictionary sources

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::{DefinitionCandidate, SourceFault, SourceOutcome};

/// Send a GET request and decode a JSON body, mapping every failure
/// onto a [`SourceFault`]
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, SourceFault> {
    let response = request
        .send()
        .await
        .map_err(|err| SourceFault::Transport(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SourceFault::Status(status.as_u16()));
    }

    let body = response
        .bytes()
        .await
        .map_err(|err| SourceFault::Transport(err.to_string()))?;

    serde_json::from_slice(&body).map_err(|err| SourceFault::Parse(err.to_string()))
}

/// Endpoint base followed by the percent-encoded word
pub(crate) fn word_url(base_url: &str, word: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(word)
    )
}

pub(crate) fn into_outcome(
    result: Result<Vec<DefinitionCandidate>, SourceFault>,
) -> SourceOutcome {
    match result {
        Ok(candidates) => SourceOutcome::from_candidates(candidates),
        Err(fault) => SourceOutcome::Failed(fault),
    }
}

/// Decode the first `limit` array items, skipping any of the wrong shape
///
/// Items past the window are never looked at.
pub(crate) fn decode_leading<T: DeserializeOwned>(items: &[Value], limit: usize) -> Vec<T> {
    items
        .iter()
        .take(limit)
        .filter_map(|item| T::deserialize(item).ok())
        .collect()
}

/// First element of an optional list, when it is a string
pub(crate) fn first_text(items: Option<&[Value]>) -> Option<&str> {
    items?.first()?.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        name: String,
    }

    #[test]
    fn test_word_url_encodes_without_folding_case() {
        assert_eq!(
            word_url("https://example.org/entries/", "Café au lait"),
            "https://example.org/entries/Caf%C3%A9%20au%20lait"
        );
        assert_eq!(
            word_url("https://example.org/entries", "AC/DC?"),
            "https://example.org/entries/AC%2FDC%3F"
        );
    }

    #[test]
    fn test_decode_leading_ignores_items_past_the_window() {
        let items = json!([{"name": "a"}, {"name": 7}, {"name": "c"}, {"name": null}]);
        let items = items.as_array().unwrap();

        let decoded: Vec<Item> = decode_leading(items, 3);
        assert_eq!(
            decoded,
            vec![
                Item { name: "a".into() },
                Item { name: "c".into() }
            ]
        );
        assert!(decode_leading::<Item>(items, 0).is_empty());
    }

    #[test]
    fn test_first_text() {
        let items = json!(["first", 2]);
        assert_eq!(first_text(items.as_array().map(Vec::as_slice)), Some("first"));

        let items = json!([2, "second"]);
        assert_eq!(first_text(items.as_array().map(Vec::as_slice)), None);
        assert_eq!(first_text(None), None);
    }
}
