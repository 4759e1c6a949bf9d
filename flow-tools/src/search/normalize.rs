use serde_json::Value;

use crate::models::{NormalizedResult, RawResult, WebPage, TIME_NOT_AVAILABLE};

pub const MAX_CONTENT_CHARS: usize = 1000;

/// Replaces every newline with a space and keeps the first
/// [`MAX_CONTENT_CHARS`] characters.
pub fn normalize_content(content: &str) -> String {
    content
        .replace('\n', " ")
        .chars()
        .take(MAX_CONTENT_CHARS)
        .collect()
}

/// Pulls `source` out of a document's metadata. The metadata may arrive as a
/// JSON-encoded string or as an object; anything unusable yields "".
pub fn extract_source(metadata: Option<&Value>) -> String {
    let source = match metadata {
        Some(Value::String(raw)) => serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|parsed| source_field(&parsed)),
        Some(object @ Value::Object(_)) => source_field(object),
        _ => None,
    };

    source.unwrap_or_default()
}

fn source_field(metadata: &Value) -> Option<String> {
    metadata.get("source")?.as_str().map(str::to_string)
}

pub fn normalize_raw(raw: &RawResult) -> NormalizedResult {
    NormalizedResult {
        content: normalize_content(raw.content.as_deref().unwrap_or_default()),
        source: extract_source(raw.metadata.as_ref()),
        time_published: None,
        question: None,
    }
}

pub fn normalize_page(page: &WebPage, question: &str) -> NormalizedResult {
    NormalizedResult {
        content: normalize_content(page.snippet.as_deref().unwrap_or_default()),
        source: page.url.clone().unwrap_or_default(),
        time_published: Some(
            page.date_published
                .clone()
                .unwrap_or_else(|| TIME_NOT_AVAILABLE.to_string()),
        ),
        question: Some(question.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn long_content_is_cut_to_limit_without_newlines() {
        let content = "line\n".repeat(400);
        let normalized = normalize_content(&content);

        assert_eq!(normalized.chars().count(), MAX_CONTENT_CHARS);
        assert!(!normalized.contains('\n'));
    }

    #[test]
    fn short_content_keeps_its_length() {
        let content = "first\nsecond\n\nthird";
        let normalized = normalize_content(content);

        assert_eq!(normalized, "first second  third");
        assert_eq!(normalized.len(), content.len());
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let content = "é".repeat(1500);
        let normalized = normalize_content(&content);

        assert_eq!(normalized.chars().count(), MAX_CONTENT_CHARS);
    }

    #[test]
    fn source_from_json_string_metadata() {
        let metadata = json!("{\"source\": \"https://docs/a.pdf\", \"page\": 3}");
        assert_eq!(extract_source(Some(&metadata)), "https://docs/a.pdf");
    }

    #[test]
    fn source_from_object_metadata() {
        let metadata = json!({"source": "b.md"});
        assert_eq!(extract_source(Some(&metadata)), "b.md");
    }

    #[test]
    fn missing_or_malformed_metadata_yields_empty_source() {
        assert_eq!(extract_source(None), "");
        assert_eq!(extract_source(Some(&json!("{\"page\": 1}"))), "");
        assert_eq!(extract_source(Some(&json!("not json"))), "");
        assert_eq!(extract_source(Some(&json!({"source": 42}))), "");
        assert_eq!(extract_source(Some(&Value::Null)), "");
    }

    #[test]
    fn raw_result_without_content_normalizes_to_empty() {
        let normalized = normalize_raw(&RawResult::default());
        assert_eq!(normalized.content, "");
        assert_eq!(normalized.source, "");
        assert!(normalized.time_published.is_none());
    }

    #[test]
    fn page_without_date_reports_not_available() {
        let page = WebPage {
            url: Some("https://a".into()),
            snippet: Some("hi".into()),
            date_published: None,
        };
        let normalized = normalize_page(&page, "cats");

        assert_eq!(normalized.time_published.as_deref(), Some("Not available"));
        assert_eq!(normalized.question.as_deref(), Some("cats"));
        assert_eq!(normalized.source, "https://a");
    }
}
