//! Upstream envelope parsing and result normalization.
//!
//! The search endpoint wraps results in a `{count, result}` envelope.
//! Both fields are optional on the wire and default to zero/empty;
//! a missing field is normal API behavior, not an error. Car records
//! themselves are opaque JSON pass-through.

use serde::{Deserialize, Serialize};

use crate::filter::SearchFilter;

/// Top-level JSON object returned by the `/search` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub result: Vec<serde_json::Value>,
}

/// Normalized search result handed to the tool surface.
///
/// `page` and `countpage` echo the *requested* pagination, even though
/// the sent page size may have been clamped. Deliberate compatibility
/// behavior inherited from the original surface.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage {
    pub total_count: u64,
    pub page: u32,
    pub countpage: u32,
    pub cars: Vec<serde_json::Value>,
    /// Fully resolved request URL, kept for diagnostics.
    pub request_url: String,
}

impl SearchPage {
    /// Reshape an upstream envelope into the tool-facing result.
    pub fn from_envelope(envelope: SearchEnvelope, filter: &SearchFilter, request_url: String) -> Self {
        Self {
            total_count: envelope.count,
            page: filter.page,
            countpage: filter.countpage,
            cars: envelope.result,
            request_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_both_fields() {
        let envelope: SearchEnvelope =
            serde_json::from_str(r#"{"count": 42, "result": [{"id": 1}, {"id": 2}]}"#).unwrap();
        assert_eq!(envelope.count, 42);
        assert_eq!(envelope.result.len(), 2);
    }

    #[test]
    fn test_envelope_missing_fields_default() {
        let envelope: SearchEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.count, 0);
        assert!(envelope.result.is_empty());
    }

    #[test]
    fn test_envelope_missing_result_only() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"count": 7}"#).unwrap();
        assert_eq!(envelope.count, 7);
        assert!(envelope.result.is_empty());
    }

    #[test]
    fn test_page_echoes_requested_pagination() {
        let filter = SearchFilter {
            page: 3,
            countpage: 250, // sent as 100, echoed as 250
            ..Default::default()
        };
        let envelope = SearchEnvelope {
            count: 10,
            result: vec![],
        };
        let page = SearchPage::from_envelope(envelope, &filter, "http://x/search".to_string());
        assert_eq!(page.page, 3);
        assert_eq!(page.countpage, 250);
        assert_eq!(page.total_count, 10);
    }

    #[test]
    fn test_page_serializes_expected_fields() {
        let page = SearchPage {
            total_count: 1,
            page: 0,
            countpage: 20,
            cars: vec![serde_json::json!({"id": 9})],
            request_url: "http://x/search?api_key=k".to_string(),
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["total_count"], 1);
        assert_eq!(value["cars"][0]["id"], 9);
        assert_eq!(value["request_url"], "http://x/search?api_key=k");
    }
}
