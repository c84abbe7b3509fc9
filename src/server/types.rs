//! Response bodies.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::models::{LocationDraft, LocationRecord, LocationStats};
use crate::storage::SearchFilters;

/// Ordered `"METHOD /path": "description"` listing.
///
/// Serialized as a JSON object in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct EndpointDirectory(pub &'static [(&'static str, &'static str)]);

impl Serialize for EndpointDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (endpoint, description) in self.0 {
            map.serialize_entry(endpoint, description)?;
        }
        map.end()
    }
}

/// Body of `GET /`.
#[derive(Serialize)]
pub struct ServiceResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: EndpointDirectory,
}

/// Body returned after a report is stored.
#[derive(Serialize)]
pub struct StoredResponse<'a> {
    pub message: &'static str,
    pub id: i64,
    pub data: &'a LocationDraft,
    /// Echo of the query string, for the query-form endpoint only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<&'a BTreeMap<String, String>>,
}

/// Body of `GET /api/locations`.
#[derive(Serialize)]
pub struct LocationsResponse {
    pub count: usize,
    pub locations: Vec<LocationRecord>,
}

/// Body of `GET /api/stats`.
#[derive(Serialize)]
pub struct StatsResponse {
    pub stats: LocationStats,
}

/// Body of `GET /api/search`.
#[derive(Serialize)]
pub struct SearchResponse {
    pub count: usize,
    pub filters: SearchFilters,
    pub locations: Vec<LocationRecord>,
}

/// Body of `DELETE /api/reset`.
#[derive(Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    #[serde(rename = "removedCount")]
    pub removed_count: u64,
}

/// Body of every error response.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<&'static str>,
    #[serde(
        rename = "availableEndpoints",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_endpoints: Option<EndpointDirectory>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_directory_keeps_order() {
        let directory = EndpointDirectory(&[("GET /b", "second"), ("GET /a", "first")]);
        let text = serde_json::to_string(&directory).unwrap();
        assert_eq!(text, r#"{"GET /b":"second","GET /a":"first"}"#);
    }

    #[test]
    fn test_error_response_omits_absent_fields() {
        let body = ErrorResponse {
            error: "Invalid latitude".to_string(),
            message: None,
            usage: None,
            available_endpoints: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"error": "Invalid latitude"})
        );
    }
}
