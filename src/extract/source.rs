//! The two inbound request shapes.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error_handling::ValidationError;
use crate::extract::lenient;
use crate::models::{BrowserInfo, GeolocationInfo, NetworkInfo, ServerInfo};

/// A report as submitted, tagged by request shape.
#[derive(Debug, Clone)]
pub enum LocationSource {
    /// `GET /admin/send-location?latitude=..&longitude=..&additionalData=..`
    QueryForm(QueryForm),
    /// `POST /api/location` with a JSON body.
    JsonBody(JsonBody),
}

/// Query-string report: everything arrives as text.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryForm {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub additional_data: Option<String>,
}

impl QueryForm {
    /// Picks the recognised parameters out of a decoded query string.
    pub fn from_params(params: &BTreeMap<String, String>) -> Self {
        Self {
            latitude: params.get("latitude").cloned(),
            longitude: params.get("longitude").cloned(),
            additional_data: params.get("additionalData").cloned(),
        }
    }
}

/// JSON report body.
///
/// Metadata may arrive grouped (`geolocationInfo`, `browserInfo`,
/// `networkInfo`, `systemInfo`) or as same-named top-level fields; the
/// flattened groups collect the top-level ones.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JsonBody {
    /// Number or numeric string.
    pub latitude: Option<Value>,
    /// Number or numeric string.
    pub longitude: Option<Value>,
    pub additional_data: Option<Value>,
    pub custom_fields: Option<Value>,

    #[serde(default, deserialize_with = "lenient::opt_group")]
    pub system_info: Option<ServerInfo>,
    #[serde(default, deserialize_with = "lenient::opt_group")]
    pub geolocation_info: Option<GeolocationInfo>,
    #[serde(default, deserialize_with = "lenient::opt_group")]
    pub browser_info: Option<BrowserInfo>,
    #[serde(default, deserialize_with = "lenient::opt_group")]
    pub network_info: Option<NetworkInfo>,

    #[serde(flatten)]
    pub geolocation: GeolocationInfo,
    #[serde(flatten)]
    pub browser: BrowserInfo,
    #[serde(flatten)]
    pub network: NetworkInfo,
}

impl JsonBody {
    /// Decodes a request body. An empty body is an empty report, which then
    /// fails coordinate validation like any other report without coordinates.
    pub fn from_slice(body: &[u8]) -> Result<Self, ValidationError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ValidationError::MalformedRequest(e.to_string()))
    }

    /// Grouped values merged over top-level ones; grouped wins.
    pub(crate) fn merged_groups(&mut self) -> (GeolocationInfo, BrowserInfo, NetworkInfo) {
        let geolocation = self
            .geolocation_info
            .take()
            .unwrap_or_default()
            .or(std::mem::take(&mut self.geolocation));
        let browser = self
            .browser_info
            .take()
            .unwrap_or_default()
            .or(std::mem::take(&mut self.browser));
        let network = self
            .network_info
            .take()
            .unwrap_or_default()
            .or(std::mem::take(&mut self.network));
        (geolocation, browser, network)
    }
}
