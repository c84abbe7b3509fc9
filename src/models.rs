//! Location report data model.
//!
//! A report is built in memory as a [`LocationDraft`] by the extraction layer,
//! stored by the storage layer, and read back as a [`LocationRecord`]. The
//! JSON shape of a record mirrors the JSON body accepted by `POST /api/location`,
//! so a client reads back the same grouping it sent.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::extract::lenient;

/// Open string-keyed map of scalar or nested JSON values.
///
/// Used for `headers`, `additionalData` and `customFields`. Kept structured in
/// memory and only turned into text when written to the database.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// Trims a string and drops it if nothing is left.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Request context observed by the server for the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestInfo {
    pub host: Option<String>,
    pub referer: Option<String>,
    pub origin: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub headers: Option<Metadata>,
}

/// Snapshot of the serving process at insert time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub hostname: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub arch: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub runtime_version: Option<String>,
    /// Seconds since the process started.
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub uptime: Option<f64>,
}

impl ServerInfo {
    /// Field-by-field merge; values in `self` win over `fallback`.
    pub fn or(self, fallback: ServerInfo) -> ServerInfo {
        ServerInfo {
            hostname: non_empty(self.hostname).or(fallback.hostname),
            platform: non_empty(self.platform).or(fallback.platform),
            arch: non_empty(self.arch).or(fallback.arch),
            runtime_version: non_empty(self.runtime_version).or(fallback.runtime_version),
            uptime: self.uptime.or(fallback.uptime),
        }
    }
}

/// Position quality reported by the client's geolocation API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeolocationInfo {
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub accuracy: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub altitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub altitude_accuracy: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub heading: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub speed: Option<f64>,
}

impl GeolocationInfo {
    /// Field-by-field merge; values in `self` win over `fallback`.
    pub fn or(self, fallback: GeolocationInfo) -> GeolocationInfo {
        GeolocationInfo {
            accuracy: self.accuracy.or(fallback.accuracy),
            altitude: self.altitude.or(fallback.altitude),
            altitude_accuracy: self.altitude_accuracy.or(fallback.altitude_accuracy),
            heading: self.heading.or(fallback.heading),
            speed: self.speed.or(fallback.speed),
        }
    }
}

/// Browser and device details reported by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserInfo {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub timezone: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub screen_resolution: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub device_memory: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_i64")]
    pub hardware_concurrency: Option<i64>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub vendor: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_bool")]
    pub cookie_enabled: Option<bool>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub do_not_track: Option<String>,
}

impl BrowserInfo {
    /// Field-by-field merge; values in `self` win over `fallback`.
    pub fn or(self, fallback: BrowserInfo) -> BrowserInfo {
        BrowserInfo {
            timezone: non_empty(self.timezone).or(non_empty(fallback.timezone)),
            language: non_empty(self.language).or(non_empty(fallback.language)),
            screen_resolution: non_empty(self.screen_resolution)
                .or(non_empty(fallback.screen_resolution)),
            device_memory: self.device_memory.or(fallback.device_memory),
            hardware_concurrency: self.hardware_concurrency.or(fallback.hardware_concurrency),
            platform: non_empty(self.platform).or(non_empty(fallback.platform)),
            vendor: non_empty(self.vendor).or(non_empty(fallback.vendor)),
            cookie_enabled: self.cookie_enabled.or(fallback.cookie_enabled),
            do_not_track: non_empty(self.do_not_track).or(non_empty(fallback.do_not_track)),
        }
    }
}

/// Connection details from the client's Network Information API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInfo {
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub connection_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_string")]
    pub effective_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub downlink: Option<f64>,
    #[serde(default, deserialize_with = "lenient::opt_f64")]
    pub rtt: Option<f64>,
}

impl NetworkInfo {
    /// Field-by-field merge; values in `self` win over `fallback`.
    pub fn or(self, fallback: NetworkInfo) -> NetworkInfo {
        NetworkInfo {
            connection_type: non_empty(self.connection_type)
                .or(non_empty(fallback.connection_type)),
            effective_type: non_empty(self.effective_type).or(non_empty(fallback.effective_type)),
            downlink: self.downlink.or(fallback.downlink),
            rtt: self.rtt.or(fallback.rtt),
        }
    }
}

/// A validated, normalized report that has not been stored yet.
///
/// Latitude and longitude are always within range; every optional field is
/// either a meaningful value or `None`, never an empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDraft {
    pub latitude: f64,
    pub longitude: f64,
    pub user_agent: Option<String>,
    pub ip_address: Option<String>,
    pub request_info: RequestInfo,
    pub system_info: ServerInfo,
    pub geolocation_info: GeolocationInfo,
    pub browser_info: BrowserInfo,
    pub network_info: NetworkInfo,
    pub additional_data: Option<Metadata>,
    pub custom_fields: Option<Metadata>,
}

impl LocationDraft {
    /// A draft carrying only coordinates; every other field is absent.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            user_agent: None,
            ip_address: None,
            request_info: RequestInfo::default(),
            system_info: ServerInfo::default(),
            geolocation_info: GeolocationInfo::default(),
            browser_info: BrowserInfo::default(),
            network_info: NetworkInfo::default(),
            additional_data: None,
            custom_fields: None,
        }
    }
}

/// A stored report as read back from the `locations` table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRecord {
    pub id: i64,
    /// Insert time, UTC, second resolution.
    pub timestamp: NaiveDateTime,
    #[serde(flatten)]
    pub report: LocationDraft,
}

/// Aggregate counts over the stored reports.
///
/// Each count comes from its own query, so under concurrent inserts the
/// numbers can disagree with each other by the few rows inserted in between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LocationStats {
    pub total: i64,
    pub today: i64,
    #[serde(rename = "thisWeek")]
    pub this_week: i64,
    #[serde(rename = "uniqueIPs")]
    pub unique_ips: i64,
    #[serde(rename = "uniqueUserAgents")]
    pub unique_user_agents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_drops_blank_strings() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("   ".to_string())), None);
        assert_eq!(non_empty(Some(" en-US ".to_string())), Some("en-US".to_string()));
        assert_eq!(non_empty(Some("UTC".to_string())), Some("UTC".to_string()));
    }

    #[test]
    fn test_geolocation_merge_prefers_self() {
        let nested = GeolocationInfo {
            accuracy: Some(5.0),
            ..Default::default()
        };
        let top = GeolocationInfo {
            accuracy: Some(50.0),
            altitude: Some(12.0),
            ..Default::default()
        };
        let merged = nested.or(top);
        assert_eq!(merged.accuracy, Some(5.0));
        assert_eq!(merged.altitude, Some(12.0));
        assert_eq!(merged.speed, None);
    }

    #[test]
    fn test_browser_merge_skips_blank_nested_values() {
        let nested = BrowserInfo {
            language: Some("".to_string()),
            ..Default::default()
        };
        let top = BrowserInfo {
            language: Some("de-DE".to_string()),
            ..Default::default()
        };
        assert_eq!(nested.or(top).language, Some("de-DE".to_string()));
    }

    #[test]
    fn test_draft_serializes_absent_fields_as_null() {
        let draft = LocationDraft::new(1.5, -2.5);
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["latitude"], json!(1.5));
        assert_eq!(value["longitude"], json!(-2.5));
        assert_eq!(value["userAgent"], json!(null));
        assert_eq!(value["additionalData"], json!(null));
        assert_eq!(value["geolocationInfo"]["altitudeAccuracy"], json!(null));
        assert_eq!(value["systemInfo"]["runtimeVersion"], json!(null));
    }

    #[test]
    fn test_stats_serialize_with_api_field_names() {
        let stats = LocationStats {
            total: 3,
            today: 2,
            this_week: 3,
            unique_ips: 1,
            unique_user_agents: 2,
        };
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(
            value,
            json!({
                "total": 3,
                "today": 2,
                "thisWeek": 3,
                "uniqueIPs": 1,
                "uniqueUserAgents": 2
            })
        );
    }
}
