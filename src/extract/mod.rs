//! Extraction layer: inbound request → normalized location draft.
//!
//! Both request shapes go through [`normalize`], so the coordinate rules, the
//! `additionalData` rules and the server snapshot are identical for each.
//! Nothing in this module touches the network or the database.

mod additional_data;
mod context;
mod coordinates;
pub(crate) mod lenient;
mod search;
mod source;
mod system_info;

pub use additional_data::{metadata_from_json, parse_additional_data};
pub use context::RequestContext;
pub use search::SearchParams;
pub use source::{JsonBody, LocationSource, QueryForm};
pub use system_info::{FixedSystemInfo, HostSystemInfo, SystemInfoProvider};

use crate::error_handling::ValidationError;
use crate::models::{
    BrowserInfo, GeolocationInfo, LocationDraft, Metadata, NetworkInfo, ServerInfo,
};
use coordinates::{validate_coordinates, RawCoordinate};

/// Per-shape values, after coordinate validation.
struct Supplied {
    latitude: f64,
    longitude: f64,
    additional_data: Option<Metadata>,
    custom_fields: Option<Metadata>,
    system_info: ServerInfo,
    geolocation_info: GeolocationInfo,
    browser_info: BrowserInfo,
    network_info: NetworkInfo,
}

/// Builds a location draft from a submitted report.
///
/// Fails only on coordinate problems (or an undecodable body upstream).
/// Server fields the caller did not supply are filled from a fresh
/// `system` snapshot.
pub fn normalize(
    source: LocationSource,
    context: &RequestContext,
    system: &dyn SystemInfoProvider,
) -> Result<LocationDraft, ValidationError> {
    let supplied = match source {
        LocationSource::QueryForm(form) => {
            let (latitude, longitude) = validate_coordinates(
                RawCoordinate::from_text(form.latitude.as_deref()),
                RawCoordinate::from_text(form.longitude.as_deref()),
            )?;
            Supplied {
                latitude,
                longitude,
                additional_data: form.additional_data.as_deref().and_then(parse_additional_data),
                custom_fields: None,
                system_info: ServerInfo::default(),
                geolocation_info: GeolocationInfo::default(),
                browser_info: BrowserInfo::default(),
                network_info: NetworkInfo::default(),
            }
        }
        LocationSource::JsonBody(mut body) => {
            let (latitude, longitude) = validate_coordinates(
                RawCoordinate::from_json(body.latitude.as_ref()),
                RawCoordinate::from_json(body.longitude.as_ref()),
            )?;
            let (geolocation_info, browser_info, network_info) = body.merged_groups();
            Supplied {
                latitude,
                longitude,
                additional_data: metadata_from_json("additionalData", body.additional_data.take()),
                custom_fields: metadata_from_json("customFields", body.custom_fields.take()),
                system_info: body.system_info.take().unwrap_or_default(),
                geolocation_info,
                browser_info,
                network_info,
            }
        }
    };

    Ok(LocationDraft {
        latitude: supplied.latitude,
        longitude: supplied.longitude,
        user_agent: context.user_agent.clone(),
        ip_address: context.client_ip(),
        request_info: context.request_info(),
        system_info: supplied.system_info.or(system.snapshot()),
        geolocation_info: supplied.geolocation_info,
        browser_info: supplied.browser_info,
        network_info: supplied.network_info,
        additional_data: supplied.additional_data,
        custom_fields: supplied.custom_fields,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::net::{IpAddr, Ipv4Addr};

    fn fixed_system() -> FixedSystemInfo {
        FixedSystemInfo(ServerInfo {
            hostname: Some("test-host".to_string()),
            platform: Some("linux".to_string()),
            arch: Some("x86_64".to_string()),
            runtime_version: Some("location_api/0.0.0".to_string()),
            uptime: Some(12.5),
        })
    }

    fn context() -> RequestContext {
        RequestContext {
            client_addr: Some(IpAddr::V4(Ipv4Addr::new(192, 168, 1, 10))),
            user_agent: Some("test-agent".to_string()),
            method: Some("GET".to_string()),
            ..Default::default()
        }
    }

    fn query(lat: &str, lng: &str, additional: Option<&str>) -> LocationSource {
        LocationSource::QueryForm(QueryForm {
            latitude: Some(lat.to_string()),
            longitude: Some(lng.to_string()),
            additional_data: additional.map(str::to_string),
        })
    }

    fn json_body(value: serde_json::Value) -> LocationSource {
        let bytes = serde_json::to_vec(&value).unwrap();
        LocationSource::JsonBody(JsonBody::from_slice(&bytes).unwrap())
    }

    #[test]
    fn test_query_form_draft() {
        let draft = normalize(
            query("37.7749", "-122.4194", Some("accuracy:10")),
            &context(),
            &fixed_system(),
        )
        .unwrap();

        assert_eq!(draft.latitude, 37.7749);
        assert_eq!(draft.longitude, -122.4194);
        assert_eq!(draft.ip_address.as_deref(), Some("192.168.1.10"));
        assert_eq!(draft.user_agent.as_deref(), Some("test-agent"));
        assert_eq!(
            draft.additional_data.map(serde_json::Value::Object),
            Some(json!({"accuracy": "10"}))
        );
        assert_eq!(draft.system_info, fixed_system().0);
        assert_eq!(draft.custom_fields, None);
    }

    #[test]
    fn test_unparseable_additional_data_does_not_fail_request() {
        let draft = normalize(query("1", "2", Some("not valid")), &context(), &fixed_system())
            .unwrap();
        assert_eq!(draft.additional_data, None);
    }

    #[test]
    fn test_same_rules_for_both_shapes() {
        let cases = [
            ("91", "0", ValidationError::InvalidLatitude),
            ("0", "-181", ValidationError::InvalidLongitude),
            ("abc", "0", ValidationError::InvalidLatitude),
            ("", "0", ValidationError::MissingCoordinates),
        ];
        for (lat, lng, expected) in cases {
            let from_query = normalize(query(lat, lng, None), &context(), &fixed_system());
            let from_json = normalize(
                json_body(json!({"latitude": lat, "longitude": lng})),
                &context(),
                &fixed_system(),
            );
            assert_eq!(from_query, Err(expected.clone()), "query {lat},{lng}");
            assert_eq!(from_json, Err(expected), "json {lat},{lng}");
        }
    }

    #[test]
    fn test_json_body_nested_groups_win() {
        let draft = normalize(
            json_body(json!({
                "latitude": 48.8566,
                "longitude": 2.3522,
                "accuracy": 100,
                "speed": 3.5,
                "language": "fr-FR",
                "geolocationInfo": {"accuracy": 8},
                "browserInfo": {"language": "en-GB", "vendor": "Google Inc."},
                "networkInfo": {"effectiveType": "4g", "rtt": 50},
                "customFields": {"campaign": "spring"}
            })),
            &context(),
            &fixed_system(),
        )
        .unwrap();

        assert_eq!(draft.geolocation_info.accuracy, Some(8.0));
        assert_eq!(draft.geolocation_info.speed, Some(3.5));
        assert_eq!(draft.browser_info.language.as_deref(), Some("en-GB"));
        assert_eq!(draft.browser_info.vendor.as_deref(), Some("Google Inc."));
        assert_eq!(draft.network_info.effective_type.as_deref(), Some("4g"));
        assert_eq!(draft.network_info.rtt, Some(50.0));
        assert_eq!(
            draft.custom_fields.map(serde_json::Value::Object),
            Some(json!({"campaign": "spring"}))
        );
    }

    #[test]
    fn test_caller_system_info_fills_per_field() {
        let draft = normalize(
            json_body(json!({
                "latitude": 1,
                "longitude": 2,
                "systemInfo": {"hostname": "edge-7", "uptime": 3.0}
            })),
            &context(),
            &fixed_system(),
        )
        .unwrap();

        assert_eq!(draft.system_info.hostname.as_deref(), Some("edge-7"));
        assert_eq!(draft.system_info.uptime, Some(3.0));
        assert_eq!(draft.system_info.platform.as_deref(), Some("linux"));
        assert_eq!(
            draft.system_info.runtime_version.as_deref(),
            Some("location_api/0.0.0")
        );
    }

    #[test]
    fn test_json_additional_data_as_shorthand_string() {
        let draft = normalize(
            json_body(json!({
                "latitude": "10.5",
                "longitude": "20.25",
                "additionalData": "floor:3,room:B"
            })),
            &context(),
            &fixed_system(),
        )
        .unwrap();

        assert_eq!(draft.latitude, 10.5);
        assert_eq!(draft.longitude, 20.25);
        assert_eq!(
            draft.additional_data.map(serde_json::Value::Object),
            Some(json!({"floor": "3", "room": "B"}))
        );
    }

    #[test]
    fn test_missing_context_leaves_fields_null() {
        let draft = normalize(
            query("1", "2", None),
            &RequestContext::default(),
            &fixed_system(),
        )
        .unwrap();
        assert_eq!(draft.ip_address, None);
        assert_eq!(draft.user_agent, None);
        assert_eq!(draft.request_info.headers, None);
        assert_eq!(draft.additional_data, None);
    }
}
