//! Mapping between `locations` rows and [`LocationRecord`].

use sqlx::sqlite::SqliteRow;
use sqlx::Row;

use crate::error_handling::DatabaseError;
use crate::models::{
    BrowserInfo, GeolocationInfo, LocationDraft, LocationRecord, Metadata, NetworkInfo,
    RequestInfo, ServerInfo,
};

/// Column list used by every read query, in table order.
pub(crate) const LOCATION_COLUMNS: &str = "id, latitude, longitude, timestamp, \
    user_agent, ip_address, host, referer, origin, \
    method, url, protocol, headers, \
    server_hostname, server_platform, server_arch, server_runtime_version, server_uptime, \
    accuracy, altitude, altitude_accuracy, heading, speed, \
    timezone, language, screen_resolution, device_memory, hardware_concurrency, \
    platform, vendor, cookie_enabled, do_not_track, \
    connection_type, effective_type, downlink, rtt, \
    additional_data, custom_fields";

/// Newest first; `id` breaks ties between rows stored in the same second.
pub(crate) const NEWEST_FIRST: &str = " ORDER BY timestamp DESC, id DESC";

/// Serializes a free-form map for a TEXT column.
pub(crate) fn metadata_to_text(map: Option<&Metadata>) -> Result<Option<String>, DatabaseError> {
    map.map(serde_json::to_string).transpose().map_err(Into::into)
}

/// Reads a TEXT column written by [`metadata_to_text`].
fn metadata_from_text(text: Option<String>) -> Result<Option<Metadata>, DatabaseError> {
    text.filter(|s| !s.is_empty())
        .map(|s| serde_json::from_str::<Metadata>(&s))
        .transpose()
        .map_err(Into::into)
}

/// Converts one `SELECT {LOCATION_COLUMNS}` row into a record.
pub(crate) fn row_to_record(row: &SqliteRow) -> Result<LocationRecord, DatabaseError> {
    let report = LocationDraft {
        latitude: row.try_get("latitude")?,
        longitude: row.try_get("longitude")?,
        user_agent: row.try_get("user_agent")?,
        ip_address: row.try_get("ip_address")?,
        request_info: RequestInfo {
            host: row.try_get("host")?,
            referer: row.try_get("referer")?,
            origin: row.try_get("origin")?,
            method: row.try_get("method")?,
            url: row.try_get("url")?,
            protocol: row.try_get("protocol")?,
            headers: metadata_from_text(row.try_get("headers")?)?,
        },
        system_info: ServerInfo {
            hostname: row.try_get("server_hostname")?,
            platform: row.try_get("server_platform")?,
            arch: row.try_get("server_arch")?,
            runtime_version: row.try_get("server_runtime_version")?,
            uptime: row.try_get("server_uptime")?,
        },
        geolocation_info: GeolocationInfo {
            accuracy: row.try_get("accuracy")?,
            altitude: row.try_get("altitude")?,
            altitude_accuracy: row.try_get("altitude_accuracy")?,
            heading: row.try_get("heading")?,
            speed: row.try_get("speed")?,
        },
        browser_info: BrowserInfo {
            timezone: row.try_get("timezone")?,
            language: row.try_get("language")?,
            screen_resolution: row.try_get("screen_resolution")?,
            device_memory: row.try_get("device_memory")?,
            hardware_concurrency: row.try_get("hardware_concurrency")?,
            platform: row.try_get("platform")?,
            vendor: row.try_get("vendor")?,
            cookie_enabled: row.try_get("cookie_enabled")?,
            do_not_track: row.try_get("do_not_track")?,
        },
        network_info: NetworkInfo {
            connection_type: row.try_get("connection_type")?,
            effective_type: row.try_get("effective_type")?,
            downlink: row.try_get("downlink")?,
            rtt: row.try_get("rtt")?,
        },
        additional_data: metadata_from_text(row.try_get("additional_data")?)?,
        custom_fields: metadata_from_text(row.try_get("custom_fields")?)?,
    };

    Ok(LocationRecord {
        id: row.try_get("id")?,
        timestamp: row.try_get("timestamp")?,
        report,
    })
}
