//! Location insertion.

use log::debug;
use sqlx::SqlitePool;

use crate::error_handling::DatabaseError;
use crate::models::LocationDraft;
use crate::storage::record::metadata_to_text;

/// Stores a draft and returns its newly assigned id.
///
/// `headers`, `additionalData` and `customFields` are serialized to JSON text
/// here; everything before this point keeps them structured.
pub async fn insert_location(
    pool: &SqlitePool,
    draft: &LocationDraft,
) -> Result<i64, DatabaseError> {
    let headers = metadata_to_text(draft.request_info.headers.as_ref())?;
    let additional_data = metadata_to_text(draft.additional_data.as_ref())?;
    let custom_fields = metadata_to_text(draft.custom_fields.as_ref())?;

    let request = &draft.request_info;
    let server = &draft.system_info;
    let geo = &draft.geolocation_info;
    let browser = &draft.browser_info;
    let network = &draft.network_info;

    let result = sqlx::query(
        "INSERT INTO locations (
            latitude, longitude, user_agent, ip_address, host, referer, origin,
            method, url, protocol, headers,
            server_hostname, server_platform, server_arch, server_runtime_version, server_uptime,
            accuracy, altitude, altitude_accuracy, heading, speed,
            timezone, language, screen_resolution, device_memory, hardware_concurrency,
            platform, vendor, cookie_enabled, do_not_track,
            connection_type, effective_type, downlink, rtt,
            additional_data, custom_fields
        ) VALUES (
            ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?,
            ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?
        )",
    )
    .bind(draft.latitude)
    .bind(draft.longitude)
    .bind(draft.user_agent.as_deref())
    .bind(draft.ip_address.as_deref())
    .bind(request.host.as_deref())
    .bind(request.referer.as_deref())
    .bind(request.origin.as_deref())
    .bind(request.method.as_deref())
    .bind(request.url.as_deref())
    .bind(request.protocol.as_deref())
    .bind(headers)
    .bind(server.hostname.as_deref())
    .bind(server.platform.as_deref())
    .bind(server.arch.as_deref())
    .bind(server.runtime_version.as_deref())
    .bind(server.uptime)
    .bind(geo.accuracy)
    .bind(geo.altitude)
    .bind(geo.altitude_accuracy)
    .bind(geo.heading)
    .bind(geo.speed)
    .bind(browser.timezone.as_deref())
    .bind(browser.language.as_deref())
    .bind(browser.screen_resolution.as_deref())
    .bind(browser.device_memory)
    .bind(browser.hardware_concurrency)
    .bind(browser.platform.as_deref())
    .bind(browser.vendor.as_deref())
    .bind(browser.cookie_enabled)
    .bind(browser.do_not_track.as_deref())
    .bind(network.connection_type.as_deref())
    .bind(network.effective_type.as_deref())
    .bind(network.downlink)
    .bind(network.rtt)
    .bind(additional_data)
    .bind(custom_fields)
    .execute(pool)
    .await
    .map_err(DatabaseError::SqlError)?;

    let id = result.last_insert_rowid();
    debug!("Inserted location {id}");
    Ok(id)
}
