//! The endpoint directory shown by `GET /` and by the 404 handler.

use crate::server::types::EndpointDirectory;

pub const ENDPOINTS: EndpointDirectory = EndpointDirectory(&[
    ("GET /", "API information"),
    ("POST /api/location", "Store location data (JSON body)"),
    (
        "GET /admin/send-location",
        "Store location data via query parameters",
    ),
    ("GET /api/locations", "Get all stored locations"),
    ("GET /api/stats", "Get location statistics"),
    (
        "GET /api/search",
        "Search locations by latitude, longitude, ipAddress, dateFrom, dateTo",
    ),
    ("DELETE /api/reset", "Delete all stored locations"),
]);
