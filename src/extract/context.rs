//! Request context captured alongside each report.

use std::net::{IpAddr, SocketAddr};

use axum::http::{header, HeaderMap, Method, Uri};
use serde_json::Value;

use crate::config::{DEFAULT_PROTOCOL, HEADER_X_FORWARDED_FOR, HEADER_X_FORWARDED_PROTO};
use crate::models::{Metadata, RequestInfo};

/// What the server observed about the request carrying a report.
///
/// Built from plain HTTP parts; building it performs no I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    /// Peer address reported by the listener.
    pub client_addr: Option<IpAddr>,
    /// First hop of `X-Forwarded-For`.
    pub forwarded_for: Option<String>,
    pub user_agent: Option<String>,
    pub host: Option<String>,
    pub referer: Option<String>,
    pub origin: Option<String>,
    pub method: Option<String>,
    pub url: Option<String>,
    pub protocol: Option<String>,
    pub headers: Metadata,
}

impl RequestContext {
    /// Captures the context of an inbound request.
    pub fn from_http(
        method: &Method,
        uri: &Uri,
        headers: &HeaderMap,
        client_addr: Option<SocketAddr>,
    ) -> Self {
        let forwarded_for = header_str(headers, HEADER_X_FORWARDED_FOR).and_then(|v| {
            v.split(',')
                .map(str::trim)
                .find(|hop| !hop.is_empty())
                .map(str::to_string)
        });

        let protocol = header_str(headers, HEADER_X_FORWARDED_PROTO)
            .and_then(|v| v.split(',').next())
            .map(|v| v.trim().to_ascii_lowercase())
            .filter(|v| !v.is_empty())
            .or_else(|| uri.scheme_str().map(str::to_string))
            .unwrap_or_else(|| DEFAULT_PROTOCOL.to_string());

        let url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());

        Self {
            client_addr: client_addr.map(|addr| addr.ip()),
            forwarded_for,
            user_agent: header_string(headers, header::USER_AGENT.as_str()),
            host: header_string(headers, header::HOST.as_str())
                .or_else(|| uri.authority().map(|a| a.to_string())),
            referer: header_string(headers, header::REFERER.as_str()),
            origin: header_string(headers, header::ORIGIN.as_str()),
            method: Some(method.as_str().to_string()),
            url: Some(url),
            protocol: Some(protocol),
            headers: header_map(headers),
        }
    }

    /// Requester IP: the listener's peer address first, then the forwarded-for hop.
    pub fn client_ip(&self) -> Option<String> {
        self.client_addr
            .map(|ip| ip.to_string())
            .or_else(|| self.forwarded_for.clone())
    }

    /// The request fields stored with a report.
    pub fn request_info(&self) -> RequestInfo {
        RequestInfo {
            host: self.host.clone(),
            referer: self.referer.clone(),
            origin: self.origin.clone(),
            method: self.method.clone(),
            url: self.url.clone(),
            protocol: self.protocol.clone(),
            headers: if self.headers.is_empty() {
                None
            } else {
                Some(self.headers.clone())
            },
        }
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn header_string(headers: &HeaderMap, name: &str) -> Option<String> {
    header_str(headers, name)
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// All headers as a JSON map; repeated headers are joined with `", "`.
fn header_map(headers: &HeaderMap) -> Metadata {
    let mut map = Metadata::new();
    for name in headers.keys() {
        let joined = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
            .collect::<Vec<_>>()
            .join(", ");
        map.insert(name.as_str().to_string(), Value::String(joined));
    }
    map
}
