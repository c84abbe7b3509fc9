//! Search filter predicates.

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite};

/// Text layout of the `timestamp` column (`CURRENT_TIMESTAMP`).
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Optional, conjunctive search constraints. An absent filter constrains nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    /// Exact latitude match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Exact longitude match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Substring of the stored IP address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    /// Inclusive lower bound on `timestamp` (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<NaiveDateTime>,
    /// Inclusive upper bound on `timestamp` (UTC).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<NaiveDateTime>,
}

impl SearchFilters {
    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.ip_address.is_none()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }

    /// Appends one ` AND ...` clause per present filter. Values are always
    /// bound, never spliced into the SQL text.
    pub(crate) fn push_predicates(&self, builder: &mut QueryBuilder<'_, Sqlite>) {
        if let Some(latitude) = self.latitude {
            builder.push(" AND latitude = ").push_bind(latitude);
        }
        if let Some(longitude) = self.longitude {
            builder.push(" AND longitude = ").push_bind(longitude);
        }
        if let Some(ip) = &self.ip_address {
            builder
                .push(" AND instr(ip_address, ")
                .push_bind(ip.clone())
                .push(") > 0");
        }
        if let Some(from) = self.date_from {
            builder
                .push(" AND timestamp >= ")
                .push_bind(from.format(TIMESTAMP_FORMAT).to_string());
        }
        if let Some(to) = self.date_to {
            builder
                .push(" AND timestamp <= ")
                .push_bind(to.format(TIMESTAMP_FORMAT).to_string());
        }
    }
}
