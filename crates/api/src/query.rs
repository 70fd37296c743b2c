//! Shared query parameter types for API handlers.
//!
//! Every field is an `Option<String>` parsed leniently downstream: a
//! malformed or unrecognized value is treated as absent and falls back to
//! its default — never a 4xx. This matches the inherited client contract.

use serde::Deserialize;

/// Parameters for paginated list endpoints (`?page=&limit=`), plus the
/// per-area filters. Unknown keys are ignored by serde.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Parameters for `GET /calls/stats` (`?timeFilter=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsParams {
    pub time_filter: Option<String>,
}

/// Parameters for `GET /reviews`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub platform: Option<String>,
    pub rating_min: Option<String>,
    pub search: Option<String>,
}

/// Parameters for `GET /marketing/stats` (`?period=`).
#[derive(Debug, Default, Deserialize)]
pub struct PeriodParams {
    pub period: Option<String>,
}

/// Parameters for list endpoints filtered by a status value.
#[derive(Debug, Default, Deserialize)]
pub struct StatusParams {
    pub status: Option<String>,
}

/// Parameters for `GET /integrations/orders`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderListParams {
    pub source: Option<String>,
    pub status: Option<String>,
}

/// Parameters for `GET /notifications` (`?unreadOnly=`).
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListParams {
    pub unread_only: Option<String>,
}

/// Lenient boolean: only `true`/`1` (any case) count as true.
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}

/// Lenient numeric parse: malformed input is absent input.
pub fn parse_num<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

/// Treat empty strings as absent filters.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_parse_leniently() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("TRUE")));
        assert!(parse_flag(Some("1")));
        assert!(!parse_flag(Some("yes")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn malformed_numbers_are_absent() {
        assert_eq!(parse_num::<i32>(Some("4")), Some(4));
        assert_eq!(parse_num::<i32>(Some("four")), None);
        assert_eq!(parse_num::<i32>(None), None);
    }
}
