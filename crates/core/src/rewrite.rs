//! Demo-mode path rewriting.
//!
//! In demo mode the client talks to `/api/demo/...` twins of the canonical
//! endpoints instead of the live `/api/...` routes. The rewrite is a pure
//! string transformation gated on a fixed allow-list of business areas, so
//! the UI needs no knowledge of which mode it is running in: it always
//! requests the canonical path and the rewriter substitutes the demo twin.

use std::borrow::Cow;

use serde_json::Value;

/// Business areas that have a demo twin registered.
///
/// A canonical path `/api/<area>/...` is rewritten only when `<area>` is in
/// this list; everything else (including already-rewritten `/api/demo/...`
/// paths) passes through untouched.
pub const DEMO_AREAS: [&str; 12] = [
    "calls",
    "reviews",
    "marketing",
    "guarantee",
    "integrations",
    "reports",
    "waitlist",
    "recommendations",
    "notifications",
    "auth",
    "user",
    "settings",
];

/// Rewrite a canonical API path to its demo twin.
///
/// Replaces the leading `/api/` with `/api/demo/` when the first segment
/// after `/api/` is an allow-listed area. Unmatched paths are returned
/// borrowed and unchanged; there is no error case.
pub fn rewrite_path(path: &str) -> Cow<'_, str> {
    let Some(rest) = path.strip_prefix("/api/") else {
        return Cow::Borrowed(path);
    };

    // First segment up to the next `/` or the query string.
    let area = rest
        .split(|c| c == '/' || c == '?')
        .next()
        .unwrap_or_default();

    if DEMO_AREAS.contains(&area) {
        Cow::Owned(format!("/api/demo/{rest}"))
    } else {
        Cow::Borrowed(path)
    }
}

/// Rewrite a data-fetch cache key.
///
/// Cache keys are either a single path string or an ordered sequence whose
/// first element is the path and whose remaining elements are opaque filter
/// parameters. Only element 0 is rewritten, and only when it is a string;
/// length and order are always preserved.
pub fn rewrite_query_key(key: &[Value]) -> Vec<Value> {
    let mut out = key.to_vec();
    if let Some(Value::String(path)) = out.first() {
        let rewritten = rewrite_path(path).into_owned();
        out[0] = Value::String(rewritten);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rewrites_allow_listed_areas() {
        assert_eq!(rewrite_path("/api/calls"), "/api/demo/calls");
        assert_eq!(rewrite_path("/api/calls/42"), "/api/demo/calls/42");
        assert_eq!(
            rewrite_path("/api/reviews?platform=google"),
            "/api/demo/reviews?platform=google"
        );
        assert_eq!(
            rewrite_path("/api/calls/stats?timeFilter=today"),
            "/api/demo/calls/stats?timeFilter=today"
        );
    }

    #[test]
    fn every_area_in_the_allow_list_rewrites() {
        for area in DEMO_AREAS {
            let path = format!("/api/{area}/anything");
            assert_eq!(rewrite_path(&path), format!("/api/demo/{area}/anything"));
        }
    }

    #[test]
    fn unlisted_areas_pass_through() {
        assert_eq!(rewrite_path("/api/billing/invoices"), "/api/billing/invoices");
        assert_eq!(rewrite_path("/api/stripe/webhook"), "/api/stripe/webhook");
        assert_eq!(rewrite_path("/health"), "/health");
        assert_eq!(rewrite_path(""), "");
        assert_eq!(rewrite_path("/api/"), "/api/");
    }

    #[test]
    fn prefix_must_match_a_whole_segment() {
        // "callsx" shares a prefix with "calls" but is not an area.
        assert_eq!(rewrite_path("/api/callsx/1"), "/api/callsx/1");
    }

    #[test]
    fn rewrite_is_idempotent() {
        // `demo` is not an allow-listed area, so a second pass is a no-op.
        let once = rewrite_path("/api/calls/stats").into_owned();
        let twice = rewrite_path(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn query_key_rewrites_only_the_first_element() {
        let key = vec![json!("/api/reviews"), json!({"platform": "google"}), json!(2)];
        let out = rewrite_query_key(&key);

        assert_eq!(out.len(), key.len());
        assert_eq!(out[0], json!("/api/demo/reviews"));
        assert_eq!(out[1], key[1]);
        assert_eq!(out[2], key[2]);
    }

    #[test]
    fn query_key_with_non_string_head_is_unchanged() {
        let key = vec![json!(7), json!("/api/calls")];
        let out = rewrite_query_key(&key);
        assert_eq!(out, key);
    }

    #[test]
    fn empty_query_key_is_unchanged() {
        assert!(rewrite_query_key(&[]).is_empty());
    }
}
