//! Time-window and period filters shared by stats endpoints.
//!
//! Filter values arrive as free-form query strings from the client.
//! Unrecognized or absent values fall back to the default silently; a bad
//! filter is "no match", never an error.

/// Time window for call statistics (`?timeFilter=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeFilter {
    Hour,
    Today,
    TwoDays,
    #[default]
    Week,
}

impl TimeFilter {
    /// Parse a query-string value, falling back to [`TimeFilter::Week`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("hour") => TimeFilter::Hour,
            Some("today") => TimeFilter::Today,
            Some("two_days") => TimeFilter::TwoDays,
            _ => TimeFilter::Week,
        }
    }

    /// Scaling factor applied to aggregate counts for this window.
    ///
    /// The fixture dataset (and the live weekly aggregates) are sized for a
    /// full week; narrower windows scale counts down by a fixed table.
    pub fn multiplier(self) -> f64 {
        match self {
            TimeFilter::Hour => 0.1,
            TimeFilter::Today => 0.3,
            TimeFilter::TwoDays => 0.5,
            TimeFilter::Week => 1.0,
        }
    }

    /// Apply the window's multiplier to a base count, rounding half up.
    pub fn scale(self, base: i64) -> i64 {
        (base as f64 * self.multiplier()).round() as i64
    }
}

/// Reporting period for marketing statistics (`?period=`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Period {
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl Period {
    /// Parse a query-string value, falling back to [`Period::Month`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("week") => Period::Week,
            Some("month") => Period::Month,
            Some("year") => Period::Year,
            Some("all") => Period::All,
            _ => Period::Month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_time_filters_parse() {
        assert_eq!(TimeFilter::from_param(Some("hour")), TimeFilter::Hour);
        assert_eq!(TimeFilter::from_param(Some("today")), TimeFilter::Today);
        assert_eq!(TimeFilter::from_param(Some("two_days")), TimeFilter::TwoDays);
        assert_eq!(TimeFilter::from_param(Some("week")), TimeFilter::Week);
    }

    #[test]
    fn unknown_or_absent_time_filter_falls_back_to_week() {
        assert_eq!(TimeFilter::from_param(None), TimeFilter::Week);
        assert_eq!(TimeFilter::from_param(Some("fortnight")), TimeFilter::Week);
        assert_eq!(TimeFilter::from_param(Some("")), TimeFilter::Week);
    }

    #[test]
    fn multiplier_table() {
        assert_eq!(TimeFilter::Hour.multiplier(), 0.1);
        assert_eq!(TimeFilter::Today.multiplier(), 0.3);
        assert_eq!(TimeFilter::TwoDays.multiplier(), 0.5);
        assert_eq!(TimeFilter::Week.multiplier(), 1.0);
    }

    #[test]
    fn scale_rounds_to_nearest() {
        assert_eq!(TimeFilter::Today.scale(247), 74); // 74.1
        assert_eq!(TimeFilter::Hour.scale(25), 3); // 2.5 rounds up
        assert_eq!(TimeFilter::Week.scale(247), 247);
    }

    #[test]
    fn unknown_period_falls_back_to_month() {
        assert_eq!(Period::from_param(Some("quarter")), Period::Month);
        assert_eq!(Period::from_param(None), Period::Month);
        assert_eq!(Period::from_param(Some("all")), Period::All);
    }
}
