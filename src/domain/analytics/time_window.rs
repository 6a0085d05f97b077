//! Time Window - Restricts responses to a recency window.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::AnalyticsError;
use crate::domain::foundation::Timestamp;
use crate::domain::survey::Response;

/// Relative recency cutoff applied to responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Day,
    Week,
    Month,
    Year,
}

impl TimeWindow {
    /// Wire values accepted by [`TimeWindow::from_str`].
    pub const VALUES: [&'static str; 4] = ["day", "week", "month", "year"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
            TimeWindow::Year => "year",
        }
    }

    /// Earliest `createdAt` still inside the window ending at `now`.
    ///
    /// Day and week are fixed lengths; month and year use calendar arithmetic.
    pub fn cutoff(&self, now: Timestamp) -> Timestamp {
        match self {
            TimeWindow::Day => now.minus_days(1),
            TimeWindow::Week => now.minus_days(7),
            TimeWindow::Month => now.minus_months(1),
            TimeWindow::Year => now.minus_years(1),
        }
    }

    /// Parses an optional request value. Missing or blank means no window.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, AnalyticsError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

impl FromStr for TimeWindow {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(TimeWindow::Day),
            "week" => Ok(TimeWindow::Week),
            "month" => Ok(TimeWindow::Month),
            "year" => Ok(TimeWindow::Year),
            other => Err(AnalyticsError::invalid_parameter(
                "timeRange",
                other,
                &Self::VALUES,
            )),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Response recency filtering.
pub struct TimeWindowFilter;

impl TimeWindowFilter {
    /// Keeps responses created at or after the window's cutoff.
    ///
    /// # Edge Cases
    /// - No window: every response is kept, in input order
    /// - Response exactly at the cutoff: kept
    /// - Responses dated after `now`: kept
    pub fn filter<'a, I>(responses: I, window: Option<TimeWindow>, now: Timestamp) -> Vec<&'a Response>
    where
        I: IntoIterator<Item = &'a Response>,
    {
        match window {
            None => responses.into_iter().collect(),
            Some(window) => {
                let cutoff = window.cutoff(now);
                responses
                    .into_iter()
                    .filter(|r| !r.created_at.is_before(&cutoff))
                    .collect()
            }
        }
    }
}
