//! Cohort Breakdown - Respondent counts per group or location.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::report::CohortCounts;
use super::AnalyticsError;
use crate::domain::foundation::CohortId;
use crate::domain::survey::Response;

/// Respondent attribute used to split responses into cohorts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CohortKey {
    Group,
    Location,
}

impl CohortKey {
    /// Wire values accepted by [`CohortKey::from_str`].
    pub const VALUES: [&'static str; 2] = ["group", "location"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CohortKey::Group => "group",
            CohortKey::Location => "location",
        }
    }

    /// The response's cohort for this key, if it has a usable one.
    pub fn cohort_of<'r>(&self, response: &'r Response) -> Option<&'r CohortId> {
        let cohort = match self {
            CohortKey::Group => response.respondent_group_id.as_ref(),
            CohortKey::Location => response.respondent_location_id.as_ref(),
        }?;
        (!cohort.as_str().is_empty()).then_some(cohort)
    }

    /// Parses an optional request value. Missing or blank means no grouping.
    pub fn parse_optional(value: Option<&str>) -> Result<Option<Self>, AnalyticsError> {
        match value.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

impl FromStr for CohortKey {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "group" => Ok(CohortKey::Group),
            "location" => Ok(CohortKey::Location),
            other => Err(AnalyticsError::invalid_parameter(
                "groupBy",
                other,
                &Self::VALUES,
            )),
        }
    }
}

impl fmt::Display for CohortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Cohort counting over a response set.
pub struct CohortBreakdown;

impl CohortBreakdown {
    /// Counts responses per cohort of the selected key.
    ///
    /// Responses without a value for the key are left out entirely rather
    /// than counted under an "unknown" bucket, so the counts can add up to
    /// fewer than the number of responses.
    pub fn compute<'a, I>(key: CohortKey, responses: I) -> CohortCounts
    where
        I: IntoIterator<Item = &'a Response>,
    {
        let mut counts = CohortCounts::new();
        for response in responses {
            if let Some(cohort) = key.cohort_of(response) {
                *counts.entry(cohort.clone()).or_insert(0) += 1;
            }
        }
        counts
    }
}
