//! Submitted survey responses.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CohortId, ResponseId, Timestamp};

/// One respondent's submission of a survey.
///
/// Group and location are copied from the respondent's profile at read time
/// and may be missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub id: ResponseId,
    pub created_at: Timestamp,
    #[serde(default)]
    pub respondent_group_id: Option<CohortId>,
    #[serde(default)]
    pub respondent_location_id: Option<CohortId>,
}

impl Response {
    /// Creates a response with no cohort information.
    pub fn new(id: ResponseId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            respondent_group_id: None,
            respondent_location_id: None,
        }
    }

    pub fn with_group(mut self, group: CohortId) -> Self {
        self.respondent_group_id = Some(group);
        self
    }

    pub fn with_location(mut self, location: CohortId) -> Self {
        self.respondent_location_id = Some(location);
        self
    }
}
