use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an HR review over a leave request or expense claim.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewStatus::Pending => "Pending",
            ReviewStatus::Approved => "Approved",
            ReviewStatus::Rejected => "Rejected",
        }
    }
}

/// Review metadata attached once an HR user has decided on a request.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub reviewed_by: String,
    pub comments: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}
