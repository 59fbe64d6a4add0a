use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::review::{Review, ReviewStatus};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseClaim {
    pub id: String,
    pub employee_id: String,
    pub title: String,
    pub description: String,
    /// Whole rupees; validated positive at submission.
    pub amount: i64,
    pub category: ExpenseCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_url: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: ReviewStatus,
    pub review: Option<Review>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum ExpenseCategory {
    Travel,
    Meals,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Software,
    Training,
    Other,
}
