use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceReport {
    pub id: String,
    pub employee_id: String,
    /// Human-readable period label, e.g. `"Q1 2024"`.
    pub review_period: String,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    /// Whole percentage derived from completed vs. total tasks.
    pub completion_rate: u32,
    pub rating: PerformanceRating,
    pub comments: String,
    pub reviewed_by: String,
    pub review_date: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum PerformanceRating {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Below Average")]
    BelowAverage,
    Poor,
}
