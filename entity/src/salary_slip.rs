use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Derived monthly payroll record. Invariant:
/// `net_pay == basic_pay + hra + bonuses - deductions`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalarySlip {
    pub id: String,
    pub employee_id: String,
    /// English month name, e.g. `"January"`.
    pub month: String,
    pub year: i32,
    pub basic_pay: i64,
    pub hra: i64,
    pub bonuses: i64,
    pub deductions: i64,
    pub net_pay: i64,
    /// HR user who generated the slip.
    pub generated_by: String,
    pub generated_at: DateTime<Utc>,
}

impl SalarySlip {
    /// Whether this slip covers the given month of the given year.
    pub fn covers(&self, month: &str, year: i32) -> bool {
        self.month == month && self.year == year
    }
}
