//! Shared fixtures for the integration suite.

use chrono::{DateTime, TimeZone, Utc};
use products_hr::HrStore;

/// Fixed evaluation instant so derived payroll figures stay stable.
pub fn seed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 31, 18, 0, 0).unwrap()
}

pub fn seeded_store() -> HrStore {
    HrStore::seeded(seed_time())
}
