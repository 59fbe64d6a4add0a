use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::department::Department;

/// Employee account, scoped to its own records. The id is department
/// prefixed (`EMP101`, `EMP201`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub department: Department,
    /// Free-text job title; serialized as `role` for compatibility with the
    /// original record shape.
    #[serde(rename = "role")]
    pub job_title: String,
    pub gender: Gender,
    pub joining_date: NaiveDate,
    pub mobile_number: String,
    pub emergency_contact: String,
    pub is_active: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum Gender {
    Male,
    Female,
}
