use serde::{Deserialize, Serialize};

use crate::department::Department;

/// HR account with department-wide visibility and approval authority.
/// One per department; passwords are stored in plaintext by design of the
/// prototype this models.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrUser {
    pub id: String,
    pub email: String,
    pub password: String,
    pub department: Department,
    pub full_name: String,
    pub is_active: bool,
}
