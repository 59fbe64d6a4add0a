use serde::{Deserialize, Serialize};

use crate::{department::Department, employee::Employee, hr_user::HrUser};

/// Authenticated identity. An explicit tagged union instead of the
/// original's "has a role field" duck-typing; every consumer matches
/// exhaustively.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "camelCase")]
pub enum Principal {
    Hr(HrUser),
    Employee(Employee),
}

impl Principal {
    pub fn id(&self) -> &str {
        match self {
            Principal::Hr(user) => &user.id,
            Principal::Employee(emp) => &emp.id,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Principal::Hr(user) => &user.email,
            Principal::Employee(emp) => &emp.email,
        }
    }

    pub fn full_name(&self) -> &str {
        match self {
            Principal::Hr(user) => &user.full_name,
            Principal::Employee(emp) => &emp.full_name,
        }
    }

    pub fn department(&self) -> Department {
        match self {
            Principal::Hr(user) => user.department,
            Principal::Employee(emp) => emp.department,
        }
    }

    pub fn is_hr(&self) -> bool {
        matches!(self, Principal::Hr(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_json_round_trips() {
        let principal = Principal::Hr(HrUser {
            id: "hr-it".into(),
            email: "hr.it@hrportal.com".into(),
            password: "it@123".into(),
            department: Department::It,
            full_name: "HR IT Manager".into(),
            is_active: true,
        });
        let json = serde_json::to_string(&principal).unwrap();
        assert!(json.contains("\"kind\":\"hr\""));
        assert!(json.contains("\"department\":\"IT\""));
        let back: Principal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, principal);
    }
}
