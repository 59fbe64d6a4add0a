use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed partition used as the sole access-control and query-scoping
/// boundary. Every employee and HR user belongs to exactly one department.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Department {
    Marketing,
    #[serde(rename = "IT")]
    It,
    Research,
    Finance,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Marketing,
        Department::It,
        Department::Research,
        Department::Finance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Marketing => "Marketing",
            Department::It => "IT",
            Department::Research => "Research",
            Department::Finance => "Finance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Marketing" => Some(Department::Marketing),
            "IT" => Some(Department::It),
            "Research" => Some(Department::Research),
            "Finance" => Some(Department::Finance),
            _ => None,
        }
    }

    /// Prefix for employee ids in this department (EMP101, EMP201, ...).
    pub fn employee_prefix(self) -> &'static str {
        match self {
            Department::Marketing => "EMP1",
            Department::It => "EMP2",
            Department::Research => "EMP3",
            Department::Finance => "EMP4",
        }
    }

}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
