use thiserror::Error;

pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HrError {
    #[error("employee {0} not found")]
    UnknownEmployee(String),
    #[error("task {0} not found")]
    UnknownTask(String),
    #[error("leave request {0} not found")]
    UnknownLeaveRequest(String),
    #[error("expense claim {0} not found")]
    UnknownExpenseClaim(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
