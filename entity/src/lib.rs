//! Plain data model for the HR portal: one module per record type.

pub mod department;
pub mod employee;
pub mod expense_claim;
pub mod hr_user;
pub mod leave_request;
pub mod performance_report;
pub mod principal;
pub mod review;
pub mod salary_slip;
pub mod task;

pub use department::Department;
pub use employee::{Employee, Gender};
pub use expense_claim::{ExpenseCategory, ExpenseClaim};
pub use hr_user::HrUser;
pub use leave_request::{LeaveRequest, LeaveType};
pub use performance_report::{PerformanceRating, PerformanceReport};
pub use principal::Principal;
pub use review::{Review, ReviewStatus};
pub use salary_slip::SalarySlip;
pub use task::{Task, TaskPriority, TaskStatus};
