//! HR vertical slice: an in-memory portal core.
//!
//! [`HrStore`] owns every collection and is the single entry point;
//! department-scoped queries, authentication, payroll derivation, and the
//! mutation workflows all hang off it. State lives only for the life of the
//! store; there is no persistence layer by design.

mod auth;
mod seed;

pub mod error;
pub mod ops;
pub mod payroll;
pub mod stats;
pub mod store;

pub use error::{HrError, HrResult};
pub use ops::{NewEmployee, NewExpenseClaim, NewLeaveRequest, NewPerformanceReview, NewTask};
pub use stats::{EmployeeDashboardStats, HrDashboardStats};
pub use store::HrStore;
