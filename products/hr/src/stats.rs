//! Dashboard aggregates for the two role-scoped views.

use entity::{Department, ReviewStatus, TaskStatus};
use serde::Serialize;

use crate::{
    error::{HrError, HrResult},
    store::HrStore,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HrDashboardStats {
    pub total_employees: usize,
    pub pending_leave_requests: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub pending_expenses: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboardStats {
    pub assigned_tasks: usize,
    pub completed_tasks: usize,
    pub pending_leave_requests: usize,
    pub approved_leaves: usize,
    pub pending_expenses: usize,
}

impl HrStore {
    pub fn hr_dashboard_stats(&self, department: Department) -> HrDashboardStats {
        let tasks = self.tasks_in(department);
        HrDashboardStats {
            total_employees: self.employees_in(department).len(),
            pending_leave_requests: self
                .leave_requests_in(department)
                .iter()
                .filter(|leave| leave.status == ReviewStatus::Pending)
                .count(),
            completed_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Done)
                .count(),
            pending_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Pending)
                .count(),
            pending_expenses: self
                .expense_claims_in(department)
                .iter()
                .filter(|claim| claim.status == ReviewStatus::Pending)
                .count(),
        }
    }

    pub fn employee_dashboard_stats(&self, employee_id: &str) -> HrResult<EmployeeDashboardStats> {
        if self.employee(employee_id).is_none() {
            return Err(HrError::UnknownEmployee(employee_id.to_string()));
        }
        let tasks = self.tasks_for(employee_id);
        let leaves = self.leave_requests_for(employee_id);
        Ok(EmployeeDashboardStats {
            assigned_tasks: tasks.len(),
            completed_tasks: tasks
                .iter()
                .filter(|task| task.status == TaskStatus::Done)
                .count(),
            pending_leave_requests: leaves
                .iter()
                .filter(|leave| leave.status == ReviewStatus::Pending)
                .count(),
            approved_leaves: leaves
                .iter()
                .filter(|leave| leave.status == ReviewStatus::Approved)
                .count(),
            pending_expenses: self
                .expense_claims_for(employee_id)
                .iter()
                .filter(|claim| claim.status == ReviewStatus::Pending)
                .count(),
        })
    }
}
