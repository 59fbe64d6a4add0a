use std::collections::HashSet;

use entity::{
    Department, Employee, ExpenseClaim, HrUser, LeaveRequest, PerformanceReport, SalarySlip, Task,
};
use platform_events::EventBus;

/// Owner of every portal collection.
///
/// Constructed once per process (or per test) and passed by reference to
/// consumers; nothing in this crate keeps global state. Collections iterate
/// in insertion order and records are never removed, only appended or
/// overwritten in place. Scoped queries hand out fresh `Vec`s of clones so
/// callers never hold references into the store's internals.
#[derive(Default)]
pub struct HrStore {
    pub(crate) hr_users: Vec<HrUser>,
    pub(crate) employees: Vec<Employee>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) leave_requests: Vec<LeaveRequest>,
    pub(crate) expense_claims: Vec<ExpenseClaim>,
    pub(crate) salary_slips: Vec<SalarySlip>,
    pub(crate) performance_reports: Vec<PerformanceReport>,
    /// Expense claims already folded into a salary slip; guards the
    /// reconciliation against double-crediting a re-approved claim.
    pub(crate) reimbursed_expenses: HashSet<String>,
    pub(crate) task_seq: u64,
    pub(crate) leave_seq: u64,
    pub(crate) expense_seq: u64,
    pub(crate) slip_seq: u64,
    pub(crate) report_seq: u64,
    pub(crate) bus: EventBus,
}

impl HrStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus carrying `Topic` notifications for every mutation.
    pub fn events(&self) -> &EventBus {
        &self.bus
    }

    pub fn hr_users(&self) -> &[HrUser] {
        &self.hr_users
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn hr_user(&self, id: &str) -> Option<&HrUser> {
        self.hr_users.iter().find(|user| user.id == id)
    }

    /// The department's HR account (at most one is seeded per department).
    pub fn hr_user_for(&self, department: Department) -> Option<&HrUser> {
        self.hr_users
            .iter()
            .find(|user| user.department == department)
    }

    pub fn employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|emp| emp.id == id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn leave_request(&self, id: &str) -> Option<&LeaveRequest> {
        self.leave_requests.iter().find(|leave| leave.id == id)
    }

    pub fn expense_claim(&self, id: &str) -> Option<&ExpenseClaim> {
        self.expense_claims.iter().find(|claim| claim.id == id)
    }

    // Department-scoped views. Each computes the owning employee-id set by
    // linear scan and filters the dependent collection by membership; an
    // unknown or empty department simply yields no rows.

    pub fn employees_in(&self, department: Department) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|emp| emp.department == department)
            .cloned()
            .collect()
    }

    fn member_ids(&self, department: Department) -> HashSet<&str> {
        self.employees
            .iter()
            .filter(|emp| emp.department == department)
            .map(|emp| emp.id.as_str())
            .collect()
    }

    pub fn tasks_in(&self, department: Department) -> Vec<Task> {
        let members = self.member_ids(department);
        self.tasks
            .iter()
            .filter(|task| members.contains(task.employee_id.as_str()))
            .cloned()
            .collect()
    }

    pub fn leave_requests_in(&self, department: Department) -> Vec<LeaveRequest> {
        let members = self.member_ids(department);
        self.leave_requests
            .iter()
            .filter(|leave| members.contains(leave.employee_id.as_str()))
            .cloned()
            .collect()
    }

    pub fn expense_claims_in(&self, department: Department) -> Vec<ExpenseClaim> {
        let members = self.member_ids(department);
        self.expense_claims
            .iter()
            .filter(|claim| members.contains(claim.employee_id.as_str()))
            .cloned()
            .collect()
    }

    pub fn salary_slips_in(&self, department: Department) -> Vec<SalarySlip> {
        let members = self.member_ids(department);
        self.salary_slips
            .iter()
            .filter(|slip| members.contains(slip.employee_id.as_str()))
            .cloned()
            .collect()
    }

    pub fn performance_reports_in(&self, department: Department) -> Vec<PerformanceReport> {
        let members = self.member_ids(department);
        self.performance_reports
            .iter()
            .filter(|report| members.contains(report.employee_id.as_str()))
            .cloned()
            .collect()
    }

    // Per-employee views, used by the employee-facing dashboard.

    pub fn tasks_for(&self, employee_id: &str) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn leave_requests_for(&self, employee_id: &str) -> Vec<LeaveRequest> {
        self.leave_requests
            .iter()
            .filter(|leave| leave.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn expense_claims_for(&self, employee_id: &str) -> Vec<ExpenseClaim> {
        self.expense_claims
            .iter()
            .filter(|claim| claim.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn salary_slips_for(&self, employee_id: &str) -> Vec<SalarySlip> {
        self.salary_slips
            .iter()
            .filter(|slip| slip.employee_id == employee_id)
            .cloned()
            .collect()
    }

    pub fn performance_reports_for(&self, employee_id: &str) -> Vec<PerformanceReport> {
        self.performance_reports
            .iter()
            .filter(|report| report.employee_id == employee_id)
            .cloned()
            .collect()
    }

    // Deterministic id allocation. Child records get `{kind}-{n}` sequences;
    // employees get the next free slot in their department's prefix block.

    pub(crate) fn next_task_id(&mut self) -> String {
        self.task_seq += 1;
        format!("task-{}", self.task_seq)
    }

    pub(crate) fn next_leave_id(&mut self) -> String {
        self.leave_seq += 1;
        format!("leave-{}", self.leave_seq)
    }

    pub(crate) fn next_expense_id(&mut self) -> String {
        self.expense_seq += 1;
        format!("exp-{}", self.expense_seq)
    }

    pub(crate) fn next_slip_id(&mut self) -> String {
        self.slip_seq += 1;
        format!("salary-{}", self.slip_seq)
    }

    pub(crate) fn next_report_id(&mut self) -> String {
        self.report_seq += 1;
        format!("perf-{}", self.report_seq)
    }

    pub(crate) fn next_employee_id(&self, department: Department) -> String {
        let prefix = department.employee_prefix();
        let next = self
            .employees
            .iter()
            .filter(|emp| emp.department == department)
            .filter_map(|emp| emp.id.strip_prefix(prefix))
            .filter_map(|seq| seq.parse::<u32>().ok())
            .max()
            .map_or(1, |seq| seq + 1);
        format!("{prefix}{next:02}")
    }
}
