//! Mutating portal operations.
//!
//! Each operation validates its referenced records, allocates a
//! deterministic id where it creates one, applies the change in place, and
//! publishes the matching bus topic. Records are never deleted.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use entity::{
    Department, Employee, ExpenseCategory, ExpenseClaim, Gender, LeaveRequest, LeaveType,
    PerformanceRating, PerformanceReport, Review, ReviewStatus, SalarySlip, Task, TaskPriority,
    TaskStatus,
};
use platform_events::Topic;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    error::{HrError, HrResult},
    payroll,
    store::HrStore,
};

pub struct NewEmployee {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub job_title: String,
    pub gender: Gender,
    pub joining_date: NaiveDate,
    pub mobile_number: String,
    pub emergency_contact: String,
}

pub struct NewTask {
    pub employee_id: String,
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub priority: TaskPriority,
}

pub struct NewLeaveRequest {
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
}

pub struct NewExpenseClaim {
    pub employee_id: String,
    pub title: String,
    pub description: String,
    pub amount: i64,
    pub category: ExpenseCategory,
    pub receipt_url: Option<String>,
}

pub struct NewPerformanceReview {
    pub employee_id: String,
    pub review_period: String,
    pub tasks_completed: u32,
    pub total_tasks: u32,
    pub rating: PerformanceRating,
    pub comments: String,
}

fn payload<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or_default()
}

impl HrStore {
    fn ensure_employee(&self, employee_id: &str) -> HrResult<()> {
        if self.employee(employee_id).is_none() {
            return Err(HrError::UnknownEmployee(employee_id.to_string()));
        }
        Ok(())
    }

    /// Register a new employee in `department` under the next free
    /// department-prefixed id.
    pub fn add_employee(&mut self, department: Department, input: NewEmployee) -> Employee {
        let employee = Employee {
            id: self.next_employee_id(department),
            full_name: input.full_name,
            email: input.email,
            password: input.password,
            department,
            job_title: input.job_title,
            gender: input.gender,
            joining_date: input.joining_date,
            mobile_number: input.mobile_number,
            emergency_contact: input.emergency_contact,
            is_active: true,
        };
        info!(id = %employee.id, dept = %department, "employee added");
        self.employees.push(employee.clone());
        self.bus.emit(Topic::EmployeeUpdated, payload(&employee));
        employee
    }

    /// Overwrite an existing employee record in place.
    pub fn update_employee(&mut self, updated: Employee) -> HrResult<Employee> {
        let slot = self
            .employees
            .iter_mut()
            .find(|emp| emp.id == updated.id)
            .ok_or_else(|| HrError::UnknownEmployee(updated.id.clone()))?;
        *slot = updated.clone();
        self.bus.emit(Topic::EmployeeUpdated, payload(&updated));
        Ok(updated)
    }

    pub fn assign_task(
        &mut self,
        input: NewTask,
        assigned_by: &str,
        now: DateTime<Utc>,
    ) -> HrResult<Task> {
        self.ensure_employee(&input.employee_id)?;
        let task = Task {
            id: self.next_task_id(),
            employee_id: input.employee_id,
            title: input.title,
            description: input.description,
            deadline: input.deadline,
            priority: input.priority,
            status: TaskStatus::Pending,
            assigned_by: assigned_by.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.tasks.push(task.clone());
        self.bus.emit(Topic::TaskUpdated, payload(&task));
        Ok(task)
    }

    pub fn set_task_status(
        &mut self,
        task_id: &str,
        status: TaskStatus,
        now: DateTime<Utc>,
    ) -> HrResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| HrError::UnknownTask(task_id.to_string()))?;
        task.status = status;
        task.updated_at = now;
        let task = task.clone();
        self.bus.emit(Topic::TaskUpdated, payload(&task));
        Ok(task)
    }

    pub fn apply_leave(
        &mut self,
        input: NewLeaveRequest,
        now: DateTime<Utc>,
    ) -> HrResult<LeaveRequest> {
        self.ensure_employee(&input.employee_id)?;
        if input.end_date < input.start_date {
            return Err(HrError::InvalidInput(
                "end date must not precede start date".into(),
            ));
        }
        let leave = LeaveRequest {
            id: self.next_leave_id(),
            employee_id: input.employee_id,
            leave_type: input.leave_type,
            start_date: input.start_date,
            end_date: input.end_date,
            reason: input.reason,
            status: ReviewStatus::Pending,
            review: None,
            applied_at: now,
        };
        self.leave_requests.push(leave.clone());
        self.bus.emit(Topic::LeaveStatusUpdated, payload(&leave));
        Ok(leave)
    }

    pub fn review_leave(
        &mut self,
        leave_id: &str,
        decision: ReviewStatus,
        reviewed_by: &str,
        comments: Option<String>,
        now: DateTime<Utc>,
    ) -> HrResult<LeaveRequest> {
        if decision == ReviewStatus::Pending {
            return Err(HrError::InvalidInput(
                "review decision must be Approved or Rejected".into(),
            ));
        }
        let leave = self
            .leave_requests
            .iter_mut()
            .find(|leave| leave.id == leave_id)
            .ok_or_else(|| HrError::UnknownLeaveRequest(leave_id.to_string()))?;
        leave.status = decision;
        leave.review = Some(Review {
            reviewed_by: reviewed_by.to_string(),
            comments,
            reviewed_at: now,
        });
        let leave = leave.clone();
        self.bus.emit(Topic::LeaveStatusUpdated, payload(&leave));
        Ok(leave)
    }

    pub fn submit_expense(
        &mut self,
        input: NewExpenseClaim,
        now: DateTime<Utc>,
    ) -> HrResult<ExpenseClaim> {
        self.ensure_employee(&input.employee_id)?;
        if input.amount <= 0 {
            return Err(HrError::InvalidInput("amount must be positive".into()));
        }
        let claim = ExpenseClaim {
            id: self.next_expense_id(),
            employee_id: input.employee_id,
            title: input.title,
            description: input.description,
            amount: input.amount,
            category: input.category,
            receipt_url: input.receipt_url,
            submitted_at: now,
            status: ReviewStatus::Pending,
            review: None,
        };
        self.expense_claims.push(claim.clone());
        self.bus.emit(Topic::ExpenseStatusUpdated, payload(&claim));
        Ok(claim)
    }

    /// Decide an expense claim. Approval folds the amount into the
    /// employee's current-month salary slip, at most once per claim no
    /// matter how often the claim is re-reviewed.
    pub fn review_expense(
        &mut self,
        expense_id: &str,
        decision: ReviewStatus,
        reviewed_by: &str,
        comments: Option<String>,
        now: DateTime<Utc>,
    ) -> HrResult<ExpenseClaim> {
        if decision == ReviewStatus::Pending {
            return Err(HrError::InvalidInput(
                "review decision must be Approved or Rejected".into(),
            ));
        }
        let claim = self
            .expense_claims
            .iter_mut()
            .find(|claim| claim.id == expense_id)
            .ok_or_else(|| HrError::UnknownExpenseClaim(expense_id.to_string()))?;
        claim.status = decision;
        claim.review = Some(Review {
            reviewed_by: reviewed_by.to_string(),
            comments,
            reviewed_at: now,
        });
        let claim = claim.clone();
        self.bus.emit(Topic::ExpenseStatusUpdated, payload(&claim));
        if decision == ReviewStatus::Approved {
            self.reimburse(&claim, reviewed_by, now)?;
        }
        Ok(claim)
    }

    /// Generate a salary slip for `now`'s month from the payroll breakdown.
    pub fn generate_salary_slip(
        &mut self,
        employee_id: &str,
        generated_by: &str,
        now: DateTime<Utc>,
    ) -> HrResult<SalarySlip> {
        let employee = self
            .employee(employee_id)
            .cloned()
            .ok_or_else(|| HrError::UnknownEmployee(employee_id.to_string()))?;
        let today = now.date_naive();
        let breakdown = payroll::salary_breakdown(&employee, today);
        let slip = SalarySlip {
            id: self.next_slip_id(),
            employee_id: employee.id,
            month: payroll::month_name(today),
            year: today.year(),
            basic_pay: breakdown.basic_pay,
            hra: breakdown.hra,
            bonuses: breakdown.bonuses,
            deductions: breakdown.deductions,
            net_pay: breakdown.net_pay,
            generated_by: generated_by.to_string(),
            generated_at: now,
        };
        self.salary_slips.push(slip.clone());
        self.bus.emit(Topic::SalaryUpdated, payload(&slip));
        Ok(slip)
    }

    pub fn record_performance_review(
        &mut self,
        input: NewPerformanceReview,
        reviewed_by: &str,
        now: DateTime<Utc>,
    ) -> HrResult<PerformanceReport> {
        self.ensure_employee(&input.employee_id)?;
        if input.tasks_completed > input.total_tasks {
            return Err(HrError::InvalidInput(
                "completed tasks exceed total tasks".into(),
            ));
        }
        let completion_rate = if input.total_tasks == 0 {
            0
        } else {
            (100.0 * input.tasks_completed as f64 / input.total_tasks as f64).round() as u32
        };
        let report = PerformanceReport {
            id: self.next_report_id(),
            employee_id: input.employee_id,
            review_period: input.review_period,
            tasks_completed: input.tasks_completed,
            total_tasks: input.total_tasks,
            completion_rate,
            rating: input.rating,
            comments: input.comments,
            reviewed_by: reviewed_by.to_string(),
            review_date: now,
        };
        self.performance_reports.push(report.clone());
        Ok(report)
    }

    /// Fold an approved claim into the current-month slip, synthesizing the
    /// slip from the payroll breakdown when none exists yet. The reimbursed
    /// set makes this at-most-once per claim.
    fn reimburse(
        &mut self,
        claim: &ExpenseClaim,
        reviewed_by: &str,
        now: DateTime<Utc>,
    ) -> HrResult<()> {
        if !self.reimbursed_expenses.insert(claim.id.clone()) {
            debug!(id = %claim.id, "expense already reimbursed; skipping");
            return Ok(());
        }
        let today = now.date_naive();
        let month = payroll::month_name(today);
        let year = today.year();
        if let Some(slip) = self
            .salary_slips
            .iter_mut()
            .find(|slip| slip.employee_id == claim.employee_id && slip.covers(&month, year))
        {
            slip.bonuses += claim.amount;
            slip.net_pay += claim.amount;
            let slip = slip.clone();
            info!(expense = %claim.id, slip = %slip.id, amount = claim.amount, "expense reimbursed");
            self.bus.emit(Topic::SalaryUpdated, payload(&slip));
            return Ok(());
        }
        let employee = self
            .employee(&claim.employee_id)
            .cloned()
            .ok_or_else(|| HrError::UnknownEmployee(claim.employee_id.clone()))?;
        let breakdown = payroll::salary_breakdown(&employee, today);
        let slip = SalarySlip {
            id: self.next_slip_id(),
            employee_id: employee.id,
            month,
            year,
            basic_pay: breakdown.basic_pay,
            hra: breakdown.hra,
            bonuses: breakdown.bonuses + claim.amount,
            deductions: breakdown.deductions,
            net_pay: breakdown.net_pay + claim.amount,
            generated_by: reviewed_by.to_string(),
            generated_at: now,
        };
        info!(expense = %claim.id, slip = %slip.id, amount = claim.amount, "expense reimbursed into new slip");
        self.salary_slips.push(slip.clone());
        self.bus.emit(Topic::SalaryUpdated, payload(&slip));
        Ok(())
    }
}
