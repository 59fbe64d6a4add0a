mod config;
mod session;

use anyhow::{Result, bail};
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};
use entity::{Employee, Principal, ReviewStatus, SalarySlip, TaskStatus};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{HrStore, payroll};
use tracing::debug;

use crate::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "portal-cli", version, about = "HR portal demo shell")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Authenticate and cache the identity for later commands.
    Login { email: String, password: String },
    /// Forget the cached identity.
    Logout,
    /// Show the cached identity.
    Whoami,
    /// Role-scoped overview: department-wide for HR, personal otherwise.
    Dashboard,
    /// Render the current-month salary slip as text.
    Payslip {
        /// Target employee; defaults to the logged-in employee. HR may name
        /// any employee in their department.
        employee_id: Option<String>,
    },
}

fn main() -> Result<()> {
    init_tracing(ObsConfig::default())?;
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    debug!(session = %config.session_file.display(), "config loaded");
    match cli.command {
        Command::Login { email, password } => login(&config, &email, &password),
        Command::Logout => logout(&config),
        Command::Whoami => whoami(&config),
        Command::Dashboard => dashboard(&config),
        Command::Payslip { employee_id } => payslip(&config, employee_id.as_deref()),
    }
}

/// Demo dataset, rebuilt per invocation. Everything except the cached
/// identity lives only for the life of the process.
fn demo_store() -> HrStore {
    HrStore::seeded(Utc::now())
}

fn require_session(config: &AppConfig) -> Result<Principal> {
    match session::load(&config.session_file) {
        Some(principal) => Ok(principal),
        None => bail!("not logged in; run `portal-cli login <email> <password>` first"),
    }
}

fn login(config: &AppConfig, email: &str, password: &str) -> Result<()> {
    let store = demo_store();
    let Some(principal) = store.authenticate(email, password) else {
        bail!("invalid email or password");
    };
    session::save(&config.session_file, &principal)?;
    let role = if principal.is_hr() { "HR" } else { "Employee" };
    println!(
        "Logged in as {} ({role}, {})",
        principal.full_name(),
        principal.department()
    );
    Ok(())
}

fn logout(config: &AppConfig) -> Result<()> {
    session::clear(&config.session_file)?;
    println!("Logged out.");
    Ok(())
}

fn whoami(config: &AppConfig) -> Result<()> {
    let principal = require_session(config)?;
    let role = if principal.is_hr() { "HR" } else { "Employee" };
    println!(
        "{} <{}> ({role}, {} department)",
        principal.full_name(),
        principal.email(),
        principal.department()
    );
    Ok(())
}

fn dashboard(config: &AppConfig) -> Result<()> {
    let principal = require_session(config)?;
    let store = demo_store();
    match principal {
        Principal::Hr(user) => {
            let dept = user.department;
            let stats = store.hr_dashboard_stats(dept);
            println!("{} department overview", dept);
            println!("  employees:              {}", stats.total_employees);
            println!("  pending leave requests: {}", stats.pending_leave_requests);
            println!("  pending tasks:          {}", stats.pending_tasks);
            println!("  completed tasks:        {}", stats.completed_tasks);
            println!("  pending expenses:       {}", stats.pending_expenses);
            for leave in store.leave_requests_in(dept) {
                if leave.status == ReviewStatus::Pending {
                    println!(
                        "  leave {} from {}: {} to {} ({})",
                        leave.id, leave.employee_id, leave.start_date, leave.end_date, leave.reason
                    );
                }
            }
            for claim in store.expense_claims_in(dept) {
                if claim.status == ReviewStatus::Pending {
                    println!(
                        "  expense {} from {}: Rs.{} ({})",
                        claim.id, claim.employee_id, claim.amount, claim.title
                    );
                }
            }
        }
        Principal::Employee(emp) => {
            let stats = store.employee_dashboard_stats(&emp.id)?;
            println!("Dashboard for {} ({})", emp.full_name, emp.id);
            println!("  assigned tasks:         {}", stats.assigned_tasks);
            println!("  completed tasks:        {}", stats.completed_tasks);
            println!("  pending leave requests: {}", stats.pending_leave_requests);
            println!("  approved leaves:        {}", stats.approved_leaves);
            println!("  pending expenses:       {}", stats.pending_expenses);
            for task in store.tasks_for(&emp.id) {
                let state = match task.status {
                    TaskStatus::Done => "done",
                    TaskStatus::Pending => "pending",
                };
                println!("  task {}: {} [{state}], due {}", task.id, task.title, task.deadline);
            }
        }
    }
    Ok(())
}

fn payslip(config: &AppConfig, employee_id: Option<&str>) -> Result<()> {
    let principal = require_session(config)?;
    let store = demo_store();
    let target = match &principal {
        Principal::Employee(emp) => {
            if employee_id.is_some_and(|id| id != emp.id) {
                bail!("employees can only view their own payslip");
            }
            emp.id.clone()
        }
        Principal::Hr(user) => {
            let Some(id) = employee_id else {
                bail!("payslip requires an employee id when logged in as HR");
            };
            match store.employee(id) {
                Some(emp) if emp.department == user.department => emp.id.clone(),
                Some(_) => bail!("employee {id} is outside the {} department", user.department),
                None => bail!("employee {id} not found"),
            }
        }
    };

    let employee = store
        .employee(&target)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("employee {target} not found"))?;
    let today = Utc::now().date_naive();
    let month = payroll::month_name(today);
    let slips = store.salary_slips_for(&target);
    let Some(slip) = slips.iter().find(|slip| slip.covers(&month, today.year())) else {
        bail!("no salary slip for {target} in {month}");
    };
    render_payslip(&employee, slip);
    Ok(())
}

fn render_payslip(employee: &Employee, slip: &SalarySlip) {
    println!("Salary slip {} for {} {}", slip.id, slip.month, slip.year);
    println!("  {} ({}), {} department", employee.full_name, employee.id, employee.department);
    println!("  basic pay:  Rs.{}", slip.basic_pay);
    println!("  HRA:        Rs.{}", slip.hra);
    println!("  bonuses:    Rs.{}", slip.bonuses);
    println!("  deductions: Rs.{}", slip.deductions);
    println!("  net pay:    Rs.{}", slip.net_pay);
    println!("  generated by {} at {}", slip.generated_by, slip.generated_at);
}
