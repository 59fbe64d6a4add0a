//! Demo dataset: four HR accounts (one per department), twenty employees
//! (five per department), and a handful of in-flight records. Salary slips
//! are not hand-written; seeding derives one per employee for the seed
//! month through the payroll computation.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use entity::{
    Department, Employee, ExpenseCategory, ExpenseClaim, Gender, HrUser, LeaveRequest, LeaveType,
    PerformanceRating, PerformanceReport, Review, ReviewStatus, SalarySlip, Task, TaskPriority,
    TaskStatus,
};

use crate::{payroll, store::HrStore};

type EmployeeRow = (
    &'static str,            // id
    &'static str,            // full name
    &'static str,            // email local part
    &'static str,            // password
    Department,
    Gender,
    (i32, u32, u32),          // joining date
    &'static str,            // mobile
    &'static str,            // emergency contact
);

#[rustfmt::skip]
const EMPLOYEES: &[EmployeeRow] = &[
    ("EMP101", "Ananya Rao",     "ananya",  "ananya@123",  Department::Marketing, Gender::Female, (2023, 5, 10),  "9876501100", "9876511100"),
    ("EMP102", "Rajeev Sinha",   "rajeev",  "rajeev@123",  Department::Marketing, Gender::Male,   (2022, 1, 12),  "9876501101", "9876511101"),
    ("EMP103", "Swati Pandey",   "swati",   "swati@123",   Department::Marketing, Gender::Female, (2023, 8, 20),  "9876501102", "9876511102"),
    ("EMP104", "Nishant Tyagi",  "nishant", "nishant@123", Department::Marketing, Gender::Male,   (2021, 3, 25),  "9876501103", "9876511103"),
    ("EMP105", "Pooja Chauhan",  "pooja",   "pooja@123",   Department::Marketing, Gender::Female, (2024, 2, 1),   "9876501104", "9876511104"),
    ("EMP201", "Manish Rawat",   "manish",  "manish@123",  Department::It,        Gender::Male,   (2021, 7, 5),   "9876501200", "9876511200"),
    ("EMP202", "Divya Sharma",   "divya",   "divya@123",   Department::It,        Gender::Female, (2022, 9, 14),  "9876501201", "9876511201"),
    ("EMP203", "Kunal Grover",   "kunal",   "kunal@123",   Department::It,        Gender::Male,   (2023, 3, 11),  "9876501202", "9876511202"),
    ("EMP204", "Meenal Bhatia",  "meenal",  "meenal@123",  Department::It,        Gender::Female, (2022, 12, 30), "9876501203", "9876511203"),
    ("EMP205", "Rohit Vaidya",   "rohit",   "rohit@123",   Department::It,        Gender::Male,   (2023, 11, 5),  "9876501204", "9876511204"),
    ("EMP301", "Tanvi Kulkarni", "tanvik",  "tanvi@123",   Department::Research,  Gender::Female, (2024, 1, 18),  "9876501300", "9876511300"),
    ("EMP302", "Arav Jain",      "arav",    "arav@123",    Department::Research,  Gender::Male,   (2022, 7, 8),   "9876501301", "9876511301"),
    ("EMP303", "Richa Singh",    "richa",   "richa@123",   Department::Research,  Gender::Female, (2023, 5, 25),  "9876501302", "9876511302"),
    ("EMP304", "Sameer Khan",    "sameer",  "sameer@123",  Department::Research,  Gender::Male,   (2021, 9, 17),  "9876501303", "9876511303"),
    ("EMP305", "Isha Mehra",     "isha",    "isha@123",    Department::Research,  Gender::Female, (2024, 3, 1),   "9876501304", "9876511304"),
    ("EMP401", "Meera Chopra",   "meerac",  "meera@123",   Department::Finance,   Gender::Female, (2023, 6, 22),  "9876501400", "9876511400"),
    ("EMP402", "Harsh Vora",     "harsh",   "harsh@123",   Department::Finance,   Gender::Male,   (2021, 2, 14),  "9876501401", "9876511401"),
    ("EMP403", "Sakshi Jindal",  "sakshi",  "sakshi@123",  Department::Finance,   Gender::Female, (2022, 8, 11),  "9876501402", "9876511402"),
    ("EMP404", "Ramesh Shetty",  "ramesh",  "ramesh@123",  Department::Finance,   Gender::Male,   (2023, 10, 5),  "9876501403", "9876511403"),
    ("EMP405", "Aarti Nanda",    "aarti",   "aarti@123",   Department::Finance,   Gender::Female, (2024, 1, 9),   "9876501404", "9876511404"),
];

fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn ts(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0)
        .single()
        .expect("valid seed timestamp")
}

impl HrStore {
    /// Build a store populated with the demo dataset, with one computed
    /// salary slip per employee for `now`'s month.
    pub fn seeded(now: DateTime<Utc>) -> Self {
        let mut store = HrStore::new();

        for dept in Department::ALL {
            let tag = dept.as_str().to_lowercase();
            store.hr_users.push(HrUser {
                id: format!("hr-{tag}"),
                email: format!("hr.{tag}@hrportal.com"),
                password: format!("{tag}@123"),
                department: dept,
                full_name: format!("HR {} Manager", dept.as_str()),
                is_active: true,
            });
        }

        for &(id, name, email, password, dept, gender, joined, mobile, emergency) in EMPLOYEES {
            store.employees.push(Employee {
                id: id.into(),
                full_name: name.into(),
                email: format!("{email}@hrportal.com"),
                password: password.into(),
                department: dept,
                job_title: "Employee".into(),
                gender,
                joining_date: date(joined),
                mobile_number: mobile.into(),
                emergency_contact: emergency.into(),
                is_active: true,
            });
        }

        store.tasks = vec![
            Task {
                id: "task-1".into(),
                employee_id: "EMP101".into(),
                title: "Prepare Q4 Marketing Campaign".into(),
                description: "Create comprehensive marketing strategy for Q4 product launch".into(),
                deadline: date((2024, 2, 15)),
                priority: TaskPriority::High,
                status: TaskStatus::Pending,
                assigned_by: "hr-marketing".into(),
                created_at: ts(2024, 1, 10, 10, 0),
                updated_at: ts(2024, 1, 10, 10, 0),
            },
            Task {
                id: "task-2".into(),
                employee_id: "EMP102".into(),
                title: "Social Media Content Calendar".into(),
                description: "Develop social media content calendar for next month".into(),
                deadline: date((2024, 2, 10)),
                priority: TaskPriority::Medium,
                status: TaskStatus::Done,
                assigned_by: "hr-marketing".into(),
                created_at: ts(2024, 1, 5, 14, 30),
                updated_at: ts(2024, 1, 15, 16, 45),
            },
            Task {
                id: "task-3".into(),
                employee_id: "EMP201".into(),
                title: "Server Migration".into(),
                description: "Migrate legacy servers to cloud infrastructure".into(),
                deadline: date((2024, 2, 20)),
                priority: TaskPriority::High,
                status: TaskStatus::Pending,
                assigned_by: "hr-it".into(),
                created_at: ts(2024, 1, 8, 9, 15),
                updated_at: ts(2024, 1, 8, 9, 15),
            },
        ];
        store.task_seq = store.tasks.len() as u64;

        store.leave_requests = vec![
            LeaveRequest {
                id: "leave-1".into(),
                employee_id: "EMP101".into(),
                leave_type: LeaveType::Casual,
                start_date: date((2024, 2, 5)),
                end_date: date((2024, 2, 7)),
                reason: "Family function".into(),
                status: ReviewStatus::Pending,
                review: None,
                applied_at: ts(2024, 1, 20, 10, 30),
            },
            LeaveRequest {
                id: "leave-2".into(),
                employee_id: "EMP102".into(),
                leave_type: LeaveType::Sick,
                start_date: date((2024, 1, 15)),
                end_date: date((2024, 1, 17)),
                reason: "Fever and flu".into(),
                status: ReviewStatus::Approved,
                review: Some(Review {
                    reviewed_by: "hr-marketing".into(),
                    comments: Some("Get well soon".into()),
                    reviewed_at: ts(2024, 1, 14, 14, 20),
                }),
                applied_at: ts(2024, 1, 14, 8, 45),
            },
        ];
        store.leave_seq = store.leave_requests.len() as u64;

        store.performance_reports = vec![
            report("perf-1", "EMP101", 8, 10, 80, PerformanceRating::Good,
                "Consistently delivers quality work on time. Shows good initiative in marketing campaigns.",
                "hr-marketing"),
            report("perf-2", "EMP102", 12, 12, 100, PerformanceRating::Excellent,
                "Outstanding performance. Exceeded expectations in all assigned tasks and showed leadership qualities.",
                "hr-marketing"),
            report("perf-3", "EMP103", 6, 8, 75, PerformanceRating::Average,
                "Good effort but needs improvement in meeting deadlines. Has potential for growth.",
                "hr-marketing"),
            report("perf-4", "EMP201", 15, 16, 94, PerformanceRating::Excellent,
                "Exceptional technical skills and problem-solving abilities. Great mentor to junior developers.",
                "hr-it"),
            report("perf-5", "EMP202", 10, 12, 83, PerformanceRating::Good,
                "Solid technical contributor with good attention to detail. Reliable team member.",
                "hr-it"),
        ];
        store.report_seq = store.performance_reports.len() as u64;

        // Two in-flight claims so both dashboards have something pending.
        store.expense_claims = vec![
            ExpenseClaim {
                id: "exp-1".into(),
                employee_id: "EMP101".into(),
                title: "Client visit travel".into(),
                description: "Cab fare for the Pune client workshop".into(),
                amount: 1_800,
                category: ExpenseCategory::Travel,
                receipt_url: None,
                submitted_at: ts(2024, 1, 18, 9, 0),
                status: ReviewStatus::Pending,
                review: None,
            },
            ExpenseClaim {
                id: "exp-2".into(),
                employee_id: "EMP201".into(),
                title: "IDE license renewal".into(),
                description: "Annual license for the team development tooling".into(),
                amount: 4_500,
                category: ExpenseCategory::Software,
                receipt_url: None,
                submitted_at: ts(2024, 1, 18, 9, 0),
                status: ReviewStatus::Pending,
                review: None,
            },
        ];
        store.expense_seq = store.expense_claims.len() as u64;

        // One computed slip per employee for the seed month.
        let today = now.date_naive();
        let month = payroll::month_name(today);
        for i in 0..store.employees.len() {
            let employee = store.employees[i].clone();
            let generated_by = store
                .hr_user_for(employee.department)
                .map(|user| user.id.clone())
                .unwrap_or_else(|| "hr-portal".into());
            let breakdown = payroll::salary_breakdown(&employee, today);
            let id = store.next_slip_id();
            store.salary_slips.push(SalarySlip {
                id,
                employee_id: employee.id,
                month: month.clone(),
                year: today.year(),
                basic_pay: breakdown.basic_pay,
                hra: breakdown.hra,
                bonuses: breakdown.bonuses,
                deductions: breakdown.deductions,
                net_pay: breakdown.net_pay,
                generated_by,
                generated_at: now,
            });
        }

        store
    }
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    employee_id: &str,
    done: u32,
    total: u32,
    rate: u32,
    rating: PerformanceRating,
    comments: &str,
    reviewed_by: &str,
) -> PerformanceReport {
    PerformanceReport {
        id: id.into(),
        employee_id: employee_id.into(),
        review_period: "Q1 2024".into(),
        tasks_completed: done,
        total_tasks: total,
        completion_rate: rate,
        rating,
        comments: comments.into(),
        reviewed_by: reviewed_by.into(),
        review_date: ts(2024, 1, 31, 10, 0),
    }
}
