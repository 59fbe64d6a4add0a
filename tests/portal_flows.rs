//! End-to-end portal cycle: login, assignment, completion, review.

use chrono::{Duration, NaiveDate};
use entity::{
    Department, LeaveType, PerformanceRating, Principal, ReviewStatus, TaskPriority, TaskStatus,
};
use portal_tests::{seed_time, seeded_store};
use products_hr::{NewLeaveRequest, NewPerformanceReview, NewTask};

#[test]
fn hr_assigns_and_employee_completes_a_task() {
    let mut store = seeded_store();
    let now = seed_time();

    let hr = store
        .authenticate("hr.it@hrportal.com", "it@123")
        .expect("HR login");
    let Principal::Hr(hr) = hr else {
        panic!("HR credentials must resolve to an HR identity");
    };
    assert_eq!(hr.department, Department::It);

    let task = store
        .assign_task(
            NewTask {
                employee_id: "EMP203".into(),
                title: "Patch build agents".into(),
                description: "Apply the January security updates".into(),
                deadline: NaiveDate::from_ymd_opt(2024, 2, 9).unwrap(),
                priority: TaskPriority::High,
            },
            &hr.id,
            now,
        )
        .unwrap();
    assert_eq!(task.id, "task-4");
    assert_eq!(task.assigned_by, "hr-it");

    let employee = store
        .authenticate("kunal@hrportal.com", "kunal@123")
        .expect("employee login");
    assert_eq!(employee.id(), "EMP203");

    let done = store
        .set_task_status(&task.id, TaskStatus::Done, now + Duration::days(2))
        .unwrap();
    assert_eq!(done.status, TaskStatus::Done);

    let stats = store.hr_dashboard_stats(Department::It);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.pending_tasks, 1); // seeded task-3 remains open

    let report = store
        .record_performance_review(
            NewPerformanceReview {
                employee_id: "EMP203".into(),
                review_period: "Q1 2024".into(),
                tasks_completed: 1,
                total_tasks: 1,
                rating: PerformanceRating::Excellent,
                comments: "Turned the patch round in two days".into(),
            },
            &hr.id,
            now + Duration::days(3),
        )
        .unwrap();
    assert_eq!(report.completion_rate, 100);
    assert_eq!(store.performance_reports_in(Department::It).len(), 3);
}

#[test]
fn leave_cycle_updates_both_dashboards() {
    let mut store = seeded_store();
    let now = seed_time();

    let leave = store
        .apply_leave(
            NewLeaveRequest {
                employee_id: "EMP302".into(),
                leave_type: LeaveType::Earned,
                start_date: NaiveDate::from_ymd_opt(2024, 2, 12).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2024, 2, 16).unwrap(),
                reason: "Travel".into(),
            },
            now,
        )
        .unwrap();
    assert_eq!(leave.status, ReviewStatus::Pending);
    assert_eq!(
        store
            .employee_dashboard_stats("EMP302")
            .unwrap()
            .pending_leave_requests,
        1
    );
    assert_eq!(
        store
            .hr_dashboard_stats(Department::Research)
            .pending_leave_requests,
        1
    );

    store
        .review_leave(
            &leave.id,
            ReviewStatus::Approved,
            "hr-research",
            Some("Enjoy the break".into()),
            now + Duration::hours(2),
        )
        .unwrap();

    let stats = store.employee_dashboard_stats("EMP302").unwrap();
    assert_eq!(stats.pending_leave_requests, 0);
    assert_eq!(stats.approved_leaves, 1);
    assert_eq!(
        store
            .hr_dashboard_stats(Department::Research)
            .pending_leave_requests,
        0
    );
}

#[test]
fn records_are_never_deleted_only_amended() {
    let mut store = seeded_store();
    let now = seed_time();
    let tasks_before = store.tasks_in(Department::Marketing).len();

    store
        .set_task_status("task-1", TaskStatus::Done, now)
        .unwrap();
    store
        .review_leave("leave-1", ReviewStatus::Rejected, "hr-marketing", None, now)
        .unwrap();

    assert_eq!(store.tasks_in(Department::Marketing).len(), tasks_before);
    assert_eq!(store.leave_requests_in(Department::Marketing).len(), 2);
    let leave = store.leave_request("leave-1").unwrap();
    assert_eq!(leave.status, ReviewStatus::Rejected);
}
