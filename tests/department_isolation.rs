//! The department is the sole access-control partition: a scoped view must
//! contain every record owned by that department's employees and nothing
//! else.

use entity::Department;
use portal_tests::seeded_store;

#[test]
fn every_employee_is_visible_only_in_their_own_department() {
    let store = seeded_store();
    for employee in store.employees() {
        for dept in Department::ALL {
            let scoped = store.employees_in(dept);
            let present = scoped.iter().any(|e| e.id == employee.id);
            assert_eq!(
                present,
                dept == employee.department,
                "{} vs {dept}",
                employee.id
            );
        }
    }
}

#[test]
fn dependent_collections_follow_their_owner() {
    let store = seeded_store();

    let marketing_tasks: Vec<_> = store
        .tasks_in(Department::Marketing)
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(marketing_tasks, vec!["task-1", "task-2"]);

    let it_tasks: Vec<_> = store
        .tasks_in(Department::It)
        .into_iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(it_tasks, vec!["task-3"]);

    assert!(store.tasks_in(Department::Research).is_empty());
    assert!(store.tasks_in(Department::Finance).is_empty());

    assert_eq!(store.leave_requests_in(Department::Marketing).len(), 2);
    assert!(store.leave_requests_in(Department::It).is_empty());

    let marketing_claims: Vec<_> = store
        .expense_claims_in(Department::Marketing)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(marketing_claims, vec!["exp-1"]);
    let it_claims: Vec<_> = store
        .expense_claims_in(Department::It)
        .into_iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(it_claims, vec!["exp-2"]);

    assert_eq!(store.performance_reports_in(Department::Marketing).len(), 3);
    assert_eq!(store.performance_reports_in(Department::It).len(), 2);
    assert!(store.performance_reports_in(Department::Finance).is_empty());
}

#[test]
fn every_department_sees_exactly_its_own_salary_slips() {
    let store = seeded_store();
    for dept in Department::ALL {
        let slips = store.salary_slips_in(dept);
        assert_eq!(slips.len(), 5, "{dept}");
        for slip in slips {
            let owner = store.employee(&slip.employee_id).expect("slip owner");
            assert_eq!(owner.department, dept);
        }
    }
}

#[test]
fn scoped_views_are_fresh_copies_in_insertion_order() {
    let store = seeded_store();
    let first = store.employees_in(Department::Finance);
    let second = store.employees_in(Department::Finance);
    assert_eq!(first, second);
    let ids: Vec<_> = first.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["EMP401", "EMP402", "EMP403", "EMP404", "EMP405"]);
}
