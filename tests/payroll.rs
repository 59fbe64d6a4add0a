//! Payroll derivation through the store: computed slips, tenure handling,
//! and the balance invariant.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::{Department, Gender};
use portal_tests::{seed_time, seeded_store};
use products_hr::{HrStore, NewEmployee, payroll};

#[test]
fn generated_slip_matches_the_documented_scenario() {
    let mut store = HrStore::new();
    let employee = store.add_employee(
        Department::Marketing,
        NewEmployee {
            full_name: "Ananya Rao".into(),
            email: "ananya@hrportal.com".into(),
            password: "ananya@123".into(),
            job_title: "Employee".into(),
            gender: Gender::Female,
            joining_date: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
            mobile_number: "9876501100".into(),
            emergency_contact: "9876511100".into(),
        },
    );
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let slip = store
        .generate_salary_slip(&employee.id, "hr-marketing", now)
        .unwrap();

    // Three whole years of tenure: multiplier 1.15 on the Marketing grade.
    assert_eq!(slip.basic_pay, 57_500);
    assert_eq!(slip.hra, 23_000);
    assert_eq!(slip.bonuses, 5_750);
    assert_eq!(slip.deductions, 2_875);
    assert_eq!(slip.net_pay, 83_375);
    assert_eq!(slip.month, "January");
    assert_eq!(slip.year, 2024);
    assert_eq!(slip.generated_by, "hr-marketing");
}

#[test]
fn seeded_slips_agree_with_the_pure_breakdown() {
    let store = seeded_store();
    let today = seed_time().date_naive();
    for employee in store.employees() {
        let slip = &store.salary_slips_for(&employee.id)[0];
        let breakdown = payroll::salary_breakdown(employee, today);
        assert_eq!(slip.basic_pay, breakdown.basic_pay, "{}", employee.id);
        assert_eq!(slip.hra, breakdown.hra);
        assert_eq!(slip.bonuses, breakdown.bonuses);
        assert_eq!(slip.deductions, breakdown.deductions);
        assert_eq!(slip.net_pay, breakdown.net_pay);
    }
}

#[test]
fn slips_balance_and_regenerate_identically() {
    let mut first = seeded_store();
    let mut second = seeded_store();
    let now = seed_time();
    for id in ["EMP101", "EMP205", "EMP304", "EMP402"] {
        let a = first.generate_salary_slip(id, "hr-portal", now).unwrap();
        let b = second.generate_salary_slip(id, "hr-portal", now).unwrap();
        assert_eq!(a, b, "payroll must be deterministic for {id}");
        assert_eq!(a.net_pay, a.basic_pay + a.hra + a.bonuses - a.deductions);
    }
}

#[test]
fn long_tenure_is_capped() {
    let mut store = HrStore::new();
    let veteran = store.add_employee(
        Department::Finance,
        NewEmployee {
            full_name: "Harsh Vora".into(),
            email: "harsh@hrportal.com".into(),
            password: "harsh@123".into(),
            job_title: "Employee".into(),
            gender: Gender::Male,
            joining_date: NaiveDate::from_ymd_opt(2005, 2, 14).unwrap(),
            mobile_number: "9876501401".into(),
            emergency_contact: "9876511401".into(),
        },
    );
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    let slip = store
        .generate_salary_slip(&veteran.id, "hr-finance", now)
        .unwrap();
    // 19 years of service still yields the 1.5 ceiling on the 55k grade.
    assert_eq!(slip.basic_pay, 82_500);
}
