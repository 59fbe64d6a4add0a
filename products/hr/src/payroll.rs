//! Payroll derivation: department pay grades plus a tenure multiplier.
//!
//! Everything here is pure given (employee, date); the store layers id
//! allocation and event emission on top.

use chrono::NaiveDate;
use entity::{Department, Employee};

/// Per-department compensation parameters. Rates apply to the
/// tenure-adjusted basic pay.
#[derive(Copy, Clone, Debug)]
pub struct PayGrade {
    pub base_pay: i64,
    pub hra_rate: f64,
    pub bonus_rate: f64,
    pub deduction_rate: f64,
}

pub fn pay_grade(department: Department) -> PayGrade {
    match department {
        Department::Marketing => PayGrade {
            base_pay: 50_000,
            hra_rate: 0.40,
            bonus_rate: 0.10,
            deduction_rate: 0.05,
        },
        Department::It => PayGrade {
            base_pay: 60_000,
            hra_rate: 0.35,
            bonus_rate: 0.12,
            deduction_rate: 0.06,
        },
        Department::Research => PayGrade {
            base_pay: 58_000,
            hra_rate: 0.38,
            bonus_rate: 0.10,
            deduction_rate: 0.05,
        },
        Department::Finance => PayGrade {
            base_pay: 55_000,
            hra_rate: 0.36,
            bonus_rate: 0.11,
            deduction_rate: 0.06,
        },
    }
}

/// Whole years of tenure: floor(days since joining / 365).
pub fn experience_years(joining: NaiveDate, today: NaiveDate) -> i64 {
    (today - joining).num_days().max(0) / 365
}

/// 5% uplift per year of experience, capped at 1.5.
pub fn tenure_multiplier(years: i64) -> f64 {
    (1.0 + 0.05 * years as f64).min(1.5)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SalaryBreakdown {
    pub basic_pay: i64,
    pub hra: i64,
    pub bonuses: i64,
    pub deductions: i64,
    pub net_pay: i64,
}

/// Derive the monthly figures for `employee` as of `today`.
pub fn salary_breakdown(employee: &Employee, today: NaiveDate) -> SalaryBreakdown {
    let grade = pay_grade(employee.department);
    let years = experience_years(employee.joining_date, today);
    let multiplier = tenure_multiplier(years);
    let basic_pay = (grade.base_pay as f64 * multiplier).round() as i64;
    let hra = (basic_pay as f64 * grade.hra_rate).round() as i64;
    let bonuses = (basic_pay as f64 * grade.bonus_rate).round() as i64;
    let deductions = (basic_pay as f64 * grade.deduction_rate).round() as i64;
    SalaryBreakdown {
        basic_pay,
        hra,
        bonuses,
        deductions,
        net_pay: basic_pay + hra + bonuses - deductions,
    }
}

/// English month name used as the `SalarySlip::month` key.
pub fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string()
}

#[cfg(test)]
mod tests {
    use entity::Gender;

    use super::*;

    fn marketing_employee(joining: NaiveDate) -> Employee {
        Employee {
            id: "EMP101".into(),
            full_name: "Ananya Rao".into(),
            email: "ananya@hrportal.com".into(),
            password: "ananya@123".into(),
            department: Department::Marketing,
            job_title: "Employee".into(),
            gender: Gender::Female,
            joining_date: joining,
            mobile_number: "9876501100".into(),
            emergency_contact: "9876511100".into(),
            is_active: true,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn joining_today_gets_no_uplift() {
        let today = date(2024, 1, 1);
        assert_eq!(experience_years(today, today), 0);
        assert_eq!(tenure_multiplier(0), 1.0);
        let breakdown = salary_breakdown(&marketing_employee(today), today);
        assert_eq!(breakdown.basic_pay, 50_000);
    }

    #[test]
    fn multiplier_caps_at_one_point_five() {
        assert_eq!(tenure_multiplier(10), 1.5);
        assert_eq!(tenure_multiplier(25), 1.5);
        let breakdown = salary_breakdown(
            &marketing_employee(date(2000, 1, 1)),
            date(2024, 1, 1),
        );
        assert_eq!(breakdown.basic_pay, 75_000);
    }

    #[test]
    fn three_year_marketing_scenario() {
        let employee = marketing_employee(date(2021, 1, 1));
        let breakdown = salary_breakdown(&employee, date(2024, 1, 1));
        assert_eq!(breakdown.basic_pay, 57_500);
        assert_eq!(breakdown.hra, 23_000);
        assert_eq!(breakdown.bonuses, 5_750);
        assert_eq!(breakdown.deductions, 2_875);
        assert_eq!(breakdown.net_pay, 83_375);
    }

    #[test]
    fn breakdown_is_deterministic_and_balanced() {
        let employee = marketing_employee(date(2022, 6, 15));
        let today = date(2024, 3, 31);
        let first = salary_breakdown(&employee, today);
        let second = salary_breakdown(&employee, today);
        assert_eq!(first, second);
        assert_eq!(
            first.net_pay,
            first.basic_pay + first.hra + first.bonuses - first.deductions
        );
    }

    #[test]
    fn month_name_is_english() {
        assert_eq!(month_name(date(2024, 1, 31)), "January");
        assert_eq!(month_name(date(2024, 12, 1)), "December");
    }
}
