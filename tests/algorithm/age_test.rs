use crate::utils::{date, iso};
use chrono::Duration;
use posyandu_immunization::algorithm::age::{age_breakdown, age_in_months_with};
use posyandu_immunization::{INVALID_DATE_MARKER, MonthCounting, age_as_string, age_in_months};

#[test]
fn test_same_day_is_zero_for_many_birth_dates() {
    let mut birth = date(2023, 1, 1);
    while birth <= date(2024, 12, 31) {
        assert_eq!(age_in_months(birth, birth), 0);
        assert_eq!(age_as_string(birth, birth), "0 Hari");
        birth += Duration::days(7);
    }
}

#[test]
fn test_as_of_before_birth_clamps_and_marks() {
    let birth = iso("2024-06-15");
    for back in [1, 10, 31, 400] {
        let as_of = birth - Duration::days(back);
        assert_eq!(age_in_months(birth, as_of), 0);
        assert_eq!(age_as_string(birth, as_of), INVALID_DATE_MARKER);
        assert_eq!(
            age_in_months_with(birth, as_of, MonthCounting::CompletedMonths),
            0
        );
    }
}

#[test]
fn test_month_borrow_regression_fixture() {
    assert_eq!(age_as_string(iso("2024-01-31"), iso("2024-03-01")), "1 Bulan 1 Hari");
}

#[test]
fn test_known_pairs() {
    let cases = [
        ("2024-01-01", "2024-03-15", "2 Bulan 14 Hari"),
        ("2024-01-01", "2024-01-31", "30 Hari"),
        ("2024-01-15", "2024-02-14", "30 Hari"),
        ("2024-01-15", "2024-02-15", "1 Bulan 0 Hari"),
        ("2023-01-01", "2024-06-01", "1 Tahun 5 Bulan"),
        ("2022-08-20", "2024-08-19", "1 Tahun 11 Bulan"),
        ("2022-08-20", "2024-08-20", "2 Tahun 0 Bulan"),
    ];
    for (birth, as_of, expected) in cases {
        assert_eq!(age_as_string(iso(birth), iso(as_of)), expected, "{birth} -> {as_of}");
    }
}

#[test]
fn test_breakdown_days_never_negative() {
    let birth = date(2024, 1, 31);
    let mut as_of = birth;
    while as_of <= date(2025, 3, 31) {
        let age = age_breakdown(birth, as_of).unwrap();
        assert!(age.months < 12);
        assert!(age.days <= 31);
        as_of += Duration::days(1);
    }
}

#[test]
fn test_months_scenarios() {
    assert_eq!(age_in_months(iso("2024-01-01"), iso("2024-03-15")), 2);
    assert_eq!(age_in_months(iso("2023-01-01"), iso("2024-06-01")), 17);
}
