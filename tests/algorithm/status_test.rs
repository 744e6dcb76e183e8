use crate::utils::{date, iso, record_born, record_with_given};
use posyandu_immunization::{
    CompletionLabel, Dose, DoseEntry, EvaluatorConfig, ImmunizationEvaluator, ImmunizationStatus,
    ScheduleTable, TargetAge,
};

#[test]
fn test_dpt1_due_at_two_months() {
    let evaluator = ImmunizationEvaluator::default();
    let record = record_born(iso("2024-01-01"));
    let today = iso("2024-03-15");

    assert_eq!(evaluator.age_in_months(record.birth_date, today), 2);
    assert_eq!(evaluator.status(Dose::DptHbHib1, &record, today), ImmunizationStatus::Due);
}

#[test]
fn test_mr_overdue_at_seventeen_months() {
    let evaluator = ImmunizationEvaluator::default();
    let record = record_born(iso("2023-01-01"));
    let today = iso("2024-06-01");

    assert_eq!(evaluator.age_in_months(record.birth_date, today), 17);
    assert_eq!(evaluator.status(Dose::Mr, &record, today), ImmunizationStatus::Overdue);
}

#[test]
fn test_boundary_transitions_for_every_dose() {
    let evaluator = ImmunizationEvaluator::default();
    let birth = date(2022, 1, 1);
    let record = record_born(birth);

    for entry in evaluator.table().iter() {
        let target = entry.target.start_months;
        for age in 0..=30u32 {
            let today = birth + chrono::Months::new(age);
            let expected = if age < target {
                ImmunizationStatus::NotYetDue
            } else if age <= target + 1 {
                ImmunizationStatus::Due
            } else {
                ImmunizationStatus::Overdue
            };
            assert_eq!(
                evaluator.status(entry.dose, &record, today),
                expected,
                "{} at {age} months",
                entry.dose.key()
            );
        }
    }
}

#[test]
fn test_given_wins_even_before_birth() {
    let evaluator = ImmunizationEvaluator::default();
    let birth = iso("2024-05-01");
    let record = record_born(birth)
        .with_entry(Dose::MrLanjutan, DoseEntry::new(iso("2023-01-01"), "Tanggal tidak valid"));

    for today in [iso("2024-04-01"), birth, iso("2024-06-01"), iso("2030-01-01")] {
        assert_eq!(
            evaluator.status(Dose::MrLanjutan, &record, today),
            ImmunizationStatus::Given
        );
    }
}

#[test]
fn test_unknown_schedule() {
    let evaluator = ImmunizationEvaluator::new(
        ScheduleTable::default().without(Dose::Polio4),
        EvaluatorConfig::default(),
    );
    let record = record_born(iso("2024-01-01"));
    let today = iso("2024-08-01");

    assert_eq!(
        evaluator.status(Dose::Polio4, &record, today),
        ImmunizationStatus::UnknownSchedule
    );
    assert_eq!(
        evaluator.status_for_key("rotavirus", &record, today),
        ImmunizationStatus::UnknownSchedule
    );
    assert_eq!(
        evaluator.status_for_key("polio3", &record, today),
        ImmunizationStatus::Overdue
    );
    assert!(!evaluator.is_actionable(Dose::Polio4, &record, today));
}

#[test]
fn test_custom_grace_window() {
    let evaluator = ImmunizationEvaluator::new(
        ScheduleTable::default().with_target(Dose::Mr, TargetAge::between(9, 12), "9-12 Bulan"),
        EvaluatorConfig::default().with_grace_months(0),
    );
    let record = record_born(iso("2023-01-01"));

    assert_eq!(evaluator.status(Dose::Mr, &record, iso("2024-01-01")), ImmunizationStatus::Due);
    assert_eq!(
        evaluator.status(Dose::Mr, &record, iso("2024-02-01")),
        ImmunizationStatus::Overdue
    );
}

#[test]
fn test_summary_label_thresholds() {
    let evaluator = ImmunizationEvaluator::default();
    let birth = iso("2022-01-01");
    let today = iso("2024-06-01");

    let none = evaluator.summary(&record_with_given(birth, 0), today);
    assert_eq!((none.completed_count, none.total_count), (0, 13));
    assert_eq!(none.label, CompletionLabel::None);
    assert_eq!(none.label.label(), "Belum Ada");

    let partial = evaluator.summary(&record_with_given(birth, 5), today);
    assert_eq!((partial.completed_count, partial.total_count), (5, 13));
    assert_eq!(partial.label.label(), "Sebagian");

    let complete = evaluator.summary(&record_with_given(birth, 13), today);
    assert_eq!((complete.completed_count, complete.total_count), (13, 13));
    assert_eq!(complete.label.label(), "Lengkap");
}

#[test]
fn test_summary_total_ignores_table_size() {
    let evaluator = ImmunizationEvaluator::new(
        ScheduleTable::default().without(Dose::Ipv).without(Dose::Polio4),
        EvaluatorConfig::default(),
    );
    let summary = evaluator.summary(&record_with_given(iso("2022-01-01"), 3), iso("2024-01-01"));
    assert_eq!(summary.total_count, 13);
    assert_eq!(summary.completed_count, 3);
}
