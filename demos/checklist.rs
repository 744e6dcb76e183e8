//! Example printing the immunization checklist of stored entries
//!
//! Usage: `cargo run --example checklist -- <imunisasi.json> [YYYY-MM-DD]`
//!
//! The JSON file holds a snapshot of the `imunisasi` node (`key -> entry`).
//! The evaluation date defaults to the current local date.

use std::path::Path;

use anyhow::Context;
use posyandu_immunization::utils::date_utils::parse_required_date;
use posyandu_immunization::{
    EvaluatorConfig, ImmunizationCollection, ImmunizationEvaluator, ImmunizationStatus,
    ModelCollection,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .context("usage: checklist <imunisasi.json> [YYYY-MM-DD]")?;

    let config = EvaluatorConfig::default();
    let today = match args.next() {
        Some(s) => parse_required_date(&s, &config.date_format_config)?,
        None => chrono::Local::now().date_naive(),
    };

    let json = std::fs::read_to_string(Path::new(&path))
        .with_context(|| format!("reading {path}"))?;
    let collection = ImmunizationCollection::from_json(&json, &config.date_format_config)?;
    let evaluator = ImmunizationEvaluator::new(Default::default(), config);

    println!("{}", evaluator.config());
    println!("Loaded {} immunization entries, evaluated at {today}", collection.count());

    for (key, record) in collection.entries() {
        let age = evaluator.age_as_string(record.birth_date, today);
        println!();
        println!(
            "[{key}] {} ({}) lahir {} - usia {age}",
            record.child_name, record.sex, record.birth_date
        );
        for row in evaluator.checklist(record, today) {
            println!(
                "  [{}] {:<30} {:<22} {:<24} {}",
                if row.status == ImmunizationStatus::Given { "x" } else { " " },
                row.dose.display_label(),
                row.schedule_label.unwrap_or("-"),
                row.status.label(),
                row.administered_date
                    .map(|d| format!("{d} ({})", row.age_at_administration.clone().unwrap_or_default()))
                    .or_else(|| row.unparsed_date.clone())
                    .unwrap_or_default(),
            );
            if row.stored_age_diverges() {
                log::warn!(
                    "{}: stored age '{}' differs from recomputed value",
                    row.dose.key(),
                    row.stored_age.as_deref().unwrap_or_default()
                );
            }
        }
        println!("  Status: {}", evaluator.summary(record, today));
    }

    Ok(())
}
