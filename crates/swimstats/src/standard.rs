use std::{fs, path::PathBuf};

use anyhow::Context as _;
use mkenv::prelude::*;
use swim_times::{
    Time,
    compare::{StandardStatus, compare_to_standard},
    event::EventCode,
    standard::{AgeGroup, StandardImport},
};

use crate::time::parse_arg;

#[derive(clap::Args)]
pub struct CompareCmd {
    /// The swum time, like 28.45.
    time: String,

    /// The qualifying time of the standard.
    standard: String,

    /// The "almost" threshold in percent. Defaults to the configured one.
    #[arg(long)]
    threshold: Option<f64>,
}

fn status_label(status: StandardStatus) -> &'static str {
    match status {
        StandardStatus::Achieved => "achieved",
        StandardStatus::Almost => "almost",
        StandardStatus::NotYet => "not yet",
    }
}

pub fn compare(cmd: CompareCmd) -> anyhow::Result<()> {
    let time = parse_arg(&cmd.time)?;
    let standard = parse_arg(&cmd.standard)?;
    let threshold = cmd
        .threshold
        .unwrap_or_else(|| swim_times::env().almost_threshold_pct.get());
    let decimals = swim_times::env().percent_decimals.get();

    let cmp = compare_to_standard(time, standard, threshold);

    let mut table = prettytable::Table::init(vec![prettytable::row![
        "Time",
        "Standard",
        "Difference",
        "%",
        "Status"
    ]]);
    table.add_row(prettytable::row![
        Time(time),
        Time(standard),
        cmp.difference,
        format!("{:+.*}", decimals, cmp.difference_percent),
        status_label(cmp.status)
    ]);

    println!("{table}");

    Ok(())
}

#[derive(clap::Args)]
pub struct StandardCmd {
    /// The path to the JSON standard file.
    path: PathBuf,

    /// The event to compare a time on, like 50FR.
    #[arg(long, requires_all = ["age_group", "time"])]
    event: Option<EventCode>,

    /// The age group of the compared time, like 13-14.
    #[arg(long)]
    age_group: Option<AgeGroup>,

    /// The swum time to compare, like 28.45.
    #[arg(long)]
    time: Option<String>,
}

pub fn standard(cmd: StandardCmd) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&cmd.path)
        .with_context(|| format!("unable to read `{}`", cmd.path.display()))?;
    let data: StandardImport = serde_json::from_str(&raw)
        .with_context(|| format!("`{}` is not a valid standard file", cmd.path.display()))?;
    let standard = data.validate()?;

    let mut table =
        prettytable::Table::init(vec![prettytable::row!["Event", "Age group", "Time"]]);
    for time in &standard.times {
        table.add_row(prettytable::row![
            time.event,
            time.age_group,
            time.time_formatted
        ]);
    }

    println!(
        "{} ({}, {})",
        standard.standard.name, standard.standard.course_type, standard.standard.gender
    );
    println!("{table}");

    if let (Some(event), Some(age_group), Some(time)) = (cmd.event, cmd.age_group, cmd.time) {
        let time = parse_arg(&time)?;
        let threshold = swim_times::env().almost_threshold_pct.get();
        let cmp = standard
            .compare(event, age_group, time, threshold)
            .with_context(|| format!("no qualifying time for {event} {age_group}"))?;
        println!(
            "{}: {} ({})",
            Time(time),
            status_label(cmp.status),
            cmp.difference
        );
    }

    Ok(())
}
