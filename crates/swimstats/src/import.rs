use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use mkenv::prelude::*;
use swim_times::{
    compare::{SwimRecord, personal_bests},
    date_range::format_naive_date_range,
    import::{ImportOptions, ImportPlan, SwimmerImport, validate_import},
};

#[derive(clap::Args)]
pub struct ImportCmd {
    /// The path to the JSON import file.
    path: PathBuf,

    /// Rejects the whole file if a meet is invalid.
    #[arg(long)]
    strict: bool,

    /// Prints the validated data as JSON instead of a summary.
    #[arg(long)]
    json: bool,
}

#[derive(clap::Args)]
pub struct BestsCmd {
    /// The path to the JSON import file.
    path: PathBuf,
}

fn load_plan(path: &Path, strict: bool) -> anyhow::Result<ImportPlan> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("unable to read `{}`", path.display()))?;
    let data: SwimmerImport = serde_json::from_str(&raw)
        .with_context(|| format!("`{}` is not a valid import file", path.display()))?;

    let options = ImportOptions {
        strict: strict || swim_times::env().strict_import.get(),
    };
    let plan = validate_import(&data, options)?;

    for error in &plan.errors {
        tracing::warn!("{error}");
    }
    for reason in &plan.skipped_reason {
        tracing::info!("{reason}");
    }

    Ok(plan)
}

pub fn import(cmd: ImportCmd) -> anyhow::Result<()> {
    let plan = load_plan(&cmd.path, cmd.strict)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        let mut table = prettytable::Table::init(vec![prettytable::row![
            "Meet", "City", "Dates", "Course", "Times", "Skipped"
        ]]);
        for meet in &plan.meets {
            table.add_row(prettytable::row![
                meet.name,
                meet.city,
                format_naive_date_range(meet.start_date, meet.end_date),
                meet.course_type,
                meet.times.len(),
                meet.skipped_duplicates
            ]);
        }

        println!(
            "Swimmer: {} ({}, born {})",
            plan.swimmer.name, plan.swimmer.gender, plan.swimmer.birth_date
        );
        println!("{table}");
        println!(
            "{} meet(s), {} time(s), {} meet(s) rejected, {} duplicate(s) skipped",
            plan.meets.len(),
            plan.times_count(),
            plan.errors.len(),
            plan.skipped_times
        );
    }

    if !plan.success {
        anyhow::bail!("no valid meet in `{}`", cmd.path.display());
    }

    Ok(())
}

pub fn bests(cmd: BestsCmd) -> anyhow::Result<()> {
    let plan = load_plan(&cmd.path, false)?;

    let records = plan
        .meets
        .iter()
        .flat_map(|meet| {
            meet.times.iter().map(|t| SwimRecord {
                event: t.event,
                time: t.time,
                date: t.event_date,
                meet: meet.name.clone(),
            })
        })
        .collect::<Vec<_>>();

    let mut table =
        prettytable::Table::init(vec![prettytable::row!["Event", "", "Time", "Date", "Meet"]]);
    for (event, best) in personal_bests(&records) {
        table.add_row(prettytable::row![
            event,
            event.name(),
            best.time,
            best.date,
            best.meet
        ]);
    }

    println!("{table}");

    Ok(())
}
