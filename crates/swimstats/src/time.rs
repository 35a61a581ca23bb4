use anyhow::Context as _;
use mkenv::prelude::*;
use swim_times::{
    format_time, is_valid_time_string, parse_time, time_difference, time_difference_percent,
};

pub(crate) fn parse_arg(text: &str) -> anyhow::Result<i64> {
    parse_time(text).with_context(|| format!("invalid time `{text}`"))
}

pub fn format(ms: i64) {
    println!("{}", format_time(ms));
}

pub fn parse(text: &str) -> anyhow::Result<()> {
    println!("{}", parse_arg(text)?);
    Ok(())
}

pub fn validate(text: &str) -> anyhow::Result<()> {
    if !is_valid_time_string(text) {
        anyhow::bail!("`{text}` is not a valid time (expected SS.ss or M:SS.ss)");
    }
    println!("valid");
    Ok(())
}

pub fn diff(time: &str, reference: &str) -> anyhow::Result<()> {
    let time = parse_arg(time)?;
    let reference = parse_arg(reference)?;
    let decimals = swim_times::env().percent_decimals.get();

    println!(
        "{} ({:+.*}%)",
        time_difference(time, reference),
        decimals,
        time_difference_percent(time, reference)
    );
    Ok(())
}
