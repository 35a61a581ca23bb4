use itertools::Itertools as _;
use swim_times::{format_date_range, get_date_range};

#[derive(clap::Args)]
pub struct DatesCmd {
    /// The first day, YYYY-MM-DD.
    start: String,

    /// The last day, YYYY-MM-DD.
    end: String,

    /// Also lists every day of the span.
    #[arg(long)]
    list: bool,
}

pub fn dates(cmd: DatesCmd) -> anyhow::Result<()> {
    println!("{}", format_date_range(&cmd.start, &cmd.end)?);

    if cmd.list {
        let days = get_date_range(&cmd.start, &cmd.end)?;
        if days.is_empty() {
            tracing::warn!("{} is after {}, no day to list", cmd.start, cmd.end);
        } else {
            println!("{}", days.iter().join("\n"));
        }
    }

    Ok(())
}
