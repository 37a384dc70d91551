//! `timesheet week`: print timesheet weeks.

use chrono::NaiveDate;
use clap::Args;
use timesheet_lib::palette::chart_color;
use timesheet_lib::period::Week;

/// Arguments for the `week` subcommand.
#[derive(Debug, Args)]
pub struct WeekArgs {
    /// Any date in the first week (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Number of weeks to print
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Also list each day of the week
    #[arg(long)]
    pub days: bool,
}

/// Runs the `week` subcommand.
pub fn run(args: WeekArgs) {
    let first = args.date.map(Week::containing).unwrap_or_else(Week::current);
    print!("{}", format_weeks(first, args.count, args.days));
}

fn format_weeks(first: Week, count: usize, with_days: bool) -> String {
    let mut out = String::new();
    let mut week = first;
    for i in 0..count.max(1) {
        let (year, number) = week.iso_week();
        out.push_str(&format!(
            "{year}-W{number:02}  {}  {}\n",
            week.label(),
            chart_color(i)
        ));
        if with_days {
            for day in week.days() {
                out.push_str(&format!("    {}\n", day.format("%a %Y-%m-%d")));
            }
        }
        week = week.next();
    }
    out
}

#[cfg(test)]
mod tests {
    use timesheet_lib::palette::CHART_COLORS;

    use super::*;

    #[test]
    fn test_format_two_weeks() {
        let first = Week::containing(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        let expected = format!(
            "2026-W43  Oct 19 - Oct 25, 2026  {}\n2026-W44  Oct 26 - Nov 1, 2026  {}\n",
            CHART_COLORS[0], CHART_COLORS[1]
        );
        assert_eq!(format_weeks(first, 2, false), expected);
    }

    #[test]
    fn test_format_with_days() {
        let first = Week::containing(NaiveDate::from_ymd_opt(2026, 10, 21).unwrap());
        let out = format_weeks(first, 1, true);
        assert_eq!(out.lines().count(), 8);
        assert_eq!(out.lines().nth(1), Some("    Mon 2026-10-19"));
        assert_eq!(out.lines().last(), Some("    Sun 2026-10-25"));
    }
}
