mod picker;
use crate::picker::{DatePicker, Day, DAYS_IN_WEEK};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use time::{
    format_description::FormatItem, macros::format_description, Date, OffsetDateTime, Weekday,
};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        base_date: Option<Date>,
        selected_date: Option<Date>,
        week_start: Weekday,
        months: i32,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut base_date = None;
        let mut selected_date = None;
        let mut week_start = Weekday::Sunday;
        let mut months = 1;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('m') | Arg::Long("monday") => week_start = Weekday::Monday,
                Arg::Short('n') | Arg::Long("months") => months = parser.value()?.parse()?,
                Arg::Value(value) if selected_date.is_none() => {
                    let value = value.string()?;
                    match Date::parse(&value, &YMD_FMT) {
                        Ok(d) => {
                            if base_date.is_none() {
                                base_date = Some(d);
                            } else {
                                selected_date = Some(d);
                            }
                        }
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            base_date,
            selected_date,
            week_start,
            months,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                base_date,
                selected_date,
                week_start,
                months,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let base_date = base_date.unwrap_or(today);
                let mut picker = DatePicker::new(base_date, week_start);
                if let Some(date) = selected_date {
                    if picker.select_date(date).is_none() {
                        anyhow::bail!("{date} is not shown in {base_date}'s month");
                    }
                }
                for i in 0..months.unsigned_abs() {
                    if i > 0 {
                        println!();
                    }
                    print_month(&picker, week_start);
                    if i + 1 < months.unsigned_abs() {
                        if months > 0 {
                            picker
                                .forward_month()
                                .context("cannot display a month that late")?;
                        } else {
                            picker
                                .backward_month()
                                .context("cannot display a month that early")?;
                        }
                    }
                }
                Ok(())
            }
            Command::Help => {
                println!("Usage: monthgrid [-m] [-n INT] [BASE-DATE [SELECTED-DATE]]");
                println!();
                println!("Print BASE-DATE's month as a calendar grid padded to whole weeks");
                println!();
                println!("Options:");
                println!("  -m, --monday       Begin weeks on Monday instead of Sunday");
                println!("  -n, --months INT   Print INT consecutive months (negative counts");
                println!("                     backwards from BASE-DATE)");
                println!("  -h, --help         Display this help message and exit");
                println!("  -V, --version      Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn print_month(picker: &DatePicker, week_start: Weekday) {
    let title = format!(
        "{} {}",
        picker.base_date().month(),
        picker.base_date().year()
    );
    println!("{title:^28}");
    println!("{}", header(week_start));
    for week in picker.days().chunks(DAYS_IN_WEEK) {
        let mut line = String::new();
        for day in week {
            line.push_str(&show_day(day));
        }
        println!("{}", line.trim_end());
    }
}

fn header(week_start: Weekday) -> String {
    let mut line = String::new();
    let mut wd = week_start;
    for _ in 0..DAYS_IN_WEEK {
        line.push_str(column_label(wd));
        wd = wd.next();
    }
    line.truncate(line.trim_end().len());
    line
}

fn column_label(wd: Weekday) -> &'static str {
    match wd {
        Weekday::Sunday => " Su ",
        Weekday::Monday => " Mo ",
        Weekday::Tuesday => " Tu ",
        Weekday::Wednesday => " We ",
        Weekday::Thursday => " Th ",
        Weekday::Friday => " Fr ",
        Weekday::Saturday => " Sa ",
    }
}

fn show_day(day: &Day) -> String {
    let label = &day.label;
    if day.is_selected {
        format!("[{label:>2}]")
    } else if day.is_within_displayed_month {
        format!(" {label:>2} ")
    } else {
        format!("({label:>2})")
    }
}
