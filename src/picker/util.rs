use time::{Date, Month, Weekday};

pub(super) trait WeekdayExt {
    fn index1(&self, week_start: Weekday) -> u8;
}

impl WeekdayExt for Weekday {
    // 1-based position of the weekday within a week beginning on `week_start`
    fn index1(&self, week_start: Weekday) -> u8 {
        (self.number_days_from_sunday() + 7 - week_start.number_days_from_sunday()) % 7 + 1
    }
}

pub(super) fn first_of_next_month(date: Date) -> Option<Date> {
    let year = if date.month() == Month::December {
        date.year().checked_add(1)?
    } else {
        date.year()
    };
    Date::from_calendar_date(year, date.month().next(), 1).ok()
}

pub(super) fn first_of_previous_month(date: Date) -> Option<Date> {
    let year = if date.month() == Month::January {
        date.year().checked_sub(1)?
    } else {
        date.year()
    };
    Date::from_calendar_date(year, date.month().previous(), 1).ok()
}
