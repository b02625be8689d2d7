use super::util::WeekdayExt;
use time::{Date, Duration, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// One cell of a month grid: either a day of the displayed month or a padding
/// day borrowed from an adjacent month to fill out a week row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Day {
    pub(crate) date: Date,
    pub(crate) label: String,
    pub(crate) is_selected: bool,
    pub(crate) is_within_displayed_month: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct MonthMetadata {
    number_of_days: u8,
    first_day: Date,
    // 1-based weekday index of `first_day` under the grid's week-start
    // convention
    first_day_weekday: u8,
}

impl MonthMetadata {
    fn of(base_date: Date, week_start: Weekday) -> Option<MonthMetadata> {
        let first_day = base_date.replace_day(1).ok()?;
        Some(MonthMetadata {
            number_of_days: base_date.month().length(base_date.year()),
            first_day,
            first_day_weekday: first_day.weekday().index1(week_start),
        })
    }

    fn last_day(&self) -> Option<Date> {
        self.first_day.replace_day(self.number_of_days).ok()
    }
}

/// Generates the day cells for the month containing a given base date, padded
/// at both ends with adjacent-month days so that every row of a seven-column
/// grid is full.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid {
    week_start: Weekday,
}

impl MonthGrid {
    pub(crate) fn new(week_start: Weekday) -> MonthGrid {
        MonthGrid { week_start }
    }

    /// Returns the cells for `base_date`'s month in chronological order.  The
    /// length is always a multiple of seven; the cell whose date equals
    /// `selected_date` (if any) is marked selected.
    ///
    /// Returns an empty `Vec` if the month's metadata cannot be resolved,
    /// which no valid `Date` triggers.
    pub(crate) fn generate(&self, base_date: Date, selected_date: Date) -> Vec<Day> {
        let Some(meta) = MonthMetadata::of(base_date, self.week_start) else {
            return Vec::new();
        };
        let offset = u16::from(meta.first_day_weekday);
        let mut days = Vec::with_capacity(
            usize::from(meta.first_day_weekday) + usize::from(meta.number_of_days) + DAYS_IN_WEEK,
        );
        // Cells before `offset` fall before the 1st and come from the
        // previous month.
        for day in 1..(u16::from(meta.number_of_days) + offset) {
            let is_within_displayed_month = day >= offset;
            let day_offset = i64::from(day) - i64::from(offset);
            days.push(self.day_cell(
                meta.first_day,
                day_offset,
                selected_date,
                is_within_displayed_month,
            ));
        }
        days.extend(self.start_of_next_month(&meta, selected_date));
        days
    }

    // Padding cells after the month's last day, up to the end of its week.  A
    // month ending on the week's last day needs none.
    fn start_of_next_month(&self, meta: &MonthMetadata, selected_date: Date) -> Vec<Day> {
        let Some(last_day) = meta.last_day() else {
            return Vec::new();
        };
        let additional_days = 7 - u16::from(last_day.weekday().index1(self.week_start));
        (1..=i64::from(additional_days))
            .map(|day_offset| self.day_cell(last_day, day_offset, selected_date, false))
            .collect()
    }

    fn day_cell(
        &self,
        anchor: Date,
        day_offset: i64,
        selected_date: Date,
        is_within_displayed_month: bool,
    ) -> Day {
        // Falling back to the anchor keeps one unrepresentable cell from
        // discarding the whole month.
        let date = anchor
            .checked_add(Duration::days(day_offset))
            .unwrap_or(anchor);
        Day {
            date,
            label: date.day().to_string(),
            is_selected: date == selected_date,
            is_within_displayed_month,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;
    use time::Month;
    use time::Weekday::{Monday, Sunday};

    fn in_month_count(days: &[Day]) -> usize {
        days.iter()
            .filter(|day| day.is_within_displayed_month)
            .count()
    }

    fn selected_count(days: &[Day]) -> usize {
        days.iter().filter(|day| day.is_selected).count()
    }

    #[test]
    fn test_leap_year_february() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 02 - 14));
        assert_eq!(days.len(), 35);
        assert_eq!(in_month_count(&days), 29);
        assert_eq!(days[0].date, date!(2024 - 01 - 28));
        assert!(!days[0].is_within_displayed_month);
        assert_eq!(days[4].date, date!(2024 - 02 - 01));
        assert!(days[4].is_within_displayed_month);
        assert_eq!(days[33].date, date!(2024 - 03 - 01));
        assert!(!days[33].is_within_displayed_month);
        assert_eq!(days[34].date, date!(2024 - 03 - 02));
    }

    #[test]
    fn test_common_year_february() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2023 - 02 - 14), date!(2023 - 02 - 14));
        assert_eq!(days.len(), 35);
        assert_eq!(in_month_count(&days), 28);
        assert_eq!(days[0].date, date!(2023 - 01 - 29));
        assert_eq!(days[3].date, date!(2023 - 02 - 01));
        assert_eq!(days[34].date, date!(2023 - 03 - 04));
        assert!(!days[34].is_within_displayed_month);
    }

    #[test]
    fn test_aligned_month_needs_no_padding() {
        // February 2015 runs Sunday the 1st through Saturday the 28th
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2015 - 02 - 14), date!(2015 - 02 - 14));
        assert_eq!(days.len(), 28);
        assert_eq!(in_month_count(&days), 28);
        assert_eq!(days[0].date, date!(2015 - 02 - 01));
        assert_eq!(days[27].date, date!(2015 - 02 - 28));
    }

    #[test]
    fn test_six_week_month() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 03 - 15), date!(2024 - 03 - 15));
        assert_eq!(days.len(), 42);
        assert_eq!(in_month_count(&days), 31);
        assert_eq!(days[0].date, date!(2024 - 02 - 25));
        assert_eq!(days[41].date, date!(2024 - 04 - 06));
    }

    #[test]
    fn test_monday_week_start() {
        // May 2023 begins on a Monday and ends on a Wednesday
        let grid = MonthGrid::new(Monday);
        let days = grid.generate(date!(2023 - 05 - 15), date!(2023 - 05 - 15));
        assert_eq!(days.len(), 35);
        assert_eq!(in_month_count(&days), 31);
        assert_eq!(days[0].date, date!(2023 - 05 - 01));
        assert!(days[0].is_within_displayed_month);
        assert_eq!(days[31].date, date!(2023 - 06 - 01));
        assert!(!days[31].is_within_displayed_month);
        assert_eq!(days[34].date, date!(2023 - 06 - 04));
    }

    #[test]
    fn test_chronological_without_gaps() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 02 - 14));
        for (cell, next_cell) in std::iter::zip(&days, days.iter().skip(1)) {
            assert_eq!(cell.date.next_day(), Some(next_cell.date));
        }
    }

    #[test]
    fn test_whole_weeks_every_month() {
        let grid = MonthGrid::new(Sunday);
        for year in [2023, 2024] {
            for number in 1..=12u8 {
                let month = Month::try_from(number).expect("month number should be valid");
                let base_date =
                    Date::from_calendar_date(year, month, 15).expect("date should be valid");
                let days = grid.generate(base_date, base_date);
                assert_eq!(days.len() % DAYS_IN_WEEK, 0);
                assert_eq!(in_month_count(&days), usize::from(month.length(year)));
            }
        }
    }

    #[test]
    fn test_selection_marks_one_cell() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 01), date!(2024 - 02 - 14));
        assert_eq!(selected_count(&days), 1);
        let selected = days
            .iter()
            .find(|day| day.is_selected)
            .expect("one cell should be selected");
        assert_eq!(selected.date, date!(2024 - 02 - 14));
        assert_eq!(selected.label, "14");
        assert!(selected.is_within_displayed_month);
    }

    #[test]
    fn test_selection_on_padding_day() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 03 - 01));
        assert_eq!(selected_count(&days), 1);
        let selected = days
            .iter()
            .find(|day| day.is_selected)
            .expect("one cell should be selected");
        assert_eq!(selected.date, date!(2024 - 03 - 01));
        assert!(!selected.is_within_displayed_month);
    }

    #[test]
    fn test_selection_outside_displayed_range() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 06 - 15));
        assert_eq!(selected_count(&days), 0);
    }

    #[test]
    fn test_labels_have_no_leading_zeroes() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 02 - 14));
        assert_eq!(days[4].label, "1");
        assert!(days.iter().all(|day| !day.label.starts_with('0')));
        assert!(days
            .iter()
            .all(|day| day.label == day.date.day().to_string()));
    }

    #[test]
    fn test_identical_inputs_identical_output() {
        let grid = MonthGrid::new(Sunday);
        let days = grid.generate(date!(2024 - 02 - 14), date!(2024 - 02 - 03));
        let days2 = grid.generate(date!(2024 - 02 - 14), date!(2024 - 02 - 03));
        assert_eq!(days, days2);
    }
}
