use super::grid::{Day, MonthGrid, DAYS_IN_WEEK};
use super::util::{first_of_next_month, first_of_previous_month};
use super::OutOfTimeError;
use time::{Date, Weekday};

/// Date-picker model: a displayed month, a selected date, and the generated
/// day cells for the month.  The cells are regenerated whenever the base
/// month or the selection changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct DatePicker {
    base_date: Date,
    selected_date: Date,
    grid: MonthGrid,
    days: Vec<Day>,
}

impl DatePicker {
    /// Creates a picker showing `base_date`'s month, with `base_date` itself
    /// as the initial selection.
    pub(crate) fn new(base_date: Date, week_start: Weekday) -> DatePicker {
        let grid = MonthGrid::new(week_start);
        let days = grid.generate(base_date, base_date);
        DatePicker {
            base_date,
            selected_date: base_date,
            grid,
            days,
        }
    }

    pub(crate) fn base_date(&self) -> Date {
        self.base_date
    }

    pub(crate) fn selected_date(&self) -> Date {
        self.selected_date
    }

    pub(crate) fn days(&self) -> &[Day] {
        &self.days
    }

    pub(crate) fn number_of_weeks(&self) -> usize {
        self.days.len() / DAYS_IN_WEEK
    }

    /// Selects the cell at `index` and returns its date, or `None` if the
    /// index is out of range.  Padding cells are selectable; selecting one
    /// does not change the displayed month.
    pub(crate) fn select(&mut self, index: usize) -> Option<Date> {
        let date = self.days.get(index)?.date;
        self.selected_date = date;
        self.regenerate();
        Some(date)
    }

    /// Selects the cell showing `date`, or returns `None` if the displayed
    /// grid has no such cell.
    pub(crate) fn select_date(&mut self, date: Date) -> Option<Date> {
        let index = self.days.iter().position(|day| day.date == date)?;
        self.select(index)
    }

    pub(crate) fn forward_month(&mut self) -> Result<(), OutOfTimeError> {
        self.base_date = first_of_next_month(self.base_date).ok_or(OutOfTimeError)?;
        self.regenerate();
        Ok(())
    }

    pub(crate) fn backward_month(&mut self) -> Result<(), OutOfTimeError> {
        self.base_date = first_of_previous_month(self.base_date).ok_or(OutOfTimeError)?;
        self.regenerate();
        Ok(())
    }

    fn regenerate(&mut self) {
        self.days = self.grid.generate(self.base_date, self.selected_date);
    }
}
