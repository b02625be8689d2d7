mod grid;
mod state;
mod util;
pub(crate) use self::grid::{Day, DAYS_IN_WEEK};
pub(crate) use self::state::DatePicker;
use thiserror::Error;

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
