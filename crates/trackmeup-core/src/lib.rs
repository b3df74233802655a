pub mod date;
pub mod error;
pub mod interval;
pub mod weekday_set;

pub use date::{DATE_FORMAT, is_valid_date, parse_date};
pub use error::IntervalError;
pub use interval::{DateRangeSpec, Days};
pub use weekday_set::WeekdaySet;
