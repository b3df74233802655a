use std::iter::FusedIterator;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::date::parse_date;
use crate::error::IntervalError;
use crate::weekday_set::WeekdaySet;

/// A validated closed date range plus the weekdays to leave out of it.
///
/// Both endpoints are candidate days. Fields are private so a spec can only
/// exist with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSpec")]
pub struct DateRangeSpec {
    start: NaiveDate,
    end: NaiveDate,
    excluded: WeekdaySet,
}

#[derive(Deserialize)]
struct RawSpec {
    start: String,
    end: String,
    #[serde(default)]
    excluded: WeekdaySet,
}

impl TryFrom<RawSpec> for DateRangeSpec {
    type Error = IntervalError;

    fn try_from(raw: RawSpec) -> Result<Self, Self::Error> {
        Self::build(&raw.start, &raw.end, raw.excluded)
    }
}

impl DateRangeSpec {
    /// Parse both endpoints as `YYYY-MM-DD` and validate the range.
    ///
    /// A malformed endpoint fails with [`IntervalError::DateParse`] before the
    /// range is looked at; a backwards range fails with
    /// [`IntervalError::InvalidRange`].
    pub fn build(
        start: &str,
        end: &str,
        excluded: impl IntoIterator<Item = Weekday>,
    ) -> Result<Self, IntervalError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Self::new(start, end, excluded)
    }

    /// Validate an already parsed range.
    pub fn new(
        start: NaiveDate,
        end: NaiveDate,
        excluded: impl IntoIterator<Item = Weekday>,
    ) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::InvalidRange);
        }
        Ok(Self {
            start,
            end,
            excluded: excluded.into_iter().collect(),
        })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn excluded(&self) -> WeekdaySet {
        self.excluded
    }

    /// Number of calendar days in `[start, end]`, excluded or not.
    pub fn candidate_count(&self) -> u64 {
        (self.end - self.start).num_days() as u64 + 1
    }

    /// Lazily scan the range, yielding days whose weekday is not excluded.
    pub fn days(&self) -> Days {
        Days {
            front: self.start,
            back: self.end,
            excluded: self.excluded,
            done: false,
        }
    }

    /// Returns every non-excluded day in `[start, end]`, ascending.
    pub fn generate(&self) -> Vec<NaiveDate> {
        self.days().collect()
    }
}

/// Iterator over the included days of a [`DateRangeSpec`].
///
/// Advances exactly one day per step from either end; excluded days are
/// stepped over, never jumped.
#[derive(Debug, Clone)]
pub struct Days {
    front: NaiveDate,
    back: NaiveDate,
    excluded: WeekdaySet,
    done: bool,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while !self.done {
            let day = self.front;
            match day.succ_opt() {
                Some(next) if day < self.back => self.front = next,
                _ => self.done = true,
            }
            if !self.excluded.contains(day.weekday()) {
                return Some(day);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        let remaining = (self.back - self.front).num_days() as usize + 1;
        (0, Some(remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<NaiveDate> {
        while !self.done {
            let day = self.back;
            match day.pred_opt() {
                Some(prev) if day > self.front => self.back = prev,
                _ => self.done = true,
            }
            if !self.excluded.contains(day.weekday()) {
                return Some(day);
            }
        }
        None
    }
}

impl FusedIterator for Days {}
