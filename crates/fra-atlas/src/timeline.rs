//! Change detection timeline window
//!
//! The window is always ordered: `start < end`. Updates that would break the
//! order are rejected and leave the window as it was.

use crate::error::{AtlasError, AtlasResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month, `YYYY-MM` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create month; `None` if `month` is not `1..=12`
    #[must_use]
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// Year
    #[inline]
    #[must_use]
    pub fn year(self) -> i32 {
        self.year
    }

    /// Month, `1..=12`
    #[inline]
    #[must_use]
    pub fn month(self) -> u32 {
        self.month
    }
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = AtlasError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AtlasError::InvalidMonth(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse().map_err(|_| invalid())?;
        let month = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = AtlasError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<YearMonth> for String {
    fn from(ym: YearMonth) -> Self {
        ym.to_string()
    }
}

/// Ordered `[start, end]` month range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimelineWindow {
    start: YearMonth,
    end: YearMonth,
}

impl TimelineWindow {
    /// Create window
    ///
    /// # Errors
    /// `AtlasError::TimelineOrder` unless `start < end`.
    pub fn new(start: YearMonth, end: YearMonth) -> AtlasResult<Self> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(order_error(start, end))
        }
    }

    /// Parse both ends from `YYYY-MM` strings
    ///
    /// # Errors
    /// Malformed months or an unordered pair.
    pub fn parse(start: &str, end: &str) -> AtlasResult<Self> {
        Self::new(start.parse()?, end.parse()?)
    }

    /// First month
    #[inline]
    #[must_use]
    pub fn start(&self) -> YearMonth {
        self.start
    }

    /// Last month
    #[inline]
    #[must_use]
    pub fn end(&self) -> YearMonth {
        self.end
    }

    /// Move the start; accepted only if it stays before the end
    ///
    /// # Errors
    /// `AtlasError::TimelineOrder`; the window is unchanged.
    pub fn set_start(&mut self, start: YearMonth) -> AtlasResult<()> {
        if start < self.end {
            self.start = start;
            Ok(())
        } else {
            tracing::warn!(%start, end = %self.end, "rejected timeline start");
            Err(order_error(start, self.end))
        }
    }

    /// Move the end; accepted only if it stays after the start
    ///
    /// # Errors
    /// `AtlasError::TimelineOrder`; the window is unchanged.
    pub fn set_end(&mut self, end: YearMonth) -> AtlasResult<()> {
        if end > self.start {
            self.end = end;
            Ok(())
        } else {
            tracing::warn!(start = %self.start, %end, "rejected timeline end");
            Err(order_error(self.start, end))
        }
    }

    /// Whether a date falls inside the window, both ends inclusive
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        let month = YearMonth::from(date);
        self.start <= month && month <= self.end
    }
}

impl Default for TimelineWindow {
    /// 2020-01 to 2025-01
    fn default() -> Self {
        Self {
            start: YearMonth { year: 2020, month: 1 },
            end: YearMonth { year: 2025, month: 1 },
        }
    }
}

impl<'de> Deserialize<'de> for TimelineWindow {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            start: YearMonth,
            end: YearMonth,
        }
        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}

fn order_error(start: YearMonth, end: YearMonth) -> AtlasError {
    AtlasError::TimelineOrder {
        start: start.to_string(),
        end: end.to_string(),
    }
}
