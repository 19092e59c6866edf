//! Calendar month labels used by the projection timeline
//!
//! The scenario timeline runs over a fixed January-to-December window, and a
//! planned purchase targets one of these months by name. Short labels ("Jan")
//! are the canonical form; parsing also accepts full month names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    /// All twelve months in calendar order
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Short three-letter label ("Jan")
    pub const fn as_str(&self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }

    /// Full month name ("January")
    pub const fn full_name(&self) -> &'static str {
        match self {
            Month::Jan => "January",
            Month::Feb => "February",
            Month::Mar => "March",
            Month::Apr => "April",
            Month::May => "May",
            Month::Jun => "June",
            Month::Jul => "July",
            Month::Aug => "August",
            Month::Sep => "September",
            Month::Oct => "October",
            Month::Nov => "November",
            Month::Dec => "December",
        }
    }

    /// Zero-based index within the calendar year (Jan = 0)
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Month::ALL
            .into_iter()
            .find(|m| {
                m.as_str().eq_ignore_ascii_case(needle) || m.full_name().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| format!("unknown month: '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_order() {
        assert_eq!(Month::ALL[0], Month::Jan);
        assert_eq!(Month::ALL[11], Month::Dec);
        assert_eq!(Month::Jun.index(), 5);
    }

    #[test]
    fn test_parse_short_and_full() {
        assert_eq!("Jun".parse::<Month>().unwrap(), Month::Jun);
        assert_eq!("june".parse::<Month>().unwrap(), Month::Jun);
        assert_eq!("SEPTEMBER".parse::<Month>().unwrap(), Month::Sep);
        assert!("Juneish".parse::<Month>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::Apr.to_string(), "Apr");
    }
}
