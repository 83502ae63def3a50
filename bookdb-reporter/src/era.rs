//! Publication-year buckets

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Fixed, non-overlapping publication periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Era {
    Before1900,
    From1900To1949,
    From1950To1999,
    /// Years from 2000 on, and anything the earlier ranges don't match
    From2000Onward,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown period label: {0}")]
pub struct UnknownEra(pub String);

impl Era {
    pub const ALL: [Era; 4] = [
        Era::Before1900,
        Era::From1900To1949,
        Era::From1950To1999,
        Era::From2000Onward,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Era::Before1900 => "Before 1900",
            Era::From1900To1949 => "1900-1949",
            Era::From1950To1999 => "1950-1999",
            Era::From2000Onward => "2000 and later",
        }
    }

    /// Bucket for a publication year, matching the SQL CASE in `books_by_era`.
    /// A missing year fails every comparison and lands in the last bucket.
    pub fn for_year(year: Option<i64>) -> Era {
        match year {
            Some(y) if y < 1900 => Era::Before1900,
            Some(1900..=1949) => Era::From1900To1949,
            Some(1950..=1999) => Era::From1950To1999,
            _ => Era::From2000Onward,
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Era {
    type Err = UnknownEra;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|era| era.label() == s)
            .ok_or_else(|| UnknownEra(s.to_string()))
    }
}
