//! Options for date arithmetic.

use core::{fmt, str::FromStr};

use crate::{error::ErrorMessage, DateError};

/// The granularity of an offset added with [`add_offset`][crate::add_offset].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    /// The `Second` unit
    Seconds,
    /// The `Minute` unit
    Minutes,
    /// The `Day` unit
    #[default]
    Days,
    /// The `Week` unit
    Weeks,
    /// The `Month` unit
    Months,
    /// The `Year` unit
    Years,
}

impl UnitKind {
    /// Resolves a unit identifier, treating unrecognized identifiers as `Days`.
    #[must_use]
    pub fn from_identifier(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            #[cfg(feature = "log")]
            log::debug!("unrecognized unit {s:?}, falling back to days");
            Self::Days
        })
    }
}

impl From<&str> for UnitKind {
    fn from(value: &str) -> Self {
        Self::from_identifier(value)
    }
}

impl FromStr for UnitKind {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "second" | "seconds" => Ok(Self::Seconds),
            "minute" | "minutes" => Ok(Self::Minutes),
            "day" | "days" => Ok(Self::Days),
            "week" | "weeks" => Ok(Self::Weeks),
            "month" | "months" => Ok(Self::Months),
            "year" | "years" => Ok(Self::Years),
            _ => Err(DateError::general(ErrorMessage::UnknownUnit.to_str())),
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
            Self::Years => "years",
        })
    }
}
