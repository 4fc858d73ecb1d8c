//! This module implements `DateError`.

use alloc::borrow::Cow;
use core::fmt;

/// `DateError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// An argument to an operation was absent, corrupt, or not a finite number.
    InvalidArgument,
    /// A range was requested whose start is after its end.
    InvalidRange,
    /// A value fell outside of the representable range.
    Range,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::InvalidArgument => "InvalidArgument",
            Self::InvalidRange => "InvalidRange",
            Self::Range => "RangeError",
        })
    }
}

/// The error type for `date_helpers`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl DateError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an invalid argument error.
    #[must_use]
    pub fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create an invalid range error.
    #[must_use]
    pub fn invalid_range() -> Self {
        Self::new(ErrorKind::InvalidRange)
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Add a predefined message to the error.
    #[must_use]
    pub(crate) fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = Cow::Borrowed(msg.to_str());
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.message();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for DateError {}

/// The predefined error messages raised by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorMessage {
    InvalidDate,
    InvalidAmount,
    FromAfterTo,
    InstantOutOfRange,
    DateOutOfRange,
    OffsetOutOfRange,
    InvalidTime,
    UnknownUnit,
    SystemTime,
}

impl ErrorMessage {
    pub(crate) fn to_str(self) -> &'static str {
        match self {
            Self::InvalidDate => "Invalid date provided",
            Self::InvalidAmount => "Invalid amount provided",
            Self::FromAfterTo => "Invalid range: from date must be before to date",
            Self::InstantOutOfRange => "Instant nanoseconds are not within a valid epoch range.",
            Self::DateOutOfRange => "Date is not within the representable range.",
            Self::OffsetOutOfRange => "UTC offset must be within ±23:59:59.",
            Self::InvalidTime => "Time fields are not a valid time of day.",
            Self::UnknownUnit => "Unknown unit identifier.",
            Self::SystemTime => "Error fetching system time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_includes_kind_and_message() {
        let err = DateError::invalid_argument().with_enum(ErrorMessage::InvalidDate);
        assert_eq!(err.to_string(), "InvalidArgument: Invalid date provided");
        assert_eq!(err.message(), "Invalid date provided");

        let bare = DateError::range();
        assert_eq!(bare.to_string(), "RangeError");
    }

    #[test]
    fn general_carries_owned_message() {
        let err = DateError::general(alloc::format!("clock at {}", 42));
        assert_eq!(err.kind(), ErrorKind::Generic);
        assert_eq!(err.into_message(), "clock at 42");
    }
}
