//! Trait definitions for accessing values from the host environment.
//!
//! NOTE: This is a power user API.

use crate::{time::EpochNanoseconds, DateResult};

/// The `HostClock` trait defines an accessor to the host's clock.
pub trait HostClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds>;
}

// Implement an empty clock that is frozen at the Unix epoch.

impl HostClock for () {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        Ok(EpochNanoseconds::from_seconds(0))
    }
}

/// A clock that always returns the same `EpochNanoseconds`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub EpochNanoseconds);

impl HostClock for FixedClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        Ok(self.0)
    }
}
