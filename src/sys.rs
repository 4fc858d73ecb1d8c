use crate::error::ErrorMessage;
use crate::host::HostClock;
use crate::time::EpochNanoseconds;
use crate::DateError;
use crate::DateResult;

use web_time::{SystemTime, UNIX_EPOCH};

/// A host clock backed by [`web_time::SystemTime`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl HostClock for SystemClock {
    fn get_host_epoch_nanoseconds(&self) -> DateResult<EpochNanoseconds> {
        get_system_nanoseconds()
    }
}

/// Returns the system time in nanoseconds.
///
/// Clocks set before the Unix epoch yield negative nanoseconds.
pub(crate) fn get_system_nanoseconds() -> DateResult<EpochNanoseconds> {
    let nanos = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(since) => i128::try_from(since.as_nanos()),
        Err(e) => i128::try_from(e.duration().as_nanos()).map(|n| -n),
    };
    nanos
        .map(EpochNanoseconds::from)
        .map_err(|_| DateError::general(ErrorMessage::SystemTime.to_str()))
}
