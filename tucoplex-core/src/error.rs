//! Error types
//!
//! - [`Error`] - runtime errors while driving or sensing lines
//! - [`TimingError`] - a [`ScanTiming`](crate::timing::ScanTiming) that
//!   cannot separate the hard-short and RC outcomes

use crate::line::LineId;

/// Errors out of the scan loop.
///
/// Generic over the pin error type so callers can match on the HAL error.
/// On targets where pin access cannot fail `E` is `Infallible` and only the
/// misuse variants remain reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The underlying pin reported an error.
    Pin(E),
    /// Level write on a line that is not in push-pull output mode.
    NotDriven(LineId),
    /// Read of a line while it is actively driven.
    ReadWhileDriven(LineId),
}

impl<E> From<E> for Error<E> {
    fn from(e: E) -> Self {
        Error::Pin(e)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Pin(e) => write!(f, "pin error: {e:?}"),
            Error::NotDriven(t) => write!(f, "write to {t} while not driven"),
            Error::ReadWhileDriven(t) => write!(f, "read of {t} while driven"),
        }
    }
}

impl<E: core::fmt::Debug> core::error::Error for Error<E> {}

/// Timing that would collapse the two shorted-pair outcomes into one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingError {
    /// Precharge pulse shorter than twice the RC time constant.
    ChargeTooShort {
        /// Configured charge delay
        charge_us: u32,
        /// Smallest accepted charge delay
        min_us: u32,
    },
    /// Settle delay longer than half the RC time constant.
    SettleTooLong {
        /// Configured settle delay
        settle_us: u32,
        /// Largest accepted settle delay
        max_us: u32,
    },
}

impl core::fmt::Display for TimingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimingError::ChargeTooShort { charge_us, min_us } => {
                write!(f, "charge delay {charge_us}us below {min_us}us")
            }
            TimingError::SettleTooLong { settle_us, max_us } => {
                write!(f, "settle delay {settle_us}us above {max_us}us")
            }
        }
    }
}

impl core::error::Error for TimingError {}
