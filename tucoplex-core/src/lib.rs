//! Scanning core for the tucoplex switch box.
//!
//! Three shared jack lines (sleeve, ring, tip) are time-multiplexed to light
//! one of four Charlieplexed LEDs and to sense up to four jack buttons, two
//! of which only differ by the RC network in series with them. A fifth
//! action comes from a dedicated pulled-up button.
//!
//! Everything here is hardware independent: pins go through
//! [`TriStatePin`] and `embedded_hal` traits, delays through
//! [`embedded_hal::delay::DelayNs`].

#![cfg_attr(not(test), no_std)]

pub mod channel;
pub mod error;
pub mod jack;
pub mod led;
pub mod line;
pub mod outputs;
pub mod select;
pub mod sense;
pub mod switchbox;
pub mod timing;

#[cfg(test)]
mod sim;

pub use channel::{Channel, PairReading, SensedValue};
pub use error::{Error, TimingError};
pub use jack::{DirectedPair, JackLines, Terminal};
pub use line::{Line, LineId, PinMode, TriStatePin};
pub use outputs::ChannelOutputs;
pub use select::Selector;
pub use switchbox::Switchbox;
pub use timing::ScanTiming;
