//! Tri-state pin capability
//!
//! The jack lines and the dedicated button switch between push-pull output,
//! floating input and pulled-up input at run time. [`TriStatePin`] is the
//! HAL-facing trait; [`Line`] wraps one pin, remembers which mode is active
//! and rejects operations that make no sense in that mode.
//!
//! Levels can be armed in any mode with [`Line::preload`]: the output latch
//! is set while the driver is still disconnected, so the line comes up at
//! its target level when switched to push-pull.

use embedded_hal::digital::{ErrorType, PinState};

use crate::error::Error;
use crate::jack::Terminal;

/// Which physical line a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineId {
    Jack(Terminal),
    Button,
}

impl core::fmt::Display for LineId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LineId::Jack(t) => write!(f, "jack {t}"),
            LineId::Button => f.write_str("button"),
        }
    }
}

/// Mode of a tri-state line. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    DrivenOutput,
    FloatingInput,
    PulledUpInput,
}

/// A GPIO that can be re-configured between output and input modes.
///
/// Implementations are plain register writes; the mode sequencing is the
/// caller's job (see [`Line`]).
pub trait TriStatePin: ErrorType {
    /// Connect the push-pull driver at the current latch level.
    fn set_output_push_pull(&mut self) -> Result<(), Self::Error>;

    /// Disconnect driver and pulls (high impedance).
    fn set_floating(&mut self) -> Result<(), Self::Error>;

    /// Disconnect driver, enable the weak pull-up.
    fn set_pulled_up(&mut self) -> Result<(), Self::Error>;

    /// Set the output latch. Only visible on the pad in push-pull mode.
    fn set_output_level(&mut self, state: PinState) -> Result<(), Self::Error>;

    /// Sample the pad.
    fn is_high(&mut self) -> Result<bool, Self::Error>;
}

/// One tri-state line with its active mode tracked.
pub struct Line<P> {
    pin: P,
    mode: PinMode,
    id: LineId,
}

impl<P: TriStatePin> Line<P> {
    /// Take ownership of `pin` and put it in high impedance.
    pub fn new(mut pin: P, id: LineId) -> Result<Self, Error<P::Error>> {
        pin.set_floating()?;
        Ok(Self {
            pin,
            mode: PinMode::FloatingInput,
            id,
        })
    }

    #[inline]
    pub fn mode(&self) -> PinMode {
        self.mode
    }

    #[inline]
    pub fn id(&self) -> LineId {
        self.id
    }

    pub fn set_push_pull(&mut self) -> Result<(), Error<P::Error>> {
        self.pin.set_output_push_pull()?;
        self.mode = PinMode::DrivenOutput;
        Ok(())
    }

    pub fn set_floating(&mut self) -> Result<(), Error<P::Error>> {
        self.pin.set_floating()?;
        self.mode = PinMode::FloatingInput;
        Ok(())
    }

    pub fn set_pulled_up(&mut self) -> Result<(), Error<P::Error>> {
        self.pin.set_pulled_up()?;
        self.mode = PinMode::PulledUpInput;
        Ok(())
    }

    /// Arm the output latch without touching the mode.
    pub fn preload(&mut self, state: PinState) -> Result<(), Error<P::Error>> {
        self.pin.set_output_level(state)?;
        Ok(())
    }

    /// Change the driven level. The line must already be push-pull.
    pub fn write(&mut self, state: PinState) -> Result<(), Error<P::Error>> {
        if self.mode != PinMode::DrivenOutput {
            return Err(Error::NotDriven(self.id));
        }
        self.pin.set_output_level(state)?;
        Ok(())
    }

    /// Sample the line. The line must be in one of the input modes.
    pub fn read(&mut self) -> Result<bool, Error<P::Error>> {
        if self.mode == PinMode::DrivenOutput {
            return Err(Error::ReadWhileDriven(self.id));
        }
        Ok(self.pin.is_high()?)
    }
}
