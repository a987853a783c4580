//! Tri-state line on an esp-hal `Flex` pin.
//!
//! The jack lines and the dedicated button are re-configured at run time
//! between push-pull output, floating input and pulled-up input. esp-hal's
//! `Flex` exposes the output enable, input enable and pull settings
//! separately, so each mode change is a couple of register writes and the
//! output level register survives all of them.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, PinState};
use esp_hal::gpio::{DriveMode, Flex, InputConfig, Level, OutputConfig, Pull};
use tucoplex_core::TriStatePin;

pub struct FlexLine {
    pin: Flex<'static>,
}

impl FlexLine {
    // Comes up floating with the output latch low.
    pub fn new(mut pin: Flex<'static>) -> Self {
        pin.set_output_enable(false);
        pin.set_level(Level::Low);
        pin.apply_output_config(&push_pull());
        pin.apply_input_config(&InputConfig::default().with_pull(Pull::None));
        pin.set_input_enable(true);
        Self { pin }
    }

    fn release(&mut self, pull: Pull) {
        // driver off before the pull changes, never both at once
        self.pin.set_output_enable(false);
        self.pin.apply_input_config(&InputConfig::default().with_pull(pull));
        self.pin.set_input_enable(true);
    }
}

fn push_pull() -> OutputConfig {
    OutputConfig::default()
        .with_drive_mode(DriveMode::PushPull)
        .with_pull(Pull::None)
}

impl ErrorType for FlexLine {
    type Error = Infallible;
}

impl TriStatePin for FlexLine {
    fn set_output_push_pull(&mut self) -> Result<(), Self::Error> {
        self.pin.apply_output_config(&push_pull());
        self.pin.set_output_enable(true);
        Ok(())
    }

    fn set_floating(&mut self) -> Result<(), Self::Error> {
        self.release(Pull::None);
        Ok(())
    }

    fn set_pulled_up(&mut self) -> Result<(), Self::Error> {
        self.release(Pull::Up);
        Ok(())
    }

    #[inline]
    fn set_output_level(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.pin.set_level(match state {
            PinState::High => Level::High,
            PinState::Low => Level::Low,
        });
        Ok(())
    }

    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.pin.is_high())
    }
}
