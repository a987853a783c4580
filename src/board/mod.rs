//! Tucoplex switch box Board Support Package (BSP)
//!
//! Maps the physical hardware to named subsystems so the scan loop doesn't
//! need to know GPIO numbers. Pin numbers are listed in [`pins`].

pub mod pins;

use esp_hal::{
    gpio::{Flex, Level, Output, OutputConfig},
    peripherals::Peripherals,
};
use tucoplex_core::ChannelOutputs;

use crate::drivers::FlexLine;

/// Nominal time constant of the RC network on jack buttons 2 and 4.
///
/// 10k series resistor into 220nF; checked against the scan timing at boot.
pub const JACK_RC_TAU_US: u32 = 2_200;

/// The three shared jack lines, floating.
pub struct JackHw {
    pub sleeve: FlexLine,
    pub ring: FlexLine,
    pub tip: FlexLine,
}

/// Complete board hardware, ready for the scan loop.
pub struct Board {
    pub jack: JackHw,
    pub button: FlexLine,
    pub outputs: ChannelOutputs<Output<'static>>,
}

impl Board {
    pub fn init(p: Peripherals) -> Self {
        let cfg = OutputConfig::default();

        // indicators sink, start dark
        let leds = [
            Output::new(p.GPIO0, Level::High, cfg),
            Output::new(p.GPIO1, Level::High, cfg),
            Output::new(p.GPIO3, Level::High, cfg),
            Output::new(p.GPIO4, Level::High, cfg),
        ];
        let outputs = ChannelOutputs::new(
            leds,
            Output::new(p.GPIO5, Level::Low, cfg),
            Output::new(p.GPIO6, Level::Low, cfg),
            Output::new(p.GPIO7, Level::Low, cfg),
        );

        let button = FlexLine::new(Flex::new(p.GPIO10));
        let jack = JackHw {
            sleeve: FlexLine::new(Flex::new(p.GPIO2)),
            ring: FlexLine::new(Flex::new(p.GPIO8)),
            tip: FlexLine::new(Flex::new(p.GPIO20)),
        };

        Board {
            jack,
            button,
            outputs,
        }
    }
}
