// Dedicated channel outputs: four indicator LEDs and the USB switch select.
//
// Plain push-pull pins, never floated. Indicator LEDs are active low (the
// selected one sinks). The analog switch takes the channel LSB on both
// pair selects and the MSB on its own line.

use embedded_hal::digital::{OutputPin, PinState};

use crate::channel::Channel;

pub struct ChannelOutputs<O> {
    leds: [O; 4],
    select_01: O,
    select_23: O,
    select_msb: O,
}

impl<O: OutputPin> ChannelOutputs<O> {
    pub fn new(leds: [O; 4], select_01: O, select_23: O, select_msb: O) -> Self {
        Self {
            leds,
            select_01,
            select_23,
            select_msb,
        }
    }

    pub fn set_indicator_leds(&mut self, channel: Channel) -> Result<(), O::Error> {
        for (i, led) in self.leds.iter_mut().enumerate() {
            led.set_state(PinState::from(i != channel.index() as usize))?;
        }
        Ok(())
    }

    pub fn select_usb_channel(&mut self, channel: Channel) -> Result<(), O::Error> {
        let lsb = PinState::from(channel.index() & 1 != 0);
        let msb = PinState::from(channel.index() >> 1 != 0);
        self.select_01.set_state(lsb)?;
        self.select_23.set_state(lsb)?;
        self.select_msb.set_state(msb)?;
        Ok(())
    }

    /// Indicator LEDs, then the switch select.
    pub fn set_channel(&mut self, channel: Channel) -> Result<(), O::Error> {
        self.set_indicator_leds(channel)?;
        self.select_usb_channel(channel)
    }
}
