//! Scan loop
//!
//! One iteration, in order:
//!
//! 1. drive the indicator LEDs and USB select lines for the current channel
//! 2. light the channel's Charlieplexed LED for the dwell time
//! 3. sense both jack pairs and the dedicated button
//! 4. debounce and update the channel
//!
//! The LED dwell and the sense delays are the whole timing budget; there is
//! no other wait in the loop.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use log::{debug, info};

use crate::channel::{Channel, SensedValue};
use crate::error::Error;
use crate::jack::JackLines;
use crate::led::indicate_channel;
use crate::line::{Line, LineId, TriStatePin};
use crate::outputs::ChannelOutputs;
use crate::select::Selector;
use crate::sense::scan_buttons_once;
use crate::timing::ScanTiming;

pub struct Switchbox<P, O, D> {
    jack: JackLines<P>,
    button: Line<P>,
    outputs: ChannelOutputs<O>,
    delay: D,
    timing: ScanTiming,
    selector: Selector,
}

impl<P, O, D, E> Switchbox<P, O, D>
where
    P: TriStatePin<Error = E>,
    O: OutputPin<Error = E>,
    D: DelayNs,
{
    pub fn new(
        jack: JackLines<P>,
        button: P,
        outputs: ChannelOutputs<O>,
        delay: D,
        timing: ScanTiming,
    ) -> Result<Self, Error<E>> {
        Ok(Self {
            jack,
            button: Line::new(button, LineId::Button)?,
            outputs,
            delay,
            timing,
            selector: Selector::new(),
        })
    }

    /// Put every pin in its idle mode: jack lines floating, button on its
    /// pull-up, outputs driven for the current channel.
    pub fn init(&mut self) -> Result<(), Error<E>> {
        self.jack.float_all()?;
        self.button.set_pulled_up()?;
        self.outputs.set_channel(self.selector.channel())?;
        Ok(())
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.selector.channel()
    }

    /// Run one loop iteration and return the raw sensed value.
    pub fn scan_once(&mut self) -> Result<SensedValue, Error<E>> {
        let channel = self.selector.channel();

        self.outputs.set_channel(channel)?;
        indicate_channel(&mut self.jack, &mut self.delay, channel, self.timing.led_dwell_us)?;
        let raw = scan_buttons_once(&mut self.jack, &mut self.button, &mut self.delay, &self.timing)?;

        if raw != SensedValue::Nothing {
            debug!("sensed {}", raw.raw());
        }
        if let Some(next) = self.selector.update(raw) {
            info!("{} -> {}", channel, next);
        }

        Ok(raw)
    }

    /// Scan until a pin fails. With infallible pins this never returns.
    pub fn run(&mut self) -> Result<Infallible, Error<E>> {
        loop {
            self.scan_once()?;
        }
    }
}
