//! Charlieplexed channel LEDs on the jack lines
//!
//! Four LEDs hang between sleeve/ring/tip in both directions. One is lit per
//! scan for [`ScanTiming::led_dwell_us`](crate::timing::ScanTiming); there
//! is no latch, the scan loop keeps them visible by repetition.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;

use crate::channel::Channel;
use crate::error::Error;
use crate::jack::{DirectedPair, JackLines, Terminal};
use crate::line::{Line, TriStatePin};

/// (cathode, anode) for channels 0..=3.
pub const LED_WIRING: [DirectedPair; 4] = [
    DirectedPair::new(Terminal::Ring, Terminal::Sleeve),
    DirectedPair::new(Terminal::Sleeve, Terminal::Ring),
    DirectedPair::new(Terminal::Sleeve, Terminal::Tip),
    DirectedPair::new(Terminal::Tip, Terminal::Sleeve),
];

/// Light the LED for `channel` for `dwell_us`, then float its lines again.
pub fn indicate_channel<P, D>(
    jack: &mut JackLines<P>,
    delay: &mut D,
    channel: Channel,
    dwell_us: u32,
) -> Result<(), Error<P::Error>>
where
    P: TriStatePin,
    D: DelayNs,
{
    let pair = LED_WIRING[channel.index() as usize];
    let (cathode, anode) = jack.pair_mut(pair);
    let lit = light(cathode, anode, delay, dwell_us);

    let released = jack.release(pair);
    lit?;
    released
}

fn light<P, D>(
    cathode: &mut Line<P>,
    anode: &mut Line<P>,
    delay: &mut D,
    dwell_us: u32,
) -> Result<(), Error<P::Error>>
where
    P: TriStatePin,
    D: DelayNs,
{
    // levels first, so neither line ever comes up driven the wrong way
    cathode.preload(PinState::Low)?;
    anode.preload(PinState::High)?;
    cathode.set_push_pull()?;
    anode.set_push_pull()?;

    delay.delay_us(dwell_us);
    Ok(())
}
