//! Jack button sensing
//!
//! Each directed pair can carry two switches: one shorts anode to cathode
//! directly, the other goes through an RC network. Both pull the anode low
//! on the first sample. A precharge pulse tells them apart:
//!
//! 1. cathode driven low, anode on its weak pull-up, settle, sample
//! 2. high: nothing pressed on this pair
//! 3. low: drive the anode high for the charge delay, back to pull-up,
//!    settle, sample again
//! 4. still low: hard short. High: the RC capacitor is charged now.
//!
//! A hard short has no series impedance and keeps the node low whatever the
//! precharge did; the RC path only holds it low while the capacitor is
//! empty. Both lines float again afterwards, whichever branch ran.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::PinState;
use log::trace;

use crate::channel::{PairReading, SensedValue};
use crate::error::Error;
use crate::jack::{DirectedPair, JackLines, Terminal};
use crate::line::{Line, TriStatePin};
use crate::timing::ScanTiming;

/// Jack buttons 1 and 2.
pub const TIP_TO_RING: DirectedPair = DirectedPair::new(Terminal::Tip, Terminal::Ring);
/// Jack buttons 3 and 4.
pub const RING_TO_TIP: DirectedPair = DirectedPair::new(Terminal::Ring, Terminal::Tip);

pub fn sense_directed_pair<P, D>(
    jack: &mut JackLines<P>,
    delay: &mut D,
    pair: DirectedPair,
    timing: &ScanTiming,
) -> Result<PairReading, Error<P::Error>>
where
    P: TriStatePin,
    D: DelayNs,
{
    let (cathode, anode) = jack.pair_mut(pair);
    let reading = probe(cathode, anode, delay, timing);

    // release before reporting, even when the probe failed
    let released = jack.release(pair);
    let reading = reading?;
    released?;

    trace!("{}: {:?}", pair, reading);
    Ok(reading)
}

fn probe<P, D>(
    cathode: &mut Line<P>,
    anode: &mut Line<P>,
    delay: &mut D,
    timing: &ScanTiming,
) -> Result<PairReading, Error<P::Error>>
where
    P: TriStatePin,
    D: DelayNs,
{
    cathode.preload(PinState::Low)?;
    anode.preload(PinState::High)?;
    cathode.set_push_pull()?;
    anode.set_pulled_up()?;
    delay.delay_us(timing.settle_us);

    if anode.read()? {
        return Ok(PairReading::Open);
    }

    anode.set_push_pull()?;
    anode.write(PinState::High)?;
    delay.delay_us(timing.charge_us);

    anode.set_pulled_up()?;
    delay.delay_us(timing.settle_us);

    Ok(if anode.read()? {
        PairReading::RcShort
    } else {
        PairReading::HardShort
    })
}

/// One pass over both jack pairs and the dedicated button, first hit wins.
pub fn scan_buttons_once<P, D>(
    jack: &mut JackLines<P>,
    button: &mut Line<P>,
    delay: &mut D,
    timing: &ScanTiming,
) -> Result<SensedValue, Error<P::Error>>
where
    P: TriStatePin,
    D: DelayNs,
{
    let code = sense_directed_pair(jack, delay, TIP_TO_RING, timing)?.code();
    if code != 0 {
        return Ok(SensedValue::jack_button(code));
    }

    let code = sense_directed_pair(jack, delay, RING_TO_TIP, timing)?.code();
    if code != 0 {
        return Ok(SensedValue::jack_button(code + 2));
    }

    if !button.read()? {
        return Ok(SensedValue::Advance);
    }

    Ok(SensedValue::Nothing)
}
