// Debounce and channel selection.
//
// A raw reading is accepted once two consecutive scans agree. Accepted jack
// buttons select their channel directly; the dedicated button advances one
// channel on its rising edge only, so holding it does not cycle.

use crate::channel::{Channel, SensedValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    prev_accepted: SensedValue,
    prev_raw: SensedValue,
    channel: Channel,
}

impl Selector {
    pub const fn new() -> Self {
        Self {
            prev_accepted: SensedValue::Nothing,
            prev_raw: SensedValue::Nothing,
            channel: Channel::FIRST,
        }
    }

    #[inline]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    /// Feed one raw scan. Returns the new channel if it changed.
    pub fn update(&mut self, raw: SensedValue) -> Option<Channel> {
        let before = self.channel;

        if raw == self.prev_raw {
            match raw {
                SensedValue::Select(ch) => self.channel = ch,
                SensedValue::Advance if self.prev_accepted == SensedValue::Nothing => {
                    self.channel = self.channel.next();
                }
                _ => {}
            }
            self.prev_accepted = raw;
        }
        self.prev_raw = raw;

        (self.channel != before).then_some(self.channel)
    }
}
