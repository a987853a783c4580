// Channel index and the per-scan sensed values.
//
// SensedValue keeps the integer coding of the front panel:
//   0 nothing, 1..=4 jack button (direct select), 5 dedicated button (advance)

/// One of the four switched paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Channel(u8);

impl Channel {
    pub const COUNT: u8 = 4;
    pub const FIRST: Self = Self(0);

    pub const fn new(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Next channel, wrapping 3 -> 0.
    #[inline]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }
}

impl core::fmt::Display for Channel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "ch{}", self.0)
    }
}

/// Outcome of one directed-pair sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairReading {
    /// Anode stayed high on the pull-up: nothing pressed on this pair.
    Open,
    /// Anode still low after the precharge pulse: zero-impedance switch.
    HardShort,
    /// Anode low at first, high after precharge: switch behind the RC network.
    RcShort,
}

impl PairReading {
    pub const fn code(self) -> u8 {
        match self {
            PairReading::Open => 0,
            PairReading::HardShort => 1,
            PairReading::RcShort => 2,
        }
    }
}

/// What one scan saw, before debouncing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SensedValue {
    #[default]
    Nothing,
    /// Jack button `n` (1..=4) selects channel `n - 1`.
    Select(Channel),
    /// Dedicated button: step to the next channel.
    Advance,
}

impl SensedValue {
    pub const fn raw(self) -> u8 {
        match self {
            SensedValue::Nothing => 0,
            SensedValue::Select(ch) => ch.index() + 1,
            SensedValue::Advance => 5,
        }
    }

    /// Jack button number (1..=4) to its sensed value.
    pub(crate) const fn jack_button(n: u8) -> Self {
        match Channel::new(n.wrapping_sub(1)) {
            Some(ch) => SensedValue::Select(ch),
            None => SensedValue::Nothing,
        }
    }
}

impl TryFrom<u8> for SensedValue {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            0 => Ok(SensedValue::Nothing),
            1..=4 => Ok(SensedValue::jack_button(raw)),
            5 => Ok(SensedValue::Advance),
            other => Err(other),
        }
    }
}
