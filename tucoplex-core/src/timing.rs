// Scan timing.
//
// Three delays drive everything:
//   led_dwell  how long one Charlieplexed LED stays lit per scan (~15ms)
//   charge     precharge pulse on a shorted anode (~8ms)
//   settle     weak pull-up settling before each sample (a few us)
//
// The hard-short vs RC decision only holds while
//   charge >= 2 * tau   and   settle <= tau / 2
// for the RC constant tau of the jack button network.

use crate::error::TimingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanTiming {
    pub led_dwell_us: u32,
    pub charge_us: u32,
    pub settle_us: u32,
}

impl ScanTiming {
    pub const DEFAULT: Self = Self::new(15_000, 8_000, 5);

    pub const fn new(led_dwell_us: u32, charge_us: u32, settle_us: u32) -> Self {
        Self {
            led_dwell_us,
            charge_us,
            settle_us,
        }
    }

    /// Check the charge and settle delays against an RC constant.
    pub fn check(&self, rc_tau_us: u32) -> Result<(), TimingError> {
        let min_charge = rc_tau_us.saturating_mul(2);
        if self.charge_us < min_charge {
            return Err(TimingError::ChargeTooShort {
                charge_us: self.charge_us,
                min_us: min_charge,
            });
        }

        let max_settle = rc_tau_us / 2;
        if self.settle_us > max_settle {
            return Err(TimingError::SettleTooLong {
                settle_us: self.settle_us,
                max_us: max_settle,
            });
        }

        Ok(())
    }
}

impl Default for ScanTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}
