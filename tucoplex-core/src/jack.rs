// The three shared jack lines and directed pairs over them.
//
// A DirectedPair names the line pulled low (cathode) and the line driven or
// pulled high (anode). Both the LED wiring table and the two sense pairs
// are built from it; cathode != anode is checked at construction, which
// for the static tables means at compile time.

use crate::error::Error;
use crate::line::{Line, LineId, PinMode, TriStatePin};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Terminal {
    Sleeve,
    Ring,
    Tip,
}

impl Terminal {
    pub const fn name(self) -> &'static str {
        match self {
            Terminal::Sleeve => "sleeve",
            Terminal::Ring => "ring",
            Terminal::Tip => "tip",
        }
    }
}

impl core::fmt::Display for Terminal {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectedPair {
    cathode: Terminal,
    anode: Terminal,
}

impl DirectedPair {
    pub const fn new(cathode: Terminal, anode: Terminal) -> Self {
        assert!(
            cathode as u8 != anode as u8,
            "cathode and anode must be different lines"
        );
        Self { cathode, anode }
    }

    #[inline]
    pub const fn cathode(self) -> Terminal {
        self.cathode
    }

    #[inline]
    pub const fn anode(self) -> Terminal {
        self.anode
    }
}

impl core::fmt::Display for DirectedPair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}->{}", self.cathode, self.anode)
    }
}

/// Owner of the sleeve, ring and tip lines.
pub struct JackLines<P> {
    sleeve: Line<P>,
    ring: Line<P>,
    tip: Line<P>,
}

impl<P: TriStatePin> JackLines<P> {
    /// Wrap the three pins; all of them start floating.
    pub fn new(sleeve: P, ring: P, tip: P) -> Result<Self, Error<P::Error>> {
        Ok(Self {
            sleeve: Line::new(sleeve, LineId::Jack(Terminal::Sleeve))?,
            ring: Line::new(ring, LineId::Jack(Terminal::Ring))?,
            tip: Line::new(tip, LineId::Jack(Terminal::Tip))?,
        })
    }

    /// Mutable (cathode, anode) lines of `pair`.
    pub fn pair_mut(&mut self, pair: DirectedPair) -> (&mut Line<P>, &mut Line<P>) {
        let Self { sleeve, ring, tip } = self;
        match (pair.cathode, pair.anode) {
            (Terminal::Sleeve, Terminal::Ring) => (sleeve, ring),
            (Terminal::Sleeve, Terminal::Tip) => (sleeve, tip),
            (Terminal::Ring, Terminal::Sleeve) => (ring, sleeve),
            (Terminal::Ring, Terminal::Tip) => (ring, tip),
            (Terminal::Tip, Terminal::Sleeve) => (tip, sleeve),
            (Terminal::Tip, Terminal::Ring) => (tip, ring),
            _ => unreachable!("DirectedPair::new rejects identical terminals"),
        }
    }

    /// Float both lines of `pair`. Both are attempted; the first error wins.
    pub fn release(&mut self, pair: DirectedPair) -> Result<(), Error<P::Error>> {
        let (cathode, anode) = self.pair_mut(pair);
        let cathode_released = cathode.set_floating();
        let anode_released = anode.set_floating();
        cathode_released.and(anode_released)
    }

    /// Put every line in high impedance.
    pub fn float_all(&mut self) -> Result<(), Error<P::Error>> {
        self.sleeve.set_floating()?;
        self.ring.set_floating()?;
        self.tip.set_floating()?;
        Ok(())
    }

    pub fn all_floating(&self) -> bool {
        [&self.sleeve, &self.ring, &self.tip]
            .iter()
            .all(|l| l.mode() == PinMode::FloatingInput)
    }
}
