// Host-side model of the switch box circuit for tests.
//
// Pins, delay and the physical jack share one Circuit. Time only moves in
// delay calls, and each delay records what the LEDs and jack lines looked
// like while it ran.
//
// Jack buttons (diode-steered, conduct anode -> cathode only):
//   1: tip<-ring, hard short    2: tip<-ring, through RC network
//   3: ring<-tip, hard short    4: ring<-tip, through RC network
//
// An RC button's node voltage (0..1) charges with rc_tau while the anode is
// driven high, with pullup_tau on the weak pull-up alone, and bleeds with
// bleed_tau otherwise. It reads low below 0.5.
//
// Any pin operation can be made to fail with Circuit::fail; the pin state is
// left as it was when the operation fails.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};

use crate::jack::JackLines;
use crate::line::{PinMode, TriStatePin};
use crate::outputs::ChannelOutputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinId {
    Sleeve,
    Ring,
    Tip,
    Button,
    Led(u8),
    Select01,
    Select23,
    SelectMsb,
}

impl PinId {
    const COUNT: usize = 11;

    fn index(self) -> usize {
        match self {
            PinId::Sleeve => 0,
            PinId::Ring => 1,
            PinId::Tip => 2,
            PinId::Button => 3,
            PinId::Led(n) => 4 + n as usize,
            PinId::Select01 => 8,
            PinId::Select23 => 9,
            PinId::SelectMsb => 10,
        }
    }
}

/// Pin operation a fault can be injected into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinOp {
    PushPull,
    Floating,
    PulledUp,
    Level,
    Read,
}

/// Error returned by a [`SimPin`] operation marked as failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinFault {
    pub pin: PinId,
    pub op: PinOp,
}

impl embedded_hal::digital::Error for PinFault {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

const JACK: [PinId; 3] = [PinId::Sleeve, PinId::Ring, PinId::Tip];

// (cathode, anode) of the four Charlieplexed LEDs
const LED_WIRING: [(PinId, PinId); 4] = [
    (PinId::Ring, PinId::Sleeve),
    (PinId::Sleeve, PinId::Ring),
    (PinId::Sleeve, PinId::Tip),
    (PinId::Tip, PinId::Sleeve),
];

// (cathode, anode, has_rc) of jack buttons 1..=4
const BUTTON_WIRING: [(PinId, PinId, bool); 4] = [
    (PinId::Tip, PinId::Ring, false),
    (PinId::Tip, PinId::Ring, true),
    (PinId::Ring, PinId::Tip, false),
    (PinId::Ring, PinId::Tip, true),
];

const THRESHOLD: f64 = 0.5;

/// What the circuit looked like during one delay call.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub duration_us: f64,
    pub lit: Vec<u8>,
    pub jack_floating: bool,
}

struct State {
    modes: [PinMode; PinId::COUNT],
    latches: [PinState; PinId::COUNT],
    now_us: f64,
    pressed: [bool; 4],
    button_pressed: bool,
    node: [f64; 4],
    rc_tau_us: f64,
    pullup_tau_us: f64,
    bleed_tau_us: f64,
    max_driven_high: usize,
    max_driven_low: usize,
    samples: Vec<Sample>,
    faults: Vec<PinFault>,
}

impl State {
    fn is_driven(&self, id: PinId, level: PinState) -> bool {
        self.modes[id.index()] == PinMode::DrivenOutput && self.latches[id.index()] == level
    }

    fn track_drive(&mut self) {
        let high = JACK.iter().filter(|&&p| self.is_driven(p, PinState::High)).count();
        let low = JACK.iter().filter(|&&p| self.is_driven(p, PinState::Low)).count();
        self.max_driven_high = self.max_driven_high.max(high);
        self.max_driven_low = self.max_driven_low.max(low);
    }

    fn lit(&self) -> Vec<u8> {
        LED_WIRING
            .iter()
            .enumerate()
            .filter(|(_, (c, a))| self.is_driven(*c, PinState::Low) && self.is_driven(*a, PinState::High))
            .map(|(i, _)| i as u8)
            .collect()
    }

    fn advance(&mut self, dt_us: f64) {
        for (i, &(cathode, anode, has_rc)) in BUTTON_WIRING.iter().enumerate() {
            if !has_rc {
                continue;
            }
            let conducting = self.pressed[i] && self.is_driven(cathode, PinState::Low);
            let tau = if !conducting {
                None
            } else if self.is_driven(anode, PinState::High) {
                Some(self.rc_tau_us)
            } else if self.modes[anode.index()] == PinMode::PulledUpInput {
                Some(self.pullup_tau_us)
            } else {
                None
            };
            let v = self.node[i];
            self.node[i] = match tau {
                Some(tau) => 1.0 - (1.0 - v) * (-dt_us / tau).exp(),
                None => v * (-dt_us / self.bleed_tau_us).exp(),
            };
        }
        self.now_us += dt_us;
    }

    fn read(&self, id: PinId) -> bool {
        match self.modes[id.index()] {
            PinMode::DrivenOutput => self.latches[id.index()] == PinState::High,
            PinMode::FloatingInput => false,
            PinMode::PulledUpInput if id == PinId::Button => !self.button_pressed,
            PinMode::PulledUpInput => !BUTTON_WIRING.iter().enumerate().any(|(i, &(c, a, rc))| {
                a == id
                    && self.pressed[i]
                    && self.is_driven(c, PinState::Low)
                    && (!rc || self.node[i] < THRESHOLD)
            }),
        }
    }
}

#[derive(Clone)]
pub struct Circuit(Rc<RefCell<State>>);

impl Circuit {
    pub fn new() -> Self {
        Self::with_rc_tau(2_000.0)
    }

    /// Circuit whose RC buttons have time constant `rc_tau_us`; the weak
    /// pull-up is ten times slower, bleed-off matches the RC constant.
    pub fn with_rc_tau(rc_tau_us: f64) -> Self {
        Self(Rc::new(RefCell::new(State {
            modes: [PinMode::FloatingInput; PinId::COUNT],
            latches: [PinState::Low; PinId::COUNT],
            now_us: 0.0,
            pressed: [false; 4],
            button_pressed: false,
            node: [0.0; 4],
            rc_tau_us,
            pullup_tau_us: rc_tau_us * 10.0,
            bleed_tau_us: rc_tau_us,
            max_driven_high: 0,
            max_driven_low: 0,
            samples: Vec::new(),
            faults: Vec::new(),
        })))
    }

    pub fn pin(&self, id: PinId) -> SimPin {
        SimPin {
            id,
            circuit: self.clone(),
        }
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay {
            circuit: self.clone(),
        }
    }

    pub fn jack(&self) -> JackLines<SimPin> {
        JackLines::new(
            self.pin(PinId::Sleeve),
            self.pin(PinId::Ring),
            self.pin(PinId::Tip),
        )
        .unwrap()
    }

    pub fn outputs(&self) -> ChannelOutputs<SimPin> {
        let mut state = self.0.borrow_mut();
        for id in [
            PinId::Led(0),
            PinId::Led(1),
            PinId::Led(2),
            PinId::Led(3),
            PinId::Select01,
            PinId::Select23,
            PinId::SelectMsb,
        ] {
            state.modes[id.index()] = PinMode::DrivenOutput;
            state.latches[id.index()] = PinState::High;
        }
        drop(state);
        ChannelOutputs::new(
            [
                self.pin(PinId::Led(0)),
                self.pin(PinId::Led(1)),
                self.pin(PinId::Led(2)),
                self.pin(PinId::Led(3)),
            ],
            self.pin(PinId::Select01),
            self.pin(PinId::Select23),
            self.pin(PinId::SelectMsb),
        )
    }

    /// Press jack button `n` (1..=4).
    pub fn press(&self, n: usize) {
        self.0.borrow_mut().pressed[n - 1] = true;
    }

    pub fn release(&self, n: usize) {
        self.0.borrow_mut().pressed[n - 1] = false;
    }

    pub fn press_button(&self) {
        self.0.borrow_mut().button_pressed = true;
    }

    /// Make every later `op` on pin `id` fail.
    pub fn fail(&self, pin: PinId, op: PinOp) {
        self.0.borrow_mut().faults.push(PinFault { pin, op });
    }

    pub fn release_all(&self) {
        let mut state = self.0.borrow_mut();
        state.pressed = [false; 4];
        state.button_pressed = false;
    }

    pub fn mode(&self, id: PinId) -> PinMode {
        self.0.borrow().modes[id.index()]
    }

    pub fn latch(&self, id: PinId) -> PinState {
        self.0.borrow().latches[id.index()]
    }

    pub fn jack_floating(&self) -> bool {
        let state = self.0.borrow();
        JACK.iter().all(|p| state.modes[p.index()] == PinMode::FloatingInput)
    }

    pub fn now_us(&self) -> f64 {
        self.0.borrow().now_us
    }

    /// Most jack lines ever driven high and low at the same instant.
    pub fn max_driven(&self) -> (usize, usize) {
        let state = self.0.borrow();
        (state.max_driven_high, state.max_driven_low)
    }

    pub fn take_samples(&self) -> Vec<Sample> {
        std::mem::take(&mut self.0.borrow_mut().samples)
    }
}

pub struct SimPin {
    id: PinId,
    circuit: Circuit,
}

impl SimPin {
    fn check(&self, op: PinOp) -> Result<(), PinFault> {
        let fault = PinFault { pin: self.id, op };
        if self.circuit.0.borrow().faults.contains(&fault) {
            return Err(fault);
        }
        Ok(())
    }

    fn set_mode(&mut self, mode: PinMode) {
        let mut state = self.circuit.0.borrow_mut();
        state.modes[self.id.index()] = mode;
        state.track_drive();
    }

    fn set_latch(&mut self, level: PinState) {
        let mut state = self.circuit.0.borrow_mut();
        state.latches[self.id.index()] = level;
        state.track_drive();
    }
}

impl ErrorType for SimPin {
    type Error = PinFault;
}

impl TriStatePin for SimPin {
    fn set_output_push_pull(&mut self) -> Result<(), Self::Error> {
        self.check(PinOp::PushPull)?;
        self.set_mode(PinMode::DrivenOutput);
        Ok(())
    }

    fn set_floating(&mut self) -> Result<(), Self::Error> {
        self.check(PinOp::Floating)?;
        self.set_mode(PinMode::FloatingInput);
        Ok(())
    }

    fn set_pulled_up(&mut self) -> Result<(), Self::Error> {
        self.check(PinOp::PulledUp)?;
        self.set_mode(PinMode::PulledUpInput);
        Ok(())
    }

    fn set_output_level(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.check(PinOp::Level)?;
        self.set_latch(state);
        Ok(())
    }

    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.check(PinOp::Read)?;
        Ok(self.circuit.0.borrow().read(self.id))
    }
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.check(PinOp::Level)?;
        self.set_latch(PinState::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.check(PinOp::Level)?;
        self.set_latch(PinState::High);
        Ok(())
    }
}

pub struct SimDelay {
    circuit: Circuit,
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut state = self.circuit.0.borrow_mut();
        let sample = Sample {
            duration_us: ns as f64 / 1_000.0,
            lit: state.lit(),
            jack_floating: JACK
                .iter()
                .all(|p| state.modes[p.index()] == PinMode::FloatingInput),
        };
        state.samples.push(sample);
        state.advance(ns as f64 / 1_000.0);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay_ns(us.saturating_mul(1_000));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rc_node_charges_only_when_driven_across_the_switch() {
        let circuit = Circuit::new();
        circuit.press(2);
        let mut tip = circuit.pin(PinId::Tip);
        let mut ring = circuit.pin(PinId::Ring);
        let mut delay = circuit.delay();

        ring.set_output_level(PinState::High).unwrap();
        ring.set_output_push_pull().unwrap();
        delay.delay_us(10_000);
        ring.set_pulled_up().unwrap();
        // cathode floating: no current path, node never charged, but the
        // switch does not pull the anode down either
        assert!(ring.is_high().unwrap());

        tip.set_output_level(PinState::Low).unwrap();
        tip.set_output_push_pull().unwrap();
        assert!(!ring.is_high().unwrap());

        ring.set_output_push_pull().unwrap();
        delay.delay_us(10_000);
        ring.set_pulled_up().unwrap();
        assert!(ring.is_high().unwrap());
    }

    #[test]
    fn failed_operation_leaves_pin_alone() {
        let circuit = Circuit::new();
        circuit.fail(PinId::Ring, PinOp::PushPull);
        let mut ring = circuit.pin(PinId::Ring);

        assert_eq!(
            ring.set_output_push_pull(),
            Err(PinFault { pin: PinId::Ring, op: PinOp::PushPull })
        );
        assert_eq!(circuit.mode(PinId::Ring), PinMode::FloatingInput);
        // other operations and other pins are unaffected
        ring.set_pulled_up().unwrap();
        circuit.pin(PinId::Tip).set_output_push_pull().unwrap();
    }
}
