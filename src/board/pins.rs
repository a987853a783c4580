//! GPIO |     Function    |      Notes
//! -----+-----------------+----------------------------------
//!  0   | LED1            | Channel 0 indicator, active LOW
//!  1   | LED2            | Channel 1 indicator, active LOW
//!  3   | LED3            | Channel 2 indicator, active LOW
//!  4   | LED4            | Channel 3 indicator, active LOW
//!  5   | SEL_01          | USB switch select, channels 0/1
//!  6   | SEL_23          | USB switch select, channels 2/3
//!  7   | SEL_MSB         | USB switch bank select (01 / 23)
//! 10   | BUTTON          | Next-channel button, active LOW, internal pullup
//!  2   | JACK sleeve     | Via 270R, Charlieplexed LEDs + jack buttons
//!  8   | JACK ring       | Via 270R
//! 20   | JACK tip        | Via 270R
//!
//! GPIO2 and GPIO8 are strapping pins. The jack lines only see LEDs and
//! diode-steered switches, which leave them undriven through reset.

// ----- Indicator LEDs -----
pub const LED1: u8 = 0;
pub const LED2: u8 = 1;
pub const LED3: u8 = 3;
pub const LED4: u8 = 4;

// ----- USB switch select -----
pub const SEL_01: u8 = 5;
pub const SEL_23: u8 = 6;
pub const SEL_MSB: u8 = 7;

// ----- Next-channel button -----
pub const BUTTON: u8 = 10; // Digital, active LOW

// ----- Jack (shared, bidirectional) -----
pub const JACK_SLEEVE: u8 = 2;
pub const JACK_RING: u8 = 8;
pub const JACK_TIP: u8 = 20;
