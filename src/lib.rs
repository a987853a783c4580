// Firmware for the tucoplex switch box (ESP32-C3)
//
// The scanning logic lives in tucoplex-core; this crate only maps it onto
// the board's GPIOs.

#![no_std]

pub mod board;
pub mod drivers;
