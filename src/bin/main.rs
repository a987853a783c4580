// tucoplex entry point
//
// Boot: logger -> clocks -> pins to idle modes -> scan loop.
// The scan loop is the whole program: one busy-waiting pass per
// iteration (channel outputs, LED dwell, jack sense, debounce), no
// interrupts and no other tasks.

#![no_std]
#![no_main]

use core::convert::Infallible;

use esp_backtrace as _;
use esp_hal::clock::CpuClock;
use esp_hal::delay::Delay;
use log::{info, warn};

use tucoplex::board::{Board, JACK_RC_TAU_US};
use tucoplex_core::{Error, JackLines, ScanTiming, Switchbox};

esp_bootloader_esp_idf::esp_app_desc!();

#[esp_hal::main]
fn main() -> ! {
    esp_println::logger::init_logger_from_env();
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    info!("booting...");

    let board = Board::init(peripherals);
    info!("hardware initialized.");

    let timing = ScanTiming::DEFAULT;
    if let Err(e) = timing.check(JACK_RC_TAU_US) {
        // RC value is a board estimate; keep scanning, just say so
        warn!("scan timing vs rc tau {}us: {}", JACK_RC_TAU_US, e);
    }

    let Err(err) = scan(board, timing);
    panic!("scan loop stopped: {}", err);
}

fn scan(board: Board, timing: ScanTiming) -> Result<Infallible, Error<Infallible>> {
    let jack = JackLines::new(board.jack.sleeve, board.jack.ring, board.jack.tip)?;
    let mut switchbox = Switchbox::new(jack, board.button, board.outputs, Delay::new(), timing)?;
    switchbox.init()?;
    info!("scanning from {}.", switchbox.channel());

    switchbox.run()
}
