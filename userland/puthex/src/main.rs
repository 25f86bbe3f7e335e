#![no_std]
#![no_main]

use fixture_rt::{Fixture, PutStrLogger};

#[unsafe(no_mangle)]
pub extern "C" fn _start() -> ! {
    // Only fails if something installed a logger before us; run regardless.
    PutStrLogger::init().ok();
    log::info!("puthex fixture, boot_params = {}", fixture_rt::boot::boot_params());

    Fixture::PUTHEX.run()
}
