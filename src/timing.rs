//! Shared millisecond tick source backing the blocking delays.
//!
//! The counter is written from a periodic 1 ms interrupt or timer callback
//! and read from normal execution context, so both sides go through an
//! atomic rather than a plain load that the compiler may cache.

use core::hint;
use core::sync::atomic::{AtomicU32, Ordering};
use embedded_hal::blocking::delay::DelayMs;

static COUNTER: AtomicU32 = AtomicU32::new(0);

/// Resets the tick counter; call once before the 1 ms tick source starts
pub fn initialise() {
    COUNTER.store(0, Ordering::Release);
}

/// Advances the counter by one millisecond; the producer side,
/// called from the tick interrupt
pub fn tick() {
    COUNTER.fetch_add(1, Ordering::Release);
}

/// Milliseconds counted since `initialise`
pub fn millis() -> u32 {
    COUNTER.load(Ordering::Acquire)
}

/// Busy waits until the live counter has advanced by `ms` from the value
/// it held at call time. Wrap safe, each iteration re-reads the counter.
pub fn delay(ms: u32) {
    let start = millis();
    while millis().wrapping_sub(start) < ms {
        hint::spin_loop();
    }
}

/// Delay provider over the shared tick counter
#[derive(Default, Copy, Clone, Debug)]
pub struct TickDelay;

impl DelayMs<u32> for TickDelay {
    fn delay_ms(&mut self, ms: u32) {
        delay(ms);
    }
}

impl DelayMs<u16> for TickDelay {
    fn delay_ms(&mut self, ms: u16) {
        delay(ms as u32);
    }
}

impl DelayMs<u8> for TickDelay {
    fn delay_ms(&mut self, ms: u8) {
        delay(ms as u32);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn delay_waits_for_the_live_counter() {
        let before = millis();

        let producer = thread::spawn(|| {
            for _ in 0..20 {
                tick();
                thread::sleep(Duration::from_millis(1));
            }
        });

        delay(5);
        assert!(millis() >= before + 5);

        producer.join().unwrap();
        assert!(millis() >= before + 20);
    }
}
