//! Busy-loop delays driven by the [`timing`](crate::timing) counts.
//!
//! One loop iteration is assumed to take one cycle of [`MCLK_HZ`]. The loop is not trimmed
//! against a timer, so the wait is only as exact as the clock.

use embedded_hal::delay::DelayNs;

use crate::timing::{cycles_from_micros, MCLK_HZ};

#[inline(always)]
fn nop() {
    #[cfg(target_arch = "msp430")]
    msp430::asm::nop();
    #[cfg(not(target_arch = "msp430"))]
    core::hint::spin_loop();
}

/// Delay provider spinning on `nop`.
#[derive(Debug, Default)]
pub struct LoopDelay {
    _private: (),
}

impl LoopDelay {
    /// Creates the delay provider.
    pub const fn new() -> Self {
        LoopDelay { _private: () }
    }

    /// Spins for `count` iterations, e.g. [`DEL_15MS`](crate::timing::DEL_15MS).
    #[inline(never)]
    pub fn spin(&mut self, count: u16) {
        self.spin_cycles(count as u64);
    }

    fn spin_cycles(&mut self, cycles: u64) {
        for _ in 0..cycles {
            nop();
        }
    }

    /// Loop iterations needed for `ns` nanoseconds, rounded up.
    pub const fn cycles_for_ns(ns: u32) -> u64 {
        (ns as u64 * MCLK_HZ as u64).div_ceil(1_000_000_000)
    }
}

impl DelayNs for LoopDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.spin_cycles(Self::cycles_for_ns(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.spin_cycles(cycles_from_micros(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::{DEL_200US, DEL_5MS};

    #[test]
    fn nanoseconds_round_up_to_whole_cycles() {
        assert_eq!(LoopDelay::cycles_for_ns(0), 0);
        assert_eq!(LoopDelay::cycles_for_ns(1), 1);
        assert_eq!(LoopDelay::cycles_for_ns(1_000_000_000), MCLK_HZ as u64);
    }

    #[test]
    fn phase_delays_are_close_to_their_names() {
        let at = |us: u32| cycles_from_micros(us) as i64;
        assert!((LoopDelay::cycles_for_ns(200_000) as i64 - DEL_200US as i64).abs() <= 1);
        assert!((at(5_000) - DEL_5MS as i64).abs() <= 1);
    }

    #[test]
    fn delays_return() {
        let mut delay = LoopDelay::new();
        delay.spin(DEL_200US);
        delay.delay_us(50);
        delay.delay_ns(500);
        delay.delay_ms(1);
    }
}
