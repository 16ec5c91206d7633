//! Timing constants.
//!
//! The delay values are busy-loop iteration counts, calibrated for a main clock of 2^20 Hz with
//! one iteration per clock cycle. Nothing here measures or recalibrates them at runtime.

/// Main clock frequency the delay counts assume (the DCO default of roughly 1 MHz).
pub const MCLK_HZ: u32 = 1_048_576;

/// Push-button debounce threshold.
pub const DEBOUNCE_VAL: u16 = 250;

/// "On" share of the LED duty cycle (70 % of a 170-count period). Phase 1 only.
pub const DELAY_70: u16 = 119;
/// "Off" share of the LED duty cycle (30 % of a 170-count period). Phase 1 only.
pub const DELAY_30: u16 = 51;
/// Tick count for the 1 Hz LED rate. Phase 1 only.
pub const ONE_HZ: u16 = 5120;
/// Tick count for the 2 Hz LED rate. Phase 1 only.
pub const TWO_HZ: u16 = 10240;

/// About 200 µs. Phases 2 and 3.
pub const DEL_200US: u16 = 210;
/// About 15 ms, the LCD power-on wait. Phases 2 and 3.
pub const DEL_15MS: u16 = 15728;
/// About 5 ms. Phases 2 and 3.
pub const DEL_5MS: u16 = 5242;

/// Loop iterations that take `us` microseconds at [`MCLK_HZ`], rounded down.
#[inline]
pub const fn cycles_from_micros(us: u32) -> u64 {
    us as u64 * MCLK_HZ as u64 / 1_000_000
}

/// Timing constants of the LED-array phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedTiming {
    /// "On" part of the duty cycle, in loop iterations.
    pub delay_70: u16,
    /// "Off" part of the duty cycle, in loop iterations.
    pub delay_30: u16,
    /// Tick count for the 1 Hz rate.
    pub one_hz: u16,
    /// Tick count for the 2 Hz rate.
    pub two_hz: u16,
}

impl LedTiming {
    /// Values used by phase 1.
    pub const DEFAULT: Self = Self {
        delay_70: DELAY_70,
        delay_30: DELAY_30,
        one_hz: ONE_HZ,
        two_hz: TWO_HZ,
    };

    /// Length of one duty-cycle period in loop iterations.
    #[inline]
    pub const fn period(&self) -> u32 {
        self.delay_70 as u32 + self.delay_30 as u32
    }
}

/// Timing constants of the LCD phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LcdTiming {
    /// About 200 µs, in loop iterations.
    pub del_200us: u16,
    /// About 15 ms, in loop iterations.
    pub del_15ms: u16,
    /// About 5 ms, in loop iterations.
    pub del_5ms: u16,
}

impl LcdTiming {
    /// Values used by phases 2 and 3.
    pub const DEFAULT: Self = Self {
        del_200us: DEL_200US,
        del_15ms: DEL_15MS,
        del_5ms: DEL_5MS,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(count: u16, us: u32) -> bool {
        (count as i64 - cycles_from_micros(us) as i64).abs() <= 1
    }

    #[test]
    fn lcd_delays_match_the_clock() {
        assert!(within_one(DEL_200US, 200));
        assert!(within_one(DEL_15MS, 15_000));
        assert!(within_one(DEL_5MS, 5_000));
    }

    #[test]
    fn duty_cycle_splits_seventy_thirty() {
        let t = LedTiming::DEFAULT;
        assert_eq!(t.period(), 170);
        assert_eq!(t.delay_70 as u32 * 10, t.period() * 7);
        assert_eq!(t.delay_30 as u32 * 10, t.period() * 3);
    }

    #[test]
    fn rate_ticks_keep_their_two_to_one_ratio() {
        assert_eq!(TWO_HZ, 2 * ONE_HZ);
    }

    #[test]
    fn one_second_is_mclk_cycles() {
        assert_eq!(cycles_from_micros(1_000_000), MCLK_HZ as u64);
        assert_eq!(cycles_from_micros(0), 0);
    }

    #[test]
    fn long_waits_do_not_wrap() {
        assert_eq!(cycles_from_micros(4_100_000_000), 4_299_161_600);
        assert_eq!(cycles_from_micros(u32::MAX), 4_503_599_626);
    }
}
