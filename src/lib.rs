//! Board support for an MSP430G2553 lab board that is rewired across three hardware "phases".
//! Here are the [`datasheet`] and [`User's guide`] for reference.
//!
//! Each phase assigns the two GPIO ports of the part to different roles:
//!
//! | Phase | Port 1              | Port 2              |
//! |-------|---------------------|---------------------|
//! | 1     | LED array           | push-buttons PB0-3  |
//! | 2     | LCD (EN/RS/RW 5-7)  | push-buttons PB0-2  |
//! | 3     | push-buttons PB0-2  | LCD (EN/RS/RW 5-7)  |
//!
//! A phase is a single [`BoardConfig`] value. Select one at build time with exactly one of the
//! `phase1`, `phase2` or `phase3` features (which exports `ACTIVE`), or at runtime through
//! [`Phase::config`].
//!
//! The register map, pin masks and timing constants are plain `const` data and usable on any
//! target. The [`board`] handles talk to the hardware through [`hw_traits::gpio::PortPeriph`],
//! whose memory-mapped implementation is only meaningful on the MSP430 itself.
//!
//! [`datasheet`]: https://www.ti.com/lit/ds/symlink/msp430g2553.pdf
//! [`User's guide`]: https://www.ti.com/lit/ug/slau144j/slau144j.pdf

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

#[macro_use]
mod fmt;

pub mod board;
pub mod delay;
pub mod hw_traits;
pub mod memory;
pub mod phase;
pub mod pins;
pub mod prelude;
pub mod regs;
pub mod timing;

mod util;

pub use phase::{BoardConfig, ConfigError, InvalidPhase, Phase};

#[cfg(any(
    all(feature = "phase1", feature = "phase2"),
    all(feature = "phase1", feature = "phase3"),
    all(feature = "phase2", feature = "phase3"),
))]
compile_error!("the `phase1`, `phase2` and `phase3` features are mutually exclusive");

/// Configuration of the phase selected through cargo features.
#[cfg(feature = "phase1")]
pub const ACTIVE: &BoardConfig = &phase::PHASE_1;

/// Configuration of the phase selected through cargo features.
#[cfg(feature = "phase2")]
pub const ACTIVE: &BoardConfig = &phase::PHASE_2;

/// Configuration of the phase selected through cargo features.
#[cfg(feature = "phase3")]
pub const ACTIVE: &BoardConfig = &phase::PHASE_3;
