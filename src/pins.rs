//! Pin masks.
//!
//! A push-button keeps its bit position in every phase, even when the phase moves the buttons to
//! the other port.

use bitflags::bitflags;

bitflags! {
    /// Push-button pins within the push-button port.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct PushButtons: u8 {
        /// Push-button 0
        const PB0 = 0x01;
        /// Push-button 1
        const PB1 = 0x02;
        /// Push-button 2
        const PB2 = 0x04;
        /// Push-button 3, wired in phase 1 only
        const PB3 = 0x08;
    }
}

bitflags! {
    /// LCD control lines within the LCD port.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LcdControl: u8 {
        /// Enable strobe
        const EN = 0x20;
        /// Register select (0 = instruction, 1 = data)
        const RS = 0x40;
        /// Read/write select (0 = write, 1 = read)
        const RW = 0x80;
    }
}

/// `PB0`
pub const PB0: PushButtons = PushButtons::PB0;
/// `PB1`
pub const PB1: PushButtons = PushButtons::PB1;
/// `PB2`
pub const PB2: PushButtons = PushButtons::PB2;
/// `PB3`
pub const PB3: PushButtons = PushButtons::PB3;

/// `ENctrl`
pub const EN_CTRL: LcdControl = LcdControl::EN;
/// `RSctrl`
pub const RS_CTRL: LcdControl = LcdControl::RS;
/// `RWctrl`
pub const RW_CTRL: LcdControl = LcdControl::RW;

/// Every line of an 8-bit port.
pub const ALL_PINS: u8 = 0xFF;

#[cfg(feature = "defmt")]
impl defmt::Format for PushButtons {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "PushButtons({=u8:#x})", self.bits())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for LcdControl {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "LcdControl({=u8:#x})", self.bits())
    }
}

/// Returns true if `masks` are single bits that share no bit with each other.
pub const fn disjoint_single_bits(masks: &[u8]) -> bool {
    let mut seen = 0u8;
    let mut i = 0;
    while i < masks.len() {
        let m = masks[i];
        if m.count_ones() != 1 || seen & m != 0 {
            return false;
        }
        seen |= m;
        i += 1;
    }
    true
}

const _: () = assert!(disjoint_single_bits(&[
    PB0.bits(),
    PB1.bits(),
    PB2.bits(),
    PB3.bits()
]));
const _: () = assert!(disjoint_single_bits(&[
    EN_CTRL.bits(),
    RS_CTRL.bits(),
    RW_CTRL.bits()
]));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_masks_are_low_nibble() {
        assert_eq!(PushButtons::all().bits(), 0x0F);
        assert_eq!(PB0.bits(), 0x01);
        assert_eq!(PB3.bits(), 0x08);
    }

    #[test]
    fn control_masks_are_high_three_bits() {
        assert_eq!(LcdControl::all().bits(), 0xE0);
        assert!(!LcdControl::all().intersects(LcdControl::from_bits_retain(0x1F)));
    }

    #[test]
    fn overlap_and_multi_bit_masks_are_detected() {
        assert!(disjoint_single_bits(&[0x01, 0x02, 0x80]));
        assert!(!disjoint_single_bits(&[0x01, 0x01]));
        assert!(!disjoint_single_bits(&[0x03]));
        assert!(!disjoint_single_bits(&[0x00]));
        assert!(disjoint_single_bits(&[]));
    }
}
