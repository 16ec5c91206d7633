//! Role handles for the two ports of a phase.
//!
//! [`BoardConfig::split`] hands out one handle per role: an LED array or an LCD bus for the
//! display port, and a push-button array for the other port. The handles only wrap register
//! accesses; blinking, debouncing and LCD command sequencing are left to the application.
//!
//! ```ignore
//! let mut parts = unsafe { msp430g2553_bsp::ACTIVE.steal() };
//! parts.init();
//! if let Display::Leds(leds) = &mut parts.display {
//!     leds.write(0x0F);
//! }
//! ```

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin, OutputPin, StatefulOutputPin};

use crate::hw_traits::gpio::{MmioPort, PortPeriph};
use crate::phase::{BoardConfig, DisplayRole};
use crate::pins::{LcdControl, PushButtons, ALL_PINS};
use crate::timing::{LcdTiming, LedTiming};
use crate::util::BitsExt;

/// Interrupt trigger edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low-to-high transition
    Rising,
    /// High-to-low transition
    Falling,
}

/// LED array driving every line of its port.
pub struct LedArray<P: PortPeriph> {
    periph: P,
    timing: LedTiming,
}

impl<P: PortPeriph> LedArray<P> {
    /// Wraps the port the LEDs hang off.
    pub fn new(periph: P, timing: LedTiming) -> Self {
        LedArray { periph, timing }
    }

    /// Makes every line a GPIO output and switches all LEDs off.
    pub fn init(&mut self) {
        self.periph.pxsel_clear(ALL_PINS);
        self.periph.pxout_wr(0);
        self.periph.pxdir_wr(ALL_PINS);
    }

    /// Shows `pattern`, one bit per LED.
    #[inline]
    pub fn write(&mut self, pattern: u8) {
        self.periph.pxout_wr(pattern);
    }

    /// Pattern currently shown.
    #[inline]
    pub fn read(&self) -> u8 {
        self.periph.pxout_rd()
    }

    /// Switches on the LEDs in `mask`.
    #[inline]
    pub fn set(&mut self, mask: u8) {
        self.periph.pxout_set(mask);
    }

    /// Switches off the LEDs in `mask`.
    #[inline]
    pub fn clear(&mut self, mask: u8) {
        self.periph.pxout_clear(mask);
    }

    /// Toggles the LEDs in `mask`.
    #[inline]
    pub fn toggle(&mut self, mask: u8) {
        self.periph.pxout_toggle(mask);
    }

    /// Single LED on line `n`, or `None` if `n` is not a port line.
    pub fn led(&mut self, n: u8) -> Option<Led<'_, P>> {
        (n < 8).then(|| Led {
            periph: &self.periph,
            pin: n,
        })
    }

    /// Blink timing of this phase.
    #[inline]
    pub fn timing(&self) -> LedTiming {
        self.timing
    }

    /// Gives the port back.
    pub fn release(self) -> P {
        self.periph
    }
}

/// One LED of a [`LedArray`].
pub struct Led<'a, P: PortPeriph> {
    periph: &'a P,
    pin: u8,
}

impl<P: PortPeriph> ErrorType for Led<'_, P> {
    type Error = Infallible;
}

impl<P: PortPeriph> OutputPin for Led<'_, P> {
    #[inline]
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.periph.pxout_clear(u8::bit(self.pin));
        Ok(())
    }

    #[inline]
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.periph.pxout_set(u8::bit(self.pin));
        Ok(())
    }
}

impl<P: PortPeriph> StatefulOutputPin for Led<'_, P> {
    #[inline]
    fn is_set_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.periph.pxout_rd().check(self.pin) != 0)
    }

    #[inline]
    fn is_set_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.periph.pxout_rd().check(self.pin) == 0)
    }

    #[inline]
    fn toggle(&mut self) -> Result<(), Self::Error> {
        self.periph.pxout_toggle(u8::bit(self.pin));
        Ok(())
    }
}

/// Push-buttons of a phase.
///
/// Only the lines in [`buttons`](Self::buttons) are ever touched; the rest of the port is left
/// alone.
pub struct ButtonArray<P: PortPeriph> {
    periph: P,
    buttons: PushButtons,
    debounce: u16,
}

impl<P: PortPeriph> ButtonArray<P> {
    /// Wraps the port the `buttons` are wired to.
    pub fn new(periph: P, buttons: PushButtons, debounce: u16) -> Self {
        ButtonArray {
            periph,
            buttons,
            debounce,
        }
    }

    /// Makes the button lines GPIO inputs that interrupt on the falling edge, with no stale
    /// flags pending.
    pub fn init(&mut self) {
        let mask = self.buttons.bits();
        self.periph.pxsel_clear(mask);
        self.periph.pxdir_clear(mask);
        self.periph.pxies_set(mask);
        self.periph.pxifg_clear(mask);
        self.periph.pxie_set(mask);
    }

    /// Pulls the button lines up through the internal resistors.
    pub fn enable_pullups(&mut self) {
        let mask = self.buttons.bits();
        self.periph.pxout_set(mask);
        self.periph.pxren_set(mask);
    }

    /// Buttons wired in this phase.
    #[inline]
    pub fn buttons(&self) -> PushButtons {
        self.buttons
    }

    /// Debounce threshold of this phase.
    #[inline]
    pub fn debounce(&self) -> u16 {
        self.debounce
    }

    /// Buttons whose line currently reads high.
    #[inline]
    pub fn levels(&self) -> PushButtons {
        PushButtons::from_bits_truncate(self.periph.pxin_rd()) & self.buttons
    }

    /// Buttons with a pending interrupt flag.
    #[inline]
    pub fn pending(&self) -> PushButtons {
        PushButtons::from_bits_truncate(self.periph.pxifg_rd()) & self.buttons
    }

    /// Clears the interrupt flags of `buttons`.
    pub fn clear_pending(&mut self, buttons: PushButtons) {
        let mask = (buttons & self.buttons).bits();
        trace!("clear IFG {=u8:#x}", mask);
        self.periph.pxifg_clear(mask);
    }

    /// Selects the edge that raises the interrupt flag of `buttons`.
    pub fn set_edge(&mut self, buttons: PushButtons, edge: Edge) {
        let mask = (buttons & self.buttons).bits();
        match edge {
            Edge::Falling => self.periph.pxies_set(mask),
            Edge::Rising => self.periph.pxies_clear(mask),
        }
    }

    /// Edge currently selected for `button`, or `None` if `button` is not exactly one button
    /// wired in this phase.
    pub fn edge(&self, button: PushButtons) -> Option<Edge> {
        let bits = button.bits();
        if bits.count_ones() != 1 || !self.buttons.contains(button) {
            return None;
        }
        Some(if self.periph.pxies_rd() & bits != 0 {
            Edge::Falling
        } else {
            Edge::Rising
        })
    }

    /// Enables the interrupts of `buttons`.
    #[inline]
    pub fn enable_interrupts(&mut self, buttons: PushButtons) {
        self.periph.pxie_set((buttons & self.buttons).bits());
    }

    /// Disables the interrupts of `buttons`.
    #[inline]
    pub fn disable_interrupts(&mut self, buttons: PushButtons) {
        self.periph.pxie_clear((buttons & self.buttons).bits());
    }

    /// Single button, or `None` if `button` is not exactly one button wired in this phase.
    pub fn button(&self, button: PushButtons) -> Option<Button<'_, P>> {
        let bits = button.bits();
        (bits.count_ones() == 1 && self.buttons.contains(button)).then(|| Button {
            periph: &self.periph,
            pin: bits.trailing_zeros() as u8,
        })
    }

    /// Gives the port back.
    pub fn release(self) -> P {
        self.periph
    }
}

/// One push-button of a [`ButtonArray`].
pub struct Button<'a, P: PortPeriph> {
    periph: &'a P,
    pin: u8,
}

impl<P: PortPeriph> ErrorType for Button<'_, P> {
    type Error = Infallible;
}

impl<P: PortPeriph> InputPin for Button<'_, P> {
    #[inline]
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.periph.pxin_rd().check(self.pin) != 0)
    }

    #[inline]
    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.periph.pxin_rd().check(self.pin) == 0)
    }
}

/// Character LCD on one port. The control lines sit on the upper bits, the data lines on the
/// remaining ones.
pub struct LcdBus<P: PortPeriph> {
    periph: P,
    control: LcdControl,
    timing: LcdTiming,
}

impl<P: PortPeriph> LcdBus<P> {
    /// Wraps the port the LCD is wired to.
    pub fn new(periph: P, control: LcdControl, timing: LcdTiming) -> Self {
        LcdBus {
            periph,
            control,
            timing,
        }
    }

    /// Makes every line a GPIO output driven low.
    pub fn init(&mut self) {
        self.periph.pxsel_clear(ALL_PINS);
        self.periph.pxout_wr(0);
        self.periph.pxdir_wr(ALL_PINS);
    }

    /// Lines that are not control lines.
    #[inline]
    pub fn data_mask(&self) -> u8 {
        !self.control.bits()
    }

    /// Writes the whole port, control lines included.
    #[inline]
    pub fn write(&mut self, bits: u8) {
        self.periph.pxout_wr(bits);
    }

    /// Reads the port input levels.
    #[inline]
    pub fn read(&self) -> u8 {
        self.periph.pxin_rd()
    }

    /// Puts `data` on the data lines, leaving the control lines as they are.
    pub fn write_data(&mut self, data: u8) {
        let mask = self.data_mask();
        let out = self.periph.pxout_rd();
        self.periph.pxout_wr((out & !mask) | (data & mask));
    }

    /// Reads the data lines.
    #[inline]
    pub fn read_data(&self) -> u8 {
        self.periph.pxin_rd() & self.data_mask()
    }

    /// Turns the data lines into inputs, e.g. to poll the busy flag.
    #[inline]
    pub fn data_as_input(&mut self) {
        self.periph.pxdir_clear(self.data_mask());
    }

    /// Turns the data lines back into outputs.
    #[inline]
    pub fn data_as_output(&mut self) {
        self.periph.pxdir_set(self.data_mask());
    }

    /// Drives `lines` high.
    #[inline]
    pub fn set_control(&mut self, lines: LcdControl) {
        self.periph.pxout_set((lines & self.control).bits());
    }

    /// Drives `lines` low.
    #[inline]
    pub fn clear_control(&mut self, lines: LcdControl) {
        self.periph.pxout_clear((lines & self.control).bits());
    }

    /// Control lines currently driven high.
    #[inline]
    pub fn control(&self) -> LcdControl {
        LcdControl::from_bits_truncate(self.periph.pxout_rd()) & self.control
    }

    /// Wait times of this phase.
    #[inline]
    pub fn timing(&self) -> LcdTiming {
        self.timing
    }

    /// Gives the port back.
    pub fn release(self) -> P {
        self.periph
    }
}

/// Handle for the display port, depending on what the phase wires to it.
pub enum Display<P: PortPeriph> {
    /// Phase 1
    Leds(LedArray<P>),
    /// Phases 2 and 3
    Lcd(LcdBus<P>),
}

impl<P: PortPeriph> Display<P> {
    /// Configures the port for its role.
    pub fn init(&mut self) {
        match self {
            Display::Leds(leds) => leds.init(),
            Display::Lcd(lcd) => lcd.init(),
        }
    }
}

/// Role handles of one phase.
pub struct Parts<P: PortPeriph> {
    /// Configuration the handles were built from.
    pub config: BoardConfig,
    /// Display port.
    pub display: Display<P>,
    /// Push-button port.
    pub buttons: ButtonArray<P>,
}

impl<P: PortPeriph> Parts<P> {
    /// Configures both ports for their roles.
    pub fn init(&mut self) {
        debug!("init phase {=u8}", self.config.phase.number());
        self.display.init();
        self.buttons.init();
    }
}

impl BoardConfig {
    /// Builds the role handles from the port accessors. `display` must access the display port
    /// and `buttons` the push-button port.
    pub fn split<P: PortPeriph>(&self, display: P, buttons: P) -> Parts<P> {
        let display = match self.display {
            DisplayRole::Leds { timing, .. } => Display::Leds(LedArray::new(display, timing)),
            DisplayRole::Lcd {
                control, timing, ..
            } => Display::Lcd(LcdBus::new(display, control, timing)),
        };
        Parts {
            config: *self,
            display,
            buttons: ButtonArray::new(buttons, self.buttons.buttons, self.debounce),
        }
    }

    /// Builds the role handles on the memory-mapped ports.
    ///
    /// # Safety
    ///
    /// Same as [`MmioPort::new`], for both ports of the phase. Call it at most once.
    pub unsafe fn steal(&self) -> Parts<MmioPort> {
        debug!(
            "steal P{=u8} (display) and P{=u8} (buttons)",
            self.display.port().number(),
            self.buttons.port.number()
        );
        // SAFETY: forwarded to the caller
        unsafe {
            self.split(
                MmioPort::new(self.display.port()),
                MmioPort::new(self.buttons.port),
            )
        }
    }
}
