//! Register-level GPIO port access.

use crate::regs::{Port, RegisterKind};
use core::ptr;

/// Byte-wide access to the registers of one GPIO port.
///
/// [`MmioPort`] is the hardware implementation. Anything else implementing this trait (a
/// simulated port, a test double) can drive the [`board`](crate::board) handles just the same.
pub trait PortPeriph {
    /// Reads `PxIN`.
    fn pxin_rd(&self) -> u8;

    /// Reads `PxOUT`.
    fn pxout_rd(&self) -> u8;
    /// Writes `PxOUT`.
    fn pxout_wr(&self, bits: u8);
    /// Sets bits in `PxOUT`.
    fn pxout_set(&self, bits: u8);
    /// Clears bits in `PxOUT`.
    fn pxout_clear(&self, bits: u8);
    /// Toggles bits in `PxOUT`.
    fn pxout_toggle(&self, bits: u8);

    /// Reads `PxDIR`.
    fn pxdir_rd(&self) -> u8;
    /// Writes `PxDIR`.
    fn pxdir_wr(&self, bits: u8);
    /// Sets bits in `PxDIR`.
    fn pxdir_set(&self, bits: u8);
    /// Clears bits in `PxDIR`.
    fn pxdir_clear(&self, bits: u8);

    /// Reads `PxSEL`.
    fn pxsel_rd(&self) -> u8;
    /// Writes `PxSEL`.
    fn pxsel_wr(&self, bits: u8);
    /// Sets bits in `PxSEL`.
    fn pxsel_set(&self, bits: u8);
    /// Clears bits in `PxSEL`.
    fn pxsel_clear(&self, bits: u8);

    /// Reads `PxREN`.
    fn pxren_rd(&self) -> u8;
    /// Writes `PxREN`.
    fn pxren_wr(&self, bits: u8);
    /// Sets bits in `PxREN`.
    fn pxren_set(&self, bits: u8);
    /// Clears bits in `PxREN`.
    fn pxren_clear(&self, bits: u8);

    /// Reads `PxIES`.
    fn pxies_rd(&self) -> u8;
    /// Writes `PxIES`.
    fn pxies_wr(&self, bits: u8);
    /// Sets bits in `PxIES`.
    fn pxies_set(&self, bits: u8);
    /// Clears bits in `PxIES`.
    fn pxies_clear(&self, bits: u8);

    /// Reads `PxIE`.
    fn pxie_rd(&self) -> u8;
    /// Writes `PxIE`.
    fn pxie_wr(&self, bits: u8);
    /// Sets bits in `PxIE`.
    fn pxie_set(&self, bits: u8);
    /// Clears bits in `PxIE`.
    fn pxie_clear(&self, bits: u8);

    /// Reads `PxIFG`.
    fn pxifg_rd(&self) -> u8;
    /// Writes `PxIFG`.
    fn pxifg_wr(&self, bits: u8);
    /// Sets bits in `PxIFG`.
    fn pxifg_set(&self, bits: u8);
    /// Clears bits in `PxIFG`.
    fn pxifg_clear(&self, bits: u8);
}

/// Memory-mapped registers of a real port.
#[derive(Debug)]
pub struct MmioPort {
    port: Port,
}

impl MmioPort {
    /// Handle to the registers of `port`.
    ///
    /// # Safety
    ///
    /// Must run on an MSP430G2553, and nothing else may use the port's registers while the
    /// handle is alive.
    #[inline(always)]
    pub const unsafe fn new(port: Port) -> Self {
        MmioPort { port }
    }

    /// Port the handle accesses.
    #[inline(always)]
    pub const fn port(&self) -> Port {
        self.port
    }

    #[inline(always)]
    fn read(&self, kind: RegisterKind) -> u8 {
        // SAFETY: `new` guarantees this is a port register of the running part
        unsafe { ptr::read_volatile(self.port.reg(kind).ptr()) }
    }

    #[inline(always)]
    fn write(&self, kind: RegisterKind, bits: u8) {
        // SAFETY: `new` guarantees this is a port register of the running part
        unsafe { ptr::write_volatile(self.port.reg(kind).ptr(), bits) }
    }
}

macro_rules! reg_methods {
    ($kind:ident, $rd:ident, $wr:ident, $set:ident, $clear:ident) => {
        #[inline(always)]
        fn $rd(&self) -> u8 {
            self.read(RegisterKind::$kind)
        }

        #[inline(always)]
        fn $wr(&self, bits: u8) {
            self.write(RegisterKind::$kind, bits)
        }

        #[inline(always)]
        fn $set(&self, bits: u8) {
            self.write(RegisterKind::$kind, self.read(RegisterKind::$kind) | bits)
        }

        #[inline(always)]
        fn $clear(&self, bits: u8) {
            self.write(RegisterKind::$kind, self.read(RegisterKind::$kind) & !bits)
        }
    };
}

impl PortPeriph for MmioPort {
    #[inline(always)]
    fn pxin_rd(&self) -> u8 {
        self.read(RegisterKind::In)
    }

    #[inline(always)]
    fn pxout_toggle(&self, bits: u8) {
        self.write(RegisterKind::Out, self.read(RegisterKind::Out) ^ bits)
    }

    reg_methods!(Out, pxout_rd, pxout_wr, pxout_set, pxout_clear);
    reg_methods!(Dir, pxdir_rd, pxdir_wr, pxdir_set, pxdir_clear);
    reg_methods!(Sel, pxsel_rd, pxsel_wr, pxsel_set, pxsel_clear);
    reg_methods!(Ren, pxren_rd, pxren_wr, pxren_set, pxren_clear);
    reg_methods!(Ies, pxies_rd, pxies_wr, pxies_set, pxies_clear);
    reg_methods!(Ie, pxie_rd, pxie_wr, pxie_set, pxie_clear);
    reg_methods!(Ifg, pxifg_rd, pxifg_wr, pxifg_set, pxifg_clear);
}
