//! MSP430G2553 port register map.
//!
//! Port 1 and port 2 each own a block of eight byte-wide registers in the 8-bit peripheral
//! window, plus a second function-select register further up.

/// Lowest address of the 8-bit peripheral window.
pub const PERIPH_8BIT_START: u16 = 0x0010;
/// Highest address of the 8-bit peripheral window.
pub const PERIPH_8BIT_END: u16 = 0x00FF;

/// A GPIO port of the MSP430G2553.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Port 1
    P1,
    /// Port 2
    P2,
}

impl Port {
    /// Both ports, in address order.
    pub const ALL: [Port; 2] = [Port::P1, Port::P2];

    /// Base address of the port's register block (its `PxIN` register).
    #[inline]
    pub const fn base(self) -> u16 {
        match self {
            Port::P1 => 0x0020,
            Port::P2 => 0x0028,
        }
    }

    /// Address of the port's `PxSEL2` register, which sits outside the main block.
    #[inline]
    pub const fn sel2(self) -> u16 {
        match self {
            Port::P1 => 0x0041,
            Port::P2 => 0x0042,
        }
    }

    /// Register of this port.
    #[inline]
    pub const fn reg(self, kind: RegisterKind) -> Register {
        Register { port: self, kind }
    }

    /// Port number as written in the datasheet.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Port::P1 => 1,
            Port::P2 => 2,
        }
    }
}

/// The registers every port has.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterKind {
    /// `PxIN`, input levels (read only)
    In,
    /// `PxOUT`, output levels or pull direction
    Out,
    /// `PxDIR`, direction (1 = output)
    Dir,
    /// `PxIFG`, interrupt flags
    Ifg,
    /// `PxIES`, interrupt edge select (1 = falling edge)
    Ies,
    /// `PxIE`, interrupt enable
    Ie,
    /// `PxSEL`, function select
    Sel,
    /// `PxREN`, pull resistor enable
    Ren,
    /// `PxSEL2`, second function select
    Sel2,
}

impl RegisterKind {
    /// All register kinds, in address order.
    pub const ALL: [RegisterKind; 9] = [
        RegisterKind::In,
        RegisterKind::Out,
        RegisterKind::Dir,
        RegisterKind::Ifg,
        RegisterKind::Ies,
        RegisterKind::Ie,
        RegisterKind::Sel,
        RegisterKind::Ren,
        RegisterKind::Sel2,
    ];

    /// `PxIN` is the only register that cannot be written.
    #[inline]
    pub const fn is_writable(self) -> bool {
        !matches!(self, RegisterKind::In)
    }
}

/// A byte-wide memory-mapped port register.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Register {
    /// Port that owns the register.
    pub port: Port,
    /// Which of the port's registers.
    pub kind: RegisterKind,
}

impl Register {
    /// Memory-mapped address of the register.
    pub const fn address(self) -> u16 {
        let base = self.port.base();
        match self.kind {
            RegisterKind::In => base,
            RegisterKind::Out => base + 1,
            RegisterKind::Dir => base + 2,
            RegisterKind::Ifg => base + 3,
            RegisterKind::Ies => base + 4,
            RegisterKind::Ie => base + 5,
            RegisterKind::Sel => base + 6,
            RegisterKind::Ren => base + 7,
            RegisterKind::Sel2 => self.port.sel2(),
        }
    }

    /// Raw pointer to the register.
    #[inline(always)]
    pub fn ptr(self) -> *mut u8 {
        self.address() as usize as *mut u8
    }
}

/// `P1IN`
pub const P1IN: Register = Port::P1.reg(RegisterKind::In);
/// `P1OUT`
pub const P1OUT: Register = Port::P1.reg(RegisterKind::Out);
/// `P1DIR`
pub const P1DIR: Register = Port::P1.reg(RegisterKind::Dir);
/// `P1IFG`
pub const P1IFG: Register = Port::P1.reg(RegisterKind::Ifg);
/// `P1IES`
pub const P1IES: Register = Port::P1.reg(RegisterKind::Ies);
/// `P1IE`
pub const P1IE: Register = Port::P1.reg(RegisterKind::Ie);
/// `P1SEL`
pub const P1SEL: Register = Port::P1.reg(RegisterKind::Sel);
/// `P1REN`
pub const P1REN: Register = Port::P1.reg(RegisterKind::Ren);
/// `P1SEL2`
pub const P1SEL2: Register = Port::P1.reg(RegisterKind::Sel2);

/// `P2IN`
pub const P2IN: Register = Port::P2.reg(RegisterKind::In);
/// `P2OUT`
pub const P2OUT: Register = Port::P2.reg(RegisterKind::Out);
/// `P2DIR`
pub const P2DIR: Register = Port::P2.reg(RegisterKind::Dir);
/// `P2IFG`
pub const P2IFG: Register = Port::P2.reg(RegisterKind::Ifg);
/// `P2IES`
pub const P2IES: Register = Port::P2.reg(RegisterKind::Ies);
/// `P2IE`
pub const P2IE: Register = Port::P2.reg(RegisterKind::Ie);
/// `P2SEL`
pub const P2SEL: Register = Port::P2.reg(RegisterKind::Sel);
/// `P2REN`
pub const P2REN: Register = Port::P2.reg(RegisterKind::Ren);
/// `P2SEL2`
pub const P2SEL2: Register = Port::P2.reg(RegisterKind::Sel2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_match_datasheet() {
        let expected = [
            (P1IN, 0x20),
            (P1OUT, 0x21),
            (P1DIR, 0x22),
            (P1IFG, 0x23),
            (P1IES, 0x24),
            (P1IE, 0x25),
            (P1SEL, 0x26),
            (P1REN, 0x27),
            (P1SEL2, 0x41),
            (P2IN, 0x28),
            (P2OUT, 0x29),
            (P2DIR, 0x2A),
            (P2IFG, 0x2B),
            (P2IES, 0x2C),
            (P2IE, 0x2D),
            (P2SEL, 0x2E),
            (P2REN, 0x2F),
            (P2SEL2, 0x42),
        ];
        for (reg, addr) in expected {
            assert_eq!(reg.address(), addr, "{:?}", reg);
        }
    }

    #[test]
    fn every_register_is_distinct_and_in_the_8bit_window() {
        let mut seen = std::collections::HashSet::new();
        for port in Port::ALL {
            for kind in RegisterKind::ALL {
                let addr = port.reg(kind).address();
                assert!((PERIPH_8BIT_START..=PERIPH_8BIT_END).contains(&addr));
                assert!(seen.insert(addr), "{:#06x} mapped twice", addr);
            }
        }
        assert_eq!(seen.len(), 18);
    }

    #[test]
    fn only_input_register_is_read_only() {
        let read_only: Vec<_> = RegisterKind::ALL
            .iter()
            .filter(|k| !k.is_writable())
            .collect();
        assert_eq!(read_only, [&RegisterKind::In]);
    }
}
