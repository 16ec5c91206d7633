//! Per-phase board configuration.
//!
//! Each hardware phase is one [`BoardConfig`] value. The values only differ in which port plays
//! which role and in the timing constants that go with the display; the names an application
//! uses for its registers (`PBArrPort`, `LCDArrPortOut`, ...) stay the same across phases and
//! are resolved through [`BoardConfig::aliases`].

use core::fmt;

use crate::memory::MemoryLayout;
use crate::pins::{LcdControl, PushButtons};
use crate::regs::{Port, Register, RegisterKind};
use crate::timing::{LcdTiming, LedTiming, DEBOUNCE_VAL};

/// Hardware phase of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// LED array on P1, four push-buttons on P2
    One,
    /// LCD on P1, three push-buttons on P2
    Two,
    /// LCD on P2, three push-buttons on P1
    Three,
}

impl Phase {
    /// Every phase, in order.
    pub const ALL: [Phase; 3] = [Phase::One, Phase::Two, Phase::Three];

    /// Phase number as printed on the board revision.
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Phase::One => 1,
            Phase::Two => 2,
            Phase::Three => 3,
        }
    }

    /// Configuration of this phase.
    #[inline]
    pub const fn config(self) -> &'static BoardConfig {
        match self {
            Phase::One => &PHASE_1,
            Phase::Two => &PHASE_2,
            Phase::Three => &PHASE_3,
        }
    }
}

/// Phase number outside `1..=3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidPhase(pub u8);

impl fmt::Display for InvalidPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no board phase {}", self.0)
    }
}

impl core::error::Error for InvalidPhase {}

impl TryFrom<u8> for Phase {
    type Error = InvalidPhase;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Phase::One),
            2 => Ok(Phase::Two),
            3 => Ok(Phase::Three),
            _ => Err(InvalidPhase(n)),
        }
    }
}

/// What the display port drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayRole {
    /// One LED per port line.
    Leds {
        /// Port the LEDs hang off.
        port: Port,
        /// Blink timing.
        timing: LedTiming,
    },
    /// Character LCD, control lines on the upper bits of the same port.
    Lcd {
        /// Port wired to the LCD.
        port: Port,
        /// Control lines in use.
        control: LcdControl,
        /// LCD wait times.
        timing: LcdTiming,
    },
}

impl DisplayRole {
    /// Port the display is wired to.
    #[inline]
    pub const fn port(&self) -> Port {
        match *self {
            DisplayRole::Leds { port, .. } | DisplayRole::Lcd { port, .. } => port,
        }
    }

    /// `true` for the LCD phases.
    #[inline]
    pub const fn is_lcd(&self) -> bool {
        matches!(self, DisplayRole::Lcd { .. })
    }
}

/// Push-button wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonRole {
    /// Port the buttons are wired to.
    pub port: Port,
    /// Buttons present in this phase.
    pub buttons: PushButtons,
}

/// Configuration of one hardware phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Phase this configuration describes.
    pub phase: Phase,
    /// Memory layout of the image.
    pub memory: MemoryLayout,
    /// Push-button debounce threshold.
    pub debounce: u16,
    /// Display wiring.
    pub display: DisplayRole,
    /// Push-button wiring.
    pub buttons: ButtonRole,
}

/// Phase 1: LED array on P1, PB0-PB3 on P2.
pub const PHASE_1: BoardConfig = BoardConfig {
    phase: Phase::One,
    memory: MemoryLayout::DEFAULT,
    debounce: DEBOUNCE_VAL,
    display: DisplayRole::Leds {
        port: Port::P1,
        timing: LedTiming::DEFAULT,
    },
    buttons: ButtonRole {
        port: Port::P2,
        buttons: PushButtons::PB0
            .union(PushButtons::PB1)
            .union(PushButtons::PB2)
            .union(PushButtons::PB3),
    },
};

/// Phase 2: LCD on P1, PB0-PB2 on P2.
pub const PHASE_2: BoardConfig = BoardConfig {
    phase: Phase::Two,
    memory: MemoryLayout::DEFAULT,
    debounce: DEBOUNCE_VAL,
    display: DisplayRole::Lcd {
        port: Port::P1,
        control: LcdControl::all(),
        timing: LcdTiming::DEFAULT,
    },
    buttons: ButtonRole {
        port: Port::P2,
        buttons: PushButtons::PB0
            .union(PushButtons::PB1)
            .union(PushButtons::PB2),
    },
};

/// Phase 3: phase 2 with the ports swapped, LCD on P2, PB0-PB2 on P1.
pub const PHASE_3: BoardConfig = BoardConfig {
    phase: Phase::Three,
    display: DisplayRole::Lcd {
        port: Port::P2,
        control: LcdControl::all(),
        timing: LcdTiming::DEFAULT,
    },
    buttons: ButtonRole {
        port: Port::P1,
        buttons: PHASE_2.buttons.buttons,
    },
    ..PHASE_2
};

const _: () = assert!(PHASE_1.validate().is_ok());
const _: () = assert!(PHASE_2.validate().is_ok());
const _: () = assert!(PHASE_3.validate().is_ok());

/// Inconsistent [`BoardConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Display and push-buttons are wired to the same port.
    SharedPort(Port),
    /// No push-button is wired.
    NoButtons,
    /// The LCD lacks a control line it cannot work without.
    MissingControlLine(LcdControl),
    /// The memory segments are out of order.
    BadMemoryLayout,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SharedPort(port) => {
                write!(f, "display and push-buttons both on P{}", port.number())
            }
            ConfigError::NoButtons => f.write_str("no push-buttons wired"),
            ConfigError::MissingControlLine(line) => {
                write!(f, "LCD control line {:#04x} missing", line.bits())
            }
            ConfigError::BadMemoryLayout => f.write_str("memory segments out of order"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// LCD lines the display cannot be driven without.
const REQUIRED_CONTROL: LcdControl = LcdControl::EN.union(LcdControl::RS);

impl BoardConfig {
    /// Checks that the wiring described by this configuration is consistent.
    ///
    /// The built-in phases are checked at compile time.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        let display = self.display.port();
        if display as u8 == self.buttons.port as u8 {
            return Err(ConfigError::SharedPort(display));
        }
        if self.buttons.buttons.is_empty() {
            return Err(ConfigError::NoButtons);
        }
        if let DisplayRole::Lcd { control, .. } = self.display {
            if !control.contains(REQUIRED_CONTROL) {
                return Err(ConfigError::MissingControlLine(
                    REQUIRED_CONTROL.difference(control),
                ));
            }
        }
        if !self.memory.is_ordered() {
            return Err(ConfigError::BadMemoryLayout);
        }
        Ok(())
    }

    /// `PBArrPort`, push-button input levels.
    #[inline]
    pub const fn pb_arr_port(&self) -> Register {
        self.buttons.port.reg(RegisterKind::In)
    }

    /// `PBArrPortOut`, push-button output / pull direction.
    #[inline]
    pub const fn pb_arr_port_out(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Out)
    }

    /// `PBTypeOfTriger`, push-button interrupt edge select.
    #[inline]
    pub const fn pb_trigger_edge(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Ies)
    }

    /// `PBEnableIE`, push-button interrupt enable.
    #[inline]
    pub const fn pb_enable_ie(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Ie)
    }

    /// `PBFlugPend`, push-button interrupt flags.
    #[inline]
    pub const fn pb_flag_pending(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Ifg)
    }

    /// `PBArrPortDir`, push-button direction.
    #[inline]
    pub const fn pb_arr_port_dir(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Dir)
    }

    /// `PBArrPortsel`, push-button function select.
    #[inline]
    pub const fn pb_arr_port_sel(&self) -> Register {
        self.buttons.port.reg(RegisterKind::Sel)
    }

    /// `LedsArrPort` or `LCDArrPortOut`, display output register.
    #[inline]
    pub const fn display_out(&self) -> Register {
        self.display.port().reg(RegisterKind::Out)
    }

    /// `LedsArrDir` or `LCDArrPortDir`, display direction register.
    #[inline]
    pub const fn display_dir(&self) -> Register {
        self.display.port().reg(RegisterKind::Dir)
    }

    /// `LedsArrSel` or `LCDArrPortsel`, display function select register.
    #[inline]
    pub const fn display_sel(&self) -> Register {
        self.display.port().reg(RegisterKind::Sel)
    }

    /// `LCDArrPort`, LCD input register. The LED phase has no such alias.
    #[inline]
    pub const fn display_in(&self) -> Option<Register> {
        match self.display {
            DisplayRole::Lcd { port, .. } => Some(port.reg(RegisterKind::In)),
            DisplayRole::Leds { .. } => None,
        }
    }

    /// Every named register alias of the phase, in header order.
    pub fn aliases(&self) -> RegisterAliases {
        let mut list = RegisterAliases::new();
        match self.display {
            DisplayRole::Leds { .. } => {
                list.push("LedsArrPort", self.display_out());
                list.push("LedsArrDir", self.display_dir());
                list.push("LedsArrSel", self.display_sel());
            }
            DisplayRole::Lcd { port, .. } => {
                list.push("LCDArrPort", port.reg(RegisterKind::In));
                list.push("LCDArrPortOut", self.display_out());
                list.push("LCDArrPortDir", self.display_dir());
                list.push("LCDArrPortsel", self.display_sel());
            }
        }
        list.push("PBArrPort", self.pb_arr_port());
        list.push("PBArrPortOut", self.pb_arr_port_out());
        list.push("PBTypeOfTriger", self.pb_trigger_edge());
        list.push("PBEnableIE", self.pb_enable_ie());
        list.push("PBFlugPend", self.pb_flag_pending());
        list.push("PBArrPortDir", self.pb_arr_port_dir());
        list.push("PBArrPortsel", self.pb_arr_port_sel());
        list
    }
}

/// A symbolic name bound to a port register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RegisterAlias {
    /// Name the application uses.
    pub name: &'static str,
    /// Register the name stands for.
    pub register: Register,
}

impl RegisterAlias {
    /// Address the alias resolves to.
    #[inline]
    pub const fn address(&self) -> u16 {
        self.register.address()
    }
}

/// Most aliases a single phase defines (LCD port plus push-button port).
pub const MAX_ALIASES: usize = 11;

/// Fixed-capacity list of the register aliases of one phase.
#[derive(Clone, Copy, Debug)]
pub struct RegisterAliases {
    items: [RegisterAlias; MAX_ALIASES],
    len: usize,
}

impl RegisterAliases {
    const EMPTY: RegisterAlias = RegisterAlias {
        name: "",
        register: Port::P1.reg(RegisterKind::In),
    };

    fn new() -> Self {
        Self {
            items: [Self::EMPTY; MAX_ALIASES],
            len: 0,
        }
    }

    fn push(&mut self, name: &'static str, register: Register) {
        self.items[self.len] = RegisterAlias { name, register };
        self.len += 1;
    }

    /// Aliases as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[RegisterAlias] {
        &self.items[..self.len]
    }

    /// Iterator over the aliases.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, RegisterAlias> {
        self.as_slice().iter()
    }

    /// Number of aliases.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// `true` if there are no aliases.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Looks up an alias by name.
    pub fn get(&self, name: &str) -> Option<Register> {
        self.iter().find(|a| a.name == name).map(|a| a.register)
    }
}

impl<'a> IntoIterator for &'a RegisterAliases {
    type Item = &'a RegisterAlias;
    type IntoIter = core::slice::Iter<'a, RegisterAlias>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
