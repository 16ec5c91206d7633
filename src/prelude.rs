//! Prelude

pub use crate::board::{Display, Edge, Parts};
pub use crate::hw_traits::gpio::PortPeriph as _msp430g2553_bsp_PortPeriph;
pub use crate::phase::{BoardConfig, Phase};
pub use crate::pins::{LcdControl, PushButtons};
pub use embedded_hal::delay::DelayNs as _msp430g2553_bsp_DelayNs;
pub use embedded_hal::digital::{
    InputPin as _msp430g2553_bsp_InputPin, OutputPin as _msp430g2553_bsp_OutputPin,
    StatefulOutputPin as _msp430g2553_bsp_StatefulOutputPin,
};
