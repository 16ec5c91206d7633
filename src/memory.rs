//! Memory layout of the board image.
//!
//! These values are the same in every phase.

/// Start of the RAM data segment.
pub const DATA_SEG_START: u16 = 0x0200;
/// Initial top of stack. The stack grows down from here into the data segment.
pub const STACK_TOS_START: u16 = 0x0400;
/// Start of the flash code segment.
pub const CODE_SEG_START: u16 = 0xC000;

/// Memory layout of one board image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MemoryLayout {
    /// Start of the RAM data segment.
    pub data_seg_start: u16,
    /// Initial top of stack.
    pub stack_tos_start: u16,
    /// Start of the flash code segment.
    pub code_seg_start: u16,
}

impl MemoryLayout {
    /// Layout used by every phase of the board.
    pub const DEFAULT: Self = Self {
        data_seg_start: DATA_SEG_START,
        stack_tos_start: STACK_TOS_START,
        code_seg_start: CODE_SEG_START,
    };

    /// Bytes of RAM between the data segment start and the initial top of stack.
    #[inline]
    pub const fn ram_len(&self) -> u16 {
        self.stack_tos_start.saturating_sub(self.data_seg_start)
    }

    /// Data segment below the stack top, stack top below the code segment.
    #[inline]
    pub const fn is_ordered(&self) -> bool {
        self.data_seg_start < self.stack_tos_start && self.stack_tos_start < self.code_seg_start
    }
}

const _: () = assert!(MemoryLayout::DEFAULT.is_ordered());
