pub(crate) trait BitsExt {
    fn bit(shift: u8) -> Self;
    fn check(self, shift: u8) -> Self;
}

impl BitsExt for u8 {
    #[inline(always)]
    fn bit(shift: u8) -> Self {
        1 << shift
    }

    #[inline(always)]
    fn check(self, shift: u8) -> Self {
        self & (1 << shift)
    }
}
