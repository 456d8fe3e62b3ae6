//! Bit-orable policy flags accepted by every conversion routine.

use bitflags::bitflags;

bitflags! {
    /// Policy flags for a single conversion call.
    ///
    /// Equivalent to `CSTR_FORBID_BOM` / `CSTR_ERROR_ON_INVALID_CODE_POINT`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ConvertFlags: u32 {
        /// Reject input that begins with a byte-order mark instead of
        /// silently consuming it.
        const FORBID_BOM = 1 << 1;
        /// Fail on malformed input instead of substituting `U+FFFD`.
        const ERROR_ON_INVALID_CODE_POINT = 1 << 2;
    }
}

impl ConvertFlags {
    /// True when malformed input should be replaced rather than rejected.
    pub fn replace_on_error(self) -> bool {
        !self.contains(ConvertFlags::ERROR_ON_INVALID_CODE_POINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_bit_orable() {
        let f = ConvertFlags::FORBID_BOM | ConvertFlags::ERROR_ON_INVALID_CODE_POINT;
        assert!(f.contains(ConvertFlags::FORBID_BOM));
        assert!(f.contains(ConvertFlags::ERROR_ON_INVALID_CODE_POINT));
    }

    #[test]
    fn default_is_replace_policy() {
        assert!(ConvertFlags::empty().replace_on_error());
        assert!(!ConvertFlags::ERROR_ON_INVALID_CODE_POINT.replace_on_error());
    }
}
