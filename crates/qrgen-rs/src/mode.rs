use crate::version::Version;

/// Describes how a segment's data bits are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Decimal digits 0 through 9.
    Numeric,
    /// The 45-character subset: digits, uppercase letters, and
    /// ` $%*+-./:`.
    Alphanumeric,
    /// Raw 8-bit bytes.
    Byte,
    /// Shift JIS double-byte characters. No factory function is provided;
    /// the variant exists so custom-built segments can carry it.
    Kanji,
    /// An Extended Channel Interpretation designator.
    Eci,
}

impl Mode {
    /// Returns the 4-bit mode indicator written before each segment.
    pub fn mode_bits(self) -> u32 {
        use Mode::*;
        match self {
            Numeric => 0x1,
            Alphanumeric => 0x2,
            Byte => 0x4,
            Kanji => 0x8,
            Eci => 0x7,
        }
    }

    /// Returns the bit width of the character count field for a segment in
    /// this mode at the given version. The result is in the range [0, 16].
    pub fn char_count_bits(self, ver: Version) -> u32 {
        use Mode::*;
        // Columns cover versions 1-9, 10-26, and 27-40.
        (match self {
            Numeric => [10, 12, 14],
            Alphanumeric => [9, 11, 13],
            Byte => [8, 16, 16],
            Kanji => [8, 10, 12],
            Eci => [0, 0, 0],
        })[usize::from((ver.value() + 7) / 17)]
    }
}
