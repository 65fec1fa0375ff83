use crate::bit_buffer::BitBuffer;
use crate::error::QrError;
use crate::mode::Mode;
use crate::version::Version;

/// The set of all legal characters in alphanumeric mode, where each
/// character value maps to its index in the string.
pub static ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// A segment of character, binary, or control data in a QR Code symbol.
///
/// Instances are immutable once constructed.
///
/// The mid-level way to create a segment is one of the `make_*` factory
/// functions; the low-level way is to custom-make the bit buffer and call
/// `Segment::new` with appropriate values.
///
/// This struct imposes no length restrictions of its own, but symbols do:
/// even in the most favorable conditions a symbol holds at most 7089
/// characters, and any longer segment is rejected during version selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    // The mode indicator of this segment.
    mode: Mode,

    // The length of the unencoded data: characters for numeric and
    // alphanumeric mode, bytes for byte mode, 0 for ECI mode. Not the same
    // as the bit length.
    num_chars: usize,

    // The data bits of this segment.
    bits: BitBuffer,
}

impl Segment {
    /*---- Static factory functions (mid level) ----*/

    /// Returns a segment representing the given binary data encoded in
    /// byte mode. All byte slices are acceptable.
    pub fn make_bytes(data: &[u8]) -> Self {
        let mut bits = BitBuffer::with_capacity(data.len() * 8);
        for &b in data {
            bits.push_bits(u32::from(b), 8);
        }
        Segment::new(Mode::Byte, data.len(), bits)
    }

    /// Returns a segment representing the given string of decimal digits
    /// encoded in numeric mode.
    ///
    /// Fails with `InvalidArgument` if the string contains a non-digit
    /// character.
    pub fn make_numeric(text: &str) -> Result<Self, QrError> {
        let mut bits = BitBuffer::with_capacity(text.len() * 10 / 3 + 7);
        let mut accum: u32 = 0;
        let mut pending: u32 = 0;
        for c in text.chars() {
            let digit = c.to_digit(10).ok_or_else(|| {
                QrError::InvalidArgument(format!("numeric mode cannot encode {c:?}"))
            })?;
            accum = accum * 10 + digit;
            pending += 1;
            if pending == 3 {
                bits.push_bits(accum, 10);
                accum = 0;
                pending = 0;
            }
        }
        if pending > 0 {
            // 1 or 2 digits remaining
            bits.push_bits(accum, pending * 3 + 1);
        }
        Ok(Segment::new(Mode::Numeric, text.len(), bits))
    }

    /// Returns a segment representing the given text string encoded in
    /// alphanumeric mode.
    ///
    /// The characters allowed are: 0 to 9, A to Z (uppercase only), space,
    /// dollar, percent, asterisk, plus, hyphen, period, slash, colon.
    /// Fails with `InvalidArgument` on any other character.
    pub fn make_alphanumeric(text: &str) -> Result<Self, QrError> {
        let mut bits = BitBuffer::with_capacity(text.len() * 6);
        let mut accum: u32 = 0;
        let mut pending: u32 = 0;
        for c in text.chars() {
            let index = ALPHANUMERIC_CHARSET.find(c).ok_or_else(|| {
                QrError::InvalidArgument(format!("alphanumeric mode cannot encode {c:?}"))
            })?;
            accum = accum * 45 + index as u32;
            pending += 1;
            if pending == 2 {
                bits.push_bits(accum, 11);
                accum = 0;
                pending = 0;
            }
        }
        if pending > 0 {
            // 1 character remaining
            bits.push_bits(accum, 6);
        }
        Ok(Segment::new(Mode::Alphanumeric, text.len(), bits))
    }

    /// Returns a list of zero or more segments representing the given
    /// Unicode text string.
    ///
    /// The single densest mode that covers the whole string is chosen:
    /// numeric, else alphanumeric, else a byte segment of the UTF-8
    /// encoding. No mode switching within the string is attempted.
    pub fn make_segments(text: &str) -> Vec<Self> {
        if text.is_empty() {
            Vec::new()
        } else {
            let seg = Segment::make_numeric(text)
                .or_else(|_| Segment::make_alphanumeric(text))
                .unwrap_or_else(|_| Segment::make_bytes(text.as_bytes()));
            vec![seg]
        }
    }

    /// Returns a segment representing an Extended Channel Interpretation
    /// (ECI) designator with the given assignment value.
    ///
    /// Fails with `InvalidArgument` if the value is 1000000 or greater.
    pub fn make_eci(assign_value: u32) -> Result<Self, QrError> {
        let mut bits = BitBuffer::with_capacity(24);
        if assign_value < (1 << 7) {
            bits.push_bits(assign_value, 8);
        } else if assign_value < (1 << 14) {
            bits.push_bits(0b10, 2);
            bits.push_bits(assign_value, 14);
        } else if assign_value < 1_000_000 {
            bits.push_bits(0b110, 3);
            bits.push_bits(assign_value, 21);
        } else {
            return Err(QrError::InvalidArgument(format!(
                "ECI assignment value {assign_value} out of range"
            )));
        }
        Ok(Segment::new(Mode::Eci, 0, bits))
    }

    /*---- Constructor (low level) ----*/

    /// Creates a segment with the given attributes and data.
    ///
    /// The character count must agree with the mode and the bit buffer
    /// length, but the constraint is not checked.
    pub fn new(mode: Mode, num_chars: usize, bits: BitBuffer) -> Self {
        Self {
            mode,
            num_chars,
            bits,
        }
    }

    /*---- Instance field getters ----*/

    /// Returns the mode indicator of this segment.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the character count of this segment.
    pub fn num_chars(&self) -> usize {
        self.num_chars
    }

    /// Returns the data bits of this segment.
    pub fn bits(&self) -> &BitBuffer {
        &self.bits
    }

    /*---- Other static functions ----*/

    /// Calculates the number of bits needed to encode the given segments
    /// at the given version: a 4-bit mode indicator and a character count
    /// field per segment, plus the payload bits.
    ///
    /// Returns `None` if a segment has too many characters to fit its
    /// count field, or the total exceeds `usize::MAX`.
    pub fn get_total_bits(segs: &[Self], version: Version) -> Option<usize> {
        let mut result: usize = 0;
        for seg in segs {
            let ccbits = seg.mode.char_count_bits(version);
            // ccbits can be as large as 16, but usize can be as small as 16
            if let Some(limit) = 1usize.checked_shl(ccbits) {
                if seg.num_chars >= limit {
                    return None;
                }
            }
            result = result.checked_add(4 + ccbits as usize)?;
            result = result.checked_add(seg.bits.len())?;
        }
        Some(result)
    }

    /// Tests whether the given string can be encoded in numeric mode:
    /// every character is in the range 0 to 9.
    pub fn is_numeric(text: &str) -> bool {
        text.chars().all(|c| c.is_ascii_digit())
    }

    /// Tests whether the given string can be encoded in alphanumeric mode:
    /// every character is a digit, an uppercase letter, or one of
    /// ` $%*+-./:`.
    pub fn is_alphanumeric(text: &str) -> bool {
        text.chars().all(|c| ALPHANUMERIC_CHARSET.contains(c))
    }
}
