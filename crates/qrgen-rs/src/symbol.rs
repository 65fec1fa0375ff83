use crate::ecc_level::EccLevel;
use crate::encoder;
use crate::error::QrError;
use crate::interleave;
use crate::mask::Mask;
use crate::matrix::Matrix;
use crate::penalty;
use crate::segment::Segment;
use crate::svg;
use crate::version::Version;

/// A QR Code Model 2 symbol: an immutable square grid of dark and light
/// modules, as defined by ISO/IEC 18004.
///
/// All forty versions (sizes), all four error correction levels, and four
/// character encoding modes are supported.
///
/// Ways to create a symbol:
///
/// - High level: pass the payload to `QrSymbol::encode_text()` or
///   `QrSymbol::encode_binary()`.
/// - Mid level: build the segment list yourself and call
///   `QrSymbol::encode_segments()` or `QrSymbol::encode_segments_advanced()`.
/// - Low level: supply complete data codewords (segment headers and padding
///   included, error correction excluded) to `QrSymbol::encode_codewords()`.
///
/// Every way requires the desired error correction level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrSymbol {
    // The version number, between 1 and 40 (inclusive).
    version: Version,

    // The width and height measured in modules; equal to version * 4 + 17.
    size: i32,

    // The error correction level actually used, which the encoder may have
    // boosted above the request.
    ecl: EccLevel,

    // The mask pattern applied to the grid. Automatic selection still ends
    // with a concrete value in [0, 7].
    mask: Mask,

    // The module grid, row-major; true means dark.
    modules: Vec<bool>,
}

impl QrSymbol {
    /*---- Encoding entry points (high level) ----*/

    /// Encodes the given Unicode text string at the given error correction
    /// level.
    ///
    /// The smallest version that fits is chosen automatically, and the
    /// level may be boosted above `ecl` when that costs no size. Fails
    /// with `DataTooLong` if the text exceeds the version 40 capacity.
    pub fn encode_text(text: &str, ecl: EccLevel) -> Result<Self, QrError> {
        let segs = Segment::make_segments(text);
        Self::encode_segments(&segs, ecl)
    }

    /// Encodes the given binary data at the given error correction level,
    /// always in byte mode.
    ///
    /// At most 2953 bytes fit (at `EccLevel::Low`). The smallest version
    /// that fits is chosen automatically, and the level may be boosted.
    pub fn encode_binary(data: &[u8], ecl: EccLevel) -> Result<Self, QrError> {
        let segs = [Segment::make_bytes(data)];
        Self::encode_segments(&segs, ecl)
    }

    /*---- Encoding entry points (mid level) ----*/

    /// Encodes the given segments at the given error correction level,
    /// searching all versions and auto-selecting the mask.
    ///
    /// Custom segment lists can switch modes to encode mixed text in less
    /// space than the high-level functions.
    pub fn encode_segments(segs: &[Segment], ecl: EccLevel) -> Result<Self, QrError> {
        Self::encode_segments_advanced(segs, ecl, Version::MIN, Version::MAX, None, true)
    }

    /// Encodes the given segments with full control over the parameters.
    ///
    /// The smallest version in `[min_version, max_version]` that fits is
    /// chosen; outside that range the encode fails with `DataTooLong` (or
    /// `SegmentTooLong` when a character count field overflows). Iff
    /// `boost_ecl` is true, the error correction level may be raised above
    /// `ecl` as long as the version stays put. A `None` mask selects the
    /// pattern with the lowest penalty score.
    pub fn encode_segments_advanced(
        segs: &[Segment],
        ecl: EccLevel,
        min_version: Version,
        max_version: Version,
        mask: Option<Mask>,
        boost_ecl: bool,
    ) -> Result<Self, QrError> {
        let encoded = encoder::assemble(segs, ecl, min_version, max_version, boost_ecl)?;
        Self::encode_codewords(encoded.version, encoded.ecl, &encoded.codewords, mask)
    }

    /*---- Constructor (low level) ----*/

    /// Builds a symbol from complete data codewords: segment headers,
    /// terminator, and pad bytes included, error correction excluded.
    ///
    /// Fails with `InvalidArgument` if the codeword count does not match
    /// the capacity at the given version and level. Most callers want the
    /// mid-level `encode_segments()` instead.
    pub fn encode_codewords(
        version: Version,
        ecl: EccLevel,
        data_codewords: &[u8],
        mask: Option<Mask>,
    ) -> Result<Self, QrError> {
        let mut grid = Matrix::new(version);
        grid.draw_function_patterns(version, ecl);
        let all_codewords = interleave::add_ecc_and_interleave(data_codewords, version, ecl)?;
        grid.draw_codewords(&all_codewords);

        let chosen = match mask {
            Some(m) => m,
            None => {
                // Score all eight candidates and keep the minimum; ties go
                // to the lowest index.
                let mut best = Mask::new(0);
                let mut min_penalty = i32::MAX;
                for index in 0..8u8 {
                    let candidate = Mask::new(index);
                    grid.apply_mask(candidate);
                    grid.draw_format_bits(ecl, candidate);
                    let score = penalty::penalty_score(&grid);
                    if score < min_penalty {
                        best = candidate;
                        min_penalty = score;
                    }
                    grid.apply_mask(candidate); // XOR undoes the candidate
                }
                best
            }
        };
        grid.apply_mask(chosen);
        grid.draw_format_bits(ecl, chosen); // Rewrite for the committed mask

        Ok(Self {
            version,
            size: version.size(),
            ecl,
            mask: chosen,
            modules: grid.into_modules(),
        })
    }

    /*---- Accessors ----*/

    /// Returns the version, in the range [1, 40].
    pub fn version(&self) -> Version {
        self.version
    }

    /// Returns the width and height in modules, in the range [21, 177].
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Returns the error correction level actually used.
    pub fn error_correction_level(&self) -> EccLevel {
        self.ecl
    }

    /// Returns the applied mask pattern, in the range [0, 7].
    pub fn mask(&self) -> Mask {
        self.mask
    }

    /// Returns the color of the module at the given coordinates: true for
    /// dark, false for light.
    ///
    /// The top left corner is (x=0, y=0). Out-of-bounds coordinates return
    /// false (light).
    pub fn get_module(&self, x: i32, y: i32) -> bool {
        (0..self.size).contains(&x)
            && (0..self.size).contains(&y)
            && self.modules[(y * self.size + x) as usize]
    }

    /// Serializes this symbol as a standalone SVG document with a quiet
    /// zone `border` modules wide on every side.
    pub fn to_svg(&self, border: u32) -> String {
        svg::to_svg_string(self, border)
    }
}
