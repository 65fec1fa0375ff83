//! Generates QR Code Model 2 symbols from text strings and byte arrays.
//!
//! The encoder covers all forty versions (sizes) and all four error
//! correction levels. Payloads are carried as segments in numeric,
//! alphanumeric, byte, or ECI mode; the library picks the smallest version
//! that fits, computes the Reed-Solomon error correction codewords, lays
//! out the module grid, and selects the mask pattern with the lowest
//! penalty score. The output is an immutable grid of dark and light
//! modules plus a simple SVG serializer.
//!
//! Manual parameters:
//!
//! - Constrain the version search to a `[min, max]` range.
//! - Force a mask pattern instead of the automatic penalty evaluation.
//! - Pin the error correction level, or let the encoder boost it whenever
//!   that does not increase the version.
//! - Build custom segment lists, including ECI designators.
//!
//! Simple operation:
//!
//! ```
//! use qrgen_rs::{EccLevel, QrSymbol};
//!
//! let symbol = QrSymbol::encode_text("Hello, world!", EccLevel::Low)?;
//! assert_eq!(symbol.version().value(), 1);
//! let _svg = symbol.to_svg(4);
//! # Ok::<(), qrgen_rs::QrError>(())
//! ```
//!
//! Manual operation:
//!
//! ```
//! use qrgen_rs::{EccLevel, Mask, QrSymbol, Segment, Version};
//!
//! let segs = Segment::make_segments("3141592653589793238462643383");
//! let symbol = QrSymbol::encode_segments_advanced(
//!     &segs,
//!     EccLevel::High,
//!     Version::new(5),
//!     Version::new(5),
//!     Some(Mask::new(2)),
//!     false,
//! )?;
//! for y in 0..symbol.size() {
//!     for x in 0..symbol.size() {
//!         let _dark = symbol.get_module(x, y);
//!     }
//! }
//! # Ok::<(), qrgen_rs::QrError>(())
//! ```

#![forbid(unsafe_code)]

mod bit_buffer;
mod ecc_level;
mod encoder;
mod error;
mod interleave;
mod mask;
mod matrix;
mod mode;
mod penalty;
pub mod reed_solomon;
mod segment;
mod svg;
mod symbol;
mod tables;
mod version;

pub use bit_buffer::BitBuffer;
pub use ecc_level::EccLevel;
pub use error::QrError;
pub use mask::Mask;
pub use mode::Mode;
pub use segment::{Segment, ALPHANUMERIC_CHARSET};
pub use svg::to_svg_string;
pub use symbol::QrSymbol;
pub use version::Version;
