use thiserror::Error;

/// The ways an encode operation can fail.
///
/// Ways to handle a capacity failure include:
///
/// - Decrease the error correction level if it was greater than `EccLevel::Low`.
/// - If `encode_segments_advanced()` was called, raise the `max_version`
///   argument if it was below `Version::MAX`. (The other factory functions
///   already search all versions up to `Version::MAX`.)
/// - Shorten the text or binary data, or split it into better segments.
/// - Change the text to fit the character set of a denser segment mode
///   (e.g. alphanumeric).
/// - Propagate the error upward to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QrError {
    /// A parameter was outside its documented range, or a payload contained
    /// a character its segment mode cannot carry.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The payload needs more data bits than the largest allowed version
    /// offers at the requested error correction level.
    #[error("data length = {required} bits, max capacity = {available} bits")]
    DataTooLong {
        /// Bits needed by the segments, including headers.
        required: usize,
        /// Data capacity of the largest version tried.
        available: usize,
    },

    /// A segment's character count cannot be expressed in the count field
    /// of any allowed version, so the required bit total is unknown.
    #[error("segment too long for its character count field")]
    SegmentTooLong,

    /// An internal invariant was violated. Never raised with correct
    /// capacity tables.
    #[error("internal assertion failed: {0}")]
    InternalAssertion(&'static str),
}
