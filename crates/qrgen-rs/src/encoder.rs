use crate::bit_buffer::BitBuffer;
use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::segment::Segment;
use crate::tables;
use crate::version::Version;

// Output of the bit assembly stage: the chosen version, the possibly
// boosted error correction level, and the packed data codewords.
#[derive(Debug)]
pub(crate) struct EncodedData {
    pub version: Version,
    pub ecl: EccLevel,
    pub codewords: Vec<u8>,
}

// Picks the smallest version in [min_version, max_version] whose data
// capacity at the requested level holds the segments, optionally boosts
// the level while the data still fits, then concatenates, terminates, and
// pads the data bit stream into whole codewords.
pub(crate) fn assemble(
    segs: &[Segment],
    mut ecl: EccLevel,
    min_version: Version,
    max_version: Version,
    boost_ecl: bool,
) -> Result<EncodedData, QrError> {
    if min_version > max_version {
        return Err(QrError::InvalidArgument(format!(
            "min version {} exceeds max version {}",
            min_version.value(),
            max_version.value()
        )));
    }

    // Find the minimal version number that fits
    let mut version = min_version;
    let used_bits: usize = loop {
        let capacity_bits = tables::num_data_codewords(version, ecl) * 8;
        let used = Segment::get_total_bits(segs, version);
        match used {
            Some(n) if n <= capacity_bits => break n,
            _ if version >= max_version => {
                // All versions in the range were too small
                return Err(match used {
                    Some(n) => QrError::DataTooLong {
                        required: n,
                        available: capacity_bits,
                    },
                    None => QrError::SegmentTooLong,
                });
            }
            _ => version = Version::new(version.value() + 1),
        }
    };

    // Raise the level as far as the capacity at the chosen version allows
    if boost_ecl {
        for higher in [EccLevel::Medium, EccLevel::Quartile, EccLevel::High] {
            if used_bits <= tables::num_data_codewords(version, higher) * 8 {
                ecl = higher;
            }
        }
    }

    // Mode indicator, character count field, then payload, per segment
    let mut bits = BitBuffer::with_capacity(used_bits);
    for seg in segs {
        bits.push_bits(seg.mode().mode_bits(), 4);
        bits.push_bits(seg.num_chars() as u32, seg.mode().char_count_bits(version));
        bits.extend_from(seg.bits());
    }
    debug_assert_eq!(bits.len(), used_bits);

    let capacity_bits = tables::num_data_codewords(version, ecl) * 8;
    debug_assert!(bits.len() <= capacity_bits);

    // Terminator, then zero-fill to the next byte boundary
    let terminator = std::cmp::min(4, capacity_bits - bits.len());
    bits.push_bits(0, terminator as u32);
    bits.push_bits(0, (bits.len().wrapping_neg() & 7) as u32);
    debug_assert_eq!(bits.len() % 8, 0);

    // Alternating pad bytes until the capacity is reached
    for &pad in [0xEC, 0x11].iter().cycle() {
        if bits.len() >= capacity_bits {
            break;
        }
        bits.push_bits(pad, 8);
    }

    Ok(EncodedData {
        version,
        ecl,
        codewords: bits.pack_bytes(),
    })
}
