//! End-to-end encoding tests over the public API.

use qrgen_rs::{EccLevel, Mask, Mode, QrError, QrSymbol, Segment, Version};

const ALL_LEVELS: [EccLevel; 4] = [
    EccLevel::Low,
    EccLevel::Medium,
    EccLevel::Quartile,
    EccLevel::High,
];

#[test]
fn hello_world_fits_version_one() {
    let symbol = QrSymbol::encode_text("Hello, world!", EccLevel::Low).unwrap();
    assert_eq!(symbol.version(), Version::new(1));
    assert_eq!(symbol.size(), 21);
    // 116 data bits also fit the Medium capacity at version 1, so the
    // level is boosted one step.
    assert_eq!(symbol.error_correction_level(), EccLevel::Medium);
}

#[test]
fn size_follows_the_version_law() {
    let segs = [Segment::make_numeric("31415").unwrap()];
    for v in [1u8, 7, 14, 21, 32, 40] {
        let ver = Version::new(v);
        let symbol = QrSymbol::encode_segments_advanced(
            &segs,
            EccLevel::Low,
            ver,
            ver,
            Some(Mask::new(0)),
            false,
        )
        .unwrap();
        assert_eq!(symbol.version(), ver);
        assert_eq!(symbol.size(), i32::from(v) * 4 + 17);
        assert!((21..=177).contains(&symbol.size()));
    }
}

#[test]
fn automatic_masking_commits_a_concrete_mask() {
    for ecl in ALL_LEVELS {
        let symbol = QrSymbol::encode_text("MASK CHECK 42", ecl).unwrap();
        assert!(symbol.mask().value() <= 7);
    }
}

#[test]
fn re_encoding_with_the_chosen_parameters_reproduces_the_grid() {
    let segs = Segment::make_segments("DETERMINISM CHECK 123");
    let first = QrSymbol::encode_segments(&segs, EccLevel::Low).unwrap();
    let second = QrSymbol::encode_segments_advanced(
        &segs,
        first.error_correction_level(),
        first.version(),
        first.version(),
        Some(first.mask()),
        false,
    )
    .unwrap();
    assert_eq!(first, second);
}

#[test]
fn numeric_mode_is_used_for_digit_strings() {
    let digits = "314159265358979323846264338327950288419716939937510";
    let symbol = QrSymbol::encode_text(digits, EccLevel::Medium).unwrap();
    let segs = Segment::make_segments(digits);
    assert_eq!(segs[0].mode(), Mode::Numeric);
    // 51 digits: 4 mode bits + 10 count bits + 170 payload bits
    assert_eq!(Segment::get_total_bits(&segs, symbol.version()), Some(184));
}

#[test]
fn alphanumeric_mode_covers_the_full_charset() {
    let text = "DOLLAR-AMOUNT:$39.87 PERCENTAGE:100.00% OPERATIONS:+-*/";
    let symbol = QrSymbol::encode_text(text, EccLevel::High).unwrap();
    assert_eq!(Segment::make_segments(text)[0].mode(), Mode::Alphanumeric);
    assert!(symbol.mask().value() <= 7);
}

#[test]
fn manual_segments_beat_the_single_mode_chooser() {
    let alpha = "THE SQUARE ROOT OF 2 IS 1.";
    let digits = "41421356237309504880168872420969807856967187537694807317667973799";
    let segs = [
        Segment::make_alphanumeric(alpha).unwrap(),
        Segment::make_numeric(digits).unwrap(),
    ];
    let split = QrSymbol::encode_segments(&segs, EccLevel::Low).unwrap();

    let concatenated = format!("{alpha}{digits}");
    let whole = QrSymbol::encode_text(&concatenated, EccLevel::Low).unwrap();
    assert!(split.version() < whole.version());
}

#[test]
fn binary_capacity_boundary_at_low() {
    assert!(QrSymbol::encode_binary(&vec![0u8; 2953], EccLevel::Low).is_ok());
    let err = QrSymbol::encode_binary(&vec![0u8; 2954], EccLevel::Low).unwrap_err();
    assert!(matches!(err, QrError::DataTooLong { .. }));
}

#[test]
fn empty_input_encodes_at_version_one() {
    assert!(Segment::make_segments("").is_empty());
    let symbol = QrSymbol::encode_segments(&[], EccLevel::Low).unwrap();
    assert_eq!(symbol.version(), Version::new(1));
}

#[test]
fn forced_mask_and_version_are_honored() {
    let segs = [Segment::make_numeric("0").unwrap()];
    let symbol = QrSymbol::encode_segments_advanced(
        &segs,
        EccLevel::Low,
        Version::new(1),
        Version::new(1),
        Some(Mask::new(3)),
        true,
    )
    .unwrap();
    assert_eq!(symbol.version(), Version::new(1));
    assert_eq!(symbol.mask(), Mask::new(3));
    // Top left finder corner is always dark
    assert!(symbol.get_module(0, 0));
}

#[test]
fn out_of_bounds_modules_read_light() {
    let symbol = QrSymbol::encode_text("EDGE", EccLevel::Low).unwrap();
    assert!(!symbol.get_module(-1, 0));
    assert!(!symbol.get_module(0, -1));
    assert!(!symbol.get_module(symbol.size(), 0));
    assert!(!symbol.get_module(0, symbol.size()));
}

// Reads the 15 format bits from the copy wrapped around the top left
// finder.
fn format_copy_near_origin(symbol: &QrSymbol) -> Vec<bool> {
    let mut bits = Vec::with_capacity(15);
    for i in 0..6 {
        bits.push(symbol.get_module(8, i));
    }
    bits.push(symbol.get_module(8, 7));
    bits.push(symbol.get_module(8, 8));
    bits.push(symbol.get_module(7, 8));
    for i in 9..15 {
        bits.push(symbol.get_module(14 - i, 8));
    }
    bits
}

// Reads the 15 format bits from the copy split between the other two
// finders.
fn format_copy_at_edges(symbol: &QrSymbol) -> Vec<bool> {
    let size = symbol.size();
    let mut bits = Vec::with_capacity(15);
    for i in 0..8 {
        bits.push(symbol.get_module(size - 1 - i, 8));
    }
    for i in 8..15 {
        bits.push(symbol.get_module(8, size - 15 + i));
    }
    bits
}

#[test]
fn both_format_bit_copies_agree() {
    for ecl in ALL_LEVELS {
        let symbol = QrSymbol::encode_text("FORMAT BITS", ecl).unwrap();
        assert_eq!(
            format_copy_near_origin(&symbol),
            format_copy_at_edges(&symbol)
        );
        // The module next to the bottom left finder is always dark
        assert!(symbol.get_module(8, symbol.size() - 8));
    }
}

#[test]
fn field_multiplication_has_an_identity() {
    use qrgen_rs::reed_solomon::multiply;
    for x in [0u8, 1, 2, 94, 255] {
        assert_eq!(multiply(x, 1), x);
    }
    assert_eq!(multiply(3, 7), multiply(7, 3));
}

#[test]
fn version_bits_appear_from_version_seven() {
    // Version 7 is the first with the 3x6 version blocks; the cell at
    // (size - 11, 0) belongs to the top right copy.
    let segs = [Segment::make_numeric("7".repeat(20).as_str()).unwrap()];
    let v6 = QrSymbol::encode_segments_advanced(
        &segs,
        EccLevel::Low,
        Version::new(6),
        Version::new(6),
        Some(Mask::new(1)),
        false,
    )
    .unwrap();
    let v7 = QrSymbol::encode_segments_advanced(
        &segs,
        EccLevel::Low,
        Version::new(7),
        Version::new(7),
        Some(Mask::new(1)),
        false,
    )
    .unwrap();
    // 7 << 12 | bch(7) = 0x07C94: bit 0 is light, bit 2 is dark
    assert!(!v7.get_module(v7.size() - 11, 0));
    assert!(v7.get_module(v7.size() - 9, 0));
    // Version 6 has no version blocks; that area is data
    assert_eq!(v6.size(), 41);
}
