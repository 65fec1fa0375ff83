//! Streams encode jobs from standard input and writes the resulting
//! module grids to standard output, one integer per line.
//!
//! Each job is: a byte count, that many byte values, then the error
//! correction ordinal, the minimum and maximum version, the mask (-1 for
//! automatic), and the boost flag. A byte count of -1 ends the stream.
//! Each result is either -1 (the payload does not fit) or the chosen
//! version followed by size * size module values in row-major order.
//!
//! Intended for automated cross-implementation testing; malformed input
//! terminates the process with a contextual error.

use std::io::{self, BufRead, BufWriter, Write};

use anyhow::{bail, Context, Result};
use qrgen_rs::{EccLevel, Mask, QrError, QrSymbol, Segment, Version};

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());

    loop {
        let length = next_int(&mut input)?;
        if length == -1 {
            break;
        }
        if length < 0 {
            bail!("byte count {length} is negative");
        }

        let mut data = Vec::with_capacity(length as usize);
        for _ in 0..length {
            let byte = next_int(&mut input)?;
            if !(0..=255).contains(&byte) {
                bail!("byte value {byte} out of range [0, 255]");
            }
            data.push(byte as u8);
        }

        let ecl = match next_int(&mut input)? {
            0 => EccLevel::Low,
            1 => EccLevel::Medium,
            2 => EccLevel::Quartile,
            3 => EccLevel::High,
            n => bail!("error correction ordinal {n} out of range [0, 3]"),
        };
        let min_version = version_arg(next_int(&mut input)?)?;
        let max_version = version_arg(next_int(&mut input)?)?;
        let mask = match next_int(&mut input)? {
            -1 => None,
            n @ 0..=7 => Some(Mask::new(n as u8)),
            n => bail!("mask {n} out of range [-1, 7]"),
        };
        let boost_ecl = match next_int(&mut input)? {
            0 => false,
            1 => true,
            n => bail!("boost flag {n} must be 0 or 1"),
        };

        let segs = make_job_segments(&data);
        match QrSymbol::encode_segments_advanced(
            &segs,
            ecl,
            min_version,
            max_version,
            mask,
            boost_ecl,
        ) {
            Ok(symbol) => {
                writeln!(output, "{}", symbol.version().value())?;
                for y in 0..symbol.size() {
                    for x in 0..symbol.size() {
                        writeln!(output, "{}", u8::from(symbol.get_module(x, y)))?;
                    }
                }
            }
            Err(QrError::DataTooLong { .. } | QrError::SegmentTooLong) => {
                writeln!(output, "-1")?;
            }
            Err(err) => return Err(err).context("encode failed"),
        }
        output.flush()?;
    }
    Ok(())
}

// All-ASCII payloads go through the automatic mode chooser so numeric and
// alphanumeric jobs exercise those paths; anything else is a byte segment.
fn make_job_segments(data: &[u8]) -> Vec<Segment> {
    if data.is_ascii() {
        match std::str::from_utf8(data) {
            Ok(text) => Segment::make_segments(text),
            Err(_) => vec![Segment::make_bytes(data)],
        }
    } else {
        vec![Segment::make_bytes(data)]
    }
}

fn next_int(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<i32> {
    let line = lines
        .next()
        .context("unexpected end of input")?
        .context("failed to read line")?;
    line.trim()
        .parse()
        .with_context(|| format!("not an integer: {line:?}"))
}

fn version_arg(n: i32) -> Result<Version> {
    if !(1..=40).contains(&n) {
        bail!("version {n} out of range [1, 40]");
    }
    Ok(Version::new(n as u8))
}
