use crate::ecc_level::EccLevel;
use crate::error::QrError;
use crate::reed_solomon;
use crate::tables;
use crate::version::Version;

// Splits the data codewords into error correction blocks, appends the
// Reed-Solomon remainder to each, and interleaves the bytes column-major
// across blocks. The result fills every data module of the symbol:
// num_raw_data_modules / 8 bytes.
pub(crate) fn add_ecc_and_interleave(
    data: &[u8],
    version: Version,
    ecl: EccLevel,
) -> Result<Vec<u8>, QrError> {
    let expected = tables::num_data_codewords(version, ecl);
    if data.len() != expected {
        return Err(QrError::InvalidArgument(format!(
            "expected {expected} data codewords, got {}",
            data.len()
        )));
    }

    let num_blocks = tables::num_error_correction_blocks(version, ecl);
    let ecc_len = tables::ecc_codewords_per_block(version, ecl);
    let raw_codewords = tables::num_raw_data_modules(version) / 8;
    let num_short_blocks = num_blocks - raw_codewords % num_blocks;
    let short_block_len = raw_codewords / num_blocks;

    // Split into blocks and append the remainder to each. Short blocks get
    // a placeholder byte so every block has the same row count.
    let divisor = reed_solomon::compute_divisor(ecc_len)?;
    let mut blocks: Vec<Vec<u8>> = Vec::with_capacity(num_blocks);
    let mut consumed = 0;
    for i in 0..num_blocks {
        let data_len = short_block_len - ecc_len + usize::from(i >= num_short_blocks);
        let mut block = data[consumed..consumed + data_len].to_vec();
        consumed += data_len;
        let ecc = reed_solomon::compute_remainder(&block, &divisor);
        if i < num_short_blocks {
            block.push(0);
        }
        block.extend_from_slice(&ecc);
        blocks.push(block);
    }

    // Column-major read across blocks, skipping the placeholder row in the
    // short blocks.
    let mut result = Vec::with_capacity(raw_codewords);
    for row in 0..=short_block_len {
        for (i, block) in blocks.iter().enumerate() {
            if row != short_block_len - ecc_len || i >= num_short_blocks {
                result.push(block[row]);
            }
        }
    }
    if result.len() != raw_codewords {
        return Err(QrError::InternalAssertion(
            "interleaved codeword count mismatch",
        ));
    }
    Ok(result)
}
