use crate::constants::{BITS_PER_BYTE, LENGTH_HEADER_BITS};
use crate::error::CodecError;

pub fn embed(pix: &mut [u8], payload_bits: &[u8]) -> Result<(), CodecError> {
    let max_chars = pix.len().saturating_sub(LENGTH_HEADER_BITS) / BITS_PER_BYTE;

    let required = LENGTH_HEADER_BITS
        .checked_add(payload_bits.len())
        .ok_or(CodecError::CapacityExceeded { max_chars })?;
    if required > pix.len() {
        return Err(CodecError::CapacityExceeded { max_chars });
    }
    let length =
        u32::try_from(payload_bits.len()).map_err(|_| CodecError::CapacityExceeded { max_chars })?;

    let header_bits = (0..LENGTH_HEADER_BITS)
        .rev()
        .map(|shift| ((length >> shift) & 1) as u8);
    let all_bits = header_bits.chain(payload_bits.iter().copied());

    for (byte, bit) in pix.iter_mut().zip(all_bits) {
        *byte = (*byte & 0xFE) | bit;
    }

    Ok(())
}

pub fn extract(pix: &[u8]) -> Result<Vec<u8>, CodecError> {
    if pix.len() < LENGTH_HEADER_BITS {
        return Err(CodecError::InvalidOrCorrupted);
    }

    let length = pix[..LENGTH_HEADER_BITS]
        .iter()
        .fold(0u32, |acc, &byte| (acc << 1) | (byte & 1) as u32) as usize;

    if length == 0 || length > pix.len() - LENGTH_HEADER_BITS {
        return Err(CodecError::InvalidOrCorrupted);
    }

    Ok(pix[LENGTH_HEADER_BITS..LENGTH_HEADER_BITS + length]
        .iter()
        .map(|&byte| byte & 1)
        .collect())
}
