use crate::constants::BITS_PER_BYTE;

pub fn text_to_bits(text: &str) -> Vec<u8> {
    let bytes = text.as_bytes();
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);

    for &byte in bytes {
        for shift in (0..BITS_PER_BYTE).rev() {
            bits.push((byte >> shift) & 1);
        }
    }

    bits
}

pub fn bits_to_text(bits: &[u8]) -> String {
    // 位数不是 8 的倍数时，整体在左侧补零，而不是逐字符补。
    let lead = bits.len() % BITS_PER_BYTE;
    let mut bytes = Vec::with_capacity(bits.len() / BITS_PER_BYTE + 1);

    if lead != 0 {
        bytes.push(pack_byte(&bits[..lead]));
    }

    for chunk in bits[lead..].chunks_exact(BITS_PER_BYTE) {
        bytes.push(pack_byte(chunk));
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

fn pack_byte(chunk: &[u8]) -> u8 {
    chunk.iter().fold(0, |acc, &bit| (acc << 1) | (bit & 1))
}
