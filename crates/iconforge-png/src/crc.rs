//! CRC-32 as used by PNG chunks (ISO-HDLC, reflected polynomial `0xEDB88320`).

const POLY: u32 = 0xEDB8_8320;

/// 256-entry lookup table, built at compile time.
const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { POLY ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[n] = c;
        n += 1;
    }
    table
}

/// Running CRC-32 state.
///
/// Lets a chunk's tag and data be fed separately without concatenating them.
#[derive(Debug, Copy, Clone)]
pub struct Crc32 {
    state: u32,
}

impl Default for Crc32 {
    fn default() -> Self {
        Self::new()
    }
}

impl Crc32 {
    #[inline]
    pub const fn new() -> Self {
        Self { state: 0xFFFF_FFFF }
    }

    pub fn update(&mut self, bytes: &[u8]) {
        let mut c = self.state;
        for &b in bytes {
            c = TABLE[((c ^ b as u32) & 0xFF) as usize] ^ (c >> 8);
        }
        self.state = c;
    }

    #[inline]
    pub const fn finish(self) -> u32 {
        self.state ^ 0xFFFF_FFFF
    }
}

/// One-shot CRC-32 of `bytes`.
pub fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc32::new();
    crc.update(bytes);
    crc.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── known values ──────────────────────────────────────────────────────

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(crc32(b""), 0);
    }

    #[test]
    fn check_value() {
        // Standard CRC-32 check input.
        assert_eq!(crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn iend_chunk_crc() {
        // Every PNG ends with this exact CRC.
        assert_eq!(crc32(b"IEND"), 0xAE42_6082);
    }

    // ── incremental ───────────────────────────────────────────────────────

    #[test]
    fn split_updates_match_one_shot() {
        let data = b"IHDR\x00\x00\x00\x10\x00\x00\x00\x10\x08\x06\x00\x00\x00";
        let mut crc = Crc32::new();
        crc.update(&data[..4]);
        crc.update(&data[4..]);
        assert_eq!(crc.finish(), crc32(data));
    }

    #[test]
    fn single_bit_flip_changes_crc() {
        let data = b"some chunk payload".to_vec();
        let base = crc32(&data);
        for i in 0..data.len() * 8 {
            let mut flipped = data.clone();
            flipped[i / 8] ^= 1 << (i % 8);
            assert_ne!(crc32(&flipped), base, "bit {i}");
        }
    }
}
