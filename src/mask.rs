//! WebSocket payload masking transform
//!
//! Client-to-server payloads are XORed with a repeating 4-byte key
//! (RFC 6455 §5.3). XOR is its own inverse, so the same routine both masks
//! and unmasks.

/// XOR `data` in place with the repeating 4-byte mask.
///
/// Byte `i` (0-indexed from the start of `data`) is combined with
/// `mask[i % 4]`. Works on whole 8-byte words where possible, then finishes
/// the tail byte-wise.
#[inline]
pub fn apply_mask(data: &mut [u8], mask: [u8; 4]) {
    let mask_u64 = u64::from_ne_bytes([
        mask[0], mask[1], mask[2], mask[3], mask[0], mask[1], mask[2], mask[3],
    ]);

    let mut chunks = data.chunks_exact_mut(8);
    for chunk in &mut chunks {
        let word = u64::from_ne_bytes(chunk.try_into().unwrap()) ^ mask_u64;
        chunk.copy_from_slice(&word.to_ne_bytes());
    }

    // Remainder starts at a multiple of 8, so the mask phase is preserved.
    for (i, byte) in chunks.into_remainder().iter_mut().enumerate() {
        *byte ^= mask[i & 3];
    }
}
