//! Word-level bitmask arithmetic shared by the segment queries.
//!
//! All off-by-one risk around 64-bit word boundaries is concentrated
//! here so the all/any scan loops never build masks themselves.

/// Bits of addressable storage per packed word
pub const WORD_BITS: usize = 64;

/// Word index holding bit `bit` along a packed axis
#[inline]
pub fn word_index(bit: usize) -> usize {
    bit / WORD_BITS
}

/// Bit offset of `bit` within its word
#[inline]
pub fn bit_offset(bit: usize) -> usize {
    bit % WORD_BITS
}

/// Mask covering bits `[start, end)` of a single word.
///
/// `start < end <= 64`. An `end` of 64 yields a mask reaching the top
/// bit, so segments ending exactly on a word boundary are covered.
#[inline]
pub fn mask_for_bit_range(start: usize, end: usize) -> u64 {
    debug_assert!(start < end && end <= WORD_BITS);
    let span = end - start;
    if span == WORD_BITS {
        u64::MAX
    } else {
        ((1u64 << span) - 1) << start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bit() {
        assert_eq!(mask_for_bit_range(0, 1), 1);
        assert_eq!(mask_for_bit_range(63, 64), 1 << 63);
        assert_eq!(mask_for_bit_range(7, 8), 0x80);
    }

    #[test]
    fn test_full_word() {
        assert_eq!(mask_for_bit_range(0, 64), u64::MAX);
    }

    #[test]
    fn test_reaches_top_bit() {
        assert_eq!(mask_for_bit_range(32, 64), 0xffff_ffff_0000_0000);
        assert_eq!(mask_for_bit_range(1, 64), u64::MAX - 1);
    }

    #[test]
    fn test_interior_range() {
        assert_eq!(mask_for_bit_range(4, 8), 0xf0);
        assert_eq!(mask_for_bit_range(0, 16), 0xffff);
    }

    #[test]
    fn test_masks_partition_word() {
        // adjacent ranges never overlap and jointly cover the word
        for split in 1..64 {
            let low = mask_for_bit_range(0, split);
            let high = mask_for_bit_range(split, 64);
            assert_eq!(low & high, 0);
            assert_eq!(low | high, u64::MAX);
        }
    }
}
