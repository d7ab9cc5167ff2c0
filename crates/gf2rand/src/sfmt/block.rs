//! 128-bit state block and its aliased 32/64-bit views.
//!
//! The SFMT state is an array of 128-bit blocks that the algorithm also
//! addresses as flat 32-bit and 64-bit words. `Block128` is
//! `#[repr(transparent)]` over `[u32; 4]`, so a block array is guaranteed
//! to have the same layout as a contiguous `u32` array; the view functions
//! below are the only place that layout knowledge lives. The word order is
//! little-endian by definition of the algorithm, which is why the crate
//! only builds on little-endian targets (see lib.rs).

use std::slice;

/// One 128-bit block of SFMT state: four 32-bit lanes, lane 0 lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(transparent)]
pub struct Block128(pub(crate) [u32; 4]);

impl Block128 {
    /// Block with all four lanes set to `word`.
    pub(crate) fn splat(word: u32) -> Self {
        Self([word; 4])
    }

    /// The 32-bit lane at `i` (0..4).
    #[inline]
    pub fn lane32(self, i: usize) -> u32 {
        self.0[i]
    }

    /// The 64-bit lane at `i` (0..2), composed from two 32-bit lanes with
    /// the lower-indexed lane in the low half.
    #[inline]
    pub fn lane64(self, i: usize) -> u64 {
        self.0[2 * i] as u64 | (self.0[2 * i + 1] as u64) << 32
    }
}

/// Flat 32-bit view of a block array.
#[inline]
pub(crate) fn words(blocks: &[Block128]) -> &[u32] {
    // Safety: Block128 is repr(transparent) over [u32; 4], so a block
    // array is layout-identical to a u32 array four times as long.
    unsafe { slice::from_raw_parts(blocks.as_ptr() as *const u32, blocks.len() * 4) }
}

/// Flat mutable 32-bit view of a block array.
#[inline]
pub(crate) fn words_mut(blocks: &mut [Block128]) -> &mut [u32] {
    // Safety: as for `words`.
    unsafe { slice::from_raw_parts_mut(blocks.as_mut_ptr() as *mut u32, blocks.len() * 4) }
}

/// Block view of a flat 32-bit buffer. Requires `words.len() % 4 == 0`.
#[inline]
pub(crate) fn blocks_mut(words: &mut [u32]) -> &mut [Block128] {
    debug_assert_eq!(words.len() % 4, 0);
    // Safety: layout as for `words`; Block128 has the alignment of u32.
    unsafe { slice::from_raw_parts_mut(words.as_mut_ptr() as *mut Block128, words.len() / 4) }
}

/// Block view of a flat 64-bit buffer. Requires `words.len() % 2 == 0`.
///
/// Only valid with little-endian word order, where a `u64` is its low
/// 32-bit lane followed by its high lane.
#[inline]
pub(crate) fn blocks_mut_from_u64(words: &mut [u64]) -> &mut [Block128] {
    debug_assert_eq!(words.len() % 2, 0);
    // Safety: u64 alignment exceeds Block128 alignment, lengths divide
    // evenly, and the target is little-endian (enforced at compile time).
    unsafe { slice::from_raw_parts_mut(words.as_mut_ptr() as *mut Block128, words.len() / 2) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_block_layout() {
        assert_eq!(size_of::<Block128>(), 16);
        assert_eq!(align_of::<Block128>(), align_of::<u32>());
    }

    #[test]
    fn test_lane_accessors() {
        let block = Block128([0x11111111, 0x22222222, 0x33333333, 0x44444444]);
        assert_eq!(block.lane32(0), 0x11111111);
        assert_eq!(block.lane32(3), 0x44444444);
        assert_eq!(block.lane64(0), 0x22222222_11111111);
        assert_eq!(block.lane64(1), 0x44444444_33333333);
    }

    #[test]
    fn test_flat_view_addressing() {
        let mut blocks = vec![Block128([0, 1, 2, 3]), Block128([4, 5, 6, 7])];
        assert_eq!(words(&blocks), &[0, 1, 2, 3, 4, 5, 6, 7]);

        words_mut(&mut blocks)[5] = 50;
        assert_eq!(blocks[1].lane32(1), 50);
    }

    #[test]
    fn test_block_view_of_word_buffer() {
        let mut buffer: Vec<u32> = (0..8).collect();
        let blocks = blocks_mut(&mut buffer);
        assert_eq!(blocks.len(), 2);
        blocks[1] = Block128([9, 9, 9, 9]);
        assert_eq!(buffer[4..], [9, 9, 9, 9]);
    }

    #[test]
    fn test_block_view_of_u64_buffer() {
        let mut buffer = vec![0u64; 4];
        {
            let blocks = blocks_mut_from_u64(&mut buffer);
            assert_eq!(blocks.len(), 2);
            blocks[0] = Block128([0x1, 0x2, 0x3, 0x4]);
        }
        assert_eq!(buffer[0], 0x00000002_00000001);
        assert_eq!(buffer[1], 0x00000004_00000003);
    }
}
