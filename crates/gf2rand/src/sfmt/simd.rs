//! SIMD recurrence strategy using `std::simd` (requires nightly Rust).
//!
//! Must produce output bit-identical to the scalar strategy for every
//! parameter set; `tests/` exercises that equivalence whenever this module
//! is compiled in. The whole-block byte shifts are lane swizzles over the
//! little-endian byte view of a block; only the shift widths that occur in
//! the published parameter sets (1, 3 and 7 bytes left; 1 and 3 bytes
//! right) are instantiated.

#![allow(unsafe_code)]

use std::simd::{Simd, simd_swizzle, u8x16, u32x4};

use super::block::Block128;
use super::params::SfmtParams;

const ZERO: u8x16 = Simd::from_array([0; 16]);

/// 128-bit left shift by 1 byte: `[b0..b15] -> [0, b0..b14]`.
#[inline]
fn lshift128_1(v: u8x16) -> u8x16 {
    simd_swizzle!(
        ZERO,
        v,
        [0, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28, 29, 30]
    )
}

/// 128-bit left shift by 3 bytes.
#[inline]
fn lshift128_3(v: u8x16) -> u8x16 {
    simd_swizzle!(
        ZERO,
        v,
        [0, 0, 0, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27, 28]
    )
}

/// 128-bit left shift by 7 bytes.
#[inline]
fn lshift128_7(v: u8x16) -> u8x16 {
    simd_swizzle!(
        ZERO,
        v,
        [0, 0, 0, 0, 0, 0, 0, 16, 17, 18, 19, 20, 21, 22, 23, 24]
    )
}

/// 128-bit right shift by 1 byte: `[b0..b15] -> [b1..b15, 0]`.
#[inline]
fn rshift128_1(v: u8x16) -> u8x16 {
    simd_swizzle!(
        v,
        ZERO,
        [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]
    )
}

/// 128-bit right shift by 3 bytes.
#[inline]
fn rshift128_3(v: u8x16) -> u8x16 {
    simd_swizzle!(
        v,
        ZERO,
        [3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 16, 16]
    )
}

#[inline]
fn lshift128(v: u8x16, bytes: usize) -> u8x16 {
    match bytes {
        1 => lshift128_1(v),
        3 => lshift128_3(v),
        7 => lshift128_7(v),
        _ => unreachable!("no published SFMT parameter set shifts left by {} bytes", bytes),
    }
}

#[inline]
fn rshift128(v: u8x16, bytes: usize) -> u8x16 {
    match bytes {
        1 => rshift128_1(v),
        3 => rshift128_3(v),
        _ => unreachable!("no published SFMT parameter set shifts right by {} bytes", bytes),
    }
}

/// One step of the SFMT recurrence; see the scalar strategy for the formula.
#[inline]
pub fn do_recursion(p: &SfmtParams, a: Block128, b: Block128, c: Block128, d: Block128) -> Block128 {
    let a_v = u32x4::from_array(a.0);
    let b_v = u32x4::from_array(b.0);
    let c_v = u32x4::from_array(c.0);
    let d_v = u32x4::from_array(d.0);

    let a_bytes: u8x16 = unsafe { std::mem::transmute(a_v) };
    let x: u32x4 = unsafe { std::mem::transmute(lshift128(a_bytes, p.sl2)) };

    let c_bytes: u8x16 = unsafe { std::mem::transmute(c_v) };
    let y: u32x4 = unsafe { std::mem::transmute(rshift128(c_bytes, p.sr2)) };

    let z = (b_v >> Simd::splat(p.sr1)) & u32x4::from_array(p.msk);
    let w = d_v << Simd::splat(p.sl1);

    Block128((a_v ^ x ^ z ^ y ^ w).to_array())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sfmt::params::ALL_SFMT_PARAMS;
    use crate::sfmt::scalar;

    fn sample_blocks() -> [Block128; 4] {
        [
            Block128([0x12345678, 0x9abcdef0, 0x0fedcba9, 0x87654321]),
            Block128([0xdfffffef, 0xddfecb7f, 0xbffaffff, 0xbffffff6]),
            Block128([0xdeadbeef, 0xcafebabe, 0xfeedface, 0x8badf00d]),
            Block128([0x55555555, 0xaaaaaaaa, 0x0000ffff, 0xffff0000]),
        ]
    }

    #[test]
    fn test_recursion_matches_scalar_for_all_params() {
        let [a, b, c, d] = sample_blocks();
        for params in ALL_SFMT_PARAMS {
            assert_eq!(
                do_recursion(params, a, b, c, d),
                scalar::do_recursion(params, a, b, c, d),
                "SIMD/scalar mismatch for mexp {}",
                params.mexp
            );
        }
    }

    #[test]
    fn test_byte_shifts_cross_lane_boundaries() {
        // Drive both paths with a block whose bytes are all distinct.
        let block = Block128([0x03020100, 0x07060504, 0x0b0a0908, 0x0f0e0d0c]);
        let bytes: u8x16 = unsafe { std::mem::transmute(u32x4::from_array(block.0)) };

        let shifted: u32x4 = unsafe { std::mem::transmute(lshift128_1(bytes)) };
        assert_eq!(
            shifted.to_array(),
            [0x02010000, 0x06050403, 0x0a090807, 0x0e0d0c0b]
        );

        let shifted: u32x4 = unsafe { std::mem::transmute(rshift128_3(bytes)) };
        assert_eq!(
            shifted.to_array(),
            [0x06050403, 0x0a090807, 0x0e0d0c0b, 0x00000f0e]
        );
    }
}
