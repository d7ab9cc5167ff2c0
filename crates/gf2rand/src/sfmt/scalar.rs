//! Portable (non-SIMD) recurrence strategy.
//!
//! Used whenever the `simd` feature is off, and always compiled as the
//! reference the SIMD strategy is checked against. Whole-block byte shifts
//! are done through a `u128` with lane 0 in the low bits, which matches
//! the little-endian block layout bit-for-bit.

use super::block::Block128;
use super::params::SfmtParams;

#[inline]
fn to_u128(v: [u32; 4]) -> u128 {
    v[0] as u128 | (v[1] as u128) << 32 | (v[2] as u128) << 64 | (v[3] as u128) << 96
}

#[inline]
fn from_u128(x: u128) -> [u32; 4] {
    [
        x as u32,
        (x >> 32) as u32,
        (x >> 64) as u32,
        (x >> 96) as u32,
    ]
}

/// 128-bit left shift by `bytes` bytes.
#[inline]
fn lshift128(v: [u32; 4], bytes: usize) -> [u32; 4] {
    from_u128(to_u128(v) << (bytes * 8))
}

/// 128-bit right shift by `bytes` bytes.
#[inline]
fn rshift128(v: [u32; 4], bytes: usize) -> [u32; 4] {
    from_u128(to_u128(v) >> (bytes * 8))
}

/// One step of the SFMT recurrence:
/// `a ^ (a << sl2 bytes) ^ ((b >> sr1) & msk) ^ (c >> sr2 bytes) ^ (d << sl1)`.
#[inline]
pub fn do_recursion(p: &SfmtParams, a: Block128, b: Block128, c: Block128, d: Block128) -> Block128 {
    let x = lshift128(a.0, p.sl2);
    let y = rshift128(c.0, p.sr2);
    let mut out = [0u32; 4];
    for i in 0..4 {
        out[i] = a.0[i] ^ x[i] ^ ((b.0[i] >> p.sr1) & p.msk[i]) ^ y[i] ^ (d.0[i] << p.sl1);
    }
    Block128(out)
}
