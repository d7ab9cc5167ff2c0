//! Parameter sets and transition functions for the WELL family.
//!
//! Each variant binds the state geometry (bit-pool size K, unused bits P,
//! word count R) and tap offsets M1/M2/M3 to its published single-step
//! transition. The transitions follow the reference distribution code,
//! which carries the errata corrections to the original paper. The
//! building-block transforms are the paper's M0/M3/M4/M5 matrices:
//! xor-shift, plain shift, masked shift and masked rotation.

/// Tapped state words feeding one transition step.
///
/// `z0` is the boundary word: the predecessor and second predecessor
/// already combined through the P-bit masks (for P = 0 it is simply the
/// predecessor word).
#[derive(Debug, Clone, Copy)]
pub struct Taps {
    /// Masked combination of the two predecessor words.
    pub z0: u32,
    /// The head word.
    pub v0: u32,
    /// Word at offset +M1.
    pub vm1: u32,
    /// Word at offset +M2.
    pub vm2: u32,
    /// Word at offset +M3.
    pub vm3: u32,
}

/// One WELL variant: state geometry plus its transition function.
///
/// The transition returns `(new_v0, new_v1)`: the value written at the
/// predecessor slot (which becomes the new head and the draw result) and
/// the value written at the old head slot.
#[derive(Debug)]
pub struct WellParams {
    /// Bit-pool size K; the period is 2^K - 1.
    pub k: u32,
    /// Unused bits in the last state word.
    pub p: u32,
    /// State size in 32-bit words, `(k + p) / 32`.
    pub r: usize,
    /// First tap offset.
    pub m1: usize,
    /// Second tap offset.
    pub m2: usize,
    /// Third tap offset.
    pub m3: usize,
    /// Variant-specific single-step transition.
    pub transition: fn(Taps) -> (u32, u32),
}

impl WellParams {
    /// Mask selecting the low `p` bits (the part of the boundary word the
    /// second predecessor contributes). Zero when every bit is used.
    pub const fn mask_low(&self) -> u32 {
        if self.p == 0 { 0 } else { u32::MAX >> (32 - self.p) }
    }

    /// Mask selecting the bits the predecessor contributes.
    pub const fn mask_high(&self) -> u32 {
        !self.mask_low()
    }
}

#[inline]
fn xor_shr(t: u32, v: u32) -> u32 {
    v ^ (v >> t)
}

#[inline]
fn xor_shl(t: u32, v: u32) -> u32 {
    v ^ (v << t)
}

#[inline]
fn masked_shl(t: u32, mask: u32, v: u32) -> u32 {
    v ^ ((v << t) & mask)
}

/// Masked 32-bit rotation with a conditional XOR constant (the paper's M5
/// transform, used only by the 44497-bit variant).
#[inline]
fn masked_rotate(r: u32, a: u32, ds: u32, dt: u32, v: u32) -> u32 {
    let rotated = ((v << r) ^ (v >> (32 - r))) & ds;
    if v & dt != 0 { rotated ^ a } else { rotated }
}

fn transition_512a(t: Taps) -> (u32, u32) {
    let z1 = xor_shl(16, t.v0) ^ xor_shl(15, t.vm1);
    let z2 = xor_shr(11, t.vm2);
    let new_v1 = z1 ^ z2;
    let new_v0 =
        xor_shl(2, t.z0) ^ xor_shl(18, z1) ^ (z2 << 28) ^ masked_shl(5, 0xda442d24, new_v1);
    (new_v0, new_v1)
}

fn transition_1024a(t: Taps) -> (u32, u32) {
    let z1 = xor_shl(8, t.v0) ^ xor_shr(19, t.vm1);
    let z2 = xor_shl(14, t.vm2) ^ xor_shl(7, t.vm3);
    let new_v1 = z1 ^ z2;
    let new_v0 = xor_shl(11, t.z0) ^ xor_shl(7, z1) ^ xor_shl(13, z2);
    (new_v0, new_v1)
}

fn transition_19937a(t: Taps) -> (u32, u32) {
    let z1 = xor_shl(25, t.v0) ^ xor_shr(27, t.vm1);
    let z2 = (t.vm2 >> 9) ^ xor_shr(1, t.vm3);
    let new_v1 = z1 ^ z2;
    let new_v0 = t.z0 ^ xor_shl(9, z1) ^ xor_shl(21, z2) ^ xor_shr(21, new_v1);
    (new_v0, new_v1)
}

fn transition_44497a(t: Taps) -> (u32, u32) {
    let z1 = xor_shl(24, t.v0) ^ xor_shr(30, t.vm1);
    let z2 = xor_shl(10, t.vm2) ^ (t.vm3 << 26);
    let new_v1 = z1 ^ z2;
    let new_v0 = t.z0
        ^ xor_shr(20, z1)
        ^ masked_rotate(9, 0xb729fcec, 0xfbffffff, 0x00020000, z2)
        ^ new_v1;
    (new_v0, new_v1)
}

/// WELL512a: 16-word state, period 2^512 - 1.
pub static WELL_512A: WellParams = WellParams {
    k: 512,
    p: 0,
    r: 16,
    m1: 13,
    m2: 9,
    m3: 5,
    transition: transition_512a,
};

/// WELL1024a: 32-word state, period 2^1024 - 1.
pub static WELL_1024A: WellParams = WellParams {
    k: 1024,
    p: 0,
    r: 32,
    m1: 3,
    m2: 24,
    m3: 10,
    transition: transition_1024a,
};

/// WELL19937a: 624-word state, period 2^19937 - 1.
pub static WELL_19937A: WellParams = WellParams {
    k: 19937,
    p: 31,
    r: 624,
    m1: 70,
    m2: 179,
    m3: 449,
    transition: transition_19937a,
};

/// WELL44497a: 1391-word state, period 2^44497 - 1.
pub static WELL_44497A: WellParams = WellParams {
    k: 44497,
    p: 15,
    r: 1391,
    m1: 23,
    m2: 481,
    m3: 229,
    transition: transition_44497a,
};

/// Every variant of the family, for exhaustive conformance tests.
pub static ALL_WELL_PARAMS: [&WellParams; 4] =
    [&WELL_512A, &WELL_1024A, &WELL_19937A, &WELL_44497A];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_size_matches_bit_pool() {
        for params in ALL_WELL_PARAMS {
            assert_eq!(
                params.r,
                ((params.k + params.p) / 32) as usize,
                "R inconsistent for K={}",
                params.k
            );
            assert!(params.m1 < params.r);
            assert!(params.m2 < params.r);
            assert!(params.m3 < params.r);
        }
    }

    #[test]
    fn test_boundary_masks_partition_the_word() {
        for params in ALL_WELL_PARAMS {
            assert_eq!(params.mask_low() & params.mask_high(), 0);
            assert_eq!(params.mask_low() | params.mask_high(), u32::MAX);
        }
        assert_eq!(WELL_19937A.mask_low(), 0x7fffffff);
        assert_eq!(WELL_44497A.mask_low(), 0x00007fff);
        assert_eq!(WELL_512A.mask_low(), 0);
    }

    #[test]
    fn test_masked_rotate_conditional_constant() {
        // dt bit clear: plain masked rotation.
        let plain = masked_rotate(9, 0xb729fcec, 0xfbffffff, 0x00020000, 1);
        assert_eq!(plain, (1u32 << 9) & 0xfbffffff);
        // dt bit set: the constant is XORed in.
        let flagged = masked_rotate(9, 0xb729fcec, 0xfbffffff, 0x00020000, 0x00020000);
        assert_eq!(
            flagged,
            (((0x00020000u32 << 9) ^ (0x00020000u32 >> 23)) & 0xfbffffff) ^ 0xb729fcec
        );
    }
}
