//! Period-defining parameter sets for the SFMT family.
//!
//! Each set binds a Mersenne exponent to the recurrence constants of the
//! published generator with that period. An engine holds a `&'static`
//! reference to one of these; the named statics below are the concrete
//! generator instances of the family.

/// Recurrence and certification constants for one SFMT variant.
///
/// `mexp` fixes the period (a multiple of 2^mexp - 1) and the state size;
/// the shift/mask constants define the per-block recurrence; `parity` is
/// the period-certification vector.
#[derive(Debug, PartialEq, Eq)]
pub struct SfmtParams {
    /// Mersenne exponent.
    pub mexp: u32,
    /// Tap offset of the "b" operand, in 128-bit blocks.
    pub pos1: usize,
    /// Per-lane left shift, in bits.
    pub sl1: u32,
    /// Whole-block left shift, in bytes.
    pub sl2: usize,
    /// Per-lane right shift, in bits.
    pub sr1: u32,
    /// Whole-block right shift, in bytes.
    pub sr2: usize,
    /// Per-lane AND masks applied to the `sr1`-shifted operand.
    pub msk: [u32; 4],
    /// Period-certification parity vector.
    pub parity: [u32; 4],
}

impl SfmtParams {
    /// State size in 128-bit blocks.
    pub const fn n128(&self) -> usize {
        self.mexp as usize / 128 + 1
    }

    /// State size in 32-bit words.
    pub const fn n32(&self) -> usize {
        self.n128() * 4
    }

    /// State size in 64-bit words.
    pub const fn n64(&self) -> usize {
        self.n128() * 2
    }
}

/// SFMT-607: period 2^607 - 1, 5-block state.
pub static SFMT_607: SfmtParams = SfmtParams {
    mexp: 607,
    pos1: 2,
    sl1: 15,
    sl2: 3,
    sr1: 13,
    sr2: 3,
    msk: [0xfdff37ff, 0xef7f3f7d, 0xff777b7d, 0x7ff7fb2f],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x5986f054],
};

/// SFMT-1279: period 2^1279 - 1.
pub static SFMT_1279: SfmtParams = SfmtParams {
    mexp: 1279,
    pos1: 7,
    sl1: 14,
    sl2: 3,
    sr1: 5,
    sr2: 1,
    msk: [0xf7fefffd, 0x7fefcfff, 0xaff3ef3f, 0xb5ffff7f],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x20000000],
};

/// SFMT-2281: period 2^2281 - 1.
pub static SFMT_2281: SfmtParams = SfmtParams {
    mexp: 2281,
    pos1: 12,
    sl1: 19,
    sl2: 1,
    sr1: 5,
    sr2: 1,
    msk: [0xbff7ffbf, 0xfdfffffe, 0xf7ffef7f, 0xf2f7cbbf],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x41dfa600],
};

/// SFMT-4253: period 2^4253 - 1.
pub static SFMT_4253: SfmtParams = SfmtParams {
    mexp: 4253,
    pos1: 17,
    sl1: 20,
    sl2: 1,
    sr1: 7,
    sr2: 1,
    msk: [0x9f7bffff, 0x9fffff5f, 0x3efffffb, 0xfffff7bb],
    parity: [0xa8000001, 0xaf5390a3, 0xb740b3f8, 0x6c11486d],
};

/// SFMT-11213: period 2^11213 - 1.
pub static SFMT_11213: SfmtParams = SfmtParams {
    mexp: 11213,
    pos1: 68,
    sl1: 14,
    sl2: 3,
    sr1: 7,
    sr2: 3,
    msk: [0xeffff7fb, 0xffffffef, 0xdfdfbfff, 0x7fffdbfd],
    parity: [0x00000001, 0x00000000, 0xe8148000, 0xd0c7afa3],
};

/// SFMT-19937: period 2^19937 - 1, the most widely used member.
pub static SFMT_19937: SfmtParams = SfmtParams {
    mexp: 19937,
    pos1: 122,
    sl1: 18,
    sl2: 1,
    sr1: 11,
    sr2: 1,
    msk: [0xdfffffef, 0xddfecb7f, 0xbffaffff, 0xbffffff6],
    parity: [0x00000001, 0x00000000, 0x00000000, 0x13c9e684],
};

/// SFMT-44497: period 2^44497 - 1.
pub static SFMT_44497: SfmtParams = SfmtParams {
    mexp: 44497,
    pos1: 330,
    sl1: 5,
    sl2: 3,
    sr1: 9,
    sr2: 3,
    msk: [0xeffffffb, 0xdfbebfff, 0xbfbf7bef, 0x9ffd7bff],
    parity: [0x00000001, 0x00000000, 0xa3ac4000, 0xecc1327a],
};

/// SFMT-86243: period 2^86243 - 1.
pub static SFMT_86243: SfmtParams = SfmtParams {
    mexp: 86243,
    pos1: 366,
    sl1: 6,
    sl2: 7,
    sr1: 19,
    sr2: 1,
    msk: [0xfdbffbff, 0xbff7ff3f, 0xfd77efff, 0xbf9ff3ff],
    parity: [0x00000001, 0x00000000, 0x00000000, 0xe9528d85],
};

/// SFMT-132049: period 2^132049 - 1.
pub static SFMT_132049: SfmtParams = SfmtParams {
    mexp: 132049,
    pos1: 110,
    sl1: 19,
    sl2: 1,
    sr1: 21,
    sr2: 1,
    msk: [0xffffbb5f, 0xfb6ebf95, 0xfffefffa, 0xcff77fff],
    parity: [0x00000001, 0x00000000, 0xcb520000, 0xc7e91c7d],
};

/// SFMT-216091: period 2^216091 - 1, the longest-period member.
pub static SFMT_216091: SfmtParams = SfmtParams {
    mexp: 216091,
    pos1: 627,
    sl1: 11,
    sl2: 3,
    sr1: 10,
    sr2: 1,
    msk: [0xbff7bff7, 0xbfffffff, 0xbffffa7f, 0xffddfbfb],
    parity: [0xf8000001, 0x89e80709, 0x3bd2b64b, 0x0c64b1e4],
};

/// Every parameter set of the family, for exhaustive conformance tests.
pub static ALL_SFMT_PARAMS: [&SfmtParams; 10] = [
    &SFMT_607,
    &SFMT_1279,
    &SFMT_2281,
    &SFMT_4253,
    &SFMT_11213,
    &SFMT_19937,
    &SFMT_44497,
    &SFMT_86243,
    &SFMT_132049,
    &SFMT_216091,
];
