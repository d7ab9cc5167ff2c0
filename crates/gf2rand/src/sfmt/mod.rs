//! SIMD-oriented Fast Mersenne Twister engine family.
//!
//! One engine type serves every period parameterization; the named statics
//! in [`params`] are the concrete family members. The recurrence runs
//! through one of two interchangeable strategies selected at build time:
//! the portable strategy (default) or `std::simd` (feature `simd`,
//! nightly). Both are bit-identical for every parameter set, which the
//! test suite enforces whenever the SIMD strategy is compiled.
//!
//! ## Feature Flags
//!
//! - `simd`: regenerate state through `std::simd` (requires nightly Rust)
//! - Default: portable implementation (stable Rust compatible)

pub(crate) mod block;
pub mod params;

#[cfg(not(feature = "simd"))]
pub(crate) mod scalar;

// The portable strategy stays exported alongside the SIMD one so the two
// can be compared directly.
#[cfg(feature = "simd")]
pub mod scalar;

#[cfg(feature = "simd")]
pub mod simd;

#[cfg(not(feature = "simd"))]
use scalar::do_recursion;
#[cfg(feature = "simd")]
use simd::do_recursion;

pub use block::Block128;
pub use params::SfmtParams;

use crate::DEFAULT_SEED;
use crate::error::GeneratorError;
use crate::source::{BitCache, Draws, WordSource};

/// Scale factor mapping a 64-bit word onto `[0, 1)`.
const INV_2_POW_64: f64 = 1.0 / 18446744073709551616.0;

/// Largest 53-bit integer, the divisor of the 53-bit double schemes.
const MAX_53BIT: f64 = 9007199254740991.0;

/// Multiplier of the canonical Mersenne-Twister seeding recurrence.
const SEED_MULTIPLIER: u32 = 1812433253;

#[inline]
fn mix1(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(1664525)
}

#[inline]
fn mix2(x: u32) -> u32 {
    (x ^ (x >> 27)).wrapping_mul(1566083941)
}

/// Seed input retained so the sequence can be reproduced by `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SeedMaterial {
    Scalar(u32),
    Array(Vec<u32>),
}

/// SFMT generator engine.
///
/// Holds `n128` 128-bit blocks of state and a cursor counting how many
/// 32-bit words of the current regeneration have been consumed;
/// `cursor == n32` means the next draw must regenerate. Construction and
/// every reseed leave the cursor at `n32`, so stale state is never exposed
/// as output.
///
/// Cloning deep-copies the state and the retained seed material; moving
/// transfers them. A single engine must not be shared across threads
/// without external synchronization.
#[derive(Debug, Clone)]
pub struct Sfmt {
    params: &'static SfmtParams,
    state: Vec<Block128>,
    /// Consumed 32-bit words of the current regeneration, in `[0, n32]`.
    idx: usize,
    seed: SeedMaterial,
    bits: BitCache,
}

impl Sfmt {
    /// Creates an engine seeded with the fixed default seed
    /// [`DEFAULT_SEED`], for deterministic behavior when no seed is given.
    pub fn new(params: &'static SfmtParams) -> Self {
        Self::with_seed(params, DEFAULT_SEED)
    }

    /// Creates an engine from a single 32-bit seed.
    pub fn with_seed(params: &'static SfmtParams, seed: u32) -> Self {
        let mut engine = Self {
            params,
            state: vec![Block128::splat(0); params.n128()],
            idx: params.n32(),
            seed: SeedMaterial::Scalar(seed),
            bits: BitCache::new(),
        };
        engine.seed_with_scalar(seed);
        engine
    }

    /// Creates an engine from a seed array, which the engine copies and
    /// retains for [`reset`](Self::reset).
    ///
    /// # Errors
    /// [`GeneratorError::EmptySeedArray`] when `key` is empty.
    pub fn with_seed_array(
        params: &'static SfmtParams,
        key: &[u32],
    ) -> Result<Self, GeneratorError> {
        if key.is_empty() {
            return Err(GeneratorError::EmptySeedArray);
        }
        let mut engine = Self {
            params,
            state: vec![Block128::splat(0); params.n128()],
            idx: params.n32(),
            seed: SeedMaterial::Array(key.to_vec()),
            bits: BitCache::new(),
        };
        engine.seed_with_array(key);
        Ok(engine)
    }

    /// The parameter set this engine was bound to.
    pub fn params(&self) -> &'static SfmtParams {
        self.params
    }

    /// Whether [`reset`](Self::reset) is supported. Always true.
    pub fn can_reset(&self) -> bool {
        true
    }

    /// Re-runs seeding from the retained seed material, reproducing the
    /// original sequence bit-for-bit.
    pub fn reset(&mut self) {
        match std::mem::replace(&mut self.seed, SeedMaterial::Scalar(0)) {
            SeedMaterial::Scalar(seed) => {
                self.seed_with_scalar(seed);
                self.seed = SeedMaterial::Scalar(seed);
            }
            SeedMaterial::Array(key) => {
                self.seed_with_array(&key);
                self.seed = SeedMaterial::Array(key);
            }
        }
    }

    /// Returns the next 64-bit word.
    ///
    /// An odd cursor silently advances by one word first. This matches the
    /// historical behavior of mixed 32/64-bit extraction and is preserved
    /// deliberately; the skipped word is dropped, not an error.
    pub fn next_u64(&mut self) -> u64 {
        if self.idx % 2 == 1 {
            self.idx += 1;
        }
        if self.idx >= self.params.n32() {
            self.regenerate();
            self.idx = 0;
        }
        let words = block::words(&self.state);
        let value = words[self.idx] as u64 | (words[self.idx + 1] as u64) << 32;
        self.idx += 2;
        value
    }

    /// Returns a double in `[0, 1)` composed from two 32-bit draws and
    /// divided by 2^64. Shadows the 31-bit [`Draws::next_double`] scheme,
    /// which remains reachable through the trait.
    pub fn next_double(&mut self) -> f64 {
        let low = WordSource::next_word(self) as u64;
        let high = WordSource::next_word(self) as u64;
        (low | high << 32) as f64 * INV_2_POW_64
    }

    /// Returns a double in `[0, 1)` from a single 64-bit draw.
    pub fn next_double64(&mut self) -> f64 {
        self.next_u64() as f64 * INV_2_POW_64
    }

    /// Returns a 53-bit-resolution double in `[0, 1]` (both endpoints
    /// reachable).
    pub fn next_double_inclusive_one(&mut self) -> f64 {
        self.next_53bit(0.0, MAX_53BIT)
    }

    /// Returns a strictly positive 53-bit-resolution double, almost always
    /// below 1.0. At the maximal 53-bit draw (one value in 2^53) the
    /// `2^53 - 1 + 0.5` numerator rounds up to `2^53`, so the result lands
    /// one ulp above 1.0.
    pub fn next_double_positive(&mut self) -> f64 {
        self.next_53bit(0.5, MAX_53BIT)
    }

    /// Combines the top 27 bits of one draw and the top 26 of another into
    /// a 53-bit integer, then maps it through `(x + translate) / scale`.
    fn next_53bit(&mut self, translate: f64, scale: f64) -> f64 {
        let a = (WordSource::next_word(self) >> 5) as f64;
        let b = (WordSource::next_word(self) >> 6) as f64;
        (a * 67108864.0 + b + translate) / scale
    }

    /// Fills `buffer` with 32-bit words, continuing the single-draw
    /// sequence exactly.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidFillLength`] unless the length is a
    /// positive multiple of 4 and at least `n32`;
    /// [`GeneratorError::FillMidSequence`] unless the cursor is at full
    /// capacity (fresh, reset, or exactly drained).
    pub fn fill_u32(&mut self, buffer: &mut [u32]) -> Result<(), GeneratorError> {
        let n32 = self.params.n32();
        if buffer.is_empty() || buffer.len() % 4 != 0 || buffer.len() < n32 {
            return Err(GeneratorError::InvalidFillLength {
                len: buffer.len(),
                granularity: 4,
                min: n32,
            });
        }
        self.check_fill_cursor()?;
        self.fill_blocks(block::blocks_mut(buffer));
        Ok(())
    }

    /// Fills `buffer` with 64-bit words, continuing the single-draw
    /// sequence exactly.
    ///
    /// # Errors
    /// [`GeneratorError::InvalidFillLength`] unless the length is a
    /// positive multiple of 2 and at least `n64`;
    /// [`GeneratorError::FillMidSequence`] as for
    /// [`fill_u32`](Self::fill_u32).
    pub fn fill_u64(&mut self, buffer: &mut [u64]) -> Result<(), GeneratorError> {
        let n64 = self.params.n64();
        if buffer.is_empty() || buffer.len() % 2 != 0 || buffer.len() < n64 {
            return Err(GeneratorError::InvalidFillLength {
                len: buffer.len(),
                granularity: 2,
                min: n64,
            });
        }
        self.check_fill_cursor()?;
        self.fill_blocks(block::blocks_mut_from_u64(buffer));
        Ok(())
    }

    /// Advances the cursor as if `n` words had been drawn and discarded,
    /// regenerating whole blocks instead of producing them word by word.
    pub fn skip(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        let n32 = self.params.n32();
        let remaining = n32 - self.idx;
        if n <= remaining {
            self.idx += n;
        } else {
            let past_current = n - remaining;
            let full_blocks = past_current / n32;
            let final_idx = past_current % n32;
            self.regenerate();
            for _ in 0..full_blocks {
                self.regenerate();
            }
            self.idx = final_idx;
        }
    }

    // -------------------------------------------------------------------------
    // Seeding
    // -------------------------------------------------------------------------

    fn seed_with_scalar(&mut self, seed: u32) {
        let n32 = self.params.n32();
        {
            let words = block::words_mut(&mut self.state);
            words[0] = seed;
            for i in 1..n32 {
                let prev = words[i - 1];
                words[i] = SEED_MULTIPLIER
                    .wrapping_mul(prev ^ (prev >> 30))
                    .wrapping_add(i as u32);
            }
        }
        self.certify_period();
        self.idx = n32;
        self.bits.clear();
    }

    /// Array seeding: pre-fill with 0x8B bytes, then three circular mixing
    /// passes scramble the key across the whole state.
    fn seed_with_array(&mut self, key: &[u32]) {
        let n32 = self.params.n32();
        let lag = if n32 >= 623 {
            11
        } else if n32 >= 68 {
            7
        } else if n32 >= 39 {
            5
        } else {
            3
        };
        let mid = (n32 - lag) / 2;

        {
            let words = block::words_mut(&mut self.state);
            for word in words.iter_mut() {
                *word = 0x8b8b8b8b;
            }

            let count = (key.len() + 1).max(n32) - 1;

            let mut r = mix1(words[0] ^ words[mid] ^ words[n32 - 1]);
            words[mid] = words[mid].wrapping_add(r);
            r = r.wrapping_add(key.len() as u32);
            words[mid + lag] = words[mid + lag].wrapping_add(r);
            words[0] = r;

            let mut i = 1usize;
            let mut j = 0usize;
            while j < count && j < key.len() {
                let mut r = mix1(words[i] ^ words[(i + mid) % n32] ^ words[(i + n32 - 1) % n32]);
                words[(i + mid) % n32] = words[(i + mid) % n32].wrapping_add(r);
                r = r.wrapping_add(key[j]).wrapping_add(i as u32);
                words[(i + mid + lag) % n32] = words[(i + mid + lag) % n32].wrapping_add(r);
                words[i] = r;
                i = (i + 1) % n32;
                j += 1;
            }
            while j < count {
                let mut r = mix1(words[i] ^ words[(i + mid) % n32] ^ words[(i + n32 - 1) % n32]);
                words[(i + mid) % n32] = words[(i + mid) % n32].wrapping_add(r);
                r = r.wrapping_add(i as u32);
                words[(i + mid + lag) % n32] = words[(i + mid + lag) % n32].wrapping_add(r);
                words[i] = r;
                i = (i + 1) % n32;
                j += 1;
            }
            for _ in 0..n32 {
                let mut r = mix2(
                    words[i]
                        .wrapping_add(words[(i + mid) % n32])
                        .wrapping_add(words[(i + n32 - 1) % n32]),
                );
                words[(i + mid) % n32] ^= r;
                r = r.wrapping_sub(i as u32);
                words[(i + mid + lag) % n32] ^= r;
                words[i] = r;
                i = (i + 1) % n32;
            }
        }
        self.certify_period();
        self.idx = n32;
        self.bits.clear();
    }

    /// XOR-fold of the four parity-masked words, down to one bit.
    fn parity_fold(&self) -> u32 {
        let words = block::words(&self.state);
        let mut inner = 0u32;
        for i in 0..4 {
            inner ^= words[i] & self.params.parity[i];
        }
        for shift in [16, 8, 4, 2, 1] {
            inner ^= inner >> shift;
        }
        inner & 1
    }

    /// Ensures the state lies on the full-period orbit. On a failed parity
    /// check, flips the lowest-order bit of the first parity word that has
    /// any bit in common with the certification vector.
    fn certify_period(&mut self) {
        if self.parity_fold() == 1 {
            return;
        }
        for i in 0..4 {
            let mut work = 1u32;
            for _ in 0..32 {
                if work & self.params.parity[i] != 0 {
                    block::words_mut(&mut self.state)[i] ^= work;
                    return;
                }
                work <<= 1;
            }
        }
    }

    // -------------------------------------------------------------------------
    // Recurrence
    // -------------------------------------------------------------------------

    /// Advances the whole state array by one regeneration cycle.
    fn regenerate(&mut self) {
        let n = self.params.n128();
        let pos1 = self.params.pos1;
        let mut r1 = self.state[n - 2];
        let mut r2 = self.state[n - 1];

        for i in 0..(n - pos1) {
            let r = do_recursion(self.params, self.state[i], self.state[i + pos1], r1, r2);
            self.state[i] = r;
            r1 = r2;
            r2 = r;
        }
        for i in (n - pos1)..n {
            let r = do_recursion(self.params, self.state[i], self.state[i + pos1 - n], r1, r2);
            self.state[i] = r;
            r1 = r2;
            r2 = r;
        }
    }

    /// Runs the recurrence directly into `out` (`out.len() >= n128`),
    /// sourcing operands from the internal state for the first `n128`
    /// blocks and from the output itself past that point. The trailing
    /// `n128` blocks are copied back so subsequent draws continue the same
    /// sequence, and the cursor is left at full capacity.
    fn fill_blocks(&mut self, out: &mut [Block128]) {
        let n = self.params.n128();
        let pos1 = self.params.pos1;
        let size = out.len();
        debug_assert!(size >= n);

        let mut r1 = self.state[n - 2];
        let mut r2 = self.state[n - 1];

        let mut i = 0;
        while i < n - pos1 {
            let r = do_recursion(self.params, self.state[i], self.state[i + pos1], r1, r2);
            out[i] = r;
            r1 = r2;
            r2 = r;
            i += 1;
        }
        while i < n {
            let r = do_recursion(self.params, self.state[i], out[i + pos1 - n], r1, r2);
            out[i] = r;
            r1 = r2;
            r2 = r;
            i += 1;
        }
        while i < size {
            let r = do_recursion(self.params, out[i - n], out[i + pos1 - n], r1, r2);
            out[i] = r;
            r1 = r2;
            r2 = r;
            i += 1;
        }

        self.state.copy_from_slice(&out[size - n..]);
        self.idx = self.params.n32();
    }

    fn check_fill_cursor(&self) -> Result<(), GeneratorError> {
        let n32 = self.params.n32();
        if self.idx != n32 {
            return Err(GeneratorError::FillMidSequence {
                index: self.idx,
                capacity: n32,
            });
        }
        Ok(())
    }
}

impl WordSource for Sfmt {
    fn next_word(&mut self) -> u32 {
        if self.idx >= self.params.n32() {
            self.regenerate();
            self.idx = 0;
        }
        let word = block::words(&self.state)[self.idx];
        self.idx += 1;
        word
    }

    fn can_reset(&self) -> bool {
        Sfmt::can_reset(self)
    }

    fn reset(&mut self) {
        Sfmt::reset(self);
    }
}

impl Draws for Sfmt {
    fn bit_cache(&mut self) -> &mut BitCache {
        &mut self.bits
    }
}
