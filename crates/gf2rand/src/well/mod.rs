//! Well-Equidistributed Long-period Linear generator family.
//!
//! The state is a flat circular buffer of R words with a logical head;
//! each draw rewrites two words and moves the head backward one slot, so
//! a step is O(1) regardless of R. The circular neighbor and tap indices
//! are precomputed into tables at construction, keeping modulo arithmetic
//! off the hot path.

pub mod params;

pub use params::WellParams;

use params::Taps;

use crate::DEFAULT_SEED;
use crate::error::GeneratorError;
use crate::source::{BitCache, Draws, WordSource};

/// Multiplier of the LCG expansion shared with the SFMT scalar seeding.
const SEED_MULTIPLIER: u32 = 1812433253;

/// WELL generator engine.
///
/// Bound to one of the named parameter sets in [`params`]. Cloning
/// deep-copies state and retained seed material; a single engine must not
/// be shared across threads without external synchronization.
#[derive(Debug, Clone)]
pub struct Well {
    params: &'static WellParams,
    state: Vec<u32>,
    /// Logical head position in the circular state.
    index: usize,
    /// Predecessor index table: `pred[j] == (j + R - 1) % R`.
    pred: Vec<usize>,
    /// Second-predecessor index table.
    pred2: Vec<usize>,
    /// Tap tables for the +M1, +M2 and +M3 offsets.
    tap1: Vec<usize>,
    tap2: Vec<usize>,
    tap3: Vec<usize>,
    seed: Vec<u32>,
    bits: BitCache,
}

impl Well {
    /// Creates an engine seeded with the fixed default seed
    /// [`DEFAULT_SEED`].
    pub fn new(params: &'static WellParams) -> Self {
        Self::with_seed(params, DEFAULT_SEED)
    }

    /// Creates an engine from a single 32-bit seed, expanded across the
    /// state by the canonical Mersenne-Twister seeding recurrence.
    pub fn with_seed(params: &'static WellParams, seed: u32) -> Self {
        Self::build(params, vec![seed])
    }

    /// Creates an engine from a seed array, which the engine copies and
    /// retains for [`reset`](Self::reset). Arrays longer than R are
    /// truncated; shorter ones are expanded by the LCG mixing recurrence.
    ///
    /// # Errors
    /// [`GeneratorError::EmptySeedArray`] when `key` is empty.
    pub fn with_seed_array(
        params: &'static WellParams,
        key: &[u32],
    ) -> Result<Self, GeneratorError> {
        if key.is_empty() {
            return Err(GeneratorError::EmptySeedArray);
        }
        Ok(Self::build(params, key.to_vec()))
    }

    fn build(params: &'static WellParams, key: Vec<u32>) -> Self {
        let r = params.r;
        let mut engine = Self {
            params,
            state: vec![0; r],
            index: 0,
            pred: table(r, r - 1),
            pred2: table(r, r - 2),
            tap1: table(r, params.m1),
            tap2: table(r, params.m2),
            tap3: table(r, params.m3),
            seed: key,
            bits: BitCache::new(),
        };
        engine.apply_seed();
        engine
    }

    /// The parameter set this engine was bound to.
    pub fn params(&self) -> &'static WellParams {
        self.params
    }

    /// Whether [`reset`](Self::reset) is supported. Always true.
    pub fn can_reset(&self) -> bool {
        true
    }

    /// Re-runs seeding from the retained seed array, reproducing the
    /// original sequence bit-for-bit.
    pub fn reset(&mut self) {
        self.apply_seed();
    }

    fn apply_seed(&mut self) {
        let r = self.params.r;
        let copied = self.seed.len().min(r);
        self.state[..copied].copy_from_slice(&self.seed[..copied]);
        for i in copied..r {
            let prev = self.state[i - 1];
            self.state[i] = SEED_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = 0;
        self.bits.clear();
    }
}

/// Circular index table: `table(r, offset)[j] == (j + offset) % r`.
fn table(r: usize, offset: usize) -> Vec<usize> {
    (0..r).map(|j| (j + offset) % r).collect()
}

impl WordSource for Well {
    fn next_word(&mut self) -> u32 {
        let i = self.index;
        let taps = Taps {
            z0: (self.state[self.pred[i]] & self.params.mask_high())
                | (self.state[self.pred2[i]] & self.params.mask_low()),
            v0: self.state[i],
            vm1: self.state[self.tap1[i]],
            vm2: self.state[self.tap2[i]],
            vm3: self.state[self.tap3[i]],
        };
        let (new_v0, new_v1) = (self.params.transition)(taps);

        self.state[i] = new_v1;
        let head = self.pred[i];
        self.state[head] = new_v0;
        self.index = head;
        new_v0
    }

    fn can_reset(&self) -> bool {
        Well::can_reset(self)
    }

    fn reset(&mut self) {
        Well::reset(self);
    }
}

impl Draws for Well {
    fn bit_cache(&mut self) -> &mut BitCache {
        &mut self.bits
    }
}
