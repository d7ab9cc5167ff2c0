//! The abstract 32-bit word source and the draw operations derived from it.
//!
//! [`WordSource`] is the single customization point of the crate: every
//! engine implements `next_word` and nothing else of the numeric surface.
//! [`Draws`] builds ranged integers, doubles, booleans and byte filling
//! once, on top of that one method, so no engine duplicates the derivation
//! math.

use byteorder::{ByteOrder, LittleEndian};

/// Reciprocal of `1 + i32::MAX`; scales a 31-bit draw into `[0, 1)`.
const SCALE_31: f64 = 1.0 / 2147483648.0;

/// Reciprocal of `1 + u32::MAX`; scales a full word into `[0, 1)`.
const SCALE_32: f64 = 1.0 / 4294967296.0;

/// Produces uniformly distributed 32-bit words from internal state.
///
/// Each call advances the state; generation cannot fail once the source has
/// been constructed. A single source is not safe for concurrent mutation:
/// use one source per thread or external locking.
pub trait WordSource {
    /// Returns the next uniformly distributed 32-bit word.
    fn next_word(&mut self) -> u32;

    /// Whether [`reset`](Self::reset) restores the original sequence.
    fn can_reset(&self) -> bool {
        false
    }

    /// Restores the source to its just-seeded state. No-op when
    /// [`can_reset`](Self::can_reset) is `false`.
    fn reset(&mut self) {}
}

/// Cached, partially consumed word used to answer boolean draws.
///
/// Holds up to 32 bits of previously drawn entropy so that 32 consecutive
/// boolean draws cost exactly one underlying word generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitCache {
    word: u32,
    remaining: u8,
}

impl BitCache {
    /// Creates an empty cache; the first boolean draw will fetch a word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards any cached bits.
    pub fn clear(&mut self) {
        self.word = 0;
        self.remaining = 0;
    }
}

/// Draw operations derived purely from [`WordSource::next_word`].
///
/// Implementors only supply access to their [`BitCache`]; every other
/// method is provided. All ranged operations use half-open intervals.
pub trait Draws: WordSource {
    /// Access to the boolean bit cache owned by the source.
    fn bit_cache(&mut self) -> &mut BitCache;

    /// Returns a uniform integer in `[0, i32::MAX)`.
    ///
    /// Takes the top 31 bits of a word; the single excluded value
    /// `i32::MAX` is redrawn, so the expected cost stays one word.
    fn next_int(&mut self) -> i32 {
        loop {
            let r = (self.next_word() >> 1) as i32;
            if r != i32::MAX {
                return r;
            }
        }
    }

    /// Returns a uniform integer in `[0, max)`. Requires `max > 0`.
    fn next_int_below(&mut self, max: i32) -> i32 {
        self.next_int_between(0, max)
    }

    /// Returns a uniform integer in `[min, max)`. Requires `min < max`.
    ///
    /// Widths that fit in 31 bits scale a 31-bit draw; wider ranges (up to
    /// the full `i32::MIN..i32::MAX` span) fall back to the full unsigned
    /// word. The two paths are a deliberate precision/speed split.
    fn next_int_between(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min < max);
        let width = max as i64 - min as i64;
        if width <= i32::MAX as i64 {
            let r = (self.next_word() >> 1) as f64 * SCALE_31;
            min + (r * width as f64) as i32
        } else {
            let r = self.next_word() as f64 * SCALE_32;
            (min as i64 + (r * width as f64) as i64) as i32
        }
    }

    /// Returns a uniform double in `[0, 1)` from the top 31 bits of a word.
    fn next_double(&mut self) -> f64 {
        (self.next_word() >> 1) as f64 * SCALE_31
    }

    /// Returns a uniform double in `[min, max)`. Requires `min < max`.
    fn next_double_between(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_double() * (max - min)
    }

    /// Returns a uniform boolean, consuming one cached bit.
    fn next_boolean(&mut self) -> bool {
        if self.bit_cache().remaining == 0 {
            let word = self.next_word();
            let cache = self.bit_cache();
            cache.word = word;
            cache.remaining = 32;
        }
        let cache = self.bit_cache();
        let bit = cache.word & 1;
        cache.word >>= 1;
        cache.remaining -= 1;
        bit == 1
    }

    /// Fills `buffer` with uniform bytes, four little-endian bytes per
    /// word. A trailing partial chunk takes the low bytes of one final
    /// word.
    fn next_bytes(&mut self, buffer: &mut [u8]) {
        let mut chunks = buffer.chunks_exact_mut(4);
        for chunk in &mut chunks {
            LittleEndian::write_u32(chunk, self.next_word());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let word = self.next_word().to_le_bytes();
            rest.copy_from_slice(&word[..rest.len()]);
        }
    }
}
