//! gf2rand - deterministic uniform PRNG engines over GF(2) linear recurrences
//!
//! This crate provides two generator families with reproducible, bit-exact
//! output:
//! - [`Sfmt`]: the SIMD-oriented Fast Mersenne Twister, parameterized by
//!   Mersenne exponent (607 through 216091), with scalar and array seeding,
//!   period certification, 64-bit and double extraction, and bulk fill
//! - [`Well`]: the Well-Equidistributed Long-period Linear family
//!   (512/1024/19937/44497-bit variants)
//!
//! Both implement [`WordSource`], the single abstract draw primitive, and
//! through it [`Draws`], the shared layer of ranged integers, doubles,
//! booleans and byte filling.
//!
//! Generators are deterministic and resettable, but not cryptographically
//! secure, and a single instance is not safe for concurrent use.
//!
//! ## Feature Flags
//!
//! - `simd`: run the SFMT recurrence through `std::simd` (requires nightly
//!   Rust); output is bit-identical to the default portable path

#![cfg_attr(feature = "simd", feature(portable_simd))]

// The recurrences and the aliased 32/64-bit state views are defined in
// terms of little-endian word order.
#[cfg(target_endian = "big")]
compile_error!("gf2rand is only defined for little-endian targets");

pub mod error;
pub mod sfmt;
pub mod source;
pub mod well;

// Re-export commonly used types
pub use error::GeneratorError;
pub use sfmt::{Sfmt, SfmtParams};
pub use source::{BitCache, Draws, WordSource};
pub use well::{Well, WellParams};

/// Seed used by the no-argument constructors, fixed so that an unseeded
/// generator is still fully deterministic.
pub const DEFAULT_SEED: u32 = 5489;
