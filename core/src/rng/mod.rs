//! Deterministic random number generation
//!
//! A seeded 64-bit Mersenne Twister wrapped in [`Generator`], plus the
//! per-type range mapping in [`RangedSample`].
//! CRITICAL: Every ranged draw consumes exactly one raw draw.

mod generator;
mod ranged;

pub use generator::{Generator, ENGINE_MAX};
pub use ranged::RangedSample;
