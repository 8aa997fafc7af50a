//! Seeded MT19937-64 generator with a visible draw counter
//!
//! # Algorithm
//!
//! The engine is the 64-bit Mersenne Twister (`rand_mt::Mt64`), seeded the
//! same way as the reference `init_genrand64`, so a given seed yields the
//! same stream on every platform.
//!
//! # Determinism
//!
//! The stream is a pure function of `(seed, discard_time)` plus the number
//! of raw draws taken since construction:
//! - Same seed → same sequence of raw values
//! - `with_discard(seed, k)` starts where `with_seed(seed)` stands after `k` draws
//! - `clone()` resumes exactly where the original stands

use std::fmt;

use rand_mt::Mt64;
use tracing::{debug, trace};

use super::ranged::RangedSample;

/// Largest value the engine can return from a raw draw.
pub const ENGINE_MAX: u64 = u64::MAX;

/// Deterministic random number generator
///
/// Owns its engine state exclusively. Give each thread its own instance
/// (or a clone) instead of sharing one.
///
/// # Example
/// ```
/// use randgen_core::Generator;
///
/// let mut rng = Generator::with_seed(12345);
/// let _value = rng.raw_draw();
/// let die = rng.ranged_draw_inclusive(1u8, 6);
/// assert!((1..=6).contains(&die));
/// assert_eq!(rng.generation_time(), 2);
/// ```
pub struct Generator {
    /// Seed the engine was initialised with
    seed: u64,

    /// Engine advances applied before the first visible draw
    discard_time: u64,

    /// Raw draws taken since construction
    generation_time: u64,

    engine: Mt64,
}

impl Generator {
    /// Create a generator seeded from OS entropy
    ///
    /// `generation_time` starts at 0 and nothing is discarded.
    pub fn new() -> Self {
        Self::with_seed(rand::random::<u64>())
    }

    /// Create a generator with an explicit seed
    ///
    /// # Example
    /// ```
    /// use randgen_core::Generator;
    ///
    /// let mut a = Generator::with_seed(42);
    /// let mut b = Generator::with_seed(42);
    /// assert_eq!(a.raw_draw(), b.raw_draw());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Self::with_discard(seed, 0)
    }

    /// Create a generator with an explicit seed, fast-forwarded by
    /// `discard_time` engine outputs
    ///
    /// The skipped outputs are not counted: `generation_time()` is 0 after
    /// construction whatever `discard_time` is.
    ///
    /// # Example
    /// ```
    /// use randgen_core::Generator;
    ///
    /// let mut full = Generator::with_seed(7);
    /// full.raw_draw();
    /// full.raw_draw();
    ///
    /// let mut skipped = Generator::with_discard(7, 2);
    /// assert_eq!(skipped.generation_time(), 0);
    /// assert_eq!(skipped.raw_draw(), full.raw_draw());
    /// ```
    pub fn with_discard(seed: u64, discard_time: u64) -> Self {
        let mut engine = Mt64::new(seed);
        for _ in 0..discard_time {
            engine.next_u64();
        }

        debug!(seed, discard_time, "generator seeded");

        Self {
            seed,
            discard_time,
            generation_time: 0,
            engine,
        }
    }

    /// Seed this generator was constructed with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of raw draws taken since construction
    ///
    /// Includes the draws consumed by [`Generator::ranged_draw`], excludes
    /// the construction-time discard.
    pub fn generation_time(&self) -> u64 {
        self.generation_time
    }

    /// Engine outputs skipped at construction
    pub fn discard_time(&self) -> u64 {
        self.discard_time
    }

    /// Generate the next raw 64-bit value
    ///
    /// This is the only operation that advances the engine.
    pub fn raw_draw(&mut self) -> u64 {
        self.generation_time += 1;
        self.engine.next_u64()
    }

    /// Draw a value of type `T` between `min_value` and `max_value`
    ///
    /// Bounds may be given in either order. With `include_max_value` the
    /// upper bound is reachable for integers; floats ignore the flag.
    /// Consumes exactly one raw draw.
    ///
    /// # Example
    /// ```
    /// use randgen_core::Generator;
    ///
    /// let mut rng = Generator::with_seed(99);
    /// let index = rng.ranged_draw(0u64, 10, false); // [0, 10)
    /// assert!(index < 10);
    /// let jitter = rng.ranged_draw(0.5f64, -0.5, true);
    /// assert!((-0.5..=0.5).contains(&jitter));
    /// ```
    pub fn ranged_draw<T: RangedSample>(
        &mut self,
        min_value: T,
        max_value: T,
        include_max_value: bool,
    ) -> T {
        T::sample(self, min_value, max_value, include_max_value)
    }

    /// Draw a value of type `T` in `[min_value, max_value]`
    pub fn ranged_draw_inclusive<T: RangedSample>(&mut self, min_value: T, max_value: T) -> T {
        self.ranged_draw(min_value, max_value, true)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("seed", &self.seed)
            .field("discard_time", &self.discard_time)
            .field("generation_time", &self.generation_time)
            .finish_non_exhaustive()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Generator {
    /// Snapshot the generator so the copy continues the same stream
    ///
    /// The copy behaves as `with_discard(seed, discard_time + generation_time)`:
    /// its counter restarts at 0 and its next draw equals the original's next
    /// draw.
    fn clone(&self) -> Self {
        let discard_time = self.discard_time.saturating_add(self.generation_time);
        trace!(seed = self.seed, discard_time, "generator cloned");

        Self {
            seed: self.seed,
            discard_time,
            generation_time: 0,
            engine: self.engine.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_sequence_for_default_seed() {
        let mut rng = Generator::with_seed(5489);
        assert_eq!(rng.raw_draw(), 14514284786278117030);

        for _ in 1..9999 {
            rng.raw_draw();
        }
        assert_eq!(rng.raw_draw(), 9981545732273789042);
        assert_eq!(rng.generation_time(), 10000);
    }

    #[test]
    fn test_discard_not_counted() {
        let rng = Generator::with_discard(42, 1000);
        assert_eq!(rng.seed(), 42);
        assert_eq!(rng.discard_time(), 1000);
        assert_eq!(rng.generation_time(), 0);
    }

    #[test]
    fn test_clone_leaves_original_untouched() {
        let mut rng = Generator::with_seed(3);
        rng.raw_draw();

        let copy = rng.clone();
        assert_eq!(rng.generation_time(), 1);
        assert_eq!(copy.generation_time(), 0);
        assert_eq!(copy.discard_time(), 1);
        assert_eq!(copy.seed(), 3);
    }

    #[test]
    fn test_entropy_seeded_generators_start_fresh() {
        let rng = Generator::new();
        assert_eq!(rng.generation_time(), 0);
        assert_eq!(rng.discard_time(), 0);

        let rng = Generator::default();
        assert_eq!(rng.generation_time(), 0);
    }
}
