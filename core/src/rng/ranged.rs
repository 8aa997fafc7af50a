//! Mapping one raw draw onto a bounded range
//!
//! Integers use modulo reduction in the unsigned type of matching width.
//! This is not a rejection sampler: ranges that do not divide 2^64 evenly
//! carry a small bias toward low offsets, and that bias is part of the
//! reproducible output.
//!
//! Floats rescale the raw value by [`ENGINE_MAX`] into `[0, 1]` and stretch
//! it over the range.

use super::generator::{Generator, ENGINE_MAX};

mod sealed {
    pub trait Sealed {}
}

/// Numeric types [`Generator::ranged_draw`] can produce
///
/// Sealed: implemented for `i8 i16 i32 i64 u8 u16 u32 u64 f32 f64` only.
pub trait RangedSample: Copy + PartialOrd + sealed::Sealed {
    /// Map one raw draw from `rng` onto the range between the two bounds
    fn sample(rng: &mut Generator, min_value: Self, max_value: Self, include_max_value: bool)
        -> Self;
}

macro_rules! impl_ranged_int {
    ($($t:ty => $u:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl RangedSample for $t {
            fn sample(
                rng: &mut Generator,
                mut min_value: $t,
                mut max_value: $t,
                include_max_value: bool,
            ) -> $t {
                if min_value > max_value {
                    std::mem::swap(&mut min_value, &mut max_value);
                }

                let mut diff = (max_value as $u).wrapping_sub(min_value as $u);

                if include_max_value {
                    // diff + 1 would overflow; reduce by the maximum instead,
                    // which leaves the top offset unreachable.
                    if diff == <$u>::MAX {
                        let offset = (rng.raw_draw() % (<$u>::MAX as u64)) as $u;
                        return (min_value as $u).wrapping_add(offset) as $t;
                    }
                    diff += 1;
                }

                // Empty half-open range.
                if diff == 0 {
                    rng.raw_draw();
                    return min_value;
                }

                let offset = (rng.raw_draw() % (diff as u64)) as $u;
                (min_value as $u).wrapping_add(offset) as $t
            }
        }
    )*};
}

impl_ranged_int!(
    i8 => u8,
    i16 => u16,
    i32 => u32,
    i64 => u64,
    u8 => u8,
    u16 => u16,
    u32 => u32,
    u64 => u64,
);

macro_rules! impl_ranged_float {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl RangedSample for $t {
            fn sample(
                rng: &mut Generator,
                mut min_value: $t,
                mut max_value: $t,
                _include_max_value: bool,
            ) -> $t {
                if min_value > max_value {
                    std::mem::swap(&mut min_value, &mut max_value);
                }

                let diff = max_value - min_value;
                let unit = rng.raw_draw() as $t / ENGINE_MAX as $t;
                unit * diff + min_value
            }
        }
    )*};
}

impl_ranged_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_raw_modulo_span() {
        let mut reference = Generator::with_seed(2024);
        let mut rng = Generator::with_seed(2024);

        for _ in 0..100 {
            let raw = reference.raw_draw();
            let value = rng.ranged_draw(10u32, 20, true);
            assert_eq!(value, 10 + (raw % 11) as u32);
        }
    }

    #[test]
    fn test_signed_offset_wraps_from_min() {
        let mut reference = Generator::with_seed(77);
        let mut rng = Generator::with_seed(77);

        for _ in 0..100 {
            let raw = reference.raw_draw();
            let value = rng.ranged_draw(-100i8, 100, false);
            assert_eq!(value as i64, -100 + (raw % 200) as i64);
        }
    }

    #[test]
    fn test_full_width_reduces_by_type_maximum() {
        let mut reference = Generator::with_seed(5);
        let mut rng = Generator::with_seed(5);

        for _ in 0..100 {
            let raw = reference.raw_draw();
            let value = rng.ranged_draw(u16::MIN, u16::MAX, true);
            assert_eq!(value, (raw % u16::MAX as u64) as u16);
        }
    }

    #[test]
    fn test_full_width_u64_never_hits_maximum_offset() {
        let mut rng = Generator::with_seed(11);
        for _ in 0..1000 {
            assert_ne!(rng.ranged_draw(i64::MIN, i64::MAX, true), i64::MAX);
        }
    }

    #[test]
    fn test_empty_half_open_range_returns_min() {
        let mut rng = Generator::with_seed(1);
        assert_eq!(rng.ranged_draw(9i32, 9, false), 9);
        assert_eq!(rng.generation_time(), 1);
    }

    #[test]
    fn test_degenerate_inclusive_range() {
        let mut rng = Generator::with_seed(1);
        for _ in 0..10 {
            assert_eq!(rng.ranged_draw_inclusive(-3i16, -3), -3);
        }
        assert_eq!(rng.generation_time(), 10);
    }

    #[test]
    fn test_float_rescales_raw_value() {
        let mut reference = Generator::with_seed(8);
        let mut rng = Generator::with_seed(8);

        let raw = reference.raw_draw();
        let value = rng.ranged_draw(2.0f64, 4.0, true);
        let expected = raw as f64 / u64::MAX as f64 * 2.0 + 2.0;
        assert_eq!(value, expected);
    }

    #[test]
    fn test_float_ignores_include_flag() {
        let mut a = Generator::with_seed(123);
        let mut b = Generator::with_seed(123);

        for _ in 0..100 {
            assert_eq!(
                a.ranged_draw(-1.0f32, 1.0, true),
                b.ranged_draw(-1.0f32, 1.0, false)
            );
        }
    }
}
