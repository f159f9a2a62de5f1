//! Randomness helpers for the eye field.
//!
//! The generator is owned by the app and threaded through explicitly; there is
//! no global RNG state.

use rand::Rng;

/// Uniform integer in `[low, high]`, inclusive on both ends.
///
/// `low == high` always returns that value. `low > high` is an error
/// condition: it logs a warning and returns `low`, keeping a diagnostic-only
/// misuse from killing the benchmark.
pub fn random_inclusive<R: Rng + ?Sized>(rng: &mut R, low: i32, high: i32) -> i32 {
    if low > high {
        log::warn!("random_inclusive: low {low} > high {high}; returning low");
        return low;
    }
    if low == high {
        return low;
    }
    rng.random_range(low..=high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x0C07_1E5)
    }

    #[test]
    fn equal_bounds_return_that_value() {
        let mut r = rng();
        assert_eq!(random_inclusive(&mut r, 7, 7), 7);
        assert_eq!(random_inclusive(&mut r, -3, -3), -3);
    }

    #[test]
    fn inverted_bounds_return_low() {
        let mut r = rng();
        assert_eq!(random_inclusive(&mut r, 10, 2), 10);
    }

    #[test]
    fn values_stay_inside_inclusive_range() {
        let mut r = rng();
        for _ in 0..1000 {
            let v = random_inclusive(&mut r, -5, 5);
            assert!((-5..=5).contains(&v), "value {v} out of range");
        }
    }

    #[test]
    fn both_endpoints_are_reachable() {
        let mut r = rng();
        let mut saw_low = false;
        let mut saw_high = false;
        for _ in 0..1000 {
            match random_inclusive(&mut r, 0, 3) {
                0 => saw_low = true,
                3 => saw_high = true,
                _ => {}
            }
        }
        assert!(saw_low && saw_high);
    }
}
