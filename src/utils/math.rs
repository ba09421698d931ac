//! # Game Mathematics
//!
//! Random draws and grid arithmetic shared by placement, movement and theft.

use rand::Rng;

/// Draws a uniformly random integer from the inclusive range `[low, high]`.
///
/// The bounds may be given in either order.
///
/// # Examples
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use treasure_hunt::random_between;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let value = random_between(&mut rng, 3, 5);
/// assert!((3..=5).contains(&value));
/// ```
pub fn random_between<R: Rng + ?Sized>(rng: &mut R, low: i64, high: i64) -> i64 {
    if low <= high {
        rng.gen_range(low..=high)
    } else {
        rng.gen_range(high..=low)
    }
}

/// Offsets `origin` by `delta` and clamps the result into `[0, size - 1]`.
///
/// Clamping, not wrapping: a monster pushed past an edge stops on that edge.
pub fn clamp_offset(origin: usize, delta: i64, size: usize) -> usize {
    let max = size.saturating_sub(1) as i64;
    (origin as i64 + delta).clamp(0, max) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_between_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(12345);
        for _ in 0..500 {
            let value = random_between(&mut rng, -4, 4);
            assert!((-4..=4).contains(&value));
        }
    }

    #[test]
    fn test_random_between_single_value() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_between(&mut rng, 3, 3), 3);
    }

    #[test]
    fn test_random_between_reversed_bounds() {
        let mut rng = StdRng::seed_from_u64(1);
        let value = random_between(&mut rng, 5, 2);
        assert!((2..=5).contains(&value));
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(0, -3, 5), 0);
        assert_eq!(clamp_offset(4, 3, 5), 4);
        assert_eq!(clamp_offset(2, 1, 5), 3);
        assert_eq!(clamp_offset(0, 2, 1), 0);
    }
}
