use rand::Rng;
use rand_distr::{Distribution, Uniform};

/// `base` shifted by a uniform offset in `[-range/2, range/2)`, rounded to
/// one decimal place.
pub fn jitter<R: Rng + ?Sized>(rng: &mut R, base: f64, range: f64) -> f64 {
    round_to(base + unit_offset(rng) * range, 1)
}

/// Uniform draw from `[-0.5, 0.5)`.
pub fn unit_offset<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Uniform::new(0.0_f64, 1.0).sample(rng) - 0.5
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn jitter_stays_within_half_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let value = jitter(&mut rng, 42.0, 16.0);
            assert!((34.0..=50.0).contains(&value), "{value}");
        }
    }

    #[test]
    fn jitter_rounds_to_one_decimal() {
        let mut rng = StdRng::seed_from_u64(11);
        let value = jitter(&mut rng, 14.0, 4.0);
        assert_eq!(round_to(value, 1), value);
    }

    #[test]
    fn round_to_handles_whole_numbers() {
        assert_eq!(round_to(48123.6, 0), 48124.0);
        assert_eq!(round_to(2.25, 1), 2.3);
    }
}
