//! Speed and temperature conversions

use crate::numeric::{Finite, round_half_up};

const KMH_PER_MPS: f64 = 3.6;

/// Convert a wind speed from m/s to whole km/h.
///
/// The argument type carries the precondition: callers validate the raw value with
/// [`Finite::new`] before converting, so a missing or broken speed never turns into `0`.
#[must_use]
pub fn to_kmh(speed_mps: Finite) -> f64 {
    round_half_up(speed_mps.get() * KMH_PER_MPS)
}

#[must_use]
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Probability of precipitation (0.0-1.0) as a rounded percentage. Missing means 0%.
#[must_use]
pub fn precipitation_percent(pop: Option<f64>) -> u8 {
    let percent = round_half_up(pop.filter(|p| p.is_finite()).unwrap_or(0.0) * 100.0);
    percent.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kmh(mps: f64) -> f64 {
        to_kmh(Finite::new(mps).unwrap())
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(1.0, 4.0)]
    #[case(4.6, 17.0)]
    #[case(5.14, 19.0)]
    #[case(10.0, 36.0)]
    #[case(32.7, 118.0)]
    fn test_to_kmh(#[case] mps: f64, #[case] expected: f64) {
        assert_eq!(kmh(mps), expected);
    }

    #[test]
    fn test_to_kmh_matches_rounded_product() {
        for step in 0..500 {
            let mps = f64::from(step) * 0.137;
            assert_eq!(kmh(mps), (mps * 3.6).round());
        }
    }

    #[test]
    fn test_celsius_to_fahrenheit() {
        assert_eq!(celsius_to_fahrenheit(0.0), 32.0);
        assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
        assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
    }

    #[rstest]
    #[case(Some(0.0), 0)]
    #[case(Some(0.234), 23)]
    #[case(Some(0.5), 50)]
    #[case(Some(1.0), 100)]
    #[case(Some(1.7), 100)]
    #[case(None, 0)]
    #[case(Some(f64::NAN), 0)]
    fn test_precipitation_percent(#[case] pop: Option<f64>, #[case] expected: u8) {
        assert_eq!(precipitation_percent(pop), expected);
    }
}
