//! Beaufort wind force from km/h

/// Inclusive upper bound in km/h for forces 0 through 11; anything faster is force 12.
const UPPER_BOUNDS_KMH: [f64; 12] = [
    1.0, 5.0, 11.0, 19.0, 28.0, 38.0, 49.0, 61.0, 74.0, 88.0, 102.0, 117.0,
];

const NAMES: [&str; 13] = [
    "Calm",
    "Light air",
    "Light breeze",
    "Gentle breeze",
    "Moderate breeze",
    "Fresh breeze",
    "Strong breeze",
    "Near gale",
    "Gale",
    "Strong gale",
    "Storm",
    "Violent storm",
    "Hurricane",
];

/// Beaufort force (0-12) for a wind speed in km/h, `None` when the speed is missing or not finite
#[must_use]
pub fn beaufort_force(kmh: Option<f64>) -> Option<u8> {
    let kmh = kmh.filter(|s| s.is_finite())?;
    let force = UPPER_BOUNDS_KMH
        .iter()
        .position(|&bound| kmh <= bound)
        .unwrap_or(UPPER_BOUNDS_KMH.len());
    u8::try_from(force).ok()
}

/// Descriptive name of a Beaufort force
#[must_use]
pub fn beaufort_name(force: u8) -> Option<&'static str> {
    NAMES.get(usize::from(force)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(1.0, 0)]
    #[case(1.1, 1)]
    #[case(5.0, 1)]
    #[case(11.0, 2)]
    #[case(19.0, 3)]
    #[case(28.0, 4)]
    #[case(38.0, 5)]
    #[case(49.0, 6)]
    #[case(50.0, 7)]
    #[case(61.0, 7)]
    #[case(74.0, 8)]
    #[case(88.0, 9)]
    #[case(102.0, 10)]
    #[case(117.0, 11)]
    #[case(117.5, 12)]
    #[case(200.0, 12)]
    fn test_beaufort_thresholds(#[case] kmh: f64, #[case] expected: u8) {
        assert_eq!(beaufort_force(Some(kmh)), Some(expected));
    }

    #[test]
    fn test_beaufort_invalid_input() {
        assert_eq!(beaufort_force(Some(f64::NAN)), None);
        assert_eq!(beaufort_force(Some(f64::INFINITY)), None);
        assert_eq!(beaufort_force(None), None);
    }

    #[test]
    fn test_beaufort_names() {
        assert_eq!(beaufort_name(0), Some("Calm"));
        assert_eq!(beaufort_name(6), Some("Strong breeze"));
        assert_eq!(beaufort_name(12), Some("Hurricane"));
        assert_eq!(beaufort_name(13), None);
    }
}
