//! Wind direction labels
//!
//! Two resolutions are kept as separate operations: station cards use the 8-point rose, the
//! forecast page uses the 16-point one.

use crate::numeric::round_half_up;

const COARSE: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

const FINE: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Fold any finite angle into `[0, 360)`
#[must_use]
pub fn normalize_degrees(degrees: f64) -> f64 {
    ((degrees % 360.0) + 360.0) % 360.0
}

fn sector_label(degrees: Option<f64>, table: &[&'static str]) -> Option<&'static str> {
    let degrees = degrees.filter(|d| d.is_finite())?;
    let width = 360.0 / table.len() as f64;
    let index = round_half_up(normalize_degrees(degrees) / width) as usize % table.len();
    Some(table[index])
}

/// 8-point compass label (45° sectors centred on N, NE, E, ...)
#[must_use]
pub fn direction_label_coarse(degrees: Option<f64>) -> Option<&'static str> {
    sector_label(degrees, &COARSE)
}

/// 16-point compass label (22.5° sectors centred on N, NNE, NE, ...)
#[must_use]
pub fn direction_label_fine(degrees: Option<f64>) -> Option<&'static str> {
    sector_label(degrees, &FINE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, "N")]
    #[case(45.0, "NE")]
    #[case(90.0, "E")]
    #[case(135.0, "SE")]
    #[case(180.0, "S")]
    #[case(225.0, "SW")]
    #[case(270.0, "W")]
    #[case(315.0, "NW")]
    #[case(22.4, "N")]
    #[case(22.5, "NE")]
    #[case(350.0, "N")]
    #[case(359.9, "N")]
    #[case(-90.0, "W")]
    #[case(720.0, "N")]
    fn test_coarse_labels(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(direction_label_coarse(Some(degrees)), Some(expected));
    }

    #[rstest]
    #[case(0.0, "N")]
    #[case(22.5, "NNE")]
    #[case(45.0, "NE")]
    #[case(67.5, "ENE")]
    #[case(200.0, "SSW")]
    #[case(250.0, "WSW")]
    #[case(337.5, "NNW")]
    #[case(355.0, "N")]
    #[case(-22.5, "NNW")]
    fn test_fine_labels(#[case] degrees: f64, #[case] expected: &str) {
        assert_eq!(direction_label_fine(Some(degrees)), Some(expected));
    }

    #[test]
    fn test_coarse_label_is_periodic() {
        for step in -100..100 {
            let degrees = f64::from(step) * 7.3;
            assert_eq!(
                direction_label_coarse(Some(degrees)),
                direction_label_coarse(Some(degrees + 360.0)),
                "labels differ for {degrees}"
            );
        }
    }

    #[test]
    fn test_invalid_direction_has_no_label() {
        assert_eq!(direction_label_coarse(None), None);
        assert_eq!(direction_label_coarse(Some(f64::NAN)), None);
        assert_eq!(direction_label_fine(Some(f64::INFINITY)), None);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
    }
}
