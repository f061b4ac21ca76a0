//! Slider-style signal parameters that seed classification.

use serde::{Deserialize, Serialize};

use super::clamp_finite;

/// The three user/sensor-facing scalars, each in `[0, 100]`.
///
/// These are independent of the emotion vector's sum-to-one constraint.
/// Missing fields deserialize as `0.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DerivedParameters {
    pub energy: f64,
    pub calmness: f64,
    pub tension: f64,
}

impl DerivedParameters {
    /// Lower bound of every parameter.
    pub const MIN: f64 = 0.0;

    /// Upper bound of every parameter.
    pub const MAX: f64 = 100.0;

    /// Create parameters, clamping each value into `[0, 100]`.
    pub fn new(energy: f64, calmness: f64, tension: f64) -> Self {
        Self {
            energy,
            calmness,
            tension,
        }
        .clamped()
    }

    /// Copy with every value clamped into `[0, 100]` (NaN becomes `0`).
    pub fn clamped(&self) -> Self {
        Self {
            energy: clamp_finite(self.energy, Self::MIN, Self::MAX),
            calmness: clamp_finite(self.calmness, Self::MIN, Self::MAX),
            tension: clamp_finite(self.tension, Self::MIN, Self::MAX),
        }
    }

    /// True if every value is already inside `[0, 100]`.
    pub fn is_in_range(&self) -> bool {
        [self.energy, self.calmness, self.tension]
            .iter()
            .all(|v| (Self::MIN..=Self::MAX).contains(v))
    }

    /// Largest of the three values.
    pub fn max_component(&self) -> f64 {
        self.energy.max(self.calmness).max(self.tension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let d = DerivedParameters::new(-10.0, 250.0, f64::NAN);
        assert_eq!(d, DerivedParameters::new(0.0, 100.0, 0.0));
        assert!(d.is_in_range());
    }

    #[test]
    fn test_out_of_range_detected() {
        let d = DerivedParameters {
            energy: 101.0,
            ..Default::default()
        };
        assert!(!d.is_in_range());
        assert_eq!(d.clamped().energy, 100.0);
    }

    #[test]
    fn test_max_component() {
        assert_eq!(DerivedParameters::new(10.0, 70.0, 40.0).max_component(), 70.0);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let d: DerivedParameters = serde_json::from_str(r#"{"energy": 55.5}"#).unwrap();
        assert_eq!(d.energy, 55.5);
        assert_eq!(d.calmness, 0.0);
    }
}
