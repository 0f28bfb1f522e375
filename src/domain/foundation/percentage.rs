//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A value between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Share of `part` in `whole`, rounded to the nearest whole percent.
    ///
    /// An empty `whole` yields zero.
    pub fn from_ratio(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let ratio = part.min(whole) as f64 / whole as f64;
        Self::new((ratio * 100.0).round() as u8)
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_new_clamps_to_100() {
        assert_eq!(Percentage::new(50).value(), 50);
        assert_eq!(Percentage::new(101).value(), 100);
    }

    #[test]
    fn percentage_try_new_rejects_over_100() {
        match Percentage::try_new(101) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 101);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn from_ratio_rounds_to_nearest() {
        assert_eq!(Percentage::from_ratio(0, 5), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(2, 5).value(), 40);
        assert_eq!(Percentage::from_ratio(1, 3).value(), 33);
        assert_eq!(Percentage::from_ratio(2, 3).value(), 67);
        assert_eq!(Percentage::from_ratio(5, 5), Percentage::HUNDRED);
    }

    #[test]
    fn from_ratio_handles_empty_whole() {
        assert_eq!(Percentage::from_ratio(3, 0), Percentage::ZERO);
    }

    #[test]
    fn percentage_displays_correctly() {
        assert_eq!(format!("{}", Percentage::new(75)), "75%");
    }

    #[test]
    fn percentage_serializes_to_json_number() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
