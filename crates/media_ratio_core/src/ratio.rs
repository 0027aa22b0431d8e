//! Fixed-precision ratio values.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const SCALE: u64 = 1_000;

/// A width/height quotient rounded to three decimal places.
///
/// Stored as whole thousandths so that equality, hashing and the string form
/// used as a storage key are exact. Rounding is half away from zero, computed
/// in integer arithmetic, so `1920 x 1080` always becomes `1.778`.
///
/// The string form drops trailing zeros: `1`, `1.6`, `1.333`, `0`.
///
/// # Examples
///
/// ```
/// use media_ratio_core::RatioValue;
///
/// let hd = RatioValue::from_dimensions(1920, 1080).unwrap();
/// assert_eq!(hd.to_string(), "1.778");
/// assert_eq!("1.778".parse::<RatioValue>().unwrap(), hd);
/// assert_eq!(RatioValue::UNMEASURED.to_string(), "0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RatioValue(u64);

impl RatioValue {
    /// Sentinel written for images whose dimensions are unknown.
    pub const UNMEASURED: RatioValue = RatioValue(0);

    /// Round `width / height` to three places. Returns `None` when `height` is zero.
    pub fn from_dimensions(width: u32, height: u32) -> Option<Self> {
        if height == 0 {
            return None;
        }
        let numerator = 2 * u64::from(width) * SCALE + u64::from(height);
        let denominator = 2 * u64::from(height);
        Some(Self(numerator / denominator))
    }

    /// Build from a count of thousandths.
    pub fn from_thousandths(thousandths: u64) -> Self {
        Self(thousandths)
    }

    /// The value in thousandths.
    pub fn thousandths(&self) -> u64 {
        self.0
    }

    /// The value as a float, for display and approximate comparisons.
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// True for the "measured but indeterminate" sentinel.
    pub fn is_unmeasured(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for RatioValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / SCALE;
        let fraction = self.0 % SCALE;
        if fraction == 0 {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:03}", fraction);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for RatioValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));

        let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !digits_only(whole) || !digits_only(fraction)
        {
            return Err(format!("Not a ratio: {}", s));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| format!("Ratio out of range: {}", s))?
        };

        // Keep three places; a fourth digit of 5 or more rounds away from zero.
        let mut thousandths = 0u64;
        let mut round_up = false;
        for (index, digit) in fraction.chars().enumerate() {
            let value = u64::from(digit.to_digit(10).unwrap_or(0));
            match index {
                0..=2 => thousandths = thousandths * 10 + value,
                3 => round_up = value >= 5,
                _ => break,
            }
        }
        for _ in fraction.len().min(3)..3 {
            thousandths *= 10;
        }
        if round_up {
            thousandths += 1;
        }

        whole
            .checked_mul(SCALE)
            .and_then(|w| w.checked_add(thousandths))
            .map(Self)
            .ok_or_else(|| format!("Ratio out of range: {}", s))
    }
}

impl Serialize for RatioValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RatioValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Integer(u64),
            Float(f64),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Raw::Integer(whole) => Ok(Self(whole.saturating_mul(SCALE))),
            Raw::Float(value) if value >= 0.0 && value.is_finite() => {
                Ok(Self((value * SCALE as f64).round() as u64))
            }
            Raw::Float(value) => Err(serde::de::Error::custom(format!(
                "Not a ratio: {}",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        // 1001 / 2000 = 0.5005 exactly
        assert_eq!(RatioValue::from_dimensions(1001, 2000).unwrap().0, 501);
        // 1 / 3 = 0.3333...
        assert_eq!(RatioValue::from_dimensions(1, 3).unwrap().0, 333);
        // 2 / 3 = 0.6666...
        assert_eq!(RatioValue::from_dimensions(2, 3).unwrap().0, 667);
    }

    #[test]
    fn zero_height_has_no_ratio() {
        assert!(RatioValue::from_dimensions(10, 0).is_none());
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(RatioValue(1000).to_string(), "1");
        assert_eq!(RatioValue(1600).to_string(), "1.6");
        assert_eq!(RatioValue(1050).to_string(), "1.05");
        assert_eq!(RatioValue(1333).to_string(), "1.333");
        assert_eq!(RatioValue(5).to_string(), "0.005");
    }

    #[test]
    fn parse_accepts_key_forms() {
        assert_eq!("1".parse::<RatioValue>().unwrap(), RatioValue(1000));
        assert_eq!("1.6".parse::<RatioValue>().unwrap(), RatioValue(1600));
        assert_eq!(".5".parse::<RatioValue>().unwrap(), RatioValue(500));
        assert_eq!("1.7775".parse::<RatioValue>().unwrap(), RatioValue(1778));
        assert_eq!(" 0 ".parse::<RatioValue>().unwrap(), RatioValue::UNMEASURED);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("all".parse::<RatioValue>().is_err());
        assert!("-1.5".parse::<RatioValue>().is_err());
        assert!("".parse::<RatioValue>().is_err());
        assert!(".".parse::<RatioValue>().is_err());
        assert!("1.2.3".parse::<RatioValue>().is_err());
    }

    #[test]
    fn deserializes_strings_and_numbers() {
        let from_text: RatioValue = serde_json::from_str("\"1.778\"").unwrap();
        let from_float: RatioValue = serde_json::from_str("1.778").unwrap();
        let from_int: RatioValue = serde_json::from_str("0").unwrap();
        assert_eq!(from_text, RatioValue(1778));
        assert_eq!(from_float, RatioValue(1778));
        assert_eq!(from_int, RatioValue::UNMEASURED);
        assert_eq!(serde_json::to_string(&from_text).unwrap(), "\"1.778\"");
    }
}
