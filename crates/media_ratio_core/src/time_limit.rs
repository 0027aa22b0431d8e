//! Wall-clock limits for the measurement command.

use crate::DEFAULT_TIME_LIMIT_SECS;
use media_ratio_error::{TimeLimitError, TimeLimitErrorKind};
use std::time::Duration;
use tracing::warn;

/// How long a measurement run may take.
///
/// # Examples
///
/// ```
/// use media_ratio_core::TimeLimit;
///
/// assert_eq!(TimeLimit::parse("120").unwrap(), TimeLimit::Seconds(120));
/// assert_eq!(TimeLimit::parse("45.9").unwrap(), TimeLimit::Seconds(45));
/// assert_eq!(TimeLimit::parse("0").unwrap(), TimeLimit::Unbounded);
/// assert!(TimeLimit::parse("abc").is_err());
///
/// // Bad flags fall back to the default instead of failing.
/// assert_eq!(TimeLimit::from_flag(Some("-5"), 30), TimeLimit::Seconds(30));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TimeLimit {
    /// Process every selected item regardless of elapsed time
    #[display("unbounded")]
    Unbounded,
    /// Stop once this many seconds (less the safety margin) have passed
    #[display("{}s", _0)]
    Seconds(u64),
}

impl Default for TimeLimit {
    fn default() -> Self {
        TimeLimit::Seconds(DEFAULT_TIME_LIMIT_SECS)
    }
}

impl TimeLimit {
    /// Interpret a whole number of seconds; zero means unbounded.
    pub fn from_secs(seconds: u64) -> Self {
        if seconds == 0 {
            TimeLimit::Unbounded
        } else {
            TimeLimit::Seconds(seconds)
        }
    }

    /// Parse user input. Fractions are floored.
    ///
    /// # Errors
    ///
    /// `Malformed` for non-numeric input, `Negative` for values below zero.
    #[track_caller]
    pub fn parse(input: &str) -> Result<Self, TimeLimitError> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .ok_or_else(|| TimeLimitError::new(TimeLimitErrorKind::Malformed(input.to_string())))?;

        if value < 0.0 {
            return Err(TimeLimitError::new(TimeLimitErrorKind::Negative(
                input.to_string(),
            )));
        }

        Ok(Self::from_secs(value.floor() as u64))
    }

    /// Resolve an optional command flag, substituting `default_secs` when the
    /// flag is absent or unusable.
    pub fn from_flag(input: Option<&str>, default_secs: u64) -> Self {
        match input {
            None => Self::from_secs(default_secs),
            Some(raw) => Self::parse(raw).unwrap_or_else(|e| {
                warn!(input = raw, error = %e.kind, default_secs, "Ignoring time limit");
                Self::from_secs(default_secs)
            }),
        }
    }

    /// The budget left after reserving `margin_secs` for reporting.
    ///
    /// A limit at or below the margin leaves a zero budget: the run still
    /// processes one item and then checks the clock.
    pub fn budget(&self, margin_secs: u64) -> Budget {
        match self {
            TimeLimit::Unbounded => Budget::Unbounded,
            TimeLimit::Seconds(secs) => {
                Budget::Within(Duration::from_secs(secs.saturating_sub(margin_secs)))
            }
        }
    }
}

/// Effective wall-clock allowance for one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    /// Never stop early
    Unbounded,
    /// Stop once elapsed time is strictly greater than this
    Within(Duration),
}

impl Budget {
    /// Whether `elapsed` has used up the budget.
    pub fn exceeded_by(&self, elapsed: Duration) -> bool {
        match self {
            Budget::Unbounded => false,
            Budget::Within(limit) => elapsed > *limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_non_numbers() {
        for input in ["abc", "", "NaN", "inf", "12s"] {
            let err = TimeLimit::parse(input).unwrap_err();
            assert!(matches!(err.kind, TimeLimitErrorKind::Malformed(_)), "{input}");
        }
    }

    #[test]
    fn parse_rejects_negative() {
        let err = TimeLimit::parse("-5").unwrap_err();
        assert!(matches!(err.kind, TimeLimitErrorKind::Negative(_)));
    }

    #[test]
    fn flag_falls_back_to_default() {
        assert_eq!(TimeLimit::from_flag(None, 30), TimeLimit::Seconds(30));
        assert_eq!(TimeLimit::from_flag(Some("abc"), 30), TimeLimit::Seconds(30));
        assert_eq!(TimeLimit::from_flag(Some("-5"), 30), TimeLimit::Seconds(30));
        assert_eq!(TimeLimit::from_flag(Some("0"), 30), TimeLimit::Unbounded);
        assert_eq!(TimeLimit::from_flag(Some("90"), 30), TimeLimit::Seconds(90));
    }

    #[test]
    fn budget_reserves_margin() {
        assert_eq!(
            TimeLimit::Seconds(30).budget(3),
            Budget::Within(Duration::from_secs(27))
        );
        assert_eq!(
            TimeLimit::Seconds(2).budget(3),
            Budget::Within(Duration::ZERO)
        );
        assert_eq!(TimeLimit::Unbounded.budget(3), Budget::Unbounded);
    }

    #[test]
    fn budget_is_strict() {
        let budget = Budget::Within(Duration::from_secs(27));
        assert!(!budget.exceeded_by(Duration::from_secs(27)));
        assert!(budget.exceeded_by(Duration::from_millis(27_001)));
        assert!(!Budget::Unbounded.exceeded_by(Duration::from_secs(u64::MAX / 2)));
    }
}
