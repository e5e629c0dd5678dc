//! Date/time bound rules. Both bounds are inclusive.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::ParseError;

crate::rule! {
    /// Validates that a date/time is not earlier than `threshold`.
    #[derive(Copy, PartialEq, Eq)]
    pub NotBefore { threshold: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input >= self.threshold }
    error(self, input) {
        ParseError::rule("not_before", "date is too early")
            .with_param("threshold", self.threshold.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
    fn not_before(threshold: DateTime<Utc>);
}

crate::rule! {
    /// Validates that a date/time is not later than `threshold`.
    #[derive(Copy, PartialEq, Eq)]
    pub NotAfter { threshold: DateTime<Utc> } for DateTime<Utc>;
    rule(self, input) { *input <= self.threshold }
    error(self, input) {
        ParseError::rule("not_after", "date is too late")
            .with_param("threshold", self.threshold.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
    fn not_after(threshold: DateTime<Utc>);
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::foundation::Rule;

    #[test]
    fn test_bounds_are_inclusive() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert!(not_before(at).validate(&at).is_ok());
        assert!(not_after(at).validate(&at).is_ok());
    }

    #[test]
    fn test_outside_bounds() {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 59).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 1).unwrap();

        assert_eq!(not_before(at).validate(&early).unwrap_err().message, "date is too early");
        assert_eq!(not_after(at).validate(&late).unwrap_err().message, "date is too late");
    }
}
