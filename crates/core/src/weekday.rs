//! Weekday tokens and weekday-set codes.
//!
//! A toon's release schedule is stored as a weekday-set code: one or more
//! 3-letter tokens joined by commas, e.g. `"Tue,Thr"`. Filters take a single
//! token and match it against whole comma-delimited elements, never against
//! raw substrings.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The fixed token vocabulary, in calendar order.
pub const WEEKDAY_TOKENS: [&str; 7] = ["Mon", "Tue", "Wed", "Thr", "Fri", "Sat", "Sun"];

/// Separator between tokens in a weekday-set code.
pub const SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thr,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thr,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// The 3-letter token stored in the database.
    pub const fn token(self) -> &'static str {
        WEEKDAY_TOKENS[self as usize]
    }

    /// Parse a single token, e.g. a `?weekday=` query parameter.
    pub fn parse_token(token: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|day| day.token() == token)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Weekday representation should be one of: {}",
                    WEEKDAY_TOKENS.join(", ")
                ))
            })
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Weekday {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_token(s)
    }
}

/// Validate a weekday-set code such as `"Mon"` or `"Tue,Thr"`.
///
/// Every comma-separated element must be a vocabulary token; empty elements
/// (`""`, `"Tue,"`, `",Mon"`) are rejected. Duplicate tokens are accepted.
pub fn validate_weekday_code(code: &str) -> Result<Vec<Weekday>, CoreError> {
    let invalid = || {
        CoreError::Validation(format!(
            "Weekday representation should be one of the combinations of: {}",
            WEEKDAY_TOKENS.join(", ")
        ))
    };

    code.split(SEPARATOR)
        .map(|element| Weekday::parse_token(element).map_err(|_| invalid()))
        .collect()
}

/// Whether `code` contains `day` as a whole comma-delimited element.
///
/// This is the in-memory twin of the SQL predicate
/// `$token = ANY(string_to_array(weekday, ','))` used by the feed queries.
pub fn code_contains(code: &str, day: Weekday) -> bool {
    code.split(SEPARATOR).any(|element| element == day.token())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn tokens_round_trip() {
        for day in Weekday::ALL {
            assert_eq!(Weekday::parse_token(day.token()).unwrap(), day);
        }
        assert_eq!("Thr".parse::<Weekday>().unwrap(), Weekday::Thr);
    }

    #[test]
    fn single_token_rejects_long_names() {
        assert_matches!(Weekday::parse_token("Tuesday"), Err(CoreError::Validation(_)));
        assert_matches!(Weekday::parse_token("Thu"), Err(CoreError::Validation(_)));
        assert_matches!(Weekday::parse_token("mon"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn filter_error_lists_vocabulary() {
        let err = Weekday::parse_token("Xyz").unwrap_err();
        assert!(err
            .to_string()
            .contains("Mon, Tue, Wed, Thr, Fri, Sat, Sun"));
    }

    #[test]
    fn accepts_valid_codes() {
        assert_eq!(
            validate_weekday_code("Tue,Thr").unwrap(),
            vec![Weekday::Tue, Weekday::Thr]
        );
        assert_eq!(validate_weekday_code("Mon").unwrap(), vec![Weekday::Mon]);
        assert_eq!(validate_weekday_code("Sun,Mon").unwrap().len(), 2);
        assert_eq!(validate_weekday_code("Sat,Sat").unwrap().len(), 2);
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "Tuesday", "Tue,", ",Tue", "Tue,,Thr", "TueThr", "Tue, Thr", "Thu"] {
            assert_matches!(
                validate_weekday_code(code),
                Err(CoreError::Validation(msg)) if msg.contains("Mon, Tue, Wed"),
                "code {code:?} should be rejected"
            );
        }
    }

    #[test]
    fn containment_is_token_aware() {
        assert!(code_contains("Tue,Thr", Weekday::Tue));
        assert!(code_contains("Tue,Thr", Weekday::Thr));
        assert!(code_contains("Wed", Weekday::Wed));
        assert!(!code_contains("Tue,Thr", Weekday::Wed));
        assert!(!code_contains("Wednesday", Weekday::Wed));
        assert!(!code_contains("Saturday,Mon", Weekday::Sat));
    }
}
