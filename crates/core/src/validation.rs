//! Path parameter validation.
//!
//! Film ids arrive as raw path segments. They are parsed here, once, before
//! any query runs, so handlers only ever see a well-formed [`DbId`].

use crate::error::CoreError;
use crate::types::DbId;

/// Parse a raw film id path segment.
///
/// The whole token must be an integer (an optional leading `+` or `-` is
/// allowed). Absent, empty, fractional, partially numeric and out-of-range
/// values are rejected. Zero and negative ids are accepted; they simply match
/// nothing downstream.
pub fn parse_film_id(raw: Option<&str>) -> Result<DbId, CoreError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => {
            return Err(CoreError::InvalidIdentifier(
                "film id is missing".to_string(),
            ))
        }
    };

    raw.parse::<DbId>().map_err(|_| {
        CoreError::InvalidIdentifier(format!("film id '{raw}' is not an integer"))
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn accepts_plain_integers() {
        assert_eq!(parse_film_id(Some("7")).unwrap(), 7);
        assert_eq!(parse_film_id(Some("999999")).unwrap(), 999_999);
    }

    #[test]
    fn accepts_zero_and_negative_ids() {
        assert_eq!(parse_film_id(Some("0")).unwrap(), 0);
        assert_eq!(parse_film_id(Some("-3")).unwrap(), -3);
    }

    #[test]
    fn rejects_missing_and_empty() {
        assert_matches!(parse_film_id(None), Err(CoreError::InvalidIdentifier(_)));
        assert_matches!(parse_film_id(Some("")), Err(CoreError::InvalidIdentifier(_)));
    }

    #[test]
    fn rejects_partial_parses() {
        for raw in ["abc", "12.5", "12abc", " 12", "12 ", "0x10", "1e3"] {
            assert_matches!(
                parse_film_id(Some(raw)),
                Err(CoreError::InvalidIdentifier(_)),
                "expected '{raw}' to be rejected"
            );
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert_matches!(
            parse_film_id(Some("92233720368547758070")),
            Err(CoreError::InvalidIdentifier(_))
        );
    }

    #[test]
    fn error_message_names_the_token() {
        let err = parse_film_id(Some("abc")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid identifier: film id 'abc' is not an integer"
        );
    }
}
