//! Text input parsing.
//!
//! Turns the raw fields a front end collects (a comma-separated request
//! list, a head position, a disk size) into typed values. Malformed input
//! becomes [`SimulationError::InvalidInput`]; nothing here panics.

use crate::error::{SimulationError, SimulationResult};
use crate::models::{RequestSet, Track};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parses a comma-separated request list such as `"98, 183, 37"`.
///
/// Blank input yields an empty set. Every malformed token is reported,
/// not just the first.
///
/// # Example
/// ```
/// use u_seek::parse::parse_requests;
///
/// let requests = parse_requests(" 98,183 , 37").unwrap();
/// assert_eq!(requests.tracks(), &[98, 183, 37]);
/// assert!(parse_requests("98, x").is_err());
/// ```
pub fn parse_requests(text: &str) -> SimulationResult<RequestSet> {
    if text.trim().is_empty() {
        return Ok(RequestSet::new());
    }

    let mut requests = RequestSet::new();
    let mut errors = Vec::new();

    for (idx, token) in text.split(',').enumerate() {
        match token.trim().parse::<Track>() {
            Ok(track) => requests.push(track),
            Err(_) => errors.push(ValidationError::new(
                ValidationErrorKind::MalformedToken,
                format!("Token #{} ('{}') is not an integer", idx + 1, token.trim()),
            )),
        }
    }

    if errors.is_empty() {
        Ok(requests)
    } else {
        Err(SimulationError::InvalidInput(errors))
    }
}

/// Parses a single integer field (head position or disk size).
pub fn parse_track(field: &str, text: &str) -> SimulationResult<Track> {
    text.trim().parse::<Track>().map_err(|_| {
        SimulationError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::MalformedToken,
            format!("{field} ('{}') is not an integer", text.trim()),
        )])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(err: SimulationError) -> Vec<ValidationErrorKind> {
        match err {
            SimulationError::InvalidInput(errors) => errors.into_iter().map(|e| e.kind).collect(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_textbook_list() {
        let requests = parse_requests("98,183,37,122,14,124,65,67").unwrap();
        assert_eq!(requests.len(), 8);
        assert_eq!(requests.tracks()[0], 98);
    }

    #[test]
    fn test_parse_negative_and_whitespace() {
        let requests = parse_requests("  -4 ,\t7 ").unwrap();
        assert_eq!(requests.tracks(), &[-4, 7]);
    }

    #[test]
    fn test_blank_is_empty() {
        assert!(parse_requests("").unwrap().is_empty());
        assert!(parse_requests("   ").unwrap().is_empty());
    }

    #[test]
    fn test_reports_every_bad_token() {
        let err = parse_requests("1, two, 3, 4.5").unwrap_err();
        assert_eq!(
            kinds(err.clone()),
            vec![ValidationErrorKind::MalformedToken; 2]
        );
        let text = err.to_string();
        assert!(text.contains("#2"));
        assert!(text.contains("4.5"));
    }

    #[test]
    fn test_empty_token_between_commas() {
        let err = parse_requests("1,,2").unwrap_err();
        assert_eq!(kinds(err), vec![ValidationErrorKind::MalformedToken]);
    }

    #[test]
    fn test_parse_track() {
        assert_eq!(parse_track("Head position", " 53 ").unwrap(), 53);
        let err = parse_track("Disk size", "big").unwrap_err();
        assert!(err.to_string().contains("Disk size"));
    }
}
