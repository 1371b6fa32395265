//! Input validation for the controller.
//!
//! Raw user input is checked here before a [`Player`](crate::Player) is built
//! or the ledger is touched.

use thiserror::Error;

/// Rejections of raw user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Inserisci un valore valido di crediti")]
    InvalidCredits,

    #[error("Inserisci il nome del giocatore")]
    EmptyPlayerName,

    #[error("Inserisci un costo valido")]
    InvalidCost,

    #[error("Inserisci il nome della squadra")]
    EmptyTeamName,

    #[error("Devi prima impostare i crediti")]
    NoRoster,

    #[error("Aggiungi almeno un giocatore prima di esportare")]
    EmptyRoster,
}

/// Lenient integer parse.
///
/// Skips leading whitespace, accepts an optional sign and reads the longest
/// run of ASCII digits; anything after it is ignored (`"120 crediti"` is 120).
/// Returns `None` when no digit is found or the value overflows `i64`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }

    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

/// Parse a strictly positive credit amount.
pub fn parse_credits(raw: &str) -> Result<u32, ValidationError> {
    positive_u32(raw).ok_or(ValidationError::InvalidCredits)
}

/// Parse a strictly positive player cost.
pub fn parse_cost(raw: &str) -> Result<u32, ValidationError> {
    positive_u32(raw).ok_or(ValidationError::InvalidCost)
}

/// Trimmed, non-empty player name.
pub fn player_name(raw: &str) -> Result<&str, ValidationError> {
    non_empty(raw).ok_or(ValidationError::EmptyPlayerName)
}

/// Trimmed, non-empty team name.
pub fn team_name(raw: &str) -> Result<&str, ValidationError> {
    non_empty(raw).ok_or(ValidationError::EmptyTeamName)
}

fn positive_u32(raw: &str) -> Option<u32> {
    parse_int(raw).filter(|v| *v > 0).and_then(|v| u32::try_from(v).ok())
}

fn non_empty(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_prefix_semantics() {
        assert_eq!(parse_int("500"), Some(500));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("120 crediti"), Some(120));
        assert_eq!(parse_int("12.9"), Some(12));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_credits_rejects_non_positive() {
        assert_eq!(parse_credits("500"), Ok(500));
        assert_eq!(parse_credits("0"), Err(ValidationError::InvalidCredits));
        assert_eq!(parse_credits("-10"), Err(ValidationError::InvalidCredits));
        assert_eq!(parse_credits(""), Err(ValidationError::InvalidCredits));
        assert_eq!(parse_credits("lots"), Err(ValidationError::InvalidCredits));
        assert_eq!(parse_credits("5000000000"), Err(ValidationError::InvalidCredits));
    }

    #[test]
    fn test_parse_cost() {
        assert_eq!(parse_cost("1"), Ok(1));
        assert_eq!(parse_cost("0"), Err(ValidationError::InvalidCost));
        assert_eq!(parse_cost("x"), Err(ValidationError::InvalidCost));
    }

    #[test]
    fn test_names_are_trimmed() {
        assert_eq!(player_name("  Leao "), Ok("Leao"));
        assert_eq!(player_name("   "), Err(ValidationError::EmptyPlayerName));
        assert_eq!(team_name("\tAC Test\n"), Ok("AC Test"));
        assert_eq!(team_name(""), Err(ValidationError::EmptyTeamName));
    }
}
