use thiserror::Error;

/// Rejection reasons for a credit card number. The messages are part of the
/// API surface and are returned to the caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Credit card number must be of length 16")]
    InvalidLength,
    #[error("Credit card number must start with 4, 5 or 6")]
    InvalidPrefix,
    #[error("Credit card number must contain only digits")]
    NonDigitCharacter,
    #[error("No 4 back-to-back digits in the credit card number can be same")]
    RepeatedDigitRun,
}

/// Structural validation of a credit card number.
///
/// Checks run in a fixed order and stop at the first failure: exactly 16
/// characters, leading 4/5/6, decimal digits only, and no run of four or
/// more identical consecutive digits.
pub fn validate_card_number(number: &str) -> Result<(), CardError> {
    if number.chars().count() != 16 {
        return Err(CardError::InvalidLength);
    }

    if !matches!(number.chars().next(), Some('4' | '5' | '6')) {
        return Err(CardError::InvalidPrefix);
    }

    // No sign, whitespace or unicode digits; the number is stored as typed.
    if !number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CardError::NonDigitCharacter);
    }

    if number.as_bytes().windows(4).any(|w| w.iter().all(|&d| d == w[0])) {
        return Err(CardError::RepeatedDigitRun);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_numbers() {
        assert_eq!(validate_card_number("4123456789012345"), Ok(()));
        assert_eq!(validate_card_number("5105105105105100"), Ok(()));
        assert_eq!(validate_card_number("6011514433546201"), Ok(()));
        // Three in a row is still fine.
        assert_eq!(validate_card_number("4111314433546201"), Ok(()));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(validate_card_number(""), Err(CardError::InvalidLength));
        assert_eq!(
            validate_card_number("412345678901234"),
            Err(CardError::InvalidLength)
        );
        assert_eq!(
            validate_card_number("41234567890123456"),
            Err(CardError::InvalidLength)
        );
    }

    #[test]
    fn test_rejects_bad_prefix() {
        assert_eq!(
            validate_card_number("1234567890123456"),
            Err(CardError::InvalidPrefix)
        );
        assert_eq!(
            validate_card_number("7123456789012345"),
            Err(CardError::InvalidPrefix)
        );
    }

    #[test]
    fn test_rejects_non_digits() {
        assert_eq!(
            validate_card_number("4abc567890123456"),
            Err(CardError::NonDigitCharacter)
        );
        assert_eq!(
            validate_card_number("4123 56789012345"),
            Err(CardError::NonDigitCharacter)
        );
        assert_eq!(
            validate_card_number("+412345678901234"),
            Err(CardError::InvalidPrefix)
        );
    }

    #[test]
    fn test_rejects_repeated_digit_runs() {
        assert_eq!(
            validate_card_number("4111111111111111"),
            Err(CardError::RepeatedDigitRun)
        );
        // A run anywhere in the number counts, not just at the start.
        assert_eq!(
            validate_card_number("4123456777712345"),
            Err(CardError::RepeatedDigitRun)
        );
        assert_eq!(
            validate_card_number("4123456789000005"),
            Err(CardError::RepeatedDigitRun)
        );
    }

    #[test]
    fn test_checks_short_circuit_in_order() {
        // Too short and starting with '1': length wins.
        assert_eq!(validate_card_number("1234"), Err(CardError::InvalidLength));
        // Bad prefix and non-digits: prefix wins.
        assert_eq!(
            validate_card_number("1abc567890123456"),
            Err(CardError::InvalidPrefix)
        );
    }
}
