//! Password strength scoring.

/// Minimum score (out of 5) accepted for account creation and password
/// change. Never enforced at login.
pub const MIN_ACCEPTED_SCORE: u8 = 3;

/// Score a password on the portal's 5-point rubric
///
/// One point each for: length >= 8, a lowercase letter, an uppercase
/// letter, a digit, and a non-alphanumeric character. Advisory only; the
/// store enforces [`MIN_ACCEPTED_SCORE`] when creating or changing a
/// password.
pub fn password_strength(password: &str) -> u8 {
    let mut score = 0;
    if password.chars().count() >= 8 {
        score += 1;
    }
    if password.chars().any(|c| c.is_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_alphanumeric()) {
        score += 1;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rubric_points() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1); // lowercase only
        assert_eq!(password_strength("abcdefgh"), 2); // + length
        assert_eq!(password_strength("password123"), 3); // + digit
        assert_eq!(password_strength("Password123"), 4); // + uppercase
        assert_eq!(password_strength("Abcdef12!"), 5); // + symbol
    }

    #[test]
    fn test_short_but_varied() {
        // Four character classes but under 8 chars
        assert_eq!(password_strength("Ab1!"), 4);
    }

    #[test]
    fn test_threshold_examples_from_rubric() {
        assert!(password_strength("abc") < MIN_ACCEPTED_SCORE);
        assert!(password_strength("Abcdef12!") >= MIN_ACCEPTED_SCORE);
        assert!(password_strength("password123") >= MIN_ACCEPTED_SCORE);
    }
}
