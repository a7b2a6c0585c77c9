use validator::ValidateEmail;

use crate::domain::error::{Field, ValidationError};

pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const MAX_USERNAME_LENGTH: usize = 254;

/// Check that a username is a plain email address (no display name).
///
/// Checks run in a fixed order so the reported violation is deterministic:
/// emptiness, then length, then address syntax. Lengths count characters.
pub fn validate_username(raw: &str) -> Result<(), ValidationError> {
    let username = raw.trim();
    if username.is_empty() {
        return Err(ValidationError::Empty(Field::Username));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(ValidationError::TooLong(Field::Username));
    }
    if !is_plain_address(username) {
        return Err(ValidationError::MalformedAddress);
    }
    Ok(())
}

/// `local@domain` with either a dot-atom or a quoted-string local part.
fn is_plain_address(address: &str) -> bool {
    let Some(quoted) = address.strip_prefix('"') else {
        return address.validate_email();
    };

    let Some(domain) = quoted_local_part_end(quoted).and_then(|rest| rest.strip_prefix('@'))
    else {
        return false;
    };
    // the domain half is checked against a dot-atom stand-in for the local part
    !domain.is_empty() && format!("quoted@{domain}").validate_email()
}

/// Consume a quoted-string body up to its closing quote and return what follows.
fn quoted_local_part_end(quoted: &str) -> Option<&str> {
    let mut chars = quoted.char_indices();
    let mut length = 0;
    while let Some((index, c)) = chars.next() {
        match c {
            '"' if length > 0 => return Some(&quoted[index + 1..]),
            '"' => return None,
            '\\' => match chars.next() {
                Some((_, '"' | '\\')) => {}
                Some((_, escaped)) if is_quoted_text(escaped) => {}
                _ => return None,
            },
            c if is_quoted_text(c) => {}
            _ => return None,
        }
        length += 1;
    }
    None
}

fn is_quoted_text(c: char) -> bool {
    match c {
        '"' | '\\' => false,
        ' ' | '\t' => true,
        c if c.is_ascii() => c.is_ascii_graphic(),
        c => !c.is_control(),
    }
}

/// Check password length bounds and composition.
///
/// A password needs at least one alphabetic and one numeric code point.
pub fn validate_password(raw: &str) -> Result<(), ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::Empty(Field::Password));
    }

    let length = raw.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::TooShort);
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::TooLong(Field::Password));
    }

    let has_letter = raw.chars().any(char::is_alphabetic);
    let has_number = raw.chars().any(char::is_numeric);
    if !has_letter || !has_number {
        return Err(ValidationError::TooWeak);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("user@example.com")]
    #[case("first.last+tag@sub.example.org")]
    #[case("  padded@example.com  ")]
    #[case("\"john doe\"@example.com")]
    #[case("\"john\\\"doe\"@example.com")]
    fn test_username_positive(#[case] username: &str) {
        assert_eq!(validate_username(username), Ok(()));
    }

    #[rstest]
    #[case("", ValidationError::Empty(Field::Username))]
    #[case("   ", ValidationError::Empty(Field::Username))]
    #[case("not-an-email", ValidationError::MalformedAddress)]
    #[case("user@", ValidationError::MalformedAddress)]
    #[case("@example.com", ValidationError::MalformedAddress)]
    #[case("Jane Doe <jane@example.com>", ValidationError::MalformedAddress)]
    #[case("\"Jane Doe\" <jane@example.com>", ValidationError::MalformedAddress)]
    #[case("\"\"@example.com", ValidationError::MalformedAddress)]
    #[case("\"unterminated@example.com", ValidationError::MalformedAddress)]
    #[case("\"john\"doe@example.com", ValidationError::MalformedAddress)]
    #[case("\"john doe\"@", ValidationError::MalformedAddress)]
    #[case("\"john doe\"@bad domain.com", ValidationError::MalformedAddress)]
    fn test_username_negative(#[case] username: &str, #[case] expected: ValidationError) {
        assert_eq!(validate_username(username), Err(expected));
    }

    #[test]
    fn test_username_too_long() {
        let username = format!("{}@example.com", "a".repeat(250));
        assert_eq!(
            validate_username(&username),
            Err(ValidationError::TooLong(Field::Username))
        );
    }

    #[rstest]
    #[case("abcdefg1")]
    #[case("Passw0rd")]
    #[case("пароль123")]
    #[case("密码密码密码密码1")]
    fn test_password_positive(#[case] password: &str) {
        assert_eq!(validate_password(password), Ok(()));
    }

    #[rstest]
    #[case("", ValidationError::Empty(Field::Password))]
    #[case("abc", ValidationError::TooShort)]
    #[case("abcdefgh", ValidationError::TooWeak)]
    #[case("12345678", ValidationError::TooWeak)]
    #[case("!!!!????", ValidationError::TooWeak)]
    fn test_password_negative(#[case] password: &str, #[case] expected: ValidationError) {
        assert_eq!(validate_password(password), Err(expected));
    }

    #[test]
    fn test_password_length_bounds() {
        let max = format!("{}1", "a".repeat(MAX_PASSWORD_LENGTH - 1));
        assert_eq!(validate_password(&max), Ok(()));

        let over = format!("{}1", "a".repeat(MAX_PASSWORD_LENGTH));
        assert_eq!(over.chars().count(), 129);
        assert_eq!(
            validate_password(&over),
            Err(ValidationError::TooLong(Field::Password))
        );
    }

    #[test]
    fn test_password_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(validate_password("ééééé1é"), Err(ValidationError::TooShort));
    }

    #[test]
    fn test_short_password_reported_before_weak() {
        assert_eq!(validate_password("abc"), Err(ValidationError::TooShort));
    }
}
