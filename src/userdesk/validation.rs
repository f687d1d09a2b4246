use crate::model::{UserFields, ValidationReport};

/// Passwords longer than this many UTF-16 code units count as strong.
pub const STRONG_PASSWORD_MIN_EXCLUSIVE: usize = 8;

/// Checks submitted credentials. Email is carried but never checked.
///
/// Length is measured in UTF-16 code units, the way browser-side form code
/// measures it, so a character outside the BMP counts twice.
pub fn validate_credentials(fields: &UserFields) -> ValidationReport {
    let name_valid = !fields.name.is_empty();
    let password_valid = !fields.password.is_empty();
    let passwords_match = fields.password == fields.confirm_password;
    let strong_password = fields.password.encode_utf16().count() > STRONG_PASSWORD_MIN_EXCLUSIVE;

    ValidationReport {
        name_valid,
        password_valid,
        passwords_match,
        strong_password,
        all_valid: name_valid && password_valid && passwords_match,
    }
}
