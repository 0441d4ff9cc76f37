use super::*;

#[test]
fn requirements_track_length_and_match() {
    assert_eq!(password_requirements("", ""), [("At least 8 characters", false), ("Passwords match", false)]);
    assert_eq!(password_requirements("longenough", "longenough"), [("At least 8 characters", true), ("Passwords match", true)]);
    assert_eq!(password_requirements("short", "short"), [("At least 8 characters", false), ("Passwords match", true)]);
}

#[test]
fn validate_register_input_builds_trimmed_request() {
    let req = validate_register_input(" new@example.com ", " Ada ", "password1", "password1");
    assert_eq!(
        req,
        Ok(RegisterRequest {
            email: "new@example.com".to_owned(),
            name: "Ada".to_owned(),
            password: "password1".to_owned(),
            confirm_password: "password1".to_owned(),
        })
    );
}

#[test]
fn validate_register_input_reports_mismatch_before_length() {
    assert_eq!(validate_register_input("a@b.com", "Ada", "short", "other"), Err(RegisterInputError::Mismatch));
    assert_eq!(validate_register_input("a@b.com", "Ada", "short", "short"), Err(RegisterInputError::PasswordTooShort));
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "Ada", "password1", "password1"), Err(RegisterInputError::Incomplete));
    assert_eq!(validate_register_input("a@b.com", "  ", "password1", "password1"), Err(RegisterInputError::Incomplete));
}
