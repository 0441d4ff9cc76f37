use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  reader@example.com ", "hunter22"),
        Ok(LoginRequest { email: "reader@example.com".to_owned(), password: "hunter22".to_owned() })
    );
    assert_eq!(validate_login_input("   ", "hunter22"), Err("Enter your email and password."));
    assert_eq!(validate_login_input("reader@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let req = validate_login_input("a@b.com", " spaced ").map(|r| r.password);
    assert_eq!(req.as_deref(), Ok(" spaced "));
}

#[test]
fn credential_from_returns_token_on_success() {
    let resp = AuthResponse { token: "a.b.c".to_owned(), token_type: Some("Bearer".to_owned()), email: None, id: None };
    assert_eq!(credential_from(Ok(resp), "fallback"), Ok("a.b.c".to_owned()));
}

#[test]
fn credential_from_surfaces_server_rejection() {
    let err = ApiError::Status { status: 401, message: "Invalid email or password".to_owned() };
    assert_eq!(credential_from(Err(err), "fallback"), Err("Invalid email or password".to_owned()));
    assert_eq!(credential_from(Err(ApiError::Transport("down".to_owned())), "fallback"), Err("fallback".to_owned()));
}
