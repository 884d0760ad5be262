use super::*;

/// Tests a request without an `Authorization` header.
///
/// Expected: Err(AuthError::MissingHeader)
#[test]
fn rejects_missing_header() {
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingHeader))
    ));
}

/// Tests headers that do not split into exactly a scheme and a token.
///
/// Expected: Err(AuthError::InvalidHeaderFormat)
#[test]
fn rejects_malformed_header() {
    let tokens = tokens();

    for value in ["Bearer", "Bearer a b", ""] {
        let headers = headers_with(value);
        let result = AuthGuard::new(&tokens, &headers).require(&[]);

        assert!(
            matches!(
                result,
                Err(AppError::AuthErr(AuthError::InvalidHeaderFormat))
            ),
            "header {:?} should be rejected as malformed",
            value
        );
    }
}

/// Tests a non-bearer authorization scheme.
///
/// Expected: Err(AuthError::UnsupportedType)
#[test]
fn rejects_unsupported_scheme() {
    let tokens = tokens();
    let headers = headers_with("Basic dXNlcjpwYXNz");

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UnsupportedType))
    ));
}

/// Tests that the scheme is matched case-insensitively.
///
/// Expected: Ok(TokenPayload)
#[test]
fn accepts_lowercase_bearer_scheme() {
    let tokens = tokens();
    let token = tokens
        .create_access_token("user-1", "user@example.com", UserRole::Employee, "emp-1")
        .unwrap();
    let headers = headers_with(&format!("bearer {}", token));

    let payload = AuthGuard::new(&tokens, &headers).require(&[]).unwrap();

    assert_eq!(payload.user_id, "user-1");
}

/// Tests a bearer token that does not verify.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_invalid_token() {
    let tokens = tokens();
    let headers = headers_with("Bearer not.a.jwt");

    let result = AuthGuard::new(&tokens, &headers).require(&[]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}
