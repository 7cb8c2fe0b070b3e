//! Tests for header parsing and credential verification.

use super::{
    AuthError, CredentialVerifier, Credentials, StaticCredentialVerifier, authenticate,
    parse_basic_authorization,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rstest::{fixture, rstest};

#[fixture]
fn verifier() -> StaticCredentialVerifier {
    StaticCredentialVerifier::new(Credentials::new("operator", "s3cret:with:colons"))
}

fn basic(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}

#[rstest]
fn parse_accepts_password_containing_colons() {
    let credentials =
        parse_basic_authorization(&basic("operator", "s3cret:with:colons")).expect("valid header");
    assert_eq!(credentials.username(), "operator");
    assert_eq!(credentials.password(), "s3cret:with:colons");
}

#[rstest]
#[case("Bearer abc")]
#[case("Basic")]
#[case("Basic !!!not-base64!!!")]
#[case("Basic bm9jb2xvbg==")]
fn parse_rejects_malformed_headers(#[case] header: &str) {
    assert_eq!(
        parse_basic_authorization(header),
        Err(AuthError::MalformedHeader)
    );
}

#[rstest]
fn authenticate_requires_a_header(verifier: StaticCredentialVerifier) {
    assert_eq!(
        authenticate(&verifier, None),
        Err(AuthError::MissingCredentials)
    );
}

#[rstest]
fn authenticate_accepts_configured_credentials(verifier: StaticCredentialVerifier) {
    let header = basic("operator", "s3cret:with:colons");
    assert_eq!(authenticate(&verifier, Some(&header)), Ok(()));
}

#[rstest]
#[case("operator", "wrong")]
#[case("admin", "s3cret:with:colons")]
#[case("", "")]
fn authenticate_rejects_other_credentials(
    verifier: StaticCredentialVerifier,
    #[case] username: &str,
    #[case] password: &str,
) {
    let header = basic(username, password);
    assert_eq!(
        authenticate(&verifier, Some(&header)),
        Err(AuthError::InvalidCredentials)
    );
}

#[rstest]
fn verifier_is_usable_as_trait_object(verifier: StaticCredentialVerifier) {
    let boxed: Box<dyn CredentialVerifier> = Box::new(verifier);
    assert!(boxed.verify(&Credentials::new("operator", "s3cret:with:colons")));
}

#[rstest]
fn debug_output_redacts_password() {
    let rendered = format!("{:?}", Credentials::new("operator", "hunter2"));
    assert!(rendered.contains("operator"));
    assert!(!rendered.contains("hunter2"));
}
