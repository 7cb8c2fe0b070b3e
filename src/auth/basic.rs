//! `Basic` authorization header parsing.

use super::{CredentialVerifier, Credentials};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

/// Reasons a request fails authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No `Authorization` header was sent.
    #[error("Unauthorized access. Please provide valid credentials.")]
    MissingCredentials,

    /// The header is not a decodable `Basic` credential.
    #[error("Malformed authorization header.")]
    MalformedHeader,

    /// The credentials were rejected by the verifier.
    #[error("Unauthorized access. Please provide valid credentials.")]
    InvalidCredentials,
}

/// Parses `Basic <base64(username:password)>`.
///
/// The password is everything after the first colon, so it may itself
/// contain colons.
///
/// # Errors
///
/// Returns [`AuthError::MalformedHeader`] when the scheme is not `Basic`,
/// the payload is not valid base64 or UTF-8, or it lacks a colon.
///
/// # Examples
///
/// ```rust
/// use taskledger::auth::parse_basic_authorization;
///
/// let credentials = parse_basic_authorization("Basic YWRtaW46c2VjcmV0").unwrap();
/// assert_eq!(credentials.username(), "admin");
/// assert_eq!(credentials.password(), "secret");
/// ```
pub fn parse_basic_authorization(header: &str) -> Result<Credentials, AuthError> {
    let (scheme, encoded) = header
        .trim()
        .split_once(' ')
        .ok_or(AuthError::MalformedHeader)?;
    if scheme != "Basic" {
        return Err(AuthError::MalformedHeader);
    }
    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| AuthError::MalformedHeader)?;
    let text = String::from_utf8(decoded).map_err(|_| AuthError::MalformedHeader)?;
    let (username, password) = text.split_once(':').ok_or(AuthError::MalformedHeader)?;
    Ok(Credentials::new(username, password))
}

/// Checks an optional `Authorization` header value against `verifier`.
///
/// # Errors
///
/// Returns the [`AuthError`] describing why the request is rejected.
pub fn authenticate(
    verifier: &(impl CredentialVerifier + ?Sized),
    header: Option<&str>,
) -> Result<(), AuthError> {
    let value = header.ok_or(AuthError::MissingCredentials)?;
    let candidate = parse_basic_authorization(value)?;
    if verifier.verify(&candidate) {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}
