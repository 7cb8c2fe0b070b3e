//! Credential pairs and the verification port.

use std::fmt;

/// Username and password presented by a caller.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates a credential pair.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decides whether a candidate credential pair is accepted.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` when `candidate` may access the API.
    fn verify(&self, candidate: &Credentials) -> bool;
}

/// Accepts exactly one configured credential pair.
#[derive(Debug, Clone)]
pub struct StaticCredentialVerifier {
    expected: Credentials,
}

impl StaticCredentialVerifier {
    /// Creates a verifier accepting only `expected`.
    #[must_use]
    pub const fn new(expected: Credentials) -> Self {
        Self { expected }
    }
}

impl CredentialVerifier for StaticCredentialVerifier {
    fn verify(&self, candidate: &Credentials) -> bool {
        let username_matches = candidate.username == self.expected.username;
        let password_matches = candidate.password == self.expected.password;
        username_matches & password_matches
    }
}
