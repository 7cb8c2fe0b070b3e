//! Credential checking for the HTTP surface.
//!
//! The server never embeds a credential: a [`CredentialVerifier`] is
//! injected at startup, and [`parse_basic_authorization`] turns an
//! `Authorization` header into a candidate [`Credentials`] pair.

mod basic;
mod credentials;

pub use basic::{AuthError, authenticate, parse_basic_authorization};
pub use credentials::{CredentialVerifier, Credentials, StaticCredentialVerifier};

#[cfg(test)]
mod tests;
