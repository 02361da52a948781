// src/error.rs

//! Error types for credential resolution.
//!
//! Messages never contain password material.

/// A `Result` alias where the `Err` case is `wincred::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// The errors that may occur while resolving or applying credentials.
///
/// None of these are transient: each one reflects a static configuration or
/// programming mistake and will recur on every attempt with the same input.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configured domain and the domain embedded in the user name differ.
    #[error("configured domain '{domain}' does not match the domain in user name '{username}'")]
    DomainClash { domain: String, username: String },

    /// There was no binding-parameter collection to register credentials with.
    #[error("no binding parameters were supplied to apply credentials to")]
    MissingTarget,

    /// A textual impersonation level was not one of the known names.
    #[error("unknown impersonation level: {0}")]
    InvalidImpersonationLevel(String),

    /// A credential field does not fit the 32-bit SSPI length fields.
    #[error("{field} is too long for an SSPI identity ({len} UTF-16 code units)")]
    CredentialTooLong { field: &'static str, len: usize },
}

impl Error {
    /// Returns true if the error is a domain clash.
    pub fn is_domain_clash(&self) -> bool {
        matches!(self, Error::DomainClash { .. })
    }

    /// Returns true if the binding target was missing.
    pub fn is_missing_target(&self) -> bool {
        matches!(self, Error::MissingTarget)
    }
}

pub(crate) fn domain_clash(domain: &str, username: &str) -> Error {
    Error::DomainClash {
        domain: domain.to_owned(),
        username: username.to_owned(),
    }
}
