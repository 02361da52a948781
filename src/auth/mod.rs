// src/auth/mod.rs

//! Credential resolution for Windows-integrated (NTLM/Kerberos) authentication.
//!
//! This module decides which domain, user name and password an outgoing call
//! presents, and shapes the result for the two consumers on a call: the
//! generic user name/password slot (used by Basic and other non-Windows
//! mechanisms) and the Windows-specific slot consumed by SSPI.

mod basic;
mod config;
mod resolve;
mod sspi;

pub use self::config::{CredentialConfig, ImpersonationLevel};
pub use self::resolve::{
    resolve, ExternalCredentialState, GenericCredential, Resolution, ResolvedCredential,
    DOMAIN_SEPARATOR,
};
pub use self::sspi::AuthIdentity;
