// src/lib.rs

//! # wincred
//!
//! Decides which Windows domain credentials an outgoing call presents to the
//! authentication layer.
//!
//! A configured user name may carry its domain inline (`CORP\alice`), a domain
//! may also be configured on its own, and credentials may already have been
//! set through some other configuration path. [`resolve`] turns all of that
//! into one consistent credential tuple, or refuses when the two domains
//! disagree.
//!
//! ```
//! use wincred::{CredentialConfig, ExternalCredentialState, ImpersonationLevel, Resolution};
//!
//! let config = CredentialConfig::new()
//!     .username(r"CORP\alice")
//!     .password("p")
//!     .impersonation_level(ImpersonationLevel::Impersonation);
//!
//! match wincred::resolve(&config, ExternalCredentialState::unset())? {
//!     Resolution::Resolved { credential, generic } => {
//!         assert_eq!(credential.domain(), "corp");
//!         assert_eq!(credential.username(), "alice");
//!         assert_eq!(generic.unwrap().username(), r"CORP\alice");
//!     }
//!     Resolution::Disabled => unreachable!(),
//! }
//! # Ok::<(), wincred::Error>(())
//! ```
//!
//! The crate performs no I/O. Applying the result to a credential holder and
//! registering it for the transport is done by [`binding::apply`].
//!
//! ## Optional Features
//!
//! - **serde**: Deserialize a [`CredentialConfig`] from any serde format.
//! - **sspi**: Conversions into the `windows` crate SSPI types (Windows only).

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

mod auth;
pub mod binding;
mod error;

pub use self::auth::{
    resolve, AuthIdentity, CredentialConfig, ExternalCredentialState, GenericCredential,
    ImpersonationLevel, Resolution, ResolvedCredential, DOMAIN_SEPARATOR,
};
pub use self::error::{Error, Result};
