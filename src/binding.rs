// src/binding.rs

//! Applying resolved credentials to an outgoing call.
//!
//! [`resolve`](crate::resolve) only decides. This module owns the mutation:
//! it writes the credential holders a call carries and registers the result
//! with the call's binding parameters so transport layers further down can
//! find it without resolving again.

use std::any::Any;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::auth::{
    resolve, CredentialConfig, ExternalCredentialState, ImpersonationLevel, Resolution,
    ResolvedCredential,
};
use crate::error::{Error, Result};

/// User name and password used by non-Windows mechanisms.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct UserNamePasswordCredential {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for UserNamePasswordCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserNamePasswordCredential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Credentials consumed by Windows-integrated authentication.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WindowsClientCredential {
    pub username: String,
    pub password: String,
    pub domain: String,
    #[zeroize(skip)]
    pub allowed_impersonation_level: ImpersonationLevel,
}

impl fmt::Debug for WindowsClientCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowsClientCredential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("allowed_impersonation_level", &self.allowed_impersonation_level)
            .finish()
    }
}

/// The credential holder of one outgoing endpoint.
///
/// Both slots are wiped on drop, and replaced slots are wiped as they go.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientCredentials {
    pub user_name: UserNamePasswordCredential,
    pub windows: WindowsClientCredential,
}

/// Objects attached to an outgoing call, at most one looked up per type.
#[derive(Default)]
pub struct BindingParameters {
    params: Vec<Box<dyn Any + Send + Sync>>,
}

impl BindingParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The first parameter of type `T`, if any.
    pub fn find<T: Any>(&self) -> Option<&T> {
        self.params.iter().find_map(|param| param.downcast_ref::<T>())
    }

    pub fn add<T: Any + Send + Sync>(&mut self, param: T) {
        self.params.push(Box::new(param));
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl fmt::Debug for BindingParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingParameters")
            .field("len", &self.params.len())
            .finish()
    }
}

/// Resolve `config` and apply it to `credentials`, registering the result.
///
/// Returns `Ok(false)` without touching anything when `config` is disabled.
/// Nothing is written unless resolution succeeds, and the resolved
/// credential is registered only if `parameters` holds none yet.
///
/// # Errors
///
/// `Error::MissingTarget` when `parameters` is `None`, and
/// `Error::DomainClash` when the domains disagree.
pub fn apply(
    config: &CredentialConfig,
    credentials: &mut ClientCredentials,
    parameters: Option<&mut BindingParameters>,
) -> Result<bool> {
    if !config.is_enabled() {
        return Ok(false);
    }

    let parameters = parameters.ok_or(Error::MissingTarget)?;
    let external = ExternalCredentialState::from_username(&credentials.user_name.username);

    let (credential, generic) = match resolve(config, external)? {
        Resolution::Resolved { credential, generic } => (credential, generic),
        Resolution::Disabled => return Ok(false),
    };

    if let Some(generic) = generic {
        credentials.user_name = UserNamePasswordCredential {
            username: generic.username().to_owned(),
            password: generic.password().to_owned(),
        };
    }

    credentials.windows = WindowsClientCredential {
        username: credential.username().to_owned(),
        password: credential.password().to_owned(),
        domain: credential.domain().to_owned(),
        allowed_impersonation_level: credential.impersonation_level(),
    };

    if parameters.find::<ResolvedCredential>().is_none() {
        parameters.add(credential);
    } else {
        log::debug!("resolved credentials already registered");
    }

    Ok(true)
}
