// src/auth/resolve.rs

//! Domain parsing and credential precedence.
//!
//! A user name may carry its domain inline (`DOMAIN\user`). When a domain is
//! configured as well, both must name the same domain; a mismatch is a
//! configuration error and is never resolved silently.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::config::{CredentialConfig, ImpersonationLevel};
use crate::error::{self, Result};

/// Separates the domain from the account name in `DOMAIN\user`.
pub const DOMAIN_SEPARATOR: char = '\\';

/// What the caller observed on its generic credential holder before resolving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExternalCredentialState {
    already_set: bool,
}

impl ExternalCredentialState {
    /// No generic credentials have been configured elsewhere.
    pub fn unset() -> Self {
        Self { already_set: false }
    }

    /// Another configuration path already populated the generic user name.
    pub fn already_set() -> Self {
        Self { already_set: true }
    }

    /// Derive the state from the generic holder's current user name.
    pub fn from_username(username: &str) -> Self {
        Self {
            already_set: !is_blank(username),
        }
    }

    pub fn is_already_set(&self) -> bool {
        self.already_set
    }
}

/// The user name/password pair for non-Windows mechanisms on the same call.
///
/// Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct GenericCredential {
    username: String,
    password: String,
}

impl GenericCredential {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for GenericCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenericCredential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The tuple handed to Windows-integrated authentication.
///
/// Wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ResolvedCredential {
    domain: String,
    username: String,
    password: String,
    #[zeroize(skip)]
    impersonation_level: ImpersonationLevel,
}

impl ResolvedCredential {
    /// The domain; empty means no explicit domain.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn impersonation_level(&self) -> ImpersonationLevel {
        self.impersonation_level
    }
}

impl fmt::Debug for ResolvedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolvedCredential")
            .field("domain", &self.domain)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("impersonation_level", &self.impersonation_level)
            .finish()
    }
}

/// The outcome of [`resolve`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The credentials are switched off; apply nothing.
    Disabled,
    /// Credentials to apply.
    Resolved {
        /// Always written to the Windows-specific slot.
        credential: ResolvedCredential,
        /// Written to the generic slot only when present.
        generic: Option<GenericCredential>,
    },
}

impl Resolution {
    pub fn is_disabled(&self) -> bool {
        matches!(self, Resolution::Disabled)
    }
}

/// Decide the credentials an outgoing call presents.
///
/// Returns [`Resolution::Disabled`] without looking at any other field when
/// the configuration is disabled. Fails with `Error::DomainClash` when the
/// configured domain and the one embedded in the user name disagree.
///
/// A user name holds at most one [`DOMAIN_SEPARATOR`]. Names with more are
/// outside that contract: they are split at the first separator and the
/// resolved user name keeps the rest, separators included.
///
/// # Examples
/// ```
/// use wincred::{resolve, CredentialConfig, ExternalCredentialState};
///
/// let config = CredentialConfig::new().username(r"CORP\alice").domain("OTHER");
/// let err = resolve(&config, ExternalCredentialState::unset()).unwrap_err();
/// assert!(err.is_domain_clash());
/// ```
pub fn resolve(
    config: &CredentialConfig,
    external: ExternalCredentialState,
) -> Result<Resolution> {
    if !config.is_enabled() {
        log::debug!("windows credentials disabled, nothing to apply");
        return Ok(Resolution::Disabled);
    }

    let username = config.get_username();
    let domain = config.get_domain();
    let password = config.get_password();
    let write_generic = !external.is_already_set();

    let mut final_domain = domain.to_owned();
    let mut final_username = username.to_owned();
    let mut generic_username = None;

    if !is_blank(username) {
        match username.find(DOMAIN_SEPARATOR) {
            Some(idx) => {
                let embedded_domain = &username[..idx];
                let bare_username = &username[idx + DOMAIN_SEPARATOR.len_utf8()..];

                if !is_blank(domain) && domain.to_lowercase() != embedded_domain.to_lowercase() {
                    log::warn!(
                        "configured domain '{}' clashes with user name '{}'",
                        domain,
                        username
                    );
                    return Err(error::domain_clash(domain, username));
                }

                log::debug!("using domain '{}' embedded in user name", embedded_domain);
                generic_username = Some(username.to_owned());
                final_domain = embedded_domain.to_lowercase();
                final_username = bare_username.to_lowercase();
            }
            None if is_blank(domain) => {
                generic_username = Some(username.to_owned());
            }
            None => {
                generic_username = Some(format!("{}{}{}", domain, DOMAIN_SEPARATOR, username));
            }
        }
    }

    let generic = match generic_username {
        Some(username) if write_generic => Some(GenericCredential {
            username,
            password: password.to_owned(),
        }),
        Some(_) => {
            log::debug!("generic credentials already set, leaving them untouched");
            None
        }
        None => None,
    };

    Ok(Resolution::Resolved {
        credential: ResolvedCredential {
            domain: final_domain,
            username: final_username,
            password: password.to_owned(),
            impersonation_level: config.get_impersonation_level(),
        },
        generic,
    })
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
