// src/auth/config.rs

//! Configured credential fields.

use std::fmt;
use std::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::Error;

/// The degree to which a server may act on behalf of the calling identity.
///
/// By default, the level is `Identification`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum ImpersonationLevel {
    /// The server cannot obtain identification information about the client.
    Anonymous,
    /// The server can identify the client but cannot impersonate it.
    #[default]
    Identification,
    /// The server can impersonate the client on its own system.
    Impersonation,
    /// The server can impersonate the client on remote systems too.
    Delegation,
}

impl ImpersonationLevel {
    /// The matching `SECURITY_IMPERSONATION_LEVEL` value.
    pub fn as_raw(self) -> i32 {
        match self {
            ImpersonationLevel::Anonymous => 0,
            ImpersonationLevel::Identification => 1,
            ImpersonationLevel::Impersonation => 2,
            ImpersonationLevel::Delegation => 3,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            ImpersonationLevel::Anonymous => "Anonymous",
            ImpersonationLevel::Identification => "Identification",
            ImpersonationLevel::Impersonation => "Impersonation",
            ImpersonationLevel::Delegation => "Delegation",
        }
    }
}

impl fmt::Display for ImpersonationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImpersonationLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        [
            ImpersonationLevel::Anonymous,
            ImpersonationLevel::Identification,
            ImpersonationLevel::Impersonation,
            ImpersonationLevel::Delegation,
        ]
        .into_iter()
        .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| Error::InvalidImpersonationLevel(trimmed.to_owned()))
    }
}

#[cfg(all(windows, feature = "sspi"))]
impl From<ImpersonationLevel> for windows::Win32::Security::SECURITY_IMPERSONATION_LEVEL {
    fn from(level: ImpersonationLevel) -> Self {
        windows::Win32::Security::SECURITY_IMPERSONATION_LEVEL(level.as_raw())
    }
}

/// Credential settings for one outgoing endpoint.
///
/// Values are carried as configured; nothing is normalized until
/// [`resolve`](crate::resolve) runs. Every field is wiped on drop.
///
/// ```
/// use wincred::{CredentialConfig, ImpersonationLevel};
///
/// let config = CredentialConfig::new()
///     .username("alice")
///     .domain("CORP")
///     .password("secret")
///     .impersonation_level(ImpersonationLevel::Delegation);
/// assert!(config.is_enabled());
/// ```
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct CredentialConfig {
    #[cfg_attr(feature = "serde", serde(default))]
    username: String,
    #[cfg_attr(feature = "serde", serde(default))]
    password: String,
    #[cfg_attr(feature = "serde", serde(default))]
    domain: String,
    #[cfg_attr(feature = "serde", serde(default))]
    #[zeroize(skip)]
    impersonation_level: ImpersonationLevel,
    #[cfg_attr(feature = "serde", serde(rename = "Enable", default = "enabled_by_default"))]
    enabled: bool,
}

#[cfg(feature = "serde")]
fn enabled_by_default() -> bool {
    true
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            domain: String::new(),
            impersonation_level: ImpersonationLevel::default(),
            enabled: true,
        }
    }
}

impl CredentialConfig {
    /// An enabled configuration with no credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user name, optionally in `DOMAIN\user` form.
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Set the Windows domain.
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    /// Set the allowed impersonation level.
    pub fn impersonation_level(mut self, level: ImpersonationLevel) -> Self {
        self.impersonation_level = level;
        self
    }

    /// Enable or disable the credentials entirely.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn get_username(&self) -> &str {
        &self.username
    }

    pub fn get_password(&self) -> &str {
        &self.password
    }

    pub fn get_domain(&self) -> &str {
        &self.domain
    }

    pub fn get_impersonation_level(&self) -> ImpersonationLevel {
        self.impersonation_level
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl fmt::Debug for CredentialConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialConfig")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("domain", &self.domain)
            .field("impersonation_level", &self.impersonation_level)
            .field("enabled", &self.enabled)
            .finish()
    }
}
