// src/auth/sspi.rs

//! Windows SSPI (Security Support Provider Interface) identity for Kerberos/NTLM.
//!
//! `AcquireCredentialsHandleW` takes explicit credentials as a
//! `SEC_WINNT_AUTH_IDENTITY_W`: UTF-16 user, domain and password buffers with
//! their lengths in characters, excluding any terminator. [`AuthIdentity`]
//! owns those buffers so the raw structure can borrow them for the duration
//! of the call.

use std::fmt;

#[cfg(all(windows, feature = "sspi"))]
use windows::Win32::System::Rpc::{SEC_WINNT_AUTH_IDENTITY, SEC_WINNT_AUTH_IDENTITY_W};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::resolve::ResolvedCredential;
use crate::error::{Error, Result};

/// The buffers hold UTF-16 text.
pub(crate) const SEC_WINNT_AUTH_IDENTITY_UNICODE: u32 = 0x2;

/// Owned UTF-16 form of a [`ResolvedCredential`].
///
/// All buffers are wiped when the identity is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AuthIdentity {
    user: Vec<u16>,
    user_len: u32,
    domain: Vec<u16>,
    domain_len: u32,
    password: Vec<u16>,
    password_len: u32,
    impersonation_level: i32,
}

impl AuthIdentity {
    pub fn user(&self) -> &[u16] {
        &self.user
    }

    pub fn domain(&self) -> &[u16] {
        &self.domain
    }

    pub fn password(&self) -> &[u16] {
        &self.password
    }

    pub fn user_len(&self) -> u32 {
        self.user_len
    }

    pub fn domain_len(&self) -> u32 {
        self.domain_len
    }

    pub fn password_len(&self) -> u32 {
        self.password_len
    }

    /// Always `SEC_WINNT_AUTH_IDENTITY_UNICODE`.
    pub fn flags(&self) -> u32 {
        SEC_WINNT_AUTH_IDENTITY_UNICODE
    }

    /// The `SECURITY_IMPERSONATION_LEVEL` the server is allowed.
    pub fn impersonation_level(&self) -> i32 {
        self.impersonation_level
    }

    /// Borrow the buffers as the raw SSPI identity structure.
    ///
    /// The pointers stay valid for as long as `self` is neither moved nor
    /// mutated.
    #[cfg(all(windows, feature = "sspi"))]
    pub fn as_raw(&mut self) -> SEC_WINNT_AUTH_IDENTITY_W {
        SEC_WINNT_AUTH_IDENTITY_W {
            User: self.user.as_mut_ptr(),
            UserLength: self.user_len,
            Domain: self.domain.as_mut_ptr(),
            DomainLength: self.domain_len,
            Password: self.password.as_mut_ptr(),
            PasswordLength: self.password_len,
            Flags: SEC_WINNT_AUTH_IDENTITY(self.flags()),
        }
    }
}

impl TryFrom<&ResolvedCredential> for AuthIdentity {
    type Error = Error;

    /// Fails with `Error::CredentialTooLong` when a field does not fit the
    /// 32-bit SSPI length fields.
    fn try_from(credential: &ResolvedCredential) -> Result<Self> {
        let user: Vec<u16> = credential.username().encode_utf16().collect();
        let domain: Vec<u16> = credential.domain().encode_utf16().collect();
        let password: Vec<u16> = credential.password().encode_utf16().collect();

        Ok(Self {
            user_len: buffer_len("user name", user.len())?,
            domain_len: buffer_len("domain", domain.len())?,
            password_len: buffer_len("password", password.len())?,
            user,
            domain,
            password,
            impersonation_level: credential.impersonation_level().as_raw(),
        })
    }
}

fn buffer_len(field: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::CredentialTooLong { field, len })
}

impl fmt::Debug for AuthIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthIdentity")
            .field("user", &String::from_utf16_lossy(&self.user))
            .field("domain", &String::from_utf16_lossy(&self.domain))
            .field("password", &"[REDACTED]")
            .field("flags", &self.flags())
            .field("impersonation_level", &self.impersonation_level)
            .finish()
    }
}
