// src/auth/basic.rs

//! Basic authentication from the generic credential slot.

use base64::Engine as _;
use http::HeaderValue;
use zeroize::Zeroizing;

use super::resolve::GenericCredential;

impl GenericCredential {
    /// Encode the pair as a `Basic` authorization header value.
    ///
    /// The user name is sent as resolved, so a `DOMAIN\user` name keeps its
    /// domain prefix. The returned value is marked sensitive.
    pub fn basic_auth_header(&self) -> HeaderValue {
        let credentials = Zeroizing::new(format!("{}:{}", self.username(), self.password()));
        let mut encoded = Zeroizing::new(String::from("Basic "));
        base64::engine::general_purpose::STANDARD
            .encode_string(credentials.as_bytes(), &mut *encoded);

        let mut value = HeaderValue::from_bytes(encoded.as_bytes())
            .expect("base64 is always valid HeaderValue");
        value.set_sensitive(true);
        value
    }
}
