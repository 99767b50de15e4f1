// rust-xmpp
// Copyright (c) 2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use std::fmt;

use crate::ns;

/// Base64 payload as carried in SASL elements.
///
/// No payload is empty content, an empty payload is a single `=`.
fn encode_payload(data: Option<&[u8]>) -> String {
    match data {
        None => String::new(),
        Some([]) => "=".to_string(),
        Some(data) => base64::encode(data),
    }
}

/// `<auth/>` opening an authentication exchange.
pub struct AuthStart {
    pub mech: &'static str,
    pub data: String,
}

impl AuthStart {
    pub fn new(mech: &'static str, initial: Option<&[u8]>) -> AuthStart {
        AuthStart {
            mech,
            data: encode_payload(initial),
        }
    }
}

impl fmt::Display for AuthStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<auth mechanism='{}' xmlns='{}'>{}</auth>",
               self.mech, ns::FEATURE_SASL, self.data)
    }
}

// The payload carries credentials
impl fmt::Debug for AuthStart {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AuthStart").field("mech", &self.mech).finish()
    }
}

/// `<response/>` answering a server challenge.
pub struct AuthResponse {
    pub data: String,
}

impl AuthResponse {
    pub fn new(data: Option<&[u8]>) -> AuthResponse {
        AuthResponse { data: encode_payload(data) }
    }
}

impl fmt::Display for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<response xmlns='{}'>{}</response>", ns::FEATURE_SASL, self.data)
    }
}

impl fmt::Debug for AuthResponse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("AuthResponse").finish()
    }
}

/// `<abort/>` cancelling an exchange from the client side.
#[derive(Debug)]
pub struct Abort;

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<abort xmlns='{}'/>", ns::FEATURE_SASL)
    }
}
