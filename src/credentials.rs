// rust-xmpp
// Copyright (c) 2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use std::fmt;

/// Identity and secret handed to a mechanism.
#[derive(PartialEq, Eq, Clone, Hash)]
pub struct Credentials {
    pub(crate) identity: String,
    pub(crate) secret: String,
}

impl Credentials {
    pub fn new(identity: String, secret: String) -> Credentials {
        Credentials { identity, secret }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl<S, T> From<(S, T)> for Credentials
where
    S: Into<String>,
    T: Into<String>,
{
    fn from((identity, secret): (S, T)) -> Self {
        Credentials::new(identity.into(), secret.into())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials").finish()
    }
}
