// rust-xmpp
// Copyright (c) 2014 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use std::fmt;

use super::{Authenticator, Start};
use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::stream_info::StreamInfo;

const MECHANISM: &str = "PLAIN";

/// PLAIN ([RFC 4616](https://tools.ietf.org/html/rfc4616)), sent without an
/// authorization identity.
pub struct PlainAuth {
    credentials: Credentials,
}

impl PlainAuth {
    pub fn new(credentials: Credentials) -> PlainAuth {
        PlainAuth { credentials }
    }

    pub fn from_parts<S: Into<String>, T: Into<String>>(authcid: S, passwd: T) -> PlainAuth {
        PlainAuth::new(Credentials::from((authcid, passwd)))
    }

    // NUL bytes inside the identity or secret are passed through as is
    fn initial(&self) -> Vec<u8> {
        let authcid = self.credentials.identity.as_bytes();
        let passwd = self.credentials.secret.as_bytes();

        let mut data: Vec<u8> = Vec::with_capacity(authcid.len() + passwd.len() + 2);
        data.push(0);
        data.extend_from_slice(authcid);
        data.push(0);
        data.extend_from_slice(passwd);
        data
    }
}

impl fmt::Debug for PlainAuth {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("PlainAuth").finish()
    }
}

impl Authenticator for PlainAuth {
    fn start(&mut self, info: &StreamInfo) -> Result<Start> {
        if !info.advertises(MECHANISM) {
            return Err(Error::MechanismNotAdvertised(MECHANISM));
        }
        Ok(Start::Auth {
            mechanism: MECHANISM,
            initial: Some(self.initial()),
        })
    }

    fn next(&mut self, _from_server: &[u8], more: bool) -> Result<Option<Vec<u8>>> {
        if more {
            return Err(Error::UnexpectedChallenge);
        }
        Ok(None)
    }
}
