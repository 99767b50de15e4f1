// rust-xmpp
// Copyright (c) 2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use std::io;

/// Errors aborting an authentication attempt.
///
/// Every variant is fatal: the caller abandons the attempt and closes the
/// stream. Opting out of a mechanism is not an error, see
/// [`Start::Skip`](crate::auth::Start::Skip).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server did not advertise the mechanism.
    #[error("server doesn't support {0} auth")]
    MechanismNotAdvertised(&'static str),
    /// The server asked for another round the mechanism doesn't have.
    #[error("unexpected server challenge")]
    UnexpectedChallenge,
    /// The mechanism refuses to run for the given reason.
    #[error("unsupported mechanism: {0}")]
    UnsupportedMechanism(String),
    /// Every candidate mechanism opted out.
    #[error("no usable authentication mechanism")]
    NoMechanism,
    #[error("server sent invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
    /// The server rejected the authentication attempt.
    #[error("authentication failed: {}", .condition.as_deref().unwrap_or("no condition"))]
    Failure {
        condition: Option<String>,
        text: Option<String>,
    },
    #[error("unexpected element during authentication: {0}")]
    UnexpectedElement(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
