// rust-xmpp
// Copyright (c) 2014 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

//! SASL mechanisms.
//!
//! A mechanism is driven through exactly one negotiation: [`Authenticator::start`]
//! once, then [`Authenticator::next`] for every server message, in arrival
//! order. Any error aborts the attempt and the stream is closed; the
//! mechanism is never called again afterwards.

pub use self::plain::PlainAuth;

pub mod plain;

use crate::error::Result;
use crate::stream_info::StreamInfo;

/// Outcome of [`Authenticator::start`].
#[derive(Clone, PartialEq, Eq)]
pub enum Start {
    /// Authenticate using `mechanism`, sending `initial` in the `<auth/>` element.
    Auth {
        mechanism: &'static str,
        initial: Option<Vec<u8>>,
    },
    /// Don't authenticate with this mechanism. Not a failure.
    Skip,
}

impl std::fmt::Debug for Start {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Start::Auth { mechanism, ref initial } => f
                .debug_struct("Auth")
                .field("mechanism", &mechanism)
                .field("initial", &initial.as_ref().map(|_| ".."))
                .finish(),
            Start::Skip => f.write_str("Skip"),
        }
    }
}

pub trait Authenticator {
    /// Begins authentication on the given stream.
    fn start(&mut self, info: &StreamInfo) -> Result<Start>;

    /// Continues authentication with data the server just sent.
    ///
    /// If `more` is true the server expects a response, otherwise the
    /// exchange is over from the client's side and `None` is returned.
    fn next(&mut self, from_server: &[u8], more: bool) -> Result<Option<Vec<u8>>>;
}
