// rust-xmpp
// Copyright (c) 2014-2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

//! SASL authentication for XMPP client streams.
//!
//! The connection builds a [`StreamInfo`] from the advertised
//! `<stream:features/>`, hands its candidate mechanisms to
//! [`Negotiation::select`] and sends the returned `<auth/>` frame. Every
//! `<challenge/>`, `<success/>` or `<failure/>` the server sends is then fed
//! to [`Negotiation::handle`] until it yields [`Step::Success`] or an error.
//! Errors are fatal, the stream has to be closed.
//!
//! ```
//! use xmpp_sasl::auth::{Authenticator, PlainAuth, Start};
//! use xmpp_sasl::StreamInfo;
//!
//! let info = StreamInfo::new("example.org", true, vec!["PLAIN".into()]);
//! let mut auth = PlainAuth::from_parts("alice", "secret");
//! match auth.start(&info).unwrap() {
//!     Start::Auth { mechanism, initial } => {
//!         assert_eq!(mechanism, "PLAIN");
//!         assert_eq!(initial.unwrap(), b"\0alice\0secret");
//!     }
//!     Start::Skip => unreachable!(),
//! }
//! assert_eq!(auth.next(b"", false).unwrap(), None);
//! ```

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use negotiation::{Negotiation, Step};
pub use stream_info::StreamInfo;
pub use xmpp_send::{send, XmppSend};

mod credentials;
mod error;
mod negotiation;
mod stream_info;
mod xmpp_send;
pub mod auth;
pub mod non_stanzas;
pub mod ns;
