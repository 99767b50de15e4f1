// rust-xmpp
// Copyright (c) 2014-2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use std::fmt;
use std::io;

use crate::error::Result;

/// Writes a frame to the stream.
pub trait XmppSend {
    fn xmpp_send<W: io::Write>(&self, w: &mut W) -> io::Result<()>;
}

impl<T> XmppSend for T where T: fmt::Display {
    fn xmpp_send<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

/// Writes `data` to the stream and flushes it.
pub fn send<T: XmppSend, W: io::Write>(w: &mut W, data: &T) -> Result<()> {
    data.xmpp_send(w)?;
    w.flush()?;
    Ok(())
}
