// rust-xmpp
// Copyright (c) 2014 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

pub const STREAMS: &str = "http://etherx.jabber.org/streams";

pub const FEATURE_SASL: &str = "urn:ietf:params:xml:ns:xmpp-sasl";
