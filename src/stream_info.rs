// rust-xmpp
// Copyright (c) 2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use crate::ns;

/// Facts about an established stream that mechanisms need to pick
/// themselves and build their initial response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamInfo {
    /// Server hostname
    pub domain: String,
    /// Whether the stream is encrypted
    pub tls: bool,
    /// SASL mechanisms advertised by the server, in advertised order
    pub mechanisms: Vec<String>,
}

impl StreamInfo {
    pub fn new<S: Into<String>>(domain: S, tls: bool, mechanisms: Vec<String>) -> StreamInfo {
        StreamInfo {
            domain: domain.into(),
            tls,
            mechanisms,
        }
    }

    /// Collects the advertised mechanisms from a `<stream:features/>` element.
    pub fn from_features<S: Into<String>>(domain: S, tls: bool, features: &xml::Element) -> StreamInfo {
        let mechanisms = match features.get_child("mechanisms", Some(ns::FEATURE_SASL)) {
            Some(mechs) => mechs
                .get_children("mechanism", Some(ns::FEATURE_SASL))
                .map(|m| m.content_str())
                .collect(),
            None => Vec::new(),
        };
        StreamInfo::new(domain, tls, mechanisms)
    }

    /// Exact, case-sensitive check against the advertised list.
    pub fn advertises(&self, mechanism: &str) -> bool {
        self.mechanisms.iter().any(|m| m == mechanism)
    }
}
