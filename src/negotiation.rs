// rust-xmpp
// Copyright (c) 2015 Florian Zeitz
//
// This project is MIT licensed.
// Please see the COPYING file for more information.

use crate::auth::{Authenticator, Start};
use crate::error::{Error, Result};
use crate::non_stanzas::{AuthResponse, AuthStart};
use crate::ns;
use crate::stream_info::StreamInfo;

/// What the connection has to do after a SASL element was handled.
#[derive(Debug)]
pub enum Step {
    /// Send this response to the server.
    Respond(AuthResponse),
    /// Authentication succeeded, the stream has to be restarted.
    Success,
}

/// A single authentication attempt, owning the chosen mechanism.
///
/// Once the attempt succeeded or failed the mechanism is dropped and
/// every further element is rejected.
pub struct Negotiation {
    mechanism: &'static str,
    authenticator: Option<Box<dyn Authenticator>>,
}

impl Negotiation {
    /// Starts the first candidate that doesn't skip itself.
    ///
    /// Candidates are tried in order. An error from any of them aborts the
    /// whole attempt without trying the remaining ones.
    pub fn select(candidates: Vec<Box<dyn Authenticator>>, info: &StreamInfo)
                  -> Result<(Negotiation, AuthStart)> {
        for mut auth in candidates {
            match auth.start(info) {
                Ok(Start::Auth { mechanism, initial }) => {
                    tracing::debug!(mechanism, domain = %info.domain, "starting authentication");
                    let frame = AuthStart::new(mechanism, initial.as_deref());
                    let negotiation = Negotiation {
                        mechanism,
                        authenticator: Some(auth),
                    };
                    return Ok((negotiation, frame));
                }
                Ok(Start::Skip) => {
                    tracing::debug!("mechanism skipped");
                }
                Err(e) => {
                    tracing::warn!(err = %e, "could not start authentication");
                    return Err(e);
                }
            }
        }
        tracing::warn!(advertised = ?info.mechanisms, "no usable mechanism");
        Err(Error::NoMechanism)
    }

    pub fn mechanism(&self) -> &'static str {
        self.mechanism
    }

    pub fn is_finished(&self) -> bool {
        self.authenticator.is_none()
    }

    /// Handles a `<challenge/>`, `<success/>` or `<failure/>` from the server.
    pub fn handle(&mut self, element: &xml::Element) -> Result<Step> {
        let mut auth = match self.authenticator.take() {
            Some(auth) => auth,
            None => return Err(Error::UnexpectedElement(element.name.clone())),
        };

        if element.ns.as_deref() != Some(ns::FEATURE_SASL) {
            return Err(Error::UnexpectedElement(element.name.clone()));
        }

        match &element.name[..] {
            "challenge" => {
                tracing::debug!(mechanism = self.mechanism, "In: challenge");
                let challenge = decode_payload(element)?;
                let response = auth.next(&challenge, true)?;
                self.authenticator = Some(auth);
                Ok(Step::Respond(AuthResponse::new(response.as_deref())))
            }
            "success" => {
                tracing::debug!(mechanism = self.mechanism, "In: success");
                let additional = decode_payload(element)?;
                auth.next(&additional, false)?;
                Ok(Step::Success)
            }
            "failure" => {
                let err = failure(element);
                tracing::warn!(mechanism = self.mechanism, err = %err, "authentication failed");
                Err(err)
            }
            _ => Err(Error::UnexpectedElement(element.name.clone())),
        }
    }
}

// Empty content means no data, "=" means empty data
fn decode_payload(element: &xml::Element) -> Result<Vec<u8>> {
    let content = element.content_str();
    match content.trim() {
        "" | "=" => Ok(Vec::new()),
        data => Ok(base64::decode(data)?),
    }
}

fn failure(element: &xml::Element) -> Error {
    let condition = element
        .children
        .iter()
        .filter_map(|child| match *child {
            xml::Xml::ElementNode(ref e) => Some(e),
            _ => None,
        })
        .find(|e| e.name != "text")
        .map(|e| e.name.clone());
    let text = element
        .get_child("text", Some(ns::FEATURE_SASL))
        .map(|t| t.content_str());
    Error::Failure { condition, text }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{Negotiation, Step};
    use crate::auth::{Authenticator, PlainAuth, Start};
    use crate::error::{Error, Result};
    use crate::stream_info::StreamInfo;
    use crate::test_util::element;

    struct SkipAuth;

    impl Authenticator for SkipAuth {
        fn start(&mut self, _info: &StreamInfo) -> Result<Start> {
            Ok(Start::Skip)
        }

        fn next(&mut self, _from_server: &[u8], _more: bool) -> Result<Option<Vec<u8>>> {
            panic!("next called on skipped mechanism");
        }
    }

    // Answers every challenge with the challenge reversed
    struct EchoAuth;

    impl Authenticator for EchoAuth {
        fn start(&mut self, _info: &StreamInfo) -> Result<Start> {
            Ok(Start::Auth { mechanism: "X-ECHO", initial: None })
        }

        fn next(&mut self, from_server: &[u8], more: bool) -> Result<Option<Vec<u8>>> {
            if !more {
                return Ok(None);
            }
            Ok(Some(from_server.iter().rev().cloned().collect()))
        }
    }

    // Refuses to run over an unencrypted stream
    struct TlsOnlyAuth;

    impl Authenticator for TlsOnlyAuth {
        fn start(&mut self, info: &StreamInfo) -> Result<Start> {
            if !info.tls {
                return Err(Error::UnsupportedMechanism("X-TLS-ONLY requires TLS".into()));
            }
            Ok(Start::Auth { mechanism: "X-TLS-ONLY", initial: Some(Vec::new()) })
        }

        fn next(&mut self, _from_server: &[u8], more: bool) -> Result<Option<Vec<u8>>> {
            if more {
                return Err(Error::UnexpectedChallenge);
            }
            Ok(None)
        }
    }

    fn info(mechanisms: &[&str]) -> StreamInfo {
        StreamInfo::new(
            "example.org",
            true,
            mechanisms.iter().map(|m| m.to_string()).collect(),
        )
    }

    fn plain() -> Box<dyn Authenticator> {
        Box::new(PlainAuth::from_parts("alice", "secret"))
    }

    #[test]
    fn test_select_plain() {
        let (negotiation, frame) = Negotiation::select(vec![plain()], &info(&["PLAIN", "SCRAM-SHA-1"])).unwrap();
        assert_eq!(negotiation.mechanism(), "PLAIN");
        assert!(!negotiation.is_finished());
        assert_eq!(
            frame.to_string(),
            "<auth mechanism='PLAIN' xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>AGFsaWNlAHNlY3JldA==</auth>"
        );
    }

    #[test]
    fn test_select_skips() {
        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(SkipAuth), plain()];
        let (negotiation, _) = Negotiation::select(candidates, &info(&["PLAIN"])).unwrap();
        assert_eq!(negotiation.mechanism(), "PLAIN");
    }

    #[test]
    fn test_select_all_skipped() {
        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(SkipAuth), Box::new(SkipAuth)];
        assert!(matches!(
            Negotiation::select(candidates, &info(&["PLAIN"])),
            Err(Error::NoMechanism)
        ));
        assert!(matches!(Negotiation::select(vec![], &info(&[])), Err(Error::NoMechanism)));
    }

    #[test]
    fn test_select_error_aborts() {
        let candidates: Vec<Box<dyn Authenticator>> = vec![plain(), Box::new(EchoAuth)];
        assert!(matches!(
            Negotiation::select(candidates, &info(&["SCRAM-SHA-1"])),
            Err(Error::MechanismNotAdvertised("PLAIN"))
        ));
    }

    #[test]
    fn test_select_requires_tls() {
        let plaintext = StreamInfo::new("example.org", false, vec![]);
        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(TlsOnlyAuth), Box::new(EchoAuth)];
        assert!(matches!(
            Negotiation::select(candidates, &plaintext),
            Err(Error::UnsupportedMechanism(_))
        ));

        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(TlsOnlyAuth)];
        let (negotiation, frame) = Negotiation::select(candidates, &info(&[])).unwrap();
        assert_eq!(negotiation.mechanism(), "X-TLS-ONLY");
        assert_eq!(frame.data, "=");
    }

    #[test]
    fn test_plain_success() {
        let (mut negotiation, _) = Negotiation::select(vec![plain()], &info(&["PLAIN"])).unwrap();
        let success = element("<success xmlns='urn:ietf:params:xml:ns:xmpp-sasl'/>");
        assert!(matches!(negotiation.handle(&success), Ok(Step::Success)));
        assert!(negotiation.is_finished());
        assert!(matches!(
            negotiation.handle(&success),
            Err(Error::UnexpectedElement(_))
        ));
    }

    #[test]
    fn test_plain_challenge_aborts() {
        let (mut negotiation, _) = Negotiation::select(vec![plain()], &info(&["PLAIN"])).unwrap();
        let challenge = element("<challenge xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>=</challenge>");
        assert!(matches!(
            negotiation.handle(&challenge),
            Err(Error::UnexpectedChallenge)
        ));
        assert!(negotiation.is_finished());
    }

    #[test]
    fn test_challenge_response() {
        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(EchoAuth)];
        let (mut negotiation, frame) = Negotiation::select(candidates, &info(&[])).unwrap();
        assert_eq!(frame.data, "");

        // "abc"
        let challenge = element("<challenge xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>YWJj</challenge>");
        match negotiation.handle(&challenge).unwrap() {
            Step::Respond(response) => assert_eq!(
                response.to_string(),
                "<response xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>Y2Jh</response>"
            ),
            Step::Success => panic!("unexpected success"),
        }

        let success = element("<success xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>dj1vaw==</success>");
        assert!(matches!(negotiation.handle(&success), Ok(Step::Success)));
    }

    #[test]
    fn test_invalid_base64() {
        let candidates: Vec<Box<dyn Authenticator>> = vec![Box::new(EchoAuth)];
        let (mut negotiation, _) = Negotiation::select(candidates, &info(&[])).unwrap();
        let challenge = element("<challenge xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>!!!</challenge>");
        assert!(matches!(
            negotiation.handle(&challenge),
            Err(Error::InvalidBase64(_))
        ));
    }

    #[test]
    fn test_failure() {
        let (mut negotiation, _) = Negotiation::select(vec![plain()], &info(&["PLAIN"])).unwrap();
        let failure = element(
            "<failure xmlns='urn:ietf:params:xml:ns:xmpp-sasl'>\
             <not-authorized/><text>Wrong password</text></failure>",
        );
        match negotiation.handle(&failure) {
            Err(Error::Failure { condition, text }) => {
                assert_eq!(condition.as_deref(), Some("not-authorized"));
                assert_eq!(text.as_deref(), Some("Wrong password"));
            }
            _ => panic!("expected failure"),
        }
        assert!(negotiation.is_finished());
    }

    #[test]
    fn test_unexpected_element() {
        let (mut negotiation, _) = Negotiation::select(vec![plain()], &info(&["PLAIN"])).unwrap();
        let message = element("<message xmlns='jabber:client'/>");
        assert!(matches!(
            negotiation.handle(&message),
            Err(Error::UnexpectedElement(ref name)) if name == "message"
        ));
    }
}
