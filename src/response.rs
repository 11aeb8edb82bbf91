//! Replies received from a bulb.

use serde::Deserialize;
use serde_json::Value;

use crate::config::Configuration;
use crate::errors::ProtocolError;
use crate::payload::Payload;

type Result<T> = std::result::Result<T, ProtocolError>;

/// A decoded reply datagram.
///
/// Status queries answer with a `result` object. Mutations answer either by
/// echoing the accepted `params` or with `{"result": {"success": true}}`,
/// depending on firmware. Failures come back as an `error` object.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Response {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    params: Option<Payload>,
    #[serde(default)]
    error: Option<BulbError>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
struct BulbError {
    #[serde(default)]
    code: i64,
    #[serde(default)]
    message: String,
}

impl Response {
    /// Parse the raw bytes of a reply datagram.
    ///
    /// # Examples
    ///
    /// ```
    /// use wizard_rs::Response;
    ///
    /// let reply = Response::decode(br#"{"method":"getPilot","result":{"state":true}}"#).unwrap();
    /// assert_eq!(reply.method(), Some("getPilot"));
    /// assert_eq!(reply.status().unwrap().power(), Some(true));
    ///
    /// assert!(Response::decode(b"not json").is_err());
    /// ```
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let text = String::from_utf8(bytes.to_vec()).map_err(ProtocolError::Utf8)?;
        let reply: Response = serde_json::from_str(&text).map_err(ProtocolError::MalformedJson)?;
        if let Some(err) = &reply.error {
            return Err(ProtocolError::Rejected {
                code: err.code,
                message: err.message.clone(),
            });
        }
        Ok(reply)
    }

    /// The method name the bulb echoed back.
    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    /// The configuration reported by a `getPilot` reply.
    pub fn status(&self) -> Result<Configuration> {
        let result = self
            .result
            .as_ref()
            .ok_or(ProtocolError::MissingField("result"))?;
        Configuration::from_status_result(result)
    }

    /// The parameters the bulb accepted for a `setPilot` request.
    ///
    /// Echoed `params` win. A bare success acknowledgement means everything
    /// in `sent` was accepted.
    pub fn accepted(&self, sent: &Payload) -> Result<Payload> {
        if let Some(params) = &self.params {
            return Ok(params.clone());
        }
        let result = self
            .result
            .as_ref()
            .ok_or(ProtocolError::MissingField("params"))?;
        match result.get("success").and_then(Value::as_bool) {
            Some(false) => Err(ProtocolError::Rejected {
                code: 0,
                message: "bulb reported success: false".to_string(),
            }),
            _ => Ok(sent.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sent() -> Payload {
        let mut p = Payload::new();
        p.power(true);
        p
    }

    #[test]
    fn test_echoed_params_are_accepted() {
        let reply =
            Response::decode(br#"{"method":"setPilot","params":{"dimming":42}}"#).unwrap();
        let accepted = reply.accepted(&sent()).unwrap();
        assert_eq!(accepted.dimming(), Some(42));
        assert_eq!(accepted.state(), None);
    }

    #[test]
    fn test_success_ack_accepts_sent_params() {
        let reply = Response::decode(
            br#"{"method":"setPilot","env":"pro","result":{"success":true}}"#,
        )
        .unwrap();
        assert_eq!(reply.accepted(&sent()).unwrap(), sent());
    }

    #[test]
    fn test_unsuccessful_result_is_rejected() {
        let reply = Response::decode(br#"{"method":"setPilot","result":{"success":false}}"#)
            .unwrap();
        assert!(matches!(
            reply.accepted(&sent()),
            Err(ProtocolError::Rejected { .. })
        ));
    }

    #[test]
    fn test_error_object_is_rejected() {
        let err = Response::decode(
            br#"{"method":"setPilot","error":{"code":-32600,"message":"Invalid Request"}}"#,
        )
        .unwrap_err();
        match err {
            ProtocolError::Rejected { code, message } => {
                assert_eq!(code, -32600);
                assert_eq!(message, "Invalid Request");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_fields() {
        let reply = Response::decode(br#"{"method":"getPilot"}"#).unwrap();
        assert!(matches!(
            reply.status(),
            Err(ProtocolError::MissingField("result"))
        ));
        assert!(matches!(
            reply.accepted(&sent()),
            Err(ProtocolError::MissingField("params"))
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        assert!(matches!(
            Response::decode(&[0x7b, 0xff, 0x7d]),
            Err(ProtocolError::Utf8(_))
        ));
    }

    #[test]
    fn test_top_level_must_be_object() {
        assert!(matches!(
            Response::decode(b"[1,2,3]"),
            Err(ProtocolError::MalformedJson(_))
        ));
    }
}
