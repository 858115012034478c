//! The single parse step from an HTTP response body to a typed result.
//!
//! Every endpoint answers with `{ success, data?, message?, errors? }`. The
//! body is decoded exactly once here; callers never look inside the
//! envelope themselves.

use imagiq_core::envelope::ApiResponse;
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Fallback message when a failure carries none.
const GENERIC_FAILURE: &str = "La solicitud no pudo completarse";

/// Decode an envelope body into `T`.
///
/// * `success: true` with a 2xx status yields `data` as `T`. A missing
///   `data` decodes as JSON `null`, so `()` and `Option<_>` work for
///   endpoints that only acknowledge.
/// * `success: false`, or any non-2xx status, yields [`ClientError::Api`]
///   with the server's `message` and `errors`.
/// * A body that is not an envelope yields [`ClientError::Api`] for error
///   statuses and [`ClientError::MalformedEnvelope`] otherwise.
pub fn parse_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ClientError> {
    let is_success_status = (200..300).contains(&status);

    let envelope: ApiResponse<serde_json::Value> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) if is_success_status => {
            return Err(ClientError::MalformedEnvelope(e.to_string()));
        }
        Err(_) => {
            let text = String::from_utf8_lossy(body).trim().to_string();
            return Err(ClientError::Api {
                status,
                message: if text.is_empty() {
                    GENERIC_FAILURE.to_string()
                } else {
                    text
                },
                errors: None,
            });
        }
    };

    if !envelope.success || !is_success_status {
        return Err(ClientError::Api {
            status,
            message: envelope
                .message
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            errors: envelope.errors,
        });
    }

    let data = envelope.data.unwrap_or(serde_json::Value::Null);
    serde_json::from_value(data).map_err(|e| ClientError::MalformedEnvelope(e.to_string()))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_success_yields_data() {
        let item: Item = parse_envelope(200, br#"{"success":true,"data":{"id":"f1"}}"#).unwrap();
        assert_eq!(item, Item { id: "f1".into() });
    }

    #[test]
    fn test_success_without_data_is_unit() {
        let result: Result<(), _> = parse_envelope(200, br#"{"success":true,"message":"ok"}"#);
        assert!(result.is_ok());
    }

    #[test]
    fn test_business_failure_keeps_message_and_errors() {
        let body = br#"{"success":false,"message":"Filtro no encontrado","errors":{"code":"NOT_FOUND"}}"#;
        let err = parse_envelope::<Item>(404, body).unwrap_err();
        assert_matches!(
            err,
            ClientError::Api { status: 404, ref message, errors: Some(_) }
                if message == "Filtro no encontrado"
        );
        assert_eq!(err.user_message(), "Filtro no encontrado");
    }

    #[test]
    fn test_success_false_on_200_is_still_failure() {
        let err = parse_envelope::<Item>(200, br#"{"success":false}"#).unwrap_err();
        assert_matches!(err, ClientError::Api { status: 200, .. });
    }

    #[test]
    fn test_wrong_data_shape_is_malformed() {
        let err = parse_envelope::<Item>(200, br#"{"success":true,"data":[1,2]}"#).unwrap_err();
        assert_matches!(err, ClientError::MalformedEnvelope(_));
    }

    #[test]
    fn test_non_json_error_page() {
        let err = parse_envelope::<Item>(502, b"Bad Gateway").unwrap_err();
        assert_matches!(err, ClientError::Api { status: 502, ref message, .. } if message == "Bad Gateway");

        let err = parse_envelope::<Item>(200, b"<html>").unwrap_err();
        assert_matches!(err, ClientError::MalformedEnvelope(_));
    }
}
