use serde::Deserialize;
use serde_json::Value;

/// `{ data, message }` wrapper returned by the backend
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseEnvelope<T> {
    #[serde(default = "Option::default")]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Splits a response body into payload and message.
///
/// Some endpoints (status toggle, single fetch) have answered with the bare
/// document instead of an envelope; an object without a `data` key is taken
/// as the payload itself.
pub fn split_envelope(body: Value) -> (Value, Option<String>) {
    match body {
        Value::Object(mut map) => {
            let message = match map.get("message") {
                Some(Value::String(message)) => Some(message.clone()),
                _ => None,
            };
            match map.remove("data") {
                Some(data) => (data, message),
                None => (Value::Object(map), message),
            }
        }
        other => (other, None),
    }
}

/// `message` field of an error body, if it is a JSON object carrying one
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("message") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn splits_wrapped_payload() {
        let (data, message) = split_envelope(json!({
            "data": {"_id": "g1"},
            "message": "Gallery updated"
        }));
        assert_eq!(data, json!({"_id": "g1"}));
        assert_eq!(message.as_deref(), Some("Gallery updated"));
    }

    #[test]
    fn bare_document_is_its_own_payload() {
        let (data, message) = split_envelope(json!({"_id": "g1", "status": false}));
        assert_eq!(data, json!({"_id": "g1", "status": false}));
        assert!(message.is_none());
    }

    #[test]
    fn arrays_pass_through() {
        let (data, message) = split_envelope(json!([1, 2]));
        assert_eq!(data, json!([1, 2]));
        assert!(message.is_none());
    }

    #[test]
    fn extracts_error_message() {
        assert_eq!(
            error_message(r#"{"success":false,"message":"Gallery not found"}"#).as_deref(),
            Some("Gallery not found")
        );
        assert_eq!(error_message(r#"{"success":false}"#), None);
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"message":""}"#), None);
    }

    #[test]
    fn typed_envelope_tolerates_missing_fields() {
        let envelope: ResponseEnvelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert!(envelope.message.is_none());
    }
}
