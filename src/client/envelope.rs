//! Decoding of the API's response envelope.
//!
//! Every response body is a JSON object that carries either an `error` object
//! or the payload under the resource's key:
//!
//! ```json
//! {"mandate_imports": {"id": "IM123", ...}}
//! {"error": {"message": "...", "type": "invalid_state", ...}}
//! ```
//!
//! The error is checked first and wins whenever it is present. An envelope
//! with neither (or with both set to `null`) decodes to [`Envelope::Missing`].

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::models::{ListMeta, ListResult};
use crate::{Error, Result};

/// The three possible outcomes of decoding an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    /// The `error` field was present
    Error(ApiError),
    /// The payload field was present and no error was
    Payload(T),
    /// Neither field was present
    Missing,
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Decode `body`, looking for the payload under `key`.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the body is not a JSON object, or if the field
    /// that decides the outcome has the wrong shape.
    pub fn decode(body: &[u8], key: &str) -> Result<Self> {
        let mut fields = parse_object(body)?;
        if let Some(err) = take_error(&mut fields)? {
            return Ok(Envelope::Error(err));
        }

        match take_present(&mut fields, key) {
            Some(payload) => Ok(Envelope::Payload(serde_json::from_value(payload)?)),
            None => Ok(Envelope::Missing),
        }
    }
}

impl<T: DeserializeOwned> Envelope<ListResult<T>> {
    /// Decode a list body: records under `key`, pagination under `meta`.
    ///
    /// A missing `meta` is treated as a final page.
    pub fn decode_list(body: &[u8], key: &str) -> Result<Self> {
        let mut fields = parse_object(body)?;
        if let Some(err) = take_error(&mut fields)? {
            return Ok(Envelope::Error(err));
        }

        let items = match take_present(&mut fields, key) {
            Some(items) => serde_json::from_value::<Vec<T>>(items)?,
            None => return Ok(Envelope::Missing),
        };
        let meta = match take_present(&mut fields, "meta") {
            Some(meta) => serde_json::from_value::<ListMeta>(meta)?,
            None => ListMeta::default(),
        };

        Ok(Envelope::Payload(ListResult { items, meta }))
    }
}

impl<T> Envelope<T> {
    /// Turn the envelope into the call's result.
    pub fn into_result(self) -> Result<T> {
        match self {
            Envelope::Payload(payload) => Ok(payload),
            Envelope::Error(err) => Err(Error::Api(err)),
            Envelope::Missing => Err(Error::MissingResult),
        }
    }
}

fn parse_object(body: &[u8]) -> Result<Map<String, Value>> {
    Ok(serde_json::from_slice(body)?)
}

fn take_error(fields: &mut Map<String, Value>) -> Result<Option<ApiError>> {
    take_present(fields, "error")
        .map(serde_json::from_value::<ApiError>)
        .transpose()
        .map_err(Error::from)
}

/// Remove `key`, treating an explicit `null` the same as absence.
fn take_present(fields: &mut Map<String, Value>, key: &str) -> Option<Value> {
    fields.remove(key).filter(|v| !v.is_null())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiErrorType;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct Widget {
        id: String,
    }

    const ERROR: &str = r#"{"message": "Mandate import is already submitted", "type": "invalid_state", "code": 422}"#;

    #[test]
    fn test_payload() {
        let env = Envelope::<Widget>::decode(br#"{"widgets": {"id": "W1"}}"#, "widgets").unwrap();
        assert_eq!(env, Envelope::Payload(Widget { id: "W1".into() }));
    }

    #[test]
    fn test_error_takes_precedence() {
        let body = format!(r#"{{"error": {}, "widgets": {{"id": "W1"}}}}"#, ERROR);
        let env = Envelope::<Widget>::decode(body.as_bytes(), "widgets").unwrap();
        match env {
            Envelope::Error(err) => assert_eq!(err.error_type, ApiErrorType::InvalidState),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_wins_over_malformed_payload() {
        let body = format!(r#"{{"error": {}, "widgets": 42}}"#, ERROR);
        let env = Envelope::<Widget>::decode(body.as_bytes(), "widgets").unwrap();
        assert!(matches!(env, Envelope::Error(_)));
    }

    #[test]
    fn test_sparse_error_still_wins() {
        let body = br#"{"error": {"message": "boom", "code": 500}, "widgets": {"id": "W1"}}"#;
        match Envelope::<Widget>::decode(body, "widgets").unwrap() {
            Envelope::Error(err) => {
                assert_eq!(err.message, "boom");
                assert_eq!(err.error_type, ApiErrorType::Unknown);
                assert_eq!(err.code, 500);
            }
            other => panic!("expected error, got {:?}", other),
        }

        let env = Envelope::<Widget>::decode(br#"{"error": {}}"#, "widgets").unwrap();
        assert!(matches!(env, Envelope::Error(_)));
    }

    #[test]
    fn test_missing() {
        let env = Envelope::<Widget>::decode(b"{}", "widgets").unwrap();
        assert_eq!(env, Envelope::Missing);
        assert!(matches!(env.into_result(), Err(Error::MissingResult)));

        let env =
            Envelope::<Widget>::decode(br#"{"error": null, "widgets": null}"#, "widgets").unwrap();
        assert_eq!(env, Envelope::Missing);

        let env = Envelope::<Widget>::decode(br#"{"gadgets": {"id": "G1"}}"#, "widgets").unwrap();
        assert_eq!(env, Envelope::Missing);
    }

    #[test]
    fn test_malformed_json() {
        let err = Envelope::<Widget>::decode(b"{not json", "widgets").unwrap_err();
        assert!(matches!(err, Error::Json(_)));

        let err = Envelope::<Widget>::decode(b"[]", "widgets").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_decode_list() {
        let body = br#"{
            "widgets": [{"id": "W1"}, {"id": "W2"}],
            "meta": {"cursors": {"after": "W2", "before": null}, "limit": 2}
        }"#;
        let page = Envelope::<ListResult<Widget>>::decode_list(body, "widgets")
            .unwrap()
            .into_result()
            .unwrap();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_cursor(), Some("W2"));
        assert_eq!(page.meta.limit, Some(2));
    }

    #[test]
    fn test_decode_list_error_precedence() {
        let body = format!(r#"{{"error": {}, "widgets": [{{"id": "W1"}}]}}"#, ERROR);
        let err = Envelope::<ListResult<Widget>>::decode_list(body.as_bytes(), "widgets")
            .unwrap()
            .into_result()
            .unwrap_err();
        assert!(err.api_error().is_some());
    }

    #[test]
    fn test_decode_list_without_meta() {
        let page = Envelope::<ListResult<Widget>>::decode_list(br#"{"widgets": []}"#, "widgets")
            .unwrap()
            .into_result()
            .unwrap();
        assert!(page.items.is_empty());
        assert!(!page.has_more());
    }
}
