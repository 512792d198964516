//! JSON body helpers shared by every resource

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::api_error::ApiError;

/// Decode a list endpoint body.
///
/// An empty body or `null` is an empty collection; anything else that is not
/// a JSON array of `T` is a decode error.
pub fn decode_collection<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str::<Option<Vec<T>>>(body)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
    detail: Option<serde_json::Value>,
}

/// Pull a human readable message out of an error response body.
///
/// Understands `{"error": "..."}` and `{"detail": "..."}`.
pub fn extract_server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let detail = parsed.detail.and_then(|d| match d {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    });
    parsed
        .error
        .or(detail)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())
}

/// Deserialize `null` as `T::default()`
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: i64,
    }

    #[test]
    fn test_empty_and_null_bodies_are_empty_collections() {
        assert_eq!(decode_collection::<Row>("").unwrap(), vec![]);
        assert_eq!(decode_collection::<Row>("null").unwrap(), vec![]);
        assert_eq!(decode_collection::<Row>("[]").unwrap(), vec![]);
    }

    #[test]
    fn test_array_body() {
        let rows = decode_collection::<Row>(r#"[{"id":1},{"id":2}]"#).unwrap();
        assert_eq!(rows, vec![Row { id: 1 }, Row { id: 2 }]);
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = decode_collection::<Row>("<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn test_server_message_variants() {
        assert_eq!(
            extract_server_message(r#"{"error":"Budget must be positive"}"#),
            Some("Budget must be positive".to_string())
        );
        assert_eq!(
            extract_server_message(r#"{"detail":"Not Found"}"#),
            Some("Not Found".to_string())
        );
        assert_eq!(extract_server_message(r#"{"detail":[{"loc":["body"]}]}"#), None);
        assert_eq!(extract_server_message(r#"{"error":""}"#), None);
        assert_eq!(extract_server_message("Internal Server Error"), None);
    }
}
