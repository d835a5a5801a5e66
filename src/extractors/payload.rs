//! Extract the request body as a flat field map (JSON object or urlencoded form).
//! Strings are trimmed and blank strings become null before validation sees them.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Request body fields. An empty body yields an empty map.
#[derive(Clone, Debug, Default)]
pub struct Payload(pub Map<String, Value>);

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        let map = if is_form {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
            fields.into_iter().map(|(k, v)| (k, Value::String(v))).collect()
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
            parse_json_object(&bytes)?
        };
        Ok(Payload(normalize(map)))
    }
}

fn parse_json_object(bytes: &[u8]) -> Result<Map<String, Value>, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(m)) => Ok(m),
        Ok(_) => Err(AppError::BadRequest("Request body must be a JSON object".into())),
        Err(e) => Err(AppError::BadRequest(format!("Malformed JSON body: {}", e))),
    }
}

fn normalize(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(k, v)| {
            let v = match v {
                Value::String(s) => {
                    let t = s.trim();
                    if t.is_empty() {
                        Value::Null
                    } else {
                        Value::String(t.to_string())
                    }
                }
                other => other,
            };
            (k, v)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_body_is_empty_map() {
        assert!(parse_json_object(b"").unwrap().is_empty());
        assert!(parse_json_object(b"  \n").unwrap().is_empty());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(parse_json_object(b"[1,2]"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_json_object(b"{oops"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn trims_and_nulls_blank_strings() {
        let map =
            parse_json_object(br#"{"name":"  Alice ","course":"   ","phone":1234567890}"#).unwrap();
        let out = normalize(map);
        assert_eq!(
            Value::Object(out),
            json!({"name": "Alice", "course": null, "phone": 1234567890u64})
        );
    }
}
