use serde_json::Value;
use url::Url;

use crate::error::ApiError;

/// Required sale fields, in the order missing ones are reported.
pub const REQUIRED_SALE_FIELDS: [&str; 6] = [
    "venta_id",
    "hora",
    "dia_semana",
    "id_producto",
    "cantidad",
    "precio_total",
];

/// Parse an endpoint URL, rejecting anything that is not an absolute URL.
/// `endpoint` names the offending input in the error message (POST or GET).
pub fn check_url(text: &str, endpoint: &'static str) -> Result<Url, ApiError> {
    Url::parse(text.trim()).map_err(|_| ApiError::InvalidUrl(endpoint))
}

/// Parse the POST payload and check that every sale field is present.
/// Presence only: types and ranges are left to the server.
pub fn parse_sale_payload(text: &str) -> Result<Value, ApiError> {
    let payload: Value = serde_json::from_str(text).map_err(|_| ApiError::InvalidJson)?;

    let missing: Vec<&'static str> = match payload.as_object() {
        Some(object) => REQUIRED_SALE_FIELDS
            .iter()
            .copied()
            .filter(|field| !object.contains_key(*field))
            .collect(),
        // A non-object payload is missing every field
        None => REQUIRED_SALE_FIELDS.to_vec(),
    };

    if missing.is_empty() {
        Ok(payload)
    } else {
        Err(ApiError::MissingFields(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_url_accepts_absolute_urls() {
        assert!(check_url("http://127.0.0.1:8000/kmeans/guardar", "POST").is_ok());
        assert!(check_url("  https://example.com/apriori/reglas  ", "GET").is_ok());
    }

    #[test]
    fn test_check_url_rejects_relative_or_garbage() {
        for bad in ["", "kmeans/guardar", "not a url", "127.0.0.1:8000"] {
            match check_url(bad, "GET") {
                Err(ApiError::InvalidUrl("GET")) => {}
                other => panic!("expected InvalidUrl for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_parse_sale_payload_accepts_complete_record() {
        let text = r#"{
            "venta_id": 1490, "hora": 18, "dia_semana": 5,
            "id_producto": 14, "cantidad": 3, "precio_total": 15
        }"#;
        let payload = parse_sale_payload(text).unwrap();
        assert_eq!(payload["venta_id"], 1490);
    }

    #[test]
    fn test_parse_sale_payload_rejects_invalid_json() {
        match parse_sale_payload("{not json") {
            Err(ApiError::InvalidJson) => {}
            other => panic!("expected InvalidJson, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_fields_reported_in_declared_order() {
        // hora and cantidad removed; report must keep the declared order
        let text = r#"{"venta_id": 1, "dia_semana": 2, "id_producto": 3, "precio_total": 4.5}"#;
        match parse_sale_payload(text) {
            Err(ApiError::MissingFields(fields)) => {
                assert_eq!(fields, vec!["hora", "cantidad"]);
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_non_object_payload_is_missing_everything() {
        match parse_sale_payload("[1, 2, 3]") {
            Err(ApiError::MissingFields(fields)) => {
                assert_eq!(fields, REQUIRED_SALE_FIELDS.to_vec());
            }
            other => panic!("expected MissingFields, got {:?}", other),
        }
    }

    #[test]
    fn test_presence_check_ignores_types() {
        // Wrong types still pass; the client only checks key presence
        let text = r#"{
            "venta_id": "x", "hora": null, "dia_semana": 2,
            "id_producto": 3, "cantidad": 1, "precio_total": "mucho"
        }"#;
        assert!(parse_sale_payload(text).is_ok());
    }
}
