use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde_json::Value;

use crate::ProductAuditRecord;

/// Decodes a base64-encoded JSON report payload, accepting either
/// `{ "pages": [...] }` or a bare array of records. A failure at any
/// stage is logged and swallowed: the caller gets an empty catalog
/// rather than an error.
pub fn decode_report_param(encoded: &str) -> Vec<ProductAuditRecord> {
    match try_decode(encoded) {
        Ok(records) => records,
        Err(err) => {
            tracing::error!("failed to decode report payload: {}", err);
            Vec::new()
        }
    }
}

fn try_decode(encoded: &str) -> Result<Vec<ProductAuditRecord>, String> {
    let bytes = STANDARD
        .decode(encoded.trim().as_bytes())
        .map_err(|err| format!("invalid base64: {}", err))?;
    let value: Value =
        serde_json::from_slice(&bytes).map_err(|err| format!("invalid JSON: {}", err))?;
    records_from_value(value)
}

/// Extracts audit records from an already-parsed JSON document in
/// either of the accepted shapes.
pub fn records_from_value(value: Value) -> Result<Vec<ProductAuditRecord>, String> {
    let pages = match value {
        Value::Object(mut map) => map
            .remove("pages")
            .ok_or_else(|| "object payload has no pages field".to_string())?,
        other => other,
    };

    if !pages.is_array() {
        return Err("pages payload is not an array".to_string());
    }

    serde_json::from_value(pages).map_err(|err| format!("invalid audit records: {}", err))
}
