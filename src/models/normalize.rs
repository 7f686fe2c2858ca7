//! Coercion and filtering of raw `/api/generate` payloads.
//!
//! Everything here is pure: a payload either becomes an [`InvoiceInput`] or a
//! [`ValidationError`], and nothing is written in either case.

use serde_json::Value;

use super::{InvoiceInput, LineItem};
use crate::core::{format_quantity, parse_or, ValidationError, ValidationResult};

/// Parses a request body. An empty body is treated as `null`.
pub fn parse_payload(body: &[u8]) -> ValidationResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }
    serde_json::from_slice(body).map_err(|e| ValidationError::MalformedBody(e.to_string()))
}

pub fn normalize_invoice(payload: &Value) -> ValidationResult<InvoiceInput> {
    let company_name = coerce_string(payload.get("companyName"));
    let client_name = coerce_string(payload.get("clientName"));

    if company_name.is_empty() || client_name.is_empty() {
        return Err(ValidationError::MissingParty);
    }

    let items: Vec<LineItem> = match payload.get("items") {
        Some(Value::Array(raw)) => raw.iter().filter_map(normalize_item).collect(),
        _ => Vec::new(),
    };

    if items.is_empty() {
        return Err(ValidationError::NoValidItems);
    }

    let input = InvoiceInput {
        company_name,
        client_name,
        items,
    };
    if !input.total().is_finite() {
        return Err(ValidationError::TotalOutOfRange);
    }
    Ok(input)
}

/// Keeps an item only when it has a description, a positive quantity, a
/// non-negative price and a finite line total.
fn normalize_item(raw: &Value) -> Option<LineItem> {
    let description = coerce_string(raw.get("description"));
    let qty = coerce_number(raw.get("qty"));
    let price = coerce_number(raw.get("price"));

    if description.is_empty() || qty <= 0.0 || price < 0.0 {
        return None;
    }

    let item = LineItem {
        description,
        qty,
        price,
    };
    item.line_total().is_finite().then_some(item)
}

fn coerce_string(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) if n.is_f64() => n.as_f64().map(format_quantity).unwrap_or_default(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => parse_or(s, 0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    }
}
