use serde::Deserialize;

use itemforge_core::{DomainError, DomainResult, ItemId};
use itemforge_items::{Item, NewItem};

// -------------------------
// Request DTOs
// -------------------------

/// Wire payload for create and update.
///
/// Fields are deliberately loose so that a missing `name` reaches
/// [`ItemPayload::validate`] instead of failing inside the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct ItemPayload {
    /// Accepted for compatibility and ignored: the server assigns ids.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ItemPayload {
    /// Boundary validation: turn the wire payload into store input.
    pub fn validate(self) -> DomainResult<NewItem> {
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("field `name` is required"))?;
        Ok(NewItem::new(name, self.description))
    }
}

/// Parse a path id.
///
/// Only non-integer text is an invalid id. A well-formed integer that no
/// `ItemId` can hold (negative, or past `u64::MAX`) simply names no item.
pub fn parse_item_id(raw: &str) -> DomainResult<ItemId> {
    let raw = raw.trim();
    match raw.parse::<ItemId>() {
        Ok(id) => Ok(id),
        Err(err) => match canonical_integer(raw) {
            Some(n) => Err(DomainError::not_found(n)),
            None => Err(err),
        },
    }
}

/// Decimal form of an integer literal (`[+-]?[0-9]+`) without sign noise or
/// leading zeros, or `None` when `raw` is not one.
fn canonical_integer(raw: &str) -> Option<String> {
    let (negative, digits) = match raw.as_bytes().first()? {
        b'-' => (true, &raw[1..]),
        b'+' => (false, &raw[1..]),
        _ => (false, raw),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let magnitude = digits.trim_start_matches('0');
    Some(match (negative, magnitude.is_empty()) {
        (_, true) => "0".to_string(),
        (true, false) => format!("-{magnitude}"),
        (false, false) => magnitude.to_string(),
    })
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn item_to_json(item: Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id.get(),
        "name": item.name,
        "description": item.description,
    })
}
