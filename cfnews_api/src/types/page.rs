//! Shaping of paginated API responses for size-bounded consumption.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A shaped page: pagination metadata plus a bounded item list.
///
/// Field names mirror the upstream response (`nb_pages`, not `total_pages`).
/// `note` is present exactly when the upstream total exceeded the requested
/// maximum.
#[derive(Serialize, Deserialize, Debug)]
pub struct PageResult {
    pub count: i64,
    pub total: i64,
    pub page: i64,
    pub nb_pages: i64,
    pub items: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Bounds a raw paginated response to at most `max_items` entries.
///
/// Responses without an `items` array (single-object lookups such as
/// portfolios) pass through unmodified. Otherwise pagination metadata is
/// copied from the raw response, `items` is truncated preserving order, and
/// a note is attached when results were cut off.
pub fn shape(raw: Value, max_items: usize) -> Value {
    let Some(items) = raw.get("items").and_then(Value::as_array) else {
        return raw;
    };

    let total = raw.get("total").and_then(Value::as_i64).unwrap_or(0);
    let mut shaped = json!({
        "count": raw.get("count").and_then(Value::as_i64).unwrap_or(0),
        "total": total,
        "page": raw.get("page").and_then(Value::as_i64).unwrap_or(1),
        "nb_pages": raw.get("nb_pages").and_then(Value::as_i64).unwrap_or(1),
        "items": items.iter().take(max_items).cloned().collect::<Vec<_>>(),
    });
    if total > max_items as i64 {
        shaped["note"] = Value::String(format!(
            "Showing the first {} of {} results",
            max_items, total
        ));
    }
    shaped
}
