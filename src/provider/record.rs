//! Normalization of raw API records into candidates.

use std::collections::HashSet;

use serde_json::Value;

use crate::deck::Candidate;

const PRIMARY_ID_FIELD: &str = "id";
const FALLBACK_ID_FIELD: &str = "_id";

/// Converts one API record into a candidate.
///
/// The identifier comes from `id`, else `_id`. A `tags` field that is absent
/// or not an array becomes an empty list; non-string tags are dropped.
/// Returns `None` when the record carries no usable identifier.
pub fn candidate_from_record(record: &Value) -> Option<Candidate> {
    let id = identifier(record.get(PRIMARY_ID_FIELD))
        .or_else(|| identifier(record.get(FALLBACK_ID_FIELD)))?;

    let tags = match record.get("tags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    Some(Candidate { id, tags })
}

fn identifier(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Normalizes a raw batch, keeping API order.
///
/// Records without an identifier and repeated identifiers are skipped.
/// At most `limit` candidates are returned.
pub fn normalize_batch(records: &[Value], limit: usize) -> Vec<Candidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::with_capacity(records.len().min(limit));

    for (index, record) in records.iter().enumerate() {
        if candidates.len() == limit {
            break;
        }
        let Some(candidate) = candidate_from_record(record) else {
            tracing::warn!(index, "Skipping cat record without identifier");
            continue;
        };
        if !seen.insert(candidate.id.clone()) {
            tracing::warn!(index, id = %candidate.id, "Skipping duplicate cat identifier");
            continue;
        }
        candidates.push(candidate);
    }

    candidates
}
