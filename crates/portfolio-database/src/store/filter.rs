//! JSON containment matching and update helpers shared by the stores.

use std::cmp::Ordering;

use serde_json::{Map, Value};

use portfolio_core::traits::SortBy;

/// Whether `document` contains `filter`.
///
/// Objects match when every filter key is present with a containing value.
/// Arrays match when every filter element is contained by some document
/// element. Scalars compare by equality. This mirrors PostgreSQL's `@>`.
pub fn json_contains(document: &Value, filter: &Value) -> bool {
    match (document, filter) {
        (Value::Object(doc), Value::Object(wanted)) => wanted.iter().all(|(key, value)| {
            doc.get(key)
                .is_some_and(|present| json_contains(present, value))
        }),
        (Value::Array(doc), Value::Array(wanted)) => wanted
            .iter()
            .all(|w| doc.iter().any(|present| json_contains(present, w))),
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => a == b,
        },
        (a, b) => a == b,
    }
}

/// Set and unset top-level fields. Returns `true` if the document changed.
pub fn apply_update(document: &mut Map<String, Value>, set: &Map<String, Value>, unset: &[String]) -> bool {
    let mut modified = false;
    for (key, value) in set {
        if document.get(key) != Some(value) {
            document.insert(key.clone(), value.clone());
            modified = true;
        }
    }
    for key in unset {
        modified |= document.remove(key).is_some();
    }
    modified
}

/// The document created by an upsert: the filter's fields with `set` applied.
pub fn upsert_seed(filter: &Value, set: &Map<String, Value>) -> Map<String, Value> {
    let mut seed = filter.as_object().cloned().unwrap_or_default();
    apply_update(&mut seed, set, &[]);
    seed
}

/// Sort documents in place on a top-level field.
///
/// Numbers sort numerically and strings lexically; documents missing the
/// field sort last regardless of direction.
pub fn sort_documents(documents: &mut [Value], sort: &SortBy) {
    documents.sort_by(|a, b| {
        match (a.get(&sort.field), b.get(&sort.field)) {
            (Some(x), Some(y)) => {
                let ord = compare_values(x, y);
                if sort.ascending { ord } else { ord.reverse() }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .zip(y.as_f64())
            .and_then(|(x, y)| x.partial_cmp(&y))
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}

fn rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}
