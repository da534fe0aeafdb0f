use serde_json::Value;
use tracing::{debug, warn};

use crate::{
    config::ContractConfig,
    error::{ContractError, Result},
    models::{Comment, Post, Record, Resource, ResourceKind, User},
};

/// Decode one record. Unknown extra fields are ignored; missing or
/// mistyped fields are a [`ContractError::Shape`].
pub fn decode<T: Resource>(json: &str) -> Result<T> {
    match serde_json::from_str::<T>(json) {
        Ok(record) => {
            debug!(kind = %T::KIND, id = record.id(), "decoded record");
            Ok(record)
        }
        Err(source) => {
            warn!(kind = %T::KIND, error = %source, "payload rejected");
            Err(ContractError::Shape {
                kind: T::KIND,
                source,
            })
        }
    }
}

/// Decode a JSON array of records, as returned by the collection endpoints.
pub fn decode_list<T: Resource>(json: &str) -> Result<Vec<T>> {
    let records = serde_json::from_str::<Vec<T>>(json).map_err(|source| {
        warn!(kind = %T::KIND, error = %source, "list payload rejected");
        ContractError::Shape {
            kind: T::KIND,
            source,
        }
    })?;
    debug!(kind = %T::KIND, count = records.len(), "decoded record list");
    Ok(records)
}

pub fn decode_record(kind: ResourceKind, json: &str) -> Result<Record> {
    Ok(match kind {
        ResourceKind::Users => decode::<User>(json)?.into_record(),
        ResourceKind::Posts => decode::<Post>(json)?.into_record(),
        ResourceKind::Comments => decode::<Comment>(json)?.into_record(),
    })
}

/// Same as [`decode_record`] but starting from an already parsed value.
pub fn record_from_value(kind: ResourceKind, value: Value) -> Result<Record> {
    fn typed<T: Resource>(value: Value) -> Result<Record> {
        serde_json::from_value::<T>(value)
            .map(T::into_record)
            .map_err(|source| {
                warn!(kind = %T::KIND, error = %source, "value rejected");
                ContractError::Shape {
                    kind: T::KIND,
                    source,
                }
            })
    }

    match kind {
        ResourceKind::Users => typed::<User>(value),
        ResourceKind::Posts => typed::<Post>(value),
        ResourceKind::Comments => typed::<Comment>(value),
    }
}

pub fn conforms(kind: ResourceKind, value: &Value) -> bool {
    record_from_value(kind, value.clone()).is_ok()
}

/// Checks every item of a payload holding either one object or an array of
/// them. Results keep the input order.
pub fn check_payload(kind: ResourceKind, payload: Value) -> Vec<Result<Record>> {
    let items = match payload {
        Value::Array(items) => items,
        single => vec![single],
    };
    debug!(kind = %kind, count = items.len(), "checking payload");
    items
        .into_iter()
        .map(|item| record_from_value(kind, item))
        .collect()
}

pub fn failed_count(results: &[Result<Record>]) -> usize {
    results.iter().filter(|r| r.is_err()).count()
}

/// Collection path first, then one `ok`/`FAIL` line per item.
pub fn report_lines(
    kind: ResourceKind,
    cfg: &ContractConfig,
    results: &[Result<Record>],
) -> Vec<String> {
    let mut lines = Vec::with_capacity(results.len() + 1);
    lines.push(kind.collection_path(cfg));
    for (idx, result) in results.iter().enumerate() {
        lines.push(match result {
            Ok(record) => format!("ok   [{idx}] {}", kind.item_path(cfg, record.id())),
            Err(e) => format!("FAIL [{idx}] {e}"),
        });
    }
    lines
}
