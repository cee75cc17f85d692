use serde_json::Value;

/// Conversion of an error into a plain structured record.
///
/// Implementations choose which fields to expose. The conversion is lossy:
/// source chains, capture locations and anything not copied into the record
/// are dropped.
pub trait ErrorDetail {
    fn to_detail(&self) -> serde_json::Result<Value>;
}
