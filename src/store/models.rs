//! Wire envelopes exchanged with the store.
//!
//! These types are separate from the domain models: they describe how the store
//! wraps payloads, not what the payloads mean.

use serde::{Deserialize, Serialize};

/// Successful response body: `{ "datas": ... }`.
///
/// `datas` may be missing or `null`, which callers treat as "no data".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Option::default")]
    pub datas: Option<T>,
}

impl<T> DataEnvelope<T> {
    pub const fn new(datas: T) -> Self {
        Self { datas: Some(datas) }
    }
}

/// Error response body: `{ "message": ... }`, every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// One element of the batch-delete body: `{ "id": ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteKey {
    pub id: String,
}

impl DeleteKey {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
