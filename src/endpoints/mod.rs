//! Typed Nursys endpoints.
//!
//! Each module adds the wrapper methods for one upstream operation to
//! [`crate::Client`], plus the request/response records it exchanges:
//! - `change_password`: rotate the institution's API password
//! - `manage_nurse_list`: add, update and remove enrolled nurses
//! - `nurse_lookup`: license and discipline details for enrolled nurses
//! - `notification_lookup`: status changes within a date range
//! - `retrieve_documents`: board order documents by id
//!
//! Submissions are asynchronous upstream: a POST answers with a
//! [`Transaction`] whose id is later passed to the matching `get_*_result`.

pub mod change_password;
pub mod manage_nurse_list;
pub mod notification_lookup;
pub mod nurse_lookup;
pub mod retrieve_documents;
pub mod transaction;

use serde::{Deserialize, Deserializer, de};

use crate::time::Time;

pub use transaction::{SubmitResponse, Transaction, TransactionError};

// The upstream sends `null` for empty collections as often as it omits them.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// Optional dates come as a timestamp, `null`, `""`, or not at all.
pub(crate) fn optional_time<'de, D>(deserializer: D) -> Result<Option<Time>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.is_empty() => Time::decode(&raw).map(Some).map_err(de::Error::custom),
        _ => Ok(None),
    }
}
