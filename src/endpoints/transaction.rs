use serde::{Deserialize, Serialize};

use crate::{endpoints::null_as_default, time::Time};

/// Processing receipt attached to every Nursys reply.
///
/// A `false` success flag is a business-level outcome: the HTTP call itself
/// succeeded and the reasons are listed in `transaction_errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// Passed to the matching `get_*_result` call of an asynchronous submission.
    pub transaction_id: String,
    pub transaction_date: Time,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_comment: String,
    pub transaction_success_flag: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub transaction_errors: Vec<TransactionError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionError {
    #[serde(rename = "ErrorID")]
    pub error_id: i64,
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
}

/// Reply to every asynchronous submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(rename = "Transaction")]
    pub transaction: Transaction,
}
