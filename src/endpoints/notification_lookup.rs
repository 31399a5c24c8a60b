//! Notification Lookup: status changes reported for enrolled licenses within
//! a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{SubmitResponse, Transaction, null_as_default, optional_time},
    error::NursysError,
    http::{Client, Context, Endpoint},
    time::Time,
};

pub const PATH: &str = "/notificationlookup";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Date range to report on, both ends inclusive and written as `YYYY-MM-DD`.
///
/// The upstream rejects a start after the end and either end in the future.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationLookupSubmitRequest {
    pub start_date: String,
    pub end_date: String,
}

impl NotificationLookupSubmitRequest {
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let mut request = Self::default();
        request.set_start_date(start);
        request.set_end_date(end);
        request
    }

    pub fn set_start_date(&mut self, date: NaiveDate) {
        self.start_date = date.format(DATE_FORMAT).to_string();
    }

    pub fn set_end_date(&mut self, date: NaiveDate) {
        self.end_date = date.format(DATE_FORMAT).to_string();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NotificationLookupRetrieveResponse {
    #[serde(default)]
    pub processing_complete_flag: bool,
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notification_lookup_responses: Vec<NotificationLookupResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NotificationLookupResponse {
    #[serde(rename = "NcsbnId", skip_serializing_if = "Option::is_none")]
    pub ncsbn_id: Option<String>,
    pub jurisdiction_abbreviation: String,
    pub jurisdiction: String,
    pub license_number: String,
    pub license_type: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "RecordId")]
    pub record_id: String,
    /// When the status change was reported.
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub notification_date: Option<Time>,
    pub license_status_change: String,
    pub discipline_status_change: String,
    /// Changes affecting licenses the nurse holds that are not enrolled.
    pub discipline_status_change_other: String,
}

impl Client {
    /// Submits a date range of status changes to collect.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn notification_lookup(
        &self,
        ctx: &Context,
        request: &NotificationLookupSubmitRequest,
    ) -> Result<SubmitResponse, NursysError> {
        self.invoke(ctx, &Endpoint::post(PATH), Some(request)).await
    }

    /// Fetches the outcome of a [`Client::notification_lookup`] submission.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn get_notification_lookup_result(
        &self,
        ctx: &Context,
        transaction_id: &str,
    ) -> Result<NotificationLookupRetrieveResponse, NursysError> {
        let endpoint = Endpoint::get(PATH).query("transactionId", transaction_id);
        self.invoke(ctx, &endpoint, None::<&()>).await
    }
}
