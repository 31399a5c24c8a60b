//! Manage Nurse List: add, update and remove batches of nurses from the
//! institution's nurse list.
//!
//! Submitting answers with a transaction id; after upstream processing the
//! outcome is fetched with [`Client::get_manage_nurse_list_result`].

use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{SubmitResponse, Transaction, TransactionError, null_as_default},
    error::NursysError,
    http::{Client, Context, Endpoint},
};

pub const PATH: &str = "/managenurselist";

/// A field the upstream sends either as a number or as a string.
///
/// Empty values are echoed back as `""` even where a number was submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseValue {
    Number(i64),
    Text(String),
}

impl Default for LooseValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<i64> for LooseValue {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LooseValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for LooseValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManageNurseListSubmitRequest {
    pub manage_nurse_list_requests: Vec<ManageNurseListRequest>,
}

/// One nurse to add, update or remove.
///
/// Matching uses some combination of jurisdiction, license type, license
/// number and NCSBN id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ManageNurseListRequest {
    /// See [`crate::constants::action_code`].
    pub submission_action_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction_abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    /// See [`crate::constants::license_type`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(rename = "NcsbnId", skip_serializing_if = "Option::is_none")]
    pub ncsbn_id: Option<LooseValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(rename = "LastFourSSN")]
    pub last_four_ssn: String,
    pub birth_year: LooseValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_practice_setting: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hospital_practice_setting_other: Option<String>,
    pub notifications_enabled: String,
    pub reminders_enabled: String,
    /// Client-provided id echoed back in the result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Pipe-delimited location codes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_list: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ManageNurseListRetrieveResponse {
    #[serde(default)]
    pub processing_complete_flag: bool,
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub manage_nurse_list_responses: Vec<ManageNurseListResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ManageNurseListResponse {
    pub success_flag: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub errors: Vec<TransactionError>,
    pub manage_nurse_list_request: ManageNurseListRequest,
}

impl Client {
    /// Submits a batch of nurse list changes.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn manage_nurse_list(
        &self,
        ctx: &Context,
        request: &ManageNurseListSubmitRequest,
    ) -> Result<SubmitResponse, NursysError> {
        self.invoke(ctx, &Endpoint::post(PATH), Some(request)).await
    }

    /// Fetches the outcome of a [`Client::manage_nurse_list`] submission.
    ///
    /// `processing_complete_flag` stays `false` until the upstream is done;
    /// polling again later is up to the caller.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn get_manage_nurse_list_result(
        &self,
        ctx: &Context,
        transaction_id: &str,
    ) -> Result<ManageNurseListRetrieveResponse, NursysError> {
        let endpoint = Endpoint::get(PATH).query("transactionId", transaction_id);
        self.invoke(ctx, &endpoint, None::<&()>).await
    }
}
