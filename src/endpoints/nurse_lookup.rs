//! Nurse Lookup: public license and discipline/final orders information for
//! batches of nurses enrolled in the institution's nurse list.

use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{SubmitResponse, Transaction, TransactionError, null_as_default, optional_time},
    error::NursysError,
    http::{Client, Context, Endpoint},
    time::Time,
};

pub const PATH: &str = "/nurselookup";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NurseLookupSubmitRequest {
    pub nurse_lookup_requests: Vec<NurseLookupRequest>,
}

/// One nurse to look up. Valid combinations:
///
/// - jurisdiction, license type, license number
/// - jurisdiction, license type, NCSBN id
/// - jurisdiction, NCSBN id
/// - license type, NCSBN id
/// - NCSBN id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NurseLookupRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jurisdiction_abbreviation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_type: Option<String>,
    #[serde(rename = "NcsbnId", skip_serializing_if = "Option::is_none")]
    pub ncsbn_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
}

impl NurseLookupRequest {
    #[must_use]
    pub fn by_ncsbn_id(ncsbn_id: impl Into<String>) -> Self {
        Self {
            ncsbn_id: Some(ncsbn_id.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NurseLookupRetrieveResponse {
    #[serde(default)]
    pub processing_complete_flag: bool,
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nurse_lookup_responses: Vec<NurseLookupResponse>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NurseLookupResponse {
    /// Whether the nurse was found in the institution's nurse list.
    pub success_flag: bool,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<TransactionError>,
    pub nurse_lookup_request: NurseLookupRequest,
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "NcsbnId", skip_serializing_if = "Option::is_none")]
    pub ncsbn_id: Option<String>,
    #[serde(deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<String>,
    #[serde(
        rename = "NurseLookupLicenses",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub licenses: Vec<License>,
    #[serde(
        rename = "NurseLookupRNAuthorizationsToPractice",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub rn_authorizations_to_practice: Vec<AuthorizationToPractice>,
    #[serde(
        rename = "NurseLookupPNAuthorizationsToPractice",
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub pn_authorizations_to_practice: Vec<AuthorizationToPractice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct License {
    pub last_name: String,
    pub first_name: String,
    pub license_type: String,
    pub jurisdiction_abbreviation: String,
    pub jurisdiction: String,
    pub license_number: String,
    pub active: String,
    pub license_status: String,
    pub license_original_date: String,
    pub license_expiration_date: String,
    /// Nurse Licensure Compact status.
    pub compact_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub messages: Vec<String>,
    #[serde(rename = "NurseLookupDisciplines", deserialize_with = "null_as_default")]
    pub disciplines: Vec<Discipline>,
    #[serde(rename = "NurseLookupNotifications", deserialize_with = "null_as_default")]
    pub notifications: Vec<BoardNotification>,
    #[serde(rename = "NurseLookupAdvancedPractices", deserialize_with = "null_as_default")]
    pub advanced_practices: Vec<AdvancedPractice>,
}

/// A discipline/final order taken against a license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Discipline {
    pub jurisdiction_abbreviation: String,
    pub jurisdiction: String,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub date_action_was_taken: Option<Time>,
    /// Taken against the license's Privilege To Practice under the NLC.
    pub against_privilege_to_practice_flag: bool,
    #[serde(rename = "NurseLookupBasisForActions", deserialize_with = "null_as_default")]
    pub basis_for_actions: Vec<BasisForAction>,
    #[serde(rename = "NurseLookupInitialActions", deserialize_with = "null_as_default")]
    pub initial_actions: Vec<DisciplineAction>,
    #[serde(rename = "NurseLookupInitialActionDocuments", deserialize_with = "null_as_default")]
    pub initial_action_documents: Vec<BoardDocument>,
    #[serde(rename = "NurseLookupRevisionReports", deserialize_with = "null_as_default")]
    pub revision_reports: Vec<RevisionReport>,
}

/// NPDB basis-for-action code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BasisForAction {
    pub basis_for_action_code: String,
    pub basis_for_action_description: String,
}

/// NPDB action code for a discipline/final order or one of its revisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DisciplineAction {
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub action_date: Option<Time>,
    pub action_code: String,
    pub action_description: String,
    pub action_stayed_flag: bool,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Time>,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Time>,
    /// Indefinite/Unspecified, Permanent, or Specified.
    pub duration: String,
    /// No, Yes, or Yes With Conditions.
    pub automatic_reinstatement: String,
}

/// Board order document; fetch its contents with [`Client::retrieve_documents`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoardDocument {
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub action_date: Option<Time>,
    #[serde(rename = "DocumentId")]
    pub document_id: String,
    pub document_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RevisionReport {
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub revision_report_date: Option<Time>,
    #[serde(rename = "NurseLookupRevisionActions", deserialize_with = "null_as_default")]
    pub revision_actions: Vec<DisciplineAction>,
    #[serde(rename = "NurseLookupRevisionActionDocuments", deserialize_with = "null_as_default")]
    pub revision_action_documents: Vec<BoardDocument>,
}

/// Member board notification placed on a license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct BoardNotification {
    pub jurisdiction_abbreviation: String,
    pub jurisdiction: String,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub notification_date: Option<Time>,
    pub notification_message: String,
    #[serde(deserialize_with = "null_as_default")]
    pub notification_documents: Vec<BoardDocument>,
}

/// APRN focus or specialty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AdvancedPractice {
    pub focus_specialty: String,
    pub prescription_authority: String,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub certification_expiration_date: Option<Time>,
    #[serde(deserialize_with = "optional_time", skip_serializing_if = "Option::is_none")]
    pub focus_specialty_expiration_date: Option<Time>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AuthorizationToPractice {
    pub state_abbreviation: String,
    pub state_description: String,
    pub authorization_to_practice_code: String,
    pub authorization_to_practice_description: String,
    pub authorization_to_practice_narrative: String,
}

impl Client {
    /// Submits a batch of enrolled nurses to look up.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn nurse_lookup(
        &self,
        ctx: &Context,
        request: &NurseLookupSubmitRequest,
    ) -> Result<SubmitResponse, NursysError> {
        self.invoke(ctx, &Endpoint::post(PATH), Some(request)).await
    }

    /// Fetches the outcome of a [`Client::nurse_lookup`] submission.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn get_nurse_lookup_result(
        &self,
        ctx: &Context,
        transaction_id: &str,
    ) -> Result<NurseLookupRetrieveResponse, NursysError> {
        let endpoint = Endpoint::get(PATH).query("transactionId", transaction_id);
        self.invoke(ctx, &endpoint, None::<&()>).await
    }
}
