//! Retrieve Documents: board order documents attached to disciplines and
//! notifications, by the document ids a nurse lookup returned.

use serde::{Deserialize, Serialize};

use crate::{
    endpoints::{Transaction, null_as_default},
    error::NursysError,
    http::{Client, Context, Endpoint},
};

pub const PATH: &str = "/retrievedocuments";

/// Most document ids the upstream accepts in one call.
pub const MAX_DOCUMENT_IDS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetrieveDocumentsResponse {
    pub transaction: Transaction,
    #[serde(default, deserialize_with = "null_as_default")]
    pub documents: Vec<RetrievedDocument>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RetrievedDocument {
    /// Whether the document was found.
    pub success_flag: bool,
    #[serde(rename = "DocumentId")]
    pub document_id: String,
    /// File name including extension.
    pub document_name: String,
    /// File contents as sent by the upstream (base64 text).
    pub document_contents: String,
}

impl Client {
    /// Fetches documents by id, at most [`MAX_DOCUMENT_IDS`] per call.
    ///
    /// Ids are sent comma-joined in one `documentIds` query parameter.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn retrieve_documents<S: AsRef<str>>(
        &self,
        ctx: &Context,
        document_ids: &[S],
    ) -> Result<RetrieveDocumentsResponse, NursysError> {
        let ids = document_ids
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let endpoint = Endpoint::get(PATH).query("documentIds", ids);
        self.invoke(ctx, &endpoint, None::<&()>).await
    }
}
