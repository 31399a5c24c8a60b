//! Change Password: rotate the institution's API password.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    endpoints::SubmitResponse,
    error::NursysError,
    http::{Client, Context, Endpoint},
};

pub const PATH: &str = "/changepassword";

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangePasswordRequest {
    pub new_password: String,
}

impl ChangePasswordRequest {
    #[must_use]
    pub fn new(new_password: impl Into<String>) -> Self {
        Self {
            new_password: new_password.into(),
        }
    }
}

impl fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangePasswordRequest")
            .field("new_password", &"<redacted>")
            .finish()
    }
}

pub type ChangePasswordResponse = SubmitResponse;

impl Client {
    /// Changes the institution's API password.
    ///
    /// Password policy failures arrive as a successful call whose
    /// transaction carries `TransactionSuccessFlag = false` and the reasons.
    ///
    /// # Errors
    /// See [`Client::invoke`].
    pub async fn change_password(
        &self,
        ctx: &Context,
        request: &ChangePasswordRequest,
    ) -> Result<ChangePasswordResponse, NursysError> {
        self.invoke(ctx, &Endpoint::post(PATH), Some(request)).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn serializes_new_password_field() {
        let request = ChangePasswordRequest::new("MyN3wR34llyStr0ngAP1P4ssw0rd$1!0");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"NewPassword":"MyN3wR34llyStr0ngAP1P4ssw0rd$1!0"}"#
        );
    }

    #[test]
    fn debug_hides_password() {
        let request = ChangePasswordRequest::new("hunter22");
        assert!(!format!("{request:?}").contains("hunter22"));
    }
}
