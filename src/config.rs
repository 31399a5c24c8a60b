//! Environment-based configuration for the `nursys` binary.
//!
//! The library never reads the environment itself; callers build a
//! [`crate::Client`] explicitly. This is the loader the binary uses.

use std::{env, time::Duration};

use crate::{
    error::NursysError,
    http::{Client, Context, Credentials},
};

pub const ENV_BASE_URL: &str = "NURSYS_BASE_URL";
pub const ENV_USERNAME: &str = "NURSYS_USERNAME";
pub const ENV_PASSWORD: &str = "NURSYS_PASSWORD";
pub const ENV_TIMEOUT_SECS: &str = "NURSYS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub credentials: Credentials,
    /// Becomes a deadline on each call's context, not a transport timeout.
    pub timeout: Option<Duration>,
}

impl Config {
    /// # Errors
    /// Returns `MissingConfig` when a required variable is unset or the
    /// timeout is not a whole number of seconds.
    pub fn from_env() -> Result<Self, NursysError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    /// Same as [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NursysError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| NursysError::MissingConfig(format!("{key} must be set")))
        };

        let base_url = required(ENV_BASE_URL)?;
        let username = required(ENV_USERNAME)?;
        let password = required(ENV_PASSWORD)?;
        let timeout = lookup(ENV_TIMEOUT_SECS)
            .map(|raw| {
                raw.parse::<u64>().map(Duration::from_secs).map_err(|e| {
                    NursysError::MissingConfig(format!(
                        "{ENV_TIMEOUT_SECS} is not a number of seconds: {e}"
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            base_url,
            credentials: Credentials::new(username, password),
            timeout,
        })
    }

    /// # Errors
    /// Returns `ClientBuild` when the default transport cannot be created.
    pub fn client(&self) -> Result<Client, NursysError> {
        Client::builder(self.base_url.clone(), self.credentials.clone()).build()
    }

    /// Bounds `ctx` by the configured timeout, if any.
    #[must_use]
    pub fn bounded(&self, ctx: Context) -> Context {
        match self.timeout {
            Some(timeout) => ctx.with_timeout(timeout),
            None => ctx,
        }
    }
}
