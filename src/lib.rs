//! Typed async client for the Nursys e-Notify API.
//!
//! The crate is organized into:
//!
//! - `http`: the shared invocation pipeline (credentials, cancellation,
//!   status classification)
//! - `time`: the timestamp codec used by every date-bearing payload
//! - `endpoints`: one wrapper method per upstream operation and its records
//! - `error`: error types and classification helpers
//! - `config`: environment loading used by the `nursys` binary
//!
//! ```no_run
//! use nursys::{Client, Context, endpoints::change_password::ChangePasswordRequest};
//!
//! # async fn run() -> Result<(), nursys::NursysError> {
//! let client = Client::new("https://api.example.com/nursys", "username", "password")?;
//! let ctx = Context::background().with_timeout(std::time::Duration::from_secs(30));
//! let reply = client
//!     .change_password(&ctx, &ChangePasswordRequest::new("An0ther$trongOne"))
//!     .await?;
//! println!("{}", reply.transaction.transaction_success_flag);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod time;

pub use error::{ContextError, NursysError};
pub use http::{CancelHandle, Client, ClientBuilder, Context, Credentials, Endpoint};
pub use time::{Time, TimeDecodeError};
