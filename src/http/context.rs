//! Caller-supplied cancellation for a single call.
//!
//! A [`Context`] ends either when its deadline passes or when the paired
//! [`CancelHandle`] fires, whichever comes first. The client races the
//! network wait against [`Context::done`], so an ended context returns the
//! call promptly instead of waiting out the upstream.

use std::{future, time::Duration};

use tokio::{
    sync::watch,
    time::{self, Instant},
};

use crate::error::ContextError;

#[derive(Debug, Clone, Default)]
pub struct Context {
    deadline: Option<Instant>,
    cancel: Option<watch::Receiver<bool>>,
}

/// Cancels the [`Context`] it was created with. Cancelling twice is a no-op.
#[derive(Debug)]
pub struct CancelHandle(watch::Sender<bool>);

impl CancelHandle {
    pub fn cancel(&self) {
        self.0.send_replace(true);
    }
}

impl Context {
    /// A context that never ends on its own.
    #[must_use]
    pub fn background() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cancellable() -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            deadline: None,
            cancel: Some(rx),
        };
        (ctx, CancelHandle(tx))
    }

    /// Ends the context `timeout` from now, unless it already ends sooner.
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(self.deadline.map_or(deadline, |current| current.min(deadline)));
        self
    }

    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Why the context has already ended, if it has.
    #[must_use]
    pub fn err(&self) -> Option<ContextError> {
        if self.cancel.as_ref().is_some_and(|rx| *rx.borrow()) {
            return Some(ContextError::Cancelled);
        }
        if self.deadline.is_some_and(|deadline| deadline <= Instant::now()) {
            return Some(ContextError::DeadlineExceeded);
        }
        None
    }

    /// Resolves once the context ends. Never resolves for a background context.
    pub async fn done(&self) -> ContextError {
        let expired = async {
            match self.deadline {
                Some(deadline) => time::sleep_until(deadline).await,
                None => future::pending().await,
            }
        };
        let cancelled = async {
            match self.cancel.clone() {
                // A dropped handle can no longer cancel, so keep waiting.
                Some(mut rx) => {
                    let signalled = rx.wait_for(|cancelled| *cancelled).await.map(drop);
                    if signalled.is_err() {
                        future::pending::<()>().await;
                    }
                }
                None => future::pending().await,
            }
        };

        tokio::select! {
            () = cancelled => ContextError::Cancelled,
            () = expired => ContextError::DeadlineExceeded,
        }
    }
}
