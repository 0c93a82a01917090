//! Cross-boundary calls into the native NFC plugin
//!
//! The host implements [`NativeInvoker`]. Every call hands it a fresh
//! [`InvokeCallback`]. Most calls resolve a single-slot channel that the Rust
//! side awaits. The reader mode registration stays open and streams one
//! result per discovered tag until the native side releases it.

use std::sync::Arc;

use flume::{Receiver, Sender};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::scanner::ScannerMethod;

/// Implemented by the host platform, forwards a call to the native plugin
#[uniffi::export(callback_interface)]
pub trait NativeInvoker: Send + Sync + std::fmt::Debug + 'static {
    /// Start `method` on `service` with the JSON encoded `args`
    ///
    /// Should return right away. For most methods the native side calls
    /// exactly one of `callback.success` or `callback.error` whenever it is
    /// done, a reader mode registration callback may be called once per tag
    fn invoke(
        &self,
        callback: Arc<InvokeCallback>,
        service: String,
        method: String,
        args: String,
    );
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, uniffi::Error)]
pub enum NativeError {
    /// The native error payload, passed through as is
    #[error("native call failed: {0}")]
    Rejected(String),

    #[error("native side released the {method} callback without responding")]
    Dropped { method: ScannerMethod },

    #[error("unrecognized nfc status: {0}")]
    UnknownStatus(String),

    #[error("no async runtime to forward scanned tags on: {0}")]
    NoRuntime(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NativeOutcome {
    Success(String),
    Error(String),
}

impl NativeOutcome {
    fn kind(&self) -> &'static str {
        match self {
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }

    fn into_result(self) -> Result<String, NativeError> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Error(payload) => Err(NativeError::Rejected(payload)),
        }
    }
}

#[derive(Debug)]
enum Continuation {
    /// Taken by the first resolution
    Once(Mutex<Option<Sender<NativeOutcome>>>),

    /// Kept for as long as the native side holds the callback
    Repeating(Sender<NativeOutcome>),
}

/// Success and error continuations for a native call
#[derive(Debug, uniffi::Object)]
pub struct InvokeCallback {
    method: ScannerMethod,
    continuation: Continuation,
}

impl InvokeCallback {
    pub(crate) fn new(method: ScannerMethod) -> (Self, PendingCall) {
        let (sender, receiver) = flume::bounded(1);

        let callback = Self {
            method,
            continuation: Continuation::Once(Mutex::new(Some(sender))),
        };

        (callback, PendingCall { method, receiver })
    }

    /// A callback that accepts any number of results, in order
    pub(crate) fn repeating(method: ScannerMethod) -> (Self, ResultStream) {
        let (sender, receiver) = flume::unbounded();

        let callback = Self {
            method,
            continuation: Continuation::Repeating(sender),
        };

        (callback, ResultStream { receiver })
    }

    fn resolve(&self, outcome: NativeOutcome) {
        let sent = match &self.continuation {
            Continuation::Once(slot) => {
                let Some(sender) = slot.lock().take() else {
                    warn!(
                        method = %self.method,
                        kind = outcome.kind(),
                        "native callback already resolved, ignoring"
                    );
                    return;
                };

                sender.send(outcome)
            }
            Continuation::Repeating(sender) => sender.send(outcome),
        };

        if sent.is_err() {
            debug!(method = %self.method, "caller stopped waiting for the native response");
        }
    }
}

#[uniffi::export]
impl InvokeCallback {
    pub fn success(&self, payload: String) {
        self.resolve(NativeOutcome::Success(payload));
    }

    pub fn error(&self, payload: String) {
        self.resolve(NativeOutcome::Error(payload));
    }

    pub fn method(&self) -> ScannerMethod {
        self.method
    }

    /// True once no further result will be delivered
    ///
    /// A repeating callback is only done when the Rust side stops listening
    pub fn is_resolved(&self) -> bool {
        match &self.continuation {
            Continuation::Once(slot) => slot.lock().is_none(),
            Continuation::Repeating(sender) => sender.is_disconnected(),
        }
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self.continuation, Continuation::Repeating(_))
    }
}

/// The Rust end of an in-flight native call
#[derive(Debug)]
pub(crate) struct PendingCall {
    method: ScannerMethod,
    receiver: Receiver<NativeOutcome>,
}

impl PendingCall {
    pub(crate) async fn response(self) -> Result<String, NativeError> {
        match self.receiver.recv_async().await {
            Ok(outcome) => outcome.into_result(),
            Err(_) => Err(NativeError::Dropped {
                method: self.method,
            }),
        }
    }
}

/// The Rust end of a repeating native callback
#[derive(Debug)]
pub(crate) struct ResultStream {
    receiver: Receiver<NativeOutcome>,
}

impl ResultStream {
    /// The next result, `None` once the native side released the callback
    pub(crate) async fn next(&self) -> Option<Result<String, NativeError>> {
        let outcome = self.receiver.recv_async().await.ok()?;
        Some(outcome.into_result())
    }
}
