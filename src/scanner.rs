use std::sync::Arc;

use nfc_util::result_ext::ResultExt as _;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use tokio::{runtime::Handle, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    bridge::{InvokeCallback, NativeError, NativeInvoker},
    config::{ConfigError, ScannerConfig},
    reader_mode::{self, TagListener},
    status::NfcStatus,
};

/// Method names understood by the native plugin
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
    strum::EnumIter,
    uniffi::Enum,
)]
#[strum(serialize_all = "camelCase")]
pub enum ScannerMethod {
    NfcEnabled,
    StartReading,
    StopReading,
    RegisterReaderModeCallback,
    UnregisterReaderModeCallback,
}

static REF: OnceCell<NfcScanner> = OnceCell::new();

/// Forwards capability and reader control calls to the native plugin
#[derive(Debug, Clone, uniffi::Object)]
pub struct NfcScanner {
    invoker: Arc<Box<dyn NativeInvoker>>,
    config: ScannerConfig,

    /// Task forwarding tags from the current reader mode registration
    reader_mode: Arc<Mutex<Option<JoinHandle<()>>>>,
}

#[uniffi::export(async_runtime = "tokio")]
impl NfcScanner {
    #[uniffi::constructor]
    pub fn new(invoker: Box<dyn NativeInvoker>) -> Self {
        Self {
            invoker: Arc::new(invoker),
            config: ScannerConfig::new(),
            reader_mode: Arc::new(Mutex::new(None)),
        }
    }

    #[uniffi::constructor]
    pub fn with_config(
        invoker: Box<dyn NativeInvoker>,
        config: ScannerConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            invoker: Arc::new(invoker),
            config,
            reader_mode: Arc::new(Mutex::new(None)),
        })
    }

    /// Creates the global scanner, later calls return the existing one
    #[uniffi::constructor]
    pub fn init_global(invoker: Box<dyn NativeInvoker>) -> Self {
        if let Some(me) = REF.get() {
            warn!("nfc scanner is already initialized");
            return me.clone();
        }

        REF.get_or_init(|| Self::new(invoker)).clone()
    }

    pub async fn is_nfc_enabled(&self) -> Result<String, NativeError> {
        self.call(ScannerMethod::NfcEnabled).await
    }

    pub async fn start_reading(&self) -> Result<String, NativeError> {
        self.call(ScannerMethod::StartReading).await
    }

    pub async fn stop_reading(&self) -> Result<String, NativeError> {
        self.call(ScannerMethod::StopReading).await
    }

    /// Register `listener` for every tag discovered while reader mode is on
    ///
    /// The native side keeps the callback and answers once per tag, so this
    /// returns as soon as the call is handed over. Registering again replaces
    /// the previous listener.
    pub async fn register_reader_mode_callback(
        &self,
        listener: Box<dyn TagListener>,
    ) -> Result<(), NativeError> {
        let runtime = Handle::try_current().map_err_str(NativeError::NoRuntime)?;

        let method = ScannerMethod::RegisterReaderModeCallback;
        let (callback, stream) = InvokeCallback::repeating(method);
        self.invoke(method, callback);

        let forwarding =
            runtime.spawn(reader_mode::forward_tags(stream, listener, self.config.log_payloads));

        if let Some(previous) = self.reader_mode.lock().replace(forwarding) {
            debug!("replacing the previous reader mode listener");
            previous.abort();
        }

        Ok(())
    }

    /// Unregister the reader mode callback, the listener gets no tags after
    /// the native side confirms
    pub async fn unregister_reader_mode_callback(&self) -> Result<String, NativeError> {
        let response = self.call(ScannerMethod::UnregisterReaderModeCallback).await?;

        if let Some(forwarding) = self.reader_mode.lock().take() {
            forwarding.abort();
        }

        Ok(response)
    }

    /// The capability check read as an adapter status
    ///
    /// The plugin rejects calls with the status string when NFC is missing
    /// or disabled, so a rejection naming a status is not an error here
    pub async fn nfc_status(&self) -> Result<NfcStatus, NativeError> {
        match self.is_nfc_enabled().await {
            Ok(payload) => {
                NfcStatus::from_payload(&payload).ok_or(NativeError::UnknownStatus(payload))
            }
            Err(NativeError::Rejected(payload)) => {
                NfcStatus::from_payload(&payload).ok_or(NativeError::Rejected(payload))
            }
            Err(error) => Err(error),
        }
    }

    pub fn config(&self) -> ScannerConfig {
        self.config.clone()
    }
}

impl NfcScanner {
    /// Returns the global scanner
    ///
    /// # Panics
    ///
    /// Panics if the scanner has not been initialized
    pub fn global() -> &'static Self {
        REF.get().expect("nfc scanner is not initialized")
    }

    pub fn try_global() -> Option<&'static Self> {
        REF.get()
    }

    fn invoke(&self, method: ScannerMethod, callback: InvokeCallback) {
        let service = self.config.service_name.clone();

        debug!(%service, %method, "invoking native method");
        self.invoker.invoke(Arc::new(callback), service, method.to_string(), invocation_args());
    }

    async fn call(&self, method: ScannerMethod) -> Result<String, NativeError> {
        let (callback, pending) = InvokeCallback::new(method);
        self.invoke(method, callback);

        let response = pending.response().await;
        match &response {
            Ok(payload) if self.config.log_payloads => {
                debug!(%method, %payload, "native call succeeded")
            }
            Ok(_) => debug!(%method, "native call succeeded"),
            Err(NativeError::Dropped { .. }) => {
                warn!(%method, "native side never answered, callback was released")
            }
            Err(error) => debug!(%method, %error, "native call failed"),
        }

        response
    }
}

/// Every method takes a single empty options object
fn invocation_args() -> String {
    serde_json::json!([{}]).to_string()
}
