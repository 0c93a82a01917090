//! Bridge to a platform-native NFC scanner plugin, plus the helpers needed to
//! read the tags it reports

pub mod bridge;
pub mod config;
pub mod payload;
pub mod reader_mode;
pub mod scanner;
pub mod status;
pub mod tag;

pub(crate) mod build;
pub mod logging;

mod ffi;

pub use nfc_util as util;

pub use bridge::{InvokeCallback, NativeError, NativeInvoker};
pub use build::{BuildInfo, build_info};
pub use config::{ConfigError, ScannerConfig};
pub use payload::{NdefPayload, TextPayload, TextPayloadFormat};
pub use reader_mode::TagListener;
pub use scanner::{NfcScanner, ScannerMethod};
pub use status::NfcStatus;
pub use tag::{NdefRecord, ScannedTag, TagError};

uniffi::setup_scaffolding!();
