use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const DEFAULT_FILTER: &str = "nfc_scanner=debug,nfc_util=debug";

/// Install the global subscriber, filter comes from `RUST_LOG` when set
///
/// Safe to call more than once, only the first call installs anything
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if subscriber(filter).try_init().is_err() {
        tracing::debug!("logging already initialized");
        return;
    }

    tracing::info!(
        version = crate::build::version(),
        git = crate::build::git_short_hash(),
        profile = crate::build::profile(),
        "logging initialized"
    );
}

fn subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
}

#[uniffi::export]
fn init_logging() {
    init();
}
