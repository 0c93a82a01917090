const VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHORT_HASH: &str = env!("GIT_SHORT_HASH");
const BUILD_PROFILE: &str = env!("BUILD_PROFILE");

#[cfg(debug_assertions)]
const IS_RELEASE: bool = false;

#[cfg(not(debug_assertions))]
const IS_RELEASE: bool = true;

#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct BuildInfo {
    pub version: String,
    pub git_short_hash: String,
    pub profile: String,
    pub is_release: bool,
}

pub const fn version() -> &'static str {
    VERSION
}

pub const fn git_short_hash() -> &'static str {
    GIT_SHORT_HASH
}

pub const fn profile() -> &'static str {
    BUILD_PROFILE
}

#[uniffi::export]
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION.to_string(),
        git_short_hash: GIT_SHORT_HASH.to_string(),
        profile: BUILD_PROFILE.to_string(),
        is_release: IS_RELEASE,
    }
}
