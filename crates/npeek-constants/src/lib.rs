pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const DESCRIPTION: &str = "Inspect npm package metadata and download stats";
pub const REPOSITORY_URL: &str = "https://github.com/npeekjs/npeek";
pub const BIN_NAME: &str = "npeek";

pub const USER_AGENT: &str = "npeek/0.1.0";

pub const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const NPM_DOWNLOADS_API_URL: &str = "https://api.npmjs.org/downloads/point";
pub const DOWNLOADS_PERIOD_LAST_MONTH: &str = "last-month";

/// Stable keys injected into (or merged over) the collected mapping.
pub mod keys {
    pub const PACKAGE_NAME: &str = "package_name";
    pub const ORIGINAL_PACKAGE_NAME: &str = "original_package_name";
    pub const VERSION_TAG: &str = "version_tag";
    pub const DOWNLOADS: &str = "downloads";
}
