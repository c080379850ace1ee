// =============================================================================
// API
// =============================================================================

/// Default base URL of the magento.watch API
pub const DEFAULT_BASE_URL: &str = "https://magento.watch/api/v1";

/// Timeout for catalog fetches in milliseconds (15 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 15_000;

/// User-Agent sent with catalog requests
pub const USER_AGENT: &str = concat!("magento-matrix/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Input defaults
// =============================================================================

/// Distribution used when none is given
pub const DEFAULT_DISTRIBUTION: &str = "magento-community";

/// Selection kind used when none is given
pub const DEFAULT_KIND: &str = "latest";

/// Name of the output holding the serialized matrix
pub const MATRIX_OUTPUT: &str = "matrix";

/// Inputs that drive one matrix run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    /// Distribution to fetch (e.g., "magento-community", "mage-os")
    pub distribution: String,
    /// Selection kind: "latest", "all" or "custom"
    pub kind: String,
    /// Comma-separated versions, only used by the "custom" kind
    pub custom_versions: String,
}

impl Default for Inputs {
    fn default() -> Self {
        Self {
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            kind: DEFAULT_KIND.to_string(),
            custom_versions: String::new(),
        }
    }
}

impl Inputs {
    /// Builds inputs from raw values, trimming distribution and kind and
    /// falling back to defaults for blank ones.
    ///
    /// GitHub Actions passes inputs the workflow did not set as empty strings.
    pub fn from_raw(distribution: &str, kind: &str, custom_versions: &str) -> Self {
        Self {
            distribution: or_default(distribution, DEFAULT_DISTRIBUTION),
            kind: or_default(kind, DEFAULT_KIND),
            custom_versions: custom_versions.to_string(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    match value.trim() {
        "" => default.to_string(),
        trimmed => trimmed.to_string(),
    }
}
