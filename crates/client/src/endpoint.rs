//! Collection endpoint configuration
//!
//! Centralized static configuration for the measurement collection
//! endpoint. Update these values to change where hits are sent.

/// Collection endpoint host
pub const COLLECT_HOST: &str = "www.google-analytics.com";

/// Path for single hits
pub const COLLECT_PATH: &str = "/collect";

/// Path for batched hits
pub const BATCH_PATH: &str = "/batch";

/// Full HTTPS URL for single hits
pub fn collect_url() -> String {
    format!("https://{}{}", COLLECT_HOST, COLLECT_PATH)
}

/// Full HTTPS URL for batched hits
pub fn batch_url() -> String {
    format!("https://{}{}", COLLECT_HOST, BATCH_PATH)
}
