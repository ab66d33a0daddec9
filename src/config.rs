//! Portal Configuration
//!
//! Compile-time settings shared by startup, persistence and validation.

use log::LevelFilter;

#[derive(Debug, Clone, Copy)]
pub struct PortalConfig {
    /// Local storage key holding the persisted store
    pub storage_key: &'static str,
    /// Version written next to the persisted state
    pub storage_version: u32,
    /// Email suffixes accepted at login
    pub allowed_email_domains: &'static [&'static str],
    pub log_level: LevelFilter,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage_key: "nuig-student-portal",
            storage_version: 0,
            allowed_email_domains: &["@universityofgalway.ie", "@nuigalway.ie"],
            log_level: if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info },
        }
    }
}
