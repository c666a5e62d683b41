/// Fixed settings for the Leads Tracker popup

/// Storage key holding the persisted lead snapshot
pub const STORAGE_KEY: &str = "myLeads";

/// Scheme prepended to manually entered URLs that lack one
pub const DEFAULT_SCHEME: &str = "https://";

/// Prefixes that count as "already absolute" for manual entry
pub const ACCEPTED_PREFIXES: [&str; 2] = ["http://", "https://"];

/// Schemes the list is allowed to render as clickable links
pub const LINKABLE_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Quiet period before a search query is applied (milliseconds)
pub const SEARCH_QUIET_PERIOD_MS: u32 = 300;

pub const EMPTY_LIST_MESSAGE: &str =
    "No saved leads yet. Add some using the input field or 'Save Tab' button!";

pub const NO_MATCH_MESSAGE: &str = "No leads match your search.";

pub const CONFIRM_DELETE_ALL: &str = "Are you sure you want to delete all saved leads?";

/// Log level for the browser console
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
