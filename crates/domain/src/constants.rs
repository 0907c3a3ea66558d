//! Domain constants
//!
//! Calendar colours and backend defaults shared by core and infra.

// Calendar status colours (hex, as the schedule widget expects them)
pub const COLOR_PENDING: &str = "#3a87ad";
pub const COLOR_COMPLETED: &str = "#5cb85c";
pub const COLOR_MISSED: &str = "#d9534f";
pub const COLOR_CANCELED: &str = "#777777";

// Calendar paging defaults used by the batch calendar view
pub const DEFAULT_SUBTOPIC_PAGE: u32 = 0;
pub const DEFAULT_SUBTOPIC_PAGE_SIZE: u32 = 34;

// HTTP defaults
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_MAX_ATTEMPTS: usize = 3;
pub const DEFAULT_API_BACKOFF_MS: u64 = 200;

// Session defaults
pub const DEFAULT_SESSION_PATH: &str = "caliber-session.json";
