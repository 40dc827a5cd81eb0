// src/config/consts.rs

// Net config
pub const PROGRAMS_BASE_URL: &str = "https://www.halhigdon.com/training-programs/";
pub const DEFAULT_USER_AGENT: &str = concat!("race_plan/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 30;

// Parse
pub const SCHEDULE_TABLE_CLASS: &str = "tablesaw";
pub const DAYS_PER_WEEK: usize = 7;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "plan";
