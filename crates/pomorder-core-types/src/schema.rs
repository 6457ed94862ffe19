//! Canonical schema constants for structured logging and events
//!
//! These constants keep field names identical between the logging macros,
//! the error facility and the tests that assert on captured events.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Rule identifiers
pub const FIELD_RULE_ID: &str = "rule_id";

// Collection sizes
pub const FIELD_ACTUAL_LEN: &str = "actual_len";
pub const FIELD_REQUIRED_LEN: &str = "required_len";
pub const FIELD_OPS_LEN: &str = "ops_len";
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_REPORTS_LEN: &str = "reports_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
