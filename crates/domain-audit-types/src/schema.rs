//! Canonical schema constants for structured logging
//!
//! Every log line emitted by the audit pipeline uses these keys so that
//! operators can filter on a single vocabulary.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Entity identifiers
pub const FIELD_DOMAIN_ID: &str = "domain_id";
pub const FIELD_EVENT_ID: &str = "event_id";

// Collection sizes
pub const FIELD_NUM_ENTRIES: &str = "num_entries";
pub const FIELD_NUM_EVENTS: &str = "num_events";
pub const FIELD_NUM_FAILOVERS: &str = "num_failovers";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
