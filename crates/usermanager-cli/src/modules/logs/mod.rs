mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::{
    handle_auth_logs, handle_cleanup_logs, handle_clear_logs, handle_log_activity,
};
pub(crate) use http::{clear_logs, cleanup_logs, fetch_auth_logs, record_activity};
pub(crate) use types::ActivityLogRequest;
