pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod render;
pub(crate) mod types;

pub(crate) use config::resolve_settings;
pub(crate) use http::send_request;
pub(crate) use render::{print_auth_logs, print_response};
pub(crate) use types::{CommandContext, ServiceResponse};
