mod actions;
pub(crate) mod args;
mod http;
pub(crate) mod types;

pub(crate) use actions::{
    handle_authenticate, handle_create, handle_delete, handle_list, handle_reset,
};
pub(crate) use http::{authenticate_device, create_user, delete_user, list_users, reset_user};
pub(crate) use types::{AuthenticateRequest, UserRequest};
