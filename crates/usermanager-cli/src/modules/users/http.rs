use reqwest::Method;
use uuid::Uuid;

use crate::modules::system::{send_request, CommandContext, ServiceResponse};
use crate::modules::users::{AuthenticateRequest, UserRequest};

fn user_request(ctx: &CommandContext<'_>, user_id: &str) -> UserRequest {
    UserRequest {
        user_id: user_id.to_string(),
        auth_key: ctx.admin_key.to_string(),
        app_version: ctx.app_version.map(str::to_string),
    }
}

pub(crate) async fn create_user(
    ctx: &CommandContext<'_>,
    user_id: &str,
) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::POST, "/user", &user_request(ctx, user_id)).await
}

pub(crate) async fn delete_user(
    ctx: &CommandContext<'_>,
    user_id: &str,
) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::DELETE, "/user", &user_request(ctx, user_id)).await
}

pub(crate) async fn reset_user(
    ctx: &CommandContext<'_>,
    user_id: &str,
) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::PUT, "/user", &user_request(ctx, user_id)).await
}

pub(crate) async fn list_users(ctx: &CommandContext<'_>) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::POST, "/users", &ctx.admin_request()).await
}

pub(crate) async fn authenticate_device(
    ctx: &CommandContext<'_>,
    user_id: &str,
    device_id: &Uuid,
) -> anyhow::Result<ServiceResponse> {
    let payload = AuthenticateRequest {
        user_id: user_id.to_string(),
        device_id: device_id.hyphenated().to_string(),
        app_version: ctx.app_version.map(str::to_string),
    };
    send_request(ctx, Method::POST, "/auth", &payload).await
}
