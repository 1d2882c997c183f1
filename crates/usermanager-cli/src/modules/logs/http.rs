use reqwest::Method;

use crate::modules::logs::ActivityLogRequest;
use crate::modules::system::{send_request, CommandContext, ServiceResponse};

pub(crate) async fn fetch_auth_logs(
    ctx: &CommandContext<'_>,
    user_id: &str,
) -> anyhow::Result<ServiceResponse> {
    let path = format!("/log/auth/{}", urlencoding::encode(user_id));
    send_request(ctx, Method::POST, &path, &ctx.admin_request()).await
}

pub(crate) async fn cleanup_logs(ctx: &CommandContext<'_>) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::POST, "/log/cleanup", &ctx.admin_request()).await
}

pub(crate) async fn clear_logs(ctx: &CommandContext<'_>) -> anyhow::Result<ServiceResponse> {
    send_request(ctx, Method::DELETE, "/log", &ctx.admin_request()).await
}

pub(crate) async fn record_activity(
    ctx: &CommandContext<'_>,
    user_id: &str,
    message: &str,
) -> anyhow::Result<ServiceResponse> {
    let payload = ActivityLogRequest {
        user_id: user_id.to_string(),
        message: message.to_string(),
        app_version: ctx.app_version.map(str::to_string),
    };
    send_request(ctx, Method::POST, "/log", &payload).await
}
