use tracing::info;

use crate::cli_args::*;
use crate::modules::logs::{clear_logs, cleanup_logs, fetch_auth_logs, record_activity};
use crate::modules::system::{print_auth_logs, print_response, CommandContext};

pub(crate) async fn handle_auth_logs(
    args: AuthLogsArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let response = fetch_auth_logs(ctx, &args.user_id).await?;
    print_auth_logs(&response)
}

pub(crate) async fn handle_cleanup_logs(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    info!("requesting log cleanup");
    let response = cleanup_logs(ctx).await?;
    print_response(&response)
}

pub(crate) async fn handle_clear_logs(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    info!("clearing all logs");
    let response = clear_logs(ctx).await?;
    print_response(&response)
}

pub(crate) async fn handle_log_activity(
    args: LogActivityArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let response = record_activity(ctx, &args.user_id, &args.message).await?;
    print_response(&response)
}
