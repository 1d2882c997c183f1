use crate::cli_args::*;
use crate::modules::logs::{
    handle_auth_logs, handle_cleanup_logs, handle_clear_logs, handle_log_activity,
};
use crate::modules::system::CommandContext;
use crate::modules::users::{
    handle_authenticate, handle_create, handle_delete, handle_list, handle_reset,
};

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Create(args) => handle_create(args, ctx).await?,
        Command::Delete(args) => handle_delete(args, ctx).await?,
        Command::Reset(args) => handle_reset(args, ctx).await?,
        Command::List => handle_list(ctx).await?,
        Command::AuthLogs(args) => handle_auth_logs(args, ctx).await?,
        Command::CleanupLogs => handle_cleanup_logs(ctx).await?,
        Command::ClearLogs => handle_clear_logs(ctx).await?,
        Command::Authenticate(args) => handle_authenticate(args, ctx).await?,
        Command::LogActivity(args) => handle_log_activity(args, ctx).await?,
    }

    Ok(())
}
