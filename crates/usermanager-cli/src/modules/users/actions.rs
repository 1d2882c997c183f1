use tracing::info;

use crate::cli_args::*;
use crate::modules::system::{print_response, CommandContext};
use crate::modules::users::{authenticate_device, create_user, delete_user, list_users, reset_user};

pub(crate) async fn handle_create(
    args: UserIdArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    info!(user_id = %args.user_id, "creating user");
    let response = create_user(ctx, &args.user_id).await?;
    print_response(&response)
}

pub(crate) async fn handle_delete(
    args: UserIdArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    info!(user_id = %args.user_id, "deleting user");
    let response = delete_user(ctx, &args.user_id).await?;
    print_response(&response)
}

pub(crate) async fn handle_reset(
    args: UserIdArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    info!(user_id = %args.user_id, "resetting user device key");
    let response = reset_user(ctx, &args.user_id).await?;
    print_response(&response)
}

pub(crate) async fn handle_list(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let response = list_users(ctx).await?;
    print_response(&response)
}

pub(crate) async fn handle_authenticate(
    args: AuthenticateArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let response = authenticate_device(ctx, &args.user_id, &args.device_id).await?;
    print_response(&response)
}
