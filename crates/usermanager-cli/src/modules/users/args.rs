use clap::Args;
use uuid::Uuid;

#[derive(Args)]
pub struct UserIdArgs {
    #[arg(help = "User identifier")]
    pub user_id: String,
}

#[derive(Args)]
pub struct AuthenticateArgs {
    #[arg(help = "User identifier")]
    pub user_id: String,
    #[arg(help = "Device UUID to bind or verify")]
    pub device_id: Uuid,
}
