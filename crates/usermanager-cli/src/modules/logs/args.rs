use clap::Args;

#[derive(Args)]
pub struct AuthLogsArgs {
    #[arg(help = "User whose authentication attempts to show")]
    pub user_id: String,
}

#[derive(Args)]
pub struct LogActivityArgs {
    #[arg(help = "User the activity belongs to")]
    pub user_id: String,
    #[arg(help = "Free-form activity message")]
    pub message: String,
}
