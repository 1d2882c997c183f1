use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::logs::args::*;
pub use crate::modules::users::args::*;

#[derive(Parser)]
#[command(name = "usermanager")]
#[command(about = "Admin client for the user-management service")]
pub struct Cli {
    #[arg(long, env = "BASE_URL", hide_env_values = true)]
    pub base_url: Option<String>,
    #[arg(long, env = "ADMIN_KEY", hide_env_values = true)]
    pub admin_key: Option<String>,
    #[arg(long, env = "USERMANAGER_APP_VERSION")]
    pub app_version: Option<String>,
    #[arg(
        long,
        env = "USERMANAGER_TIMEOUT_SECS",
        default_value_t = 30,
        help = "Request timeout in seconds"
    )]
    pub timeout: u64,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Create a new user")]
    Create(UserIdArgs),
    #[command(about = "Delete a user")]
    Delete(UserIdArgs),
    #[command(about = "Reset user key")]
    Reset(UserIdArgs),
    #[command(about = "List all users")]
    List,
    #[command(about = "Get auth logs for a user")]
    AuthLogs(AuthLogsArgs),
    #[command(about = "Ask the service to prune expired logs")]
    CleanupLogs,
    #[command(about = "Delete all stored logs")]
    ClearLogs,
    #[command(about = "Authenticate a device for a user")]
    Authenticate(AuthenticateArgs),
    #[command(about = "Record an activity log entry")]
    LogActivity(LogActivityArgs),
}
