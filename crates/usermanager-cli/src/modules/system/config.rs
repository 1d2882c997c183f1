use std::time::Duration;

use crate::cli_args::Cli;

pub struct Settings {
    pub base_url: String,
    pub admin_key: String,
    pub app_version: Option<String>,
    pub timeout: Duration,
}

/// Resolves the values every command needs. Flags win over the environment,
/// which already includes anything loaded from `.env`.
pub(crate) fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let base_url = non_empty(cli.base_url.as_deref());
    let admin_key = non_empty(cli.admin_key.as_deref());
    let (Some(base_url), Some(admin_key)) = (base_url, admin_key) else {
        anyhow::bail!("BASE_URL and ADMIN_KEY must be set");
    };
    if cli.timeout == 0 {
        anyhow::bail!("timeout must be at least one second");
    }

    Ok(Settings {
        base_url: base_url.trim().trim_end_matches('/').to_string(),
        admin_key: admin_key.to_string(),
        app_version: non_empty(cli.app_version.as_deref()).map(str::to_string),
        timeout: Duration::from_secs(cli.timeout),
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
