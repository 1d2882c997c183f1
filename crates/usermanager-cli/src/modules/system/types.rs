use serde::{Deserialize, Deserializer, Serialize};

pub struct CommandContext<'a> {
    pub client: &'a reqwest::Client,
    pub base_url: &'a str,
    pub admin_key: &'a str,
    pub app_version: Option<&'a str>,
}

impl CommandContext<'_> {
    pub(crate) fn admin_request(&self) -> AdminRequest {
        AdminRequest {
            auth_key: self.admin_key.to_string(),
            app_version: self.app_version.map(str::to_string),
        }
    }
}

/// Body for admin endpoints that take no user.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRequest {
    pub auth_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}

/// Generic envelope returned by every endpoint of the service.
#[derive(Deserialize, Default, Debug)]
pub struct ServiceResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub users: Option<Vec<UserEntry>>,
    #[serde(default)]
    pub logs: Option<Vec<AuthLogEntry>>,
}

impl ServiceResponse {
    pub(crate) fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|message| !message.is_empty())
    }

    pub(crate) fn users(&self) -> &[UserEntry] {
        self.users.as_deref().unwrap_or_default()
    }

    pub(crate) fn logs(&self) -> &[AuthLogEntry] {
        self.logs.as_deref().unwrap_or_default()
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AuthLogEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub timestamp: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub device_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub success: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ip: String,
}

/// Entry fields the service leaves as `null` render as empty values.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
