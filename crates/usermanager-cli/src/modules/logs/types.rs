use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityLogRequest {
    pub user_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
}
