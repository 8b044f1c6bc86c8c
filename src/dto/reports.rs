use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CustomerReportQuery {
    pub name: Option<String>,
    pub profile_name: Option<String>,
    pub bank_account: Option<String>,
    #[serde(default)]
    pub download: bool,
}
