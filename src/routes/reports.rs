use axum::{
    Router,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    dto::reports::CustomerReportQuery,
    error::AppResult,
    middleware::{auth::AuthUser, locale::RequestLocale},
    services::report_service,
    state::AppState,
};

const SPREADSHEET_CONTENT_TYPE: &str = "application/vnd.ms-excel";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

pub fn router() -> Router<AppState> {
    Router::new().route("/customers", get(customer_report))
}

#[utoipa::path(
    get,
    path = "/api/reports/customers",
    params(
        ("name" = Option<String>, Query, description = "Customer name filter (substring)"),
        ("profile_name" = Option<String>, Query, description = "Profile name echoed in the report"),
        ("bank_account" = Option<String>, Query, description = "Bank account echoed in the report"),
        ("download" = Option<bool>, Query, description = "Return as an .xls attachment")
    ),
    responses(
        (
            status = 200,
            description = "Customer report table",
            content_type = "text/html",
            body = String
        )
    ),
    security(("bearer_auth" = [])),
    tag = "Reports"
)]
pub async fn customer_report(
    State(state): State<AppState>,
    user: AuthUser,
    RequestLocale(locale): RequestLocale,
    Query(query): Query<CustomerReportQuery>,
) -> AppResult<Response> {
    let download = query.download;
    let report = report_service::customer_report(&state, &user, locale, query).await?;

    if download {
        let disposition = format!("attachment; filename=\"{}\"", report.filename);
        Ok((
            [
                (header::CONTENT_TYPE, SPREADSHEET_CONTENT_TYPE.to_string()),
                (header::CONTENT_DISPOSITION, disposition),
            ],
            report.body,
        )
            .into_response())
    } else {
        Ok(([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], report.body).into_response())
    }
}
