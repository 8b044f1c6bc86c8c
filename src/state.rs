use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{error::AppResult, i18n::Translator, report::ReportRenderer};

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub translator: Arc<Translator>,
    pub reports: Arc<ReportRenderer>,
    pub jwt_secret: Option<Arc<str>>,
}

impl AppState {
    /// Builds the state with the built-in message catalogs and report templates.
    pub fn new(orm: DatabaseConnection, jwt_secret: Option<String>) -> AppResult<Self> {
        Ok(Self {
            orm,
            translator: Arc::new(Translator::new()?),
            reports: Arc::new(ReportRenderer::new()?),
            jwt_secret: jwt_secret.map(Arc::from),
        })
    }
}
