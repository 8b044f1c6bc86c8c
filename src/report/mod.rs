//! Tabular report documents meant to be opened as spreadsheets.
//!
//! Templates are compiled once at startup; each report module turns its query result into a
//! flat view model and hands it to [`ReportRenderer::render`].

pub mod customer;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::{AppError, AppResult};

pub const CUSTOMER_REPORT: &str = "customer_report";

const CUSTOMER_REPORT_TEMPLATE: &str = include_str!("templates/customer_report.hbs");

pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl ReportRenderer {
    pub fn new() -> AppResult<Self> {
        let mut handlebars = Handlebars::new();
        handlebars.set_strict_mode(false);
        handlebars
            .register_template_string(CUSTOMER_REPORT, CUSTOMER_REPORT_TEMPLATE)
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!(
                    "Failed to register {CUSTOMER_REPORT}: {e}"
                ))
            })?;

        Ok(Self { handlebars })
    }

    pub fn render<T: Serialize>(&self, name: &str, view: &T) -> AppResult<String> {
        self.handlebars
            .render(name, view)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to render {name}: {e}")))
    }
}
