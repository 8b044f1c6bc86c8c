use std::collections::HashMap;

use serde::Serialize;

use crate::{
    dto::lookups::Dropdown,
    entity::customers::Model as CustomerModel,
    error::AppResult,
    i18n::{Locale, Translator},
    report::{CUSTOMER_REPORT, ReportRenderer},
};

const HEADER_KEYS: [&str; 12] = [
    "store",
    "sign_code",
    "name",
    "address",
    "city",
    "phone_number",
    "fax_num",
    "tax_id",
    "payment_due_day",
    "price_level",
    "status",
    "remarks",
];

/// Filter values the report was requested with; echoed back in the document.
#[derive(Debug, Clone, Default)]
pub struct CustomerReportParameters {
    pub customer_name: Option<String>,
    pub profile_name: Option<String>,
    pub bank_account: Option<String>,
}

impl CustomerReportParameters {
    pub fn any(&self) -> bool {
        [&self.customer_name, &self.profile_name, &self.bank_account]
            .into_iter()
            .any(|v| non_empty(v).is_some())
    }
}

/// A customer with its store and price level names already resolved.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub customer: CustomerModel,
    pub store_name: Option<String>,
    pub price_level_name: Option<String>,
}

impl CustomerRecord {
    pub fn resolve(
        customer: CustomerModel,
        stores: &HashMap<i32, String>,
        price_levels: &HashMap<i32, String>,
    ) -> Self {
        let store_name = stores.get(&customer.store_id).cloned();
        let price_level_name = customer
            .price_level_id
            .and_then(|id| price_levels.get(&id).cloned());
        Self {
            customer,
            store_name,
            price_level_name,
        }
    }
}

pub struct CustomerReport<'a> {
    pub customers: &'a [CustomerRecord],
    pub parameters: &'a CustomerReportParameters,
    pub show_parameter: bool,
    pub statuses: &'a Dropdown,
    pub current_user: &'a str,
    pub report_date: &'a str,
    pub locale: Locale,
}

#[derive(Debug, Serialize)]
struct ParameterRow {
    label: String,
    value: String,
}

#[derive(Debug, Serialize)]
struct DataRow<'a> {
    store: &'a str,
    sign_code: &'a str,
    name: &'a str,
    address: &'a str,
    city: &'a str,
    phone_number: &'a str,
    fax_num: &'a str,
    tax_id: &'a str,
    payment_due_day: i32,
    price_level: &'a str,
    status: &'a str,
    remarks: &'a str,
}

#[derive(Debug, Serialize)]
struct CustomerReportView<'a> {
    title: String,
    column_count: usize,
    parameters: Vec<ParameterRow>,
    headers: Vec<String>,
    rows: Vec<DataRow<'a>>,
    footer: String,
}

impl CustomerReport<'_> {
    pub fn render(&self, renderer: &ReportRenderer, translator: &Translator) -> AppResult<String> {
        let view = self.view(translator);
        renderer.render(CUSTOMER_REPORT, &view)
    }

    fn view(&self, translator: &Translator) -> CustomerReportView<'_> {
        let t = |key: &str| {
            translator.localize(&format!("report.customer.{key}"), self.locale, &[])
        };

        let mut parameters = Vec::new();
        if self.show_parameter {
            let p = self.parameters;
            for (key, value) in [
                ("name", &p.customer_name),
                ("profile_name", &p.profile_name),
                ("bank_account", &p.bank_account),
            ] {
                if let Some(value) = non_empty(value) {
                    parameters.push(ParameterRow {
                        label: t(&format!("parameter.{key}")),
                        value: value.to_string(),
                    });
                }
            }
        }

        let headers = HEADER_KEYS
            .iter()
            .map(|key| t(&format!("header.{key}")))
            .collect();

        let rows = self
            .customers
            .iter()
            .map(|record| {
                let c = &record.customer;
                DataRow {
                    store: record.store_name.as_deref().unwrap_or_default(),
                    sign_code: c.sign_code.as_deref().unwrap_or_default(),
                    name: &c.name,
                    address: c.address.as_deref().unwrap_or_default(),
                    city: c.city.as_deref().unwrap_or_default(),
                    phone_number: c.phone_number.as_deref().unwrap_or_default(),
                    fax_num: c.fax_num.as_deref().unwrap_or_default(),
                    tax_id: c.tax_id.as_deref().unwrap_or_default(),
                    payment_due_day: c.payment_due_day,
                    price_level: record.price_level_name.as_deref().unwrap_or_default(),
                    status: self.statuses.label(&c.status).unwrap_or(&c.status),
                    remarks: c.remarks.as_deref().unwrap_or_default(),
                }
            })
            .collect();

        let footer = translator.localize(
            "report.customer.footer",
            self.locale,
            &[("user", self.current_user), ("date", self.report_date)],
        );

        CustomerReportView {
            title: t("report_name"),
            column_count: HEADER_KEYS.len(),
            parameters,
            headers,
            rows,
            footer,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
