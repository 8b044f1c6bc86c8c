use std::collections::BTreeMap;

use serde::Serialize;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::{
    error::AppError,
    i18n::{Locale, Translator},
};

/// Field key to localized messages, in the shape a form re-display expects.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Moves messages to the key the client submitted the field under.
    pub fn rename(&mut self, from: &str, to: &str) {
        if let Some(messages) = self.0.remove(from) {
            self.0.entry(to.to_string()).or_default().extend(messages);
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Flattens `validator` output; nested lines become `units.0.conversion_value`.
    pub fn from_validator(
        errors: &ValidationErrors,
        translator: &Translator,
        locale: Locale,
    ) -> Self {
        let mut out = Self::default();
        collect(&mut out, "", errors, translator, locale);
        out
    }

    /// The 422 rejection carrying these errors and the submitted input.
    pub fn into_error(
        self,
        input: serde_json::Value,
        translator: &Translator,
        locale: Locale,
    ) -> AppError {
        AppError::Validation {
            message: translator.localize("validation.failed", locale, &[]),
            errors: self,
            input,
        }
    }
}

fn collect(
    out: &mut FormErrors,
    prefix: &str,
    errors: &ValidationErrors,
    translator: &Translator,
    locale: Locale,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(list) => {
                for err in list {
                    out.add(path.clone(), describe(field, err, translator, locale));
                }
            }
            ValidationErrorsKind::Struct(inner) => collect(out, &path, inner, translator, locale),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect(out, &format!("{path}.{index}"), inner, translator, locale);
                }
            }
        }
    }
}

fn describe(
    field: &str,
    err: &ValidationError,
    translator: &Translator,
    locale: Locale,
) -> String {
    let attribute = field.replace('_', " ");
    let param = |name: &str| err.params.get(name).map(|v| v.to_string());
    let required = || {
        translator.localize("validation.required", locale, &[("attribute", attribute.as_str())])
    };

    match err.code.as_ref() {
        "required" => required(),
        "length" => {
            let too_short = match (err.params.get("min"), err.params.get("value")) {
                (Some(min), Some(value)) => {
                    let len = value.as_str().map(|s| s.chars().count()).unwrap_or_default();
                    min.as_u64().is_some_and(|min| (len as u64) < min)
                }
                _ => false,
            };
            if too_short {
                required()
            } else {
                let max = param("max").unwrap_or_default();
                translator.localize(
                    "validation.max_length",
                    locale,
                    &[("attribute", attribute.as_str()), ("max", max.as_str())],
                )
            }
        }
        "range" => {
            if let Some(min) = param("exclusive_min") {
                translator.localize(
                    "validation.greater_than",
                    locale,
                    &[("attribute", attribute.as_str()), ("min", min.as_str())],
                )
            } else {
                let min = param("min").unwrap_or_default();
                translator.localize(
                    "validation.min",
                    locale,
                    &[("attribute", attribute.as_str()), ("min", min.as_str())],
                )
            }
        }
        _ => translator.localize(
            "validation.invalid",
            locale,
            &[("attribute", attribute.as_str())],
        ),
    }
}
