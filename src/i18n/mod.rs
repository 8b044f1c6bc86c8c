//! Message catalogs keyed by locale.
//!
//! Templates use `:name` placeholders. A key missing from the requested locale is looked up in
//! the default locale, and finally the key itself is returned.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

const EN_CATALOG: &str = include_str!("lang/en.json");
const ID_CATALOG: &str = include_str!("lang/id.json");

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Matches a language tag such as `id`, `id-ID` or `en_US` on its primary subtag.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "id" | "in" => Some(Locale::Id),
            _ => None,
        }
    }

    /// Picks the supported locale with the highest `q` weight from an `Accept-Language` value.
    pub fn from_accept_language(header: &str) -> Self {
        let mut candidates: Vec<(f32, Locale)> = header
            .split(',')
            .filter_map(|entry| {
                let mut parts = entry.split(';');
                let locale = Locale::parse(parts.next()?)?;
                let weight = parts
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (weight > 0.0).then_some((weight, locale))
            })
            .collect();
        // stable: equal weights keep header order
        candidates.sort_by(|a, b| b.0.total_cmp(&a.0));
        candidates
            .first()
            .map(|(_, locale)| *locale)
            .unwrap_or_default()
    }
}

pub struct Translator {
    catalogs: HashMap<Locale, HashMap<String, String>>,
    fallback: Locale,
}

impl Translator {
    /// Loads the built-in `en` and `id` catalogs.
    pub fn new() -> AppResult<Self> {
        let mut catalogs = HashMap::new();
        for (locale, source) in [(Locale::En, EN_CATALOG), (Locale::Id, ID_CATALOG)] {
            let catalog: HashMap<String, String> = serde_json::from_str(source).map_err(|e| {
                AppError::Internal(anyhow::anyhow!(
                    "invalid {} message catalog: {e}",
                    locale.code()
                ))
            })?;
            catalogs.insert(locale, catalog);
        }
        Ok(Self {
            catalogs,
            fallback: Locale::default(),
        })
    }

    pub fn localize(&self, key: &str, locale: Locale, params: &[(&str, &str)]) -> String {
        let template = self
            .lookup(key, locale)
            .or_else(|| self.lookup(key, self.fallback));
        match template {
            Some(template) => interpolate(template, params),
            None => {
                tracing::debug!(key, locale = locale.code(), "missing translation");
                key.to_string()
            }
        }
    }

    fn lookup(&self, key: &str, locale: Locale) -> Option<&str> {
        self.catalogs
            .get(&locale)
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
    }
}

fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    // one pass over the template; substituted values are never rescanned
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let matched = params
            .iter()
            .filter(|(name, _)| !name.is_empty() && after.starts_with(name))
            .max_by_key(|(name, _)| name.len());
        match matched {
            Some((name, value)) => {
                out.push_str(value);
                rest = &after[name.len()..];
            }
            None => {
                out.push(':');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_prefers_highest_weight() {
        assert_eq!(Locale::from_accept_language("en;q=0.4, id-ID;q=0.9"), Locale::Id);
        assert_eq!(Locale::from_accept_language("id, en"), Locale::Id);
        assert_eq!(Locale::from_accept_language("fr-FR, de"), Locale::En);
        assert_eq!(Locale::from_accept_language(""), Locale::En);
    }

    #[test]
    fn localize_interpolates_and_falls_back() {
        let translator = Translator::new().expect("catalogs");
        assert_eq!(
            translator.localize(
                "validation.max_length",
                Locale::En,
                &[("attribute", "name"), ("max", "255")]
            ),
            "The name may not be greater than 255 characters."
        );
        assert_eq!(
            translator.localize("product.unit.at_least_one", Locale::Id, &[]),
            "Harap isi paling tidak 1 satuan"
        );
        assert_eq!(translator.localize("no.such.key", Locale::Id, &[]), "no.such.key");
    }

    #[test]
    fn interpolate_replaces_longer_names_first() {
        assert_eq!(
            interpolate(":maximum / :max", &[("max", "1"), ("maximum", "2")]),
            "2 / 1"
        );
    }

    #[test]
    fn interpolate_does_not_rescan_substituted_values() {
        assert_eq!(
            interpolate(
                "Printed by :user on :date",
                &[("user", "ops :date"), ("date", "19-10-2026")]
            ),
            "Printed by ops :date on 19-10-2026"
        );
        assert_eq!(interpolate("ratio 1:2 :x", &[("y", "z")]), "ratio 1:2 :x");
    }
}
