use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

/// Ordered value/label pairs for populating a select input.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
#[serde(transparent)]
pub struct Dropdown {
    #[schema(value_type = Vec<DropdownOption>)]
    pub options: Vec<DropdownOption>,
}

impl Dropdown {
    pub fn from_pairs<I, V, L>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (V, L)>,
        V: ToString,
        L: Into<String>,
    {
        Self {
            options: pairs
                .into_iter()
                .map(|(value, label)| DropdownOption {
                    value: value.to_string(),
                    label: label.into(),
                })
                .collect(),
        }
    }

    pub fn label(&self, value: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.value == value)
            .map(|o| o.label.as_str())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.label(value).is_some()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
