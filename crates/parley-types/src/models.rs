use serde::{Deserialize, Serialize};

/// A model the server advertises on the models page.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ModelEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl ModelEntry {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Models configured on the server, shared with server functions via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct ModelCatalog(pub Vec<ModelEntry>);

/// Severity of a notification toast.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    #[default]
    Info,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
            NotificationKind::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_kind_serializes_lowercase() {
        let json = serde_json::to_string(&NotificationKind::Warning).unwrap();
        assert_eq!(json, r#""warning""#);
        assert_eq!(NotificationKind::Error.as_str(), "error");
    }

    #[test]
    fn model_entry_description_is_optional() {
        let entry: ModelEntry = serde_json::from_str(r#"{"name":"llama3"}"#).unwrap();
        assert_eq!(entry, ModelEntry::new("llama3", ""));
    }
}
