use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical data model a library is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Model {
    #[serde(rename = "QI-Core")]
    QiCore,
    #[serde(rename = "QDM v5.6")]
    Qdm56,
}

impl Model {
    /// Every selectable model, in the order the model picker lists them.
    pub const ALL: [Model; 2] = [Model::QiCore, Model::Qdm56];

    /// Wire and display label.
    pub fn label(self) -> &'static str {
        match self {
            Model::QiCore => "QI-Core",
            Model::Qdm56 => "QDM v5.6",
        }
    }

    /// Looks up a model by its label. Returns `None` for unknown or empty labels,
    /// which is how an unselected `<select>` reports itself.
    pub fn from_label(label: &str) -> Option<Model> {
        Model::ALL.into_iter().find(|model| model.label() == label)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A CQL library record as exchanged with the CQL library service.
///
/// `version`, `group_id` and the audit fields are assigned by the server and
/// never edited locally. `id` is absent until the record has been created.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CqlLibrary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub cql_library_name: String,
    #[serde(default)]
    pub model: Option<Model>,
    #[serde(default)]
    pub cql: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub cql_errors: bool,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub experimental: bool,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub last_modified_by: Option<String>,
    #[serde(default)]
    pub last_modified_at: Option<String>,
}

impl CqlLibrary {
    /// Blank record used by the create flows.
    pub fn new_draft() -> Self {
        Self {
            draft: true,
            ..Self::default()
        }
    }

    /// Whether `user` is recorded as the creator of this library.
    pub fn is_owned_by(&self, user: &str) -> bool {
        self.created_by.as_deref() == Some(user)
    }
}
