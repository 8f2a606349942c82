//! Template records.
//!
//! A [`TemplateDescription`] is what a repository index publishes; a
//! [`Template`] is what templist shows to the user. Conversion is a plain
//! field rename.

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::{Result, TemplistError};

/// A template as advertised by a repository index.
///
/// Absent fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemplateDescription {
    /// Name shown to users.
    pub display_name: String,
    /// What the template sets up.
    pub description: String,
    /// Primary language of the template.
    pub language: String,
    /// Where the template source lives.
    pub location: String,
    /// Kind of project the template produces.
    pub project_type: String,
}

/// A normalized template record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub label: String,
    pub description: String,
    pub language: String,
    pub url: String,
    pub project_type: String,
}

impl From<TemplateDescription> for Template {
    fn from(desc: TemplateDescription) -> Self {
        Self {
            label: desc.display_name,
            description: desc.description,
            language: desc.language,
            url: desc.location,
            project_type: desc.project_type,
        }
    }
}

impl Template {
    /// Render as tab-indented JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        String::from_utf8(buf).map_err(|e| TemplistError::Other(e.into()))
    }
}
