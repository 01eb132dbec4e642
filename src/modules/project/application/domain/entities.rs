use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::ValidationErrors;

/// A portfolio project as stored and served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
}

impl NewProject {
    /// Trims text, drops blank technologies and blank links.
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("title", &self.title);
        errors.require_text("description", &self.description);

        errors.finish(Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            image_url: clean_link(self.image_url),
            technologies: clean_list(self.technologies),
            github_url: clean_link(self.github_url),
            live_url: clean_link(self.live_url),
        })
    }
}

/// Merge update: unset fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChanges {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub image_url: PatchField<String>,

    /// Replaces the whole list.
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<Vec<String>>)]
    pub technologies: PatchField<Vec<String>>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub github_url: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub live_url: PatchField<String>,
}

impl ProjectChanges {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let title = required_change(&mut errors, "title", self.title);
        let description = required_change(&mut errors, "description", self.description);

        let technologies = match self.technologies {
            PatchField::Null => PatchField::Value(Vec::new()),
            other => other.map(clean_list),
        };

        errors.finish(Self {
            title,
            description,
            image_url: clean_link_change(self.image_url),
            technologies,
            github_url: clean_link_change(self.github_url),
            live_url: clean_link_change(self.live_url),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_unset()
            && self.description.is_unset()
            && self.image_url.is_unset()
            && self.technologies.is_unset()
            && self.github_url.is_unset()
            && self.live_url.is_unset()
    }
}

// ──────────────────────────────────────────────────────────
// Normalization helpers (shared with the other document modules)
// ──────────────────────────────────────────────────────────

pub(crate) fn clean_link(link: Option<String>) -> Option<String> {
    link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}

pub(crate) fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|i| i.trim().to_string())
        .filter(|i| !i.is_empty())
        .collect()
}

/// A blank link in an update clears the stored one.
pub(crate) fn clean_link_change(change: PatchField<String>) -> PatchField<String> {
    match change {
        PatchField::Value(link) if link.trim().is_empty() => PatchField::Null,
        PatchField::Value(link) => PatchField::Value(link.trim().to_string()),
        other => other,
    }
}

/// Required fields may be left out of an update but never cleared.
pub(crate) fn required_change(
    errors: &mut ValidationErrors,
    field: &str,
    change: PatchField<String>,
) -> PatchField<String> {
    match change {
        PatchField::Null => {
            errors.push(format!("{field} should not be empty"));
            PatchField::Null
        }
        PatchField::Value(v) => {
            errors.require_text(field, &v);
            PatchField::Value(v.trim().to_string())
        }
        PatchField::Unset => PatchField::Unset,
    }
}
