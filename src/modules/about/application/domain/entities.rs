use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::profile_items::{
    AboutItem, AboutSection, Education, Experience, ExperienceRecord, Skill,
};
use crate::shared::patch::PatchField;
use crate::shared::validation::ValidationErrors;

/// The owner's profile shown on the "about" page. Only one is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub avatar: Option<String>,
    pub active: bool,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    #[schema(value_type = Vec<ExperienceRecord>)]
    pub experience: Vec<Experience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl About {
    /// Appends `item`, replacing an entry with the same id.
    pub fn push_item(&mut self, item: AboutItem) {
        match item {
            AboutItem::Skill(skill) => upsert(&mut self.skills, skill, |s| s.id),
            AboutItem::Education(education) => upsert(&mut self.education, education, |e| e.id),
            AboutItem::Experience(experience) => {
                upsert(&mut self.experience, experience, |e| e.id)
            }
        }
    }

    /// Returns `false` when no entry of `section` has `item_id`.
    pub fn remove_item(&mut self, section: AboutSection, item_id: Uuid) -> bool {
        match section {
            AboutSection::Skills => remove_by_id(&mut self.skills, item_id, |s| s.id),
            AboutSection::Education => remove_by_id(&mut self.education, item_id, |e| e.id),
            AboutSection::Experience => remove_by_id(&mut self.experience, item_id, |e| e.id),
        }
    }
}

fn upsert<T>(items: &mut Vec<T>, item: T, id: impl Fn(&T) -> Uuid) {
    match items.iter().position(|existing| id(existing) == id(&item)) {
        Some(index) => items[index] = item,
        None => items.push(item),
    }
}

fn remove_by_id<T>(items: &mut Vec<T>, item_id: Uuid, id: impl Fn(&T) -> Uuid) -> bool {
    let before = items.len();
    items.retain(|item| id(item) != item_id);
    items.len() != before
}

/// Profile links. Blank links are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl SocialLinks {
    /// `None` when no link is left after dropping blank ones.
    pub fn cleaned(self) -> Option<Self> {
        let links = Self {
            github: clean(self.github),
            linkedin: clean(self.linkedin),
            twitter: clean(self.twitter),
            website: clean(self.website),
            instagram: clean(self.instagram),
        };

        if links == Self::default() {
            None
        } else {
            Some(links)
        }
    }
}

fn clean(link: Option<String>) -> Option<String> {
    link.map(|l| l.trim().to_string()).filter(|l| !l.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAbout {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Activating on create deactivates the current profile.
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    #[schema(value_type = Vec<ExperienceRecord>)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub social_links: Option<SocialLinks>,
}

impl NewAbout {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("title", &self.title);
        errors.require_text("description", &self.description);

        errors.finish(Self {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            avatar: clean(self.avatar),
            social_links: self.social_links.and_then(SocialLinks::cleaned),
            ..self
        })
    }
}

/// Merge update. Collections, when present, replace the stored ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AboutChanges {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub title: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub avatar: PatchField<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<Skill>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Vec<Education>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Vec<ExperienceRecord>>)]
    pub experience: Option<Vec<Experience>>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<SocialLinks>)]
    pub social_links: PatchField<SocialLinks>,
}

impl AboutChanges {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = required_text_change(&mut errors, "title", self.title);
        let description = required_text_change(&mut errors, "description", self.description);

        let avatar = match self.avatar {
            PatchField::Value(avatar) if avatar.trim().is_empty() => PatchField::Null,
            other => other.map(|a| a.trim().to_string()),
        };

        // A links object left empty after cleaning clears the stored links
        let social_links = match self.social_links {
            PatchField::Value(links) => match links.cleaned() {
                Some(links) => PatchField::Value(links),
                None => PatchField::Null,
            },
            other => other,
        };

        errors.finish(Self {
            title,
            description,
            avatar,
            social_links,
            ..self
        })
    }

    /// `true` when this update turns the profile on.
    pub fn activates(&self) -> bool {
        self.active == Some(true)
    }
}

fn required_text_change(
    errors: &mut ValidationErrors,
    field: &str,
    change: PatchField<String>,
) -> PatchField<String> {
    match change {
        PatchField::Null => {
            errors.push(format!("{field} should not be empty"));
            PatchField::Null
        }
        PatchField::Value(value) => {
            errors.require_text(field, &value);
            PatchField::Value(value.trim().to_string())
        }
        PatchField::Unset => PatchField::Unset,
    }
}
