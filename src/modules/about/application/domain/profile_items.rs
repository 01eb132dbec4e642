use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::dates::{flexible_date, flexible_date_option};
use crate::shared::validation::ValidationErrors;

//
// ──────────────────────────────────────────────────────────
// Skill
// ──────────────────────────────────────────────────────────
//

/// A named skill with a 0–100 proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "SkillInput")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    #[schema(minimum = 0, maximum = 100)]
    pub level: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SkillInput {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    level: i64,
    #[serde(default)]
    category: Option<String>,
}

impl TryFrom<SkillInput> for Skill {
    type Error = String;

    fn try_from(input: SkillInput) -> Result<Self, Self::Error> {
        if input.name.trim().is_empty() {
            return Err("skill name should not be empty".to_string());
        }

        let level = u8::try_from(input.level)
            .ok()
            .filter(|level| *level <= 100)
            .ok_or_else(|| "skill level must be between 0 and 100".to_string())?;

        Ok(Self {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            name: input.name.trim().to_string(),
            level,
            category: non_blank(input.category),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Education
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", try_from = "EducationInput")]
pub struct Education {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field: String,

    #[serde(with = "flexible_date")]
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,

    #[serde(with = "flexible_date_option", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EducationInput {
    #[serde(default)]
    id: Option<Uuid>,
    institution: String,
    degree: String,
    field: String,
    #[serde(with = "flexible_date")]
    start_date: NaiveDate,
    #[serde(default, with = "flexible_date_option")]
    end_date: Option<NaiveDate>,
    #[serde(default)]
    description: Option<String>,
}

impl TryFrom<EducationInput> for Education {
    type Error = String;

    fn try_from(input: EducationInput) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        errors.require_text("education institution", &input.institution);
        errors.require_text("education degree", &input.degree);
        errors.require_text("education field", &input.field);

        if matches!(input.end_date, Some(end) if end < input.start_date) {
            errors.push("education endDate must not be before startDate");
        }

        errors
            .finish(Self {
                id: input.id.unwrap_or_else(Uuid::new_v4),
                institution: input.institution.trim().to_string(),
                degree: input.degree.trim().to_string(),
                field: input.field.trim().to_string(),
                start_date: input.start_date,
                end_date: input.end_date,
                description: non_blank(input.description),
            })
            .map_err(|e| e.to_string())
    }
}

//
// ──────────────────────────────────────────────────────────
// Experience
// ──────────────────────────────────────────────────────────
//

/// How long a position lasted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tenure {
    Ongoing,
    Ended(NaiveDate),
}

impl Tenure {
    pub fn end_date(&self) -> Option<NaiveDate> {
        match self {
            Tenure::Ongoing => None,
            Tenure::Ended(date) => Some(*date),
        }
    }
}

/// A position held. Serialized as [`ExperienceRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ExperienceRecord", into = "ExperienceRecord")]
pub struct Experience {
    pub id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub tenure: Tenure,
    pub description: String,
    pub technologies: Vec<String>,
}

/// Wire shape of an experience entry.
///
/// `current: true` wins over any `endDate`, which is then dropped.
/// `current: false` needs an `endDate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub company: String,
    pub position: String,

    #[serde(with = "flexible_date")]
    #[schema(value_type = String, format = Date)]
    pub start_date: NaiveDate,

    #[serde(default)]
    pub current: bool,

    #[serde(
        default,
        with = "flexible_date_option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schema(value_type = Option<String>, format = Date)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub technologies: Vec<String>,
}

impl TryFrom<ExperienceRecord> for Experience {
    type Error = String;

    fn try_from(record: ExperienceRecord) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::new();
        errors.require_text("experience company", &record.company);
        errors.require_text("experience position", &record.position);

        let tenure = match (record.current, record.end_date) {
            (true, _) => Tenure::Ongoing,
            (false, Some(end)) if end < record.start_date => {
                errors.push("experience endDate must not be before startDate");
                Tenure::Ended(end)
            }
            (false, Some(end)) => Tenure::Ended(end),
            (false, None) => {
                errors.push("experience endDate is required when current is false");
                Tenure::Ongoing
            }
        };

        errors
            .finish(Self {
                id: record.id.unwrap_or_else(Uuid::new_v4),
                company: record.company.trim().to_string(),
                position: record.position.trim().to_string(),
                start_date: record.start_date,
                tenure,
                description: record.description.trim().to_string(),
                technologies: record
                    .technologies
                    .into_iter()
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty())
                    .collect(),
            })
            .map_err(|e| e.to_string())
    }
}

impl From<Experience> for ExperienceRecord {
    fn from(experience: Experience) -> Self {
        Self {
            id: Some(experience.id),
            company: experience.company,
            position: experience.position,
            start_date: experience.start_date,
            current: experience.tenure == Tenure::Ongoing,
            end_date: experience.tenure.end_date(),
            description: experience.description,
            technologies: experience.technologies,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Sections
// ──────────────────────────────────────────────────────────
//

/// The embedded collections an item can be added to or removed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AboutSection {
    Skills,
    Education,
    Experience,
}

impl AboutSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AboutSection::Skills => "skills",
            AboutSection::Education => "education",
            AboutSection::Experience => "experience",
        }
    }
}

impl fmt::Display for AboutSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AboutItem {
    Skill(Skill),
    Education(Education),
    Experience(Experience),
}

impl AboutItem {
    /// Reads a raw JSON body as an item of `section`.
    pub fn parse(section: AboutSection, body: serde_json::Value) -> Result<Self, ValidationErrors> {
        let parsed = match section {
            AboutSection::Skills => serde_json::from_value(body).map(AboutItem::Skill),
            AboutSection::Education => serde_json::from_value(body).map(AboutItem::Education),
            AboutSection::Experience => serde_json::from_value(body).map(AboutItem::Experience),
        };

        parsed.map_err(|e| ValidationErrors::single(e.to_string()))
    }

    pub fn section(&self) -> AboutSection {
        match self {
            AboutItem::Skill(_) => AboutSection::Skills,
            AboutItem::Education(_) => AboutSection::Education,
            AboutItem::Experience(_) => AboutSection::Experience,
        }
    }

    pub fn id(&self) -> Uuid {
        match self {
            AboutItem::Skill(skill) => skill.id,
            AboutItem::Education(education) => education.id,
            AboutItem::Experience(experience) => experience.id,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
