use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::sea_orm_entity::abouts;
use crate::modules::about::application::domain::entities::{About, SocialLinks};
use crate::modules::about::application::domain::profile_items::AboutSection;

/// Rebuilds the profile from a row. Fails when a JSONB column no longer
/// matches the item shapes.
pub(super) fn model_to_about(model: abouts::Model) -> Result<About, serde_json::Error> {
    let social_links = model
        .social_links
        .map(from_json::<SocialLinks>)
        .transpose()?
        .and_then(SocialLinks::cleaned);

    Ok(About {
        id: model.id,
        title: model.title,
        description: model.description,
        avatar: model.avatar,
        active: model.active,
        skills: from_json(model.skills)?,
        education: from_json(model.education)?,
        experience: from_json(model.experience)?,
        social_links,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

/// The JSONB column holding `section`, as stored for `about`.
pub(super) fn section_json(about: &About, section: AboutSection) -> Result<Value, serde_json::Error> {
    match section {
        AboutSection::Skills => to_json(&about.skills),
        AboutSection::Education => to_json(&about.education),
        AboutSection::Experience => to_json(&about.experience),
    }
}

pub(super) fn to_json<T: Serialize>(data: &T) -> Result<Value, serde_json::Error> {
    serde_json::to_value(data)
}

fn from_json<T: DeserializeOwned>(json: Value) -> Result<T, serde_json::Error> {
    serde_json::from_value(json)
}
