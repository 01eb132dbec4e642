use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::modules::about::application::domain::entities::{About, AboutChanges, NewAbout};
use crate::modules::about::application::domain::profile_items::{
    AboutSection, Education, Experience, Skill,
};
use crate::modules::gateway::client::{
    decode, decode_optional, ClientError, CrudResource, HttpClient, Resource,
};

use super::crud_service::ResourceBacked;

pub struct AboutResource;

impl Resource for AboutResource {
    type Item = About;
    type Create = NewAbout;
    type Update = AboutChanges;
}

#[derive(Clone)]
pub struct AboutService {
    resource: CrudResource<AboutResource>,
}

impl AboutService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: CrudResource::new(http, "about"),
        }
    }

    /// Makes `id` the profile shown on the site.
    pub async fn set_active(&self, id: Uuid) -> Result<About, ClientError> {
        let body = self
            .resource
            .http()
            .patch(&self.resource.path(&format!("{id}/set-active")), &json!({}))
            .await?;
        decode(body)
    }

    /// `None` when no profile is active or the backend is unreachable.
    pub async fn find_active(&self) -> Option<About> {
        match self
            .resource
            .http()
            .get(&self.resource.path("current"), &[])
            .await
        {
            Ok(body) => decode_optional(body, self.resource.endpoint()),
            Err(e) => {
                if !e.is_not_found() {
                    tracing::warn!(error = %e, "active profile lookup failed");
                }
                None
            }
        }
    }

    pub async fn add_skill(&self, id: Uuid, skill: &Skill) -> Result<About, ClientError> {
        self.add_item(id, AboutSection::Skills, skill).await
    }

    pub async fn remove_skill(&self, id: Uuid, skill_id: Uuid) -> Result<About, ClientError> {
        self.remove_item(id, AboutSection::Skills, skill_id).await
    }

    pub async fn add_education(
        &self,
        id: Uuid,
        education: &Education,
    ) -> Result<About, ClientError> {
        self.add_item(id, AboutSection::Education, education).await
    }

    pub async fn remove_education(
        &self,
        id: Uuid,
        education_id: Uuid,
    ) -> Result<About, ClientError> {
        self.remove_item(id, AboutSection::Education, education_id)
            .await
    }

    pub async fn add_experience(
        &self,
        id: Uuid,
        experience: &Experience,
    ) -> Result<About, ClientError> {
        self.add_item(id, AboutSection::Experience, experience).await
    }

    pub async fn remove_experience(
        &self,
        id: Uuid,
        experience_id: Uuid,
    ) -> Result<About, ClientError> {
        self.remove_item(id, AboutSection::Experience, experience_id)
            .await
    }

    async fn add_item<T: Serialize + Sync>(
        &self,
        id: Uuid,
        section: AboutSection,
        item: &T,
    ) -> Result<About, ClientError> {
        let body = self
            .resource
            .http()
            .put(&self.resource.path(&format!("{id}/{section}/add")), item)
            .await?;
        decode(body)
    }

    async fn remove_item(
        &self,
        id: Uuid,
        section: AboutSection,
        item_id: Uuid,
    ) -> Result<About, ClientError> {
        let body = self
            .resource
            .http()
            .delete(&self.resource.path(&format!("{id}/{section}/{item_id}")))
            .await?;
        decode(body)
    }
}

impl ResourceBacked for AboutService {
    type Resource = AboutResource;

    fn resource(&self) -> &CrudResource<AboutResource> {
        &self.resource
    }
}
