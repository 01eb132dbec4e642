use crate::modules::gateway::client::{CrudResource, HttpClient, Resource};
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges,
};

use super::crud_service::ResourceBacked;

pub struct ProjectResource;

impl Resource for ProjectResource {
    type Item = Project;
    type Create = NewProject;
    type Update = ProjectChanges;
}

/// Projects need nothing beyond plain CRUD.
#[derive(Clone)]
pub struct ProjectService {
    resource: CrudResource<ProjectResource>,
}

impl ProjectService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: CrudResource::new(http, "projects"),
        }
    }
}

impl ResourceBacked for ProjectService {
    type Resource = ProjectResource;

    fn resource(&self) -> &CrudResource<ProjectResource> {
        &self.resource
    }
}
