use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::domain::entities::{
    NewProject, Project, ProjectChanges,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectRepository, ProjectRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(&self, data: NewProject) -> Result<Project, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            image_url: Set(data.image_url),
            technologies: Set(to_json(&data.technologies)?),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        model_to_project(result)
    }

    async fn update_project(
        &self,
        project_id: Uuid,
        changes: ProjectChanges,
    ) -> Result<Project, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(title) = changes.title {
            model.title = Set(title);
        }

        if let PatchField::Value(description) = changes.description {
            model.description = Set(description);
        }

        if let PatchField::Value(technologies) = changes.technologies {
            model.technologies = Set(to_json(&technologies)?);
        }

        match changes.image_url {
            PatchField::Unset => {}
            PatchField::Null => model.image_url = Set(None),
            PatchField::Value(url) => model.image_url = Set(Some(url)),
        }

        match changes.github_url {
            PatchField::Unset => {}
            PatchField::Null => model.github_url = Set(None),
            PatchField::Value(url) => model.github_url = Set(Some(url)),
        }

        match changes.live_url {
            PatchField::Unset => {}
            PatchField::Null => model.live_url = Set(None),
            PatchField::Value(url) => model.live_url = Set(Some(url)),
        }

        let has_changes = model.title.is_set()
            || model.description.is_set()
            || model.technologies.is_set()
            || model.image_url.is_set()
            || model.github_url.is_set()
            || model.live_url.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return model_to_project(result);
        }

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        model_to_project(result)
    }

    async fn delete_project(&self, project_id: Uuid) -> Result<Project, ProjectRepositoryError> {
        let existing = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectRepositoryError::NotFound)?;

        let res = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        // Removed concurrently between the read and the delete
        if res.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        model_to_project(existing)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectRepositoryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        technologies: from_json(&model.technologies)?,
        github_url: model.github_url,
        live_url: model.live_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn to_json<T: serde::Serialize>(data: &T) -> Result<serde_json::Value, ProjectRepositoryError> {
    serde_json::to_value(data)
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn from_json<T: serde::de::DeserializeOwned>(
    json: &serde_json::Value,
) -> Result<T, ProjectRepositoryError> {
    serde_json::from_value(json.clone())
        .map_err(|e| ProjectRepositoryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
