// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::application::domain::entities::Project;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectQuery, ProjectQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: &ProjectListFilter) -> Select<Entity> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            let search_pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&search_pattern))
                    .add(Expr::col(Column::Description).ilike(&search_pattern)),
            );
        }

        query.order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn get_by_id(&self, project_id: Uuid) -> Result<Project, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        model_to_project(project)
    }

    async fn list(&self, filter: ProjectListFilter) -> Result<Vec<Project>, ProjectQueryError> {
        let projects = Self::filtered(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        projects.into_iter().map(model_to_project).collect()
    }

    async fn page(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Project>, ProjectQueryError> {
        let query = Self::filtered(&filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let projects = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items: Result<Vec<Project>, ProjectQueryError> =
            projects.into_iter().map(model_to_project).collect();

        Ok(PageResult {
            items: items?,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(model: projects::Model) -> Result<Project, ProjectQueryError> {
    Ok(Project {
        id: model.id,
        title: model.title,
        description: model.description,
        image_url: model.image_url,
        technologies: serde_json::from_value(model.technologies)
            .map_err(|e| ProjectQueryError::SerializationError(e.to_string()))?,
        github_url: model.github_url,
        live_url: model.live_url,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::sea_query::Value;
    use sea_orm::{DatabaseBackend, MockDatabase};
    use std::collections::BTreeMap;

    fn mock_project_model(title: &str) -> projects::Model {
        let now = Utc::now().fixed_offset();

        projects::Model {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: "Test description".to_string(),
            image_url: Some("https://cdn.example.com/cover.png".to_string()),
            technologies: serde_json::json!(["Rust", "actix-web"]),
            github_url: None,
            live_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn count_row(total: i64) -> BTreeMap<String, Value> {
        BTreeMap::from([("num_items".to_string(), Value::BigInt(Some(total)))])
    }

    #[tokio::test]
    async fn test_get_by_id_success() {
        let model = mock_project_model("Test Project");
        let id = model.id;

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let project = query.get_by_id(id).await.unwrap();

        assert_eq!(project.id, id);
        assert_eq!(project.technologies.len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ProjectQueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_returns_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                mock_project_model("Newest"),
                mock_project_model("Older"),
            ]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let projects = query
            .list(ProjectListFilter {
                search: Some("rust".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].title, "Newest");
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let projects = query.list(ProjectListFilter::default()).await.unwrap();

        assert!(projects.is_empty());
    }

    #[tokio::test]
    async fn test_page_reports_total_and_position() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(3)]])
            .append_query_results(vec![vec![mock_project_model("Second page")]])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let page = query
            .page(ProjectListFilter::default(), PageRequest::new(Some(2), Some(2)))
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("db down".to_string())])
            .into_connection();

        let query = ProjectQueryPostgres::new(Arc::new(db));
        let result = query.list(ProjectListFilter::default()).await;

        assert!(matches!(result, Err(ProjectQueryError::DatabaseError(_))));
    }
}
