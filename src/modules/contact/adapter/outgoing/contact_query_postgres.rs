use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::contact_repository_postgres::model_to_contact;
use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{Column, Entity};
use crate::modules::contact::application::domain::entities::Contact;
use crate::modules::contact::application::ports::outgoing::{
    ContactListFilter, ContactQuery, ContactQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct ContactQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: &ContactListFilter) -> Select<Entity> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Name).ilike(&pattern))
                    .add(Expr::col(Column::Email).ilike(&pattern))
                    .add(Expr::col(Column::Subject).ilike(&pattern)),
            );
        }

        if let Some(read) = filter.read {
            query = query.filter(Column::Read.eq(read));
        }

        if let Some(replied) = filter.replied {
            query = query.filter(Column::Replied.eq(replied));
        }

        query.order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl ContactQuery for ContactQueryPostgres {
    async fn get_by_id(&self, contact_id: Uuid) -> Result<Contact, ContactQueryError> {
        Entity::find_by_id(contact_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_contact)
            .ok_or(ContactQueryError::NotFound)
    }

    async fn list(&self, filter: ContactListFilter) -> Result<Vec<Contact>, ContactQueryError> {
        let contacts = Self::filtered(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(contacts.into_iter().map(model_to_contact).collect())
    }

    async fn page(
        &self,
        filter: ContactListFilter,
        page: PageRequest,
    ) -> Result<PageResult<Contact>, ContactQueryError> {
        let query = Self::filtered(&filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let contacts = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(PageResult {
            items: contacts.into_iter().map(model_to_contact).collect(),
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }
}

fn map_db_err(e: DbErr) -> ContactQueryError {
    ContactQueryError::DatabaseError(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, Value};
    use std::collections::BTreeMap;

    use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts;

    fn contact_model(name: &str, read: bool, age_minutes: i64) -> contacts::Model {
        let at = (Utc::now() - Duration::minutes(age_minutes)).fixed_offset();

        contacts::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            subject: "Hello there".to_string(),
            message: "I would like to talk about a project.".to_string(),
            read,
            replied: false,
            created_at: at,
            updated_at: at,
        }
    }

    #[tokio::test]
    async fn test_get_by_id_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<contacts::Model>::new()])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));
        let result = query.get_by_id(Uuid::new_v4()).await;

        assert!(matches!(result, Err(ContactQueryError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_preserves_database_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                contact_model("Newest", false, 1),
                contact_model("Older", false, 30),
            ]])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));
        let contacts = query.list(ContactListFilter::unread()).await.unwrap();

        assert_eq!(contacts.len(), 2);
        assert_eq!(contacts[0].name, "Newest");
    }

    #[tokio::test]
    async fn test_page_reports_total() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "num_items".to_string(),
                Value::BigInt(Some(7)),
            )])]])
            .append_query_results(vec![vec![contact_model("Ana", true, 5)]])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));
        let page = query
            .page(
                ContactListFilter {
                    search: Some("ana".to_string()),
                    ..Default::default()
                },
                PageRequest::new(Some(2), Some(1)),
            )
            .await
            .unwrap();

        assert_eq!(page.total, 7);
        assert_eq!(page.page, 2);
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("timeout".to_string())])
            .into_connection();

        let query = ContactQueryPostgres::new(Arc::new(db));
        let result = query.list(ContactListFilter::default()).await;

        assert!(matches!(result, Err(ContactQueryError::DatabaseError(_))));
    }
}
