use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::model_to_about;
use crate::modules::about::adapter::outgoing::sea_orm_entity::abouts::{self, Column, Entity};
use crate::modules::about::application::domain::entities::About;
use crate::modules::about::application::ports::outgoing::{
    AboutListFilter, AboutQuery, AboutQueryError,
};
use crate::shared::pagination::{PageRequest, PageResult};

#[derive(Clone)]
pub struct AboutQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn filtered(filter: &AboutListFilter) -> Select<Entity> {
        let mut query = Entity::find();

        if let Some(ref search) = filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(Column::Title).ilike(&pattern))
                    .add(Expr::col(Column::Description).ilike(&pattern)),
            );
        }

        query.order_by_desc(Column::CreatedAt)
    }
}

#[async_trait]
impl AboutQuery for AboutQueryPostgres {
    async fn get_by_id(&self, about_id: Uuid) -> Result<About, AboutQueryError> {
        let model = Entity::find_by_id(about_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutQueryError::NotFound)?;

        to_about(model)
    }

    async fn get_active(&self) -> Result<About, AboutQueryError> {
        let model = Entity::find()
            .filter(Column::Active.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutQueryError::NotFound)?;

        to_about(model)
    }

    async fn list(&self, filter: AboutListFilter) -> Result<Vec<About>, AboutQueryError> {
        Self::filtered(&filter)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_about)
            .collect()
    }

    async fn page(
        &self,
        filter: AboutListFilter,
        page: PageRequest,
    ) -> Result<PageResult<About>, AboutQueryError> {
        let query = Self::filtered(&filter);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let items = query
            .offset(page.offset())
            .limit(page.per_page as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_about)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(PageResult {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }
}

fn to_about(model: abouts::Model) -> Result<About, AboutQueryError> {
    model_to_about(model).map_err(|e| AboutQueryError::SerializationError(e.to_string()))
}

fn map_db_err(e: DbErr) -> AboutQueryError {
    AboutQueryError::DatabaseError(e.to_string())
}
