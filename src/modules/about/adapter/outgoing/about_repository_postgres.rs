use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, QuerySelect, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::mapping::{model_to_about, section_json, to_json};
use crate::modules::about::adapter::outgoing::sea_orm_entity::abouts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::about::application::domain::entities::{About, AboutChanges, NewAbout};
use crate::modules::about::application::domain::profile_items::{AboutItem, AboutSection};
use crate::modules::about::application::ports::outgoing::{
    AboutRepository, AboutRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct AboutRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AboutRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Commits when `result` is Ok, rolls back otherwise.
    async fn finish<T>(
        txn: DatabaseTransaction,
        result: Result<T, AboutRepositoryError>,
    ) -> Result<T, AboutRepositoryError> {
        match result {
            Ok(value) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::warn!(error = %rollback_err, "about transaction rollback failed");
                }
                Err(e)
            }
        }
    }

    /// Reads the row and holds its lock until the transaction ends.
    async fn lock_row<C: ConnectionTrait>(
        conn: &C,
        about_id: Uuid,
    ) -> Result<abouts::Model, AboutRepositoryError> {
        Entity::find_by_id(about_id)
            .lock_exclusive()
            .one(conn)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutRepositoryError::NotFound)
    }

    /// Turns off every active profile except `keep`.
    async fn deactivate_others<C: ConnectionTrait>(
        conn: &C,
        keep: Option<Uuid>,
    ) -> Result<(), AboutRepositoryError> {
        let mut update = Entity::update_many()
            .col_expr(Column::Active, Expr::value(false))
            .filter(Column::Active.eq(true));

        if let Some(id) = keep {
            update = update.filter(Column::Id.ne(id));
        }

        update.exec(conn).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn write_row<C: ConnectionTrait>(
        conn: &C,
        about_id: Uuid,
        model: ActiveModel,
    ) -> Result<abouts::Model, AboutRepositoryError> {
        #[cfg(feature = "no_db_triggers")]
        let model = ActiveModel {
            updated_at: Set(Utc::now().fixed_offset()),
            ..model
        };

        Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(about_id))
            .exec_with_returning(conn)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .next()
            .ok_or(AboutRepositoryError::NotFound)
    }

    async fn activate_in(
        txn: &DatabaseTransaction,
        about_id: Uuid,
        mut model: ActiveModel,
    ) -> Result<abouts::Model, AboutRepositoryError> {
        Self::lock_row(txn, about_id).await?;
        Self::deactivate_others(txn, Some(about_id)).await?;

        model.active = Set(true);
        Self::write_row(txn, about_id, model).await
    }

    /// Read-modify-write of one embedded collection under a row lock.
    async fn edit_section<F>(
        &self,
        about_id: Uuid,
        section: AboutSection,
        edit: F,
    ) -> Result<About, AboutRepositoryError>
    where
        F: FnOnce(&mut About) -> Result<(), AboutRepositoryError> + Send,
    {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        let result = async {
            let mut about = model_to_about(Self::lock_row(&txn, about_id).await?)
                .map_err(map_serde_err)?;
            edit(&mut about)?;

            let mut model = <ActiveModel as Default>::default();
            let items = section_json(&about, section).map_err(map_serde_err)?;
            match section {
                AboutSection::Skills => model.skills = Set(items),
                AboutSection::Education => model.education = Set(items),
                AboutSection::Experience => model.experience = Set(items),
            }

            Self::write_row(&txn, about_id, model).await
        }
        .await;

        let saved = Self::finish(txn, result).await?;
        model_to_about(saved).map_err(map_serde_err)
    }
}

#[async_trait]
impl AboutRepository for AboutRepositoryPostgres {
    async fn create_about(&self, data: NewAbout) -> Result<About, AboutRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            avatar: Set(data.avatar),
            active: Set(data.active),
            skills: Set(to_json(&data.skills).map_err(map_serde_err)?),
            education: Set(to_json(&data.education).map_err(map_serde_err)?),
            experience: Set(to_json(&data.experience).map_err(map_serde_err)?),
            social_links: Set(data
                .social_links
                .as_ref()
                .map(to_json)
                .transpose()
                .map_err(map_serde_err)?),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let created = if data.active {
            let txn = self.db.begin().await.map_err(map_db_err)?;
            let result = async {
                Self::deactivate_others(&txn, None).await?;
                model.insert(&txn).await.map_err(map_db_err)
            }
            .await;
            Self::finish(txn, result).await?
        } else {
            model.insert(&*self.db).await.map_err(map_db_err)?
        };

        model_to_about(created).map_err(map_serde_err)
    }

    async fn update_about(
        &self,
        about_id: Uuid,
        changes: AboutChanges,
    ) -> Result<About, AboutRepositoryError> {
        let activates = changes.activates();
        let model = changes_to_model(changes)?;

        let saved = if activates {
            let txn = self.db.begin().await.map_err(map_db_err)?;
            let result = Self::activate_in(&txn, about_id, model).await;
            Self::finish(txn, result).await?
        } else if model.is_changed() {
            Self::write_row(&*self.db, about_id, model).await?
        } else {
            Entity::find_by_id(about_id)
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(AboutRepositoryError::NotFound)?
        };

        model_to_about(saved).map_err(map_serde_err)
    }

    async fn set_active(&self, about_id: Uuid) -> Result<About, AboutRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;
        let result =
            Self::activate_in(&txn, about_id, <ActiveModel as Default>::default()).await;
        let saved = Self::finish(txn, result).await?;

        model_to_about(saved).map_err(map_serde_err)
    }

    async fn add_item(
        &self,
        about_id: Uuid,
        item: AboutItem,
    ) -> Result<About, AboutRepositoryError> {
        let section = item.section();

        self.edit_section(about_id, section, move |about| {
            about.push_item(item);
            Ok(())
        })
        .await
    }

    async fn remove_item(
        &self,
        about_id: Uuid,
        section: AboutSection,
        item_id: Uuid,
    ) -> Result<About, AboutRepositoryError> {
        self.edit_section(about_id, section, move |about| {
            if about.remove_item(section, item_id) {
                Ok(())
            } else {
                Err(AboutRepositoryError::ItemNotFound(section))
            }
        })
        .await
    }

    async fn delete_about(&self, about_id: Uuid) -> Result<About, AboutRepositoryError> {
        let existing = Entity::find_by_id(about_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(AboutRepositoryError::NotFound)?;

        let res = Entity::delete_by_id(about_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(AboutRepositoryError::NotFound);
        }

        model_to_about(existing).map_err(map_serde_err)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn changes_to_model(changes: AboutChanges) -> Result<ActiveModel, AboutRepositoryError> {
    let mut model = <ActiveModel as Default>::default();

    if let PatchField::Value(title) = changes.title {
        model.title = Set(title);
    }

    if let PatchField::Value(description) = changes.description {
        model.description = Set(description);
    }

    match changes.avatar {
        PatchField::Unset => {}
        PatchField::Null => model.avatar = Set(None),
        PatchField::Value(avatar) => model.avatar = Set(Some(avatar)),
    }

    // `true` goes through the activation path
    if changes.active == Some(false) {
        model.active = Set(false);
    }

    if let Some(skills) = changes.skills {
        model.skills = Set(to_json(&skills).map_err(map_serde_err)?);
    }

    if let Some(education) = changes.education {
        model.education = Set(to_json(&education).map_err(map_serde_err)?);
    }

    if let Some(experience) = changes.experience {
        model.experience = Set(to_json(&experience).map_err(map_serde_err)?);
    }

    match changes.social_links {
        PatchField::Unset => {}
        PatchField::Null => model.social_links = Set(None),
        PatchField::Value(links) => {
            model.social_links = Set(Some(to_json(&links).map_err(map_serde_err)?))
        }
    }

    Ok(model)
}

fn map_db_err(e: DbErr) -> AboutRepositoryError {
    AboutRepositoryError::DatabaseError(e.to_string())
}

fn map_serde_err(e: serde_json::Error) -> AboutRepositoryError {
    AboutRepositoryError::SerializationError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
