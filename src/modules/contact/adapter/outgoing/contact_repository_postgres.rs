use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::contact::adapter::outgoing::sea_orm_entity::contacts::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, ContactStatus, NewContact,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactRepository, ContactRepositoryError,
};
use crate::shared::patch::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_existing(&self, contact_id: Uuid) -> Result<contacts::Model, ContactRepositoryError> {
        Entity::find_by_id(contact_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ContactRepositoryError::NotFound)
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn create_contact(&self, data: NewContact) -> Result<Contact, ContactRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            subject: Set(data.subject),
            message: Set(data.message),
            read: Set(false),
            replied: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_contact(result))
    }

    async fn update_contact(
        &self,
        contact_id: Uuid,
        changes: ContactChanges,
    ) -> Result<Contact, ContactRepositoryError> {
        let requested = changes.requested_status();
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = changes.name {
            model.name = Set(name);
        }

        if let PatchField::Value(email) = changes.email {
            model.email = Set(email);
        }

        if let PatchField::Value(subject) = changes.subject {
            model.subject = Set(subject);
        }

        if let PatchField::Value(message) = changes.message {
            model.message = Set(message);
        }

        match changes.phone {
            PatchField::Unset => {}
            PatchField::Null => model.phone = Set(None),
            PatchField::Value(phone) => model.phone = Set(Some(phone)),
        }

        // Flags are only ever raised, so no read of the current row is needed
        if let Some(status) = requested {
            model.read = Set(status.is_read());
            if status.is_replied() {
                model.replied = Set(true);
            }
        }

        let has_changes = model.name.is_set()
            || model.email.is_set()
            || model.subject.is_set()
            || model.message.is_set()
            || model.phone.is_set()
            || model.read.is_set()
            || model.replied.is_set();

        if !has_changes {
            return self.find_existing(contact_id).await.map(model_to_contact);
        }

        #[cfg(feature = "no_db_triggers")]
        {
            model.updated_at = Set(Utc::now().fixed_offset());
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(contact_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_contact)
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn advance_status(
        &self,
        contact_id: Uuid,
        status: ContactStatus,
    ) -> Result<Contact, ContactRepositoryError> {
        if status == ContactStatus::New {
            return self.find_existing(contact_id).await.map(model_to_contact);
        }

        let mut update = Entity::update_many().col_expr(Column::Read, Expr::value(true));

        if status.is_replied() {
            update = update.col_expr(Column::Replied, Expr::value(true));
        }

        #[cfg(feature = "no_db_triggers")]
        {
            update = update.col_expr(Column::UpdatedAt, Expr::value(Utc::now().fixed_offset()));
        }

        let results = update
            .filter(Column::Id.eq(contact_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(model_to_contact)
            .ok_or(ContactRepositoryError::NotFound)
    }

    async fn delete_contact(&self, contact_id: Uuid) -> Result<Contact, ContactRepositoryError> {
        let existing = self.find_existing(contact_id).await?;

        let res = Entity::delete_by_id(contact_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(ContactRepositoryError::NotFound);
        }

        Ok(model_to_contact(existing))
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(super) fn model_to_contact(model: contacts::Model) -> Contact {
    Contact {
        id: model.id,
        name: model.name,
        email: model.email,
        phone: model.phone,
        subject: model.subject,
        message: model.message,
        read: model.read,
        replied: model.replied,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_db_err(e: DbErr) -> ContactRepositoryError {
    ContactRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
