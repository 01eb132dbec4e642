use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::modules::contact::application::domain::entities::{
    Contact, ContactChanges, NewContact,
};
use crate::modules::gateway::client::{decode, ClientError, CrudResource, HttpClient, Resource};

use super::crud_service::ResourceBacked;

pub struct ContactResource;

impl Resource for ContactResource {
    type Item = Contact;
    type Create = NewContact;
    type Update = ContactChanges;
}

#[derive(Clone)]
pub struct ContactService {
    resource: CrudResource<ContactResource>,
}

impl ContactService {
    pub fn new(http: HttpClient) -> Self {
        Self {
            resource: CrudResource::new(http, "contact"),
        }
    }

    /// Public contact form submission.
    pub async fn submit_contact_form(&self, form: &NewContact) -> Result<Contact, ClientError> {
        match self.resource.create(form).await {
            Ok(contact) => {
                info!(contact_id = %contact.id, "contact form submitted");
                Ok(contact)
            }
            Err(e) => {
                warn!(error = %e, upstream = ?e.upstream_body(), "contact form submission failed");
                Err(e)
            }
        }
    }

    /// Unread messages, newest first.
    pub async fn get_unread_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let body = self
            .resource
            .http()
            .get(&self.resource.path("unread"), &[])
            .await?;
        decode(body)
    }

    pub async fn mark_as_read(&self, id: Uuid) -> Result<Contact, ClientError> {
        self.mark(id, "read").await
    }

    /// Also marks the message read.
    pub async fn mark_as_replied(&self, id: Uuid) -> Result<Contact, ClientError> {
        self.mark(id, "replied").await
    }

    async fn mark(&self, id: Uuid, action: &str) -> Result<Contact, ClientError> {
        let body = self
            .resource
            .http()
            .patch(&self.resource.path(&format!("{id}/{action}")), &json!({}))
            .await?;
        decode(body)
    }
}

impl ResourceBacked for ContactService {
    type Resource = ContactResource;

    fn resource(&self) -> &CrudResource<ContactResource> {
        &self.resource
    }
}
