use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::patch::PatchField;
use crate::shared::validation::ValidationErrors;

/// Where a message is in the inbox workflow.
///
/// Ordered: a contact only ever moves forward (`New < Read < Replied`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    New,
    Read,
    Replied,
}

impl ContactStatus {
    pub fn from_flags(read: bool, replied: bool) -> Self {
        if replied {
            ContactStatus::Replied
        } else if read {
            ContactStatus::Read
        } else {
            ContactStatus::New
        }
    }

    /// Moves forward to `target`, never back.
    pub fn advance_to(self, target: ContactStatus) -> Self {
        self.max(target)
    }

    pub fn is_read(self) -> bool {
        self >= ContactStatus::Read
    }

    pub fn is_replied(self) -> bool {
        self == ContactStatus::Replied
    }
}

/// A message left through the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub read: bool,
    pub replied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    pub fn status(&self) -> ContactStatus {
        ContactStatus::from_flags(self.read, self.replied)
    }

    pub fn set_status(&mut self, status: ContactStatus) {
        self.read = status.is_read();
        self.replied = status.is_replied();
    }
}

pub const NAME_LEN: (usize, usize) = (2, 100);
pub const SUBJECT_LEN: (usize, usize) = (2, 100);
pub const MESSAGE_LEN: (usize, usize) = (10, 2000);
pub const PHONE_MAX_LEN: usize = 50;

/// Contact form submission. New contacts always start unread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl NewContact {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_length("name", &self.name, NAME_LEN.0, NAME_LEN.1);
        require_email(&mut errors, &self.email);
        errors.require_length("subject", &self.subject, SUBJECT_LEN.0, SUBJECT_LEN.1);
        errors.require_length("message", &self.message, MESSAGE_LEN.0, MESSAGE_LEN.1);
        if let Some(ref phone) = self.phone {
            require_phone(&mut errors, phone);
        }

        errors.finish(Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

/// Merge update of a contact.
///
/// `read` / `replied` can only raise the status: `false` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactChanges {
    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub phone: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub subject: PatchField<String>,

    #[serde(default, skip_serializing_if = "PatchField::is_unset")]
    #[schema(value_type = Option<String>)]
    pub message: PatchField<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replied: Option<bool>,
}

impl ContactChanges {
    pub fn validated(self) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = bounded_change(&mut errors, "name", self.name, NAME_LEN);
        let subject = bounded_change(&mut errors, "subject", self.subject, SUBJECT_LEN);
        let message = bounded_change(&mut errors, "message", self.message, MESSAGE_LEN);

        let email = match self.email {
            PatchField::Null => {
                errors.push("email should not be empty");
                PatchField::Null
            }
            PatchField::Value(email) => {
                require_email(&mut errors, &email);
                PatchField::Value(email.trim().to_string())
            }
            PatchField::Unset => PatchField::Unset,
        };

        let phone = match self.phone {
            PatchField::Value(phone) if phone.trim().is_empty() => PatchField::Null,
            PatchField::Value(phone) => {
                require_phone(&mut errors, &phone);
                PatchField::Value(phone.trim().to_string())
            }
            other => other,
        };

        errors.finish(Self {
            name,
            email,
            phone,
            subject,
            message,
            read: self.read,
            replied: self.replied,
        })
    }

    /// The lowest status the contact must end up with after this update.
    pub fn requested_status(&self) -> Option<ContactStatus> {
        if self.replied == Some(true) {
            Some(ContactStatus::Replied)
        } else if self.read == Some(true) {
            Some(ContactStatus::Read)
        } else {
            None
        }
    }

    pub fn has_field_changes(&self) -> bool {
        !(self.name.is_unset()
            && self.email.is_unset()
            && self.phone.is_unset()
            && self.subject.is_unset()
            && self.message.is_unset())
    }
}

fn require_email(errors: &mut ValidationErrors, email: &str) {
    if !EmailAddress::is_valid(email.trim()) {
        errors.push("email must be a valid email address");
    }
}

fn require_phone(errors: &mut ValidationErrors, phone: &str) {
    if phone.trim().chars().count() > PHONE_MAX_LEN {
        errors.push(format!("phone must be at most {PHONE_MAX_LEN} characters"));
    }
}

fn bounded_change(
    errors: &mut ValidationErrors,
    field: &str,
    change: PatchField<String>,
    (min, max): (usize, usize),
) -> PatchField<String> {
    match change {
        PatchField::Null => {
            errors.push(format!("{field} should not be empty"));
            PatchField::Null
        }
        PatchField::Value(value) => {
            errors.require_length(field, &value, min, max);
            PatchField::Value(value.trim().to_string())
        }
        PatchField::Unset => PatchField::Unset,
    }
}
