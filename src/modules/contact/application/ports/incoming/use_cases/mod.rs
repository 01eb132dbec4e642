mod advance_contact_status;
mod create_contact;
mod delete_contact;
mod get_contacts;
mod get_single_contact;
mod update_contact;

pub use advance_contact_status::{AdvanceContactStatusError, AdvanceContactStatusUseCase};
pub use create_contact::{CreateContactError, CreateContactUseCase};
pub use delete_contact::{DeleteContactError, DeleteContactUseCase};
pub use get_contacts::{GetContactsError, GetContactsUseCase};
pub use get_single_contact::{GetSingleContactError, GetSingleContactUseCase};
pub use update_contact::{UpdateContactError, UpdateContactUseCase};
