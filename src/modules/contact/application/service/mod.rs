mod advance_contact_status_service;
mod create_contact_service;
mod delete_contact_service;
mod get_contacts_service;
mod get_single_contact_service;
mod update_contact_service;

pub use advance_contact_status_service::AdvanceContactStatusService;
pub use create_contact_service::CreateContactService;
pub use delete_contact_service::DeleteContactService;
pub use get_contacts_service::GetContactsService;
pub use get_single_contact_service::GetSingleContactService;
pub use update_contact_service::UpdateContactService;
