mod create_contact;
mod delete_contact;
mod get_contacts;
mod get_single_contact;
mod mark_contact;
mod update_contact;

pub use create_contact::*;
pub use delete_contact::*;
pub use get_contacts::*;
pub use get_single_contact::*;
pub use mark_contact::*;
pub use update_contact::*;
