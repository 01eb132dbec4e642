mod about_service;
mod contact_service;
mod crud_service;
mod project_service;

pub use about_service::{AboutResource, AboutService};
pub use contact_service::{ContactResource, ContactService};
pub use crud_service::{CrudService, ResourceBacked};
pub use project_service::{ProjectResource, ProjectService};
