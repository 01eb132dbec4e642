mod about_items_service;
mod create_about_service;
mod delete_about_service;
mod get_abouts_service;
mod set_active_about_service;
mod update_about_service;

pub use about_items_service::{AddAboutItemService, RemoveAboutItemService};
pub use create_about_service::CreateAboutService;
pub use delete_about_service::DeleteAboutService;
pub use get_abouts_service::{GetAboutsService, GetActiveAboutService, GetSingleAboutService};
pub use set_active_about_service::SetActiveAboutService;
pub use update_about_service::UpdateAboutService;
