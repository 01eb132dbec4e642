mod about_items;
mod create_about;
mod delete_about;
mod get_abouts;
mod get_active_about;
mod get_single_about;
mod set_active_about;
mod update_about;

pub use about_items::{
    AddAboutItemError, AddAboutItemUseCase, RemoveAboutItemError, RemoveAboutItemUseCase,
};
pub use create_about::{CreateAboutError, CreateAboutUseCase};
pub use delete_about::{DeleteAboutError, DeleteAboutUseCase};
pub use get_abouts::{GetAboutsError, GetAboutsUseCase};
pub use get_active_about::{GetActiveAboutError, GetActiveAboutUseCase};
pub use get_single_about::{GetSingleAboutError, GetSingleAboutUseCase};
pub use set_active_about::{SetActiveAboutError, SetActiveAboutUseCase};
pub use update_about::{UpdateAboutError, UpdateAboutUseCase};
